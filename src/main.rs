//! Todo Frontend Entry Point

mod backend;
mod commands;
mod context;
mod components;
mod logging;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logging(log::LevelFilter::Info);
    mount_to_body(App);
}
