//! Todo Frontend App
//!
//! Single-page layout: heading, entry form, list.

use leptos::prelude::*;

use crate::backend::BackendConfig;
use crate::components::{TodoForm, TodoList};
use crate::context::TodoContext;

#[component]
pub fn App() -> impl IntoView {
    let config = BackendConfig::detect();
    web_sys::console::log_1(&format!("[APP] Using backend {:?}", config).into());

    let ctx = TodoContext::new(config);
    provide_context(ctx);

    // Load the collection once on mount
    Effect::new(move |_| ctx.initialize());

    view! {
        <div class="container">
            <h1>"To-Do App"</h1>

            <TodoForm />

            <TodoList />

            <p class="item-count">{move || format!("{} items", ctx.state.with(|state| state.items.len()))}</p>
        </div>
    }
}
