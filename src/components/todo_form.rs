//! Todo Form Component
//!
//! Single input shared by create and update. The button label follows the
//! edit mode.

use leptos::prelude::*;

use crate::context::TodoContext;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    let draft = move || ctx.state.with(|state| state.draft_text.clone());
    let label = move || if ctx.state.with(|state| state.is_editing()) { "Update" } else { "Add" };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                class="edit-input"
                type="text"
                prop:value=draft
                on:input=move |ev| ctx.set_draft(event_target_value(&ev))
            />
            <button class="button complete-button" type="submit">{label}</button>
        </form>
    }
}
