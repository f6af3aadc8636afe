//! Todo List Component
//!
//! Renders entries in arrival order.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::TodoContext;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");

    view! {
        <ul class="todo-list">
            <For
                each=move || ctx.state.with(|state| state.items.clone())
                // Text is part of the key so an updated entry re-renders
                key=|todo| (todo.id, todo.text.clone())
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
    }
}
