//! Todo Row Component
//!
//! One entry with its Edit and Delete actions.

use leptos::prelude::*;
use todo_sync::Todo;

use crate::context::TodoContext;

/// A single entry in the list
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");

    let id = todo.id;
    let text = todo.text.clone();

    view! {
        <li class="todo-item">
            <button class="button complete-button" on:click=move |_| ctx.begin_edit(todo.clone())>
                "Edit"
            </button>
            <button class="button delete-button" on:click=move |_| ctx.delete(id)>
                "Delete"
            </button>
            <div class="todo-text">{text}</div>
        </li>
    }
}
