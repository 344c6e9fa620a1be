//! Note Text Component
//!
//! Renders a note's inline Markdown.

use leptos::prelude::*;

use crate::markdown::render_inline;

#[component]
pub fn NoteText(text: String) -> impl IntoView {
    view! { <span class="note-text" inner_html=render_inline(&text)></span> }
}
