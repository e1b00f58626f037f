//! Placeholder shown until the first response arrives.

use leptos::prelude::*;

/// A spinner with a short message.
#[component]
pub fn Loading(
    /// Text shown next to the spinner.
    #[prop(default = "Loading\u{2026}", into)]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="loading" aria-busy="true">
            <span class="spinner"></span>
            <span>{message}</span>
        </div>
    }
}
