//! Stat card component for displaying a labelled value.

use leptos::prelude::*;

/// A card displaying a label and a formatted value.
#[component]
pub fn StatCard(
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// The formatted value to display.
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value">{move || value.get()}</span>
        </div>
    }
}
