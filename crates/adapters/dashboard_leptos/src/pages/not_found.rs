use leptos::prelude::*;

/// Shown for any path other than the dashboard.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The irrigation dashboard lives at the site root."</p>
            <p>
                <a href="/">"Open the dashboard"</a>
            </p>
        </div>
    }
}
