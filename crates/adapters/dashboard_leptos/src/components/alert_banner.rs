use leptos::prelude::*;

/// Dismissible banner carrying the device's last alert message.
#[component]
pub fn AlertBanner(alert: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || alert.with(Option::is_some)>
            <div class="alert alert-danger" role="alert">
                <strong>"Device alert: "</strong>
                {move || alert.get().unwrap_or_default()}
                <button class="alert-dismiss" on:click=move |_| alert.set(None)>
                    "\u{00D7}"
                </button>
            </div>
        </Show>
    }
}
