//! Toast notifications reporting the outcome of operator actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use riego_app::notification::Notification;

/// A notification currently on screen.
#[derive(Debug, Clone)]
struct ActiveToast {
    /// Unique id for keyed rendering.
    id: u32,
    notification: Notification,
}

/// Reactive context providing toast mutation methods.
#[derive(Clone, Copy)]
pub struct ToastProvider {
    toasts: RwSignal<Vec<ActiveToast>>,
    next_id: StoredValue<u32>,
    dismiss_after_ms: u32,
}

impl ToastProvider {
    /// Show a notification. It is dismissed after the configured delay.
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));

        self.toasts
            .update(|list| list.push(ActiveToast { id, notification }));

        let provider = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(provider.dismiss_after_ms).await;
            provider.dismiss(id);
        });
    }

    /// Dismiss a toast immediately by id.
    pub fn dismiss(&self, id: u32) {
        self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }
}

/// Access the toast provider from Leptos context.
///
/// Must be called within a component tree that has a [`ToastContainer`] ancestor.
pub fn use_toasts() -> ToastProvider {
    use_context::<ToastProvider>().expect("ToastProvider not found in context")
}

/// Container component that provides toast context and renders active toasts.
#[component]
pub fn ToastContainer(dismiss_after_ms: u32, children: Children) -> impl IntoView {
    let provider = ToastProvider {
        toasts: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
        dismiss_after_ms,
    };
    provide_context(provider);

    view! {
        {children()}
        <div class="toast-container">
            <For
                each=move || provider.toasts.get()
                key=|toast| toast.id
                children=move |toast: ActiveToast| {
                    let id = toast.id;
                    let Notification { kind, text } = toast.notification;
                    view! {
                        <div
                            class=format!("toast {}", kind.css_class())
                            on:click=move |_| provider.dismiss(id)
                        >
                            {text}
                        </div>
                    }
                }
            />
        </div>
    }
}
