use leptos::prelude::*;
use leptos::task::spawn_local;
use riego_app::notification::Notification;
use riego_app::state::DashboardState;

use crate::components::use_toasts;
use crate::use_app_context;

/// Pump state and the manual on/off button.
///
/// The local flag only flips once the device has accepted the request.
#[component]
pub fn PumpControl(state: RwSignal<DashboardState>) -> impl IntoView {
    let service = use_app_context().service;
    let toasts = use_toasts();
    let pump_on = Memo::new(move |_| state.with(|s| s.reading.pump_on));

    let toggle = move |_| {
        let service = service.clone();
        let currently_on = pump_on.get_untracked();
        spawn_local(async move {
            match service.toggle_pump(currently_on).await {
                Ok(on) => {
                    state.update(|s| s.set_pump(on));
                    toasts.push(Notification::pump_switched(on));
                }
                Err(err) => toasts.push(Notification::from(&err)),
            }
        });
    };

    view! {
        <section class="card pump-control">
            <h2>"Pump"</h2>
            <p class=move || if pump_on.get() { "pump-state pump-on" } else { "pump-state pump-off" }>
                {move || if pump_on.get() { "\u{1F4A7} Running" } else { "\u{23F8} Stopped" }}
            </p>
            <button
                class=move || if pump_on.get() { "btn btn-danger" } else { "btn btn-primary" }
                on:click=toggle
            >
                {move || if pump_on.get() { "Turn off" } else { "Turn on" }}
            </button>
        </section>
    }
}
