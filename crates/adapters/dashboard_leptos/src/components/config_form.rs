//! Configuration form.
//!
//! Inputs hold raw text; nothing is parsed until submit. A reload of the
//! configuration (initial load or successful save) resets the inputs.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use riego_app::error::{Action, ActionError};
use riego_app::notification::Notification;
use riego_app::state::DashboardState;
use riego_domain::config::ConfigDraft;

use crate::components::use_toasts;
use crate::use_app_context;

#[component]
pub fn ConfigForm(state: RwSignal<DashboardState>) -> impl IntoView {
    let service = use_app_context().service;
    let toasts = use_toasts();

    let config = Memo::new(move |_| state.with(|s| s.config.clone()));
    let low = RwSignal::new(String::new());
    let high = RwSignal::new(String::new());
    let interval = RwSignal::new(String::new());
    let automatic = RwSignal::new(true);
    let first = RwSignal::new(String::new());
    let second = RwSignal::new(String::new());

    Effect::new(move |_| {
        let draft = config.with(ConfigDraft::from);
        low.set(draft.low_humidity_threshold);
        high.set(draft.high_humidity_threshold);
        interval.set(draft.irrigation_interval);
        automatic.set(draft.automatic_mode);
        first.set(draft.first_irrigation);
        second.set(draft.second_irrigation);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ConfigDraft {
            low_humidity_threshold: low.get_untracked(),
            high_humidity_threshold: high.get_untracked(),
            irrigation_interval: interval.get_untracked(),
            automatic_mode: automatic.get_untracked(),
            first_irrigation: first.get_untracked(),
            second_irrigation: second.get_untracked(),
        };
        let parsed = match draft.parse() {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(error = %err, "configuration form rejected");
                toasts.push(Notification::from(&ActionError::from(err)));
                return;
            }
        };
        let service = service.clone();
        spawn_local(async move {
            match service.save_config(parsed).await {
                Ok(saved) => {
                    state.update(|s| s.apply_config(saved));
                    toasts.push(Notification::completed(Action::SaveConfig));
                }
                Err(err) => toasts.push(Notification::from(&err)),
            }
        });
    };

    view! {
        <section class="card config">
            <h2>"Configuration"</h2>
            <form on:submit=on_submit>
                <label>
                    "Low humidity threshold (%)"
                    <input type="number" min="0" max="100" bind:value=low/>
                </label>
                <label>
                    "High humidity threshold (%)"
                    <input type="number" min="0" max="100" bind:value=high/>
                </label>
                <label>
                    "Irrigation interval (min)"
                    <input type="number" min="1" bind:value=interval/>
                </label>
                <label class="checkbox">
                    <input type="checkbox" bind:checked=automatic/>
                    "Automatic mode"
                </label>
                <label>
                    "First irrigation"
                    <input type="time" bind:value=first/>
                </label>
                <label>
                    "Second irrigation"
                    <input type="time" bind:value=second/>
                </label>
                <button type="submit" class="btn btn-primary">"Save"</button>
            </form>
        </section>
    }
}
