use leptos::prelude::*;
use leptos::task::spawn_local;
use riego_app::error::Action;
use riego_app::notification::Notification;
use riego_app::state::DashboardState;
use riego_domain::history::HistorySeries;

use crate::browser;
use crate::components::use_toasts;
use crate::use_app_context;

const CLEAR_PROMPT: &str = "Delete the whole irrigation history? This cannot be undone.";

/// Download and clear buttons for the stored history.
#[component]
pub fn HistoryActions(
    state: RwSignal<DashboardState>,
    history: RwSignal<HistorySeries>,
) -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();
    let max_points = ctx.settings.chart.max_points;

    let download_service = ctx.service.clone();
    let download = move |_| {
        let service = download_service.clone();
        spawn_local(async move {
            match service.download_history(browser::utc_today()).await {
                Ok(export) => match browser::save_text_file(&export.file_name, &export.contents) {
                    Ok(()) => toasts.push(Notification::completed(Action::DownloadHistory)),
                    Err(err) => {
                        tracing::error!(error = %err, "failed to offer history file");
                        toasts.push(Notification::error(Action::DownloadHistory.failure_message()));
                    }
                },
                Err(err) => toasts.push(Notification::from(&err)),
            }
        });
    };

    let clear_service = ctx.service;
    let clear = move |_| {
        if !browser::confirm(CLEAR_PROMPT) {
            return;
        }
        let service = clear_service.clone();
        spawn_local(async move {
            match service.clear_history(max_points, &chrono::Local).await {
                Ok(cleared) => {
                    if let Some(stats) = cleared.statistics {
                        state.update(|s| s.apply_statistics(stats));
                    }
                    match cleared.history {
                        Some(series) => history.set(series),
                        None => history.update(HistorySeries::clear),
                    }
                    toasts.push(Notification::completed(Action::ClearHistory));
                }
                Err(err) => toasts.push(Notification::from(&err)),
            }
        });
    };

    view! {
        <section class="card history-actions">
            <h2>"History"</h2>
            <button class="btn btn-secondary" on:click=download>"Download CSV"</button>
            <button class="btn btn-danger" on:click=clear>"Clear history"</button>
        </section>
    }
}
