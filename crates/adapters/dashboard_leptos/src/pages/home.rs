//! The single dashboard page.
//!
//! Owns the page-session state and the reading poll; each card reads the
//! slice of state it renders.

use leptos::prelude::*;
use leptos::task::spawn_local;
use riego_app::state::DashboardState;
use riego_domain::history::HistorySeries;

use crate::browser;
use crate::components::{
    AlertBanner, ConfigForm, Gauges, Header, HistoryActions, HistoryCharts, PumpControl,
    ScheduleCard, StatisticsPanel,
};
use crate::polling::use_interval;
use crate::use_app_context;

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(DashboardState::default());
    let history = RwSignal::new(HistorySeries::with_capacity(ctx.settings.chart.max_points));
    let alert = RwSignal::new(None::<String>);

    let service = ctx.service.clone();
    spawn_local(async move {
        if let Ok(config) = service.load_config().await {
            state.update(|s| s.apply_config(config));
        }
    });
    let service = ctx.service.clone();
    spawn_local(async move {
        if let Ok(stats) = service.load_statistics().await {
            state.update(|s| s.apply_statistics(stats));
        }
    });

    let service = ctx.service;
    use_interval(ctx.settings.polling.reading_interval_ms, move || {
        let service = service.clone();
        spawn_local(async move {
            match service.poll_reading().await {
                Ok(reading) => {
                    if let Some(message) = reading.active_alert() {
                        alert.set(Some(message.to_string()));
                    }
                    state.update(|s| s.apply_reading(reading, browser::local_now()));
                }
                Err(_) => state.update(DashboardState::mark_disconnected),
            }
        });
    });

    view! {
        <div class="dashboard">
            <Header state=state/>
            <AlertBanner alert=alert/>
            <Gauges state=state/>
            <div class="dashboard-grid">
                <PumpControl state=state/>
                <ScheduleCard state=state/>
                <StatisticsPanel state=state/>
                <HistoryActions state=state history=history/>
            </div>
            <ConfigForm state=state/>
            <HistoryCharts history=history/>
        </div>
    }
}
