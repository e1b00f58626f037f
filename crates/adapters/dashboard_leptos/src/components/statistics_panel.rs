use leptos::prelude::*;
use riego_app::state::DashboardState;
use riego_domain::statistics::Statistics;

use crate::components::{Loading, StatCard};

/// Aggregated figures for the whole recorded history.
#[component]
pub fn StatisticsPanel(state: RwSignal<DashboardState>) -> impl IntoView {
    let statistics = Memo::new(move |_| state.with(|s| s.statistics.clone()));
    let label = move |format: fn(&Statistics) -> String| {
        Signal::derive(move || statistics.with(|stats| stats.as_ref().map(format).unwrap_or_default()))
    };

    view! {
        <section class="card statistics">
            <h2>"Statistics"</h2>
            <Show
                when=move || statistics.with(Option::is_some)
                fallback=|| view! { <Loading message="Loading statistics\u{2026}"/> }
            >
                <div class="stat-grid">
                    <StatCard label="Average humidity" value=label(Statistics::average_humidity_label)/>
                    <StatCard label="Average temperature" value=label(Statistics::average_temperature_label)/>
                    <StatCard label="Irrigation time" value=label(Statistics::irrigation_time_label)/>
                    <StatCard label="Estimated water use" value=label(Statistics::water_use_label)/>
                </div>
            </Show>
        </section>
    }
}
