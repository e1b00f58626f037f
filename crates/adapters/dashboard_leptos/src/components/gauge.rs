//! Humidity and temperature gauges.
//!
//! Each gauge is a bar whose width is the reading mapped onto its track;
//! the humidity bar is coloured by its status against the configured
//! thresholds.

use leptos::prelude::*;
use riego_app::state::DashboardState;

#[component]
fn Gauge(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] percent: Signal<f64>,
    #[prop(into)] level_class: Signal<&'static str>,
    #[prop(into)] caption: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="gauge-card">
            <h3>{title}</h3>
            <span class="gauge-value">{move || value.get()}</span>
            <div class="gauge-track">
                <div
                    class=move || format!("gauge-bar {}", level_class.get())
                    style:width=move || format!("{:.1}%", percent.get())
                ></div>
            </div>
            <span class="gauge-caption">{move || caption.get()}</span>
        </div>
    }
}

#[component]
pub fn Gauges(state: RwSignal<DashboardState>) -> impl IntoView {
    let humidity = Memo::new(move |_| state.with(|s| s.reading.humidity));
    let temperature = Memo::new(move |_| state.with(|s| s.reading.temperature));
    let humidity_status = Memo::new(move |_| state.with(DashboardState::humidity_status));
    let temperature_band = Memo::new(move |_| state.with(DashboardState::temperature_band));

    view! {
        <section class="gauges">
            <Gauge
                title="Soil humidity"
                value=Signal::derive(move || format!("{:.1}%", humidity.get()))
                percent=Signal::derive(move || state.with(|s| s.reading.humidity_gauge_percent()))
                level_class=Signal::derive(move || humidity_status.get().css_class())
                caption=Signal::derive(move || humidity_status.get().label())
            />
            <Gauge
                title="Temperature"
                value=Signal::derive(move || format!("{:.1}\u{00B0}C", temperature.get()))
                percent=Signal::derive(move || state.with(|s| s.reading.temperature_gauge_percent()))
                level_class=Signal::derive(|| "level-temperature")
                caption=Signal::derive(move || temperature_band.get().label())
            />
        </section>
    }
}
