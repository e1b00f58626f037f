//! Humidity and temperature history charts.
//!
//! The series is refreshed from the device's CSV export on mount and then
//! on every history tick; a failed fetch leaves the charts as they are.

use chrono::Local;
use leptos::html::Canvas;
use leptos::prelude::*;
use leptos::task::spawn_local;
use riego_domain::history::HistorySeries;

use crate::chart::{self, ChartSpec};
use crate::polling::use_interval;
use crate::use_app_context;

const CANVAS_WIDTH: &str = "640";
const CANVAS_HEIGHT: &str = "300";

fn redraw(node: NodeRef<Canvas>, spec: &ChartSpec, labels: &[String], values: &[f64]) {
    let Some(canvas) = node.get() else {
        return;
    };
    if let Err(err) = chart::draw(canvas, spec, labels, values) {
        tracing::warn!(chart = spec.caption, error = %err, "failed to draw chart");
    }
}

#[component]
pub fn HistoryCharts(history: RwSignal<HistorySeries>) -> impl IntoView {
    let ctx = use_app_context();
    let max_points = ctx.settings.chart.max_points;
    let service = ctx.service;

    use_interval(ctx.settings.polling.history_interval_ms, move || {
        let service = service.clone();
        spawn_local(async move {
            if let Ok(series) = service.load_history(max_points, &Local).await {
                history.set(series);
            }
        });
    });

    let humidity_canvas = NodeRef::<Canvas>::new();
    let temperature_canvas = NodeRef::<Canvas>::new();

    Effect::new(move |_| {
        history.with(|series| {
            let labels = series.labels();
            redraw(humidity_canvas, &chart::HUMIDITY, &labels, &series.humidity());
            redraw(temperature_canvas, &chart::TEMPERATURE, &labels, &series.temperature());
        });
    });

    view! {
        <section class="card charts">
            <h2>"History"</h2>
            <Show when=move || history.with(HistorySeries::is_empty)>
                <p class="chart-empty"><em>"No history recorded yet."</em></p>
            </Show>
            <div class="chart">
                <canvas node_ref=humidity_canvas width=CANVAS_WIDTH height=CANVAS_HEIGHT></canvas>
            </div>
            <div class="chart">
                <canvas node_ref=temperature_canvas width=CANVAS_WIDTH height=CANVAS_HEIGHT></canvas>
            </div>
        </section>
    }
}
