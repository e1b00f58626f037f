//! Line charts drawn on a `<canvas>` with plotters.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;

/// Fixed visual configuration of one chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartSpec {
    pub caption: &'static str,
    pub y_label: &'static str,
    pub y_max: f64,
    pub colour: RGBColor,
}

pub const HUMIDITY: ChartSpec = ChartSpec {
    caption: "Humidity",
    y_label: "Humidity (%)",
    y_max: 100.0,
    colour: RGBColor(46, 204, 113),
};

pub const TEMPERATURE: ChartSpec = ChartSpec {
    caption: "Temperature",
    y_label: "Temperature (\u{00B0}C)",
    y_max: 50.0,
    colour: RGBColor(52, 152, 219),
};

const X_LABELS: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("canvas is not available for drawing")]
    Canvas,
    #[error("failed to draw chart: {0}")]
    Draw(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for ChartError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Draw(err.to_string())
    }
}

/// Last x coordinate for `len` points; never zero so the axis has a width.
fn x_end(len: usize) -> usize {
    len.saturating_sub(1).max(1)
}

/// Tick text for the point at `index`; empty past the end.
fn tick_label(labels: &[String], index: usize) -> String {
    labels.get(index).cloned().unwrap_or_default()
}

/// Redraw `canvas` with `values`, labelling the x axis from `labels`.
///
/// # Errors
///
/// Returns [`ChartError::Canvas`] when no 2D context can be obtained and
/// [`ChartError::Draw`] when plotters fails.
pub fn draw(
    canvas: HtmlCanvasElement,
    spec: &ChartSpec,
    labels: &[String],
    values: &[f64],
) -> Result<(), ChartError> {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or(ChartError::Canvas)?;
    let root = backend.into_drawing_area();
    render(&root, spec, labels, values)?;
    root.present()?;
    Ok(())
}

fn render<DB>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    labels: &[String],
    values: &[f64],
) -> Result<(), ChartError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(spec.caption, ("sans-serif", 16))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0..x_end(values.len()), 0.0..spec.y_max)?;

    chart
        .configure_mesh()
        .x_desc("Time")
        .y_desc(spec.y_label)
        .x_labels(X_LABELS)
        .x_label_formatter(&|index| tick_label(labels, *index))
        .draw()?;

    chart.draw_series(
        AreaSeries::new(values.iter().copied().enumerate(), 0.0, spec.colour.mix(0.2))
            .border_style(spec.colour.stroke_width(2)),
    )?;
    chart.draw_series(
        values
            .iter()
            .copied()
            .enumerate()
            .map(|(index, value)| Circle::new((index, value), 3, spec.colour.filled())),
    )?;
    Ok(())
}
