use crate::model::{ChartSpec, DataPoint, Dataset};
use crate::surface::{BLACK, Paint, Point, Rect, Stroke, Surface, TextStyle};

use super::axis::{AxisScale, format_value, parse_clock, parse_date};
use super::{BODY_SIZE, Cursor};

pub const CHART_X: f32 = 50.0;
pub const CHART_WIDTH: f32 = 400.0;
pub const CHART_HEIGHT: f32 = 200.0;
pub const CHART_TITLE_CLEARANCE: f32 = 30.0;
/// Space below the plot area reserved for axis labels and the legend, on top
/// of one [`LEGEND_ROW_HEIGHT`] per dataset.
pub const CHART_FOOTPRINT: f32 = 70.0;
pub const LEGEND_OFFSET: f32 = 45.0;
pub const LEGEND_ROW_HEIGHT: f32 = 15.0;
pub const LEGEND_SWATCH: f32 = 10.0;
pub const AXIS_LABEL_SIZE: f32 = 8.0;
pub const INLINE_LABEL_SIZE: f32 = 7.0;
pub const Y_LABEL_X: f32 = 15.0;
pub const Y_TICK_INTERVALS: usize = 6;
/// Upper bound on generated `P1..Pn` x-axis labels, whatever the point count.
pub const X_LABEL_TARGET: usize = 8;
const TITLE_SIZE: f32 = 12.0;
const TICK_LENGTH: f32 = 5.0;
const TICK_COLOR: &str = "#cccccc";
const SERIES_WIDTH: f32 = 2.0;
const POINT_RADIUS: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PointShape {
    TimeOfDay,
    Indexed,
    Dated,
}

impl PointShape {
    fn of(point: &DataPoint) -> Self {
        match point {
            DataPoint::TimeOfDay { .. } => PointShape::TimeOfDay,
            DataPoint::Value(_) => PointShape::Indexed,
            DataPoint::Dated { .. } => PointShape::Dated,
        }
    }
}

struct PlotPoint {
    x: f64,
    y: f64,
    label: Option<String>,
}

/// Domain-mapped series ready for projection into the plot area.
struct Plot {
    x: AxisScale,
    y: AxisScale,
    series: Vec<Vec<PlotPoint>>,
}

impl Plot {
    /// The first point found decides the chart variant; points of another
    /// shape, or with unparseable times/dates, are left out.
    fn build(chart: &ChartSpec) -> Option<Plot> {
        let shape = chart
            .datasets
            .iter()
            .flat_map(|d| d.points.first())
            .map(PointShape::of)
            .next()?;
        let inline_labels = shape == PointShape::Indexed && chart.labels.is_none();

        let series: Vec<Vec<PlotPoint>> = chart
            .datasets
            .iter()
            .map(|dataset| plot_points(dataset, shape, inline_labels))
            .collect();

        let ys = || series.iter().flatten().map(|p| p.y);
        let point_count = chart.datasets.iter().map(|d| d.points.len()).max().unwrap_or(0);

        let (x, y) = match shape {
            PointShape::TimeOfDay => (
                AxisScale::ordinal(point_count, None),
                AxisScale::clock(ys())?,
            ),
            PointShape::Indexed => (
                AxisScale::ordinal(point_count, chart.labels.clone()),
                AxisScale::linear(ys())?,
            ),
            PointShape::Dated => (
                AxisScale::calendar(series.iter().flatten().map(|p| p.x))?,
                AxisScale::linear(ys())?,
            ),
        };

        Some(Plot { x, y, series })
    }
}

fn plot_points(dataset: &Dataset, shape: PointShape, inline_labels: bool) -> Vec<PlotPoint> {
    let mut skipped = 0usize;
    let points: Vec<PlotPoint> = dataset
        .points
        .iter()
        .enumerate()
        .filter_map(|(idx, point)| {
            let mapped = match (shape, point) {
                (PointShape::TimeOfDay, DataPoint::TimeOfDay { time }) => {
                    parse_clock(time).map(|minutes| PlotPoint {
                        x: idx as f64,
                        y: minutes,
                        label: None,
                    })
                }
                (PointShape::Indexed, DataPoint::Value(value)) => Some(PlotPoint {
                    x: idx as f64,
                    y: *value,
                    label: inline_labels.then(|| format_value(*value)),
                }),
                (PointShape::Dated, DataPoint::Dated { date, value }) => {
                    parse_date(date).map(|days| PlotPoint {
                        x: days,
                        y: *value,
                        label: None,
                    })
                }
                _ => None,
            };
            if mapped.is_none() {
                skipped += 1;
            }
            mapped
        })
        .collect();

    if skipped > 0 {
        log::warn!(
            "Chart series {:?}: {skipped} point(s) skipped (unparseable or not {shape:?})",
            dataset.label
        );
    }
    points
}

fn project(area: Rect, nx: f32, ny: f32) -> Point {
    Point::new(
        area.x + nx * area.width,
        area.y + area.height - ny * area.height,
    )
}

fn draw_series<S: Surface + ?Sized>(
    surface: &mut S,
    plot: &Plot,
    datasets: &[Dataset],
    area: Rect,
) {
    for (dataset, points) in datasets.iter().zip(&plot.series) {
        let color = dataset.color.as_str();
        let mut prev: Option<Point> = None;
        for point in points {
            let at = project(area, plot.x.normalize(point.x), plot.y.normalize(point.y));
            if let Some(from) = prev {
                surface.draw_line(from, at, Stroke::new(color, SERIES_WIDTH));
            }
            surface.fill_circle(at, POINT_RADIUS, color);
            if let Some(label) = &point.label {
                surface.draw_text(
                    label,
                    Point::new(at.x + 3.0, at.y - 10.0),
                    &TextStyle::sized(INLINE_LABEL_SIZE).colored(color),
                );
            }
            prev = Some(at);
        }
    }
}

fn draw_axes<S: Surface + ?Sized>(surface: &mut S, plot: &Plot, chart: &ChartSpec, area: Rect) {
    let label_style = TextStyle::sized(AXIS_LABEL_SIZE);
    let tick_stroke = Stroke::new(TICK_COLOR, 1.0);

    for tick in plot.y.ticks(Y_TICK_INTERVALS + 1) {
        let y = project(area, 0.0, tick.position).y;
        surface.draw_text(&tick.label, Point::new(Y_LABEL_X, y - 3.0), &label_style);
        surface.draw_line(
            Point::new(area.x - TICK_LENGTH, y),
            Point::new(area.x, y),
            tick_stroke,
        );
    }

    for tick in plot.x.ticks(X_LABEL_TARGET) {
        let x = project(area, tick.position, 0.0).x;
        surface.draw_text(
            &tick.label,
            Point::new(x - 8.0, area.bottom() + 5.0),
            &label_style,
        );
        surface.draw_line(
            Point::new(x, area.bottom()),
            Point::new(x, area.bottom() + TICK_LENGTH / 2.0),
            tick_stroke,
        );
    }

    let caption = TextStyle::sized(BODY_SIZE);
    let y_title = chart.y_axis_label.as_deref().unwrap_or(plot.y.title());
    let x_title = chart.x_axis_label.as_deref().unwrap_or(plot.x.title());
    surface.draw_text(
        y_title,
        Point::new(10.0, area.y + area.height / 2.0 - 10.0),
        &caption,
    );
    surface.draw_text(
        x_title,
        Point::new(area.x + area.width / 2.0 - 30.0, area.bottom() + 25.0),
        &caption,
    );
}

fn draw_legend<S: Surface + ?Sized>(surface: &mut S, datasets: &[Dataset], area: Rect) {
    let style = TextStyle::sized(BODY_SIZE);
    for (idx, dataset) in datasets.iter().enumerate() {
        let y = area.bottom() + LEGEND_OFFSET + idx as f32 * LEGEND_ROW_HEIGHT;
        surface.draw_rect(
            Rect::new(area.x, y, LEGEND_SWATCH, LEGEND_SWATCH),
            Paint::Fill(&dataset.color),
        );
        surface.draw_text(
            &dataset.label,
            Point::new(area.x + LEGEND_SWATCH + 10.0, y + 2.0),
            &style,
        );
    }
}

/// Multi-series line chart with axis labels and a legend below the plot.
pub fn render_chart<S: Surface + ?Sized>(
    surface: &mut S,
    chart: &ChartSpec,
    cursor: Cursor,
) -> Cursor {
    surface.draw_text(
        &chart.title,
        Point::new(CHART_X, cursor.y()),
        &TextStyle::sized(TITLE_SIZE),
    );
    let top = cursor.advance(CHART_TITLE_CLEARANCE);

    let area = Rect::new(CHART_X, top.y(), CHART_WIDTH, CHART_HEIGHT);
    surface.draw_rect(area, Paint::Stroke(Stroke::new(BLACK, 1.0)));

    match Plot::build(chart) {
        Some(plot) => {
            draw_series(surface, &plot, &chart.datasets, area);
            draw_axes(surface, &plot, chart, area);
        }
        None => log::debug!("Chart {:?} has no plottable points", chart.title),
    }

    draw_legend(surface, &chart.datasets, area);

    top.advance(
        CHART_HEIGHT + CHART_FOOTPRINT + chart.datasets.len() as f32 * LEGEND_ROW_HEIGHT,
    )
}
