mod common;

use common::{RecordingSurface, assert_close};
use report_pdf::model::{ChartSpec, SectionBody};
use report_pdf::report::{
    AXIS_LABEL_SIZE, CHART_X, Cursor, INLINE_LABEL_SIZE, LEGEND_ROW_HEIGHT, X_LABEL_TARGET,
    Y_LABEL_X, render_chart,
};
use report_pdf::sample_document;
use serde_json::json;

const TOP: f32 = 300.0;
/// Plot area for a chart rendered at `TOP`.
const AREA_Y: f32 = TOP + 30.0;
const AREA_BOTTOM: f32 = AREA_Y + 200.0;

fn chart(value: serde_json::Value) -> ChartSpec {
    serde_json::from_value(value).expect("chart spec")
}

fn render(spec: &ChartSpec) -> (RecordingSurface, Cursor) {
    let mut surface = RecordingSurface::new();
    let end = render_chart(&mut surface, spec, Cursor::at(TOP));
    (surface, end)
}

fn x_labels(surface: &RecordingSurface) -> Vec<String> {
    surface
        .texts()
        .filter(|t| t.size == AXIS_LABEL_SIZE && t.y == AREA_BOTTOM + 5.0)
        .map(|t| t.text.clone())
        .collect()
}

fn series_segments(surface: &RecordingSurface) -> usize {
    surface.lines().iter().filter(|l| l.width == 2.0).count()
}

fn sample_chart() -> ChartSpec {
    let doc = sample_document();
    match &doc.pages[0].sections[1].body {
        SectionBody::Chart(chart) => chart.clone(),
        other => panic!("expected chart, got {other:?}"),
    }
}

#[test]
fn sample_clock_chart_layout() {
    let (surface, end) = render(&sample_chart());

    assert_eq!(end.y(), TOP + 30.0 + 200.0 + 70.0 + 3.0 * LEGEND_ROW_HEIGHT);

    let swatches: Vec<_> = surface
        .rects()
        .into_iter()
        .filter(|r| r.fill.is_some())
        .collect();
    assert_eq!(swatches.len(), 3);
    for (i, swatch) in swatches.iter().enumerate() {
        assert_eq!(swatch.rect.y, AREA_BOTTOM + 45.0 + i as f32 * LEGEND_ROW_HEIGHT);
    }
    assert_eq!(swatches[0].fill.as_deref(), Some("#3498db"));
    assert!(surface.find_text("Code Reviews").is_some());

    let labels = x_labels(&surface);
    assert!(labels.len() <= X_LABEL_TARGET);
    assert_eq!(labels, ["P1", "P3", "P5", "P7", "P9", "P11"]);

    assert_eq!(surface.circles().len(), 36);
    assert_eq!(series_segments(&surface), 33);

    assert!(surface.find_text("Time").is_some());
    assert!(surface.find_text("Data Points").is_some());
    let y_labels: Vec<_> = surface.texts().filter(|t| t.x == Y_LABEL_X).collect();
    assert!(!y_labels.is_empty() && y_labels.len() <= 7);
    assert_eq!(y_labels[0].text, "08:30");
}

#[test]
fn identical_values_sit_mid_axis() {
    let spec = chart(json!({
        "title": "Flat",
        "datasets": [{ "label": "Start", "data": [
            { "timeOfDay": "09:00" }, { "timeOfDay": "09:00" }
        ]}]
    }));
    let (surface, _) = render(&spec);

    let circles = surface.circles();
    assert_eq!(circles.len(), 2);
    for c in &circles {
        assert_close(c.center.y, AREA_Y + 100.0);
    }
    assert_close(circles[0].center.x, CHART_X);
    assert_close(circles[1].center.x, CHART_X + 400.0);
}

#[test]
fn single_point_draws_no_line() {
    let spec = chart(json!({
        "title": "One",
        "datasets": [{ "label": "Only", "color": "red", "data": [{ "timeValue": "12:30" }] }]
    }));
    let (surface, _) = render(&spec);

    let circles = surface.circles();
    assert_eq!(circles.len(), 1);
    assert_close(circles[0].center.x, CHART_X + 200.0);
    assert_close(circles[0].center.y, AREA_Y + 100.0);
    assert_eq!(circles[0].color, "red");
    assert_eq!(series_segments(&surface), 0);
}

#[test]
fn dated_points_use_calendar_axis() {
    let spec = chart(json!({
        "title": "Sales",
        "datasets": [{ "label": "Revenue", "data": [
            { "date": "2024-01-01", "value": 10 },
            { "date": "2024-01-11", "value": 20 }
        ]}]
    }));
    let (surface, _) = render(&spec);

    let circles = surface.circles();
    assert_close(circles[0].center.x, CHART_X);
    assert_close(circles[0].center.y, AREA_Y + 100.0);
    assert_close(circles[1].center.x, CHART_X + 400.0);
    assert_close(circles[1].center.y, AREA_Y);

    let labels = x_labels(&surface);
    assert_eq!(labels.first().map(String::as_str), Some("Jan 01"));
    assert_eq!(labels.last().map(String::as_str), Some("Jan 11"));
    assert!(surface.find_text("Date").is_some());
    assert!(surface.find_text("Value").is_some());
}

#[test]
fn category_labels_replace_indices() {
    let spec = chart(json!({
        "title": "Quarterly",
        "labels": ["Q1", "Q2", "Q3"],
        "datasets": [{ "label": "Units", "data": [1, 2, 3] }]
    }));
    let (surface, _) = render(&spec);

    assert_eq!(x_labels(&surface), ["Q1", "Q2", "Q3"]);
    assert!(surface.find_text("Category").is_some());
    assert!(surface.texts().all(|t| t.size != INLINE_LABEL_SIZE));
}

#[test]
fn every_category_label_is_drawn() {
    let months = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let spec = chart(json!({
        "title": "Monthly",
        "labels": months,
        "datasets": [{ "label": "Units", "data": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12] }]
    }));
    let (surface, _) = render(&spec);

    assert_eq!(x_labels(&surface), months);
}

#[test]
fn shorter_series_ends_before_right_edge() {
    let spec = chart(json!({
        "title": "Ragged",
        "datasets": [
            { "label": "Long", "data": [1, 2, 3] },
            { "label": "Short", "data": [1, 2] }
        ]
    }));
    let (surface, _) = render(&spec);

    let xs: Vec<f32> = surface.circles().iter().map(|c| c.center.x).collect();
    assert_eq!(xs.len(), 5);
    for (x, expected) in xs.iter().zip([0.0, 200.0, 400.0, 0.0, 200.0]) {
        assert_close(*x, CHART_X + expected);
    }
}

#[test]
fn bare_values_get_inline_labels() {
    let spec = chart(json!({
        "title": "Scores",
        "xAxisLabel": "Attempt",
        "datasets": [{ "label": "Score", "color": "#2ecc71", "data": [1.5, 2, 3] }]
    }));
    let (surface, _) = render(&spec);

    let inline: Vec<_> = surface
        .texts()
        .filter(|t| t.size == INLINE_LABEL_SIZE)
        .map(|t| (t.text.as_str(), t.color.as_str()))
        .collect();
    assert_eq!(inline, [("1.5", "#2ecc71"), ("2", "#2ecc71"), ("3", "#2ecc71")]);
    assert!(surface.find_text("Attempt").is_some());
    assert!(surface.find_text("Data Points").is_none());
}

#[test]
fn mismatched_points_are_skipped() {
    let _ = env_logger::try_init();
    let spec = chart(json!({
        "title": "Mixed",
        "datasets": [
            { "label": "Numbers", "data": [4, 8] },
            { "label": "Dates", "data": [{ "date": "2024-02-01", "value": 3 }] },
            { "label": "Broken", "data": [5, { "timeOfDay": "not a time" }] }
        ]
    }));
    let (surface, end) = render(&spec);

    assert_eq!(surface.circles().len(), 3);
    assert_eq!(end.y(), TOP + 30.0 + 200.0 + 70.0 + 3.0 * LEGEND_ROW_HEIGHT);
}

#[test]
fn chart_without_points_draws_frame_and_legend() {
    let spec = chart(json!({
        "title": "Empty",
        "datasets": [{ "label": "Nothing", "data": [] }]
    }));
    let (surface, end) = render(&spec);

    assert!(surface.circles().is_empty());
    assert!(surface.lines().is_empty());
    assert_eq!(surface.rects().len(), 2);
    assert!(surface.find_text("Nothing").is_some());
    assert_eq!(end.y(), TOP + 30.0 + 200.0 + 70.0 + LEGEND_ROW_HEIGHT);
}
