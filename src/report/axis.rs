//! Axis-mapping strategies for charts.
//!
//! An [`AxisScale`] maps a domain value (point index, minutes since midnight,
//! days since the common era, or a plain number) to a normalized position in
//! `[0, 1]` along its axis, and produces the tick labels for that axis.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Normalized position used when every value in a domain is identical.
pub const DEGENERATE_POSITION: f32 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis in `[0, 1]`.
    pub position: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AxisScale {
    /// Point index `0..count`, labelled `P1..Pn` unless categories are given.
    Ordinal {
        count: usize,
        labels: Option<Vec<String>>,
    },
    /// Minutes since midnight.
    Clock { min: f64, max: f64 },
    /// Days since the common era.
    Calendar { min: f64, max: f64 },
    Linear { min: f64, max: f64 },
}

fn bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Stride that keeps at most `max_labels` of `count` indexed labels.
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 {
        return count.max(1);
    }
    count.div_ceil(max_labels).max(1)
}

/// Parse `HH:MM` or `HH:MM:SS` into minutes since midnight.
pub fn parse_clock(text: &str) -> Option<f64> {
    let text = text.trim();
    let time = NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .ok()?;
    Some(f64::from(time.hour() * 60 + time.minute()) + f64::from(time.second()) / 60.0)
}

pub fn format_clock(minutes: f64) -> String {
    let total = minutes.round() as i64;
    format!("{:02}:{:02}", total.div_euclid(60), total.rem_euclid(60))
}

/// Parse a `YYYY-MM-DD` date (a trailing time part is ignored) into days
/// since the common era.
pub fn parse_date(text: &str) -> Option<f64> {
    let text = text.trim();
    let day_part = text.get(..10).unwrap_or(text);
    let date = NaiveDate::parse_from_str(day_part, "%Y-%m-%d").ok()?;
    Some(f64::from(date.num_days_from_ce()))
}

fn date_from_days(days: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.round() as i32)
}

pub fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let s = format!("{value:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn normalize_between(value: f64, min: f64, max: f64) -> f32 {
    let span = max - min;
    if span.abs() <= f64::EPSILON {
        DEGENERATE_POSITION
    } else {
        ((value - min) / span) as f32
    }
}

/// Evenly spaced values from `min`, at most `max_ticks` of them, never past
/// `max`. `whole_steps` rounds the step up to an integer (minutes, days).
fn stepped_values(min: f64, max: f64, max_ticks: usize, whole_steps: bool) -> Vec<f64> {
    let span = max - min;
    if span.abs() <= f64::EPSILON || max_ticks < 2 {
        return vec![min];
    }
    let intervals = (max_ticks - 1) as f64;
    let step = if whole_steps {
        (span / intervals).ceil()
    } else {
        span / intervals
    };
    (0..max_ticks)
        .map(|i| min + i as f64 * step)
        .take_while(|v| *v <= max + span * 1e-9)
        .collect()
}

impl AxisScale {
    pub fn ordinal(count: usize, labels: Option<Vec<String>>) -> Self {
        AxisScale::Ordinal { count, labels }
    }

    pub fn clock(minutes: impl IntoIterator<Item = f64>) -> Option<Self> {
        let (min, max) = bounds(minutes)?;
        Some(AxisScale::Clock { min, max })
    }

    pub fn calendar(days: impl IntoIterator<Item = f64>) -> Option<Self> {
        let (min, max) = bounds(days)?;
        Some(AxisScale::Calendar { min, max })
    }

    /// Value range, anchored at zero when no value is negative.
    pub fn linear(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let (lo, max) = bounds(values)?;
        let min = if lo >= 0.0 { 0.0 } else { lo };
        Some(AxisScale::Linear { min, max })
    }

    fn domain(&self) -> (f64, f64) {
        match self {
            AxisScale::Ordinal { count, .. } => (0.0, count.saturating_sub(1) as f64),
            AxisScale::Clock { min, max }
            | AxisScale::Calendar { min, max }
            | AxisScale::Linear { min, max } => (*min, *max),
        }
    }

    /// Map a domain value to `[0, 1]`. A zero-width domain maps everything to
    /// [`DEGENERATE_POSITION`].
    pub fn normalize(&self, value: f64) -> f32 {
        let (min, max) = self.domain();
        normalize_between(value, min, max)
    }

    /// Axis ticks, at most `max_ticks` of them. Explicit ordinal labels are
    /// never thinned.
    pub fn ticks(&self, max_ticks: usize) -> Vec<Tick> {
        match self {
            AxisScale::Ordinal { count, labels } => {
                // caller-supplied categories are all shown
                let stride = match labels {
                    Some(_) => 1,
                    None => label_stride(*count, max_ticks),
                };
                (0..*count)
                    .step_by(stride)
                    .map(|i| Tick {
                        position: self.normalize(i as f64),
                        label: labels
                            .as_ref()
                            .and_then(|l| l.get(i))
                            .cloned()
                            .unwrap_or_else(|| format!("P{}", i + 1)),
                    })
                    .collect()
            }
            AxisScale::Clock { min, max } => stepped_values(*min, *max, max_ticks, true)
                .into_iter()
                .map(|v| Tick {
                    position: self.normalize(v),
                    label: format_clock(v),
                })
                .collect(),
            AxisScale::Calendar { min, max } => {
                let same_year = match (date_from_days(*min), date_from_days(*max)) {
                    (Some(a), Some(b)) => a.year() == b.year(),
                    _ => false,
                };
                let pattern = if same_year { "%b %d" } else { "%Y-%m-%d" };
                stepped_values(*min, *max, max_ticks, true)
                    .into_iter()
                    .filter_map(|v| {
                        let date = date_from_days(v)?;
                        Some(Tick {
                            position: self.normalize(v),
                            label: date.format(pattern).to_string(),
                        })
                    })
                    .collect()
            }
            AxisScale::Linear { min, max } => stepped_values(*min, *max, max_ticks, false)
                .into_iter()
                .map(|v| Tick {
                    position: self.normalize(v),
                    label: format_value(v),
                })
                .collect(),
        }
    }

    /// Default axis caption.
    pub fn title(&self) -> &'static str {
        match self {
            AxisScale::Ordinal {
                labels: Some(_), ..
            } => "Category",
            AxisScale::Ordinal { .. } => "Data Points",
            AxisScale::Clock { .. } => "Time",
            AxisScale::Calendar { .. } => "Date",
            AxisScale::Linear { .. } => "Value",
        }
    }
}
