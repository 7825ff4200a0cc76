//! Rolling wellness trend classification.
//!
//! Takes a single-metric `{date, value}` series, bounds it to the last
//! [`TREND_WINDOW`] calendar points, and classifies the most recent value
//! against the window average with a fixed hysteresis band.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::records::{Polarity, WellnessLogEntry, WellnessMetric};

/// Number of most-recent points shown and averaged.
pub const TREND_WINDOW: usize = 7;

/// Dead band around the window average. A most-recent value within
/// `average ± TREND_HYSTERESIS` reads as stable, so noise of half a point
/// does not flap the classification.
pub const TREND_HYSTERESIS: f64 = 0.5;

/// One dated observation of a single wellness metric.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct MetricPoint {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Worsening,
    Stable,
}

/// Bounded display window, its average, and the trend classification.
#[derive(Clone, Debug, Serialize, PartialEq, JsonSchema)]
pub struct TrendSummary {
    /// Input sorted ascending by date, truncated to the last
    /// [`TREND_WINDOW`] points.
    pub window: Vec<MetricPoint>,
    /// Arithmetic mean of the window values, rounded to one decimal for
    /// display. The trend comparison below uses the unrounded mean.
    pub average: f64,
    pub trend: TrendDirection,
}

/// Classify the trend of a single-metric series.
///
/// Callers may supply unordered input; the series is sorted by date before
/// the window is taken. The sort is stable, so of two points sharing a date
/// the one later in input order counts as more recent.
///
/// Empty input is not an error: it yields an empty window, average `0.0`,
/// and [`TrendDirection::Stable`]. A single point is likewise stable, its
/// value being its own average.
pub fn analyze_trend(points: &[MetricPoint], polarity: Polarity) -> TrendSummary {
    let mut window: Vec<MetricPoint> = points.to_vec();
    window.sort_by_key(|p| p.date);
    if window.len() > TREND_WINDOW {
        window.drain(..window.len() - TREND_WINDOW);
    }

    let Some(last) = window.last() else {
        return TrendSummary {
            window,
            average: 0.0,
            trend: TrendDirection::Stable,
        };
    };

    let mean = window.iter().map(|p| p.value).sum::<f64>() / window.len() as f64;
    let diff = last.value - mean;
    let trend = classify(diff, polarity);

    TrendSummary {
        average: round_one_decimal(mean),
        trend,
        window,
    }
}

/// Reduce raw wellness entries to a date-keyed series for one metric.
///
/// Entries without a value for the metric are skipped. When the caller
/// supplies more than one entry for the same date, the later one in input
/// order wins. The result is sorted ascending by date.
pub fn metric_series(entries: &[WellnessLogEntry], metric: WellnessMetric) -> Vec<MetricPoint> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for entry in entries {
        if let Some(value) = entry.metric_value(metric) {
            by_date.insert(entry.log_date, value);
        }
    }
    by_date
        .into_iter()
        .map(|(date, value)| MetricPoint { date, value })
        .collect()
}

fn classify(diff: f64, polarity: Polarity) -> TrendDirection {
    let signed = match polarity {
        Polarity::HigherIsBetter => diff,
        Polarity::LowerIsBetter => -diff,
    };
    if signed > TREND_HYSTERESIS {
        TrendDirection::Improving
    } else if signed < -TREND_HYSTERESIS {
        TrendDirection::Worsening
    } else {
        TrendDirection::Stable
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
