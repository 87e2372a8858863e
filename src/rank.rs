//! Top/bottom-N ranking within a record set

use crate::dataset::Record;
use clap::ValueEnum;
use std::fmt;

/// Metric a ranking is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    /// Midpoint of the owners band
    AverageOwners,
    /// Percentage of positive ratings
    PositiveRate,
}

impl Metric {
    pub fn value(&self, record: &Record) -> f64 {
        match self {
            Metric::AverageOwners => record.average_owners,
            Metric::PositiveRate => record.positive_rate,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::AverageOwners => write!(f, "average owners"),
            Metric::PositiveRate => write!(f, "positive rate"),
        }
    }
}

/// Whether to keep the largest or smallest values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RankDirection {
    Top,
    Bottom,
}

/// Select the N records with the largest (or smallest) value of the metric.
///
/// Selection is stable: ties keep their input order, so the first-seen
/// record wins a contested last slot. The result is always sorted ascending
/// by the metric, whichever direction was selected - the rendering
/// convention puts the largest value at one end of a horizontal bar list,
/// and that final order is part of the contract. Fewer than N eligible
/// records returns all of them.
pub fn rank(records: &[Record], metric: Metric, n: usize, direction: RankDirection) -> Vec<Record> {
    let mut selected: Vec<&Record> = records.iter().collect();

    // Stable sort, so equal metric values stay in input order
    match direction {
        RankDirection::Top => {
            selected.sort_by(|a, b| metric.value(b).total_cmp(&metric.value(a)))
        }
        RankDirection::Bottom => {
            selected.sort_by(|a, b| metric.value(a).total_cmp(&metric.value(b)))
        }
    }
    selected.truncate(n);

    selected.sort_by(|a, b| metric.value(a).total_cmp(&metric.value(b)));
    selected.into_iter().cloned().collect()
}
