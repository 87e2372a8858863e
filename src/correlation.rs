//! Popularity-vs-quality correlation
//!
//! Pearson correlation between average owners and positive rate across a
//! record set, classified against a fixed threshold. A coefficient below
//! the threshold confirms the paradox: owning numbers and rating quality
//! are not meaningfully linked.

use crate::dataset::Record;
use crate::error::{ParadoxError, Result};

/// Coefficient below which the paradox is considered confirmed. A design
/// constant, not user-configurable.
pub const PARADOX_THRESHOLD: f64 = 0.2;

/// Classification of a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Popularity and quality are not meaningfully linked (r < 0.2)
    ParadoxConfirmed,
    /// Popularity and quality move together (r >= 0.2)
    PositiveRelationship,
}

/// Result of a correlation analysis
#[derive(Debug, Clone, Copy)]
pub struct Correlation {
    pub coefficient: f64,
    pub verdict: Verdict,
}

/// Pearson correlation between average_owners and positive_rate.
///
/// Returns `NotComputable` for fewer than two records or when either
/// variable has zero variance; it never substitutes a silent zero.
pub fn correlation(records: &[Record]) -> Result<Correlation> {
    if records.len() < 2 {
        return Err(ParadoxError::NotComputable(format!(
            "need at least 2 records, got {}",
            records.len()
        )));
    }

    let n = records.len() as f64;
    let mean_x = records.iter().map(|r| r.average_owners).sum::<f64>() / n;
    let mean_y = records.iter().map(|r| r.positive_rate).sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for r in records {
        let dx = r.average_owners - mean_x;
        let dy = r.positive_rate - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return Err(ParadoxError::NotComputable(
            "zero variance in one of the variables".to_string(),
        ));
    }

    let coefficient = sxy / (sxx.sqrt() * syy.sqrt());
    let verdict = if coefficient < PARADOX_THRESHOLD {
        Verdict::ParadoxConfirmed
    } else {
        Verdict::PositiveRelationship
    };

    Ok(Correlation {
        coefficient,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(owners: f64, rate: f64) -> Record {
        Record {
            name: String::new(),
            average_owners: owners,
            positive_ratings: 150,
            negative_ratings: 50,
            total_ratings: 200,
            positive_rate: rate,
            genres: String::new(),
        }
    }

    #[test]
    fn test_perfect_positive_correlation() {
        let records = vec![rec(1000.0, 10.0), rec(2000.0, 20.0), rec(3000.0, 30.0)];
        let c = correlation(&records).unwrap();
        assert!((c.coefficient - 1.0).abs() < 1e-9);
        assert_eq!(c.verdict, Verdict::PositiveRelationship);
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let records = vec![rec(1000.0, 90.0), rec(2000.0, 50.0), rec(3000.0, 10.0)];
        let c = correlation(&records).unwrap();
        assert!((c.coefficient + 1.0).abs() < 1e-9);
        assert_eq!(c.verdict, Verdict::ParadoxConfirmed);
    }

    #[test]
    fn test_single_record_not_computable() {
        let err = correlation(&[rec(1000.0, 50.0)]).unwrap_err();
        assert!(matches!(err, ParadoxError::NotComputable(_)));
    }

    #[test]
    fn test_empty_set_not_computable() {
        assert!(matches!(
            correlation(&[]).unwrap_err(),
            ParadoxError::NotComputable(_)
        ));
    }

    #[test]
    fn test_zero_variance_not_computable() {
        // Two records with identical owner counts: no variance in x
        let records = vec![rec(5000.0, 20.0), rec(5000.0, 80.0)];
        assert!(matches!(
            correlation(&records).unwrap_err(),
            ParadoxError::NotComputable(_)
        ));
    }

    #[test]
    fn test_weak_correlation_confirms_paradox() {
        // Rates bounce around with no relation to owners
        let records = vec![
            rec(1000.0, 70.0),
            rec(2000.0, 30.0),
            rec(3000.0, 75.0),
            rec(4000.0, 25.0),
            rec(5000.0, 72.0),
        ];
        let c = correlation(&records).unwrap();
        assert!(c.coefficient < PARADOX_THRESHOLD);
        assert_eq!(c.verdict, Verdict::ParadoxConfirmed);
    }
}
