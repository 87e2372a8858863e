//! Ownership-band segmentation

use crate::dataset::Record;

/// Lower bound of the Mainstream segment (average owners)
pub const MAINSTREAM_FLOOR: f64 = 200_000.0;

/// Lower bound of the Niche segment (average owners)
pub const NICHE_FLOOR: f64 = 50_000.0;

/// The three ownership segments. Together they partition the input:
/// every record lands in exactly one of them.
#[derive(Debug, Clone, Default)]
pub struct Segments {
    /// average_owners >= 200k
    pub mainstream: Vec<Record>,
    /// 50k <= average_owners < 200k
    pub niche: Vec<Record>,
    /// average_owners < 50k, including games with an unparseable owners band
    pub hidden_gems: Vec<Record>,
}

impl Segments {
    pub fn total(&self) -> usize {
        self.mainstream.len() + self.niche.len() + self.hidden_gems.len()
    }
}

/// Split a reliable record set into the three ownership segments.
///
/// The input must already have passed the reliability floor; the source
/// applied a second `total_ratings > 100` check inside the Hidden Gems
/// branch, which is idempotent and collapsed into the single upstream
/// filter here.
pub fn segment(records: &[Record]) -> Segments {
    let mut segments = Segments::default();

    for record in records {
        if record.average_owners >= MAINSTREAM_FLOOR {
            segments.mainstream.push(record.clone());
        } else if record.average_owners >= NICHE_FLOOR {
            segments.niche.push(record.clone());
        } else {
            segments.hidden_gems.push(record.clone());
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, owners: f64) -> Record {
        Record {
            name: name.to_string(),
            average_owners: owners,
            positive_ratings: 150,
            negative_ratings: 50,
            total_ratings: 200,
            positive_rate: 75.0,
            genres: String::new(),
        }
    }

    #[test]
    fn test_segment_bounds() {
        let records = vec![
            rec("huge", 750_000.0),
            rec("mid", 100_000.0),
            rec("small", 10_000.0),
        ];
        let s = segment(&records);
        assert_eq!(s.mainstream.len(), 1);
        assert_eq!(s.mainstream[0].name, "huge");
        assert_eq!(s.niche.len(), 1);
        assert_eq!(s.niche[0].name, "mid");
        assert_eq!(s.hidden_gems.len(), 1);
        assert_eq!(s.hidden_gems[0].name, "small");
    }

    #[test]
    fn test_boundary_values() {
        // Exactly 200k is Mainstream, exactly 50k is Niche
        let s = segment(&[rec("at-mainstream", 200_000.0), rec("at-niche", 50_000.0)]);
        assert_eq!(s.mainstream.len(), 1);
        assert_eq!(s.mainstream[0].name, "at-mainstream");
        assert_eq!(s.niche.len(), 1);
        assert_eq!(s.niche[0].name, "at-niche");
        assert!(s.hidden_gems.is_empty());
    }

    #[test]
    fn test_zero_sentinel_lands_in_hidden_gems() {
        let s = segment(&[rec("unknown-owners", 0.0)]);
        assert_eq!(s.hidden_gems.len(), 1);
    }

    #[test]
    fn test_segmentation_is_a_partition() {
        let records = vec![
            rec("a", 199_999.9),
            rec("b", 200_000.0),
            rec("c", 49_999.9),
            rec("d", 50_000.0),
            rec("e", 0.0),
            rec("f", 3_000_000.0),
        ];
        let s = segment(&records);
        assert_eq!(s.total(), records.len());

        let mut names: Vec<&str> = s
            .mainstream
            .iter()
            .chain(&s.niche)
            .chain(&s.hidden_gems)
            .map(|r| r.name.as_str())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a", "b", "c", "d", "e", "f"]);
    }
}
