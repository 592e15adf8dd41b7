//! Derived statistics over a progress snapshot. Everything here is a pure
//! function of the records passed in; nothing is cached across writes.

use crate::model::{Category, ProgressRecord};
use std::collections::BTreeMap;

/// Qualitative banding of an average percentage. Fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Excellent,
    Good,
    NeedsPractice,
}

impl Tier {
    pub fn from_percentage(pct: f32) -> Tier {
        if pct >= 80.0 {
            Tier::Excellent
        } else if pct >= 60.0 {
            Tier::Good
        } else {
            Tier::NeedsPractice
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::NeedsPractice => "needs practice",
        }
    }
}

/// Cross-category dashboard numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub average_percentage: f32,
}

impl ProgressSummary {
    pub fn tier(&self) -> Tier {
        Tier::from_percentage(self.average_percentage)
    }
}

/// Display status of a single category. "Never tried" is distinct from a
/// completed zero score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategoryStatus {
    NotAttempted,
    Completed {
        score: u32,
        total: u32,
        percentage: f32,
    },
}

/// `score/total` as a percentage, with 0 for an empty quiz instead of NaN.
pub fn percentage(score: u32, total: u32) -> f32 {
    if total == 0 {
        return 0.0;
    }
    score as f32 / total as f32 * 100.0
}

/// Mean percentage over completed records only; 0 when nothing is completed.
pub fn summarize(records: &BTreeMap<String, ProgressRecord>) -> ProgressSummary {
    let completed: Vec<&ProgressRecord> =
        records.values().filter(|r| r.completed).collect();
    if completed.is_empty() {
        return ProgressSummary {
            completed: 0,
            average_percentage: 0.0,
        };
    }
    let sum: f32 = completed
        .iter()
        .map(|r| percentage(r.score, r.total))
        .sum();
    ProgressSummary {
        completed: completed.len(),
        average_percentage: sum / completed.len() as f32,
    }
}

pub fn category_status(
    records: &BTreeMap<String, ProgressRecord>,
    category: Category,
) -> CategoryStatus {
    match records.get(category.key()) {
        Some(r) if r.completed => CategoryStatus::Completed {
            score: r.score,
            total: r.total,
            percentage: percentage(r.score, r.total),
        },
        // an incomplete record means the same as no record
        _ => CategoryStatus::NotAttempted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(score: u32, total: u32, completed: bool) -> ProgressRecord {
        ProgressRecord {
            score,
            total,
            completed,
        }
    }

    #[test]
    fn empty_snapshot_averages_to_exactly_zero() {
        let summary = summarize(&BTreeMap::new());
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.average_percentage, 0.0);
        assert!(!summary.average_percentage.is_nan());
    }

    #[test]
    fn average_is_mean_of_completed_records_only() {
        let mut records = BTreeMap::new();
        records.insert("html".to_owned(), record(8, 10, true)); // 80%
        records.insert("css".to_owned(), record(3, 5, true)); // 60%
        records.insert("bootstrap".to_owned(), record(9, 10, false)); // ignored
        let summary = summarize(&records);
        assert_eq!(summary.completed, 2);
        assert!((summary.average_percentage - 70.0).abs() < 1e-4);
    }

    #[test]
    fn zero_total_record_counts_as_zero_percent() {
        let mut records = BTreeMap::new();
        records.insert("html".to_owned(), record(0, 0, true));
        let summary = summarize(&records);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.average_percentage, 0.0);
        assert!(!summary.average_percentage.is_nan());
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(Tier::from_percentage(95.0), Tier::Excellent);
        assert_eq!(Tier::from_percentage(80.0), Tier::Excellent);
        assert_eq!(Tier::from_percentage(79.9), Tier::Good);
        assert_eq!(Tier::from_percentage(60.0), Tier::Good);
        assert_eq!(Tier::from_percentage(59.9), Tier::NeedsPractice);
        assert_eq!(Tier::from_percentage(0.0), Tier::NeedsPractice);
    }

    #[test]
    fn not_attempted_is_distinct_from_completed_zero() {
        let mut records = BTreeMap::new();
        records.insert("css".to_owned(), record(0, 4, true));
        records.insert("bootstrap".to_owned(), record(2, 4, false));
        assert_eq!(
            category_status(&records, Category::Css),
            CategoryStatus::Completed {
                score: 0,
                total: 4,
                percentage: 0.0
            }
        );
        // incomplete record reads as not attempted, not as 0%
        assert_eq!(
            category_status(&records, Category::Bootstrap),
            CategoryStatus::NotAttempted
        );
        assert_eq!(
            category_status(&records, Category::Html),
            CategoryStatus::NotAttempted
        );
    }
}
