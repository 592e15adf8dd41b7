//! Certificate eligibility. The certificate view must call this on every
//! entry with a fresh store snapshot; caching the answer across a retake
//! would let a stale decision leak through.

use crate::model::{Category, ProgressRecord};
use std::collections::BTreeMap;

/// Eligible iff every offered category has a completed record. Score values
/// don't matter; a completed 1/10 counts. The offered set is a parameter so
/// the rule follows the content, not a hardcoded count.
pub fn is_eligible(
    records: &BTreeMap<String, ProgressRecord>,
    offered: &[Category],
) -> bool {
    offered
        .iter()
        .all(|cat| records.get(cat.key()).is_some_and(|r| r.completed))
}

/// How many of the offered categories are completed, for "2 of 3" displays.
pub fn completed_of_offered(
    records: &BTreeMap<String, ProgressRecord>,
    offered: &[Category],
) -> usize {
    offered
        .iter()
        .filter(|cat| records.get(cat.key()).is_some_and(|r| r.completed))
        .count()
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

    fn all_completed() -> BTreeMap<String, ProgressRecord> {
        let mut records = BTreeMap::new();
        records.insert("html".to_owned(), record(8, 10, true));
        records.insert("css".to_owned(), record(1, 10, true));
        records.insert("bootstrap".to_owned(), record(10, 10, true));
        records
    }

    #[test]
    fn eligible_only_when_every_offered_category_is_completed() {
        let records = all_completed();
        assert!(is_eligible(&records, &Category::ALL));
        assert_eq!(completed_of_offered(&records, &Category::ALL), 3);
    }

    #[test]
    fn low_scores_still_count_as_completed() {
        let mut records = all_completed();
        records.insert("css".to_owned(), record(1, 10, true));
        assert!(is_eligible(&records, &Category::ALL));
    }

    #[test]
    fn a_missing_record_blocks_eligibility() {
        let mut records = all_completed();
        records.remove("bootstrap");
        assert!(!is_eligible(&records, &Category::ALL));
        assert_eq!(completed_of_offered(&records, &Category::ALL), 2);
    }

    #[test]
    fn an_incomplete_record_blocks_eligibility() {
        let mut records = all_completed();
        records.insert("html".to_owned(), record(9, 10, false));
        assert!(!is_eligible(&records, &Category::ALL));
    }

    #[test]
    fn empty_store_is_never_eligible() {
        assert!(!is_eligible(&BTreeMap::new(), &Category::ALL));
        assert_eq!(completed_of_offered(&BTreeMap::new(), &Category::ALL), 0);
    }
}
