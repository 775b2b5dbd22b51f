//! Mission-name filtering.
//!
//! The filtered view is a pure function of the base sequence and the search
//! term. The state owner calls [`filter_launches`] on every change to either
//! input. No observer graph, nothing cached between calls.

use crate::graphql::LaunchRecord;

/// Case-insensitive substring match of `term` against each record's mission
/// name. An empty term selects the entire base sequence; matching elements
/// keep their relative order. Total over its inputs: any term, any base,
/// including empty, and never an error.
pub fn filter_launches(base: &[LaunchRecord], term: &str) -> Vec<LaunchRecord> {
    if term.is_empty() {
        return base.to_vec();
    }
    let needle = term.to_lowercase();
    base.iter()
        .filter(|launch| launch.mission_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_launches;

    fn names(records: &[LaunchRecord]) -> Vec<&str> {
        records.iter().map(|r| r.mission_name.as_str()).collect()
    }

    #[test]
    fn test_empty_term_returns_base_unchanged() {
        let base = sample_launches();
        let filtered = filter_launches(&base, "");
        assert_eq!(filtered, base);
    }

    #[test]
    fn test_term_matches_case_insensitively() {
        let base = sample_launches();
        let filtered = filter_launches(&base, "star");
        assert_eq!(names(&filtered), vec!["Starlink-1"]);
    }

    #[test]
    fn test_no_match_returns_empty_not_error() {
        let base = sample_launches();
        assert!(filter_launches(&base, "zzz").is_empty());
    }

    #[test]
    fn test_upper_case_term_matches_too() {
        let base = sample_launches();
        assert_eq!(names(&filter_launches(&base, "CRS")), vec!["CRS-20"]);
        assert_eq!(names(&filter_launches(&base, "crs")), vec!["CRS-20"]);
    }

    #[test]
    fn test_order_of_matches_preserved() {
        let base = sample_launches();
        // "a" appears in "Falcon Heavy Demo" and "Starlink-1" but not "CRS-20"
        let filtered = filter_launches(&base, "a");
        assert_eq!(names(&filtered), vec!["Falcon Heavy Demo", "Starlink-1"]);
    }

    #[test]
    fn test_result_never_larger_than_base() {
        let base = sample_launches();
        for term in ["", "a", "falcon", "zzz", "-"] {
            assert!(filter_launches(&base, term).len() <= base.len());
        }
    }

    /// Filtering is a projection: reapplying the same term is a no-op.
    #[test]
    fn test_filter_idempotent() {
        let base = sample_launches();
        let once = filter_launches(&base, "star");
        let twice = filter_launches(&once, "star");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_base_is_fine() {
        assert!(filter_launches(&[], "").is_empty());
        assert!(filter_launches(&[], "falcon").is_empty());
    }

    #[test]
    fn test_base_not_mutated() {
        let base = sample_launches();
        let before = base.clone();
        let _ = filter_launches(&base, "falcon");
        assert_eq!(base, before);
    }
}
