//! API version compatibility checking.
//!
//! The explorer refuses to talk to full nodes older than a configured
//! minimum. Version strings are compared as a numeric prefix: only as many
//! components as the minimum declares are inspected, and beta builds are
//! never compatible with non-beta builds in either direction.

const BETA_MARKER: &str = "beta";

/// Whether `version`, as reported by a node, satisfies `min_version`.
///
/// Both strings may carry arbitrary non-numeric decoration (`v1.2.3-rc1`,
/// `0.31.0-beta`); everything except digits and dots is ignored for the
/// numeric comparison. Components are compared as integers, left to right,
/// over the prefix both sequences share; ties through that prefix are
/// allowed.
pub fn is_version_allowed(version: &str, min_version: &str) -> bool {
    // A beta node and a non-beta minimum (or vice versa) never match,
    // regardless of numeric ordering.
    if version.contains(BETA_MARKER) != min_version.contains(BETA_MARKER) {
        return false;
    }

    let reported = clean_version_components(version);
    let minimum = clean_version_components(min_version);

    for (min_part, reported_part) in minimum.iter().zip(&reported) {
        if min_part > reported_part {
            return false;
        }
        if min_part < reported_part {
            return true;
        }
    }

    true
}

/// Strip a version string down to its ordered numeric components.
///
/// Empty segments produced by stray dots are dropped.
pub fn clean_version_components(version: &str) -> Vec<u64> {
    version
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect::<String>()
        .split('.')
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| segment.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_patch_is_allowed() {
        assert!(is_version_allowed("1.2.3", "1.2.0"));
    }

    #[test]
    fn older_minor_is_rejected() {
        assert!(!is_version_allowed("1.1.9", "1.2.0"));
    }

    #[test]
    fn equal_versions_are_allowed() {
        assert!(is_version_allowed("1.2.0", "1.2.0"));
    }

    #[test]
    fn beta_mismatch_is_rejected_both_ways() {
        assert!(!is_version_allowed("1.2.0-beta", "1.2.0"));
        assert!(!is_version_allowed("1.2.0", "1.2.0-beta"));
        assert!(is_version_allowed("1.2.1-beta", "1.2.0-beta"));
    }

    #[test]
    fn components_compare_numerically_not_lexically() {
        assert!(is_version_allowed("1.10.0", "1.9.0"));
        assert!(!is_version_allowed("1.9.0", "1.10.0"));
    }

    #[test]
    fn trailing_components_beyond_minimum_are_ignored() {
        assert!(is_version_allowed("1.2.0.99", "1.2.0"));
        assert!(is_version_allowed("1.2", "1.2.9"));
    }

    #[test]
    fn newer_major_short_circuits() {
        assert!(is_version_allowed("2.0.0", "1.9.9"));
    }

    #[test]
    fn decoration_is_stripped() {
        assert_eq!(clean_version_components("v1.2.3-rc1"), vec![1, 2, 31]);
        assert_eq!(clean_version_components("0.31.0-beta"), vec![0, 31, 0]);
        assert!(is_version_allowed("v0.31.2~build5", "0.31.0"));
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert_eq!(clean_version_components("1..2"), vec![1, 2]);
        assert_eq!(clean_version_components("no digits here"), Vec::<u64>::new());
    }

    #[test]
    fn minimum_with_no_numeric_components_allows_everything() {
        assert!(is_version_allowed("1.2.3", "unversioned"));
    }
}
