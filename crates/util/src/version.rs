//! Version string comparison.
//!
//! Orders dotted version identifiers of arbitrary length (`"1.2"`,
//! `"2.0.0"`, `"1.0.0-beta"`). Each `.`-delimited segment is classified
//! once as numeric or textual, then segments are compared positionally.
//! The comparison is total: any pair of strings, including empty or
//! malformed ones, produces an ordering.

use std::cmp::Ordering;

/// One `.`-delimited segment of a version string, classified at parse time.
///
/// A segment is `Numeric` iff the whole segment parses as a non-negative
/// `u64`; anything else (empty segment, leading sign, mixed alphanumerics,
/// or a digit run too large for `u64`) is `Text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Numeric(u64),
    Text(String),
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Component::Numeric(a), Component::Numeric(b)) => a.cmp(b),
            // A textual segment sorts after any numeric segment at the
            // same position ("0-beta" > "0").
            (Component::Numeric(_), Component::Text(_)) => Ordering::Less,
            (Component::Text(_), Component::Numeric(_)) => Ordering::Greater,
            (Component::Text(a), Component::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Split a version string into classified components.
///
/// The empty string yields an empty sequence, not a single empty `Text`
/// component, so `""` compares equal to `""` and to `"0.0"`.
pub fn parse_components(version: &str) -> Vec<Component> {
    if version.is_empty() {
        return Vec::new();
    }
    version
        .split('.')
        .map(|segment| match segment.parse::<u64>() {
            Ok(n) => Component::Numeric(n),
            Err(_) => Component::Text(segment.to_string()),
        })
        .collect()
}

/// Compare two version strings positionally.
///
/// Rules per position:
/// - both numeric: integer comparison;
/// - both textual: case-sensitive lexicographic comparison;
/// - mixed: the textual segment sorts after the numeric one;
/// - one side exhausted against a numeric segment: the missing segment
///   counts as `0`, so `"1.2"` equals `"1.2.0"`;
/// - one side exhausted against a textual segment: the shorter version
///   sorts first.
///
/// The first non-equal position decides the result.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = parse_components(a);
    let right = parse_components(b);

    for i in 0..left.len().max(right.len()) {
        let ordering = match (left.get(i), right.get(i)) {
            (Some(l), Some(r)) => l.cmp(r),
            (Some(l), None) => match l {
                Component::Numeric(v) => v.cmp(&0),
                Component::Text(_) => Ordering::Greater,
            },
            (None, Some(r)) => match r {
                Component::Numeric(v) => 0.cmp(v),
                Component::Text(_) => Ordering::Less,
            },
            (None, None) => unreachable!("loop bounded by max length"),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

/// Returns true if `a` denotes a strictly later version than `b`.
pub fn is_greater(a: &str, b: &str) -> bool {
    compare_versions(a, b) == Ordering::Greater
}

/// Returns true if `a` denotes a strictly earlier version than `b`.
pub fn is_less(a: &str, b: &str) -> bool {
    compare_versions(a, b) == Ordering::Less
}

/// Returns true if `a` and `b` denote the same version.
pub fn is_equal(a: &str, b: &str) -> bool {
    compare_versions(a, b) == Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_are_equal() {
        for v in ["", "1", "1.2.3", "1.0.0-beta", "a.b.c"] {
            assert_eq!(compare_versions(v, v), Ordering::Equal, "self-compare {v:?}");
        }
    }

    #[test]
    fn missing_trailing_components_count_as_zero() {
        assert_eq!(compare_versions("1", "1.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.2", "1.2.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.2.0.0", "1.2"), Ordering::Equal);
    }

    #[test]
    fn numeric_comparison_is_not_lexicographic() {
        assert_eq!(compare_versions("1.10", "1.9"), Ordering::Greater);
        assert_eq!(compare_versions("2.0", "1.9.9"), Ordering::Greater);
        assert_eq!(compare_versions("0.9", "0.10"), Ordering::Less);
    }

    #[test]
    fn longer_numeric_version_wins_when_nonzero() {
        assert_eq!(compare_versions("1.0.1", "1.0"), Ordering::Greater);
        assert_eq!(compare_versions("1.0", "1.0.1"), Ordering::Less);
    }

    #[test]
    fn mixed_component_text_sorts_last() {
        // "0-beta" fails integer parse, so it is textual and sorts after
        // the purely numeric "0" at the same position.
        assert_eq!(compare_versions("1.0.0-beta", "1.0.0"), Ordering::Greater);
        assert_eq!(compare_versions("1.0.0", "1.0.0-beta"), Ordering::Less);
    }

    #[test]
    fn missing_vs_text_sorts_missing_first() {
        assert_eq!(compare_versions("1.0", "1.0.beta"), Ordering::Less);
        assert_eq!(compare_versions("1.0.beta", "1.0"), Ordering::Greater);
    }

    #[test]
    fn text_components_compare_lexicographically_case_sensitive() {
        assert_eq!(compare_versions("1.alpha", "1.beta"), Ordering::Less);
        assert_eq!(compare_versions("1.Beta", "1.alpha"), Ordering::Less);
    }

    #[test]
    fn empty_versions_are_equal() {
        assert_eq!(compare_versions("", ""), Ordering::Equal);
        assert_eq!(compare_versions("", "0.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("", "0.1"), Ordering::Less);
    }

    #[test]
    fn comparison_is_antisymmetric() {
        let pairs = [
            ("1.2", "1.10"),
            ("2.0", "1.9.9"),
            ("1.0.0-beta", "1.0.0"),
            ("", "0.0.1"),
            ("a", "b"),
        ];
        for (a, b) in pairs {
            assert_eq!(
                compare_versions(a, b),
                compare_versions(b, a).reverse(),
                "antisymmetry for ({a:?}, {b:?})"
            );
        }
    }

    #[test]
    fn comparison_is_transitive_across_chain() {
        // A representative ascending chain; every earlier element must
        // compare less than every later one.
        let chain = ["", "0.0.1", "0.9", "0.10", "1", "1.0.1", "1.0.1-rc1", "1.2", "2"];
        for i in 0..chain.len() {
            for j in (i + 1)..chain.len() {
                assert_eq!(
                    compare_versions(chain[i], chain[j]),
                    Ordering::Less,
                    "{:?} < {:?}",
                    chain[i],
                    chain[j]
                );
            }
        }
    }

    #[test]
    fn overflowing_digit_run_degrades_to_text() {
        // 21 digits does not fit in u64, so the segment is textual and
        // sorts after any numeric segment.
        let huge = "1.184467440737095516160";
        assert_eq!(parse_components(huge)[1], Component::Text("184467440737095516160".into()));
        assert_eq!(compare_versions(huge, "1.9"), Ordering::Greater);
    }

    #[test]
    fn predicates_agree_with_compare() {
        assert!(is_greater("2.0", "1.9"));
        assert!(!is_greater("1.9", "2.0"));
        assert!(is_less("1.9", "2.0"));
        assert!(is_equal("1.2", "1.2.0"));
    }
}
