use std::collections::HashSet;

/// Operating systems tracked against the endoflife.date dataset.
const TRACKED_OPERATING_SYSTEMS: &[&str] = &["alpine", "amazon-linux", "android"];

/// Returns the fixed set of operating system names to check.
///
/// The names double as lookup keys into the data API
/// (`https://endoflife.date/api/{name}.json`).
pub fn operating_system_names() -> HashSet<&'static str> {
    TRACKED_OPERATING_SYSTEMS.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_expected_names() {
        let expected: HashSet<&str> = ["alpine", "amazon-linux", "android"]
            .into_iter()
            .collect();

        assert_eq!(operating_system_names(), expected);
    }

    #[test]
    fn test_names_are_order_independent() {
        let reordered: HashSet<&str> = ["android", "alpine", "amazon-linux"]
            .into_iter()
            .collect();

        assert_eq!(operating_system_names(), reordered);
    }

    #[test]
    fn test_contains_no_duplicates() {
        assert_eq!(
            operating_system_names().len(),
            TRACKED_OPERATING_SYSTEMS.len()
        );
    }
}
