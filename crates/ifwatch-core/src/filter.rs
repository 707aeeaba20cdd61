// ── Interface name filter ──
//
// A pattern "matches" an interface when it matches at the start of the
// name, not anywhere inside it: `eth` selects `eth0` but not `veth0`.

use regex::Regex;

use crate::error::CoreError;

/// Pattern used when none is given on the command line or in config.
pub const DEFAULT_PATTERN: &str = "vnic|portEpic";

/// Compiled, start-anchored interface name filter.
#[derive(Debug, Clone)]
pub struct InterfaceFilter {
    pattern: String,
    regex: Regex,
}

impl InterfaceFilter {
    pub fn new(pattern: &str) -> Result<Self, CoreError> {
        let invalid = |source| CoreError::InvalidFilter {
            pattern: pattern.to_owned(),
            source,
        };
        // Validate the bare pattern first so unbalanced groups cannot
        // escape the anchoring wrapper below.
        Regex::new(pattern).map_err(invalid)?;
        let regex = Regex::new(&format!("^(?:{pattern})")).map_err(invalid)?;

        Ok(Self {
            pattern: pattern.to_owned(),
            regex,
        })
    }

    /// The pattern as the user wrote it.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, interface: &str) -> bool {
        self.regex.is_match(interface)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn prefix_matches() {
        let filter = InterfaceFilter::new("eth").unwrap();
        assert!(filter.matches("eth0"));
        assert!(filter.matches("eth"));
    }

    #[test]
    fn match_is_anchored_at_start() {
        let filter = InterfaceFilter::new("eth").unwrap();
        assert!(!filter.matches("weth0"));
        assert!(!filter.matches("veth12ab"));
    }

    #[test]
    fn alternation_is_anchored_as_a_whole() {
        let filter = InterfaceFilter::new(DEFAULT_PATTERN).unwrap();
        assert!(filter.matches("vnic0"));
        assert!(filter.matches("portEpic3"));
        assert!(!filter.matches("eth0"));
        assert!(!filter.matches("myportEpic"));
        assert!(!filter.matches("xvnic"));
    }

    #[test]
    fn regex_syntax_is_honoured() {
        let filter = InterfaceFilter::new(r"(lo|eth\d)$").unwrap();
        assert!(filter.matches("lo"));
        assert!(filter.matches("eth1"));
        assert!(!filter.matches("eth10"));
    }

    #[test]
    fn empty_pattern_matches_everything() {
        let filter = InterfaceFilter::new("").unwrap();
        assert!(filter.matches("lo"));
        assert!(filter.matches("wlp3s0"));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = InterfaceFilter::new("eth(").unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Invalid interface filter 'eth('")
        );
        let CoreError::InvalidFilter { pattern, .. } = &err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(pattern, "eth(");
    }

    #[test]
    fn unbalanced_group_cannot_break_anchoring() {
        assert!(InterfaceFilter::new("a)|(b").is_err());
    }

    #[test]
    fn pattern_round_trips() {
        let filter = InterfaceFilter::new("vnic").unwrap();
        assert_eq!(filter.pattern(), "vnic");
    }
}
