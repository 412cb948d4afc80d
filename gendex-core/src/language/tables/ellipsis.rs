//! Ellipsis pattern detection

/// Ellipsis pattern matcher
#[derive(Debug, Clone)]
pub struct EllipsisSet {
    /// Known ellipsis patterns (e.g., "...", "…")
    patterns: Vec<String>,
    treat_as_boundary: bool,
    require_capital: bool,
}

impl EllipsisSet {
    /// Create ellipsis detector
    pub fn new(patterns: Vec<String>, treat_as_boundary: bool, require_capital: bool) -> Self {
        Self {
            patterns,
            treat_as_boundary,
            require_capital,
        }
    }

    /// Check if the terminator run is (or ends with) an ellipsis
    pub fn is_ellipsis(&self, run: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| !pattern.is_empty() && run.ends_with(pattern.as_str()))
    }

    /// Whether an ellipsis ending at `run_end` closes the sentence
    pub fn ends_sentence(&self, text: &str, run_end: usize) -> bool {
        if !self.treat_as_boundary {
            return false;
        }
        if !self.require_capital {
            return true;
        }

        match text[run_end..].chars().find(|ch| ch.is_alphanumeric()) {
            Some(next) => next.is_uppercase(),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> EllipsisSet {
        EllipsisSet::new(vec!["...".to_string(), "…".to_string()], true, true)
    }

    #[test]
    fn test_ellipsis_detection() {
        let set = set();
        assert!(set.is_ellipsis("..."));
        assert!(set.is_ellipsis("…"));
        assert!(set.is_ellipsis("?..."));
        assert!(!set.is_ellipsis("."));
        assert!(!set.is_ellipsis("?!"));
    }

    #[test]
    fn test_ellipsis_boundary_context() {
        let set = set();
        let text = "Wait... what happened";
        assert!(!set.ends_sentence(text, 7));

        let text = "Wait... The door opened";
        assert!(set.ends_sentence(text, 7));

        let text = "And then...";
        assert!(set.ends_sentence(text, text.len()));
    }

    #[test]
    fn test_ellipsis_never_boundary() {
        let set = EllipsisSet::new(vec!["...".to_string()], false, false);
        assert!(!set.ends_sentence("Wait... The door", 7));
    }
}
