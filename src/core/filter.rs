//! Level threshold filtering

use super::severity::Severity;

/// Threshold gate deciding whether an event's severity is emitted.
///
/// Independent of namespace matching; an event must pass both gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelFilter {
    threshold: Severity,
}

impl LevelFilter {
    pub fn new(threshold: Severity) -> Self {
        Self { threshold }
    }

    /// Resolve an optional configured threshold, falling back to the
    /// conservative default (`Info`, which suppresses the verbose levels).
    pub fn resolve(configured: Option<Severity>) -> Self {
        Self {
            threshold: configured.unwrap_or_default(),
        }
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Allow iff `rank(severity) >= rank(threshold)`.
    #[inline]
    pub fn allows(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_at_and_above_threshold() {
        let filter = LevelFilter::new(Severity::Warn);
        assert!(!filter.allows(Severity::Debug));
        assert!(!filter.allows(Severity::Verbose));
        assert!(!filter.allows(Severity::Info));
        assert!(filter.allows(Severity::Warn));
        assert!(filter.allows(Severity::Error));
    }

    #[test]
    fn test_default_threshold_suppresses_verbose_levels() {
        let filter = LevelFilter::resolve(None);
        assert_eq!(filter.threshold(), Severity::Info);
        assert!(!filter.allows(Severity::Debug));
        assert!(!filter.allows(Severity::Verbose));
        assert!(filter.allows(Severity::Info));
    }

    #[test]
    fn test_explicit_threshold_overrides_default() {
        let filter = LevelFilter::resolve(Some(Severity::Debug));
        assert!(filter.allows(Severity::Debug));
    }
}
