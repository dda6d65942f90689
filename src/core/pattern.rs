//! Namespace pattern matching
//!
//! A pattern expression is a comma-separated list of glob-like terms
//! controlling which namespaces emit output, e.g. `"api,db:*,-db:verbose"`.
//! Terms prefixed with `-` are exclusions; a single trailing `*` matches any
//! suffix. Expressions are compiled once at logger construction so emission
//! only walks two precompiled term lists.

/// How a single term matches a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TermMatcher {
    /// Exact equality with the namespace.
    Exact(String),
    /// Namespace must start with the prefix before the trailing `*`.
    Prefix(String),
}

impl TermMatcher {
    fn matches(&self, namespace: &str) -> bool {
        match self {
            TermMatcher::Exact(term) => namespace == term,
            TermMatcher::Prefix(prefix) => namespace.starts_with(prefix),
        }
    }
}

/// Compiled enable/disable predicate over namespace strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceMatcher {
    includes: Vec<TermMatcher>,
    excludes: Vec<TermMatcher>,
}

impl NamespaceMatcher {
    /// Compile a pattern expression.
    ///
    /// Malformed terms (empty between commas, a bare `-`) are skipped rather
    /// than rejected; a fully empty expression enables all namespaces.
    pub fn compile(expression: &str) -> Self {
        let mut includes = Vec::new();
        let mut excludes = Vec::new();

        for raw in expression.split(',') {
            let term = raw.trim();
            let (exclude, body) = match term.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, term),
            };
            if body.is_empty() {
                continue;
            }

            let matcher = match body.strip_suffix('*') {
                Some(prefix) => TermMatcher::Prefix(prefix.to_string()),
                None => TermMatcher::Exact(body.to_string()),
            };

            if exclude {
                excludes.push(matcher);
            } else {
                includes.push(matcher);
            }
        }

        Self { includes, excludes }
    }

    /// Whether output for `namespace` is enabled under this pattern.
    ///
    /// Enabled iff (no include terms exist, or at least one matches) and no
    /// exclude term matches.
    pub fn enabled(&self, namespace: &str) -> bool {
        if self.excludes.iter().any(|m| m.matches(namespace)) {
            return false;
        }
        self.includes.is_empty() || self.includes.iter().any(|m| m.matches(namespace))
    }
}

impl Default for NamespaceMatcher {
    fn default() -> Self {
        Self::compile("")
    }
}
