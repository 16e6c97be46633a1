//! Linter driver: feeds files to rules and gathers their violations.

use crate::config::Config;
use crate::rule::{Rule, RuleBox};
use crate::source::SourceFile;
use crate::types::LintResult;

use tracing::{debug, info};

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the linter.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the linter.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the linter, dropping rules the configuration disables.
    #[must_use]
    pub fn build(self) -> Linter {
        let config = self.config.unwrap_or_default();
        let rules = self
            .rules
            .into_iter()
            .filter(|rule| {
                let enabled = config.is_rule_enabled(rule.identifier());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.identifier());
                }
                enabled
            })
            .collect();

        Linter {
            rules,
            files_checked: 0,
        }
    }
}

/// Orchestrates a lint run.
///
/// Files are processed one at a time on the calling thread; rules evaluate
/// their buffers once, when [`Linter::violations`] is called.
///
/// Use [`Linter::builder()`] to construct an instance.
pub struct Linter {
    rules: Vec<RuleBox>,
    files_checked: usize,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the number of active rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the identifiers of the active rules.
    #[must_use]
    pub fn rule_identifiers(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.identifier()).collect()
    }

    /// Hands one file to every rule.
    pub fn process_file(&mut self, file: &SourceFile) {
        debug!("Processing: {}", file.path.display());
        for rule in &mut self.rules {
            rule.process_file(file);
        }
        self.files_checked += 1;
    }

    /// Evaluates every rule over the files processed so far.
    ///
    /// The result is sorted by location for stable reporting.
    #[must_use]
    pub fn violations(&self) -> LintResult {
        let mut result = LintResult::new();
        result.files_checked = self.files_checked;
        for rule in &self.rules {
            let violations = rule.violations();
            debug!("{} reported {} violation(s)", rule.identifier(), violations.len());
            result.violations.extend(violations);
        }
        result.sort();
        result
    }

    /// Processes all files, then evaluates.
    #[must_use]
    pub fn lint<'a, I>(mut self, files: I) -> LintResult
    where
        I: IntoIterator<Item = &'a SourceFile>,
    {
        info!("Starting lint with {} rule(s)", self.rules.len());
        for file in files {
            self.process_file(file);
        }
        let result = self.violations();
        info!(
            "Lint complete: {} violation(s) in {} file(s)",
            result.violations.len(),
            result.files_checked
        );
        result
    }
}
