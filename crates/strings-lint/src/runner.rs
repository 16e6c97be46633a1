//! One-call entry point: preset resolution, rule construction, lint run.

use strings_lint_core::{Config, LintResult, Linter, SourceFile};
use strings_lint_rules::{Collaborators, Preset};
use tracing::{info, warn};

/// Lints `files` with the rule set selected by `config`.
///
/// Rules are built from `collaborators`; rules the configuration disables are
/// skipped. The result is sorted by location.
#[must_use]
pub fn lint<'a, I>(files: I, config: &Config, collaborators: &Collaborators) -> LintResult
where
    I: IntoIterator<Item = &'a SourceFile>,
{
    let preset = resolve_preset(config);
    info!("Using preset {preset:?}");

    Linter::builder()
        .rules(preset.rules(config, collaborators))
        .config(config.clone())
        .build()
        .lint(files)
}

/// Resolves the preset named in the configuration.
///
/// Defaults to [`Preset::Recommended`]; an unknown name is logged and falls
/// back to the default.
#[must_use]
pub fn resolve_preset(config: &Config) -> Preset {
    let Some(name) = config.preset.as_deref() else {
        return Preset::Recommended;
    };
    Preset::from_name(name).unwrap_or_else(|| {
        warn!(
            "Unknown preset `{name}`, using recommended. Valid presets: recommended, legacy, all"
        );
        Preset::Recommended
    })
}
