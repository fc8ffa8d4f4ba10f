use std::sync::OnceLock;

use regex::Regex;

use crate::inputs::{self, Inputs};

/// PHP versions the setup scripts know how to install, oldest first.
pub const SUPPORTED_VERSIONS: &[&str] = &["5.6", "7.0", "7.1", "7.2", "7.3", "7.4"];

/// Newest entry of [`SUPPORTED_VERSIONS`].
pub fn latest() -> &'static str {
    SUPPORTED_VERSIONS[SUPPORTED_VERSIONS.len() - 1]
}

fn qualifier() -> &'static Regex {
    static QUALIFIER: OnceLock<Regex> = OnceLock::new();
    QUALIFIER.get_or_init(|| {
        Regex::new(r"^(?P<base>.*?)(?:-dev|nightly|snapshot)$").expect("qualifier pattern")
    })
}

/// Match a requested version against the support matrix.
///
/// A single trailing `-dev`, `nightly` or `snapshot` qualifier is ignored for
/// matching. Returns `None` when the cleaned value is not supported.
pub fn normalize(requested: &str) -> Option<&'static str> {
    let requested = requested.trim();
    let base = qualifier()
        .captures(requested)
        .and_then(|caps| caps.name("base"))
        .map_or(requested, |base| base.as_str());
    SUPPORTED_VERSIONS
        .iter()
        .copied()
        .find(|supported| *supported == base)
}

/// Resolve the `php-version` input, falling back to the latest supported
/// version with a warning.
pub fn get_version(inputs: &dyn Inputs) -> String {
    let requested = inputs::get_input(inputs, inputs::PHP_VERSION, true);
    match normalize(&requested) {
        Some(version) => version.to_owned(),
        None => {
            let fallback = latest();
            tracing::warn!(
                "PHP version `{}` is not supported, using {} instead",
                requested,
                fallback
            );
            fallback.to_owned()
        }
    }
}
