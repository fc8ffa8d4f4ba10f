use std::collections::BTreeMap;
use std::fs;

use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::Deserialize;

/// Requested PHP version.
pub const PHP_VERSION: &str = "php-version";
/// Comma separated list of extensions to enable.
pub const EXTENSIONS: &str = "extensions";
/// Comma separated list of `key=value` php.ini directives.
pub const INI_VALUES: &str = "ini-values";
/// Tool-cache root provided by the runner.
pub const TOOL_CACHE: &str = "RUNNER_TOOL_CACHE";

/// Source of action inputs. Lookups are case-sensitive.
pub trait Inputs {
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads inputs from the process environment.
///
/// The raw key is tried first; when it is unset or empty the runner's
/// `INPUT_<NAME>` form is used instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvInputs;

impl Inputs for EnvInputs {
    fn get(&self, name: &str) -> Option<String> {
        resolve(|key| std::env::var(key).ok(), name)
    }
}

fn resolve(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    match lookup(name) {
        Some(value) if !value.is_empty() => Some(value),
        _ => lookup(&runner_key(name)).map(|value| value.trim().to_owned()),
    }
}

fn runner_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Fixed key/value inputs, loaded from a TOML file or built in tests.
#[derive(Debug, Default, Clone)]
pub struct MapInputs {
    values: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawInput {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl RawInput {
    fn into_string(self) -> String {
        match self {
            RawInput::Text(text) => text,
            RawInput::Integer(value) => value.to_string(),
            // Debug keeps the fractional part, so `8.0` stays `8.0`.
            RawInput::Float(value) => format!("{value:?}"),
            RawInput::Flag(value) => value.to_string(),
        }
    }
}

impl MapInputs {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_owned(), value.to_owned());
        self
    }

    /// Load a flat TOML table of inputs, e.g. `php-version = "7.3"`.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("reading inputs {}", path))?;
        Self::parse(&raw).with_context(|| format!("parsing inputs {}", path))
    }

    fn parse(raw: &str) -> Result<Self> {
        let table: BTreeMap<String, RawInput> = toml::from_str(raw)?;
        let values = table
            .into_iter()
            .map(|(key, value)| (key, value.into_string()))
            .collect();
        Ok(Self { values })
    }
}

impl Inputs for MapInputs {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Two providers stacked; a non-empty value from `first` wins.
#[derive(Debug, Clone)]
pub struct Layered<A, B> {
    first: A,
    second: B,
}

impl<A, B> Layered<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Inputs, B: Inputs> Inputs for Layered<A, B> {
    fn get(&self, name: &str) -> Option<String> {
        self.first
            .get(name)
            .filter(|value| !value.is_empty())
            .or_else(|| self.second.get(name))
    }
}

/// Read an input, yielding an empty string when it is absent.
///
/// Missing mandatory inputs are only reported; deciding what to do about them
/// is left to the caller.
pub fn get_input(inputs: &dyn Inputs, name: &str, mandatory: bool) -> String {
    let value = inputs.get(name).unwrap_or_default();
    if value.is_empty() && mandatory {
        tracing::warn!("input `{}` is required but was not supplied", name);
    }
    value
}
