mod extensions;
mod ini;

pub use extensions::add_extensions;
pub use ini::add_ini_values;

use anyhow::{Result, bail};

use crate::commands::{self, Platform};
use crate::inputs::{self, Inputs};
use crate::scripts;
use crate::version;

/// A fully assembled setup script for one platform.
#[derive(Debug, Clone)]
pub struct SetupScript {
    pub platform: Platform,
    pub version: String,
    pub filename: &'static str,
    pub content: String,
}

/// Assemble the setup script for `platform` from the template and the
/// `extensions` / `ini-values` inputs.
pub fn build(inputs: &dyn Inputs, platform: &str) -> Result<SetupScript> {
    let Some(resolved) = Platform::from_name(platform) else {
        bail!("{}", commands::unsupported(platform));
    };

    let version = version::get_version(inputs);
    let filename = resolved.script_filename();
    let mut content = scripts::read_script(filename, &version, resolved.as_str())?;

    let extensions = inputs::get_input(inputs, inputs::EXTENSIONS, false);
    let ini_values = inputs::get_input(inputs, inputs::INI_VALUES, false);
    for section in [
        add_extensions(&extensions, resolved.as_str()),
        add_ini_values(&ini_values, resolved.as_str()),
    ] {
        if section.is_empty() {
            continue;
        }
        if !content.ends_with('\n') {
            content.push('\n');
        }
        content.push('\n');
        content.push_str(&section);
    }

    tracing::debug!("assembled {} for PHP {}", filename, version);
    Ok(SetupScript {
        platform: resolved,
        version,
        filename,
        content,
    })
}
