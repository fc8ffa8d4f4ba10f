use std::fs;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;

use crate::commands::{self, Platform};
use crate::inputs::{self, Inputs};
use crate::util;

/// Setup script templates. Version specific overrides live under
/// `<platform>/<version>.<ext>`.
#[derive(RustEmbed)]
#[folder = "scripts"]
struct Scripts;

fn get_string(path: &str) -> Result<String> {
    let file = Scripts::get(path).ok_or_else(|| anyhow!("embedded script `{}` missing", path))?;
    std::str::from_utf8(&file.data)
        .with_context(|| format!("decoding embedded script `{}`", path))
        .map(|value| value.to_owned())
}

fn override_path(filename: &str, version: &str, platform: Platform) -> Option<String> {
    let extension = Utf8Path::new(filename).extension()?;
    let candidate = format!("{}/{}.{}", platform.as_str(), version, extension);
    Scripts::get(&candidate).is_some().then_some(candidate)
}

/// Read the setup script template for `platform`.
///
/// A version specific override wins over the generic `filename`. Unknown
/// platforms produce the unsupported-platform message instead of an error.
pub fn read_script(filename: &str, version: &str, platform: &str) -> Result<String> {
    let Some(resolved) = Platform::from_name(platform) else {
        return Ok(commands::unsupported(platform));
    };

    match override_path(filename, version, resolved) {
        Some(path) => {
            tracing::debug!("using {} override {}", resolved, path);
            get_string(&path)
        }
        None => get_string(filename),
    }
}

/// Directory the runner keeps tool artifacts in.
#[derive(Debug, Clone)]
pub struct ToolCache {
    root: Utf8PathBuf,
}

impl ToolCache {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root from `RUNNER_TOOL_CACHE`; an empty value means the working directory.
    pub fn from_inputs(inputs: &dyn Inputs) -> Self {
        let root = inputs::get_input(inputs, inputs::TOOL_CACHE, false);
        if root.is_empty() {
            Self::new(".")
        } else {
            Self::new(root)
        }
    }

    #[cfg(test)]
    fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `content` to `<root>/<filename>`, mark it executable and return
    /// its absolute path.
    pub fn write_script(&self, filename: &str, content: &str) -> Result<Utf8PathBuf> {
        util::fs::ensure_dir(&self.root)
            .with_context(|| format!("creating directory {}", self.root))?;
        let path = self.root.join(filename);
        fs::write(&path, content).with_context(|| format!("writing {}", path))?;
        util::fs::make_executable(&path)
            .with_context(|| format!("setting permissions on {}", path))?;
        let absolute = path
            .canonicalize_utf8()
            .with_context(|| format!("resolving {}", path))?;
        tracing::info!("wrote {}", absolute);
        Ok(absolute)
    }
}

pub fn write_script(inputs: &dyn Inputs, filename: &str, content: &str) -> Result<Utf8PathBuf> {
    ToolCache::from_inputs(inputs).write_script(filename, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::MapInputs;
    use crate::util::unique_temp_dir;
    use pretty_assertions::assert_eq;

    const DARWIN_74: &str = include_str!("../scripts/darwin/7.4.sh");
    const DARWIN: &str = include_str!("../scripts/darwin.sh");
    const LINUX: &str = include_str!("../scripts/linux.sh");
    const WIN32: &str = include_str!("../scripts/win32.ps1");


    #[test]
    fn read_script_prefers_version_override() {
        assert_eq!(read_script("darwin.sh", "7.4", "darwin").unwrap(), DARWIN_74);
        assert_eq!(read_script("darwin.sh", "7.3", "darwin").unwrap(), DARWIN);
    }

    #[test]
    fn read_script_generic_platforms() {
        assert_eq!(read_script("linux.sh", "7.4", "linux").unwrap(), LINUX);
        assert_eq!(read_script("linux.sh", "7.3", "linux").unwrap(), LINUX);
        assert_eq!(read_script("win32.ps1", "7.4", "win32").unwrap(), WIN32);
        assert_eq!(read_script("win32.ps1", "7.3", "win32").unwrap(), WIN32);
    }

    #[test]
    fn read_script_unsupported_platform() {
        let script = read_script("fedora.sh", "7.3", "fedora").unwrap();
        assert!(script.contains("Platform fedora is not supported"));
    }

    #[test]
    fn read_script_missing_template_is_an_error() {
        assert!(read_script("missing.sh", "7.3", "linux").is_err());
    }

    #[test]
    fn write_script_round_trip() {
        let root = unique_temp_dir("scripts");
        let inputs = MapInputs::new().with(inputs::TOOL_CACHE, root.as_str());
        let content = "sudo apt-get install php";

        let path = write_script(&inputs, "test.sh", content).unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("test.sh"));
        assert_eq!(fs::read_to_string(&path).unwrap(), content);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }

        let _ = fs::remove_dir_all(root.as_std_path());
    }

    #[test]
    fn write_script_overwrites_existing_file() {
        let root = unique_temp_dir("scripts");
        let cache = ToolCache::new(root.clone());
        cache.write_script("setup.sh", "first").unwrap();
        let path = cache.write_script("setup.sh", "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        let _ = fs::remove_dir_all(root.as_std_path());
    }

    #[test]
    fn from_inputs_empty_root_is_cwd() {
        assert_eq!(ToolCache::from_inputs(&MapInputs::new()).root().as_str(), ".");
        let empty = MapInputs::new().with(inputs::TOOL_CACHE, "");
        assert_eq!(ToolCache::from_inputs(&empty).root().as_str(), ".");
        let set = MapInputs::new().with(inputs::TOOL_CACHE, "/opt/hostedtoolcache");
        assert_eq!(ToolCache::from_inputs(&set).root().as_str(), "/opt/hostedtoolcache");
    }

    #[test]
    fn write_script_into_file_root_fails() {
        let root = unique_temp_dir("scripts");
        fs::create_dir_all(root.as_std_path()).unwrap();
        let blocker = root.join("not-a-dir");
        fs::write(&blocker, "occupied").unwrap();

        let err = ToolCache::new(blocker.clone())
            .write_script("setup.sh", "echo")
            .unwrap_err();
        let message = format!("{err:#}");
        assert!(
            message.contains("creating directory") || message.contains("writing"),
            "unexpected error: {message}"
        );
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "occupied");

        let _ = fs::remove_dir_all(root.as_std_path());
    }
}
