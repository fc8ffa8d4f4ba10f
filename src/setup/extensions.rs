use std::fmt::Write as _;

use crate::commands::{self, Platform};
use crate::lists;

fn install_line(platform: Platform, extension: &str) -> String {
    let prefix = lists::extension_prefix(extension);
    match platform {
        Platform::Windows => format!("Add-Extension \"{extension}\" \"{prefix}\""),
        Platform::Linux | Platform::Darwin => {
            format!("add_extension \"{extension}\" \"{prefix}\"")
        }
    }
}

/// Script section enabling every extension in `csv`.
///
/// Empty when no extensions are requested.
pub fn add_extensions(csv: &str, platform: &str) -> String {
    let Some(platform) = Platform::from_name(platform) else {
        return commands::unsupported(platform);
    };

    let extensions = lists::extension_array(csv);
    if extensions.is_empty() {
        return String::new();
    }

    let mut script = String::new();
    let _ = writeln!(script, "{}", platform.step_log("Setup Extensions"));
    for extension in &extensions {
        let _ = writeln!(script, "{}", install_line(platform, extension));
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn linux_section() {
        assert_eq!(
            add_extensions("php_xdebug, intl", "linux"),
            "step_log \"Setup Extensions\"\n\
             add_extension \"xdebug\" \"zend_extension\"\n\
             add_extension \"intl\" \"extension\"\n"
        );
    }

    #[test]
    fn windows_section() {
        assert_eq!(
            add_extensions("opcache, php-mbstring", "win32"),
            "Step-Log \"Setup Extensions\"\n\
             Add-Extension \"opcache\" \"zend_extension\"\n\
             Add-Extension \"mbstring\" \"extension\"\n"
        );
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(add_extensions(" ", "darwin"), "");
    }

    #[test]
    fn unsupported_platform() {
        assert!(add_extensions("xdebug", "fedora").contains("Platform fedora is not supported"));
    }
}
