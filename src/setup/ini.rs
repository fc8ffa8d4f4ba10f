use std::fmt::Write as _;

use crate::commands::{self, Platform};
use crate::lists;

const WINDOWS_INI: &str = r"C:\tools\php\php.ini";

/// Script section appending `key=value` directives to php.ini.
///
/// All directives go out in one append; each gets its own log line.
pub fn add_ini_values(csv: &str, platform: &str) -> String {
    let Some(platform) = Platform::from_name(platform) else {
        return commands::unsupported(platform);
    };

    let values = lists::ini_array(csv);
    if values.is_empty() {
        return String::new();
    }

    let joined = values.join("\n");
    let mut script = String::new();
    let _ = writeln!(script, "{}", platform.step_log("Add php.ini values"));
    let append = match platform {
        Platform::Windows => format!("Add-Content {WINDOWS_INI} \"{joined}\""),
        Platform::Linux | Platform::Darwin => format!("echo \"{joined}\" >> $ini_file"),
    };
    let _ = writeln!(script, "{}", append);
    for value in &values {
        let _ = writeln!(script, "{}", platform.add_log("$tick", value, "Added to php.ini"));
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unix_section() {
        assert_eq!(
            add_ini_values("post_max_size=256M, short_open_tag=On", "linux"),
            "step_log \"Add php.ini values\"\n\
             echo \"post_max_size=256M\nshort_open_tag=On\" >> $ini_file\n\
             add_log \"$tick\" \"post_max_size=256M\" \"Added to php.ini\"\n\
             add_log \"$tick\" \"short_open_tag=On\" \"Added to php.ini\"\n"
        );
    }

    #[test]
    fn windows_section() {
        assert_eq!(
            add_ini_values("date.timezone=UTC", "windows"),
            "Step-Log \"Add php.ini values\"\n\
             Add-Content C:\\tools\\php\\php.ini \"date.timezone=UTC\"\n\
             Add-Log \"$tick\" \"date.timezone=UTC\" \"Added to php.ini\"\n"
        );
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(add_ini_values("", "linux"), "");
    }

    #[test]
    fn unsupported_platform() {
        assert!(add_ini_values("a=1", "fedora").contains("Platform fedora is not supported"));
    }
}
