//! Platform specific shell fragments.
//!
//! Every helper that takes a platform identifier returns a soft error string
//! (`Platform <id> is not supported`) for identifiers it does not know, so the
//! message lands in the generated script instead of aborting the job.

use std::fmt;

/// Operating systems with a setup script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    Darwin,
}

impl Platform {
    /// Parse a platform identifier. Both `win32` and `windows` name Windows.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "win32" | "windows" => Some(Platform::Windows),
            "linux" => Some(Platform::Linux),
            "darwin" => Some(Platform::Darwin),
            _ => None,
        }
    }

    /// Platform the binary was built for.
    pub fn host() -> Option<Self> {
        match std::env::consts::OS {
            "windows" => Some(Platform::Windows),
            "linux" => Some(Platform::Linux),
            "macos" => Some(Platform::Darwin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "win32",
            Platform::Linux => "linux",
            Platform::Darwin => "darwin",
        }
    }

    /// Name of the generic setup script template.
    pub fn script_filename(&self) -> &'static str {
        match self {
            Platform::Windows => "win32.ps1",
            Platform::Linux => "linux.sh",
            Platform::Darwin => "darwin.sh",
        }
    }

    pub fn log(&self, message: &str, log_type: LogType) -> String {
        let code = log_type.code();
        match self {
            Platform::Windows => format!("printf \"\\033[{code};1m{message} \\033[0m\""),
            Platform::Linux | Platform::Darwin => {
                format!("echo \"\\033[{code};1m{message}\\033[0m\"")
            }
        }
    }

    pub fn step_log(&self, message: &str) -> String {
        match self {
            Platform::Windows => format!("Step-Log \"{message}\""),
            Platform::Linux | Platform::Darwin => format!("step_log \"{message}\""),
        }
    }

    pub fn add_log(&self, mark: &str, subject: &str, status: &str) -> String {
        match self {
            Platform::Windows => format!("Add-Log \"{mark}\" \"{subject}\" \"{status}\""),
            Platform::Linux | Platform::Darwin => {
                format!("add_log \"{mark}\" \"{subject}\" \"{status}\"")
            }
        }
    }

    pub fn suppress_output(&self) -> &'static str {
        match self {
            Platform::Windows => " >$null 2>&1",
            Platform::Linux | Platform::Darwin => " >/dev/null 2>&1",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a colored log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogType {
    Error,
    #[default]
    Success,
    Warning,
}

impl LogType {
    /// Unknown names are treated as success.
    pub fn from_name(name: &str) -> Self {
        match name {
            "error" => LogType::Error,
            "warning" => LogType::Warning,
            _ => LogType::Success,
        }
    }

    /// ANSI color code.
    pub fn code(&self) -> &'static str {
        match self {
            LogType::Error => "31",
            LogType::Success => "32",
            LogType::Warning => "33",
        }
    }
}

/// Soft error for an unknown platform identifier.
pub fn unsupported(platform: &str) -> String {
    format!("Platform {platform} is not supported")
}

fn dispatch(platform: &str, render: impl FnOnce(Platform) -> String) -> String {
    match Platform::from_name(platform) {
        Some(platform) => render(platform),
        None => unsupported(platform),
    }
}

pub fn color(log_type: &str) -> &'static str {
    LogType::from_name(log_type).code()
}

pub fn log(message: &str, platform: &str, log_type: &str) -> String {
    dispatch(platform, |p| p.log(message, LogType::from_name(log_type)))
}

pub fn step_log(message: &str, platform: &str) -> String {
    dispatch(platform, |p| p.step_log(message))
}

pub fn add_log(mark: &str, subject: &str, status: &str, platform: &str) -> String {
    dispatch(platform, |p| p.add_log(mark, subject, status))
}

pub fn suppress_output(platform: &str) -> String {
    dispatch(platform, |p| p.suppress_output().to_owned())
}

pub fn script_filename(platform: &str) -> String {
    dispatch(platform, |p| p.script_filename().to_owned())
}
