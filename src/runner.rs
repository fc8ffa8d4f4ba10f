use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Result, anyhow};
use camino::Utf8PathBuf;

use crate::cli::{Cli, Command, FragmentCommand, TargetArgs, WriteArgs};
use crate::commands::{self, Platform};
use crate::inputs::{EnvInputs, Inputs, Layered, MapInputs};
use crate::{lists, scripts, setup, util, version};

pub fn run(cli: Cli) -> Result<()> {
    let inputs = load_inputs(cli.inputs.as_deref())?;

    match cli.command {
        Command::Version => println!("{}", version::get_version(&inputs)),
        Command::Render(target) => {
            let script = setup::build(&inputs, &target_platform(&target))?;
            print!("{}", script.content);
        }
        Command::Write(args) => {
            for line in handle_write(&inputs, &args)? {
                println!("{}", line);
            }
        }
        Command::Fragment { command } => println!("{}", fragment(&command)),
        Command::Extensions { csv } => print!("{}", format_extensions(&csv)),
        Command::Ini { csv } => print!("{}", format_ini(&csv)),
    }
    Ok(())
}

/// Environment first, then the optional inputs file.
fn load_inputs(path: Option<&Path>) -> Result<Layered<EnvInputs, MapInputs>> {
    let file = match path {
        Some(path) => {
            let path = Utf8PathBuf::from_path_buf(path.to_path_buf())
                .map_err(|_| anyhow!("inputs path not valid UTF-8"))?;
            tracing::debug!("loading inputs from {}", path);
            MapInputs::load(&path)?
        }
        None => MapInputs::new(),
    };
    Ok(Layered::new(EnvInputs, file))
}

/// Write one script per requested platform, strictly in order.
///
/// Returns a `<path> <php-version>` line per script; the version is the
/// argument the script expects.
fn handle_write(inputs: &dyn Inputs, args: &WriteArgs) -> Result<Vec<String>> {
    let platforms = if args.os.is_empty() {
        vec![target_platform(&TargetArgs::default())]
    } else {
        args.os.clone()
    };

    let mut written = Vec::new();
    util::for_each_sequential(&platforms, |platform| {
        let script = setup::build(inputs, platform)?;
        tracing::info!("writing {} setup for PHP {}", script.platform, script.version);
        let path = scripts::write_script(inputs, script.filename, &script.content)?;
        written.push(format!("{} {}", path, script.version));
        Ok::<(), anyhow::Error>(())
    })?;
    Ok(written)
}

/// Requested platform, or the host's own identifier.
fn target_platform(target: &TargetArgs) -> String {
    match &target.os {
        Some(os) => os.clone(),
        None => Platform::host()
            .map_or(std::env::consts::OS, |platform| platform.as_str())
            .to_owned(),
    }
}

fn fragment(command: &FragmentCommand) -> String {
    match command {
        FragmentCommand::Log {
            message,
            log_type,
            target,
        } => commands::log(message, &target_platform(target), log_type),
        FragmentCommand::StepLog { message, target } => {
            commands::step_log(message, &target_platform(target))
        }
        FragmentCommand::AddLog {
            mark,
            subject,
            status,
            target,
        } => commands::add_log(mark, subject, status, &target_platform(target)),
        FragmentCommand::Suppress { target } => commands::suppress_output(&target_platform(target)),
        FragmentCommand::Color { log_type } => commands::color(log_type).to_owned(),
        FragmentCommand::ScriptName { target } => {
            commands::script_filename(&target_platform(target))
        }
    }
}

fn format_extensions(csv: &str) -> String {
    let mut out = String::new();
    for extension in lists::extension_array(csv) {
        let _ = writeln!(out, "{}={}", lists::extension_prefix(&extension), extension);
    }
    out
}

fn format_ini(csv: &str) -> String {
    let mut out = String::new();
    for value in lists::ini_array(csv) {
        let _ = writeln!(out, "{}", value);
    }
    out
}
