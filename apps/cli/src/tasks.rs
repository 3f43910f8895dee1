use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::{info, warn};
use pico_args::Arguments;
use regex::Regex;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::CliError;
use crate::{render, Format};

const DEFAULT_CONFIG: &str = "headmark.toml";

#[derive(Debug, Deserialize)]
struct Task {
    name: Option<String>,
    input: String,
    output: String,
    format: String,
    pretty: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct Config {
    #[serde(rename = "task", default)]
    tasks: Vec<Task>,
}

fn load_config(path: &str) -> Result<Config, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_string(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| CliError::Config {
        path: path.to_string(),
        source,
    })
}

/// Batch mode: every `[[task]]` converts the files matching its input pattern.
/// A failing file or task sets exit code 2 but does not stop the others.
pub(crate) fn run_from_config(mut pargs: Arguments) -> Result<ExitCode, CliError> {
    let config_path: Option<String> = pargs.opt_value_from_str("--config")?;
    let rest = pargs.finish();
    if !rest.is_empty() {
        return Err(CliError::UnexpectedArgs(rest));
    }
    let config_path = config_path.as_deref().unwrap_or(DEFAULT_CONFIG);
    let cfg = load_config(config_path)?;
    if cfg.tasks.is_empty() {
        warn!("{} defines no tasks", config_path);
    }

    let mut exit = ExitCode::SUCCESS;
    for task in &cfg.tasks {
        if let Err(e) = run_task(task, &mut exit) {
            eprintln!("Error: {}", e);
            exit = ExitCode::from(2);
        }
    }
    Ok(exit)
}

fn run_task(task: &Task, exit: &mut ExitCode) -> Result<(), CliError> {
    let format = task.format.parse::<Format>()?;
    let pretty = task.pretty.unwrap_or(false);
    let pattern = InputPattern::compile(&task.input)?;
    let label = task.name.as_deref().unwrap_or(&task.input);

    let (inputs, walk_errors) = collect_inputs(Path::new("."), &pattern);
    for e in &walk_errors {
        eprintln!("Error: {}", e);
    }
    if !walk_errors.is_empty() {
        *exit = ExitCode::from(2);
    }

    let matched = inputs.len();
    let mut total_bytes = 0usize;
    for (path, vars) in inputs {
        match convert_file(&path, &task.output, &vars, format, pretty) {
            Ok((out_path, bytes)) => {
                info!("{}: wrote {} ({})", label, out_path, human_size(bytes));
                total_bytes += bytes;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                *exit = ExitCode::from(2);
            }
        }
    }
    info!(
        "{}: {} files, {} written as {}",
        label,
        matched,
        human_size(total_bytes),
        task.format
    );
    Ok(())
}

/// Files under `root` matching `pattern`, plus any entries the walk could not read.
/// Collected up front so outputs written under `root` are never picked up as inputs.
fn collect_inputs(
    root: &Path,
    pattern: &InputPattern,
) -> (Vec<(PathBuf, HashMap<String, String>)>, Vec<CliError>) {
    let mut inputs = Vec::new();
    let mut errors = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                errors.push(CliError::Walk(e));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(vars) = pattern.captures(&entry.path().to_string_lossy()) {
            inputs.push((entry.into_path(), vars));
        }
    }
    (inputs, errors)
}

fn convert_file(
    path: &Path,
    output: &str,
    vars: &HashMap<String, String>,
    format: Format,
    pretty: bool,
) -> Result<(String, usize), CliError> {
    let out_path = substitute_output(output, vars)?;
    let input = fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.display().to_string(),
        source,
    })?;
    let rendered = render(&input, format, pretty)?;
    let write_err = |source| CliError::WriteOutput {
        path: out_path.clone(),
        source,
    };
    if let Some(parent) = Path::new(&out_path).parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(&out_path, &rendered).map_err(write_err)?;
    Ok((out_path, rendered.len()))
}

/// `./content/[lang]/[...slug].md`: `[name]` matches one path segment,
/// `[...name]` matches the rest, everything else is literal.
struct InputPattern {
    re: Regex,
}

impl InputPattern {
    fn compile(pattern: &str) -> Result<Self, CliError> {
        let err = |reason: &str| CliError::Pattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };
        let mut re = String::from("^");
        let mut rest = pattern;
        while let Some(open) = rest.find('[') {
            re.push_str(&regex::escape(&rest[..open]));
            let close = rest[open..]
                .find(']')
                .ok_or_else(|| err("unclosed bracket"))?
                + open;
            let var = &rest[open + 1..close];
            let (name, spread) = match var.strip_prefix("...") {
                Some(name) => (name, true),
                None => (var, false),
            };
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(err("variable names must be alphanumeric"));
            }
            let body = if spread { ".+" } else { "[^/]+" };
            re.push_str(&format!("(?P<{}>{})", name, body));
            rest = &rest[close + 1..];
        }
        re.push_str(&regex::escape(rest));
        re.push('$');
        let re = Regex::new(&re).map_err(|e| err(&e.to_string()))?;
        Ok(InputPattern { re })
    }

    fn captures(&self, path: &str) -> Option<HashMap<String, String>> {
        let caps = self.re.captures(path)?;
        let map = self
            .re
            .capture_names()
            .flatten()
            .filter_map(|name| Some((name.to_string(), caps.name(name)?.as_str().to_string())))
            .collect();
        Some(map)
    }
}

fn substitute_output(pattern: &str, vars: &HashMap<String, String>) -> Result<String, CliError> {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let close = rest[open..]
            .find(']')
            .ok_or_else(|| CliError::Pattern {
                pattern: pattern.to_string(),
                reason: "unclosed bracket".to_string(),
            })?
            + open;
        let name = rest[open + 1..close].trim_start_matches("...");
        let val = vars.get(name).ok_or_else(|| CliError::MissingVar {
            pattern: pattern.to_string(),
            name: name.to_string(),
        })?;
        out.push_str(val);
        rest = &rest[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn human_size(bytes: usize) -> String {
    if bytes >= 1_048_576 {
        format!("{:.1} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1} kB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
