use std::ffi::OsStr;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;
use std::str::FromStr;

use env_logger::Env;
use headmark_core::parse_markdown;
use pico_args::Arguments;

mod error;
mod tasks;

use error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Html,
    Tokens,
}

impl FromStr for Format {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Format::Html),
            "tokens" => Ok(Format::Tokens),
            other => Err(CliError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Default)]
struct CliArgs {
    input: Option<String>,
    format: Option<String>,
    pretty: bool,
}

fn parse_args(mut pargs: Arguments) -> Result<CliArgs, CliError> {
    let input: Option<String> = pargs.opt_value_from_str(["-i", "--input"])?;
    let format: Option<String> = pargs.opt_value_from_str(["-f", "--format"])?;
    let pretty = pargs.contains("--pretty");

    let rest = pargs.finish();
    if !rest.is_empty() {
        return Err(CliError::UnexpectedArgs(rest));
    }

    Ok(CliArgs {
        input,
        format,
        pretty,
    })
}

fn read_input(path: Option<&str>) -> Result<String, CliError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::ReadInput {
            path: path.to_string(),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::Stdin)?;
            Ok(buf)
        }
    }
}

pub(crate) fn render(input: &str, format: Format, pretty: bool) -> Result<String, CliError> {
    match format {
        Format::Html => Ok(headmark_renderer_html::parse_markdown_to_html(input)),
        Format::Tokens => {
            let tokens = parse_markdown(input);
            let s = if pretty {
                headmark_renderer_json::render_tokens_to_string_pretty(&tokens)?
            } else {
                headmark_renderer_json::render_tokens_to_string(&tokens)?
            };
            Ok(s)
        }
    }
}

fn convert(pargs: Arguments) -> Result<ExitCode, CliError> {
    let args = parse_args(pargs)?;
    let format = args.format.as_deref().unwrap_or("html").parse::<Format>()?;
    let input = read_input(args.input.as_deref())?;
    log::debug!("read {} bytes", input.len());
    println!("{}", render(&input, format, args.pretty)?);
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut pargs = Arguments::from_env();
    let result = if std::env::args_os().nth(1).as_deref() == Some(OsStr::new("run")) {
        // consume the subcommand itself
        match pargs.subcommand() {
            Ok(_) => tasks::run_from_config(pargs),
            Err(e) => Err(e.into()),
        }
    } else {
        convert(pargs)
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
