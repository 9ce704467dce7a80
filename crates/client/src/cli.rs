//! Command-line arguments for the `vinlookup` binary.

use crate::page::{render_html, render_text, PageState};

pub const USAGE: &str = "Usage: vinlookup [--html] [VIN...]\n\n\
Each VIN argument is submitted in turn. With no VINs, one VIN per line is read from stdin.\n\n\
Options:\n  --html    Render the page as an HTML fragment instead of text\n  -h, --help  Show this help";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

impl OutputFormat {
    pub fn render(self, page: &PageState) -> String {
        match self {
            Self::Text => render_text(page),
            Self::Html => render_html(page),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub format: OutputFormat,
    /// Raw VIN inputs; empty means read from stdin
    pub vins: Vec<String>,
    pub help: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),
}

/// Parse arguments (without the program name).
///
/// Everything after `--` is taken as a VIN, even if it starts with `-`.
pub fn parse_args<I>(args: I) -> Result<CliOptions, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--html" => options.format = OutputFormat::Html,
            "--text" => options.format = OutputFormat::Text,
            "-h" | "--help" => options.help = true,
            "--" => {
                options.vins.extend(args.by_ref());
            }
            s if s.starts_with("--") => return Err(CliError::UnknownOption(s.to_string())),
            _ => options.vins.push(arg),
        }
    }

    Ok(options)
}
