use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use notelog_lib::error::NotelogError;
use notelog_lib::{MessageLog, Newline};

use crate::config::{Config, NewlineStyle};
use crate::input::{collect_files, read_log};

#[derive(Parser, Debug, Default)]
pub struct CollectArgs {
    /// Files with one `kind: text` note per line. Reads stdin when empty.
    #[arg(index = 1)]
    pub files: Vec<PathBuf>,

    /// Prefix for every note instead of the file stem
    #[arg(short, long)]
    pub prefix: Option<String>,

    #[arg(long, value_enum)]
    pub newline: Option<NewlineStyle>,

    /// Print the collected notes as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Exit with a failure code when any error note was collected
    #[arg(long)]
    pub fail_on_error: bool,
}

impl CollectArgs {
    /// Command line newline style, then the config's.
    pub fn newline(&self, config: &Config) -> Newline {
        self.newline.unwrap_or(config.newline).resolve()
    }

    /// Command line prefix, then the config's. `None` means per-file stems.
    pub fn prefix<'a>(&'a self, config: &'a Config) -> Option<&'a str> {
        self.prefix.as_deref().or(config.prefix.as_deref())
    }

    pub fn fails(&self, config: &Config, log: &MessageLog) -> bool {
        (self.fail_on_error || config.fail_on_error) && log.has_errors()
    }
}

/// Builds the merged log from the listed files, or from `stdin` when none are given.
pub fn collect_notes<R: BufRead>(
    config: &Config,
    args: &CollectArgs,
    stdin: R,
) -> Result<MessageLog, NotelogError> {
    let newline = args.newline(config);
    let prefix = args.prefix(config);

    if args.files.is_empty() {
        read_log(stdin, prefix.unwrap_or_default(), newline)
    } else {
        collect_files(&args.files, prefix, newline)
    }
}

pub fn write_summary<W: Write>(out: &mut W, log: &MessageLog) -> std::io::Result<()> {
    let lf = log.newline().as_str();
    write!(out, "prevailing: {}{lf}", log.prevailing())?;
    write!(out, "infos: {}{lf}", log.has_infos())?;
    write!(out, "warnings: {}{lf}", log.has_warnings())?;
    write!(out, "errors: {}{lf}", log.has_errors())?;
    write!(out, "successes: {}{lf}", log.has_successes())?;
    write!(out, "notes: {}{lf}", log.len())
}

pub fn write_json<W: Write>(out: &mut W, log: &MessageLog) -> Result<(), NotelogError> {
    serde_json::to_writer_pretty(&mut *out, log.notes())?;
    writeln!(out)?;
    Ok(())
}
