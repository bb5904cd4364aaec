use std::io::BufRead;
use std::path::Path;

use fs_err as fs;
use notelog_lib::error::NotelogError;
use notelog_lib::{Category, MessageLog, Newline};
use tracing::{debug, trace};

/// Splits `kind: text` into its category and text. Lines without a known
/// kind are plain and keep their full content. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<(Category, &str)> {
    if line.trim().is_empty() {
        return None;
    }
    let parsed = line
        .split_once(':')
        .and_then(|(kind, text)| match kind.trim().parse::<Category>() {
            Ok(
                category @ (Category::Info
                | Category::Warning
                | Category::Error
                | Category::Success),
            ) => Some((category, text)),
            _ => None,
        });
    Some(parsed.unwrap_or((Category::Plain, line)))
}

/// Collects every non-blank line of `reader` into a fresh log.
pub fn read_log<R: BufRead>(
    reader: R,
    prefix: &str,
    newline: Newline,
) -> Result<MessageLog, NotelogError> {
    let mut log = MessageLog::with_newline(prefix, newline);
    for line in reader.lines() {
        let line = line?;
        let Some((category, text)) = parse_line(&line) else {
            continue;
        };
        trace!(%category, "parsed line: {text}");
        match category {
            Category::Info => log.add_info([text]),
            Category::Warning => log.add_warning([text]),
            Category::Error => log.add_error([text]),
            Category::Success => log.add_success([text]),
            Category::Fatal | Category::Plain => log.add_plain([text]),
        }
    }
    Ok(log)
}

/// Reads each file into its own log, prefixed with `prefix` or the file stem,
/// and merges them in order into one log.
pub fn collect_files<P: AsRef<Path>>(
    files: &[P],
    prefix: Option<&str>,
    newline: Newline,
) -> Result<MessageLog, NotelogError> {
    let mut merged = MessageLog::with_newline(prefix.unwrap_or_default(), newline);
    for path in files {
        let path = path.as_ref();
        let file_prefix = match prefix {
            Some(p) => p.to_string(),
            None => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        let reader = std::io::BufReader::new(fs::File::open(path)?);
        let log = read_log(reader, &file_prefix, newline)?;
        debug!("read {} notes from {}", log.len(), path.display());
        merged.merge(log);
    }
    Ok(merged)
}
