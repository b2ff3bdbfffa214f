//! Key-value sources: the `.env` line grammar, file reader and environment reader

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Origin name used in errors and logs for the process environment
pub const ENVIRONMENT: &str = "<environment>";

/// Key-value mapping parsed from one source
pub type Vars = HashMap<String, String>;

/// Parse one line of a key-value source.
///
/// Returns `None` for blank lines and `#` comments, and the trimmed
/// `(key, value)` pair split on the first `=` otherwise. A line without `=`
/// is returned as `Err` holding the trimmed line.
pub fn parse_line(line: &str) -> std::result::Result<Option<(&str, &str)>, &str> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    match line.split_once('=') {
        Some((key, value)) => Ok(Some((key.trim(), value.trim()))),
        None => Err(line),
    }
}

/// Build a mapping from a sequence of lines.
///
/// Later occurrences of a key overwrite earlier ones. The first malformed
/// line or read error stops the scan.
pub fn read_source<I>(source_name: &str, lines: I) -> Result<Vars>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut vars = Vars::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.map_err(|source| Error::Io {
            path: source_name.into(),
            source,
        })?;

        match parse_line(&line) {
            Ok(Some((key, value))) => {
                vars.insert(key.to_string(), value.to_string());
            }
            Ok(None) => {}
            Err(malformed) => {
                return Err(Error::MalformedLine {
                    source_name: source_name.to_string(),
                    line_number: index + 1,
                    line: malformed.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        event = "envcfg.source.parsed",
        source = source_name,
        entries = vars.len(),
    );

    Ok(vars)
}

/// Read a `.env` file.
///
/// Returns `Ok(None)` when the file does not exist. Any other open or read
/// failure is an error.
pub fn read_file(path: &Path) -> Result<Option<Vars>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(event = "envcfg.file.not_found", path = %path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let source_name = path.display().to_string();
    read_source(&source_name, BufReader::new(file).lines()).map(Some)
}

/// Read the process environment as `KEY=VALUE` entries.
///
/// Non-UTF-8 names and values are converted lossily.
pub fn read_environment() -> Result<Vars> {
    let entries = std::env::vars_os().map(|(key, value)| {
        format!("{}={}", key.to_string_lossy(), value.to_string_lossy())
    });
    read_entries(entries)
}

/// Read an explicit list of `KEY=VALUE` environment entries.
pub fn read_entries<I, S>(entries: I) -> Result<Vars>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    read_source(ENVIRONMENT, entries.into_iter().map(|entry| Ok(entry.into())))
}
