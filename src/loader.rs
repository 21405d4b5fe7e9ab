//! Loading process batches from delimited text.
//!
//! # Format
//!
//! One record per line, comma-separated, fields trimmed:
//!
//! ```text
//! id,burst,arrival[,priority]
//! ```
//!
//! Blank lines are skipped. Any malformed record fails the whole load;
//! there is no per-row recovery.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::models::Process;

/// Errors raised while loading a batch.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(std::io::Error),
    /// A record could not be parsed.
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        message: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "error reading process file: {e}"),
            LoadError::Parse { line, message } => write!(f, "line {line}: {message}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse { .. } => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

/// Parses a batch from text.
///
/// # Example
/// ```
/// use u_procsim::loader::parse_processes;
///
/// let processes = parse_processes("1,5,0\n2,3,1,2\n").unwrap();
/// assert_eq!(processes[1].burst_duration, 3);
/// assert_eq!(processes[1].priority, 2);
/// ```
pub fn parse_processes(text: &str) -> Result<Vec<Process>, LoadError> {
    let mut processes = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
        if fields.len() != 3 && fields.len() != 4 {
            return Err(LoadError::Parse {
                line,
                message: format!("expected 3 or 4 fields, found {}", fields.len()),
            });
        }

        let id = parse_field::<u64>(fields[0], "id", line)?;
        let burst = parse_field::<i64>(fields[1], "burst", line)?;
        let arrival = parse_field::<i64>(fields[2], "arrival", line)?;
        let mut process = Process::new(id, arrival, burst);
        if let Some(priority) = fields.get(3) {
            process.priority = parse_field::<i64>(priority, "priority", line)?;
        }
        processes.push(process);
    }

    Ok(processes)
}

/// Reads and parses a batch file.
pub fn load_processes(path: impl AsRef<Path>) -> Result<Vec<Process>, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_processes(&text)
}

fn parse_field<T: std::str::FromStr>(raw: &str, name: &str, line: usize) -> Result<T, LoadError>
where
    T::Err: fmt::Display,
{
    raw.parse::<T>().map_err(|e| LoadError::Parse {
        line,
        message: format!("invalid {name} '{raw}': {e}"),
    })
}
