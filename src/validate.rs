//! Listing format validation
//!
//! This module checks that a rendered listing has the block structure the
//! downstream batari Basic build expects: every `data` header is followed
//! by chunk lines and exactly one `end`, chunk lines hold at most
//! [`CHUNK_WIDTH`] integers, and nothing else appears outside comments and
//! blank lines.

use crate::format::{CHUNK_WIDTH, DATA_KEYWORD, END_KEYWORD, INDENT, SEPARATOR};
use crate::utils::error::{Result, TableError};

/// Tables found in a validated listing, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingSummary {
    /// Each table's name with the number of values it holds.
    pub tables: Vec<(String, usize)>,
}

impl ListingSummary {
    /// Number of values in the named table, if present.
    pub fn value_count(&self, name: &str) -> Option<usize> {
        self.tables.iter().find(|(n, _)| n == name).map(|&(_, c)| c)
    }

    /// Fails unless every table holds exactly `expected` values.
    pub fn require_uniform(&self, expected: usize) -> Result<()> {
        for (name, count) in &self.tables {
            if *count != expected {
                return Err(TableError::Validation(format!(
                    "Table {} has {} values, expected {}",
                    name, count, expected
                )));
            }
        }
        Ok(())
    }
}

fn invalid(line_no: usize, msg: impl Into<String>) -> TableError {
    TableError::Validation(format!("line {}: {}", line_no, msg.into()))
}

/// Validates a chunk line and returns how many values it holds.
fn parse_chunk_line(line_no: usize, line: &str) -> Result<usize> {
    let body = line
        .strip_prefix(INDENT)
        .ok_or_else(|| invalid(line_no, "chunk line must be indented by two spaces"))?;

    let mut count = 0;
    for field in body.split(SEPARATOR) {
        field
            .parse::<i32>()
            .map_err(|_| invalid(line_no, format!("invalid value {:?}", field)))?;
        count += 1;
    }

    if count > CHUNK_WIDTH {
        return Err(invalid(
            line_no,
            format!("{} values on one line, at most {} allowed", count, CHUNK_WIDTH),
        ));
    }
    Ok(count)
}

/// Validates the structure of a rendered listing.
pub fn validate_listing(text: &str) -> Result<ListingSummary> {
    let mut summary = ListingSummary::default();
    // Name and running value count of the block being read.
    let mut open: Option<(String, usize)> = None;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        match open.take() {
            Some((name, count)) => {
                if line == END_KEYWORD {
                    summary.tables.push((name, count));
                } else {
                    let n = parse_chunk_line(line_no, line)?;
                    open = Some((name, count + n));
                }
            }
            None => {
                if line.is_empty() || line.starts_with(';') {
                    continue;
                }
                let name = line
                    .strip_prefix(DATA_KEYWORD)
                    .and_then(|rest| rest.strip_prefix(' '))
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| invalid(line_no, format!("unexpected line {:?}", line)))?;
                open = Some((name.to_string(), 0));
            }
        }
    }

    if let Some((name, _)) = open {
        return Err(TableError::Validation(format!(
            "table {} is missing its {} marker",
            name, END_KEYWORD
        )));
    }
    Ok(summary)
}
