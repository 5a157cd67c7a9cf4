//! CSV running-order importer for rundown
//!
//! This module implements the one-shot batch transform that turns a
//! spreadsheet export of a program running order into a JSON schedule.
//!
//! The conversion deliberately uses a naive separator split instead of a
//! quoting CSV parser: the historical exports were never quoted, and names
//! assembled from merged spreadsheet columns keep their embedded
//! separators. The one wrinkle is the length cell, which the spreadsheet
//! exports with a decimal comma ("1,0" for one minute) that the separator
//! split cuts in half; the importer re-merges it before processing.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::schedule::item::{Schedule, ScheduleItem};
use log::{debug, info};
use serde::Serialize;
use std::path::Path;

/// Output variants of the importer
///
/// Two snapshots of the historical converter disagree on the JSON field
/// order and on the fallback duration for rows without a usable length,
/// so both are kept as an explicit configuration choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportVariant {
    /// Serialize `name` before `length`; fallback duration "0:20"
    NameFirst,
    /// Serialize `length` before `name`; fallback duration "0:00"
    LengthFirst,
}

impl ImportVariant {
    /// Returns the configuration name of the variant
    pub fn name(&self) -> &'static str {
        match self {
            ImportVariant::NameFirst => "name-first",
            ImportVariant::LengthFirst => "length-first",
        }
    }

    /// Returns the fallback duration of the variant
    pub fn default_duration(&self) -> &'static str {
        match self {
            ImportVariant::NameFirst => crate::config::DEFAULT_DURATION_NAME_FIRST,
            ImportVariant::LengthFirst => crate::config::DEFAULT_DURATION_LENGTH_FIRST,
        }
    }

    /// Returns all available variants
    pub fn all() -> Vec<ImportVariant> {
        vec![ImportVariant::NameFirst, ImportVariant::LengthFirst]
    }
}

impl Default for ImportVariant {
    fn default() -> Self {
        ImportVariant::LengthFirst
    }
}

impl std::fmt::Display for ImportVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ImportVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name-first" => Ok(ImportVariant::NameFirst),
            "length-first" => Ok(ImportVariant::LengthFirst),
            other => Err(format!(
                "unknown import variant '{other}' (expected 'name-first' or 'length-first')"
            )),
        }
    }
}

/// Converts a CSV running-order export into a schedule
///
/// Rows are split on the configured separator, the header row is
/// discarded, and everything after the last row with a non-empty name
/// column is dropped (trailing computation rows in the source
/// spreadsheet). Rows without a usable length get the configured fallback
/// duration.
///
/// An empty or header-only export yields an empty schedule, not an error.
///
/// # Arguments
/// * `content` - Raw text of the CSV export
/// * `config` - Configuration controlling separator, name column, variant
///   and fallback duration
///
/// # Returns
/// Returns the converted schedule in row order
pub fn convert_csv(content: &str, config: &Config) -> Schedule {
    let rows: Vec<Vec<String>> = content
        .replace('\r', "")
        .split('\n')
        .map(|row| split_row(row, config.separator))
        .collect();

    // Trailing computation rows have an empty name column; everything
    // after the last named row is discarded, scanning from the end.
    let last_named = rows.iter().rposition(|fields| {
        fields
            .get(config.name_column)
            .is_some_and(|name| !name.is_empty())
    });

    let data_rows = match last_named {
        Some(last) if last >= 1 => &rows[1..=last],
        _ => &[][..],
    };

    let separator = config.separator.to_string();
    let decimal_residue = format!("{separator}0");
    let fallback = config.fallback_duration();

    let mut schedule = Schedule::default();
    for fields in data_rows {
        let raw_length = fields.first().cloned().unwrap_or_default();
        let length = raw_length.replace(&decimal_residue, "");
        let length = if length.is_empty() {
            fallback.to_string()
        } else {
            length
        };

        let name = fields
            .get(config.name_column..)
            .unwrap_or_default()
            .join(&separator);

        debug!("Converted row: '{name}' [{length}]");
        schedule.add_item(ScheduleItem::new(name, length));
    }

    schedule
}

/// Splits a raw CSV row into logical fields
///
/// When the first two raw fields are both all-digits, they are one length
/// cell that the separator cut at its decimal comma; they are re-merged
/// exactly once so the name column keeps its designated index.
fn split_row(row: &str, separator: char) -> Vec<String> {
    let mut fields: Vec<String> = row.split(separator).map(str::to_string).collect();

    if fields.len() >= 2 && is_all_digits(&fields[0]) && is_all_digits(&fields[1]) {
        let decimal_part = fields.remove(1);
        fields[0] = format!("{}{separator}{decimal_part}", fields[0]);
    }

    fields
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// Serialization shadows pinning the JSON field order per variant;
// serde_json's default map would sort keys alphabetically.
#[derive(Serialize)]
struct NameFirstRecord<'a> {
    name: &'a str,
    length: &'a str,
}

#[derive(Serialize)]
struct LengthFirstRecord<'a> {
    length: &'a str,
    name: &'a str,
}

/// Renders schedule items as the pretty-printed JSON schedule document
///
/// # Arguments
/// * `items` - Schedule items in broadcast order
/// * `variant` - Variant controlling the JSON field order
///
/// # Returns
/// Returns the two-space-indented JSON array
pub fn render_json(items: &[ScheduleItem], variant: ImportVariant) -> Result<String> {
    let rendered = match variant {
        ImportVariant::NameFirst => {
            let records: Vec<NameFirstRecord> = items
                .iter()
                .map(|item| NameFirstRecord {
                    name: &item.name,
                    length: &item.length,
                })
                .collect();
            serde_json::to_string_pretty(&records)
        }
        ImportVariant::LengthFirst => {
            let records: Vec<LengthFirstRecord> = items
                .iter()
                .map(|item| LengthFirstRecord {
                    length: &item.length,
                    name: &item.name,
                })
                .collect();
            serde_json::to_string_pretty(&records)
        }
    };

    rendered.map_err(|e| Error::ScheduleJsonError {
        path: "<in-memory schedule>".to_string(),
        source: e,
    })
}

/// Imports a CSV running-order export into a JSON schedule document
///
/// One-shot batch transform: read the export, convert it, write the JSON
/// document. An unreadable input is fatal and no partial output is
/// written.
///
/// # Arguments
/// * `input` - Path of the CSV export
/// * `output` - Path of the JSON schedule document to write
/// * `config` - Importer configuration
///
/// # Returns
/// Returns the number of imported schedule items
pub fn import_schedule<P: AsRef<Path>>(input: P, output: P, config: &Config) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();

    info!("Reading running order from {}", input.display());
    let content = std::fs::read_to_string(input).map_err(|e| Error::ScheduleReadError {
        path: input.display().to_string(),
        source: e,
    })?;

    let schedule = convert_csv(&content, config);
    let rendered = render_json(schedule.items(), config.import_variant)?;

    std::fs::write(output, rendered).map_err(|e| Error::ScheduleWriteError {
        path: output.display().to_string(),
        source: e,
    })?;

    info!(
        "Wrote {} schedule items to {}",
        schedule.len(),
        output.display()
    );
    Ok(schedule.len())
}
