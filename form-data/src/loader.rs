use std::{fs::File, io::Read, path::Path};

use form_core::{ColorTable, ZipRecord, ZipTable};
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading lookup data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported data file '{0}' (expected .csv or .json)")]
    UnsupportedFormat(String),

    #[error("empty '{column}' on row {row}")]
    EmptyField { row: usize, column: &'static str },

    #[error("color '{0}' must map to a string code")]
    InvalidColorCode(String),
}

/// Source format of a lookup file, chosen from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Json,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Result<Self, DataLoadError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(DataLoadError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// One postal-code row as it appears in a JSON file. Codes may be written as
/// strings or bare numbers.
#[derive(Debug, Deserialize)]
struct JsonZipRow {
    #[serde(deserialize_with = "string_or_number")]
    zipcode: String,
    city: String,
    state: String,
}

#[derive(Debug, Deserialize)]
struct JsonZipFile {
    zipcode_data: Vec<JsonZipRow>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

fn check_record(
    record: &ZipRecord,
    row: usize,
) -> Result<(), DataLoadError> {
    if record.zipcode.is_empty() {
        return Err(DataLoadError::EmptyField {
            row,
            column: "zipcode",
        });
    }
    if record.city.is_empty() {
        return Err(DataLoadError::EmptyField { row, column: "city" });
    }
    if record.state.is_empty() {
        return Err(DataLoadError::EmptyField {
            row,
            column: "state",
        });
    }
    Ok(())
}

/// Loader for the postal-code table.
///
/// Two layouts are accepted:
///
/// ```csv
/// zipcode,city,state
/// 62701,Springfield,IL
/// ```
///
/// ```json
/// { "zipcode_data": [ { "zipcode": "62701", "city": "Springfield", "state": "IL" } ] }
/// ```
///
/// Rows keep file order; lookups return the first exact match.
pub struct ZipLoader;

impl ZipLoader {
    pub fn parse_csv<R: Read>(reader: R) -> Result<ZipTable, DataLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let mut records = Vec::new();
        for (idx, result) in csv_reader.deserialize::<ZipRecord>().enumerate() {
            let record = result?;
            check_record(&record, idx + 1)?;
            records.push(record);
        }

        debug!(count = records.len(), "parsed zip CSV");
        Ok(ZipTable::new(records))
    }

    pub fn parse_json<R: Read>(reader: R) -> Result<ZipTable, DataLoadError> {
        let file: JsonZipFile = serde_json::from_reader(reader)?;

        let mut records = Vec::with_capacity(file.zipcode_data.len());
        for (idx, row) in file.zipcode_data.into_iter().enumerate() {
            let record = ZipRecord::new(row.zipcode.trim(), row.city.trim(), row.state.trim());
            check_record(&record, idx + 1)?;
            records.push(record);
        }

        debug!(count = records.len(), "parsed zip JSON");
        Ok(ZipTable::new(records))
    }

    pub fn load_file(path: &Path) -> Result<ZipTable, DataLoadError> {
        let format = DataFormat::from_path(path)?;
        let file = File::open(path)?;
        match format {
            DataFormat::Csv => Self::parse_csv(file),
            DataFormat::Json => Self::parse_json(file),
        }
    }
}

/// Loader for the color table: a JSON object mapping color name to code.
/// Document order is the selector order.
pub struct ColorLoader;

impl ColorLoader {
    pub fn parse_json<R: Read>(reader: R) -> Result<ColorTable, DataLoadError> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_reader(reader)?;

        let entries = map
            .into_iter()
            .map(|(name, value)| match value {
                serde_json::Value::String(code) => Ok((name, code)),
                _ => Err(DataLoadError::InvalidColorCode(name)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = entries.len(), "parsed color JSON");
        Ok(ColorTable::new(entries))
    }

    pub fn load_file(path: &Path) -> Result<ColorTable, DataLoadError> {
        match DataFormat::from_path(path)? {
            DataFormat::Json => Self::parse_json(File::open(path)?),
            DataFormat::Csv => Err(DataLoadError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}
