//! Catalog loading from CSV
//!
//! Loads the named color catalog from a `Name,HEX,RGB` CSV file (the
//! shape of the upstream `color_srgb.csv` dataset) into a read-only
//! [`Catalog`]. Loading happens once per process; the resulting value is
//! passed by reference everywhere else.
//!
//! The field splitter handles quoted fields with embedded commas and
//! doubled quotes, which the dataset needs for its `"rgb(r, g, b)"`
//! column. Embedded newlines inside quotes are not supported; the
//! dataset has none and a row-per-line model keeps line numbers in
//! error messages honest.

use std::fs;
use std::path::Path;

use color_engine::{Catalog, CatalogEntry, Rgb};

use crate::error::CatalogError;

/// Load a catalog from a CSV file.
///
/// The header row must contain `Name` and `HEX` columns (case-insensitive);
/// column order is free and extra columns are ignored. The `RGB` column is
/// not read back -- the hex form is canonical and the engine re-derives
/// the rest.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    let catalog = parse_catalog(&content)?;
    tracing::info!(
        entries = catalog.len(),
        path = %path.display(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Parse catalog CSV content. Split out from [`load_catalog`] so tests
/// can feed strings directly.
pub fn parse_catalog(content: &str) -> Result<Catalog, CatalogError> {
    let mut lines = content.lines().enumerate();

    let (_, header) = lines.next().ok_or(CatalogError::Empty)?;
    let header_fields = split_fields(header, 1)?;
    let name_idx = find_column(&header_fields, "name")?;
    let hex_idx = find_column(&header_fields, "hex")?;
    let needed = name_idx.max(hex_idx) + 1;

    let mut entries = Vec::new();
    for (i, line) in lines {
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_fields(line, line_no)?;
        if fields.len() < needed {
            return Err(CatalogError::FieldCount {
                line: line_no,
                expected: needed,
                found: fields.len(),
            });
        }
        let hex = fields[hex_idx].trim();
        let rgb: Rgb = hex.parse().map_err(|source| CatalogError::BadColor {
            line: line_no,
            value: hex.to_string(),
            source,
        })?;
        entries.push(CatalogEntry::new(fields[name_idx].trim(), rgb));
    }

    Ok(Catalog::new(entries))
}

fn find_column(header: &[String], wanted: &'static str) -> Result<usize, CatalogError> {
    header
        .iter()
        .position(|f| f.trim().eq_ignore_ascii_case(wanted))
        .ok_or(CatalogError::MissingColumn(wanted))
}

/// Split one CSV line into fields.
///
/// Quoted fields may contain commas; a doubled quote inside a quoted
/// field is a literal quote. A quote that never closes is an error.
fn split_fields(line: &str, line_no: usize) -> Result<Vec<String>, CatalogError> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(c),
        }
    }
    if in_quotes {
        return Err(CatalogError::UnclosedQuote { line: line_no });
    }
    fields.push(field);
    Ok(fields)
}
