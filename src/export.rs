//! CSV export of a filtered color set
//!
//! The download counterpart to catalog loading: renders a set of catalog
//! entries back into `Name,HEX,RGB` rows. Pure formatting; the engine
//! only supplies the values.

use color_engine::CatalogEntry;

/// Render entries as CSV with a `Name,HEX,RGB` header.
///
/// Fields containing commas or quotes are quoted, with inner quotes
/// doubled, so the output re-loads through the catalog parser. The RGB
/// column always needs quoting (`rgb(r, g, b)` contains commas).
pub fn to_csv<'a>(entries: impl IntoIterator<Item = &'a CatalogEntry>) -> String {
    let mut out = String::from("Name,HEX,RGB\n");
    for entry in entries {
        out.push_str(&quote_field(entry.name()));
        out.push(',');
        out.push_str(&entry.hex());
        out.push(',');
        out.push_str(&quote_field(&entry.rgb_literal()));
        out.push('\n');
    }
    out
}

fn quote_field(field: &str) -> String {
    if field.contains([',', '"']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
