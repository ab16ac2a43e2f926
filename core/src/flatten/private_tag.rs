use crate::types::{Row, Value, PRIVATE_TAG_KEYWORD};
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

/// Checks whether an unresolved keyword names a private tag
///
/// Private elements have no dictionary keyword and are keyed by their
/// concatenated group and element hex digits (e.g. `00091001`). Any run of
/// six hex characters anywhere in the keyword counts.
pub fn is_private_tag_keyword(keyword: &str) -> bool {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(r"[0-9A-Fa-f]{6}").expect("Failed to compile regex"));
    re.is_match(keyword)
}

/// Builds the `(gggg,eeee)` identifier from the first eight characters of
/// a private tag keyword
pub fn private_tag_identifier(keyword: &str) -> String {
    let group: String = keyword.chars().take(4).collect();
    let element: String = keyword.chars().skip(4).take(4).collect();
    format!("({},{})", group, element)
}

/// Synthesizes the row for a keyword the dictionary could not resolve
///
/// Returns `None` when the keyword does not look like a private tag; such
/// fields are bookkeeping artifacts and are dropped.
pub(crate) fn private_tag_row(keyword: &str, value: &Value, depth: usize) -> Option<Row> {
    if !is_private_tag_keyword(keyword) {
        debug!("Dropping unresolved keyword: {}", keyword);
        return None;
    }

    debug!("Treating {} as a private tag", keyword);
    Some(Row::new(
        private_tag_identifier(keyword),
        "",
        PRIVATE_TAG_KEYWORD,
        private_tag_value(value),
        depth,
    ))
}

/// Private values have no VR to give multiplicity meaning, so list values
/// are joined with commas rather than the DICOM backslash
fn private_tag_value(value: &Value) -> String {
    match value {
        Value::List(values) => values
            .iter()
            .map(Value::display_string)
            .collect::<Vec<_>>()
            .join(","),
        other => other.display_string(),
    }
}
