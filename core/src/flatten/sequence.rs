use crate::dictionary::{DictionaryEntry, DictionaryResolver, RETIRED_PREFIX};
use crate::flatten::private_tag::private_tag_row;
use crate::types::{MetadataNode, Row, Value};
use log::warn;

/// Value shown on the header row in front of the 1-based `index`th item
pub fn sequence_item_label(index: usize) -> String {
    format!("Sequence Item #{}", index)
}

/// Flattens a metadata node into display rows
///
/// Fields are visited in insertion order (the VR map sidecar is skipped).
/// Each field is resolved through `resolver`:
///
/// 1. Unresolved keywords become a synthesized private tag row when they
///    look like one, and are dropped otherwise
/// 2. Sequences emit, per item, a `Sequence Item #n` header row at `depth`
///    followed by the item's own rows at `depth + 1`. An absent or empty
///    sequence contributes nothing
/// 3. Any other element emits one row; multi-valued elements are joined
///    with a backslash and a `RETIRED_` keyword prefix is stripped
///
/// Rows come back in emission order. No sorting happens here.
///
/// # Example
///
/// ```
/// use tagbrowser_core::{flatten, DictionaryEntry, MetadataNode, StaticDictionary};
/// use dicom_core::{Tag, VR};
///
/// let dict = StaticDictionary::from_entries([
///     DictionaryEntry::new(Tag(0x0008, 0x1115), VR::SQ, "ReferencedSeriesSequence"),
///     DictionaryEntry::new(Tag(0x0020, 0x000E), VR::UI, "SeriesInstanceUID"),
/// ]);
/// let node = MetadataNode::new().with(
///     "ReferencedSeriesSequence",
///     MetadataNode::new().with("SeriesInstanceUID", "1.2.3"),
/// );
///
/// let rows = flatten(&node, 0, &dict);
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].value, "Sequence Item #1");
/// assert_eq!(rows[1].display_tag(), "> (0020,000E)");
/// ```
pub fn flatten<R>(node: &MetadataNode, depth: usize, resolver: &R) -> Vec<Row>
where
    R: DictionaryResolver + ?Sized,
{
    let mut rows = Vec::new();
    flatten_into(node, depth, resolver, &mut rows);
    rows
}

fn flatten_into<R>(node: &MetadataNode, depth: usize, resolver: &R, rows: &mut Vec<Row>)
where
    R: DictionaryResolver + ?Sized,
{
    for (keyword, value) in node.fields() {
        let Some(entry) = resolver.resolve(keyword) else {
            rows.extend(private_tag_row(keyword, value, depth));
            continue;
        };

        if entry.is_sequence() {
            flatten_sequence(keyword, &entry, value, depth, resolver, rows);
        } else {
            rows.push(element_row(keyword, &entry, value, depth));
        }
    }
}

fn flatten_sequence<R>(
    keyword: &str,
    entry: &DictionaryEntry,
    value: &Value,
    depth: usize,
    resolver: &R,
    rows: &mut Vec<Row>,
) where
    R: DictionaryResolver + ?Sized,
{
    if value.is_empty() {
        return;
    }

    let Some(items) = value.as_items() else {
        warn!(
            "Skipping {} {}: sequence holds a non-item value",
            entry.tag_string(),
            keyword
        );
        return;
    };

    let tag = entry.tag_string();
    let vr = entry.vr_string();
    for (index, item) in items.iter().enumerate() {
        rows.push(Row::new(
            tag.clone(),
            vr.clone(),
            keyword,
            sequence_item_label(index + 1),
            depth,
        ));
        flatten_into(item, depth + 1, resolver, rows);
    }
}

fn element_row(keyword: &str, entry: &DictionaryEntry, value: &Value, depth: usize) -> Row {
    Row::new(
        entry.tag_string(),
        entry.vr_string(),
        keyword.strip_prefix(RETIRED_PREFIX).unwrap_or(keyword),
        value.display_string(),
        depth,
    )
}
