//! Keyword to data dictionary entry resolution
//!
//! The flattener never consults a global table. It receives a
//! [`DictionaryResolver`], so callers can plug in the standard dictionary,
//! a fixed table, or a closure.

mod standard;
mod table;

pub use standard::StandardDictionary;
pub use table::StaticDictionary;

use dicom_core::{Tag, VR};

/// Prefix some dictionaries put on the keywords of retired attributes
pub const RETIRED_PREFIX: &str = "RETIRED_";

/// A data dictionary entry looked up by keyword
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryEntry {
    /// Attribute tag
    pub tag: Tag,

    /// Value representation
    pub vr: VR,

    /// Canonical keyword
    pub keyword: String,
}

impl DictionaryEntry {
    /// Creates a new entry
    pub fn new(tag: Tag, vr: VR, keyword: impl Into<String>) -> Self {
        Self {
            tag,
            vr,
            keyword: keyword.into(),
        }
    }

    /// Returns true if the attribute is a sequence
    pub fn is_sequence(&self) -> bool {
        self.vr == VR::SQ
    }

    /// Formatted tag identifier, e.g. `(0008,0100)`
    pub fn tag_string(&self) -> String {
        format_tag(self.tag)
    }

    /// Value representation code, e.g. `PN`
    pub fn vr_string(&self) -> String {
        self.vr.to_string().to_owned()
    }
}

/// Resolves metadata keywords to dictionary entries
///
/// Implementations must be deterministic and free of side effects: the same
/// keyword always resolves to the same entry or to `None`.
pub trait DictionaryResolver {
    /// Looks up a keyword, returning `None` when it is unknown
    fn resolve(&self, keyword: &str) -> Option<DictionaryEntry>;
}

impl<F> DictionaryResolver for F
where
    F: Fn(&str) -> Option<DictionaryEntry>,
{
    fn resolve(&self, keyword: &str) -> Option<DictionaryEntry> {
        self(keyword)
    }
}

/// Formats a tag as `(GGGG,EEEE)` with upper-case hex digits
pub fn format_tag(tag: Tag) -> String {
    format!("({:04X},{:04X})", tag.group(), tag.element())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tag() {
        assert_eq!(format_tag(Tag(0x0008, 0x0100)), "(0008,0100)");
        assert_eq!(format_tag(Tag(0x7FE0, 0x0010)), "(7FE0,0010)");
        assert_eq!(format_tag(Tag(0x0020, 0x000D)), "(0020,000D)");
    }

    #[test]
    fn test_entry_helpers() {
        let entry = DictionaryEntry::new(Tag(0x0008, 0x1115), VR::SQ, "ReferencedSeriesSequence");
        assert!(entry.is_sequence());
        assert_eq!(entry.tag_string(), "(0008,1115)");
        assert_eq!(entry.vr_string(), "SQ");
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |keyword: &str| {
            (keyword == "Modality").then(|| DictionaryEntry::new(Tag(0x0008, 0x0060), VR::CS, "Modality"))
        };
        assert!(resolver.resolve("Modality").is_some());
        assert!(resolver.resolve("Nope").is_none());
    }
}
