use super::{DictionaryEntry, DictionaryResolver, RETIRED_PREFIX};
use dicom_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dicom_dictionary_std::StandardDataDictionary;

/// Resolver backed by the standard DICOM data dictionary
///
/// Keywords carrying the `RETIRED_` prefix are looked up by their bare name
/// when the prefixed name is unknown.
///
/// # Example
///
/// ```
/// use tagbrowser_core::{DictionaryResolver, StandardDictionary};
///
/// let entry = StandardDictionary::new().resolve("PatientName").unwrap();
/// assert_eq!(entry.tag_string(), "(0010,0010)");
/// assert_eq!(entry.vr_string(), "PN");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardDictionary;

impl StandardDictionary {
    /// Creates a resolver over the standard dictionary
    pub fn new() -> Self {
        Self
    }
}

impl DictionaryResolver for StandardDictionary {
    fn resolve(&self, keyword: &str) -> Option<DictionaryEntry> {
        let dict = StandardDataDictionary;
        let entry = dict.by_name(keyword).or_else(|| {
            keyword
                .strip_prefix(RETIRED_PREFIX)
                .and_then(|bare| dict.by_name(bare))
        })?;

        Some(DictionaryEntry::new(
            entry.tag_range().inner(),
            entry.vr().relaxed(),
            entry.alias(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{Tag, VR};

    #[test]
    fn test_resolve_standard_keywords() {
        let dict = StandardDictionary::new();

        let entry = dict.resolve("Modality").unwrap();
        assert_eq!(entry.tag, Tag(0x0008, 0x0060));
        assert_eq!(entry.vr, VR::CS);
        assert_eq!(entry.keyword, "Modality");

        let entry = dict.resolve("ReferencedSeriesSequence").unwrap();
        assert!(entry.is_sequence());
    }

    #[test]
    fn test_unknown_keyword() {
        let dict = StandardDictionary::new();
        assert!(dict.resolve("NotARealKeyword").is_none());
        assert!(dict.resolve("00091001").is_none());
    }

    #[test]
    fn test_retired_prefix_falls_back_to_bare_name() {
        let dict = StandardDictionary::new();
        let entry = dict.resolve("RETIRED_Modality").unwrap();
        assert_eq!(entry.tag, Tag(0x0008, 0x0060));
    }
}
