use super::{DictionaryEntry, DictionaryResolver};
use std::collections::HashMap;

/// Resolver over a fixed keyword table
///
/// # Example
///
/// ```
/// use tagbrowser_core::{DictionaryEntry, DictionaryResolver, StaticDictionary};
/// use dicom_core::{Tag, VR};
///
/// let dict = StaticDictionary::from_entries([
///     DictionaryEntry::new(Tag(0x0010, 0x0010), VR::PN, "PatientName"),
/// ]);
/// assert!(dict.resolve("PatientName").is_some());
/// assert!(dict.resolve("Modality").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticDictionary {
    entries: HashMap<String, DictionaryEntry>,
}

impl StaticDictionary {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table keyed by each entry's keyword
    pub fn from_entries(entries: impl IntoIterator<Item = DictionaryEntry>) -> Self {
        let mut dict = Self::new();
        for entry in entries {
            dict.insert(entry.keyword.clone(), entry);
        }
        dict
    }

    /// Registers an entry under a keyword, which may differ from the
    /// entry's canonical keyword (e.g. a `RETIRED_` alias)
    pub fn insert(&mut self, keyword: impl Into<String>, entry: DictionaryEntry) {
        self.entries.insert(keyword.into(), entry);
    }

    /// Number of keywords in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DictionaryResolver for StaticDictionary {
    fn resolve(&self, keyword: &str) -> Option<DictionaryEntry> {
        self.entries.get(keyword).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{Tag, VR};

    #[test]
    fn test_alias_registration() {
        let mut dict = StaticDictionary::new();
        dict.insert(
            "RETIRED_SomeField",
            DictionaryEntry::new(Tag(0x0018, 0x1010), VR::LO, "SomeField"),
        );
        assert_eq!(dict.len(), 1);
        let entry = dict.resolve("RETIRED_SomeField").unwrap();
        assert_eq!(entry.keyword, "SomeField");
        assert!(dict.resolve("SomeField").is_none());
    }
}
