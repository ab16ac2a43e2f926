use crate::types::MetadataNode;

/// A code from a controlled vocabulary, compared by value and scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConceptCode {
    pub value: &'static str,
    pub scheme_designator: &'static str,
    pub meaning: &'static str,
}

impl ConceptCode {
    pub const fn new(
        value: &'static str,
        scheme_designator: &'static str,
        meaning: &'static str,
    ) -> Self {
        Self {
            value,
            scheme_designator,
            meaning,
        }
    }
}

// TID 8001 "Specimen Preparation" content item concept names
pub const PROCESSING_TYPE: ConceptCode = ConceptCode::new("111701", "DCM", "Processing type");
pub const COLLECTION_METHOD: ConceptCode =
    ConceptCode::new("17636008", "SCT", "Specimen collection");
pub const FIXATIVE: ConceptCode = ConceptCode::new("430864009", "SCT", "Tissue Fixative");
pub const EMBEDDING_MEDIUM: ConceptCode =
    ConceptCode::new("430863003", "SCT", "Embedding medium");
pub const STAIN: ConceptCode = ConceptCode::new("424361007", "SCT", "Using substance");

/// A coded concept read from a code sequence item
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct CodedConcept {
    pub value: String,
    pub scheme_designator: String,
    pub meaning: String,
}

impl CodedConcept {
    /// Reads CodeValue, CodingSchemeDesignator and CodeMeaning from an item
    ///
    /// Returns `None` when the code value or scheme is missing.
    pub fn from_node(item: &MetadataNode) -> Option<Self> {
        let text = |keyword: &str| item.get(keyword).map(|v| v.display_string());
        Some(Self {
            value: text("CodeValue").filter(|s| !s.is_empty())?,
            scheme_designator: text("CodingSchemeDesignator").filter(|s| !s.is_empty())?,
            meaning: text("CodeMeaning").unwrap_or_default(),
        })
    }

    /// Reads the first item of a code sequence
    pub fn from_sequence(node: &MetadataNode, keyword: &str) -> Option<Self> {
        node.items(keyword).first().and_then(Self::from_node)
    }

    /// Returns true if value and scheme designator match; meanings are not
    /// compared
    pub fn is(&self, code: &ConceptCode) -> bool {
        self.value == code.value && self.scheme_designator == code.scheme_designator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(value: &str, scheme: &str, meaning: &str) -> MetadataNode {
        MetadataNode::new()
            .with("CodeValue", value)
            .with("CodingSchemeDesignator", scheme)
            .with("CodeMeaning", meaning)
    }

    #[test]
    fn test_equality_ignores_meaning() {
        let concept = CodedConcept::from_node(&item("430864009", "SCT", "Fixative")).unwrap();
        assert!(concept.is(&FIXATIVE));
        assert!(!concept.is(&EMBEDDING_MEDIUM));
    }

    #[test]
    fn test_scheme_must_match() {
        let concept = CodedConcept::from_node(&item("430864009", "SRT", "Fixative")).unwrap();
        assert!(!concept.is(&FIXATIVE));
    }

    #[test]
    fn test_missing_code_value() {
        let node = MetadataNode::new().with("CodeMeaning", "orphan");
        assert!(CodedConcept::from_node(&node).is_none());
    }

    #[test]
    fn test_from_sequence_takes_first_item() {
        let node = MetadataNode::new().with(
            "ConceptNameCodeSequence",
            vec![item("111701", "DCM", "Processing type"), item("x", "y", "z")],
        );
        let concept = CodedConcept::from_sequence(&node, "ConceptNameCodeSequence").unwrap();
        assert!(concept.is(&PROCESSING_TYPE));
    }
}
