//! Specimen description summaries for slide microscopy images
//!
//! Maps the items of `SpecimenDescriptionSequence` onto a short list of
//! labelled attributes. Preparation step content items are matched against
//! a fixed table of TID 8001 concept names.

pub mod codes;

use crate::types::MetadataNode;
use codes::{CodedConcept, ConceptCode};
use log::debug;

/// One labelled attribute of a specimen
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SpecimenAttribute {
    pub name: String,
    pub value: String,
}

impl SpecimenAttribute {
    fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// Summary of one specimen description item
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SpecimenDescription {
    /// SpecimenUID
    pub uid: Option<String>,

    /// SpecimenIdentifier
    pub identifier: Option<String>,

    /// Labelled attributes in display order
    pub attributes: Vec<SpecimenAttribute>,
}

/// Mapping from a CODE content item's concept name to its display label
struct CodeLabel {
    concept: ConceptCode,
    label: &'static str,
    stain: bool,
}

const CODE_LABELS: &[CodeLabel] = &[
    CodeLabel {
        concept: codes::COLLECTION_METHOD,
        label: "Surgical collection",
        stain: false,
    },
    CodeLabel {
        concept: codes::FIXATIVE,
        label: "Fixative",
        stain: false,
    },
    CodeLabel {
        concept: codes::EMBEDDING_MEDIUM,
        label: "Embedding medium",
        stain: false,
    },
    CodeLabel {
        concept: codes::STAIN,
        label: "Stain",
        stain: true,
    },
];

const STAIN_LABEL: &str = "Stain";

/// Summarises the `index`th (0-based) item of `SpecimenDescriptionSequence`
///
/// Returns `None` if the image has no such item. Stain attributes are only
/// included when `show_stain` is set.
///
/// # Example
///
/// ```
/// use tagbrowser_core::specimen::specimen_description;
/// use tagbrowser_core::MetadataNode;
///
/// let image = MetadataNode::new().with(
///     "SpecimenDescriptionSequence",
///     MetadataNode::new()
///         .with("SpecimenUID", "2.25.1")
///         .with("SpecimenShortDescription", "Left breast core"),
/// );
/// let specimen = specimen_description(&image, 0, false).unwrap();
/// assert_eq!(specimen.uid.as_deref(), Some("2.25.1"));
/// assert_eq!(specimen.attributes[0].name, "Description");
/// ```
pub fn specimen_description(
    metadata: &MetadataNode,
    index: usize,
    show_stain: bool,
) -> Option<SpecimenDescription> {
    let specimen = metadata.items("SpecimenDescriptionSequence").get(index)?;
    let text = |keyword: &str| {
        specimen
            .get(keyword)
            .map(|v| v.display_string())
            .filter(|s| !s.is_empty())
    };

    let mut attributes = Vec::new();
    if let Some(description) = text("SpecimenShortDescription") {
        attributes.push(SpecimenAttribute::new("Description", description));
    }
    if let Some(structure) = specimen
        .items("PrimaryAnatomicStructureSequence")
        .first()
    {
        let meaning = structure
            .get("CodeMeaning")
            .map(|v| v.display_string())
            .unwrap_or_default();
        attributes.push(SpecimenAttribute::new("Anatomic Structure", meaning));
    }

    for step in specimen.items("SpecimenPreparationSequence") {
        let content = step.items("SpecimenPreparationStepContentItemSequence");
        for (position, item) in content.iter().enumerate() {
            if let Some(attribute) = preparation_attribute(item, show_stain) {
                attributes.push(attribute);
            } else {
                debug!("Specimen preparation step item #{} not summarised", position);
            }
        }
    }

    Some(SpecimenDescription {
        uid: text("SpecimenUID"),
        identifier: text("SpecimenIdentifier"),
        attributes,
    })
}

/// Summarises every item of `SpecimenDescriptionSequence`
pub fn specimen_descriptions(metadata: &MetadataNode, show_stain: bool) -> Vec<SpecimenDescription> {
    (0..metadata.items("SpecimenDescriptionSequence").len())
        .filter_map(|index| specimen_description(metadata, index, show_stain))
        .collect()
}

fn preparation_attribute(item: &MetadataNode, show_stain: bool) -> Option<SpecimenAttribute> {
    let name = CodedConcept::from_sequence(item, "ConceptNameCodeSequence")?;

    match item.get_str("ValueType")? {
        "CODE" => {
            if name.is(&codes::PROCESSING_TYPE) {
                return None;
            }
            let value = CodedConcept::from_sequence(item, "ConceptCodeSequence")?;
            CODE_LABELS
                .iter()
                .find(|entry| name.is(&entry.concept))
                .filter(|entry| show_stain || !entry.stain)
                .map(|entry| SpecimenAttribute::new(entry.label, value.meaning))
        }
        "TEXT" if show_stain && name.is(&codes::STAIN) => item
            .get("TextValue")
            .map(|v| SpecimenAttribute::new(STAIN_LABEL, v.display_string())),
        _ => None,
    }
}
