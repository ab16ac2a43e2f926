use crate::error::{Result, TagBrowserError};
use crate::types::{MetadataNode, Value};
use serde_json::Value as Json;

/// Decodes a naturalized JSON object into a metadata node
///
/// Naturalized JSON keys every element by its dictionary keyword (private
/// elements by their 8 hex digit tag). Shapes map as follows:
///
/// - object -> nested node ([`Value::Item`])
/// - array of objects -> [`Value::Sequence`]
/// - any other array -> [`Value::List`]
/// - string / boolean -> [`Value::Scalar`], number -> [`Value::Numeric`]
/// - null -> [`Value::Null`]
///
/// # Errors
///
/// Returns [`TagBrowserError::InvalidNode`] if `json` is not an object.
///
/// # Example
///
/// ```
/// use tagbrowser_core::decode::node_from_json;
/// use serde_json::json;
///
/// let node = node_from_json(&json!({
///     "PatientName": "Doe^Jane",
///     "ImageType": ["ORIGINAL", "PRIMARY"],
/// })).unwrap();
/// assert_eq!(node.get("ImageType").unwrap().display_string(), "ORIGINAL\\PRIMARY");
/// ```
pub fn node_from_json(json: &Json) -> Result<MetadataNode> {
    match json {
        Json::Object(_) => Ok(object_node(json)),
        other => Err(TagBrowserError::InvalidNode(format!(
            "expected a JSON object, found {}",
            json_kind(other)
        ))),
    }
}

/// Decodes a JSON document holding one instance (an object) or several
/// (an array of objects)
///
/// # Errors
///
/// Returns [`TagBrowserError::InvalidNode`] for any other shape.
pub fn instances_from_json(json: &Json) -> Result<Vec<MetadataNode>> {
    match json {
        Json::Array(values) => values.iter().map(node_from_json).collect(),
        other => Ok(vec![node_from_json(other)?]),
    }
}

/// Parses a JSON string into instances
pub fn instances_from_str(text: &str) -> Result<Vec<MetadataNode>> {
    let json: Json = serde_json::from_str(text)?;
    instances_from_json(&json)
}

fn value_from_json(json: &Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Scalar(b.to_string()),
        Json::Number(n) => n
            .as_f64()
            .map(Value::Numeric)
            .unwrap_or_else(|| Value::Scalar(n.to_string())),
        Json::String(s) => Value::Scalar(s.clone()),
        Json::Array(values) if !values.is_empty() && values.iter().all(Json::is_object) => {
            Value::Sequence(values.iter().map(object_node).collect())
        }
        Json::Array(values) => Value::List(values.iter().map(value_from_json).collect()),
        Json::Object(_) => Value::Item(object_node(json)),
    }
}

fn object_node(json: &Json) -> MetadataNode {
    let mut node = MetadataNode::new();
    if let Json::Object(map) = json {
        for (keyword, value) in map {
            node.insert(keyword.clone(), value_from_json(value));
        }
    }
    node
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_shapes() {
        let node = node_from_json(&json!({
            "PatientName": "Doe^Jane",
            "Rows": 512,
            "BurnedInAnnotation": null,
            "Flag": true,
        }))
        .unwrap();

        assert_eq!(node.get("PatientName"), Some(&Value::from("Doe^Jane")));
        assert_eq!(node.get("Rows"), Some(&Value::Numeric(512.0)));
        assert_eq!(node.get("BurnedInAnnotation"), Some(&Value::Null));
        assert_eq!(node.get("Flag"), Some(&Value::from("true")));
    }

    #[test]
    fn test_array_of_objects_is_sequence() {
        let node = node_from_json(&json!({
            "ReferencedSeriesSequence": [
                {"SeriesInstanceUID": "1.2.3"},
                {"SeriesInstanceUID": "1.2.4"},
            ]
        }))
        .unwrap();
        assert_eq!(node.items("ReferencedSeriesSequence").len(), 2);
        assert!(matches!(
            node.get("ReferencedSeriesSequence"),
            Some(Value::Sequence(_))
        ));
    }

    #[test]
    fn test_bare_object_is_item() {
        let node = node_from_json(&json!({
            "ConceptNameCodeSequence": {"CodeValue": "121071"}
        }))
        .unwrap();
        assert!(matches!(
            node.get("ConceptNameCodeSequence"),
            Some(Value::Item(_))
        ));
        assert_eq!(node.items("ConceptNameCodeSequence").len(), 1);
    }

    #[test]
    fn test_mixed_and_empty_arrays_are_lists() {
        let node = node_from_json(&json!({
            "PixelSpacing": [0.1, 0.1],
            "Empty": [],
        }))
        .unwrap();
        assert_eq!(
            node.get("PixelSpacing").unwrap().display_string(),
            "0.1\\0.1"
        );
        assert_eq!(node.get("Empty"), Some(&Value::List(vec![])));
    }

    #[test]
    fn test_person_name_object() {
        let node = node_from_json(&json!({
            "PatientName": {"Alphabetic": "Doe^Jane"}
        }))
        .unwrap();
        assert_eq!(node.get("PatientName").unwrap().display_string(), "Doe^Jane");
    }

    #[test]
    fn test_fields_keep_document_order() {
        let instances = instances_from_str(
            r#"{"Modality": "CT", "AccessionNumber": "A1", "PatientName": "Doe^Jane",
                "ReferencedSeriesSequence": [{"SeriesInstanceUID": "1.2.3", "ReferencedSOPClassUID": "1.2"}]}"#,
        )
        .unwrap();
        let node = &instances[0];

        let keywords: Vec<&str> = node.fields().map(|(k, _)| k).collect();
        assert_eq!(
            keywords,
            vec!["Modality", "AccessionNumber", "PatientName", "ReferencedSeriesSequence"]
        );

        let nested: Vec<&str> = node.items("ReferencedSeriesSequence")[0]
            .fields()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(nested, vec!["SeriesInstanceUID", "ReferencedSOPClassUID"]);
    }

    #[test]
    fn test_non_object_root_is_rejected() {
        for json in [json!("text"), json!(3), json!(null), json!([1, 2])] {
            assert!(matches!(
                node_from_json(&json),
                Err(TagBrowserError::InvalidNode(_))
            ));
        }
    }

    #[test]
    fn test_instances_from_json() {
        let single = instances_from_json(&json!({"Modality": "CT"})).unwrap();
        assert_eq!(single.len(), 1);

        let many = instances_from_json(&json!([{"Modality": "CT"}, {"Modality": "CT"}])).unwrap();
        assert_eq!(many.len(), 2);

        assert!(instances_from_json(&json!([{"Modality": "CT"}, 4])).is_err());
    }

    #[test]
    fn test_instances_from_str_reports_parse_errors() {
        assert!(matches!(
            instances_from_str("{not json"),
            Err(TagBrowserError::JsonError(_))
        ));
    }
}
