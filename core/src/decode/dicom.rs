use crate::dictionary::format_tag;
use crate::types::{MetadataNode, Value};
use dicom_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dicom_core::header::Header;
use dicom_core::value::PrimitiveValue;
use dicom_core::{Tag, VR};
use dicom_dictionary_std::StandardDataDictionary;
use dicom_object::mem::InMemElement;
use dicom_object::{DefaultDicomObject, InMemDicomObject};

/// Decodes an in-memory DICOM data set into a metadata node
///
/// Elements are keyed by their standard dictionary keyword. Private and
/// unknown elements are keyed by their 8 hex digit tag (`GGGGEEEE`), which
/// the flattener later recognises as a private tag. Multi-valued elements
/// become [`Value::List`] and sequences become [`Value::Sequence`]. Binary
/// and encapsulated pixel data are summarised rather than copied.
///
/// # Example
///
/// ```
/// use tagbrowser_core::decode::node_from_dicom;
/// use dicom_core::{DataElement, PrimitiveValue, Tag, VR};
/// use dicom_object::InMemDicomObject;
///
/// let dcm = InMemDicomObject::from_element_iter([
///     DataElement::new(Tag(0x0008, 0x0060), VR::CS, PrimitiveValue::from("MG")),
/// ]);
/// let node = node_from_dicom(&dcm);
/// assert_eq!(node.get_str("Modality"), Some("MG"));
/// ```
pub fn node_from_dicom(dcm: &InMemDicomObject) -> MetadataNode {
    let dict = StandardDataDictionary;
    let mut node = MetadataNode::new();
    for elem in dcm.iter() {
        node.insert(keyword_for(&dict, elem.tag()), element_value(elem));
    }
    node
}

/// Decodes an opened DICOM file, including its transfer syntax and media
/// storage identifiers from the file meta group
pub fn node_from_file_object(obj: &DefaultDicomObject) -> MetadataNode {
    let meta = obj.meta();
    let mut node = MetadataNode::new();
    for (keyword, uid) in [
        ("MediaStorageSOPClassUID", &meta.media_storage_sop_class_uid),
        ("MediaStorageSOPInstanceUID", &meta.media_storage_sop_instance_uid),
        ("TransferSyntaxUID", &meta.transfer_syntax),
    ] {
        node.insert(keyword, Value::Scalar(trim_padding(uid).to_string()));
    }
    for (keyword, value) in node_from_dicom(obj).fields() {
        node.insert(keyword, value.clone());
    }
    node
}

/// Keyword used for a tag: the dictionary alias for standard elements, the
/// concatenated hex digits for private or unknown ones
fn keyword_for(dict: &StandardDataDictionary, tag: Tag) -> String {
    let is_private = tag.group() % 2 == 1;
    if !is_private {
        if let Some(entry) = dict.by_tag(tag) {
            return entry.alias().to_string();
        }
    }
    format!("{:04X}{:04X}", tag.group(), tag.element())
}

fn element_value(elem: &InMemElement) -> Value {
    if let Some(items) = elem.items() {
        return Value::Sequence(items.iter().map(node_from_dicom).collect());
    }
    match elem.value().primitive() {
        Some(primitive) => primitive_value(primitive, elem.vr()),
        None => Value::Scalar("Encapsulated pixel data".to_string()),
    }
}

fn primitive_value(value: &PrimitiveValue, vr: VR) -> Value {
    if is_binary_vr(vr) && !matches!(value, PrimitiveValue::Empty) {
        return Value::Scalar(format!(
            "Binary data ({} bytes)",
            value.calculate_byte_len()
        ));
    }

    match value {
        PrimitiveValue::Empty => Value::Null,
        PrimitiveValue::Str(s) => multi(
            s.split('\\')
                .map(|part| Value::Scalar(trim_padding(part).to_string())),
        ),
        PrimitiveValue::Strs(values) => {
            multi(values.iter().map(|s| Value::Scalar(trim_padding(s).to_string())))
        }
        PrimitiveValue::Tags(tags) => multi(tags.iter().map(|t| Value::Scalar(format_tag(*t)))),
        PrimitiveValue::U8(v) => multi(v.iter().map(|x| Value::Numeric(f64::from(*x)))),
        PrimitiveValue::I16(v) => multi(v.iter().map(|x| Value::Numeric(f64::from(*x)))),
        PrimitiveValue::U16(v) => multi(v.iter().map(|x| Value::Numeric(f64::from(*x)))),
        PrimitiveValue::I32(v) => multi(v.iter().map(|x| Value::Numeric(f64::from(*x)))),
        PrimitiveValue::U32(v) => multi(v.iter().map(|x| Value::Numeric(f64::from(*x)))),
        PrimitiveValue::F64(v) => multi(v.iter().map(|x| Value::Numeric(*x))),
        // Text keeps the shortest representation of single precision and
        // the full range of 64 bit integers
        PrimitiveValue::F32(v) => multi(v.iter().map(|x| Value::Scalar(x.to_string()))),
        PrimitiveValue::I64(v) => multi(v.iter().map(|x| Value::Scalar(x.to_string()))),
        PrimitiveValue::U64(v) => multi(v.iter().map(|x| Value::Scalar(x.to_string()))),
        other => multi(
            other
                .to_str()
                .split('\\')
                .map(|s| Value::Scalar(trim_padding(s).to_string())),
        ),
    }
}

/// Collapses single values, keeps multiplicity above one as a list
fn multi(values: impl Iterator<Item = Value>) -> Value {
    let mut values: Vec<Value> = values.collect();
    match values.len() {
        0 => Value::Null,
        1 => values.remove(0),
        _ => Value::List(values),
    }
}

fn trim_padding(s: &str) -> &str {
    s.trim_matches(|c: char| c == '\0' || c.is_whitespace())
}

fn is_binary_vr(vr: VR) -> bool {
    matches!(
        vr,
        VR::OB | VR::OD | VR::OF | VR::OL | VR::OV | VR::OW | VR::UN
    )
}
