use std::fmt;
use std::slice;

/// Reserved bookkeeping key carrying value representations for ambiguous
/// or private elements. Never a data field.
pub const VR_MAP_KEY: &str = "_vrMap";

/// Separator used to join the values of a multi-valued element
pub const MULTI_VALUE_SEPARATOR: &str = "\\";

/// Person name component keys, in DICOM component group order
const PERSON_NAME_GROUPS: [&str; 3] = ["Alphabetic", "Ideographic", "Phonetic"];

/// A decoded metadata value
///
/// The shape of a value is resolved once at decode time so the flattener
/// never inspects types at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value (null or zero-length element)
    Null,
    /// String-like value
    Scalar(String),
    /// Numeric value
    Numeric(f64),
    /// Multi-valued element
    List(Vec<Value>),
    /// A single nested object, either one sequence item given bare or a
    /// structured value such as a person name
    Item(MetadataNode),
    /// Sequence items
    Sequence(Vec<MetadataNode>),
}

impl Value {
    /// Returns true when the value carries nothing worth displaying
    /// or recursing into
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Scalar(s) => s.is_empty(),
            Value::Numeric(_) | Value::Item(_) => false,
            Value::List(values) => values.is_empty(),
            Value::Sequence(items) => items.is_empty(),
        }
    }

    /// Normalizes a sequence value into its items
    ///
    /// A bare item and a one-element sequence yield the same slice.
    /// Returns `None` for values that are not item-shaped.
    pub fn as_items(&self) -> Option<&[MetadataNode]> {
        match self {
            Value::Item(node) => Some(slice::from_ref(node)),
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the string form shown in the value column
    ///
    /// Lists join their elements with a backslash; absent values and nested
    /// sequences render empty. A nested object with person name component
    /// groups renders as a DICOM PN string.
    pub fn display_string(&self) -> String {
        match self {
            Value::Null | Value::Sequence(_) => String::new(),
            Value::Scalar(s) => s.clone(),
            Value::Numeric(n) => n.to_string(),
            Value::List(values) => values
                .iter()
                .map(Value::display_string)
                .collect::<Vec<_>>()
                .join(MULTI_VALUE_SEPARATOR),
            Value::Item(node) => person_name(node).unwrap_or_default(),
        }
    }

    /// Returns the scalar string, if this is a scalar
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Numeric(n)
    }
}

impl From<MetadataNode> for Value {
    fn from(node: MetadataNode) -> Self {
        Value::Item(node)
    }
}

impl From<Vec<MetadataNode>> for Value {
    fn from(items: Vec<MetadataNode>) -> Self {
        Value::Sequence(items)
    }
}

/// One information object or one sequence item
///
/// Maps keywords to values, keeping insertion order so traversal is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataNode {
    entries: Vec<(String, Value)>,
}

impl MetadataNode {
    /// Creates an empty node
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, replacing an existing value in place
    pub fn insert(&mut self, keyword: impl Into<String>, value: impl Into<Value>) {
        let keyword = keyword.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == keyword) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((keyword, value)),
        }
    }

    /// Builder: adds a field
    ///
    /// # Example
    ///
    /// ```
    /// use tagbrowser_core::MetadataNode;
    ///
    /// let node = MetadataNode::new()
    ///     .with("PatientName", "Doe^Jane")
    ///     .with("Modality", "CT");
    /// assert_eq!(node.len(), 2);
    /// assert_eq!(node.get_str("Modality"), Some("CT"));
    /// ```
    pub fn with(mut self, keyword: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(keyword, value);
        self
    }

    /// Looks up a field by keyword
    pub fn get(&self, keyword: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, v)| v)
    }

    /// Looks up a scalar field by keyword
    pub fn get_str(&self, keyword: &str) -> Option<&str> {
        self.get(keyword).and_then(Value::as_str)
    }

    /// Looks up the items of a sequence field
    pub fn items(&self, keyword: &str) -> &[MetadataNode] {
        self.get(keyword).and_then(Value::as_items).unwrap_or(&[])
    }

    /// Iterates over data fields in insertion order, skipping the VR map
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .filter(|(k, _)| k != VR_MAP_KEY)
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Returns true if the node holds the keyword
    pub fn contains(&self, keyword: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == keyword)
    }

    /// Number of data fields
    pub fn len(&self) -> usize {
        self.fields().count()
    }

    /// Returns true if there are no data fields
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Renders an object with person name component groups as a PN string
fn person_name(node: &MetadataNode) -> Option<String> {
    if !PERSON_NAME_GROUPS.iter().any(|group| node.contains(group)) {
        return None;
    }

    let mut groups: Vec<String> = PERSON_NAME_GROUPS
        .iter()
        .map(|group| node.get(group).map(Value::display_string).unwrap_or_default())
        .collect();
    while groups.last().is_some_and(|g| g.is_empty()) {
        groups.pop();
    }
    Some(groups.join("="))
}
