use crate::error::{Result, TagBrowserError};
use crate::types::MetadataNode;

/// A series selectable in the browser, holding one or more instances
///
/// # Example
///
/// ```
/// use tagbrowser_core::{MetadataNode, Series};
///
/// let series = Series::new("1.2.3")
///     .with_number(2)
///     .with_modality("CT")
///     .with_description("Chest")
///     .with_instances(vec![MetadataNode::new(), MetadataNode::new()]);
///
/// assert_eq!(series.label(), "2 (CT): Chest");
/// assert!(series.is_image_stack());
/// assert!(series.instance(2).is_ok());
/// assert!(series.instance(3).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    /// Identifier used to select the series
    pub id: String,

    /// SeriesNumber
    pub number: Option<i32>,

    /// Modality
    pub modality: Option<String>,

    /// SeriesDescription
    pub description: Option<String>,

    /// Instance metadata, in instance order
    pub instances: Vec<MetadataNode>,
}

impl Series {
    /// Creates an empty series
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Builds a series from instance metadata, reading the series level
    /// attributes from the first instance
    pub fn from_instances(id: impl Into<String>, instances: Vec<MetadataNode>) -> Self {
        let first = instances.first();
        let text = |keyword: &str| {
            first
                .and_then(|node| node.get(keyword))
                .map(|value| value.display_string())
                .filter(|s| !s.is_empty())
        };
        Self {
            id: id.into(),
            number: text("SeriesNumber").and_then(|s| s.trim().parse().ok()),
            modality: text("Modality"),
            description: text("SeriesDescription"),
            instances,
        }
    }

    /// Builder: Set the series number
    pub fn with_number(mut self, number: i32) -> Self {
        self.number = Some(number);
        self
    }

    /// Builder: Set the modality
    pub fn with_modality(mut self, modality: &str) -> Self {
        self.modality = Some(modality.to_string());
        self
    }

    /// Builder: Set the description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Builder: Set the instances
    pub fn with_instances(mut self, instances: Vec<MetadataNode>) -> Self {
        self.instances = instances;
        self
    }

    /// Returns true when the series holds more than one instance to choose from
    pub fn is_image_stack(&self) -> bool {
        self.instances.len() > 1
    }

    /// Selects an instance by 1-based number
    ///
    /// # Errors
    ///
    /// Returns [`TagBrowserError::InstanceOutOfRange`] for 0 or a number past
    /// the last instance.
    pub fn instance(&self, number: usize) -> Result<&MetadataNode> {
        number
            .checked_sub(1)
            .and_then(|index| self.instances.get(index))
            .ok_or(TagBrowserError::InstanceOutOfRange {
                number,
                count: self.instances.len(),
            })
    }

    /// Selector label: `"{number} ({modality}): {description}"`
    pub fn label(&self) -> String {
        format!(
            "{} ({}): {}",
            self.number.map(|n| n.to_string()).unwrap_or_default(),
            self.modality.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or("")
        )
    }
}

/// One entry in the series selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesOption {
    /// Series identifier
    pub id: String,

    /// Display label
    pub label: String,
}

/// Builds selector options ordered by series number
///
/// Series without a number go last; ties keep their input order.
pub fn series_options(series: &[Series]) -> Vec<SeriesOption> {
    let mut sorted: Vec<&Series> = series.iter().collect();
    sorted.sort_by_key(|s| (s.number.is_none(), s.number));
    sorted
        .into_iter()
        .map(|s| SeriesOption {
            id: s.id.clone(),
            label: s.label(),
        })
        .collect()
}

/// Finds a series by identifier
pub fn find_series<'a>(series: &'a [Series], id: &str) -> Result<&'a Series> {
    series
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| TagBrowserError::SeriesNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;

    fn node(number: f64, modality: &str, description: &str) -> MetadataNode {
        MetadataNode::new()
            .with("SeriesNumber", Value::Numeric(number))
            .with("Modality", modality)
            .with("SeriesDescription", description)
    }

    #[test]
    fn test_from_instances_reads_first_instance() {
        let series = Series::from_instances("s1", vec![node(3.0, "MR", "T1 AX")]);
        assert_eq!(series.number, Some(3));
        assert_eq!(series.modality.as_deref(), Some("MR"));
        assert_eq!(series.label(), "3 (MR): T1 AX");
        assert!(!series.is_image_stack());
    }

    #[test]
    fn test_instance_selection_is_one_based() {
        let first = MetadataNode::new().with("InstanceNumber", "1");
        let second = MetadataNode::new().with("InstanceNumber", "2");
        let series = Series::new("s").with_instances(vec![first.clone(), second.clone()]);

        assert_eq!(series.instance(1).unwrap(), &first);
        assert_eq!(series.instance(2).unwrap(), &second);
    }

    #[test]
    fn test_instance_out_of_range() {
        let series = Series::new("s").with_instances(vec![MetadataNode::new()]);
        assert!(matches!(
            series.instance(0),
            Err(TagBrowserError::InstanceOutOfRange { number: 0, count: 1 })
        ));
        assert!(matches!(
            series.instance(2),
            Err(TagBrowserError::InstanceOutOfRange { number: 2, count: 1 })
        ));
    }

    #[test]
    fn test_series_options_sorted_by_number() {
        let series = vec![
            Series::new("c"),
            Series::from_instances("b", vec![node(10.0, "CT", "Late")]),
            Series::from_instances("a", vec![node(2.0, "CT", "Early")]),
        ];
        let options = series_options(&series);
        let ids: Vec<&str> = options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(options[0].label, "2 (CT): Early");
    }

    #[test]
    fn test_find_series() {
        let series = vec![Series::new("x")];
        assert!(find_series(&series, "x").is_ok());
        assert!(matches!(
            find_series(&series, "y"),
            Err(TagBrowserError::SeriesNotFound(_))
        ));
    }
}
