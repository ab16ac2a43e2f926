use crate::dictionary::{DictionaryResolver, StandardDictionary};
use crate::error::Result;
use crate::flatten::{flatten, order_rows};
use crate::types::{find_series, BrowserOptions, MetadataNode, Row, Series};
use log::debug;

/// Main entry point for turning metadata into browsable rows
///
/// Holds the injected dictionary resolver and the browser options. Every
/// call recomputes rows from scratch; nothing is cached between selections.
///
/// # Example
///
/// ```
/// use tagbrowser_core::{BrowserOptions, MetadataNode, TagBrowser};
///
/// let node = MetadataNode::new()
///     .with("PatientName", "Doe^Jane")
///     .with("Modality", "CT");
///
/// let browser = TagBrowser::standard();
/// let rows = browser.rows(&node);
/// assert_eq!(rows[0].display_tag(), "(0008,0060)");
/// assert_eq!(rows[1].display_tag(), "(0010,0010)");
///
/// let filtered = TagBrowser::standard()
///     .with_options(BrowserOptions::default().with_filter("jane"))
///     .rows(&node);
/// assert_eq!(filtered.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TagBrowser<R> {
    resolver: R,
    options: BrowserOptions,
}

impl TagBrowser<StandardDictionary> {
    /// Creates a browser over the standard DICOM dictionary
    pub fn standard() -> Self {
        Self::new(StandardDictionary::new())
    }
}

impl<R: DictionaryResolver> TagBrowser<R> {
    /// Creates a browser with the given resolver and default options
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            options: BrowserOptions::default(),
        }
    }

    /// Builder: Set browser options
    pub fn with_options(mut self, options: BrowserOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options
    pub fn options(&self) -> &BrowserOptions {
        &self.options
    }

    /// Replaces the options, e.g. when the filter text changes
    pub fn set_options(&mut self, options: BrowserOptions) {
        self.options = options;
    }

    /// Flattens and orders a node without filtering
    pub fn all_rows(&self, node: &MetadataNode) -> Vec<Row> {
        let rows = flatten(node, 0, &self.resolver);
        debug!("Flattened {} rows", rows.len());
        order_rows(rows, self.options.sort_order)
    }

    /// Flattens, orders and filters a node
    pub fn rows(&self, node: &MetadataNode) -> Vec<Row> {
        self.options.filter.apply(self.all_rows(node))
    }

    /// Rows for the 1-based `instance` of a series
    ///
    /// # Errors
    ///
    /// Returns an error if the instance number is out of range.
    pub fn series_rows(&self, series: &Series, instance: usize) -> Result<Vec<Row>> {
        Ok(self.rows(series.instance(instance)?))
    }

    /// Rows for the 1-based `instance` of the series with the given id
    ///
    /// # Errors
    ///
    /// Returns an error if no series has the id or the instance number is
    /// out of range.
    pub fn select(&self, series: &[Series], id: &str, instance: usize) -> Result<Vec<Row>> {
        let selected = find_series(series, id)?;
        debug!("Selected series {} instance {}", selected.label(), instance);
        self.series_rows(selected, instance)
    }
}
