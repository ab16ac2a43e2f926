//! Core type definitions for the tag browser
//!
//! This module provides the fundamental types used throughout the library:
//! - [`MetadataNode`] and [`Value`]: the decoded, keyword-keyed metadata tree
//! - [`Row`]: one flattened data element ready for display
//! - [`SortOrder`]: ordering policy for flattened rows
//! - [`RowFilter`] and [`BrowserOptions`]: substring filtering and browser settings
//! - [`Series`]: series/instance selection

mod filter;
mod order;
mod row;
mod series;
mod value;

pub use filter::{BrowserOptions, RowFilter};
pub use order::SortOrder;
pub use row::{indent, Row, INDENT_MARKER, PRIVATE_TAG_KEYWORD};
pub use series::{find_series, series_options, Series, SeriesOption};
pub use value::{MetadataNode, Value, MULTI_VALUE_SEPARATOR, VR_MAP_KEY};
