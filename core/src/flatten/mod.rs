//! Flattening of nested metadata into display rows
//!
//! [`flatten`] walks a [`MetadataNode`](crate::MetadataNode) depth first and
//! emits one [`Row`](crate::Row) per element, with a header row in front of
//! every sequence item. [`sort_rows`] then applies the ordering policy.

pub mod private_tag;
pub mod sequence;
pub mod sort;

pub use private_tag::{is_private_tag_keyword, private_tag_identifier};
pub use sequence::{flatten, sequence_item_label};
pub use sort::{order_rows, sort_rows};
