pub mod api;
pub mod cli;
pub mod decode;
pub mod dictionary;
pub mod error;
pub mod flatten;
pub mod specimen;
pub mod types;

pub use api::TagBrowser;
pub use cli::report::TextReport;
pub use dictionary::{
    format_tag, DictionaryEntry, DictionaryResolver, StandardDictionary, StaticDictionary,
};
pub use error::{Result, TagBrowserError};
pub use flatten::{flatten, is_private_tag_keyword, order_rows, sort_rows};
pub use types::*;
