//! Decoding of metadata sources into [`MetadataNode`] trees
//!
//! - [`node_from_dicom`]: in-memory DICOM data sets
//! - [`node_from_json`]: naturalized JSON documents (feature `json`)
//! - [`load_instances`]: either of the above, read from disk

mod dicom;
#[cfg(feature = "json")]
mod json;

pub use dicom::{node_from_dicom, node_from_file_object};
#[cfg(feature = "json")]
pub use json::{instances_from_json, instances_from_str, node_from_json};

use crate::error::{Result, TagBrowserError};
use crate::types::MetadataNode;
use dicom_object::open_file;
use log::debug;
use std::path::Path;

/// Loads the instances stored in a file
///
/// Files with a `.json` extension are read as naturalized JSON holding one
/// instance or an array of instances. Anything else is opened as a DICOM
/// Part 10 file holding a single instance.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load_instances(path: &Path) -> Result<Vec<MetadataNode>> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        debug!("Reading naturalized JSON: {}", path.display());
        return load_json(path);
    }

    debug!("Reading DICOM file: {}", path.display());
    let obj = open_file(path)?;
    Ok(vec![node_from_file_object(&obj)])
}

#[cfg(feature = "json")]
fn load_json(path: &Path) -> Result<Vec<MetadataNode>> {
    let text = std::fs::read_to_string(path)?;
    instances_from_str(&text)
}

#[cfg(not(feature = "json"))]
fn load_json(path: &Path) -> Result<Vec<MetadataNode>> {
    Err(TagBrowserError::UnsupportedInput(format!(
        "{}: JSON input requires the 'json' feature",
        path.display()
    )))
}

/// Loads and concatenates the instances of several files, in argument order
pub fn load_series_instances<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<MetadataNode>> {
    let mut instances = Vec::new();
    for path in paths {
        instances.extend(load_instances(path.as_ref())?);
    }
    if instances.is_empty() {
        return Err(TagBrowserError::UnsupportedInput(
            "no instances found in input".to_string(),
        ));
    }
    Ok(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[cfg(feature = "json")]
    #[test]
    fn test_load_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("instances.JSON");
        File::create(&path)
            .unwrap()
            .write_all(br#"[{"Modality": "CT"}, {"Modality": "CT", "InstanceNumber": 2}]"#)
            .unwrap();

        let instances = load_instances(&path).unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].get_str("Modality"), Some("CT"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_load_series_concatenates_files() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("a.json");
        let second = temp_dir.path().join("b.json");
        File::create(&first)
            .unwrap()
            .write_all(br#"{"InstanceNumber": "1"}"#)
            .unwrap();
        File::create(&second)
            .unwrap()
            .write_all(br#"{"InstanceNumber": "2"}"#)
            .unwrap();

        let instances = load_series_instances(&[first, second]).unwrap();
        let numbers: Vec<&str> = instances
            .iter()
            .filter_map(|n| n.get_str("InstanceNumber"))
            .collect();
        assert_eq!(numbers, vec!["1", "2"]);
    }

    #[test]
    fn test_load_non_dicom_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("not_dicom.dcm");
        File::create(&path)
            .unwrap()
            .write_all(b"This is not a DICOM file")
            .unwrap();

        assert!(matches!(
            load_instances(&path),
            Err(TagBrowserError::DicomError(_))
        ));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load_instances(&temp_dir.path().join("missing.dcm")).is_err());
    }

    #[test]
    fn test_load_series_requires_instances() {
        let paths: [&Path; 0] = [];
        assert!(matches!(
            load_series_instances(&paths),
            Err(TagBrowserError::UnsupportedInput(_))
        ));
    }
}
