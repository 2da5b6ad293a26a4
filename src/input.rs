//! Loading of the JSON country list.

use crate::errors::GeneratorError;
use crate::types::Country;
use std::fs;
use std::path::Path;

#[cfg(feature = "tracing")]
use tracing::info;

/// Parse a country list from JSON text.
///
/// The list is a JSON array of objects with `iso2`, `dialCode`,
/// `priority` and optional `areaCodes` fields.
///
/// # Example
///
/// ```rust
/// use countries_generator::input::parse_countries;
///
/// let countries = parse_countries(r#"[
///     {"iso2": "us", "dialCode": 1, "priority": 1, "areaCodes": null},
///     {"iso2": "ca", "dialCode": 1, "priority": 0, "areaCodes": ["204", "226"]}
/// ]"#).unwrap();
///
/// assert_eq!(countries.len(), 2);
/// assert!(countries[0].priority);
/// ```
pub fn parse_countries(json: &str) -> Result<Vec<Country>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read and parse the country list at `path`.
pub fn load_countries(path: &Path) -> Result<Vec<Country>, GeneratorError> {
    let json = fs::read_to_string(path).map_err(|source| GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let countries = parse_countries(&json).map_err(|source| GeneratorError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(feature = "tracing")]
    info!(path = %path.display(), countries = countries.len(), "Loaded country list");

    Ok(countries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_keeps_input_order() {
        let countries = parse_countries(
            r#"[
                {"iso2": "de", "dialCode": 49, "priority": 0},
                {"iso2": "us", "dialCode": "1", "priority": 1},
                {"iso2": "ca", "dialCode": 1, "priority": 0}
            ]"#,
        )
        .unwrap();
        let isos: Vec<&str> = countries.iter().map(|c| c.iso2.as_str()).collect();
        assert_eq!(isos, ["de", "us", "ca"]);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_countries(r#"{"iso2": "de", "dialCode": 49, "priority": 0}"#).is_err());
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        assert!(parse_countries(r#"[{"iso2": "de", "priority": 0}]"#).is_err());
    }

    #[test]
    fn test_load_countries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"iso2": "de", "dialCode": 49, "priority": 0}}]"#).unwrap();

        let countries = load_countries(file.path()).unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].dial_code.value(), 49);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(
            load_countries(&path),
            Err(GeneratorError::Io { .. })
        ));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{").unwrap();
        let err = load_countries(file.path()).unwrap_err();
        assert!(matches!(err, GeneratorError::Input { .. }));
        assert!(err.to_string().starts_with("Invalid country list"));
    }
}
