//! # Transfer Module
//!
//! Export and import of a partition's contents as a JSON document.
//!
//! ## Document Format
//! ```json
//! [
//!     {
//!         "direction": "London",
//!         "price": 1000.0,
//!         "discount": 20.0,
//!         "final_price": 800.0
//!     }
//! ]
//! ```
//!
//! ## Import Rules
//! - The top level must be an array
//! - Every element must have exactly the four keys above with the right types
//! - Any violation rejects the whole document; nothing is partially imported
//! - `final_price` is taken verbatim, never recomputed

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::FormatError;
use crate::pricing::is_consistent;
use crate::types::TariffEntry;

/// Indentation of exported documents.
const INDENT: &[u8] = b"    ";

/// Serializes `entries` as a pretty-printed JSON array, preserving order.
pub fn export_records(entries: &[TariffEntry]) -> Result<String, FormatError> {
    let mut buf = Vec::with_capacity(entries.len() * 96 + 2);
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);

    entries
        .serialize(&mut ser)
        .map_err(|e| FormatError::Encode(e.to_string()))?;

    String::from_utf8(buf).map_err(|e| FormatError::Encode(e.to_string()))
}

/// Parses a tariff document.
///
/// ## Errors
/// - [`FormatError::Syntax`] when the text is not valid JSON
/// - [`FormatError::Shape`] when it is JSON of the wrong shape
pub fn import_records(text: &str) -> Result<Vec<TariffEntry>, FormatError> {
    let entries: Vec<TariffEntry> = serde_json::from_str(text)?;
    Ok(entries)
}

/// Parses a tariff document read as raw bytes, such as a file's contents.
///
/// ## Errors
/// - [`FormatError::Encoding`] when the bytes are not UTF-8
/// - otherwise as [`import_records`]
pub fn import_bytes(bytes: &[u8]) -> Result<Vec<TariffEntry>, FormatError> {
    let text = std::str::from_utf8(bytes).map_err(|e| FormatError::Encoding {
        offset: e.valid_up_to(),
    })?;
    import_records(text)
}

/// Positions of entries whose `final_price` does not follow from
/// `price` and `discount`.
pub fn inconsistent_final_prices(entries: &[TariffEntry]) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| !is_consistent(e.price, e.discount, e.final_price))
        .map(|(i, _)| i)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(direction: &str, price: f64, discount: f64, final_price: f64) -> TariffEntry {
        TariffEntry {
            direction: direction.to_string(),
            price,
            discount,
            final_price,
        }
    }

    #[test]
    fn test_round_trip_preserves_order_and_values() {
        let entries = vec![
            entry("London", 1000.0, 20.0, 800.0),
            entry("Paris", 500.0, 10.0, 450.0),
            entry("Oslo", 0.1, 33.3, 0.1 * (1.0 - 0.333)),
            // inconsistent on purpose, must survive verbatim
            entry("Rome", 10.0, 0.0, 3.0),
        ];

        let text = export_records(&entries).unwrap();
        let back = import_records(&text).unwrap();
        assert_eq!(back, entries);
    }

    #[test]
    fn test_export_layout() {
        let text = export_records(&[entry("London", 1000.0, 20.0, 800.0)]).unwrap();
        let expected = "[\n    {\n        \"direction\": \"London\",\n        \"price\": 1000.0,\n        \"discount\": 20.0,\n        \"final_price\": 800.0\n    }\n]";
        assert_eq!(text, expected);

        assert_eq!(export_records(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_import_accepts_integers() {
        let text = r#"[{"direction": "Paris", "price": 500, "discount": 10, "final_price": 450}]"#;
        let entries = import_records(text).unwrap();
        assert_eq!(entries, vec![entry("Paris", 500.0, 10.0, 450.0)]);
    }

    #[test]
    fn test_import_rejects_bad_json() {
        let err = import_records("[{\"direction\": ").unwrap_err();
        assert!(matches!(err, FormatError::Syntax { .. }));

        let err = import_records("not json").unwrap_err();
        assert!(matches!(err, FormatError::Syntax { .. }));
    }

    #[test]
    fn test_import_rejects_wrong_shape() {
        // top level object
        let err = import_records(r#"{"direction": "Paris"}"#).unwrap_err();
        assert!(matches!(err, FormatError::Shape { .. }));

        // second element lacks final_price; whole document rejected
        let text = r#"[
            {"direction": "Paris", "price": 500, "discount": 10, "final_price": 450},
            {"direction": "Rome", "price": 100, "discount": 0}
        ]"#;
        let err = import_records(text).unwrap_err();
        assert!(matches!(err, FormatError::Shape { .. }));
        assert!(err.to_string().contains("final_price"));

        // mistyped
        let text = r#"[{"direction": "Paris", "price": "500", "discount": 10, "final_price": 450}]"#;
        assert!(matches!(
            import_records(text),
            Err(FormatError::Shape { .. })
        ));

        // extra key
        let text = r#"[{"id": 1, "direction": "Paris", "price": 500, "discount": 10, "final_price": 450}]"#;
        assert!(matches!(
            import_records(text),
            Err(FormatError::Shape { .. })
        ));
    }

    #[test]
    fn test_import_empty_array() {
        assert!(import_records("[]").unwrap().is_empty());
    }

    #[test]
    fn test_import_bytes_rejects_non_utf8() {
        let bytes = b"[{\"direction\": \"Par\xffis\"}]";
        assert!(matches!(
            import_bytes(bytes),
            Err(FormatError::Encoding { offset: 19 })
        ));
        assert!(import_bytes(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_inconsistent_final_prices() {
        let entries = vec![
            entry("London", 1000.0, 20.0, 800.0),
            entry("Rome", 10.0, 0.0, 3.0),
            entry("Paris", 500.0, 10.0, 450.0),
        ];
        assert_eq!(inconsistent_final_prices(&entries), vec![1]);
    }
}
