//! # Storage Layer
//!
//! The [`RecordStore`] trait abstracts how the record collection is
//! persisted so command logic can be exercised without a filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage over a single JSON file.
//!   The file is created empty on first load and rewritten in full on
//!   every save (no append, no atomic rename).
//! - [`memory::InMemoryStore`]: A byte buffer with the same
//!   empty/parse/overwrite semantics, for tests.
//!
//! ## Storage Format
//!
//! The whole collection is one compact JSON array, insertion order =
//! file order:
//!
//! ```text
//! [{"id":"1","email":"a@b.com","age":30},{"id":"2",...}]
//! ```
//!
//! An empty file is a valid empty collection. Anything else must parse as
//! an array of records; there is no partial-success path.

use crate::error::{Result, RoloError};
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for record persistence.
pub trait RecordStore {
    /// Raw store bytes, no parsing. Fails if the store cannot be read.
    fn read_raw(&self) -> Result<Vec<u8>>;

    /// Materialize the full collection.
    fn load(&self) -> Result<Vec<Record>>;

    /// Overwrite the store with the full collection.
    fn save(&mut self, records: &[Record]) -> Result<()>;
}

/// Decode store contents. Empty contents are an empty collection.
pub(crate) fn decode_records(contents: &[u8]) -> Result<Vec<Record>> {
    if contents.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_slice(contents).map_err(RoloError::Parse)
}

/// Encode the full collection as a compact JSON array.
pub(crate) fn encode_records(records: &[Record]) -> Result<Vec<u8>> {
    serde_json::to_vec(records).map_err(RoloError::Serialize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_contents_decode_to_an_empty_collection() {
        assert!(decode_records(b"").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_non_array_contents() {
        let err = decode_records(b"{\"id\":\"1\"}").unwrap_err();
        assert!(matches!(err, RoloError::Parse(_)));
    }

    #[test]
    fn encode_preserves_field_and_record_order() {
        let records = vec![
            Record::new("1", "a@b.com", 30),
            Record::new("2", "c@d.com", 41),
        ];
        let encoded = encode_records(&records).unwrap();
        assert_eq!(
            encoded,
            br#"[{"id":"1","email":"a@b.com","age":30},{"id":"2","email":"c@d.com","age":41}]"#
                .to_vec()
        );
    }
}
