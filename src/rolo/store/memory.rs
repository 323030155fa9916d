use super::{decode_records, encode_records, RecordStore};
use crate::error::Result;
use crate::model::Record;

/// In-memory store for testing.
/// Mirrors the file store's empty/parse/overwrite semantics over a byte
/// buffer, so hand-edited or malformed store contents can be simulated.
#[derive(Default)]
pub struct InMemoryStore {
    contents: Vec<u8>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from arbitrary store bytes, as if the file had been
    /// hand-edited.
    pub fn with_contents(contents: Vec<u8>) -> Self {
        Self { contents }
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }
}

impl RecordStore for InMemoryStore {
    fn read_raw(&self) -> Result<Vec<u8>> {
        Ok(self.contents.clone())
    }

    fn load(&self) -> Result<Vec<Record>> {
        decode_records(&self.contents)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.contents = encode_records(records)?;
        Ok(())
    }
}
