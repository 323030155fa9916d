//! # API Facade
//!
//! The single entry point for all rolo operations, regardless of the UI
//! driving it. The facade dispatches to the command modules and normalizes
//! raw inputs (the item payload arrives as a JSON string and leaves here as
//! a typed [`Record`]). No business logic, no I/O, no presentation.

use crate::commands::{self, CmdResult};
use crate::error::{Result, RoloError};
use crate::model::Record;
use crate::store::RecordStore;

/// The main API facade.
///
/// Generic over [`RecordStore`] so the same surface runs against the file
/// store in production and the in-memory store in tests.
pub struct RoloApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> RoloApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Parse the raw item payload and add it to the collection.
    /// A malformed payload is a fatal parse error, never a silent no-op.
    pub fn add_item(&mut self, item: &str) -> Result<CmdResult> {
        let record: Record = serde_json::from_str(item).map_err(RoloError::Parse)?;
        commands::add::run(&mut self.store, record)
    }

    pub fn remove(&mut self, id: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn find_by_id(&self, id: &str) -> Result<CmdResult> {
        commands::find::run(&self.store, id)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_item_parses_the_payload() {
        let mut api = RoloApi::new(InMemoryStore::new());
        api.add_item(r#"{"id":"1","email":"a@b.com","age":30}"#)
            .unwrap();

        let result = api.find_by_id("1").unwrap();
        assert_eq!(
            result.output,
            br#"{"id":"1","email":"a@b.com","age":30}"#.to_vec()
        );
    }

    #[test]
    fn add_item_rejects_a_malformed_payload() {
        let mut api = RoloApi::new(InMemoryStore::new());
        let err = api.add_item("{not json").unwrap_err();
        assert!(matches!(err, RoloError::Parse(_)));
    }

    #[test]
    fn add_item_rejects_a_payload_with_missing_keys() {
        let mut api = RoloApi::new(InMemoryStore::new());
        let err = api.add_item(r#"{"id":"1"}"#).unwrap_err();
        assert!(matches!(err, RoloError::Parse(_)));
    }
}
