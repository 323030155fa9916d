use crate::commands::CmdResult;
use crate::error::{Result, RoloError};
use crate::store::RecordStore;

/// Emit the first record matching `id` as a JSON object.
/// Absence is a normal, silent result.
pub fn run<S: RecordStore>(store: &S, id: &str) -> Result<CmdResult> {
    let records = store.load()?;

    match records.iter().find(|r| r.id == id) {
        Some(record) => {
            let json = serde_json::to_vec(record).map_err(RoloError::Serialize)?;
            Ok(CmdResult::raw(json))
        }
        None => Ok(CmdResult::silent()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Record;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn serializes_the_matching_record() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, Record::new("1", "a@b.com", 30)).unwrap();
        add::run(&mut store, Record::new("2", "c@d.com", 41)).unwrap();

        let result = run(&store, "2").unwrap();
        assert_eq!(
            result.output,
            br#"{"id":"2","email":"c@d.com","age":41}"#.to_vec()
        );
    }

    #[test]
    fn finds_the_record_at_the_first_position() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, Record::new("1", "a@b.com", 30)).unwrap();

        let result = run(&store, "1").unwrap();
        assert_eq!(
            result.output,
            br#"{"id":"1","email":"a@b.com","age":30}"#.to_vec()
        );
    }

    #[test]
    fn missing_id_is_silent() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, Record::new("1", "a@b.com", 30)).unwrap();

        let result = run(&store, "9").unwrap();
        assert!(result.output.is_empty());
    }

    #[test]
    fn empty_store_is_silent() {
        let store = InMemoryStore::new();
        let result = run(&store, "1").unwrap();
        assert!(result.output.is_empty());
    }
}
