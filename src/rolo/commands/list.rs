use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

/// Pass-through listing: emit the raw store bytes verbatim, whatever they
/// are. Never round-trips through the data model.
pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::raw(store.read_raw()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Record;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.output.is_empty());
    }

    #[test]
    fn lists_the_serialized_collection() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, Record::new("1", "a@b.com", 30)).unwrap();

        let result = run(&store).unwrap();
        assert_eq!(
            result.output,
            br#"[{"id":"1","email":"a@b.com","age":30}]"#.to_vec()
        );
    }

    #[test]
    fn passes_non_json_contents_through_verbatim() {
        let store = InMemoryStore::with_contents(b"not even json".to_vec());
        let result = run(&store).unwrap();
        assert_eq!(result.output, b"not even json".to_vec());
    }
}
