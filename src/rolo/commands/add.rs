use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Append a record unless its id is already taken.
///
/// On conflict nothing is written back, so the store bytes stay exactly
/// as they were.
pub fn run<S: RecordStore>(store: &mut S, record: Record) -> Result<CmdResult> {
    let mut records = store.load()?;

    if records.iter().any(|r| r.id == record.id) {
        return Ok(CmdResult::text(format!(
            "Item with id {} already exists",
            record.id
        )));
    }

    records.push(record);
    store.save(&records)?;
    Ok(CmdResult::silent())
}
