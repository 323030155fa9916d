use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

/// Remove the first record matching `id`, preserving the relative order
/// of the rest. A missing id is an informational outcome, not an error.
pub fn run<S: RecordStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut records = store.load()?;

    let Some(idx) = records.iter().position(|r| r.id == id) else {
        return Ok(CmdResult::text(format!("Item with id {} not found", id)));
    };

    records.remove(idx);
    store.save(&records)?;
    Ok(CmdResult::silent())
}
