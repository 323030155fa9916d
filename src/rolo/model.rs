use serde::{Deserialize, Serialize};

/// A single stored entity.
///
/// Field declaration order fixes the serialized key order, so a record
/// round-trips as `{"id":...,"email":...,"age":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub email: String,
    pub age: u32,
}

impl Record {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }
}
