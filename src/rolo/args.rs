use clap::Parser;
use rolo::error::{Result, RoloError};

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "Manage a JSON-file-backed collection of records", long_about = None)]
pub struct Cli {
    /// Operation to perform: add, list, remove or findById
    #[arg(long, default_value = "")]
    pub operation: String,

    /// Path to the JSON store file
    #[arg(long = "fileName", default_value = "")]
    pub file_name: String,

    /// Record to add, as a JSON object literal
    #[arg(long, default_value = "")]
    pub item: String,

    /// Record id for remove/findById
    #[arg(long, default_value = "")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add { item: String },
    List,
    Remove { id: String },
    FindById { id: String },
}

/// A validated request: the store file plus exactly one operation with its
/// payload attached.
#[derive(Debug)]
pub struct Request {
    pub file_name: String,
    pub operation: Operation,
}

impl Cli {
    /// Validate the raw flags, first failing check wins: operation present,
    /// fileName present, operation known, then the operation's own payload
    /// flag.
    pub fn into_request(self) -> Result<Request> {
        if self.operation.is_empty() {
            return Err(RoloError::MissingFlag("operation"));
        }
        if self.file_name.is_empty() {
            return Err(RoloError::MissingFlag("fileName"));
        }

        let operation = match self.operation.as_str() {
            "add" => {
                if self.item.is_empty() {
                    return Err(RoloError::MissingFlag("item"));
                }
                Operation::Add { item: self.item }
            }
            "list" => Operation::List,
            "remove" => {
                if self.id.is_empty() {
                    return Err(RoloError::MissingFlag("id"));
                }
                Operation::Remove { id: self.id }
            }
            "findById" => {
                if self.id.is_empty() {
                    return Err(RoloError::MissingFlag("id"));
                }
                Operation::FindById { id: self.id }
            }
            other => return Err(RoloError::InvalidOperation(other.to_string())),
        };

        Ok(Request {
            file_name: self.file_name,
            operation,
        })
    }
}
