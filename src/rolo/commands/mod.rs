pub mod add;
pub mod find;
pub mod list;
pub mod remove;

/// Outcome of a command: the exact bytes the CLI writes to stdout.
///
/// Empty output is a normal, silent success. "Not found" and "already
/// exists" travel here as informational text, never as errors.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub output: Vec<u8>,
}

impl CmdResult {
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            output: content.into().into_bytes(),
        }
    }

    pub fn raw(output: Vec<u8>) -> Self {
        Self { output }
    }
}
