use super::{decode_records, encode_records, RecordStore};
use crate::error::{Result, RoloError};
use crate::model::Record;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::PathBuf;

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

/// File-backed store: the whole collection lives in one JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open read/write, creating the file empty (0644 on Unix) if absent.
    fn open_or_create(&self) -> Result<File> {
        let mut opts = OpenOptions::new();
        opts.read(true).write(true).create(true);
        #[cfg(unix)]
        opts.mode(0o644);
        opts.open(&self.path).map_err(RoloError::Io)
    }
}

impl RecordStore for FileStore {
    fn read_raw(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(RoloError::Io)
    }

    fn load(&self) -> Result<Vec<Record>> {
        let mut file = self.open_or_create()?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(RoloError::Io)?;
        decode_records(&contents)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        let contents = encode_records(records)?;
        let mut opts = OpenOptions::new();
        opts.write(true).create(true).truncate(true);
        #[cfg(unix)]
        opts.mode(0o644);
        let mut file = opts.open(&self.path).map_err(RoloError::Io)?;
        file.write_all(&contents).map_err(RoloError::Io)
    }
}
