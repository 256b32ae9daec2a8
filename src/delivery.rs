//! Where finished PDFs go.

use crate::error::ExportError;
use crate::mode::ExportMode;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A fully assembled PDF, ready to hand over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
    pub mode: ExportMode,
}

/// Receives a finished file and returns a handle to it.
pub trait FileDelivery: Send + Sync {
    type Handle: Send;

    fn deliver(&self, file: ExportedFile) -> Result<Self::Handle, ExportError>;
}

/// Writes files into one directory. A file appears under its final name only
/// once completely written.
#[derive(Debug, Clone)]
pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn check_file_name(name: &str) -> io::Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{name}' is not a plain file name"),
        ));
    }
    Ok(())
}

impl FileDelivery for DirectoryDelivery {
    type Handle = PathBuf;

    fn deliver(&self, file: ExportedFile) -> Result<PathBuf, ExportError> {
        check_file_name(&file.file_name).map_err(ExportError::Delivery)?;
        let target = self.dir.join(&file.file_name);

        let mut temp = tempfile::NamedTempFile::new_in(&self.dir).map_err(ExportError::Delivery)?;
        temp.write_all(&file.bytes).map_err(ExportError::Delivery)?;
        temp.as_file().sync_all().map_err(ExportError::Delivery)?;
        temp.persist(&target).map_err(|e| ExportError::Delivery(e.error))?;

        log::info!(
            "Wrote {} ({} page(s), {} bytes).",
            target.display(),
            file.page_count,
            file.bytes.len()
        );
        Ok(target)
    }
}

/// Hands the file back to the caller. Only a count of deliveries is kept.
#[derive(Debug, Default)]
pub struct MemoryDelivery {
    delivered: AtomicUsize,
}

impl MemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered_count(&self) -> usize {
        self.delivered.load(Ordering::Relaxed)
    }
}

impl FileDelivery for MemoryDelivery {
    type Handle = ExportedFile;

    fn deliver(&self, file: ExportedFile) -> Result<ExportedFile, ExportError> {
        log::debug!("Delivered {} in memory ({} bytes).", file.file_name, file.bytes.len());
        self.delivered.fetch_add(1, Ordering::Relaxed);
        Ok(file)
    }
}

impl<D: FileDelivery> FileDelivery for std::sync::Arc<D> {
    type Handle = D::Handle;

    fn deliver(&self, file: ExportedFile) -> Result<Self::Handle, ExportError> {
        (**self).deliver(file)
    }
}
