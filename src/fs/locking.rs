//! File locking for index files
//!
//! Locked read/write using `fs2` advisory locks so that a `keg scan --write`
//! never hands a concurrent reader a half-written index.
//!
//! Advisory locks are cooperative: only readers and writers going through
//! these functions are kept apart.

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::KegError;

/// Read file contents with a shared (read) lock.
///
/// Multiple readers may hold the lock at once; a writer holding the
/// exclusive lock blocks them until it is done. Invalid UTF-8 is replaced
/// with U+FFFD rather than failing the read.
pub fn locked_read(path: &Path) -> Result<String, KegError> {
    let io_err = |e| KegError::from_io(path, e);

    let file = File::open(path).map_err(io_err)?;
    file.lock_shared().map_err(io_err)?;
    let mut content = Vec::new();
    BufReader::new(&file)
        .read_to_end(&mut content)
        .map_err(io_err)?;
    Ok(String::from_utf8_lossy(&content).into_owned())
}

/// Write file contents with an exclusive (write) lock.
///
/// The sequence is: open → lock → truncate → write → flush. Truncating
/// only after the lock is held means no reader can see an empty file.
pub fn locked_write(path: &Path, content: &str) -> Result<(), KegError> {
    let io_err = |e| KegError::from_io(path, e);

    #[allow(clippy::suspicious_open_options)]
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .open(path)
        .map_err(io_err)?;
    file.lock_exclusive().map_err(io_err)?;
    file.set_len(0).map_err(io_err)?;
    let mut writer = BufWriter::new(&file);
    writer.write_all(content.as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    Ok(())
}
