//! Report destination handling: the `stdout` sentinel or a
//! truncate-or-create file, one destination per run.

use tokio::io::AsyncWriteExt;

use crate::error::{AppError, AppResult, FileError};

pub const STDOUT: &str = "stdout";

/// Create (or truncate) the destination before the first pass so a bad
/// path fails the run before any network activity.
///
/// # Errors
///
/// Returns an `Output file:` error if the file cannot be created.
pub async fn ensure_writable(name: &str) -> AppResult<()> {
    if name == STDOUT {
        return Ok(());
    }
    drop(
        tokio::fs::File::create(name)
            .await
            .map_err(|err| {
                AppError::file(FileError::OutputOpen {
                    name: name.to_owned(),
                    source: err,
                })
            })?,
    );
    Ok(())
}

/// Write the rendered report to the destination.
///
/// # Errors
///
/// Returns an `Output file:` error if the write fails.
pub async fn write_report(name: &str, bytes: &[u8]) -> AppResult<()> {
    if name == STDOUT {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(bytes).await.map_err(|err| {
            AppError::file(FileError::OutputWrite {
                name: name.to_owned(),
                source: err,
            })
        })?;
        return stdout.flush().await.map_err(|err| {
            AppError::file(FileError::OutputWrite {
                name: name.to_owned(),
                source: err,
            })
        });
    }
    tokio::fs::write(name, bytes).await.map_err(|err| {
        AppError::file(FileError::OutputWrite {
            name: name.to_owned(),
            source: err,
        })
    })
}
