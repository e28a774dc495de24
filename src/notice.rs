use std::io::{self, Write};

use thiserror::Error;

pub const RETIRED_ENTRY_POINT: &str = "tools/update_enable_mocks_headers.py";
pub const REPLACEMENT_SCRIPT: &str = "tools/update_enable_mocks_headers.ps1";
pub const REPLACEMENT_COMMAND: &str =
    "powershell -ExecutionPolicy Bypass -File tools/update_enable_mocks_headers.ps1";
pub const EXIT_CODE: i32 = 1;

#[derive(Error, Debug)]
pub enum NoticeError {
    #[error("cannot write to stderr: {0}")]
    StderrWrite(io::Error),
    #[error("cannot flush stderr: {0}")]
    StderrFlush(io::Error),
}

pub fn deprecation_message() -> String {
    format!(
        "{} has been replaced. Run {} instead.",
        RETIRED_ENTRY_POINT, REPLACEMENT_COMMAND
    )
}

/// Writes the notice followed by a newline in a single `write_all`.
pub fn write_notice<W: Write>(writer: &mut W) -> Result<(), NoticeError> {
    let mut line: String = deprecation_message();
    line.push('\n');
    writer
        .write_all(line.as_bytes())
        .map_err(NoticeError::StderrWrite)?;
    writer.flush().map_err(NoticeError::StderrFlush)
}
