use std::{
    io::{stderr, StderrLock},
    process::exit,
};

use crate::notice::{write_notice, EXIT_CODE};

// Nothing is left to report a failed write to, so the exit code carries it.
pub fn notify_and_exit() -> ! {
    let mut stderr: StderrLock<'_> = stderr().lock();
    let _ = write_notice(&mut stderr);
    exit(EXIT_CODE);
}
