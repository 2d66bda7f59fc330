//! Infrastructure utilities
//!
//! Reusable helpers for timing and file I/O.

mod file;
mod timing;

pub use file::FileUtils;
pub use timing::TimedOperation;
