//! Read an ordered list of text files as one continuous stream of lines.
//!
//! - Files are opened lazily, one at a time, in the order given.
//! - Empty files are skipped over; exhaustion is reported only when every file is done.
//! - Line terminators (`\n`, `\r\n`) are stripped.
//! - Open failures abort the stream (default) or are skipped with a warning.
//! - Optional `mmap` for plain files.
//!
//! ```no_run
//! use joined_line_reader::{JoinedLineReader, ReaderOptions};
//!
//! # fn main() -> Result<(), joined_line_reader::LineError> {
//! let mut rdr = JoinedLineReader::new(["reads_1.fq", "reads_2.fq"], ReaderOptions::default());
//! let mut line = String::new();
//! while rdr.read_line(&mut line)? {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod joined;
pub mod line_reader;
pub mod policy;
mod util;

pub use crate::error::{IoContext, LineError};
pub use crate::joined::JoinedLineReader;
pub use crate::line_reader::{FileLineReader, FileOpener, LineReader, OpenLines, Source};
pub use crate::policy::{DEFAULT_BUFFER_CAPACITY, OpenFailurePolicy, ReaderOptions};
