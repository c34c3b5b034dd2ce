//! Store - document identity, file format, and local file I/O
//!
//! This crate tracks which document is being edited and where it lives,
//! normalizes file names to the required extensions, serializes content to
//! the `.dvk` document format, reads and writes local files, and manages
//! editor settings.

mod error;
mod file_io;
mod format;
mod identity;
mod serializer;
mod settings;

pub use error::*;
pub use file_io::*;
pub use format::*;
pub use identity::*;
pub use serializer::*;
pub use settings::*;
