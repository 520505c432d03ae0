//! Standard exit codes for CLI operations
//!
//! These exit codes follow Unix conventions and sysexits.h where applicable.

/// Input error - missing file or unparseable YAML
pub const INPUT_ERROR: i32 = 2;

/// Generation error - the document lacks required structure
pub const GENERATION_ERROR: i32 = 3;

/// IO error - file could not be read or written
pub const IO_ERROR: i32 = 5;
