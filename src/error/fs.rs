//! File system errors

use super::impl_error_constructors;

impl_error_constructors! {
    /// Creates a file read failed error
    read_failed => FileReadFailed { path, reason },
    /// Creates a file write failed error
    write_failed => FileWriteFailed { path, reason },
}
