//! Site manifest errors

use super::impl_error_constructors;

impl_error_constructors! {
    /// Creates a site manifest serialization error
    serialize_failed => SerializeFailed { reason },
}
