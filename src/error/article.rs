//! Article manifest errors

use super::impl_error_constructors;

impl_error_constructors! {
    /// Creates an invalid input error
    invalid_input => InvalidInput { path, reason },
    /// Creates an article not found error
    not_found => ArticleNotFound { path },
    /// Creates an article parse failed error
    parse_failed => ParseFailed { path, reason },
    /// Creates a missing field error
    missing_field => MissingField { path, field },
}
