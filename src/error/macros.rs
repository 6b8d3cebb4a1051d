//! Error constructor macros for consistent error construction
//!
//! Each per-domain error module declares its constructors with
//! [`impl_error_constructors!`] instead of writing them out by hand.

/// Generate `pub fn` constructors for [`ConfigureError`](super::ConfigureError) variants
///
/// Every field is a `String` taking `impl Into<String>`.
///
/// # Example
/// ```rust,ignore
/// impl_error_constructors! {
///     /// Creates an article not found error
///     not_found => ArticleNotFound { path },
/// }
/// ```
macro_rules! impl_error_constructors {
    ($($(#[$meta:meta])* $name:ident => $variant:ident { $($field:ident),* $(,)? }),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name($($field: impl Into<String>),*) -> $crate::error::ConfigureError {
                $crate::error::ConfigureError::$variant {
                    $($field: $field.into()),*
                }
            }
        )*
    };
}

pub(crate) use impl_error_constructors;
