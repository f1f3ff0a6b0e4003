//! Error handling traits for wrapping provider failures

use super::types::{Error, Result};
use core::fmt::Display;

/// Extension trait for results coming back from a cryptographic provider.
///
/// Provider errors are never swallowed: each helper keeps the provider's
/// message and files it under the error kind the caller asked for.
pub trait ResultExt<T, E>: Sized {
    /// Re-wrap as [`Error::InvalidKey`]
    fn or_invalid_key(self, context: &'static str) -> Result<T>
    where
        E: Display;

    /// Re-wrap as [`Error::KeyGeneration`]
    fn or_key_generation(self, context: &'static str) -> Result<T>
    where
        E: Display;

    /// Replace the context of an error that is already (or converts into) an [`Error`]
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn or_invalid_key(self, context: &'static str) -> Result<T>
    where
        E: Display,
    {
        self.map_err(|e| Error::invalid_key(context, e.to_string()))
    }

    fn or_key_generation(self, context: &'static str) -> Result<T>
    where
        E: Display,
    {
        self.map_err(|e| Error::key_generation(context, e.to_string()))
    }

    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(|e| e.into().with_context(context))
    }
}
