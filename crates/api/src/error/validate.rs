//! Guards run before any provider call
//!
//! Each helper returns `Ok(())` when `condition` holds and the matching error
//! kind otherwise.

use super::{Error, Result};

/// Validate caller-supplied parameters
pub fn parameter(condition: bool, context: &'static str, message: &str) -> Result<()> {
    if !condition {
        return Err(Error::invalid_parameter(context, message));
    }
    Ok(())
}

/// Validate group or curve selection
pub fn curve(condition: bool, context: &'static str, message: &str) -> Result<()> {
    if !condition {
        return Err(Error::invalid_curve(context, message));
    }
    Ok(())
}

/// Validate key format
pub fn key(condition: bool, context: &'static str, message: &str) -> Result<()> {
    if !condition {
        return Err(Error::invalid_key(context, message));
    }
    Ok(())
}

/// Validate an exact key length
pub fn length(context: &'static str, what: &str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::invalid_key(
            context,
            format!("invalid {what} length: expected {expected} bytes, got {actual}"),
        ));
    }
    Ok(())
}

/// Validate that an optional piece of session state is present
pub fn present<'a, T: ?Sized>(
    value: Option<&'a T>,
    context: &'static str,
    message: &str,
) -> Result<&'a T> {
    value.ok_or_else(|| Error::invalid_parameter(context, message))
}
