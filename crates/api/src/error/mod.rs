//! Error handling for key-exchange operations

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, ErrorKind, Result};

// Re-export error traits
pub use traits::ResultExt;

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Self {
        Self::invalid_key("array conversion", "key has the wrong length")
    }
}
