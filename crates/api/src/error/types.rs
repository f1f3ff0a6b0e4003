//! Error type definitions for key-exchange operations

use thiserror::Error;

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or contradictory caller input
    InvalidParameter,
    /// Unknown or mismatched curve/group
    InvalidCurve,
    /// Malformed or wrong-typed key material
    InvalidKey,
    /// The provider refused to generate, export or encrypt key material
    KeyGenerationFailure,
    /// The provider refused to combine keys that passed validation
    KeyExchangeFailure,
    /// The capability does not exist in this build
    UnsupportedOperation,
}

/// Primary error type for key-exchange operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Missing or contradictory caller input, raised before any provider call
    #[error("{context}: invalid parameter: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Unknown group/curve, or two keys on different ones
    #[error("{context}: invalid curve: {message}")]
    InvalidCurve {
        context: &'static str,
        message: String,
    },

    /// Key material that cannot be loaded or decoded
    #[error("{context}: invalid key: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Key generation, export or key-transport encryption failed
    #[error("{context}: key generation failed: {message}")]
    KeyGeneration {
        context: &'static str,
        message: String,
    },

    /// The agreement primitive rejected its inputs
    #[error("{context}: key exchange failed: {message}")]
    KeyExchange {
        context: &'static str,
        message: String,
    },

    /// Capability not available; may succeed after an upgrade
    #[error("{feature} is not supported: {message}")]
    Unsupported {
        feature: &'static str,
        message: String,
    },
}

/// Result type for key-exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub fn invalid_parameter(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    pub fn invalid_curve(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidCurve {
            context,
            message: message.into(),
        }
    }

    pub fn invalid_key(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidKey {
            context,
            message: message.into(),
        }
    }

    pub fn key_generation(context: &'static str, message: impl Into<String>) -> Self {
        Self::KeyGeneration {
            context,
            message: message.into(),
        }
    }

    pub fn key_exchange(context: &'static str, message: impl Into<String>) -> Self {
        Self::KeyExchange {
            context,
            message: message.into(),
        }
    }

    pub fn unsupported(feature: &'static str, message: impl Into<String>) -> Self {
        Self::Unsupported {
            feature,
            message: message.into(),
        }
    }

    /// Two keys that should share a curve do not. Both names are reported.
    pub fn curve_mismatch(context: &'static str, local: &str, peer: &str) -> Self {
        Self::InvalidCurve {
            context,
            message: format!("curve mismatch: private key uses {local}, public key uses {peer}"),
        }
    }

    /// The error's classification
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Self::InvalidCurve { .. } => ErrorKind::InvalidCurve,
            Self::InvalidKey { .. } => ErrorKind::InvalidKey,
            Self::KeyGeneration { .. } => ErrorKind::KeyGenerationFailure,
            Self::KeyExchange { .. } => ErrorKind::KeyExchangeFailure,
            Self::Unsupported { .. } => ErrorKind::UnsupportedOperation,
        }
    }

    /// `true` when the operation is missing from this build rather than failed
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// The message without the context prefix
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidParameter { message, .. }
            | Self::InvalidCurve { message, .. }
            | Self::InvalidKey { message, .. }
            | Self::KeyGeneration { message, .. }
            | Self::KeyExchange { message, .. }
            | Self::Unsupported { message, .. } => message,
        }
    }

    /// Replace the context, keeping kind and message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidCurve { message, .. } => Self::InvalidCurve { context, message },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::KeyGeneration { message, .. } => Self::KeyGeneration { context, message },
            Self::KeyExchange { message, .. } => Self::KeyExchange { context, message },
            Self::Unsupported { feature, message } => Self::Unsupported { feature, message },
        }
    }
}
