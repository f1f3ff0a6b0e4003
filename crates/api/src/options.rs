//! Typed per-operation configuration
//!
//! Recognized keys are exactly `group` and `curve` for key generation and
//! `hash` for secret computation. Loose key/value input is accepted through
//! `from_pairs`, which rejects any key it does not recognize for that
//! operation rather than ignoring it.

use crate::error::{Error, Result};
use core::fmt;
use core::str::FromStr;
use tlskex_params::utils::hash::{
    SHA224_OUTPUT_SIZE, SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE, SHA512_OUTPUT_SIZE,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hash used to post-process a raw agreement value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HashAlgorithm {
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Digest length in bytes, which is also the derived secret's length
    pub const fn output_size(self) -> usize {
        match self {
            HashAlgorithm::Sha224 => SHA224_OUTPUT_SIZE,
            HashAlgorithm::Sha256 => SHA256_OUTPUT_SIZE,
            HashAlgorithm::Sha384 => SHA384_OUTPUT_SIZE,
            HashAlgorithm::Sha512 => SHA512_OUTPUT_SIZE,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "sha224" => Ok(HashAlgorithm::Sha224),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(Error::invalid_parameter(
                "hash option",
                format!("unsupported hash algorithm: {s}"),
            )),
        }
    }
}

/// Options for `generate_key_pair`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct KeyPairOptions {
    /// Finite-field group name (DHE)
    pub group: Option<String>,
    /// Named curve (ECDHE)
    pub curve: Option<String>,
}

impl KeyPairOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_curve(mut self, curve: impl Into<String>) -> Self {
        self.curve = Some(curve.into());
        self
    }

    /// Build from loose key/value pairs. Unknown or repeated keys are rejected.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            let slot = match key {
                "group" => &mut options.group,
                "curve" => &mut options.curve,
                _ => return Err(unrecognized("key generation", key)),
            };
            if slot.replace(value.to_string()).is_some() {
                return Err(duplicate(key));
            }
        }
        Ok(options)
    }
}

/// Options for `compute_shared_secret`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SecretOptions {
    /// Derivation hash; SHA-256 unless set
    pub hash: HashAlgorithm,
}

impl SecretOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }

    /// Build from loose key/value pairs. Unknown or repeated keys are rejected.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut hash = None;
        for (key, value) in pairs {
            match key {
                "hash" => {
                    if hash.replace(value.parse::<HashAlgorithm>()?).is_some() {
                        return Err(duplicate(key));
                    }
                }
                _ => return Err(unrecognized("secret computation", key)),
            }
        }
        Ok(Self {
            hash: hash.unwrap_or_default(),
        })
    }
}

fn unrecognized(operation: &str, key: &str) -> Error {
    Error::invalid_parameter(
        "options",
        format!("option '{key}' is not recognized for {operation}"),
    )
}

fn duplicate(key: &str) -> Error {
    Error::invalid_parameter("options", format!("option '{key}' given more than once"))
}
