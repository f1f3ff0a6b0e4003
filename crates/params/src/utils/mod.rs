//! Shared constants that are not tied to a single key-exchange family

pub mod hash;
