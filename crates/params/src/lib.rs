//! Constant values and group tables for tlskex
//!
//! Everything here is plain data: group identifiers, domain parameters as
//! text, key sizes and wire constants. Resolution and decoding live in
//! `tlskex-exchange`.

#![no_std]

pub mod group;
pub mod tls13;
pub mod traditional;
pub mod utils;

pub use group::{GroupKind, GroupParameter, GROUPS, GROUP_ALIASES};
