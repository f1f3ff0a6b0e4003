//! Trait definitions shared by every key-exchange mechanism

pub mod exchange;

pub use exchange::{KeyExchange, PreMasterSecret};
