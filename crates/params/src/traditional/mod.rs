//! Constants for the classical key-exchange families

pub mod dh;
pub mod ecdh;
pub mod modern;
pub mod rsa;
