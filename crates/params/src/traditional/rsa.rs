//! Constants for RSA key transport (TLS 1.2 and earlier)

/// Total size of the RSA pre-master secret
pub const PRE_MASTER_SECRET_SIZE: usize = 48;

/// Size of the protocol version tag at the front of the pre-master secret
pub const PRE_MASTER_VERSION_SIZE: usize = 2;

/// Random bytes following the version tag
pub const PRE_MASTER_RANDOM_SIZE: usize = PRE_MASTER_SECRET_SIZE - PRE_MASTER_VERSION_SIZE;

/// TLS 1.0 protocol version
pub const TLS1_0_VERSION: u16 = 0x0301;

/// TLS 1.1 protocol version
pub const TLS1_1_VERSION: u16 = 0x0302;

/// TLS 1.2 protocol version
pub const TLS1_2_VERSION: u16 = 0x0303;
