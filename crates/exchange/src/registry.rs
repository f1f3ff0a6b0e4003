//! Group and curve resolution
//!
//! The table itself lives in `tlskex-params` and never changes. This module
//! adds lookup by name, alias and TLS 1.3 wire id, and a cache of decoded
//! finite-field primes that is filled at most once per group.

use num_bigint::BigUint;
use std::sync::OnceLock;
use tlskex_api::{Error, Result};
use tlskex_params::{GroupParameter, GROUPS, GROUP_ALIASES};

const CONTEXT: &str = "group registry";

static FFDHE2048_PRIME: OnceLock<BigUint> = OnceLock::new();
static FFDHE3072_PRIME: OnceLock<BigUint> = OnceLock::new();
static FFDHE4096_PRIME: OnceLock<BigUint> = OnceLock::new();

/// Every known group, in table order
pub fn all() -> &'static [GroupParameter] {
    &GROUPS
}

/// Look up a group by identifier or alias
pub fn find(identifier: &str) -> Option<&'static GroupParameter> {
    let canonical = GROUP_ALIASES
        .iter()
        .find(|(alias, _)| *alias == identifier)
        .map_or(identifier, |(_, name)| *name);
    GROUPS.iter().find(|g| g.name == canonical)
}

/// Resolve a group by identifier or alias; unknown names are `InvalidCurve`
pub fn resolve(identifier: &str) -> Result<&'static GroupParameter> {
    find(identifier)
        .ok_or_else(|| Error::invalid_curve(CONTEXT, format!("unknown group: {identifier}")))
}

/// Resolve a TLS 1.3 NamedGroup value
pub fn by_wire_id(id: u16) -> Result<&'static GroupParameter> {
    GROUPS
        .iter()
        .find(|g| g.wire_id == Some(id))
        .ok_or_else(|| Error::invalid_curve(CONTEXT, format!("unknown group id: 0x{id:04x}")))
}

/// TLS 1.3 NamedGroup value for `name`
///
/// Fails with `InvalidCurve` for unknown names and for groups that have no
/// key-share encoding here.
pub fn wire_id(name: &str) -> Result<u16> {
    find(name)
        .and_then(|g| g.wire_id)
        .ok_or_else(|| Error::invalid_curve(CONTEXT, format!("Unknown group: {name}")))
}

/// The decoded prime of a finite-field group
pub fn prime(group: &GroupParameter) -> Result<&'static BigUint> {
    let cell = match group.name {
        "ffdhe2048" => &FFDHE2048_PRIME,
        "ffdhe3072" => &FFDHE3072_PRIME,
        "ffdhe4096" => &FFDHE4096_PRIME,
        other => {
            return Err(Error::invalid_curve(
                CONTEXT,
                format!("{other} is not a finite-field group"),
            ))
        }
    };

    if let Some(p) = cell.get() {
        return Ok(p);
    }
    let hex = group.prime_hex.ok_or_else(|| {
        Error::invalid_parameter(CONTEXT, format!("{} has no prime", group.name))
    })?;
    let decoded = BigUint::parse_bytes(hex.as_bytes(), 16).ok_or_else(|| {
        Error::invalid_parameter(CONTEXT, format!("{} prime is not valid hex", group.name))
    })?;
    Ok(cell.get_or_init(|| decoded))
}
