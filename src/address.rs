// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of payload bytes in an address.
pub const ADDRESS_LEN: usize = 20;

/// Address parsing errors.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid address length: {0}")]
    InvalidLength(usize),
    #[error("Invalid address encoding: {0}")]
    InvalidEncoding(String),
}

/// Account identifier: a fixed 20-byte payload compared by content.
///
/// Rendered as lowercase hex; parsing accepts an optional `0x` prefix.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Default)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub const fn new(payload: [u8; ADDRESS_LEN]) -> Self {
        Address(payload)
    }

    /// Creates an address from a byte slice, validating the length.
    pub fn from_bytes(bz: &[u8]) -> Result<Self, Error> {
        let payload = <[u8; ADDRESS_LEN]>::try_from(bz)
            .map_err(|_| Error::InvalidLength(bz.len()))?;
        Ok(Address(payload))
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(payload: [u8; ADDRESS_LEN]) -> Self {
        Address(payload)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(addr: &str) -> Result<Self, Error> {
        let raw = addr.strip_prefix("0x").unwrap_or(addr);
        if raw.len() != ADDRESS_LEN * 2 {
            return Err(Error::InvalidLength(raw.len() / 2));
        }
        let bz = hex::decode(raw).map_err(|e| Error::InvalidEncoding(e.to_string()))?;
        Address::from_bytes(&bz)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
