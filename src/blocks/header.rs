// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ChainEpoch, Error};
use crate::address::Address;
use crate::utils::encoding::blake2b_256;

/// Content identifier of a block header: the `blake2b-256` digest of the
/// header fields.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct BlockId([u8; 32]);

impl BlockId {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockId({})", hex::encode(self.0))
    }
}

impl FromStr for BlockId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let bz = hex::decode(s).map_err(|e| Error::InvalidId(e.to_string()))?;
        let digest =
            <[u8; 32]>::try_from(bz.as_slice()).map_err(|_| Error::InvalidId(s.to_owned()))?;
        Ok(BlockId(digest))
    }
}

impl Serialize for BlockId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BlockId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A chain element as seen by renderers: parent link, height, and the
/// address of the miner that proposed it. The content id is computed once
/// and cached; equality compares ids.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockHeader {
    miner_address: Address,
    parent: Option<BlockId>,
    epoch: ChainEpoch,
    #[serde(skip)]
    id: OnceLock<BlockId>,
}

impl BlockHeader {
    pub fn new(miner_address: Address, parent: Option<BlockId>, epoch: ChainEpoch) -> Self {
        BlockHeader {
            miner_address,
            parent,
            epoch,
            id: OnceLock::new(),
        }
    }

    pub fn miner_address(&self) -> &Address {
        &self.miner_address
    }

    /// Parent block id; `None` only for a genesis header.
    pub fn parent(&self) -> Option<&BlockId> {
        self.parent.as_ref()
    }

    pub fn epoch(&self) -> ChainEpoch {
        self.epoch
    }

    pub fn id(&self) -> &BlockId {
        self.id.get_or_init(|| {
            let mut ingest = Vec::with_capacity(61);
            ingest.extend_from_slice(self.miner_address.as_bytes());
            match &self.parent {
                Some(parent) => {
                    ingest.push(1);
                    ingest.extend_from_slice(parent.as_bytes());
                }
                None => ingest.push(0),
            }
            ingest.extend_from_slice(&self.epoch.to_le_bytes());
            BlockId(blake2b_256(&ingest))
        })
    }
}

impl PartialEq for BlockHeader {
    fn eq(&self, other: &Self) -> bool {
        // Epoch check is redundant but cheap.
        self.epoch == other.epoch && self.id() == other.id()
    }
}

impl Eq for BlockHeader {}
