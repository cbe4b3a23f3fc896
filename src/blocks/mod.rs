// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use thiserror::Error;

mod header;

pub use header::{BlockHeader, BlockId};

/// Height of a block in the chain. Non-negative for any block this core is
/// handed.
pub type ChainEpoch = i64;

/// Blockchain blocks error
#[derive(Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Block identifier could not be decoded from its hex form.
    #[error("Invalid block id: {0}")]
    InvalidId(String),
}
