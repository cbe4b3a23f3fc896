// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod context;
mod rand;

pub use context::ExecutionContext;
pub use rand::SubtractiveRng;

use crate::state::StateSnapshot;

/// A unit of state-transition logic run while a block is built or
/// validated.
///
/// An action reads its inputs from the [`ExecutionContext`] and returns
/// the snapshot that results from applying it. Execution must be a pure
/// function of the context: given equal signer, miner, epoch, previous
/// state, and seed, every node must produce the identical snapshot.
/// Domain failures (insufficient balance, malformed payloads, …) travel
/// the error channel; the orchestrator catches them and reports them
/// through the action-error renderer operations instead of swallowing
/// them.
pub trait Action<S: StateSnapshot> {
    fn execute(&self, context: &ExecutionContext<S>) -> anyhow::Result<S>;
}
