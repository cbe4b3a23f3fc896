// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Deterministic action execution and chain observation.
//!
//! The [`interpreter`] module supplies the per-action [`ExecutionContext`]
//! and its seed-derived random generator; the [`chain`] module carries the
//! renderer contract through which an external orchestrator notifies
//! observers of applied/unwound actions and canonical-tip changes.

pub mod address;
pub mod blocks;
pub mod chain;
pub mod econ;
pub mod interpreter;
pub mod state;
mod utils;

pub use address::Address;
pub use blocks::{BlockHeader, BlockId, ChainEpoch};
pub use chain::{
    HeadChange,
    renderers::{CallbackRenderer, Renderer, RendererSet},
};
pub use econ::{Currency, TokenAmount};
pub use interpreter::{Action, ExecutionContext, SubtractiveRng};
pub use state::{MemoryStateSnapshot, StateSnapshot};
