// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::collections::BTreeSet;

use ipld_core::ipld::Ipld;
use thiserror::Error;

use crate::address::Address;
use crate::econ::{Currency, TokenAmount};

mod memory;

pub use memory::MemoryStateSnapshot;

/// Account state errors surfaced by snapshot mutators.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Not enough of the asset to debit.
    #[error("Insufficient balance of {address}: has {balance}, needs {required}")]
    InsufficientBalance {
        address: Address,
        balance: TokenAmount,
        required: TokenAmount,
    },
    /// Minting, burning, and transferring only move positive amounts.
    #[error("Amount must be positive, got {value}")]
    NonPositiveAmount { value: TokenAmount },
}

/// An immutable account-state snapshot: a persistent mapping from
/// [`Address`] to structured state and per-currency balances.
///
/// Every mutator returns a *new* snapshot and leaves the receiver intact,
/// so snapshots form a non-destructive value chain; holding an old snapshot
/// stays valid after newer ones are derived from it. Any number of
/// snapshots may therefore be shared across contexts without locking.
pub trait StateSnapshot: Clone {
    /// Structured state recorded for `address`, if any.
    fn state(&self, address: &Address) -> Option<Ipld>;

    /// Returns a snapshot in which `address` maps to `value`.
    fn with_state(&self, address: Address, value: Ipld) -> Self;

    /// Balance of `address` in `currency`; zero when the account never
    /// held the asset.
    fn balance(&self, address: &Address, currency: &Currency) -> TokenAmount;

    /// Credits `value` to `recipient` out of thin air.
    fn mint(&self, recipient: &Address, value: &TokenAmount) -> Result<Self, Error>;

    /// Moves `value` from `sender` to `recipient`. The sender's balance
    /// may only go below zero when `allow_negative` is set.
    fn transfer(
        &self,
        sender: &Address,
        recipient: &Address,
        value: &TokenAmount,
        allow_negative: bool,
    ) -> Result<Self, Error>;

    /// Removes `value` from `owner`'s balance.
    fn burn(&self, owner: &Address, value: &TokenAmount) -> Result<Self, Error>;

    /// Addresses whose state or balances this snapshot changed relative to
    /// the snapshot it was derived from.
    fn updated_addresses(&self) -> BTreeSet<Address>;
}
