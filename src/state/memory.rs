// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::collections::BTreeSet;
use std::sync::Arc;

use ahash::HashMap;
use ipld_core::ipld::Ipld;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use super::{Error, StateSnapshot};
use crate::address::Address;
use crate::econ::{Currency, TokenAmount};

/// In-memory [`StateSnapshot`]: a delta layer of touched states and
/// balances over an optional shared base snapshot. Reads fall through the
/// layers; writes clone only the delta layer, so deriving a snapshot never
/// copies the base.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStateSnapshot {
    base: Option<Arc<MemoryStateSnapshot>>,
    states: HashMap<Address, Ipld>,
    balances: HashMap<(Address, Currency), BigInt>,
}

impl MemoryStateSnapshot {
    /// Starts an empty delta layer on top of `base`, typically at a batch
    /// boundary once the previous delta is sealed.
    pub fn derive(base: Arc<MemoryStateSnapshot>) -> Self {
        MemoryStateSnapshot {
            base: Some(base),
            states: HashMap::default(),
            balances: HashMap::default(),
        }
    }

    fn raw_balance(&self, address: &Address, currency: &Currency) -> BigInt {
        if let Some(raw) = self.balances.get(&(*address, currency.clone())) {
            return raw.clone();
        }
        match &self.base {
            Some(base) => base.raw_balance(address, currency),
            None => BigInt::zero(),
        }
    }

    fn ensure_positive(value: &TokenAmount) -> Result<(), Error> {
        if value.is_positive() {
            Ok(())
        } else {
            Err(Error::NonPositiveAmount {
                value: value.clone(),
            })
        }
    }
}

impl StateSnapshot for MemoryStateSnapshot {
    fn state(&self, address: &Address) -> Option<Ipld> {
        if let Some(value) = self.states.get(address) {
            return Some(value.clone());
        }
        self.base.as_ref().and_then(|base| base.state(address))
    }

    fn with_state(&self, address: Address, value: Ipld) -> Self {
        let mut next = self.clone();
        next.states.insert(address, value);
        next
    }

    fn balance(&self, address: &Address, currency: &Currency) -> TokenAmount {
        TokenAmount::new(currency.clone(), self.raw_balance(address, currency))
    }

    fn mint(&self, recipient: &Address, value: &TokenAmount) -> Result<Self, Error> {
        Self::ensure_positive(value)?;
        let currency = value.currency();
        let credited = self.raw_balance(recipient, currency) + value.raw();
        let mut next = self.clone();
        next.balances.insert((*recipient, currency.clone()), credited);
        Ok(next)
    }

    fn transfer(
        &self,
        sender: &Address,
        recipient: &Address,
        value: &TokenAmount,
        allow_negative: bool,
    ) -> Result<Self, Error> {
        Self::ensure_positive(value)?;
        let currency = value.currency();
        let debited = self.raw_balance(sender, currency) - value.raw();
        if !allow_negative && debited.is_negative() {
            return Err(Error::InsufficientBalance {
                address: *sender,
                balance: self.balance(sender, currency),
                required: value.clone(),
            });
        }
        let mut next = self.clone();
        next.balances.insert((*sender, currency.clone()), debited);
        // Read through `next` so a self-transfer nets out to no change.
        let credited = next.raw_balance(recipient, currency) + value.raw();
        next.balances.insert((*recipient, currency.clone()), credited);
        Ok(next)
    }

    fn burn(&self, owner: &Address, value: &TokenAmount) -> Result<Self, Error> {
        Self::ensure_positive(value)?;
        let currency = value.currency();
        let remaining = self.raw_balance(owner, currency) - value.raw();
        if remaining.is_negative() {
            return Err(Error::InsufficientBalance {
                address: *owner,
                balance: self.balance(owner, currency),
                required: value.clone(),
            });
        }
        let mut next = self.clone();
        next.balances.insert((*owner, currency.clone()), remaining);
        Ok(next)
    }

    fn updated_addresses(&self) -> BTreeSet<Address> {
        self.states
            .keys()
            .copied()
            .chain(self.balances.keys().map(|(address, _)| *address))
            .collect()
    }
}
