// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use parking_lot::{Mutex, MutexGuard};

use super::rand::SubtractiveRng;
use crate::address::Address;
use crate::blocks::ChainEpoch;
use crate::state::StateSnapshot;

/// Everything an action sees while it runs: the transaction signer, the
/// proposer of the containing block, the block height, the state snapshot
/// produced by the previous action, and a seed-derived random generator.
///
/// A context is built immediately before one action executes and discarded
/// afterwards; none of its fields ever change. State mutation is delegated
/// to the snapshot, which returns new snapshots and leaves
/// [`previous_state`](Self::previous_state) intact. Replaying the same
/// height with the same inputs therefore reproduces the same pseudo-random
/// side effects no matter what else ran in the process.
#[derive(Debug)]
pub struct ExecutionContext<S> {
    signer: Address,
    miner: Address,
    epoch: ChainEpoch,
    previous_state: S,
    seed: i32,
    rng: Mutex<SubtractiveRng>,
}

impl<S: StateSnapshot> ExecutionContext<S> {
    pub fn new(
        signer: Address,
        miner: Address,
        epoch: ChainEpoch,
        previous_state: S,
        seed: i32,
    ) -> Self {
        ExecutionContext {
            signer,
            miner,
            epoch,
            previous_state,
            seed,
            rng: Mutex::new(SubtractiveRng::new(seed)),
        }
    }

    /// Address that signed the transaction carrying the action.
    pub fn signer(&self) -> &Address {
        &self.signer
    }

    /// Address of the proposer of the block being built or validated.
    pub fn miner(&self) -> &Address {
        &self.miner
    }

    pub fn epoch(&self) -> ChainEpoch {
        self.epoch
    }

    /// Snapshot the action starts from; mutators on it return new
    /// snapshots and never alter this one.
    pub fn previous_state(&self) -> &S {
        &self.previous_state
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// The context's generator, seeded once at construction. Repeated
    /// calls hand out the same stream, never a reseeded one.
    pub fn random(&self) -> MutexGuard<'_, SubtractiveRng> {
        self.rng.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryStateSnapshot;

    fn fixture_address() -> Address {
        "21744f4f08db23e044178dafb8273aeb5ebe6644".parse().unwrap()
    }

    fn context(seed: i32) -> ExecutionContext<MemoryStateSnapshot> {
        let addr = fixture_address();
        ExecutionContext::new(addr, addr, 1, MemoryStateSnapshot::default(), seed)
    }

    #[test]
    fn accessors_return_construction_inputs() {
        let ctx = context(42);
        assert_eq!(*ctx.signer(), fixture_address());
        assert_eq!(*ctx.miner(), fixture_address());
        assert_eq!(ctx.epoch(), 1);
        assert_eq!(ctx.seed(), 42);
        assert!(ctx.previous_state().updated_addresses().is_empty());
    }

    #[test]
    fn random_is_deterministic_per_seed() {
        let a = context(0);
        let b = context(0);
        let c = context(1);
        assert_eq!(a.random().next_i32(), 1_559_595_546);
        assert_eq!(b.random().next_i32(), 1_559_595_546);
        assert_eq!(c.random().next_i32(), 534_011_718);
    }

    #[test]
    fn random_does_not_reseed_between_accesses() {
        let ctx = context(9);
        let mut reference = SubtractiveRng::new(9);
        let first = reference.next_i32();
        let second = reference.next_i32();
        // Two separate accesses continue one stream.
        assert_eq!(ctx.random().next_i32(), first);
        assert_eq!(ctx.random().next_i32(), second);
    }

    #[test]
    fn identifier_sequences_follow_the_seed() {
        let a = context(0);
        let b = context(0);
        let c = context(1);
        for _ in 0..2 {
            let expected = a.random().next_uuid();
            assert_eq!(b.random().next_uuid(), expected);
            assert_ne!(c.random().next_uuid(), expected);
        }
    }

    #[test]
    fn state_mutation_is_delegated_not_absorbed() {
        use ipld_core::ipld::Ipld;

        let ctx = context(0);
        let next = ctx
            .previous_state()
            .with_state(fixture_address(), Ipld::Integer(1));
        // The context still holds the untouched snapshot.
        assert_eq!(ctx.previous_state().state(&fixture_address()), None);
        assert_eq!(
            next.state(&fixture_address()),
            Some(Ipld::Integer(1))
        );
    }
}
