// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use tracing::debug;

mod callback;
mod logging;
mod publisher;

pub use callback::{
    ActionCallback, ActionErrorCallback, BlockCallback, CallbackRenderer, ReorgCallback,
};
pub use logging::LoggingRenderer;
pub use publisher::HeadChangePublisher;

use super::HeadChange;
use crate::blocks::BlockHeader;
use crate::interpreter::ExecutionContext;
use crate::state::StateSnapshot;

/// Observer of chain transitions, notified by the orchestrator that drives
/// block application and fork choice.
///
/// The six operations come in three symmetric action-level pairs plus two
/// chain-level notifications. Render and unrender denote opposite
/// directions of the same transition: an unrender is only ever delivered
/// for a transition that was rendered before, and each notification
/// delivers exactly one operation. Errors returned by an implementation
/// propagate to the orchestrator rather than being swallowed, so a
/// misbehaving observer is always visible.
pub trait Renderer<A, S: StateSnapshot>: Send + Sync {
    /// An action executed successfully and is being incorporated into the
    /// canonical chain.
    fn render_action(
        &self,
        action: &A,
        context: &ExecutionContext<S>,
        next_state: &S,
    ) -> anyhow::Result<()>;

    /// A previously incorporated action is being removed from the
    /// canonical chain; `next_state` is the snapshot the action produced
    /// when it was rendered.
    fn unrender_action(
        &self,
        action: &A,
        context: &ExecutionContext<S>,
        next_state: &S,
    ) -> anyhow::Result<()>;

    /// An action failed while being incorporated.
    fn render_action_error(
        &self,
        action: &A,
        context: &ExecutionContext<S>,
        error: &anyhow::Error,
    ) -> anyhow::Result<()>;

    /// An action failed while being removed.
    fn unrender_action_error(
        &self,
        action: &A,
        context: &ExecutionContext<S>,
        error: &anyhow::Error,
    ) -> anyhow::Result<()>;

    /// The canonical tip advanced along the same branch.
    fn render_block(&self, old_tip: &BlockHeader, new_tip: &BlockHeader) -> anyhow::Result<()>;

    /// The canonical branch itself changed. Fired exactly once per reorg,
    /// after the action-level notifications for the switched range.
    fn render_reorg(
        &self,
        old_tip: &BlockHeader,
        new_tip: &BlockHeader,
        branchpoint: &BlockHeader,
    ) -> anyhow::Result<()>;
}

/// Ordered registry of renderers. Itself a [`Renderer`]: every operation
/// fans out in registration order, and the first error aborts the fan-out,
/// so renderers registered later may miss a notification that an earlier
/// one rejected.
pub struct RendererSet<A, S> {
    renderers: Vec<Box<dyn Renderer<A, S>>>,
}

impl<A, S> Default for RendererSet<A, S> {
    fn default() -> Self {
        RendererSet {
            renderers: Vec::new(),
        }
    }
}

impl<A, S: StateSnapshot> RendererSet<A, S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `renderer`; notification order follows registration order.
    pub fn register(&mut self, renderer: impl Renderer<A, S> + 'static) {
        self.renderers.push(Box::new(renderer));
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Entry point for the orchestrator's tip transitions: fires exactly
    /// one of the two chain-level operations per transition, never both.
    /// For a reorg the orchestrator delivers the action-level unrender and
    /// render notifications for the switched range first and calls this
    /// once afterwards.
    pub fn render_head_change(&self, change: &HeadChange) -> anyhow::Result<()> {
        match change {
            HeadChange::Extend { old_tip, new_tip } => {
                debug!(height = new_tip.epoch(), "advancing canonical tip");
                self.render_block(old_tip, new_tip)
            }
            HeadChange::Reorg {
                old_tip,
                new_tip,
                branchpoint,
            } => {
                debug!(
                    from = %old_tip.id(),
                    to = %new_tip.id(),
                    branchpoint = %branchpoint.id(),
                    "switching canonical branch"
                );
                self.render_reorg(old_tip, new_tip, branchpoint)
            }
        }
    }
}

impl<A, S: StateSnapshot> Renderer<A, S> for RendererSet<A, S> {
    fn render_action(
        &self,
        action: &A,
        context: &ExecutionContext<S>,
        next_state: &S,
    ) -> anyhow::Result<()> {
        for renderer in &self.renderers {
            renderer.render_action(action, context, next_state)?;
        }
        Ok(())
    }

    fn unrender_action(
        &self,
        action: &A,
        context: &ExecutionContext<S>,
        next_state: &S,
    ) -> anyhow::Result<()> {
        for renderer in &self.renderers {
            renderer.unrender_action(action, context, next_state)?;
        }
        Ok(())
    }

    fn render_action_error(
        &self,
        action: &A,
        context: &ExecutionContext<S>,
        error: &anyhow::Error,
    ) -> anyhow::Result<()> {
        for renderer in &self.renderers {
            renderer.render_action_error(action, context, error)?;
        }
        Ok(())
    }

    fn unrender_action_error(
        &self,
        action: &A,
        context: &ExecutionContext<S>,
        error: &anyhow::Error,
    ) -> anyhow::Result<()> {
        for renderer in &self.renderers {
            renderer.unrender_action_error(action, context, error)?;
        }
        Ok(())
    }

    fn render_block(&self, old_tip: &BlockHeader, new_tip: &BlockHeader) -> anyhow::Result<()> {
        for renderer in &self.renderers {
            renderer.render_block(old_tip, new_tip)?;
        }
        Ok(())
    }

    fn render_reorg(
        &self,
        old_tip: &BlockHeader,
        new_tip: &BlockHeader,
        branchpoint: &BlockHeader,
    ) -> anyhow::Result<()> {
        for renderer in &self.renderers {
            renderer.render_reorg(old_tip, new_tip, branchpoint)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::anyhow;
    use parking_lot::Mutex;

    use super::*;
    use crate::address::Address;
    use crate::state::MemoryStateSnapshot;

    type Log = Arc<Mutex<Vec<&'static str>>>;

    fn tagging(tag: &'static str, log: &Log) -> CallbackRenderer<(), MemoryStateSnapshot> {
        let log = Arc::clone(log);
        CallbackRenderer {
            block_renderer: Some(Box::new(move |_, _| {
                log.lock().push(tag);
                Ok(())
            })),
            ..Default::default()
        }
    }

    fn failing() -> CallbackRenderer<(), MemoryStateSnapshot> {
        CallbackRenderer {
            block_renderer: Some(Box::new(|_, _| Err(anyhow!("observer rejected the block")))),
            ..Default::default()
        }
    }

    fn tip(epoch: i64) -> BlockHeader {
        BlockHeader::new(Address::new([1u8; 20]), None, epoch)
    }

    #[test]
    fn fan_out_follows_registration_order() {
        let log: Log = Log::default();
        let mut set = RendererSet::new();
        set.register(tagging("first", &log));
        set.register(tagging("second", &log));
        assert_eq!(set.len(), 2);

        set.render_block(&tip(0), &tip(1)).unwrap();
        assert_eq!(*log.lock(), vec!["first", "second"]);
    }

    #[test]
    fn first_error_aborts_the_fan_out() {
        let log: Log = Log::default();
        let mut set = RendererSet::new();
        set.register(tagging("first", &log));
        set.register(failing());
        set.register(tagging("late", &log));

        let err = set.render_block(&tip(0), &tip(1)).unwrap_err();
        assert_eq!(err.to_string(), "observer rejected the block");
        // The renderer registered after the failing one was never reached.
        assert_eq!(*log.lock(), vec!["first"]);
    }

    #[test]
    fn head_change_fires_exactly_one_operation() {
        let blocks: Arc<Mutex<Vec<&'static str>>> = Arc::default();
        let log = Arc::clone(&blocks);
        let renderer: CallbackRenderer<(), MemoryStateSnapshot> = CallbackRenderer {
            block_renderer: Some(Box::new({
                let log = Arc::clone(&log);
                move |_, _| {
                    log.lock().push("block");
                    Ok(())
                }
            })),
            reorg_renderer: Some(Box::new(move |_, _, _| {
                log.lock().push("reorg");
                Ok(())
            })),
            ..Default::default()
        };
        let mut set = RendererSet::new();
        set.register(renderer);

        let genesis = Arc::new(tip(0));
        let one = Arc::new(tip(1));
        let two = Arc::new(tip(2));

        set.render_head_change(&HeadChange::Extend {
            old_tip: genesis.clone(),
            new_tip: one.clone(),
        })
        .unwrap();
        assert_eq!(*blocks.lock(), vec!["block"]);

        set.render_head_change(&HeadChange::Reorg {
            old_tip: one,
            new_tip: two,
            branchpoint: genesis,
        })
        .unwrap();
        assert_eq!(*blocks.lock(), vec!["block", "reorg"]);
    }

    #[test]
    fn empty_set_accepts_everything() {
        let set: RendererSet<(), MemoryStateSnapshot> = RendererSet::new();
        assert!(set.is_empty());
        set.render_block(&tip(0), &tip(1)).unwrap();
        set.render_reorg(&tip(1), &tip(2), &tip(0)).unwrap();
    }
}
