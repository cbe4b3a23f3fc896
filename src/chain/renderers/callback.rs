// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::Renderer;
use crate::blocks::BlockHeader;
use crate::interpreter::ExecutionContext;
use crate::state::StateSnapshot;

/// Callback signature of the action render/unrender pair.
pub type ActionCallback<A, S> =
    Box<dyn Fn(&A, &ExecutionContext<S>, &S) -> anyhow::Result<()> + Send + Sync>;
/// Callback signature of the action-error render/unrender pair.
pub type ActionErrorCallback<A, S> =
    Box<dyn Fn(&A, &ExecutionContext<S>, &anyhow::Error) -> anyhow::Result<()> + Send + Sync>;
/// Callback signature of the tip-advance notification.
pub type BlockCallback =
    Box<dyn Fn(&BlockHeader, &BlockHeader) -> anyhow::Result<()> + Send + Sync>;
/// Callback signature of the reorg notification.
pub type ReorgCallback =
    Box<dyn Fn(&BlockHeader, &BlockHeader, &BlockHeader) -> anyhow::Result<()> + Send + Sync>;

/// A renderer that invokes its callbacks.
///
/// Useful for a one-use, ad-hoc observer: set only the slots you care
/// about and leave the rest `None`. A set slot receives exactly the
/// arguments the contract method received, untransformed; an unset slot
/// makes the operation a no-op that neither fails nor logs. The adapter
/// holds no other state and never buffers or retries, so a callback's
/// failure propagates synchronously to the orchestrator.
///
/// ```
/// use arbor::{CallbackRenderer, MemoryStateSnapshot};
///
/// let renderer: CallbackRenderer<(), MemoryStateSnapshot> = CallbackRenderer {
///     block_renderer: Some(Box::new(|old_tip, new_tip| {
///         println!("{} -> {}", old_tip.epoch(), new_tip.epoch());
///         Ok(())
///     })),
///     ..Default::default()
/// };
/// # let _ = renderer;
/// ```
pub struct CallbackRenderer<A, S> {
    pub action_renderer: Option<ActionCallback<A, S>>,
    pub action_unrenderer: Option<ActionCallback<A, S>>,
    pub action_error_renderer: Option<ActionErrorCallback<A, S>>,
    pub action_error_unrenderer: Option<ActionErrorCallback<A, S>>,
    pub block_renderer: Option<BlockCallback>,
    pub reorg_renderer: Option<ReorgCallback>,
}

impl<A, S> Default for CallbackRenderer<A, S> {
    fn default() -> Self {
        CallbackRenderer {
            action_renderer: None,
            action_unrenderer: None,
            action_error_renderer: None,
            action_error_unrenderer: None,
            block_renderer: None,
            reorg_renderer: None,
        }
    }
}

impl<A, S: StateSnapshot> Renderer<A, S> for CallbackRenderer<A, S> {
    fn render_action(
        &self,
        action: &A,
        context: &ExecutionContext<S>,
        next_state: &S,
    ) -> anyhow::Result<()> {
        match &self.action_renderer {
            Some(callback) => callback(action, context, next_state),
            None => Ok(()),
        }
    }

    fn unrender_action(
        &self,
        action: &A,
        context: &ExecutionContext<S>,
        next_state: &S,
    ) -> anyhow::Result<()> {
        match &self.action_unrenderer {
            Some(callback) => callback(action, context, next_state),
            None => Ok(()),
        }
    }

    fn render_action_error(
        &self,
        action: &A,
        context: &ExecutionContext<S>,
        error: &anyhow::Error,
    ) -> anyhow::Result<()> {
        match &self.action_error_renderer {
            Some(callback) => callback(action, context, error),
            None => Ok(()),
        }
    }

    fn unrender_action_error(
        &self,
        action: &A,
        context: &ExecutionContext<S>,
        error: &anyhow::Error,
    ) -> anyhow::Result<()> {
        match &self.action_error_unrenderer {
            Some(callback) => callback(action, context, error),
            None => Ok(()),
        }
    }

    fn render_block(&self, old_tip: &BlockHeader, new_tip: &BlockHeader) -> anyhow::Result<()> {
        match &self.block_renderer {
            Some(callback) => callback(old_tip, new_tip),
            None => Ok(()),
        }
    }

    fn render_reorg(
        &self,
        old_tip: &BlockHeader,
        new_tip: &BlockHeader,
        branchpoint: &BlockHeader,
    ) -> anyhow::Result<()> {
        match &self.reorg_renderer {
            Some(callback) => callback(old_tip, new_tip, branchpoint),
            None => Ok(()),
        }
    }
}
