// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::debug;

use super::Renderer;
use crate::blocks::BlockHeader;
use crate::chain::HeadChange;
use crate::interpreter::ExecutionContext;
use crate::state::StateSnapshot;

// A cap on the size of the per-subscriber buffer
const SINK_CAP: usize = 200;

/// Forwards the two chain-level operations into a `broadcast` channel as
/// [`HeadChange`] values; the four action-level operations are no-ops.
/// Lets any number of tasks follow canonical-tip movement without
/// implementing the renderer contract themselves.
pub struct HeadChangePublisher {
    publisher: broadcast::Sender<HeadChange>,
}

impl HeadChangePublisher {
    pub fn new(capacity: usize) -> Self {
        let (publisher, _) = broadcast::channel(capacity);
        HeadChangePublisher { publisher }
    }

    /// New receiver of every head change published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<HeadChange> {
        self.publisher.subscribe()
    }

    fn publish(&self, change: HeadChange) {
        if self.publisher.send(change).is_err() {
            debug!("did not publish head change, no active receivers");
        }
    }
}

impl Default for HeadChangePublisher {
    fn default() -> Self {
        Self::new(SINK_CAP)
    }
}

impl<A, S: StateSnapshot> Renderer<A, S> for HeadChangePublisher {
    fn render_action(
        &self,
        _action: &A,
        _context: &ExecutionContext<S>,
        _next_state: &S,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    fn unrender_action(
        &self,
        _action: &A,
        _context: &ExecutionContext<S>,
        _next_state: &S,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    fn render_action_error(
        &self,
        _action: &A,
        _context: &ExecutionContext<S>,
        _error: &anyhow::Error,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    fn unrender_action_error(
        &self,
        _action: &A,
        _context: &ExecutionContext<S>,
        _error: &anyhow::Error,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    fn render_block(&self, old_tip: &BlockHeader, new_tip: &BlockHeader) -> anyhow::Result<()> {
        self.publish(HeadChange::Extend {
            old_tip: Arc::new(old_tip.clone()),
            new_tip: Arc::new(new_tip.clone()),
        });
        Ok(())
    }

    fn render_reorg(
        &self,
        old_tip: &BlockHeader,
        new_tip: &BlockHeader,
        branchpoint: &BlockHeader,
    ) -> anyhow::Result<()> {
        self.publish(HeadChange::Reorg {
            old_tip: Arc::new(old_tip.clone()),
            new_tip: Arc::new(new_tip.clone()),
            branchpoint: Arc::new(branchpoint.clone()),
        });
        Ok(())
    }
}
