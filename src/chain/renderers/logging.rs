// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use tracing::debug;

use super::Renderer;
use crate::blocks::BlockHeader;
use crate::interpreter::ExecutionContext;
use crate::state::StateSnapshot;

/// Decorates another renderer with a `tracing` event per notification,
/// then delegates unchanged. Handy while debugging an observer that
/// appears to miss notifications.
pub struct LoggingRenderer<R> {
    inner: R,
}

impl<R> LoggingRenderer<R> {
    pub fn new(inner: R) -> Self {
        LoggingRenderer { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<A, S, R> Renderer<A, S> for LoggingRenderer<R>
where
    S: StateSnapshot,
    R: Renderer<A, S>,
{
    fn render_action(
        &self,
        action: &A,
        context: &ExecutionContext<S>,
        next_state: &S,
    ) -> anyhow::Result<()> {
        debug!(
            signer = %context.signer(),
            epoch = context.epoch(),
            "rendering action"
        );
        self.inner.render_action(action, context, next_state)
    }

    fn unrender_action(
        &self,
        action: &A,
        context: &ExecutionContext<S>,
        next_state: &S,
    ) -> anyhow::Result<()> {
        debug!(
            signer = %context.signer(),
            epoch = context.epoch(),
            "unrendering action"
        );
        self.inner.unrender_action(action, context, next_state)
    }

    fn render_action_error(
        &self,
        action: &A,
        context: &ExecutionContext<S>,
        error: &anyhow::Error,
    ) -> anyhow::Result<()> {
        debug!(
            signer = %context.signer(),
            epoch = context.epoch(),
            %error,
            "rendering action error"
        );
        self.inner.render_action_error(action, context, error)
    }

    fn unrender_action_error(
        &self,
        action: &A,
        context: &ExecutionContext<S>,
        error: &anyhow::Error,
    ) -> anyhow::Result<()> {
        debug!(
            signer = %context.signer(),
            epoch = context.epoch(),
            %error,
            "unrendering action error"
        );
        self.inner.unrender_action_error(action, context, error)
    }

    fn render_block(&self, old_tip: &BlockHeader, new_tip: &BlockHeader) -> anyhow::Result<()> {
        debug!(
            from = old_tip.epoch(),
            to = new_tip.epoch(),
            "rendering block"
        );
        self.inner.render_block(old_tip, new_tip)
    }

    fn render_reorg(
        &self,
        old_tip: &BlockHeader,
        new_tip: &BlockHeader,
        branchpoint: &BlockHeader,
    ) -> anyhow::Result<()> {
        debug!(
            from = old_tip.epoch(),
            to = new_tip.epoch(),
            branchpoint = branchpoint.epoch(),
            "rendering reorg"
        );
        self.inner.render_reorg(old_tip, new_tip, branchpoint)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::super::CallbackRenderer;
    use super::*;
    use crate::address::Address;
    use crate::state::MemoryStateSnapshot;

    #[test]
    fn delegates_every_operation() {
        let hits = Arc::new(AtomicUsize::new(0));
        let inner: CallbackRenderer<(), MemoryStateSnapshot> = CallbackRenderer {
            block_renderer: Some(Box::new({
                let hits = Arc::clone(&hits);
                move |_, _| {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            })),
            ..Default::default()
        };
        let renderer = LoggingRenderer::new(inner);
        let observer: &dyn Renderer<(), MemoryStateSnapshot> = &renderer;

        let old_tip = BlockHeader::new(Address::new([1u8; 20]), None, 0);
        let new_tip = BlockHeader::new(Address::new([1u8; 20]), Some(*old_tip.id()), 1);
        observer.render_block(&old_tip, &new_tip).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(renderer.into_inner().block_renderer.is_some());
    }
}
