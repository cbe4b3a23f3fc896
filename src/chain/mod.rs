// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::sync::Arc;

pub mod renderers;

pub use renderers::{CallbackRenderer, Renderer, RendererSet};

use crate::blocks::BlockHeader;

/// A canonical-tip transition as decided by fork choice.
///
/// Exactly one variant describes any tip change: `Extend` when the new tip
/// grows the current branch, `Reorg` when the canonical branch itself
/// switches. The orchestrator turns each transition into exactly one
/// chain-level renderer notification (see
/// [`RendererSet::render_head_change`]); for a reorg, the action-level
/// unrender/render notifications of the switched range come first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadChange {
    Extend {
        old_tip: Arc<BlockHeader>,
        new_tip: Arc<BlockHeader>,
    },
    Reorg {
        old_tip: Arc<BlockHeader>,
        new_tip: Arc<BlockHeader>,
        /// Last block common to the old and new branches.
        branchpoint: Arc<BlockHeader>,
    },
}
