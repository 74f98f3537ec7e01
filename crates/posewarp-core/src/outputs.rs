//! Output contract from the per-frame update.
//!
//! Outputs carry the evaluated transforms for this frame, keyed by joint
//! name. Adapters write them back into the host's pose representation.

use serde::{Deserialize, Serialize};

use crate::transform::JointTransform;

/// One evaluated joint transform for this frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointChange {
    pub joint: String,
    pub transform: JointTransform,
}

/// Outputs returned by `Engine::update()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<JointChange>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: JointChange) {
        self.changes.push(change);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
