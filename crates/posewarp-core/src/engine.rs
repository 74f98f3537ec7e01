//! Engine: rule state ownership and the per-frame update.
//!
//! The frame driver calls `update()` once per rendered frame with the
//! current world time; rule mutations (GUI callbacks, hash import) go
//! through `rules_mut()` between frames. Single-threaded by contract; the
//! `&mut` receivers keep reads and mutations from interleaving.

use crate::evaluate::evaluate_rule;
use crate::outputs::{JointChange, Outputs};
use crate::rules::RuleStore;
use crate::transform::{RestPoseCache, RestPoseSource};

#[derive(Debug)]
pub struct Engine {
    rules: RuleStore,
    rest: RestPoseCache,
    // Per-tick outputs
    outputs: Outputs,
}

impl Engine {
    /// Create an engine over the ordered joint list.
    pub fn new<I, S>(joint_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rules: RuleStore::new(joint_names),
            rest: RestPoseCache::new(),
            outputs: Outputs::default(),
        }
    }

    pub fn rules(&self) -> &RuleStore {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut RuleStore {
        &mut self.rules
    }

    /// Evaluate every registered joint at the given world time, producing one
    /// change per joint the source can resolve. Rest poses are fetched lazily
    /// and memoized; a joint whose rest pose is unavailable is skipped this
    /// frame and retried on the next.
    pub fn update(&mut self, time: f32, source: &mut dyn RestPoseSource) -> &Outputs {
        self.outputs.clear();
        for idx in 0..self.rules.joint_count() {
            let joint = if let Some(name) = self.rules.joint_at(idx) {
                name
            } else {
                continue;
            };
            let code = if let Some(code) = self.rules.code_at(idx) {
                code
            } else {
                continue;
            };
            let rest = if let Some(rest) = self.rest.get_or_fetch(joint, source) {
                rest
            } else {
                continue;
            };
            let transform = evaluate_rule(code, time, &rest);
            self.outputs.push_change(JointChange {
                joint: joint.to_string(),
                transform,
            });
        }
        &self.outputs
    }
}
