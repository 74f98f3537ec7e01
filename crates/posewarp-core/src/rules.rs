//! RuleStore: the joint-name → rule-code mapping.
//!
//! Joints are registered once, in skeleton order, and never removed; every
//! mutating operation re-derives the cached text encoding so the exported
//! view is never stale after interactive edits.

use hashbrown::HashMap;
use rand::Rng;

use crate::catalog::{NamedRule, RuleCode};
use crate::error::PoseWarpError;
use crate::hash;

#[derive(Clone, Debug)]
pub struct RuleStore {
    /// Registered joint names in skeleton order.
    joints: Vec<String>,
    /// Current code per joint, parallel to `joints`.
    codes: Vec<RuleCode>,
    /// Name → position lookup.
    index: HashMap<String, usize>,
    /// Cached text encoding, re-derived on every mutation.
    encoded: String,
}

impl RuleStore {
    /// Register the ordered joint list. Duplicate names keep the first
    /// occurrence; every joint starts at the none code.
    pub fn new<I, S>(joint_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut joints: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for name in joint_names {
            let name = name.into();
            if index.contains_key(&name) {
                continue;
            }
            index.insert(name.clone(), joints.len());
            joints.push(name);
        }
        let codes = vec![RuleCode::NONE; joints.len()];
        let mut store = Self {
            joints,
            codes,
            index,
            encoded: String::new(),
        };
        store.rederive();
        store
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// Joint name at a position in registration order.
    pub fn joint_at(&self, idx: usize) -> Option<&str> {
        self.joints.get(idx).map(|s| s.as_str())
    }

    pub fn code_at(&self, idx: usize) -> Option<RuleCode> {
        self.codes.get(idx).copied()
    }

    pub fn code_of(&self, joint: &str) -> Option<RuleCode> {
        self.index.get(joint).map(|idx| self.codes[*idx])
    }

    /// (joint, code) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, RuleCode)> {
        self.joints
            .iter()
            .zip(self.codes.iter())
            .map(|(name, code)| (name.as_str(), *code))
    }

    /// Set every joint back to the none code.
    pub fn reset(&mut self) {
        for code in &mut self.codes {
            *code = RuleCode::NONE;
        }
        self.rederive();
    }

    /// Set one joint's code. Catalog membership is not enforced; the
    /// evaluator degrades gracefully on codes outside it. Unregistered
    /// names are rejected so the joint list stays authoritative.
    pub fn assign(&mut self, joint: &str, code: RuleCode) -> Result<(), PoseWarpError> {
        let idx = self
            .index
            .get(joint)
            .copied()
            .ok_or_else(|| PoseWarpError::JointNotFound {
                name: joint.to_string(),
            })?;
        self.codes[idx] = code;
        self.rederive();
        Ok(())
    }

    /// Assign one uniformly-picked catalog rule (never the none entry) to one
    /// uniformly-picked registered joint. No-op on an empty store.
    pub fn add_randomized<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.joints.is_empty() {
            return;
        }
        let joint_idx = rng.random_range(0..self.joints.len());
        // ALL[0] is the none entry; a randomized pick always perturbs
        let rule = NamedRule::ALL[rng.random_range(1..NamedRule::ALL.len())];
        log::debug!(
            "randomized rule {} for joint {:?}",
            rule.code(),
            self.joints[joint_idx]
        );
        self.codes[joint_idx] = rule.code();
        self.rederive();
    }

    /// Reset, then add three randomized rules. Duplicate joint picks
    /// collapse, so between 1 and 3 joints end up perturbed.
    pub fn randomize_three<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset();
        for _ in 0..3 {
            self.add_randomized(rng);
        }
    }

    /// Current text encoding: one `index=code` pair per non-none joint,
    /// empty when nothing is perturbed.
    pub fn export_hash(&self) -> &str {
        &self.encoded
    }

    /// Best-effort import: well-formed in-range entries overwrite, everything
    /// else is skipped. Never errors. The encoding is re-derived afterwards,
    /// which also normalizes away whatever was skipped.
    pub fn load_from_hash(&mut self, text: &str) {
        for (idx, code) in hash::decode(text) {
            if idx >= self.joints.len() {
                log::debug!("skipping hash entry with out-of-range joint index {idx}");
                continue;
            }
            self.codes[idx] = code;
        }
        self.rederive();
    }

    fn rederive(&mut self) {
        self.encoded = hash::encode(
            self.codes
                .iter()
                .enumerate()
                .filter(|(_, code)| **code != RuleCode::NONE)
                .map(|(idx, code)| (idx, *code)),
        );
    }
}
