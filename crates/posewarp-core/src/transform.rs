//! Joint transforms, the host-facing rest-pose resolver, and the rest-pose
//! side-table.
//!
//! Rest poses are owned by the host's animation clip; the core fetches them
//! lazily through `RestPoseSource` and memoizes them in `RestPoseCache` so
//! the (potentially costly) host lookup happens once per joint. The cache is
//! first-write-wins: once a pose is stored it is never refetched, which keeps
//! the per-frame recomputation drift-free.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::math::QUAT_IDENTITY;

/// Local rotation/scale/translation of one joint. Used both for rest poses
/// (as authored in the clip) and for per-frame evaluated output.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointTransform {
    /// Unit quaternion (x, y, z, w)
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
    pub translation: [f32; 3],
}

impl JointTransform {
    pub const IDENTITY: JointTransform = JointTransform {
        rotation: QUAT_IDENTITY,
        scale: [1.0, 1.0, 1.0],
        translation: [0.0, 0.0, 0.0],
    };
}

impl Default for JointTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Trait for resolving a joint name to its rest-pose transform.
/// Hosts implement this over their clip/channel data and pass it into
/// `Engine::update()`. Returning `None` skips the joint for this frame;
/// it is retried on the next update.
pub trait RestPoseSource {
    fn rest_pose(&mut self, joint: &str) -> Option<JointTransform>;
}

/// Memoized rest poses keyed by joint name.
#[derive(Debug, Default)]
pub struct RestPoseCache {
    poses: HashMap<String, JointTransform>,
}

impl RestPoseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached pose if present, otherwise fetch from the source and store it.
    /// Idempotent: the first stored pose wins for all later calls.
    pub fn get_or_fetch(
        &mut self,
        joint: &str,
        source: &mut dyn RestPoseSource,
    ) -> Option<JointTransform> {
        if let Some(pose) = self.poses.get(joint) {
            return Some(*pose);
        }
        let pose = source.rest_pose(joint)?;
        Some(*self.poses.entry(joint.to_string()).or_insert(pose))
    }

    pub fn contains(&self, joint: &str) -> bool {
        self.poses.contains_key(joint)
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}
