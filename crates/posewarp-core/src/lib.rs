//! posewarp-core: procedural per-joint transform rules (engine-agnostic)
//!
//! A small per-frame controller for skeletal poses. Each named joint carries
//! a 3-character rule code selecting a transform kind, a waveform, and an
//! axis; every frame the active rules are evaluated against the clip's rest
//! pose and emitted as per-joint changes for the host to write back. Rule
//! state round-trips through a compact `index=code&…` text encoding suitable
//! for a URL fragment.
//!
//! The core is single-threaded by contract: mutations (GUI callbacks, hash
//! import) and the per-frame update all go through `&mut` receivers on the
//! same driver thread.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod hash;
pub mod math;
pub mod outputs;
pub mod rules;
pub mod transform;

// Re-exports for consumers (adapters)
pub use catalog::{Axis, NamedRule, RuleCode, RuleKind, Waveform};
pub use engine::Engine;
pub use error::PoseWarpError;
pub use evaluate::{evaluate_rule, waveform_param};
pub use outputs::{JointChange, Outputs};
pub use rules::RuleStore;
pub use transform::{JointTransform, RestPoseCache, RestPoseSource};
