//! Error types for the rule store and code parsing.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PoseWarpError {
    /// Joint name is not in the registered set
    #[error("Joint not found: {name}")]
    JointNotFound { name: String },

    /// Rule code is not exactly 3 characters
    #[error("Invalid rule code: {code:?}")]
    InvalidRuleCode { code: String },
}
