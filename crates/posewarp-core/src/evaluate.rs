//! Per-frame rule evaluation.
//!
//! `evaluate_rule` is a pure function of (code, world time, rest pose) and is
//! total over all 3-character codes: unrecognized kind/waveform/axis
//! characters degrade to identity behavior rather than erroring, since the
//! evaluator runs every frame against whatever the store holds. Output is
//! recomputed from the rest pose on every call; nothing accumulates frame
//! over frame.

use std::f32::consts::PI;

use crate::catalog::{Axis, RuleCode, RuleKind, Waveform};
use crate::math::{quat_about_axis, quat_mul, quat_normalize};
use crate::transform::JointTransform;

/// Normalized animation parameter for a waveform at the given world time.
/// Sinusoidal stays in [0, 1]; linear is an unbounded ramp `0.5 * time`.
pub fn waveform_param(waveform: Waveform, time: f32) -> f32 {
    match waveform {
        Waveform::Linear => time * 0.5,
        Waveform::Sinusoidal => time.sin() * 0.5 + 0.5,
        Waveform::None => 0.0,
    }
}

/// Per-axis triple with `selected` on the chosen axis and `rest` elsewhere.
fn per_axis(axis: Axis, selected: f32, rest: f32) -> [f32; 3] {
    [
        if matches!(axis, Axis::X) { selected } else { rest },
        if matches!(axis, Axis::Y) { selected } else { rest },
        if matches!(axis, Axis::Z) { selected } else { rest },
    ]
}

/// Evaluate one rule against a joint's rest pose at the given world time.
pub fn evaluate_rule(code: RuleCode, time: f32, rest: &JointTransform) -> JointTransform {
    let u = waveform_param(code.waveform(), time);
    let axis = code.axis();
    let mut out = *rest;
    match code.kind() {
        RuleKind::None => {}
        RuleKind::Rotation => {
            // v in [-pi/2, pi/2] while u stays in [0, 1]
            let v = (u - 0.5) * PI;
            let delta = quat_about_axis(axis, v);
            // delta applied in the joint's rest frame: delta-then-rest order
            out.rotation = quat_normalize(quat_mul(delta, rest.rotation));
        }
        RuleKind::Scale => {
            // factor in [1, 2] on the selected axis, 1 elsewhere
            let v = u + 1.0;
            let factor = per_axis(axis, v, 1.0);
            out.scale = [
                rest.scale[0] * factor[0],
                rest.scale[1] * factor[1],
                rest.scale[2] * factor[2],
            ];
        }
        RuleKind::Translation => {
            // offset in [0, 0.5] on the selected axis, 0 elsewhere
            let v = u * 0.5;
            let offset = per_axis(axis, v, 0.0);
            out.translation = [
                rest.translation[0] + offset[0],
                rest.translation[1] + offset[1],
                rest.translation[2] + offset[2],
            ];
        }
    }
    out
}
