//! Quaternion helpers on `[f32; 4]` (x, y, z, w).

use crate::catalog::Axis;

pub const QUAT_IDENTITY: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Normalize a quaternion; zero-magnitude input falls back to identity.
pub fn quat_normalize(q: [f32; 4]) -> [f32; 4] {
    let mag = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt();
    if mag == 0.0 {
        QUAT_IDENTITY
    } else {
        [q[0] / mag, q[1] / mag, q[2] / mag, q[3] / mag]
    }
}

/// Hamilton product a * b: the rotation that applies b first, then a.
pub fn quat_mul(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
    let [ax, ay, az, aw] = a;
    let [bx, by, bz, bw] = b;
    [
        aw * bx + ax * bw + ay * bz - az * by,
        aw * by - ax * bz + ay * bw + az * bx,
        aw * bz + ax * by - ay * bx + az * bw,
        aw * bw - ax * bx - ay * by - az * bz,
    ]
}

/// Rotation of `angle` radians about one basis axis; `Axis::None` is identity.
pub fn quat_about_axis(axis: Axis, angle: f32) -> [f32; 4] {
    let half = angle * 0.5;
    let s = half.sin();
    let c = half.cos();
    match axis {
        Axis::X => [s, 0.0, 0.0, c],
        Axis::Y => [0.0, s, 0.0, c],
        Axis::Z => [0.0, 0.0, s, c],
        Axis::None => QUAT_IDENTITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn approx4(a: [f32; 4], b: [f32; 4], eps: f32) {
        for i in 0..4 {
            assert!((a[i] - b[i]).abs() <= eps, "left={a:?} right={b:?} eps={eps}");
        }
    }

    #[test]
    fn mul_identity_is_noop() {
        let q = quat_normalize([0.1, -0.2, 0.3, 0.9]);
        approx4(quat_mul(QUAT_IDENTITY, q), q, 1e-6);
        approx4(quat_mul(q, QUAT_IDENTITY), q, 1e-6);
    }

    #[test]
    fn about_axis_matches_known_angles() {
        approx4(quat_about_axis(Axis::X, PI), [1.0, 0.0, 0.0, 0.0], 1e-6);
        approx4(quat_about_axis(Axis::None, PI), QUAT_IDENTITY, 1e-6);
    }

    #[test]
    fn half_turns_compose() {
        let q = quat_about_axis(Axis::Y, FRAC_PI_2);
        approx4(quat_mul(q, q), quat_about_axis(Axis::Y, PI), 1e-6);
    }
}
