/// Planar vector used for positions, velocities and forces.
pub type Vec2d = bevy_math::DVec2;

pub const KNOTS_TO_MPS: f64 = 0.5144;
/// Speed-over-ground readout factor (m/s → kn).
pub const MPS_TO_KNOTS: f64 = 1.94384;

#[inline]
pub fn deg_to_rad(d: f64) -> f64 { d.to_radians() }

#[inline]
pub fn rad_to_deg(r: f64) -> f64 { r.to_degrees() }

/// Rotate a body-frame vector (x forward, y starboard) into the world frame.
#[inline]
pub fn body_to_world(body: Vec2d, heading: f64) -> Vec2d {
    Vec2d::from_angle(heading).rotate(body)
}

/// Rotate a world-frame vector into the body frame of a hull at `heading`.
#[inline]
pub fn world_to_body(world: Vec2d, heading: f64) -> Vec2d {
    Vec2d::from_angle(-heading).rotate(world)
}

/// Unit vector for a direction angle given in degrees.
#[inline]
pub fn unit_from_deg(dir_deg: f64) -> Vec2d {
    Vec2d::from_angle(deg_to_rad(dir_deg))
}

/// Signed shortest difference `a - b` in degrees, wrapped to (-180, 180].
pub fn wrap_deg_180(a_minus_b: f64) -> f64 {
    let mut d = a_minus_b.rem_euclid(360.0);
    if d > 180.0 {
        d -= 360.0;
    }
    d
}

/// Heading in degrees normalised to [0, 360).
pub fn normalize_deg_360(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if d >= 360.0 { 0.0 } else { d }
}

/// `x * |x|`: quadratic magnitude with the sign of `x`.
#[inline]
pub fn signed_square(x: f64) -> f64 { x * x.abs() }

/// Sign of `x`, or `fallback` when `x` is (near) zero.
#[inline]
pub fn sign_or(x: f64, fallback: f64) -> f64 {
    if x.abs() < 1e-9 { fallback } else { x.signum() }
}

/// Round half-up to one decimal place. A small tolerance absorbs binary
/// representation error so that e.g. 84.45 lands on 84.5.
pub fn round_tenth(x: f64) -> f64 {
    (x * 10.0 + 0.5 + 1e-6).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_crosses_north() {
        assert!((wrap_deg_180(359.0 - 0.0) - -1.0).abs() < 1e-12);
        assert!((wrap_deg_180(0.0 - 359.0) - 1.0).abs() < 1e-12);
        assert!((wrap_deg_180(180.0) - 180.0).abs() < 1e-12);
        assert!((wrap_deg_180(-180.0) - 180.0).abs() < 1e-12);
        assert!((wrap_deg_180(-1000.0) - 80.0).abs() < 1e-9);
    }

    #[test]
    fn body_world_rotation_is_inverse() {
        let v = Vec2d::new(3.0, -1.5);
        let h = 0.7;
        let back = world_to_body(body_to_world(v, h), h);
        assert!((back - v).length() < 1e-12);
        // +90° heading maps body forward onto world +y
        let fwd = body_to_world(Vec2d::X, std::f64::consts::FRAC_PI_2);
        assert!((fwd - Vec2d::Y).length() < 1e-12);
    }

    #[test]
    fn round_tenth_is_half_up() {
        assert_eq!(round_tenth(89.0 * 0.45 + 80.0 * 0.35 + 82.0 * 0.2), 84.5);
        assert_eq!(round_tenth(84.44), 84.4);
        assert_eq!(round_tenth(100.0), 100.0);
        assert_eq!(round_tenth(0.0), 0.0);
    }
}
