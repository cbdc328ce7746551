use glam::{Mat4, Vec2, Vec3};

/// Builds the world transform for a unit mesh.
///
/// The unit mesh (local `0..1` on both axes) is scaled to `size`, rotated by
/// `rotation` radians about the point at normalized `pivot` within the scaled
/// shape, and translated so that pivot lands on `position.xy`. `position.z`
/// only carries depth.
///
/// `T(position) · R_z(rotation) · T(-pivot · size) · S(size)`
///
/// Inputs are not validated: NaN or out-of-range values flow into the matrix.
pub fn build_transform(position: Vec3, rotation: f32, size: Vec2, pivot: Vec2) -> Mat4 {
    let pivot_offset = (pivot * size).extend(0.0);

    Mat4::from_translation(position)
        * Mat4::from_rotation_z(rotation)
        * Mat4::from_translation(-pivot_offset)
        * Mat4::from_scale(size.extend(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    fn apply(m: Mat4, local: Vec2) -> Vec3 {
        m.transform_point3(local.extend(0.0))
    }

    // ── origin pivot ──────────────────────────────────────────────────────

    #[test]
    fn origin_pivot_places_corner_at_position() {
        for (x, y, z) in [(0.0, 0.0, 0.0), (3.5, -2.0, 1.0), (-100.0, 42.0, -7.0)] {
            for (w, h) in [(1.0, 1.0), (2.0, 5.0), (0.25, 10.0)] {
                let m = build_transform(Vec3::new(x, y, z), 0.0, Vec2::new(w, h), Vec2::ZERO);
                let p = apply(m, Vec2::ZERO);
                assert!(p.truncate().abs_diff_eq(Vec2::new(x, y), EPS), "{p:?}");
            }
        }
    }

    #[test]
    fn unrotated_opposite_corner_is_offset_by_size() {
        let m = build_transform(Vec3::new(1.0, 2.0, 0.0), 0.0, Vec2::new(3.0, 4.0), Vec2::ZERO);
        assert!(apply(m, Vec2::ONE).abs_diff_eq(Vec3::new(4.0, 6.0, 0.0), EPS));
    }

    #[test]
    fn z_is_carried_but_not_mixed_into_xy() {
        let m = build_transform(Vec3::new(1.0, 1.0, 9.0), 0.7, Vec2::new(2.0, 2.0), Vec2::splat(0.5));
        let p = apply(m, Vec2::splat(0.5));
        assert!((p.z - 9.0).abs() < EPS);
        assert!(p.truncate().abs_diff_eq(Vec2::new(1.0, 1.0), EPS));
    }

    // ── pivot ─────────────────────────────────────────────────────────────

    #[test]
    fn center_pivot_is_rotation_invariant() {
        let pos = Vec3::new(10.0, -4.0, 0.0);
        let size = Vec2::new(6.0, 2.0);
        for i in 0..16 {
            let angle = i as f32 * PI / 8.0;
            let m = build_transform(pos, angle, size, Vec2::splat(0.5));
            let c = apply(m, Vec2::splat(0.5));
            assert!(c.truncate().abs_diff_eq(pos.truncate(), 1e-4), "angle {angle}: {c:?}");
        }
    }

    #[test]
    fn arbitrary_pivot_lands_on_position() {
        let pos = Vec3::new(-3.0, 7.0, 0.0);
        let pivot = Vec2::new(0.25, 0.8);
        let m = build_transform(pos, 1.234, Vec2::new(5.0, 3.0), pivot);
        assert!(apply(m, pivot).truncate().abs_diff_eq(pos.truncate(), 1e-4));
    }

    #[test]
    fn quarter_turn_about_origin_corner() {
        // +X edge of the shape swings onto +Y.
        let m = build_transform(Vec3::ZERO, FRAC_PI_2, Vec2::new(2.0, 1.0), Vec2::ZERO);
        assert!(apply(m, Vec2::new(1.0, 0.0)).abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), EPS));
    }

    #[test]
    fn quarter_turn_about_center() {
        // 2x1 bar centered on the origin becomes a 1x2 bar.
        let m = build_transform(Vec3::ZERO, FRAC_PI_2, Vec2::new(2.0, 1.0), Vec2::splat(0.5));
        assert!(apply(m, Vec2::new(1.0, 0.5)).abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), EPS));
        assert!(apply(m, Vec2::new(0.0, 0.5)).abs_diff_eq(Vec3::new(0.0, -1.0, 0.0), EPS));
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn default_pivot_and_rotation_is_translate_scale() {
        let m = build_transform(Vec3::new(1.0, 1.0, 0.0), 0.0, Vec2::new(2.0, 2.0), Vec2::ZERO);
        let expected = Mat4::from_translation(Vec3::new(1.0, 1.0, 0.0))
            * Mat4::from_scale(Vec3::new(2.0, 2.0, 1.0));
        assert!(m.abs_diff_eq(expected, EPS));
    }

    #[test]
    fn deterministic() {
        let a = build_transform(Vec3::new(0.1, 0.2, 0.3), 0.4, Vec2::new(0.5, 0.6), Vec2::new(0.7, 0.8));
        let b = build_transform(Vec3::new(0.1, 0.2, 0.3), 0.4, Vec2::new(0.5, 0.6), Vec2::new(0.7, 0.8));
        assert_eq!(a, b);
    }

    #[test]
    fn nan_rotation_propagates() {
        let m = build_transform(Vec3::ZERO, f32::NAN, Vec2::ONE, Vec2::ZERO);
        assert!(m.is_nan());
    }
}
