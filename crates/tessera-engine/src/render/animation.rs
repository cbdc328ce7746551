//! Reference implementation of the sprite-sheet timing contract.
//!
//! The translator only forwards the animation parameters; the animated-textured
//! program picks the frame. These functions compute the same thing on the CPU so
//! program authors and tests share one definition:
//!
//! - `frame = floor((t mod (frame_duration * frame_count)) / frame_duration)`
//! - frame `i` samples cell `i` of the strip `[uv_bottom_left, uv_top_right]`
//!   split into `frame_count` equal horizontal cells
//!
//! Animations loop forever. Zero `frame_count` or `frame_duration` gives an
//! unspecified frame.

use glam::Vec2;

use crate::scene::AnimatedSprite;

/// Active frame index at `elapsed` seconds.
///
/// Negative times wrap the same way as positive ones.
pub fn frame_index(elapsed: f32, frame_duration: f32, frame_count: u32) -> u32 {
    let cycle = frame_duration * frame_count as f32;
    let t = elapsed.rem_euclid(cycle);
    // Rounding at the end of the cycle can land exactly on `frame_count`.
    ((t / frame_duration).floor() as u32).min(frame_count.saturating_sub(1))
}

/// UV rectangle `(bottom_left, top_right)` of frame `index`.
pub fn frame_uv_rect(uv_bottom_left: Vec2, uv_top_right: Vec2, frame_count: u32, index: u32) -> (Vec2, Vec2) {
    let cell_width = (uv_top_right.x - uv_bottom_left.x) / frame_count as f32;
    let left = uv_bottom_left.x + cell_width * index as f32;
    (
        Vec2::new(left, uv_bottom_left.y),
        Vec2::new(left + cell_width, uv_top_right.y),
    )
}

/// UV rectangle `sprite` shows at `elapsed` seconds.
pub fn current_frame_uv(sprite: &AnimatedSprite, elapsed: f32) -> (Vec2, Vec2) {
    let index = frame_index(elapsed, sprite.frame_duration(), sprite.frame_count());
    frame_uv_rect(sprite.uv_bottom_left(), sprite.uv_top_right(), sprite.frame_count(), index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Renderable, TextureHandle};

    // ── frame_index ───────────────────────────────────────────────────────

    #[test]
    fn steps_through_frames() {
        assert_eq!(frame_index(0.0, 0.25, 4), 0);
        assert_eq!(frame_index(0.24, 0.25, 4), 0);
        assert_eq!(frame_index(0.26, 0.25, 4), 1);
        assert_eq!(frame_index(0.6, 0.25, 4), 2);
        assert_eq!(frame_index(0.9, 0.25, 4), 3);
    }

    #[test]
    fn wraps_without_terminal_state() {
        assert_eq!(frame_index(1.1, 0.25, 4), 0);
        assert_eq!(frame_index(1.6, 0.25, 4), 2);
        assert_eq!(frame_index(1000.1, 0.25, 4), 0);
    }

    #[test]
    fn negative_time_wraps_continuously() {
        assert_eq!(frame_index(-0.1, 0.25, 4), 3);
    }

    #[test]
    fn single_frame_is_always_zero() {
        for t in [0.0, 0.5, 3.7, 99.0] {
            assert_eq!(frame_index(t, 0.5, 1), 0);
        }
    }

    // ── frame_uv_rect ─────────────────────────────────────────────────────

    #[test]
    fn splits_strip_horizontally() {
        let (bl, tr) = frame_uv_rect(Vec2::new(0.0, 0.5), Vec2::new(1.0, 1.0), 4, 2);
        assert_eq!(bl, Vec2::new(0.5, 0.5));
        assert_eq!(tr, Vec2::new(0.75, 1.0));
    }

    #[test]
    fn offset_strip() {
        let (bl, tr) = frame_uv_rect(Vec2::new(0.2, 0.0), Vec2::new(0.6, 0.25), 2, 1);
        assert!(bl.abs_diff_eq(Vec2::new(0.4, 0.0), 1e-6));
        assert!(tr.abs_diff_eq(Vec2::new(0.6, 0.25), 1e-6));
    }

    #[test]
    fn current_frame_for_sprite() {
        let r = Renderable::animated_sprite(Some(TextureHandle::new(1)), Vec2::ZERO, Vec2::ONE, 2, 0.5);
        let Renderable::AnimatedSprite(sprite) = &r else { panic!("expected AnimatedSprite") };
        assert_eq!(current_frame_uv(sprite, 0.1), (Vec2::ZERO, Vec2::new(0.5, 1.0)));
        assert_eq!(current_frame_uv(sprite, 0.6), (Vec2::new(0.5, 0.0), Vec2::ONE));
    }
}
