//! Continuous scroll driven by held directional keys.
//!
//! A transcription of a requestAnimationFrame loop into host-driven frames:
//! when `key_down` reports the scroller left idle, the host starts calling
//! [`SmoothScroller::frame`] once per display refresh and stops as soon as a
//! frame returns [`FrameOutcome::Stop`]. Velocity eases in linearly over
//! 250ms, holds at 40 device-independent px/frame (divided by the display
//! scale factor), and diagonal input is normalized so combined speed never
//! exceeds a single axis.

use crate::spatial::Direction;
use std::time::Duration;

/// Maximum scroll velocity, device-independent pixels per frame.
const MAX_VELOCITY: f64 = 40.0;
/// Linear ease-in window from zero to max velocity.
const EASE_DURATION: Duration = Duration::from_millis(250);
/// Frames closer together than this are duplicates and are discarded.
const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(10);

/// Scroll step for one frame, in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollDelta {
    pub x: i32,
    pub y: i32,
}

/// What the host should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Apply the delta and schedule the next frame.
    Scroll(ScrollDelta),
    /// Duplicate frame; schedule the next one without scrolling.
    Skip,
    /// Idle again — cancel the pending frame.
    Stop,
}

#[derive(Debug, Clone, Copy, Default)]
struct Held {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl Held {
    fn any(self) -> bool {
        self.up || self.down || self.left || self.right
    }

    fn set(&mut self, direction: Direction, value: bool) {
        match direction {
            Direction::Up => self.up = value,
            Direction::Down => self.down = value,
            Direction::Left => self.left = value,
            Direction::Right => self.right = value,
        }
    }
}

/// Held-key scroll state machine: idle until a directional key goes down,
/// scrolling until every key is released or the document loses focus.
#[derive(Debug)]
pub struct SmoothScroller {
    held: Held,
    start: Option<Duration>,
    prev_frame: Duration,
    scale_factor: f64,
}

impl SmoothScroller {
    pub fn new(scale_factor: f64) -> Self {
        let scale_factor = if scale_factor > 0.0 {
            scale_factor
        } else {
            log::warn!("ignoring non-positive scale factor {scale_factor}");
            1.0
        };
        Self {
            held: Held::default(),
            start: None,
            prev_frame: Duration::ZERO,
            scale_factor,
        }
    }

    /// Display scale factor changed (window moved between monitors).
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.held.any()
    }

    /// Directional key pressed. Returns true when this leaves idle and the
    /// host must start the frame loop.
    pub fn key_down(&mut self, direction: Direction) -> bool {
        let was_idle = self.is_idle();
        self.held.set(direction, true);
        was_idle
    }

    /// Directional key released. The loop notices on its next frame.
    pub fn key_up(&mut self, direction: Direction) {
        self.held.set(direction, false);
    }

    /// Drop all held state and return to idle. The elapsed-time ramp resets
    /// fully; the next scroll session eases in from zero.
    pub fn reset(&mut self) {
        self.held = Held::default();
        self.start = None;
    }

    /// Advance one animation frame at `timestamp` (the host's frame clock).
    pub fn frame(&mut self, timestamp: Duration, has_focus: bool) -> FrameOutcome {
        let interval = timestamp.saturating_sub(self.prev_frame);
        self.prev_frame = timestamp;
        if interval < MIN_FRAME_INTERVAL {
            return FrameOutcome::Skip;
        }

        if !self.held.any() || !has_focus {
            self.reset();
            return FrameOutcome::Stop;
        }

        let start = *self.start.get_or_insert(timestamp);
        let elapsed = timestamp.saturating_sub(start);

        let max_velocity = MAX_VELOCITY / self.scale_factor;
        let velocity = if elapsed > EASE_DURATION {
            max_velocity
        } else {
            max_velocity * elapsed.as_secs_f64() / EASE_DURATION.as_secs_f64()
        };

        let mut x = 0.0_f64;
        let mut y = 0.0_f64;
        if self.held.up {
            y += 1.0;
        }
        if self.held.down {
            y -= 1.0;
        }
        if self.held.left {
            x -= 1.0;
        }
        if self.held.right {
            x += 1.0;
        }

        // normalize diagonals to a unit vector; flip y back into scroll
        // coordinates (positive scrolls down)
        let angle = y.atan2(x);
        let unit_x = if x != 0.0 { angle.cos() } else { 0.0 };
        let unit_y = -angle.sin();

        FrameOutcome::Scroll(ScrollDelta {
            x: (unit_x * velocity).round() as i32,
            y: (unit_y * velocity).round() as i32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn key_down_reports_idle_transition_once() {
        let mut scroller = SmoothScroller::new(1.0);
        assert!(scroller.key_down(Direction::Up));
        assert!(!scroller.key_down(Direction::Left));
        scroller.key_up(Direction::Up);
        assert!(!scroller.key_down(Direction::Down));
    }

    #[test]
    fn velocity_ramps_to_max_after_ease_window() {
        let mut scroller = SmoothScroller::new(1.0);
        scroller.key_down(Direction::Down);

        // first frame starts the ramp at zero velocity
        assert_eq!(
            scroller.frame(ms(1000), true),
            FrameOutcome::Scroll(ScrollDelta { x: 0, y: 0 })
        );
        // halfway through the ease window
        assert_eq!(
            scroller.frame(ms(1125), true),
            FrameOutcome::Scroll(ScrollDelta { x: 0, y: 20 })
        );
        // past the window: sustained maximum
        assert_eq!(
            scroller.frame(ms(1300), true),
            FrameOutcome::Scroll(ScrollDelta { x: 0, y: 40 })
        );
        assert_eq!(
            scroller.frame(ms(2000), true),
            FrameOutcome::Scroll(ScrollDelta { x: 0, y: 40 })
        );
    }

    #[test]
    fn max_velocity_scales_inversely_with_pixel_density() {
        let mut scroller = SmoothScroller::new(2.0);
        scroller.key_down(Direction::Up);

        scroller.frame(ms(1000), true);
        assert_eq!(
            scroller.frame(ms(1300), true),
            FrameOutcome::Scroll(ScrollDelta { x: 0, y: -20 })
        );
    }

    #[test]
    fn diagonal_speed_matches_single_axis_speed() {
        let mut scroller = SmoothScroller::new(1.0);
        scroller.key_down(Direction::Down);
        scroller.key_down(Direction::Right);

        scroller.frame(ms(1000), true);
        let FrameOutcome::Scroll(delta) = scroller.frame(ms(1300), true) else {
            panic!("expected a scroll frame");
        };
        let magnitude = f64::from(delta.x * delta.x + delta.y * delta.y).sqrt();
        assert!((magnitude - MAX_VELOCITY).abs() < 1.5);
        assert!(delta.x > 0);
        assert!(delta.y > 0);
    }

    #[test]
    fn opposite_axes_cancel() {
        let mut scroller = SmoothScroller::new(1.0);
        scroller.key_down(Direction::Left);
        scroller.key_down(Direction::Right);

        scroller.frame(ms(1000), true);
        assert_eq!(
            scroller.frame(ms(1300), true),
            FrameOutcome::Scroll(ScrollDelta { x: 0, y: 0 })
        );
    }

    #[test]
    fn duplicate_frames_are_discarded_without_reset() {
        let mut scroller = SmoothScroller::new(1.0);
        scroller.key_down(Direction::Down);

        scroller.frame(ms(1000), true);
        assert_eq!(scroller.frame(ms(1005), true), FrameOutcome::Skip);
        // ramp unaffected: still measured from the first frame
        assert_eq!(
            scroller.frame(ms(1300), true),
            FrameOutcome::Scroll(ScrollDelta { x: 0, y: 40 })
        );
    }

    #[test]
    fn releasing_every_key_stops_and_resets_the_ramp() {
        let mut scroller = SmoothScroller::new(1.0);
        scroller.key_down(Direction::Down);
        scroller.frame(ms(1000), true);
        scroller.frame(ms(1300), true);

        scroller.key_up(Direction::Down);
        assert_eq!(scroller.frame(ms(1316), true), FrameOutcome::Stop);
        assert!(scroller.is_idle());

        // a new session ramps from zero again
        assert!(scroller.key_down(Direction::Down));
        assert_eq!(
            scroller.frame(ms(2000), true),
            FrameOutcome::Scroll(ScrollDelta { x: 0, y: 0 })
        );
    }

    #[test]
    fn focus_loss_stops_the_loop() {
        let mut scroller = SmoothScroller::new(1.0);
        scroller.key_down(Direction::Down);
        scroller.frame(ms(1000), true);

        assert_eq!(scroller.frame(ms(1016), false), FrameOutcome::Stop);
        assert!(scroller.is_idle());
    }
}
