use log::debug;
use raylib::ease;
use crate::constants::*;
use crate::snap::SnapResolver;
use crate::state::DriverState;

/// Distance to the snap target below which no animation is started.
const SETTLED_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapAnimation {
    pub duration: f32,
    pub delay: f32,
}

impl Default for SnapAnimation {
    fn default() -> Self {
        Self { duration: SNAP_DURATION, delay: SNAP_DELAY }
    }
}

/// Pinned scroll region driving the slide progress.
///
/// The region starts at scroll offset 0 and is `(slides - 1)` viewport
/// heights long. Progress follows scroll input directly; once input stops
/// for `SCROLL_END_IDLE + delay` seconds the resolver picks a boundary and
/// progress eases toward it.
pub struct ScrollDriver {
    resolver: SnapResolver,
    animation: SnapAnimation,
    viewport_height: f32,

    progress: f32,
    state: DriverState,

    snap_tween: Option<ease::Tween>,
    snap_timer: f32,
}

impl ScrollDriver {
    pub fn new(resolver: SnapResolver, animation: SnapAnimation, viewport_height: f32) -> Self {
        Self {
            resolver,
            animation,
            viewport_height: viewport_height.max(0.0),
            progress: 0.0,
            state: DriverState::Idle,
            snap_tween: None,
            snap_timer: 0.0,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn slide_count(&self) -> usize {
        self.resolver.config().slide_count()
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Length of the pinned region in pixels.
    pub fn region(&self) -> f32 {
        (self.slide_count() - 1) as f32 * self.viewport_height
    }

    pub fn scroll_offset(&self) -> f32 {
        self.progress * self.region()
    }

    /// Index of the slide boundary nearest to the current progress.
    pub fn current_slide(&self) -> usize {
        let increment = self.resolver.config().increment();
        (self.progress / increment).round() as usize
    }

    /// Applies scroll input in pixels, positive scrolls forward.
    pub fn scroll_by(&mut self, delta: f32) {
        let region = self.region();
        if region <= 0.0 {
            return;
        }

        if let DriverState::Snapping { target } = self.state {
            debug!("Snap to {:.3} interrupted at {:.3}", target, self.progress);
            self.snap_tween = None;
        }

        self.progress = (self.progress + delta / region).clamp(0.0, 1.0);
        self.state = DriverState::Scrubbing { idle_time: 0.0 };
    }

    /// Progress is kept, so the same slides stay on screen.
    pub fn resize(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height.max(0.0);
    }

    pub fn update(&mut self, dt: f32) {
        match self.state {
            DriverState::Idle => {}
            DriverState::Scrubbing { idle_time } => {
                let idle_time = idle_time + dt;
                if idle_time < SCROLL_END_IDLE + self.animation.delay {
                    self.state = DriverState::Scrubbing { idle_time };
                    return;
                }

                let target = self.resolver.resolve(self.progress);
                debug!("Scroll ended at {:.3}, snapping to {:.3}", self.progress, target);

                if (target - self.progress).abs() < SETTLED_EPSILON || self.animation.duration <= 0.0 {
                    self.progress = target;
                    self.state = DriverState::Idle;
                } else {
                    // Quadratic in-out, soft at both ends
                    self.snap_tween = Some(ease::Tween::new(ease::quad_in_out, self.progress, target, self.animation.duration));
                    self.snap_timer = 0.0;
                    self.state = DriverState::Snapping { target };
                }
            }
            DriverState::Snapping { target } => {
                self.snap_timer += dt;
                if self.snap_timer >= self.animation.duration {
                    self.progress = target;
                    self.snap_tween = None;
                    self.state = DriverState::Idle;
                } else if let Some(tween) = self.snap_tween.as_mut() {
                    self.progress = tween.apply(dt);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snap::SnapConfig;

    const THIRD: f32 = 1.0 / 3.0;

    fn driver(animation: SnapAnimation) -> ScrollDriver {
        // 4 slides, 100px viewport -> 300px region
        let resolver = SnapResolver::new(SnapConfig::with_slides(4).unwrap());
        ScrollDriver::new(resolver, animation, 100.0)
    }

    fn settle(driver: &mut ScrollDriver) {
        for _ in 0..120 {
            driver.update(1.0 / 60.0);
        }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!((actual - expected).abs() < 1e-5, "expected {expected}, got {actual}");
    }

    #[test]
    fn scroll_input_scrubs_progress() {
        let mut driver = driver(SnapAnimation::default());
        driver.scroll_by(150.0);

        assert_close(driver.progress(), 0.5);
        assert_close(driver.scroll_offset(), 150.0);
        assert_eq!(driver.state(), DriverState::Scrubbing { idle_time: 0.0 });
    }

    #[test]
    fn progress_is_clamped_to_region() {
        let mut driver = driver(SnapAnimation::default());
        driver.scroll_by(-50.0);
        assert_eq!(driver.progress(), 0.0);

        driver.scroll_by(10_000.0);
        assert_eq!(driver.progress(), 1.0);
    }

    #[test]
    fn snap_waits_for_scroll_end() {
        let mut driver = driver(SnapAnimation::default());
        driver.scroll_by(110.0);

        driver.update(0.05);
        assert!(matches!(driver.state(), DriverState::Scrubbing { .. }));

        driver.update(0.06);
        match driver.state() {
            DriverState::Snapping { target } => assert_close(target, 2.0 * THIRD),
            other => panic!("expected a snap, got {other:?}"),
        }
    }

    #[test]
    fn snap_eases_to_target_and_rests() {
        let mut driver = driver(SnapAnimation::default());
        driver.scroll_by(110.0);
        driver.update(0.11);

        let start = driver.progress();
        driver.update(0.05);
        assert!(driver.progress() >= start && driver.progress() <= 2.0 * THIRD + 1e-5);

        driver.update(0.2);
        assert_eq!(driver.state(), DriverState::Idle);
        assert_close(driver.progress(), 2.0 * THIRD);
        assert_eq!(driver.current_slide(), 2);
    }

    #[test]
    fn small_overshoot_snaps_back() {
        let mut driver = driver(SnapAnimation::default());
        driver.scroll_by(105.0);
        settle(&mut driver);

        assert_close(driver.progress(), THIRD);
        assert_eq!(driver.current_slide(), 1);
    }

    #[test]
    fn micro_scroll_at_top_returns_to_first_slide() {
        let mut driver = driver(SnapAnimation::default());
        driver.scroll_by(5.0);
        settle(&mut driver);

        assert_eq!(driver.progress(), 0.0);
        assert_eq!(driver.state(), DriverState::Idle);
    }

    #[test]
    fn backward_scroll_snaps_to_previous_slide() {
        let mut driver = driver(SnapAnimation::default());
        driver.scroll_by(200.0);
        settle(&mut driver);
        assert_close(driver.progress(), 2.0 * THIRD);

        driver.scroll_by(-40.0);
        settle(&mut driver);
        assert_close(driver.progress(), THIRD);
    }

    #[test]
    fn scroll_input_interrupts_snap() {
        let mut driver = driver(SnapAnimation::default());
        driver.scroll_by(110.0);
        driver.update(0.11);
        assert!(matches!(driver.state(), DriverState::Snapping { .. }));

        let before = driver.progress();
        driver.scroll_by(-3.0);
        assert_eq!(driver.state(), DriverState::Scrubbing { idle_time: 0.0 });
        assert_close(driver.progress(), before - 0.01);
    }

    #[test]
    fn delay_postpones_snap() {
        let mut driver = driver(SnapAnimation { duration: SNAP_DURATION, delay: 0.5 });
        driver.scroll_by(110.0);

        driver.update(0.3);
        assert!(matches!(driver.state(), DriverState::Scrubbing { .. }));
        driver.update(0.35);
        assert!(matches!(driver.state(), DriverState::Snapping { .. }));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut driver = driver(SnapAnimation { duration: 0.0, delay: 0.0 });
        driver.scroll_by(110.0);
        driver.update(0.2);

        assert_eq!(driver.state(), DriverState::Idle);
        assert_close(driver.progress(), 2.0 * THIRD);
    }

    #[test]
    fn resize_keeps_progress() {
        let mut driver = driver(SnapAnimation::default());
        driver.scroll_by(150.0);
        driver.resize(200.0);

        assert_close(driver.progress(), 0.5);
        assert_close(driver.region(), 600.0);
        assert_close(driver.scroll_offset(), 300.0);
    }

    #[test]
    fn single_slide_stays_put() {
        let resolver = SnapResolver::new(SnapConfig::with_slides(1).unwrap());
        let mut driver = ScrollDriver::new(resolver, SnapAnimation::default(), 100.0);
        driver.scroll_by(250.0);
        settle(&mut driver);

        assert_eq!(driver.region(), 0.0);
        assert_eq!(driver.progress(), 0.0);
        assert_eq!(driver.current_slide(), 0);
        assert_eq!(driver.state(), DriverState::Idle);
    }

    #[test]
    fn empty_viewport_ignores_input() {
        let mut driver = driver(SnapAnimation::default());
        driver.resize(0.0);
        driver.scroll_by(50.0);

        assert_eq!(driver.progress(), 0.0);
        assert_eq!(driver.state(), DriverState::Idle);
    }
}
