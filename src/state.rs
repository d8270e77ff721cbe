#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DriverState {
    Idle,                          // Resting, nothing to animate
    Scrubbing { idle_time: f32 },  // Following scroll input, waiting for it to stop
    Snapping { target: f32 },      // Animating progress toward a slide boundary
}
