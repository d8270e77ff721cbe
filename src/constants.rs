pub const WINDOW_WIDTH: i32 = 1280;           // Initial window width
pub const WINDOW_HEIGHT: i32 = 720;           // Initial window height
pub const FPS: u32 = 60;                      // Frames per second

pub const LOW_THRESHOLD: f32 = 0.1;           // Fraction of one slide below which progress snaps to 0
pub const HYSTERESIS: f32 = 0.08;             // Fraction of one slide to overshoot before committing to the next
pub const SNAP_DURATION: f32 = 0.15;          // Duration of the snap animation (seconds)
pub const SNAP_DELAY: f32 = 0.0;              // Extra wait after scroll end before snapping (seconds)
pub const SCROLL_END_IDLE: f32 = 0.1;         // Input-free time after which scrolling is considered over (seconds)

pub const WHEEL_STEP: f32 = 100.0;            // Pixels scrolled per wheel notch or arrow key press
