use thiserror::Error;
use crate::constants::{HYSTERESIS, LOW_THRESHOLD};

const TIE_EPSILON: f32 = 1e-5;           // Comparison slack, in increments
const TIE_FLOOR: f32 = 4.0 * f32::EPSILON; // Never below a few ulps of progress

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("at least one slide is needed, got {0}")]
    NoSlides(usize),

    #[error("{name} must be a finite fraction in [0, 1], got {value}")]
    InvalidFraction { name: &'static str, value: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapConfig {
    slide_count: usize,
    low_threshold: f32,
    hysteresis: f32,
}

impl SnapConfig {
    pub fn new(slide_count: usize, low_threshold: f32, hysteresis: f32) -> Result<Self, ConfigError> {
        if slide_count == 0 {
            return Err(ConfigError::NoSlides(slide_count));
        }
        check_fraction("low threshold", low_threshold)?;
        check_fraction("hysteresis", hysteresis)?;

        Ok(Self { slide_count, low_threshold, hysteresis })
    }

    pub fn with_slides(slide_count: usize) -> Result<Self, ConfigError> {
        Self::new(slide_count, LOW_THRESHOLD, HYSTERESIS)
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn low_threshold(&self) -> f32 {
        self.low_threshold
    }

    pub fn hysteresis(&self) -> f32 {
        self.hysteresis
    }

    /// Infinite for a single slide.
    pub fn increment(&self) -> f32 {
        1.0 / (self.slide_count - 1) as f32
    }
}

fn check_fraction(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidFraction { name, value })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub last_progress: f32,
}

// --- Snap progress to the boundary it should settle on ---
pub fn resolve(progress: f32, state: &mut ScrollState, config: &SnapConfig) -> f32 {
    let direction = progress - state.last_progress;
    state.last_progress = progress;

    if config.slide_count == 1 {
        return 0.0;
    }

    let increment = config.increment();
    if progress < increment * config.low_threshold {
        return 0.0;
    }

    let slack = tie_slack(increment);
    let (lower, upper) = bracket(progress, increment, slack);
    // Overshooting by exactly the hysteresis commits
    let margin = increment * config.hysteresis - slack;

    if direction > 0.0 {
        if progress - lower >= margin { upper } else { lower }
    } else if direction < 0.0 {
        if upper - progress >= margin { lower } else { upper }
    } else {
        lower
    }
}

fn tie_slack(increment: f32) -> f32 {
    (TIE_EPSILON * increment).max(TIE_FLOOR)
}

// --- Helper: adjacent boundaries, equal when progress sits on one ---
fn bracket(progress: f32, increment: f32, slack: f32) -> (f32, f32) {
    let steps = progress / increment;
    let nearest = steps.round();
    if (steps - nearest).abs() * increment <= slack {
        let snap = nearest * increment;
        return (snap, snap);
    }
    (steps.floor() * increment, steps.ceil() * increment)
}

#[derive(Debug, Clone)]
pub struct SnapResolver {
    config: SnapConfig,
    state: ScrollState,
}

impl SnapResolver {
    pub fn new(config: SnapConfig) -> Self {
        Self { config, state: ScrollState::default() }
    }

    pub fn resolve(&mut self, progress: f32) -> f32 {
        resolve(progress, &mut self.state, &self.config)
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }
}
