use std::path::PathBuf;
use anyhow::{ensure, Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use log::{error, info, warn};
use raylib::prelude::*;

mod columns;
mod constants;
mod scroll;
mod slide;
mod snap;
mod state;
mod texture_loader;

use crate::columns::ColumnLayout;
use crate::constants::*;
use crate::scroll::{ScrollDriver, SnapAnimation};
use crate::slide::Slide;
use crate::snap::{SnapConfig, SnapResolver};
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation, pair_paths};

/// Two-column slideshow driven by scrolling, snapping to whole slides.
#[derive(Parser, Debug)]
#[command(name = "scrollsnap", version, about)]
struct Args {
    /// Directory of images. Consecutive images (by file name) form the left
    /// and right half of one slide.
    image_directory: PathBuf,

    /// Fraction of one slide below which progress snaps back to the first slide
    #[arg(long, default_value_t = LOW_THRESHOLD)]
    low_threshold: f32,

    /// Fraction of one slide to scroll past a boundary before moving on
    #[arg(long, default_value_t = HYSTERESIS)]
    hysteresis: f32,

    /// Snap animation duration in seconds
    #[arg(long, default_value_t = SNAP_DURATION)]
    snap_duration: f32,

    /// Extra delay in seconds between scroll end and snapping
    #[arg(long, default_value_t = SNAP_DELAY)]
    snap_delay: f32,

    /// Pixels scrolled per wheel notch or arrow key press
    #[arg(long, default_value_t = WHEEL_STEP)]
    wheel_step: f32,

    /// Show progress and driver state
    #[arg(long)]
    hud: bool,
}

fn init_logger() {
    // RUST_LOG overrides, e.g. RUST_LOG=debug to trace snap decisions
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = run(Args::parse()) {
        error!("{:?}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    ensure!(
        args.snap_duration >= 0.0 && args.snap_delay >= 0.0,
        "Snap duration and delay must not be negative"
    );

    let image_paths = load_sorted_image_paths(&args.image_directory)?;
    let path_pairs = pair_paths(image_paths);
    info!("Input path: {}, {} slide pairs", args.image_directory.display(), path_pairs.len());

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Scroll Snap Slideshow")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slide_pairs = Vec::new();
    for (left, right) in path_pairs {
        let textures = (
            load_texture_with_exif_rotation(&mut rl, &thread, &left),
            load_texture_with_exif_rotation(&mut rl, &thread, &right),
        );
        match textures {
            (Ok(l), Ok(r)) => slide_pairs.push((Slide::new(l), Slide::new(r))),
            (Err(e), _) | (_, Err(e)) => warn!("Skipping slide {:?} / {:?}: {:#}", left.file_name(), right.file_name(), e),
        }
    }

    let config = SnapConfig::new(slide_pairs.len(), args.low_threshold, args.hysteresis)
        .context("Cannot build the slide set")?;
    info!(
        "Snapping {} slides, low threshold {}, hysteresis {}",
        config.slide_count(),
        config.low_threshold(),
        config.hysteresis()
    );
    let layout = ColumnLayout::new(slide_pairs);

    let animation = SnapAnimation { duration: args.snap_duration, delay: args.snap_delay };
    let mut driver = ScrollDriver::new(SnapResolver::new(config), animation, rl.get_screen_height() as f32);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        if rl.is_window_resized() {
            driver.resize(rl.get_screen_height() as f32);
        }

        let delta = scroll_input(&rl, args.wheel_step, driver.viewport_height(), driver.region());
        if delta != 0.0 {
            driver.scroll_by(delta);
        }
        driver.update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        let width = d.get_screen_width() as f32;
        let height = d.get_screen_height() as f32;
        layout.draw(&mut d, driver.progress(), width, height);

        if args.hud {
            let hud = format!(
                "Progress: {:.3}  Offset: {:.0}px  Slide: {}/{}  State: {:?}",
                driver.progress(),
                driver.scroll_offset(),
                driver.current_slide() + 1,
                layout.slide_count(),
                driver.state(),
            );
            d.draw_text(&hud, 10, 10, 20, Color::LIME);
        }
    }

    Ok(())
}

/// Scroll distance requested this frame in pixels, positive is forward.
fn scroll_input(rl: &RaylibHandle, wheel_step: f32, viewport: f32, region: f32) -> f32 {
    // Held keys keep scrolling at the OS repeat rate
    let pressed = |key: KeyboardKey| rl.is_key_pressed(key) || rl.is_key_pressed_repeat(key);

    // Wheel up scrolls back toward the first slide
    let mut delta = -rl.get_mouse_wheel_move() * wheel_step;

    if pressed(KeyboardKey::KEY_DOWN) {
        delta += wheel_step;
    }
    if pressed(KeyboardKey::KEY_UP) {
        delta -= wheel_step;
    }
    if pressed(KeyboardKey::KEY_PAGE_DOWN) || pressed(KeyboardKey::KEY_SPACE) {
        delta += viewport;
    }
    if pressed(KeyboardKey::KEY_PAGE_UP) {
        delta -= viewport;
    }
    if rl.is_key_pressed(KeyboardKey::KEY_END) {
        delta += region;
    }
    if rl.is_key_pressed(KeyboardKey::KEY_HOME) {
        delta -= region;
    }
    delta
}
