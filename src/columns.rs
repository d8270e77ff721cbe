//! Two side-by-side tracks of viewport-high slides moving in opposite
//! directions as progress goes from 0 to 1.
//!
//! The left track starts with its first slide on screen and travels up by
//! `(slides - 1)` viewport heights. The right track starts shifted up by the
//! same distance, showing its bottom slide, and travels back down to 0.

use std::ops::Range;
use raylib::prelude::*;
use crate::slide::Slide;

pub struct ColumnLayout {
    left: Vec<Slide>,
    right: Vec<Slide>, // Top to bottom, i.e. last pair first
}

impl ColumnLayout {
    pub fn new(pairs: Vec<(Slide, Slide)>) -> Self {
        let (left, right) = stack_columns(pairs);
        Self { left, right }
    }

    pub fn slide_count(&self) -> usize {
        self.left.len()
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, progress: f32, width: f32, height: f32) {
        let (left_y, right_y) = column_offsets(progress, self.slide_count(), height);
        let column_width = width * 0.5;

        draw_column(d, &self.left, 0.0, left_y, column_width, height);
        draw_column(d, &self.right, column_width, right_y, column_width, height);
    }
}

fn draw_column(d: &mut RaylibDrawHandle, slides: &[Slide], x: f32, offset: f32, width: f32, height: f32) {
    let rows = visible_rows(offset, slides.len(), height);
    for (i, slide) in slides.iter().enumerate().take(rows.end).skip(rows.start) {
        slide.draw(d, Rectangle::new(x, offset + i as f32 * height, width, height));
    }
}

/// Splits pairs into the two tracks. The right track is stacked in reverse
/// so pair `k` lines up in both columns at progress `k / (n - 1)`.
pub fn stack_columns<T>(pairs: Vec<(T, T)>) -> (Vec<T>, Vec<T>) {
    let (left, mut right): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();
    right.reverse();
    (left, right)
}

/// Vertical translation of the (left, right) tracks in pixels.
pub fn column_offsets(progress: f32, slide_count: usize, viewport_height: f32) -> (f32, f32) {
    let travel = slide_count.saturating_sub(1) as f32 * viewport_height;
    (-progress * travel, -(1.0 - progress) * travel)
}

/// Slides of a track translated by `offset` that intersect the viewport.
pub fn visible_rows(offset: f32, slide_count: usize, viewport_height: f32) -> Range<usize> {
    if viewport_height <= 0.0 || slide_count == 0 {
        return 0..0;
    }

    let first = (-offset / viewport_height).floor().max(0.0) as usize;
    let end = ((viewport_height - offset) / viewport_height).ceil().max(0.0) as usize;
    first.min(slide_count)..end.min(slide_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_start_opposite_and_meet_halfway() {
        assert_eq!(column_offsets(0.0, 4, 100.0), (0.0, -300.0));
        assert_eq!(column_offsets(0.5, 4, 100.0), (-150.0, -150.0));
        assert_eq!(column_offsets(1.0, 4, 100.0), (-300.0, 0.0));
    }

    #[test]
    fn single_slide_never_moves() {
        assert_eq!(column_offsets(0.7, 1, 100.0), (0.0, 0.0));
    }

    #[test]
    fn resting_track_shows_one_slide() {
        assert_eq!(visible_rows(0.0, 4, 100.0), 0..1);
        assert_eq!(visible_rows(-100.0, 4, 100.0), 1..2);
        assert_eq!(visible_rows(-300.0, 4, 100.0), 3..4);
    }

    #[test]
    fn moving_track_shows_two_slides() {
        assert_eq!(visible_rows(-150.0, 4, 100.0), 1..3);
        assert_eq!(visible_rows(-20.0, 4, 100.0), 0..2);
    }

    #[test]
    fn visible_rows_stay_in_bounds() {
        assert_eq!(visible_rows(-1000.0, 4, 100.0), 4..4);
        assert_eq!(visible_rows(250.0, 4, 100.0), 0..0);
        assert_eq!(visible_rows(0.0, 4, 0.0), 0..0);
    }

    #[test]
    fn pairs_line_up_across_columns() {
        let (left, right) = stack_columns(vec![("a", "A"), ("b", "B"), ("c", "C")]);
        assert_eq!(left, vec!["a", "b", "c"]);
        assert_eq!(right, vec!["C", "B", "A"]);

        // At each boundary the visible row of both tracks belongs to the same pair
        for k in 0..3 {
            let progress = k as f32 / 2.0;
            let (left_y, right_y) = column_offsets(progress, 3, 100.0);
            let l = visible_rows(left_y, 3, 100.0);
            let r = visible_rows(right_y, 3, 100.0);
            assert_eq!(l.len(), 1);
            assert_eq!(left[l.start].to_uppercase(), right[r.start]);
        }
    }
}
