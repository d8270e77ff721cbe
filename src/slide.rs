use raylib::prelude::*;

pub struct Slide {
    image: Texture2D,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self { image }
    }

    /// Fills `dest` with the image, cropping instead of stretching.
    pub fn draw(&self, d: &mut RaylibDrawHandle, dest: Rectangle) {
        let source = cover_source(
            self.image.width() as f32,
            self.image.height() as f32,
            dest.width,
            dest.height,
        );

        d.draw_texture_pro(
            &self.image,
            source,
            dest,
            Vector2::new(0.0, 0.0), // Dest rect is already placed, no rotation
            0.0,
            Color::WHITE,
        );
    }
}

// --- Helper: centered crop of the texture matching the cell aspect ratio ---
pub fn cover_source(tex_width: f32, tex_height: f32, dest_width: f32, dest_height: f32) -> Rectangle {
    if tex_width <= 0.0 || tex_height <= 0.0 || dest_width <= 0.0 || dest_height <= 0.0 {
        return Rectangle::new(0.0, 0.0, tex_width.max(0.0), tex_height.max(0.0));
    }

    let dest_ratio = dest_width / dest_height;
    if tex_width / tex_height > dest_ratio {
        // Wider than the cell: trim left and right
        let width = tex_height * dest_ratio;
        Rectangle::new((tex_width - width) * 0.5, 0.0, width, tex_height)
    } else {
        // Taller than the cell: trim top and bottom
        let height = tex_width / dest_ratio;
        Rectangle::new(0.0, (tex_height - height) * 0.5, tex_width, height)
    }
}
