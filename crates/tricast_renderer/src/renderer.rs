//! Per-pixel nearest-hit render loop.
//!
//! One ray per pixel, no shading: the pixel takes the flat color of the
//! closest triangle, or the background when nothing is hit.

use std::time::Instant;

use crate::{Camera, Scene};
use tricast_math::Color;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Number of cells per row
    pub width: u32,
    /// Number of rows
    pub height: u32,
    /// Color of pixels whose ray hits nothing
    pub background: Color,
}

impl RenderConfig {
    /// Create a configuration with the given size and a black background.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1028,
            height: 1028,
            background: Color::ZERO,
        }
    }
}

/// Render output: `height` rows of `width` colors, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the color at row `i`, column `j`.
    pub fn get(&self, i: u32, j: u32) -> Color {
        self.pixels[self.index(i, j)]
    }

    /// Set the color at row `i`, column `j`.
    pub fn set(&mut self, i: u32, j: u32, color: Color) {
        let index = self.index(i, j);
        self.pixels[index] = color;
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // chunks() panics on zero, and a zero-width buffer has no cells anyway
        self.pixels.chunks(self.width.max(1) as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    fn index(&self, i: u32, j: u32) -> usize {
        assert!(
            i < self.height && j < self.width,
            "pixel ({i}, {j}) out of bounds for {}x{} image",
            self.height,
            self.width
        );
        i as usize * self.width as usize + j as usize
    }
}

/// Compute the color of pixel (i, j).
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    i: u32,
    j: u32,
    config: &RenderConfig,
) -> Color {
    let ray = camera.ray_through_pixel(i, j, config.width, config.height);

    scene
        .closest_hit(&ray)
        .map_or(config.background, |hit| hit.color)
}

/// Render the entire scene to a new image buffer.
///
/// Every cell is written exactly once. The loop is single-threaded.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    log::info!(
        "Rendering {}x{} with {} triangles",
        config.width,
        config.height,
        scene.len()
    );
    log::debug!("Camera: {:?}", camera);

    let start = Instant::now();
    let mut image = ImageBuffer::new(config.width, config.height);

    for i in 0..config.height {
        for j in 0..config.width {
            let color = render_pixel(camera, scene, i, j, config);
            image.set(i, j, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
