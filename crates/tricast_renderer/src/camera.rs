//! Camera for ray generation.

use tricast_math::{Point3, Ray, Vec3};

/// Default field of view: 90 degrees, in radians.
///
/// The truncated literal is the reference default, not `FRAC_PI_2`.
#[allow(clippy::approx_constant)]
const DEFAULT_FOV: f32 = 1.570796;

/// Pinhole camera producing one ray per pixel center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Full field of view in radians
    fov: f32,
    position: Point3,
    look_direction: Vec3,
    /// Kept for a future camera basis; ray generation ignores it
    up: Vec3,
}

impl Camera {
    /// Create a camera at the origin looking down -Z with a 90 degree field of view.
    pub fn new() -> Self {
        Self {
            fov: DEFAULT_FOV,
            position: Point3::ZERO,
            look_direction: Vec3::NEG_Z,
            up: Vec3::Y,
        }
    }

    /// Set the field of view (radians).
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Set the camera position.
    pub fn with_position(mut self, position: Point3) -> Self {
        self.position = position;
        self
    }

    /// Set the viewing direction. It does not need to be unit length.
    pub fn with_look_direction(mut self, look_direction: Vec3) -> Self {
        self.look_direction = look_direction;
        self
    }

    /// Set the up vector.
    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = up;
        self
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn position(&self) -> Point3 {
        self.position
    }

    pub fn look_direction(&self) -> Vec3 {
        self.look_direction
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Build the ray through the center of pixel (i, j).
    ///
    /// `i` runs over `0..height` and drives the horizontal screen axis,
    /// `j` runs over `0..width` and drives the vertical one (flipped so that
    /// `j = 0` is the top). The pixel offset is added to the normalized look
    /// direction and the sum is not normalized again, so the returned
    /// direction is only close to unit length near the image center.
    pub fn ray_through_pixel(&self, i: u32, j: u32, width: u32, height: u32) -> Ray {
        let (w, h) = (width as f32, height as f32);
        let scale = (self.fov / 2.0).tan();

        // NDC space
        let px = (i as f32 + 0.5) / h;
        let py = (j as f32 + 0.5) / w;

        // Screen space
        let px = 2.0 * px - 1.0;
        let py = 1.0 - 2.0 * py;

        // Aspect ratio, then field of view
        let px = px * w / h * scale;
        let py = py * scale;

        let direction = self.look_direction.normalize() + Vec3::new(px, py, 0.0);
        Ray::new(self.position, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
