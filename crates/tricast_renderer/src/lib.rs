//! Tricast Renderer - CPU triangle ray casting
//!
//! Casts one ray per pixel from a pinhole camera, tests it against every
//! triangle in the scene and keeps the color of the nearest hit.
//! There is no acceleration structure and no shading: a pixel is either the
//! flat color of the closest triangle or the background.

mod camera;
mod triangle;
mod scene;
mod renderer;
mod output;

pub use camera::Camera;
pub use triangle::{Triangle, PARALLEL_EPSILON};
pub use scene::{Hit, Scene};
pub use renderer::{RenderConfig, ImageBuffer, render, render_pixel};
pub use output::{OutputError, OutputResult, color_to_rgb, to_rgb_image, save_image};

/// Re-export the vector and ray types from tricast_math
pub use tricast_math::{Color, Interval, Point3, Ray, Vec3};
