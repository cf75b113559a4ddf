// Re-export glam for convenience
pub use glam::*;

// Tricast math types
mod approx;
mod interval;
mod ray;

pub use approx::ApproxEq;
pub use interval::Interval;
pub use ray::Ray;

/// A position in 3D space. Shares its representation with every other vector.
pub type Point3 = Vec3;

/// RGB color with channels conceptually in [0, 1].
pub type Color = Vec3;
