//! Scene container and nearest-hit search.

use crate::Triangle;
use tricast_math::{Color, Interval, Ray};

/// The closest accepted intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter of the intersection
    pub t: f32,
    /// Color of the triangle that was hit
    pub color: Color,
    /// Position of that triangle in the scene
    pub index: usize,
}

/// An ordered list of triangles.
///
/// Order only matters when two triangles are hit at exactly the same ray
/// parameter: the one added first wins.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    triangles: Vec<Triangle>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Add a triangle to the end of the scene.
    ///
    /// Degenerate triangles are kept: they can never be hit, but dropping them
    /// would shift the indices reported in [`Hit`].
    pub fn push(&mut self, triangle: Triangle) {
        if triangle.is_degenerate() {
            log::warn!(
                "Triangle {} is degenerate (collinear vertices), it will never be visible",
                self.triangles.len()
            );
        }
        self.triangles.push(triangle);
    }

    /// Get the number of triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Find the nearest triangle hit by the ray.
    ///
    /// Every triangle is tested in insertion order. A candidate replaces the
    /// current best only if its parameter is strictly smaller.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit> {
        let mut closest: Option<Hit> = None;
        let mut closest_so_far = Interval::FORWARD.max;

        for (index, triangle) in self.triangles.iter().enumerate() {
            let interval = Interval::new(Interval::FORWARD.min, closest_so_far);
            if let Some(t) = triangle.hit(ray, interval) {
                closest_so_far = t;
                closest = Some(Hit {
                    t,
                    color: triangle.color(),
                    index,
                });
            }
        }

        closest
    }
}

impl From<Vec<Triangle>> for Scene {
    fn from(triangles: Vec<Triangle>) -> Self {
        triangles.into_iter().collect()
    }
}

impl FromIterator<Triangle> for Scene {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        let mut scene = Scene::new();
        for triangle in iter {
            scene.push(triangle);
        }
        scene
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
