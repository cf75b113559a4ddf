//! Triangle primitive for ray casting.
//!
//! Intersection is done in two steps: solve the supporting plane for the ray
//! parameter, then classify the plane point with a same-side test against
//! each edge.

use tricast_math::{Color, Interval, Point3, Ray, Vec3};

/// Below this (non-negative) value of `normal · direction` a ray is treated
/// as parallel to the triangle's plane.
pub const PARALLEL_EPSILON: f32 = 1e-4;

/// A flat-colored triangle.
///
/// Vertices are expected in counter-clockwise order when seen from the side
/// the face normal points to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices
    a: Point3,
    b: Point3,
    c: Point3,
    color: Color,
}

impl Triangle {
    /// Create a red triangle.
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self::with_color(a, b, c, Color::new(1.0, 0.0, 0.0))
    }

    /// Create a triangle with the given color.
    pub fn with_color(a: Point3, b: Point3, c: Point3, color: Color) -> Self {
        Self { a, b, c, color }
    }

    pub fn a(&self) -> Point3 {
        self.a
    }

    pub fn b(&self) -> Point3 {
        self.b
    }

    pub fn c(&self) -> Point3 {
        self.c
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Un-normalized face normal, `(a - c) × (b - c)`.
    ///
    /// Its length is twice the triangle's area. Recomputed on every call.
    #[inline]
    pub fn face_normal(&self) -> Vec3 {
        (self.a - self.c).cross(self.b - self.c)
    }

    /// Unit face normal. NaN for a degenerate triangle.
    pub fn normal(&self) -> Vec3 {
        self.face_normal().normalize()
    }

    /// True if the vertices are collinear (or coincide), leaving no face normal.
    pub fn is_degenerate(&self) -> bool {
        self.face_normal() == Vec3::ZERO
    }

    /// Intersect the ray with the triangle's plane.
    ///
    /// Returns the ray parameter of the plane hit, or `None` when the ray runs
    /// (nearly) parallel to the plane or the hit lies behind the origin.
    /// Only the non-negative side of `normal · direction` is checked against
    /// [`PARALLEL_EPSILON`]; a ray parallel from the negative side falls
    /// through to the division and may yield a non-finite parameter.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let normal = self.face_normal();
        let denom = normal.dot(ray.direction);

        if (0.0..PARALLEL_EPSILON).contains(&denom) {
            return None;
        }

        let d = normal.dot(self.a);
        let t = (normal.dot(ray.origin) + d) / denom;

        if t < 0.0 {
            return None;
        }

        Some(t)
    }

    /// Inside/outside test for a point already known to lie on the plane.
    ///
    /// The point must be on the inner side of every edge, measured against
    /// the un-normalized face normal. Points exactly on an edge are inside.
    pub fn is_inside(&self, p: Point3) -> bool {
        let normal = self.face_normal();

        // Each edge paired with the vertex it starts from
        let edges = [
            (self.a - self.c, self.c),
            (self.b - self.a, self.a),
            (self.c - self.b, self.b),
        ];

        edges
            .iter()
            .all(|&(edge, start)| normal.dot(edge.cross(p - start)) >= 0.0)
    }

    /// Full hit test: plane intersection, inside test, then the parameter
    /// must fall in `ray_t` with its upper bound excluded.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f32> {
        let t = self.intersect(ray)?;

        if !self.is_inside(ray.at(t)) || !ray_t.contains_half_open(t) {
            return None;
        }

        Some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Triangle facing the origin in the plane z = -3.
    fn front_triangle() -> Triangle {
        Triangle::with_color(
            Point3::new(0.0, 1.0, -3.0),
            Point3::new(-1.0, -1.0, -3.0),
            Point3::new(1.0, -1.0, -3.0),
            Color::new(1.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_default_color_is_red() {
        let tri = Triangle::new(Point3::ZERO, Point3::X, Point3::Y);
        assert_eq!(tri.color(), Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_set_color() {
        let mut tri = front_triangle();
        tri.set_color(Color::new(0.0, 0.5, 1.0));
        assert_eq!(tri.color(), Color::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_face_normal() {
        let tri = front_triangle();

        // (a - c) x (b - c) = (-1, 2, 0) x (-2, 0, 0)
        assert_eq!(tri.face_normal(), Vec3::new(0.0, 0.0, 4.0));
        assert_eq!(tri.normal(), Vec3::Z);
    }

    #[test]
    fn test_degenerate_triangle() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, -1.0),
            Point3::new(1.0, 1.0, -1.0),
            Point3::new(2.0, 2.0, -1.0),
        );

        assert!(tri.is_degenerate());
        assert!(!front_triangle().is_degenerate());
        assert!(tri.normal().x.is_nan());
    }

    #[test]
    fn test_intersect_facing_ray() {
        let tri = front_triangle();
        let ray = Ray::new(Point3::ZERO, Vec3::NEG_Z);

        assert_eq!(tri.intersect(&ray), Some(3.0));
    }

    #[test]
    fn test_intersect_unnormalized_direction() {
        let tri = front_triangle();
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -2.0));

        assert_eq!(tri.intersect(&ray), Some(1.5));
    }

    #[test]
    fn test_intersect_off_origin_adds_origin_term() {
        let tri = front_triangle();
        // n = (0, 0, 4), n·O = 4, D = n·a = -12, n·R = -4: (4 - 12) / -4
        let ray = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::NEG_Z);

        assert_eq!(tri.intersect(&ray), Some(2.0));
    }

    #[test]
    fn test_intersect_off_origin_sideways() {
        let tri = front_triangle();
        // Origin offset in the plane's tangent directions leaves n·O at zero
        let ray = Ray::new(Point3::new(0.5, -0.25, 0.0), Vec3::NEG_Z);
        assert_eq!(tri.intersect(&ray), Some(3.0));

        // n·O = -8 pushes the parameter out: (-8 - 12) / -4
        let ray = Ray::new(Point3::new(0.0, 0.0, -2.0), Vec3::NEG_Z);
        assert_eq!(tri.intersect(&ray), Some(5.0));
    }

    #[test]
    fn test_intersect_rejects_parallel_ray() {
        let tri = front_triangle();
        let ray = Ray::new(Point3::ZERO, Vec3::X);

        assert_eq!(tri.intersect(&ray), None);
    }

    #[test]
    fn test_intersect_rejects_near_parallel_positive_side() {
        let tri = front_triangle();
        // normal · direction = 4 * 1e-5, inside [0, epsilon)
        let ray = Ray::new(Point3::ZERO, Vec3::new(1.0, 0.0, 1e-5));

        assert_eq!(tri.intersect(&ray), None);
    }

    #[test]
    fn test_intersect_negative_side_is_not_epsilon_guarded() {
        let tri = front_triangle();
        // normal · direction = -4e-6: tiny but negative, so it goes through
        // to the division and yields a huge parameter.
        let ray = Ray::new(Point3::ZERO, Vec3::new(1.0, 0.0, -1e-6));

        let t = tri.intersect(&ray).expect("negative side is not rejected");
        assert!(t > 1e5);
    }

    #[test]
    fn test_intersect_rejects_plane_behind() {
        // Same triangle but behind the camera, at z = +3
        let tri = Triangle::new(
            Point3::new(0.0, 1.0, 3.0),
            Point3::new(1.0, -1.0, 3.0),
            Point3::new(-1.0, -1.0, 3.0),
        );
        let ray = Ray::new(Point3::ZERO, Vec3::NEG_Z);

        assert_eq!(tri.intersect(&ray), None);
    }

    #[test]
    fn test_is_inside() {
        let tri = front_triangle();

        assert!(tri.is_inside(Point3::new(0.0, -1.0 / 3.0, -3.0)));
        assert!(tri.is_inside(Point3::new(0.0, 0.0, -3.0)));
        assert!(!tri.is_inside(Point3::new(0.9, 0.9, -3.0)));
        assert!(!tri.is_inside(Point3::new(0.0, -1.5, -3.0)));
        assert!(!tri.is_inside(Point3::new(-2.0, 0.0, -3.0)));
    }

    #[test]
    fn test_is_inside_includes_boundary() {
        let tri = front_triangle();

        assert!(tri.is_inside(tri.a()));
        assert!(tri.is_inside(tri.b()));
        assert!(tri.is_inside(Point3::new(0.0, -1.0, -3.0)));
    }

    #[test]
    fn test_hit_inside_and_outside() {
        let tri = front_triangle();

        let through = Ray::new(Point3::ZERO, Vec3::new(0.0, -0.1, -1.0));
        assert_eq!(tri.hit(&through, Interval::FORWARD), Some(3.0));

        // Hits the plane at (1.5, 1.5, -3), outside the triangle
        let beside = Ray::new(Point3::ZERO, Vec3::new(0.5, 0.5, -1.0));
        assert_eq!(tri.intersect(&beside), Some(3.0));
        assert_eq!(tri.hit(&beside, Interval::FORWARD), None);
    }

    #[test]
    fn test_hit_respects_half_open_interval() {
        let tri = front_triangle();
        let ray = Ray::new(Point3::ZERO, Vec3::NEG_Z);

        assert_eq!(tri.hit(&ray, Interval::new(0.0, 3.5)), Some(3.0));
        assert_eq!(tri.hit(&ray, Interval::new(0.0, 3.0)), None);
    }

    #[test]
    fn test_degenerate_triangle_never_hits() {
        let tri = Triangle::new(
            Point3::new(-1.0, 0.0, -2.0),
            Point3::new(0.0, 0.0, -2.0),
            Point3::new(1.0, 0.0, -2.0),
        );
        let ray = Ray::new(Point3::ZERO, Vec3::NEG_Z);

        // Zero normal: the parallel guard rejects it outright
        assert_eq!(tri.hit(&ray, Interval::FORWARD), None);
    }
}
