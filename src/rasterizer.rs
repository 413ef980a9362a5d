//! Barycentric triangle rasterization helpers.

use cgmath::{Vector2 as Vec2, Vector3 as Vec3, dot};

use crate::vertex::RasterPoint;

/// Barycentric coordinates (u, v, w) of `p` with respect to the triangle,
/// where u belongs to vertex 0. `None` for degenerate triangles.
pub fn barycentric(vertices: &[Vec2<f32>; 3], p: &Vec2<f32>) -> Option<(f32, f32, f32)> {
    let v0 = vertices[1] - vertices[0];
    let v1 = vertices[2] - vertices[0];
    let v2 = *p - vertices[0];

    let d00 = dot(v0, v0);
    let d01 = dot(v0, v1);
    let d11 = dot(v1, v1);
    let d20 = dot(v2, v0);
    let d21 = dot(v2, v1);

    let denom = d00 * d11 - d01 * d01;
    if denom.abs() < 1e-6 {
        return None;
    }

    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    Some((1.0 - v - w, v, w))
}

pub fn inside(bary: (f32, f32, f32)) -> bool {
    bary.0 >= 0.0 && bary.1 >= 0.0 && bary.2 >= 0.0
}

pub fn interpolate_depth(points: &[RasterPoint; 3], bary: (f32, f32, f32)) -> f32 {
    let (u, v, w) = bary;
    points[0].z * u + points[1].z * v + points[2].z * w
}

pub fn interpolate_color(points: &[RasterPoint; 3], bary: (f32, f32, f32)) -> Vec3<f32> {
    let (u, v, w) = bary;
    points[0].color * u + points[1].color * v + points[2].color * w
}

pub fn interpolate_normal(points: &[RasterPoint; 3], bary: (f32, f32, f32)) -> Vec3<f32> {
    let (u, v, w) = bary;
    points[0].normal * u + points[1].normal * v + points[2].normal * w
}

/// Screen-space bounding box clamped to the viewport.
pub fn bounding_box(
    vertices: &[Vec2<f32>; 3],
    width: usize,
    height: usize,
) -> (usize, usize, usize, usize) {
    let min_x = vertices.iter().map(|v| v.x).fold(f32::INFINITY, f32::min);
    let max_x = vertices.iter().map(|v| v.x).fold(f32::NEG_INFINITY, f32::max);
    let min_y = vertices.iter().map(|v| v.y).fold(f32::INFINITY, f32::min);
    let max_y = vertices.iter().map(|v| v.y).fold(f32::NEG_INFINITY, f32::max);

    let clamp_x = |v: f32| (v.max(0.0) as usize).min(width.saturating_sub(1));
    let clamp_y = |v: f32| (v.max(0.0) as usize).min(height.saturating_sub(1));

    (
        clamp_x(min_x.floor()),
        clamp_y(min_y.floor()),
        clamp_x(max_x.ceil()),
        clamp_y(max_y.ceil()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> [Vec2<f32>; 3] {
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(0.0, 4.0),
        ]
    }

    #[test]
    fn vertices_have_unit_weights() {
        let t = tri();
        let (u, v, w) = barycentric(&t, &t[0]).unwrap();
        assert!((u - 1.0).abs() < 1e-6 && v.abs() < 1e-6 && w.abs() < 1e-6);
        let (u, v, _) = barycentric(&t, &t[1]).unwrap();
        assert!(u.abs() < 1e-6 && (v - 1.0).abs() < 1e-6);
    }

    #[test]
    fn outside_point_has_negative_weight() {
        let bary = barycentric(&tri(), &Vec2::new(-1.0, -1.0)).unwrap();
        assert!(!inside(bary));
        assert!(inside(barycentric(&tri(), &Vec2::new(1.0, 1.0)).unwrap()));
    }

    #[test]
    fn degenerate_triangle_yields_none() {
        let t = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 2.0),
        ];
        assert!(barycentric(&t, &Vec2::new(0.5, 0.5)).is_none());
    }

    #[test]
    fn bbox_is_clamped_to_viewport() {
        let t = [
            Vec2::new(-3.0, 2.0),
            Vec2::new(10.0, 2.0),
            Vec2::new(1.0, 99.0),
        ];
        let (min_x, min_y, max_x, max_y) = bounding_box(&t, 8, 8);
        assert_eq!((min_x, min_y, max_x, max_y), (0, 2, 7, 7));
    }
}
