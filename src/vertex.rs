use cgmath::{InnerSpace, Vector2 as Vec2, Vector3 as Vec3, Zero};

/// Vertex with a color attribute, interpolated across the triangle.
#[derive(Debug, Clone, Copy)]
pub struct ColoredVertex {
    pub pos: Vec3<f32>,
    pub color: Vec3<f32>,
    pub normal: Vec3<f32>,
}

impl Default for ColoredVertex {
    fn default() -> Self {
        ColoredVertex {
            pos: Vec3::zero(),
            color: Vec3::new(0.8, 0.8, 0.8),
            normal: Vec3::new(0.0, 1.0, 0.0),
        }
    }
}

/// Screen-space point after projection, carrying the interpolants.
#[derive(Debug, Clone, Copy)]
pub struct RasterPoint {
    pub pos: Vec2<f32>,
    pub color: Vec3<f32>,
    pub normal: Vec3<f32>,
    pub z: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub vertices: [ColoredVertex; 3],
    pub normal: Vec3<f32>,
}

impl Triangle {
    pub fn new(v0: ColoredVertex, v1: ColoredVertex, v2: ColoredVertex) -> Self {
        Self {
            normal: face_normal(&v0, &v1, &v2),
            vertices: [v0, v1, v2],
        }
    }

    pub fn center(&self) -> Vec3<f32> {
        (self.vertices[0].pos + self.vertices[1].pos + self.vertices[2].pos) / 3.0
    }
}

fn face_normal(v0: &ColoredVertex, v1: &ColoredVertex, v2: &ColoredVertex) -> Vec3<f32> {
    let edge1 = v1.pos - v0.pos;
    let edge2 = v2.pos - v0.pos;
    let cross = edge1.cross(edge2);
    if cross.is_zero() {
        // degenerate; any unit vector avoids NaN downstream
        Vec3::new(0.0, 1.0, 0.0)
    } else {
        cross.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vert(x: f32, y: f32, z: f32) -> ColoredVertex {
        ColoredVertex {
            pos: Vec3::new(x, y, z),
            ..Default::default()
        }
    }

    #[test]
    fn ccw_triangle_in_xy_plane_faces_positive_z() {
        let t = Triangle::new(vert(0.0, 0.0, 0.0), vert(1.0, 0.0, 0.0), vert(0.0, 1.0, 0.0));
        assert!((t.normal - Vec3::new(0.0, 0.0, 1.0)).magnitude() < 1e-6);
    }

    #[test]
    fn degenerate_triangle_has_finite_normal() {
        let t = Triangle::new(vert(0.0, 0.0, 0.0), vert(0.0, 0.0, 0.0), vert(1.0, 1.0, 1.0));
        assert!(t.normal.magnitude().is_finite());
    }

    #[test]
    fn center_is_vertex_mean() {
        let t = Triangle::new(vert(0.0, 0.0, 0.0), vert(3.0, 0.0, 0.0), vert(0.0, 3.0, 0.0));
        assert_eq!(t.center(), Vec3::new(1.0, 1.0, 0.0));
    }
}
