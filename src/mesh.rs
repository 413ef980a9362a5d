//! Geometry for the demo binaries: cube, torus, ground plane, and
//! conversion of an indexed model into renderable triangles.

use std::f32::consts::TAU;

use cgmath::Vector3 as Vec3;

use crate::model::IndexedModel;
use crate::vertex::{ColoredVertex, Triangle};

/// Axis-aligned cube of the given half-extent, one color per face.
pub fn cube(half: f32, face_colors: &[Vec3<f32>; 6]) -> Vec<Triangle> {
    // (normal, two in-plane axes) per face
    let faces: [(Vec3<f32>, Vec3<f32>, Vec3<f32>); 6] = [
        (Vec3::unit_z(), Vec3::unit_x(), Vec3::unit_y()),
        (-Vec3::unit_z(), -Vec3::unit_x(), Vec3::unit_y()),
        (Vec3::unit_x(), -Vec3::unit_z(), Vec3::unit_y()),
        (-Vec3::unit_x(), Vec3::unit_z(), Vec3::unit_y()),
        (Vec3::unit_y(), Vec3::unit_x(), -Vec3::unit_z()),
        (-Vec3::unit_y(), Vec3::unit_x(), Vec3::unit_z()),
    ];

    let mut triangles = Vec::with_capacity(12);
    for (face, &(normal, u, v)) in faces.iter().enumerate() {
        let color = face_colors[face];
        let corner = |su: f32, sv: f32| ColoredVertex {
            pos: (normal + u * su + v * sv) * half,
            color,
            normal,
        };
        let (a, b, c, d) = (
            corner(-1.0, -1.0),
            corner(1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, 1.0),
        );
        triangles.push(Triangle::new(a, b, c));
        triangles.push(Triangle::new(a, c, d));
    }
    triangles
}

/// Torus around the y axis: tube radius `r`, ring radius `big_r`,
/// tessellated into `rings` segments of `nsides` quads each.
pub fn torus(r: f32, big_r: f32, nsides: u32, rings: u32, color: Vec3<f32>) -> Vec<Triangle> {
    let ring_delta = TAU / rings as f32;
    let side_delta = TAU / nsides as f32;

    let vertex_at = |i: u32, j: u32| {
        let theta = i as f32 * ring_delta;
        let phi = j as f32 * side_delta;
        let dist = big_r + r * phi.cos();
        ColoredVertex {
            pos: Vec3::new(theta.cos() * dist, r * phi.sin(), theta.sin() * dist),
            color,
            normal: Vec3::new(
                theta.cos() * phi.cos(),
                phi.sin(),
                theta.sin() * phi.cos(),
            ),
        }
    };

    let mut triangles = Vec::with_capacity((nsides * rings * 2) as usize);
    for i in 0..rings {
        let i1 = (i + 1) % rings;
        for j in 0..nsides {
            let j1 = (j + 1) % nsides;
            let (a, b, c, d) = (
                vertex_at(i, j),
                vertex_at(i1, j),
                vertex_at(i1, j1),
                vertex_at(i, j1),
            );
            // wound so the computed face normal points out of the tube
            triangles.push(Triangle::new(a, c, b));
            triangles.push(Triangle::new(a, d, c));
        }
    }
    triangles
}

/// Checkerboard ground in the y = `y` plane.
pub fn checkerboard_ground(extent: f32, step: f32, y: f32) -> Vec<Triangle> {
    let cells = (2.0 * extent / step) as i32;
    let mut triangles = Vec::new();

    for row in 0..cells {
        for col in 0..cells {
            let shade = if (row + col) % 2 == 0 { 1.0 } else { 0.15 };
            let color = Vec3::new(shade, shade, shade);
            let x0 = -extent + col as f32 * step;
            let z0 = -extent + row as f32 * step;
            let corner = |x: f32, z: f32| ColoredVertex {
                pos: Vec3::new(x, y, z),
                color,
                normal: Vec3::unit_y(),
            };
            let (a, b, c, d) = (
                corner(x0, z0),
                corner(x0, z0 + step),
                corner(x0 + step, z0 + step),
                corner(x0 + step, z0),
            );
            triangles.push(Triangle::new(a, b, c));
            triangles.push(Triangle::new(a, c, d));
        }
    }
    triangles
}

/// Expand a converted model back into triangles; texture coordinates are
/// visualized as color since the pipeline is vertex-colored.
pub fn model_triangles(model: &IndexedModel) -> Vec<Triangle> {
    model
        .indices
        .chunks_exact(3)
        .map(|tri| {
            let verts = [0, 1, 2].map(|k| {
                let v = model.vertices[tri[k] as usize];
                ColoredVertex {
                    pos: Vec3::new(v.pos[0], v.pos[1], v.pos[2]),
                    color: Vec3::new(v.uv[0], v.uv[1], 0.5),
                    normal: Vec3::unit_y(), // replaced by the face normal below
                }
            });
            let mut triangle = Triangle::new(verts[0], verts[1], verts[2]);
            for v in triangle.vertices.iter_mut() {
                v.normal = triangle.normal;
            }
            triangle
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelVertex;
    use cgmath::InnerSpace;

    #[test]
    fn cube_has_twelve_triangles_facing_outward() {
        let colors = [Vec3::new(1.0, 0.0, 0.0); 6];
        let triangles = cube(1.0, &colors);
        assert_eq!(triangles.len(), 12);
        for t in &triangles {
            // face normal and outward center direction agree
            assert!(t.normal.dot(t.center().normalize()) > 0.0);
        }
    }

    #[test]
    fn torus_size_and_bounds() {
        let triangles = torus(0.3, 0.8, 10, 12, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(triangles.len(), 10 * 12 * 2);
        for t in &triangles {
            for v in &t.vertices {
                let radial = Vec3::new(v.pos.x, 0.0, v.pos.z).magnitude();
                assert!(radial <= 0.8 + 0.3 + 1e-4);
                assert!(radial >= 0.8 - 0.3 - 1e-4);
                assert!(v.pos.y.abs() <= 0.3 + 1e-4);
            }
            // winding normal agrees with the analytic tube normal
            let avg = (t.vertices[0].normal + t.vertices[1].normal + t.vertices[2].normal) / 3.0;
            assert!(t.normal.dot(avg) > 0.0);
        }
    }

    #[test]
    fn ground_cell_count() {
        let triangles = checkerboard_ground(5.0, 0.5, 0.0);
        assert_eq!(triangles.len(), 20 * 20 * 2);
    }

    #[test]
    fn model_triangles_follow_indices() {
        let model = IndexedModel {
            vertices: vec![
                ModelVertex { pos: [0.0, 0.0, 0.0], uv: [0.0, 0.0] },
                ModelVertex { pos: [1.0, 0.0, 0.0], uv: [1.0, 0.0] },
                ModelVertex { pos: [0.0, 1.0, 0.0], uv: [0.0, 1.0] },
            ],
            indices: vec![0, 1, 2],
        };
        let triangles = model_triangles(&model);
        assert_eq!(triangles.len(), 1);
        assert_eq!(triangles[0].vertices[1].pos, Vec3::new(1.0, 0.0, 0.0));
    }
}
