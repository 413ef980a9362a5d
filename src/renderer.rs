//! Fixed-function-style software pipeline: cull, transform, project,
//! rasterize with depth test and optional Lambert lighting.

use cgmath::{
    EuclideanSpace, InnerSpace, Matrix, Matrix4 as Mat4, Point3, SquareMatrix, Vector2 as Vec2,
    Vector3 as Vec3,
};

use crate::camera::Camera;
use crate::color::Rgb;
use crate::framebuffer::FrameBuffer;
use crate::rasterizer;
use crate::vertex::{RasterPoint, Triangle};

#[derive(Clone, Copy)]
pub struct Light {
    pub direction: Vec3<f32>,
    pub color: Vec3<f32>,
    pub ambient: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            direction: Vec3::new(1.0, -0.6, -0.3).normalize(),
            color: Vec3::new(1.0, 1.0, 1.0),
            ambient: 0.25,
        }
    }
}

pub struct Renderer {
    pub camera: Camera,
    pub framebuffer: FrameBuffer,
    pub light: Light,
    /// Lambert shading when set, flat vertex colors otherwise. The demos
    /// flip this with the `l` key.
    pub lighting: bool,
    /// Backface culling. Flattened shadow geometry has no meaningful
    /// facing, so its pass turns this off.
    pub cull: bool,
    /// Opacity of the next draw; below 1.0 pixels blend over the target.
    pub alpha: f32,
}

impl Renderer {
    pub fn new(camera: Camera, width: usize, height: usize) -> Self {
        Self {
            camera,
            framebuffer: FrameBuffer::new(width, height),
            light: Light::default(),
            lighting: false,
            cull: true,
            alpha: 1.0,
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.framebuffer.clear(color);
    }

    pub fn draw_triangles(&mut self, triangles: &[Triangle], model: &Mat4<f32>) {
        let normal_matrix = match model.invert() {
            Some(inv) => inv.transpose(),
            None => Mat4::identity(),
        };
        let view_proj = self.camera.view_proj_mat();
        let mvp = view_proj * model;

        for triangle in triangles {
            // backface cull in world space
            let world_pos = (model * triangle.vertices[0].pos.extend(1.0)).truncate();
            let world_normal = (normal_matrix * triangle.normal.extend(0.0)).truncate();
            let view_dir = self.camera.eye.to_vec() - world_pos;
            if self.cull && view_dir.dot(world_normal) <= 0.0 {
                continue;
            }

            let Some(points) = self.project(triangle, &mvp, &normal_matrix) else {
                continue;
            };
            self.rasterize(&points);
        }
    }

    /// Clip-space transform and viewport mapping. Triangles touching the
    /// near plane are rejected whole rather than clipped.
    fn project(
        &self,
        triangle: &Triangle,
        mvp: &Mat4<f32>,
        normal_matrix: &Mat4<f32>,
    ) -> Option<[RasterPoint; 3]> {
        let w = self.framebuffer.width as f32;
        let h = self.framebuffer.height as f32;

        let mut points = [RasterPoint {
            pos: Vec2::new(0.0, 0.0),
            color: Vec3::new(0.0, 0.0, 0.0),
            normal: Vec3::new(0.0, 1.0, 0.0),
            z: 0.0,
        }; 3];

        for (point, vertex) in points.iter_mut().zip(triangle.vertices.iter()) {
            let clip = mvp * vertex.pos.extend(1.0);
            if clip.w <= 1e-6 {
                return None;
            }
            let ndc = clip / clip.w;

            point.pos = Vec2::new((ndc.x + 1.0) * 0.5 * w, h - (ndc.y + 1.0) * 0.5 * h);
            point.z = (ndc.z + 1.0) * 0.5;
            point.color = vertex.color;
            point.normal = (normal_matrix * vertex.normal.extend(0.0)).truncate();
        }
        Some(points)
    }

    fn rasterize(&mut self, points: &[RasterPoint; 3]) {
        let screen = [points[0].pos, points[1].pos, points[2].pos];
        let (min_x, min_y, max_x, max_y) =
            rasterizer::bounding_box(&screen, self.framebuffer.width, self.framebuffer.height);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let Some(bary) = rasterizer::barycentric(&screen, &p) else {
                    continue;
                };
                if !rasterizer::inside(bary) {
                    continue;
                }

                let depth = rasterizer::interpolate_depth(points, bary);
                let color = rasterizer::interpolate_color(points, bary);
                let shaded = if self.lighting {
                    let normal = rasterizer::interpolate_normal(points, bary).normalize();
                    let lambert = (-self.light.direction).dot(normal).max(0.0);
                    let lit = self.light.ambient + (1.0 - self.light.ambient) * lambert;
                    Vec3::new(
                        color.x * self.light.color.x * lit,
                        color.y * self.light.color.y * lit,
                        color.z * self.light.color.z * lit,
                    )
                } else {
                    color
                };

                if self.alpha < 1.0 {
                    self.framebuffer.blend_pixel(x, y, pack(shaded), depth, self.alpha);
                } else {
                    self.framebuffer.put_pixel(x, y, pack(shaded), depth);
                }
            }
        }
    }
}

/// Mirror across the horizontal plane y = plane_y.
pub fn reflection_matrix(plane_y: f32) -> Mat4<f32> {
    Mat4::from_translation(Vec3::new(0.0, plane_y, 0.0))
        * Mat4::from_nonuniform_scale(1.0, -1.0, 1.0)
        * Mat4::from_translation(Vec3::new(0.0, -plane_y, 0.0))
}

/// Flatten geometry onto the plane y = plane_y as seen from a point light:
/// the planar projection `dot * I - outer(light, plane)` with
/// plane (0, 1, 0, -plane_y).
pub fn shadow_matrix(light: Point3<f32>, plane_y: f32) -> Mat4<f32> {
    let dot = light.y - plane_y;
    #[rustfmt::skip]
    let mat = Mat4::new(
        dot,                0.0,                0.0,                0.0,
        -light.x,           dot - light.y,      -light.z,           -1.0,
        0.0,                0.0,                dot,                0.0,
        plane_y * light.x,  plane_y * light.y,  plane_y * light.z,  dot + plane_y,
    );
    mat
}

fn pack(color: Vec3<f32>) -> u32 {
    Rgb::new(
        (color.x.clamp(0.0, 1.0) * 255.0) as u8,
        (color.y.clamp(0.0, 1.0) * 255.0) as u8,
        (color.z.clamp(0.0, 1.0) * 255.0) as u8,
    )
    .to_argb()
}
