use cgmath::{Matrix4 as Mat4, Point3, Rad, Vector3 as Vec3};

/// Perspective projection.
#[derive(Debug)]
pub struct Frustum {
    pub near: f32,
    pub far: f32,
    mat: Mat4<f32>,
}

impl Frustum {
    #[rustfmt::skip]
    pub fn new(near: f32, far: f32, aspect: f32, fovy: Rad<f32>) -> Self {
        let tan_half_fovy = (fovy.0 / 2.0).tan();
        let a = 1.0 / (aspect * tan_half_fovy);
        let b = 1.0 / tan_half_fovy;
        let c = -(far + near) / (far - near);
        let d = -2.0 * far * near / (far - near);

        let mat = Mat4::new(
            a,    0.0,   0.0,   0.0,
            0.0,  b,     0.0,   0.0,
            0.0,  0.0,   c,    -1.0,
            0.0,  0.0,   d,     0.0,
        );

        Self { near, far, mat }
    }

    pub fn mat(&self) -> &Mat4<f32> {
        &self.mat
    }
}

pub struct Camera {
    frustum: Frustum,
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vec3<f32>,
}

impl Camera {
    pub fn new(near: f32, far: f32, aspect: f32, fovy: Rad<f32>) -> Self {
        Self {
            frustum: Frustum::new(near, far, aspect, fovy),
            eye: Point3::new(0.0, 0.0, 5.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vec3::new(0.0, 1.0, 0.0),
        }
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    pub fn set_position(&mut self, eye: Point3<f32>) {
        self.eye = eye;
    }

    /// Place the eye on a circle of the given radius in the y = height plane,
    /// looking at the origin. The demos drive this with an advancing angle.
    pub fn orbit(&mut self, angle: Rad<f32>, radius: f32, height: f32) {
        self.eye = Point3::new(angle.0.sin() * radius, height, angle.0.cos() * radius);
        self.target = Point3::new(0.0, 0.0, 0.0);
    }

    pub fn view_mat(&self) -> Mat4<f32> {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj_mat(&self) -> Mat4<f32> {
        self.frustum.mat * self.view_mat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{EuclideanSpace, InnerSpace, Transform};

    #[test]
    fn view_moves_target_onto_negative_z() {
        let mut camera = Camera::new(0.1, 100.0, 4.0 / 3.0, Rad(std::f32::consts::FRAC_PI_4));
        camera.set_position(Point3::new(0.0, 0.0, 8.0));
        let view = camera.view_mat();
        let t = view.transform_point(camera.target);
        assert!(t.x.abs() < 1e-5);
        assert!(t.y.abs() < 1e-5);
        assert!((t.z + 8.0).abs() < 1e-5);
    }

    #[test]
    fn orbit_keeps_distance() {
        let mut camera = Camera::new(0.1, 100.0, 1.0, Rad(std::f32::consts::FRAC_PI_4));
        camera.orbit(Rad(1.3), 6.0, 2.0);
        let flat = Point3::new(camera.eye.x, 0.0, camera.eye.z);
        assert!((flat.to_vec().magnitude() - 6.0).abs() < 1e-4);
        assert!((camera.eye.y - 2.0).abs() < 1e-6);
    }
}
