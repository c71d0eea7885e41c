//! Flat shading and back-face culling.
//!
//! One intensity is computed per face from its geometric normal and a single
//! directional light. Faces that point away from the light are culled; the
//! light points out of the screen by default, so this is also the back-face
//! test.

use crate::math::Vec3;

/// A directional light, stored as a unit vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    direction: Vec3,
}

impl DirectionalLight {
    /// Out of the screen, toward the viewer.
    pub const TOWARD_VIEWER: Self = Self { direction: Vec3::Z };

    /// Create a new directional light along `direction`.
    /// The direction is normalized; a zero vector falls back to
    /// [`DirectionalLight::TOWARD_VIEWER`].
    pub fn new(direction: Vec3) -> Self {
        match direction.try_normalize() {
            Some(direction) => Self { direction },
            None => {
                log::warn!("Zero light direction {direction:?}, using {:?}", Vec3::Z);
                Self::TOWARD_VIEWER
            }
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Dot product of a unit face normal with the light.
    ///
    /// Negative means the face points away; for unit normals the result lies
    /// in `[-1, 1]`.
    #[inline]
    pub fn intensity(&self, normal: Vec3) -> f32 {
        normal.dot(self.direction)
    }

    /// Shade a face given its three model-space vertices.
    pub fn shade_face(&self, [v0, v1, v2]: [Vec3; 3]) -> FaceShade {
        let Some(normal) = face_normal(v0, v1, v2) else {
            return FaceShade::Degenerate;
        };
        let intensity = self.intensity(normal);
        if intensity < 0.0 {
            FaceShade::Culled
        } else {
            FaceShade::Lit(intensity)
        }
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::TOWARD_VIEWER
    }
}

/// Outcome of shading one face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FaceShade {
    /// Visible, with intensity in `[0, 1]`.
    Lit(f32),
    /// Faces away from the light.
    Culled,
    /// Zero area, so no normal exists.
    Degenerate,
}

/// Unit normal of the triangle `v0, v1, v2`: `(v1 - v0) x (v2 - v0)`.
///
/// Counter-clockwise winding, seen from the side the normal points to, is the
/// front. Returns `None` for zero-area triangles.
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Option<Vec3> {
    (v1 - v0).cross(v2 - v0).try_normalize()
}

/// Map an intensity in `[0, 1]` to a channel level by scaling to 255 and
/// truncating.
#[inline]
pub fn grey_level(intensity: f32) -> u32 {
    (intensity * 255.0) as u32
}
