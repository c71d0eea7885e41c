//! Triangle meshes.
//!
//! A [`Mesh`] is an ordered vertex list plus faces that reference vertices
//! by zero-based index. The renderer reads it and never modifies it.

use std::io::BufRead;
use std::path::Path;

use crate::error::{LoadError, RenderError};
use crate::math::Vec3;

/// One triangle of a mesh.
///
/// Texture and normal indices are kept when the source provides them but
/// play no part in flat shading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub vertices: [usize; 3],
    pub texcoords: Option<[usize; 3]>,
    pub normals: Option<[usize; 3]>,
}

impl Face {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self {
            vertices: [a, b, c],
            texcoords: None,
            normals: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

// Counter-clockwise seen from outside, so every normal points outward.
const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

const CUBE_FACES: [Face; 12] = [
    // Front (+z)
    Face::new(4, 5, 6),
    Face::new(4, 6, 7),
    // Back (-z)
    Face::new(1, 0, 3),
    Face::new(1, 3, 2),
    // Right (+x)
    Face::new(5, 1, 2),
    Face::new(5, 2, 6),
    // Left (-x)
    Face::new(0, 4, 7),
    Face::new(0, 7, 3),
    // Top (+y)
    Face::new(7, 6, 2),
    Face::new(7, 2, 3),
    // Bottom (-y)
    Face::new(0, 1, 5),
    Face::new(0, 5, 4),
];

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// A 2x2x2 cube centered on the origin.
    pub fn cube() -> Self {
        Self::new(CUBE_VERTICES.to_vec(), CUBE_FACES.to_vec())
    }

    /// The unit square in the z = 0 plane, facing +z, as two triangles.
    pub fn unit_square() -> Self {
        Self::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![Face::new(0, 1, 2), Face::new(0, 2, 3)],
        )
    }

    /// Load every model in an OBJ file into one mesh.
    ///
    /// Polygons are triangulated as fans; materials are ignored.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let (models, _materials) = tobj::load_obj(path.as_ref(), &Self::load_options())?;
        let mesh = Self::from_models(models)?;
        log::info!(
            "Loaded {}: {} vertices, {} faces",
            path.as_ref().display(),
            mesh.vertices.len(),
            mesh.faces.len()
        );
        Ok(mesh)
    }

    /// Like [`Mesh::from_obj`], reading OBJ text from `reader`. `mtllib`
    /// references are not followed.
    pub fn from_obj_reader<R: BufRead>(reader: &mut R) -> Result<Self, LoadError> {
        let (models, _materials) = tobj::load_obj_buf(reader, &Self::load_options(), |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })?;
        Self::from_models(models)
    }

    fn load_options() -> tobj::LoadOptions {
        tobj::LoadOptions {
            triangulate: true,
            single_index: false,
            ..Default::default()
        }
    }

    fn from_models(models: Vec<tobj::Model>) -> Result<Self, LoadError> {
        if models.is_empty() {
            return Err(LoadError::NoModels);
        }

        let mut mesh = Mesh::default();
        for model in models {
            let source = model.mesh;
            if source.indices.len() % 3 != 0 {
                return Err(LoadError::NonTriangularFace { model: model.name });
            }

            // Each model indexes its own positions; shift them past earlier models.
            let base = mesh.vertices.len();
            mesh.vertices.extend(
                source
                    .positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );

            let triple = |indices: &[u32], face: usize| {
                [
                    indices[face * 3] as usize,
                    indices[face * 3 + 1] as usize,
                    indices[face * 3 + 2] as usize,
                ]
            };
            let has_texcoords = source.texcoord_indices.len() == source.indices.len();
            let has_normals = source.normal_indices.len() == source.indices.len();

            for face in 0..source.indices.len() / 3 {
                let [a, b, c] = triple(&source.indices, face);
                mesh.faces.push(Face {
                    vertices: [base + a, base + b, base + c],
                    texcoords: has_texcoords.then(|| triple(&source.texcoord_indices, face)),
                    normals: has_normals.then(|| triple(&source.normal_indices, face)),
                });
            }
        }
        Ok(mesh)
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn add_vertex(&mut self, vertex: Vec3) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Check that every face index resolves into the vertex list.
    pub fn validate(&self) -> Result<(), RenderError> {
        let vertex_count = self.vertices.len();
        for (face, f) in self.faces.iter().enumerate() {
            if let Some(&index) = f.vertices.iter().find(|&&i| i >= vertex_count) {
                return Err(RenderError::InvalidMeshReference {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// The three vertex positions of `face`, or None if an index is out of range.
    pub fn face_vertices(&self, face: &Face) -> Option<[Vec3; 3]> {
        let [a, b, c] = face.vertices;
        Some([
            *self.vertices.get(a)?,
            *self.vertices.get(b)?,
            *self.vertices.get(c)?,
        ])
    }

    /// A copy rotated `pitch` radians around X, then `yaw` around Y.
    pub fn rotated(&self, pitch: f32, yaw: f32) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|v| v.rotate_x(pitch).rotate_y(yaw))
                .collect(),
            faces: self.faces.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::face_normal;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    #[test]
    fn cube_normals_point_outward() {
        let cube = Mesh::cube();
        assert!(cube.validate().is_ok());
        for face in cube.faces() {
            let [v0, v1, v2] = cube.face_vertices(face).unwrap();
            let normal = face_normal(v0, v1, v2).unwrap();
            let center = (v0 + v1 + v2) / 3.0;
            assert!(normal.dot(center) > 0.0, "{face:?} faces inward");
        }
    }

    #[test]
    fn unit_square_faces_viewer() {
        let square = Mesh::unit_square();
        for face in square.faces() {
            let [v0, v1, v2] = square.face_vertices(face).unwrap();
            assert_eq!(face_normal(v0, v1, v2), Some(Vec3::Z));
        }
    }

    #[test]
    fn validate_reports_first_bad_index() {
        let mut mesh = Mesh::unit_square();
        mesh.add_face(Face::new(1, 7, 2));
        match mesh.validate() {
            Err(RenderError::InvalidMeshReference {
                face,
                index,
                vertex_count,
            }) => {
                assert_eq!((face, index, vertex_count), (2, 7, 4));
            }
            other => panic!("expected invalid reference, got {other:?}"),
        }
        assert_eq!(mesh.face_vertices(&Face::new(1, 7, 2)), None);
    }

    #[test]
    fn add_vertex_returns_its_index() {
        let mut mesh = Mesh::default();
        assert_eq!(mesh.add_vertex(Vec3::ZERO), 0);
        assert_eq!(mesh.add_vertex(Vec3::ONE), 1);
    }

    #[test]
    fn loads_and_triangulates_obj_text() {
        let obj = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let mesh = Mesh::from_obj_reader(&mut Cursor::new(obj)).unwrap();
        assert_eq!(mesh.vertices().len(), 4);
        assert_eq!(mesh.faces().len(), 2);
        assert!(mesh.validate().is_ok());
        for face in mesh.faces() {
            let [v0, v1, v2] = mesh.face_vertices(face).unwrap();
            assert_eq!(face_normal(v0, v1, v2), Some(Vec3::Z));
        }
    }

    #[test]
    fn loads_obj_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tri.obj");
        std::fs::write(&path, "v 0 0 0\nv 2 0 0\nv 0 2 1\nf 1 2 3\n").unwrap();

        let mesh = Mesh::from_obj(&path).unwrap();
        assert_eq!(mesh.faces().len(), 1);
        let zs: Vec<f32> = mesh.vertices().iter().map(|v| v.z).collect();
        assert!(zs.contains(&1.0));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(matches!(
            Mesh::from_obj("/nonexistent/model.obj"),
            Err(LoadError::Obj(_))
        ));
    }

    #[test]
    fn rotation_keeps_faces_and_moves_vertices() {
        let square = Mesh::unit_square();
        let turned = square.rotated(0.0, std::f32::consts::PI);
        assert_eq!(turned.faces(), square.faces());
        assert_relative_eq!(turned.vertices()[1].x, -1.0, epsilon = 1e-6);
    }
}
