//! Error types.

use thiserror::Error;

/// Failure of a render pass. A pass that returns an error has not presented
/// anything.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid mesh reference: face {face} uses vertex {index}, mesh has {vertex_count} vertices")]
    InvalidMeshReference {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Failure reported by a host surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("pixel buffer holds {actual} pixels, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("presentation failed: {0}")]
    Present(String),
}

/// Failure loading a mesh from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read OBJ: {0}")]
    Obj(#[from] tobj::LoadError),
    #[error("OBJ contains no models")]
    NoModels,
    #[error("model '{model}' has an index count that is not a multiple of 3")]
    NonTriangularFace { model: String },
}

/// Failure loading a render configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
