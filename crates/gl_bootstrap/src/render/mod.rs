//! Rendering primitives: window/context, shader program, and geometry
//!
//! Each wrapper owns exactly one GPU or OS resource and releases it on drop.

pub mod mesh;
pub mod shader;
pub mod window;

pub use mesh::{MeshError, MeshResult, TriangleMesh, TRIANGLE_VERTICES};
pub use shader::{ShaderError, ShaderProgram, ShaderResult, ShaderStage};
pub use window::{Window, WindowConfig, WindowError, WindowResult};
