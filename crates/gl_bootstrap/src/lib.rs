//! # GL Bootstrap
//!
//! A minimal OpenGL bootstrap library: window and context creation, shader
//! program compilation, and static geometry upload.
//!
//! ## Features
//!
//! - **Window/Context**: GLFW window with an OpenGL 3.3 core profile context
//! - **Shaders**: GLSL compilation and program linking with full driver logs
//! - **Geometry**: GPU-resident vertex buffer plus vertex array descriptor
//! - **RAII Handles**: every GPU object is released exactly once on drop
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_bootstrap::render::{ShaderProgram, TriangleMesh, Window, WindowConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     gl_bootstrap::logging::init();
//!
//!     let mut window = Window::new(&WindowConfig::default())?;
//!     let gl = window.gl();
//!     let shader = ShaderProgram::from_sources(gl.clone(), VS, FS)?;
//!     let mesh = TriangleMesh::new(gl)?;
//!
//!     while !window.should_close() {
//!         // clear, bind, draw, present
//!         window.swap_buffers();
//!         window.poll_events();
//!     }
//!     Ok(())
//! }
//! # const VS: &str = "";
//! # const FS: &str = "";
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod logging;
pub mod render;

/// Common imports for library users
pub mod prelude {
    pub use crate::render::{
        MeshError, ShaderError, ShaderProgram, TriangleMesh, Window, WindowConfig, WindowError,
    };
}
