//! Shader compilation and program linking
//!
//! Builds a linked OpenGL program from fixed GLSL source strings, following
//! RAII patterns for the program object

use std::fmt;
use std::rc::Rc;

use glow::HasContext;
use thiserror::Error;

/// Pipeline stage a shader source belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Positions geometry
    Vertex,
    /// Colors pixels
    Fragment,
}

impl ShaderStage {
    fn gl_type(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

/// Shader build errors
#[derive(Error, Debug)]
pub enum ShaderError {
    /// The driver refused to allocate a shader or program object
    #[error("Failed to create {0} object: {1}")]
    CreateFailed(&'static str, String),

    /// Stage compilation failed; carries the driver's full info log
    #[error("Compilation of {stage} shader failed:\n{log}")]
    Compile {
        /// Stage that failed to compile
        stage: ShaderStage,
        /// Driver diagnostic log, verbatim
        log: String,
    },
}

/// Result alias for shader operations
pub type ShaderResult<T> = Result<T, ShaderError>;

/// Linked shader program with RAII cleanup
pub struct ShaderProgram {
    gl: Rc<glow::Context>,
    program: glow::Program,
}

impl ShaderProgram {
    /// Compile both stages and link them into one program
    ///
    /// Compile failures are fatal and never retried. Link status is not
    /// fatal: a failed link is surfaced at warn level and the handle is
    /// returned as-is. The program is active and the intermediate shader
    /// objects are already deleted when this returns.
    pub fn from_sources(
        gl: Rc<glow::Context>,
        vertex_src: &str,
        fragment_src: &str,
    ) -> ShaderResult<Self> {
        let vertex = compile_stage(&gl, ShaderStage::Vertex, vertex_src)?;
        let fragment = compile_stage(&gl, ShaderStage::Fragment, fragment_src)?;

        let program = unsafe {
            let program = gl
                .create_program()
                .map_err(|e| ShaderError::CreateFailed("program", e))?;
            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                log::warn!(
                    "Shader program link failed, handle kept: {}",
                    gl.get_program_info_log(program)
                );
            }

            gl.use_program(Some(program));

            // The linked program holds its own copies of both stages
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            program
        };

        log::info!("Shader program compiled and linked");

        Ok(Self { gl, program })
    }

    /// Activate this program for subsequent draw calls
    pub fn bind(&self) {
        unsafe { self.gl.use_program(Some(self.program)) };
    }

    /// Raw program handle
    pub fn handle(&self) -> glow::Program {
        self.program
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { self.gl.delete_program(self.program) };
    }
}

fn compile_stage(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> ShaderResult<glow::Shader> {
    unsafe {
        let shader = gl
            .create_shader(stage.gl_type())
            .map_err(|e| ShaderError::CreateFailed("shader", e))?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(ShaderError::Compile { stage, log });
        }

        Ok(shader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_maps_to_gl_shader_type() {
        assert_eq!(ShaderStage::Vertex.gl_type(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_type(), glow::FRAGMENT_SHADER);
    }

    #[test]
    fn compile_error_carries_full_driver_log() {
        let log = "0:3(1): error: syntax error, unexpected IDENTIFIER".repeat(20);
        let err = ShaderError::Compile {
            stage: ShaderStage::Vertex,
            log: log.clone(),
        };
        let rendered = err.to_string();
        assert!(rendered.starts_with("Compilation of vertex shader failed:\n"));
        // The log is never truncated to a fixed buffer
        assert!(rendered.contains(&log));
    }

    #[test]
    fn fragment_stage_named_in_diagnostics() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: String::from("bad"),
        };
        assert!(err.to_string().contains("fragment shader"));
    }
}
