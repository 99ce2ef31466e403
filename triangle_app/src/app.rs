// triangle_app/src/app.rs
// Application state and render loop for the triangle bootstrap

use gl_bootstrap::render::{
    MeshError, ShaderError, ShaderProgram, TriangleMesh, Window, WindowConfig, WindowError,
};
use glfw::{Key, WindowEvent};
use glow::HasContext;
use thiserror::Error;

/// Background clear color, RGBA
const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

const VERTEX_SHADER_SRC: &str = include_str!("../shaders/triangle.vert");
const FRAGMENT_SHADER_SRC: &str = include_str!("../shaders/triangle.frag");

/// Application-level errors
///
/// Every variant is a fatal setup failure; nothing in the render loop itself
/// can fail.
#[derive(Error, Debug)]
pub enum AppError {
    /// Window or context setup failed
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// Shader compilation failed
    #[error("Shader error: {0}")]
    Shader(#[from] ShaderError),

    /// Geometry upload failed
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
}

/// Owns every GPU handle for the process lifetime
///
/// Field order fixes the teardown sequence: the mesh and shader release
/// their GL objects while the context is still alive, the window and context
/// tear down last. This holds on error paths too.
pub struct TriangleApp {
    mesh: TriangleMesh,
    shader: ShaderProgram,
    window: Window,
}

impl TriangleApp {
    /// Create the window, build the shader program, and upload the triangle
    pub fn new() -> Result<Self, AppError> {
        let window = Window::new(&WindowConfig::default())?;
        let gl = window.gl();

        let shader =
            ShaderProgram::from_sources(gl.clone(), VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC)?;
        let mesh = TriangleMesh::new(gl)?;

        Ok(Self {
            mesh,
            shader,
            window,
        })
    }

    /// Drive the render loop until the window reports a close request
    pub fn run(&mut self) {
        let gl = self.window.gl();

        while !self.window.should_close() {
            self.process_input();

            unsafe {
                gl.clear_color(
                    CLEAR_COLOR[0],
                    CLEAR_COLOR[1],
                    CLEAR_COLOR[2],
                    CLEAR_COLOR[3],
                );
                gl.clear(glow::COLOR_BUFFER_BIT);
            }

            self.shader.bind();
            self.mesh.bind();
            unsafe { gl.draw_arrays(glow::TRIANGLES, 0, self.mesh.vertex_count()) };

            self.window.swap_buffers();
            self.window.poll_events();
            self.handle_events();
        }

        log::info!("Close requested, leaving render loop");
    }

    /// Per-frame input check: escape requests window close
    fn process_input(&mut self) {
        if self.window.key_pressed(Key::Escape) {
            self.window.set_should_close(true);
        }
    }

    /// Apply pending window events; only framebuffer resizes matter here
    fn handle_events(&mut self) {
        let resizes: Vec<(i32, i32)> = self
            .window
            .flush_events()
            .filter_map(|(_, event)| match event {
                WindowEvent::FramebufferSize(width, height) => Some((width, height)),
                _ => None,
            })
            .collect();

        for (width, height) in resizes {
            self.window.resize_viewport(width, height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_color_is_the_fixed_background() {
        assert_eq!(CLEAR_COLOR, [0.2, 0.3, 0.3, 1.0]);
    }

    #[test]
    fn vertex_shader_targets_gl33_core_attribute_zero() {
        assert!(VERTEX_SHADER_SRC.starts_with("#version 330 core"));
        assert!(VERTEX_SHADER_SRC.contains("layout(location = 0) in vec3"));
    }

    #[test]
    fn fragment_shader_outputs_fixed_orange() {
        assert!(FRAGMENT_SHADER_SRC.starts_with("#version 330 core"));
        assert!(FRAGMENT_SHADER_SRC.contains("vec4(1.0, 0.5, 0.2, 1.0)"));
    }

    #[test]
    fn setup_failures_report_their_subsystem() {
        let err = AppError::Window(WindowError::CreationFailed);
        assert_eq!(err.to_string(), "Window error: Window creation failed");
    }
}
