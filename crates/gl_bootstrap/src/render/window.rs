//! Window management using GLFW
//!
//! Provides cross-platform window creation with an OpenGL 3.3 core profile
//! context and event handling

use std::rc::Rc;

use glfw::Context as GlfwContext;
use glow::HasContext;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW itself could not be initialized
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// The OS refused the window or the requested context version
    #[error("Window creation failed")]
    CreationFailed,
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Fixed window parameters applied at creation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Initial window width in screen coordinates
    pub width: u32,
    /// Initial window height in screen coordinates
    pub height: u32,
    /// Window title
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "OpenGL Template".to_string(),
        }
    }
}

/// GLFW window wrapper owning the OpenGL context and the loaded entry points
///
/// The context is made current on the creating thread and stays current for
/// the window's lifetime. Dropping the window destroys the context and tears
/// down GLFW, so it must outlive every GPU object handle.
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    gl: Rc<glow::Context>,
}

impl Window {
    /// Create the window, make its context current, and load the GL entry points
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| WindowError::InitializationFailed)?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

        let (mut window, events) = glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(WindowError::CreationFailed)?;

        window.make_current();
        window.set_key_polling(true);
        window.set_framebuffer_size_polling(true);

        // A context that cannot supply core 3.3 entry points already failed
        // at create_window; loading through the GLFW proc loader cannot fail
        // past this point.
        let gl = unsafe {
            glow::Context::from_loader_function(|name| window.get_proc_address(name) as *const _)
        };
        let gl = Rc::new(gl);

        // Initial viewport matches the real framebuffer, which on high-DPI
        // displays differs from the requested window size.
        let (fb_width, fb_height) = window.get_framebuffer_size();
        unsafe { gl.viewport(0, 0, fb_width, fb_height) };

        log::info!(
            "Created {}x{} window \"{}\" with OpenGL 3.3 core context",
            config.width,
            config.height,
            config.title
        );

        Ok(Self {
            glfw,
            window,
            events,
            gl,
        })
    }

    /// Shared handle to the loaded OpenGL context
    pub fn gl(&self) -> Rc<glow::Context> {
        Rc::clone(&self.gl)
    }

    /// Check if the window should close
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Set whether the window should close
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Whether `key` is currently held down
    pub fn key_pressed(&self, key: glfw::Key) -> bool {
        self.window.get_key(key) == glfw::Action::Press
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Deliver pending OS events to the event receiver
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Drain events received since the last poll
    pub fn flush_events(&self) -> glfw::FlushedMessages<(f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events)
    }

    /// Current framebuffer size in pixels
    pub fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    /// Re-apply the drawable viewport, in framebuffer pixels
    pub fn resize_viewport(&self, width: i32, height: i32) {
        unsafe { self.gl.viewport(0, 0, width, height) };
        log::debug!("Viewport resized to {}x{}", width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_fixed_surface() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.title, "OpenGL Template");
    }

    #[test]
    fn window_errors_render_one_line_diagnostics() {
        assert_eq!(
            WindowError::InitializationFailed.to_string(),
            "GLFW initialization failed"
        );
        assert_eq!(
            WindowError::CreationFailed.to_string(),
            "Window creation failed"
        );
    }
}
