//! Minimal OpenGL triangle application
//!
//! Opens an 800x600 window, renders a static orange triangle every frame,
//! and exits when the window closes or escape is pressed.

mod app;

fn main() {
    gl_bootstrap::logging::init();

    if let Err(e) = run() {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), app::AppError> {
    let mut app = app::TriangleApp::new()?;
    app.run();
    Ok(())
}
