//! Static triangle geometry upload
//!
//! GPU-resident vertex buffer and vertex array descriptor following RAII
//! patterns; the data is written once at creation and never mutated

use std::mem;
use std::rc::Rc;

use glow::HasContext;
use thiserror::Error;

/// Triangle corners in normalized device coordinates, 3 floats per vertex
pub const TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0, // bottom left
    0.5, -0.5, 0.0, // bottom right
    0.0, 0.5, 0.0, // top
];

/// Components in the position attribute (vec3)
const POSITION_COMPONENTS: i32 = 3;

/// Geometry upload errors
#[derive(Error, Debug)]
pub enum MeshError {
    /// The driver refused to allocate a buffer or vertex array object
    #[error("Failed to create {0} object: {1}")]
    CreateFailed(&'static str, String),
}

/// Result alias for geometry operations
pub type MeshResult<T> = Result<T, MeshError>;

/// Static triangle with its vertex format descriptor
///
/// Owns one vertex array object and one vertex buffer object; both are
/// released exactly once on drop, which must happen while the creating
/// context is still alive.
pub struct TriangleMesh {
    gl: Rc<glow::Context>,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    vertex_count: i32,
}

impl TriangleMesh {
    /// Upload the triangle into a fresh buffer and describe its layout
    pub fn new(gl: Rc<glow::Context>) -> MeshResult<Self> {
        let (vao, vbo) = unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(|e| MeshError::CreateFailed("vertex array", e))?;
            let vbo = gl
                .create_buffer()
                .map_err(|e| MeshError::CreateFailed("buffer", e))?;

            // The VAO must be bound while the attribute pointer is declared
            // so it records the VBO association.
            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&TRIANGLE_VERTICES),
                glow::STATIC_DRAW,
            );
            gl.vertex_attrib_pointer_f32(
                0,
                POSITION_COMPONENTS,
                glow::FLOAT,
                false,
                POSITION_COMPONENTS * mem::size_of::<f32>() as i32,
                0,
            );
            gl.enable_vertex_attrib_array(0);

            // Safe to unbind: the VAO keeps the buffer association made above
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);

            (vao, vbo)
        };

        log::info!(
            "Uploaded {} vertices into a static vertex buffer",
            TRIANGLE_VERTICES.len() / POSITION_COMPONENTS as usize
        );

        Ok(Self {
            gl,
            vao,
            vbo,
            vertex_count: (TRIANGLE_VERTICES.len() / POSITION_COMPONENTS as usize) as i32,
        })
    }

    /// Bind the vertex format for drawing
    pub fn bind(&self) {
        unsafe { self.gl.bind_vertex_array(Some(self.vao)) };
    }

    /// Number of vertices to draw, non-indexed
    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }
}

impl Drop for TriangleMesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_is_exactly_nine_floats_in_order() {
        assert_eq!(
            TRIANGLE_VERTICES,
            [-0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.0, 0.5, 0.0]
        );
    }

    #[test]
    fn triangle_is_three_vec3_vertices() {
        assert_eq!(TRIANGLE_VERTICES.len() % POSITION_COMPONENTS as usize, 0);
        assert_eq!(TRIANGLE_VERTICES.len() / POSITION_COMPONENTS as usize, 3);
    }

    #[test]
    fn upload_bytes_are_tightly_packed() {
        let bytes: &[u8] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        assert_eq!(bytes.len(), 9 * mem::size_of::<f32>());
        // Stride equals one vec3, no padding between vertices
        assert_eq!(
            POSITION_COMPONENTS as usize * mem::size_of::<f32>(),
            bytes.len() / 3
        );
    }

    #[test]
    fn all_corners_are_inside_ndc() {
        assert!(TRIANGLE_VERTICES.iter().all(|c| (-1.0..=1.0).contains(c)));
    }
}
