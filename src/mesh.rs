use crate::gl;
use crate::gl::types::{GLsizei, GLsizeiptr, GLuint};

/// One VAO/VBO pair holding tightly packed `vec3` positions at
/// attribute location 0, uploaded once with `GL_STATIC_DRAW`.
pub struct Mesh {
    vao: GLuint,
    vbo: GLuint,
    vertex_count: GLsizei,
}

impl Mesh {
    pub fn from_positions(positions: &[f32]) -> Self {
        debug_assert!(positions.len() % 3 == 0);

        let mut vbo: GLuint = 0;
        gl!(gl::GenBuffers(1, &mut vbo));
        gl!(gl::BindBuffer(gl::ARRAY_BUFFER, vbo));

        let mut vao: GLuint = 0;
        gl!(gl::GenVertexArrays(1, &mut vao));
        gl!(gl::BindVertexArray(vao));

        gl!(gl::BufferData(
            gl::ARRAY_BUFFER,
            std::mem::size_of_val(positions) as GLsizeiptr,
            positions.as_ptr() as *const _,
            gl::STATIC_DRAW
        ));
        gl!(gl::VertexAttribPointer(
            0,
            3,
            gl::FLOAT,
            gl::FALSE,
            (3 * std::mem::size_of::<f32>()) as GLsizei,
            std::ptr::null()
        ));
        gl!(gl::EnableVertexAttribArray(0));

        Mesh {
            vao,
            vbo,
            vertex_count: (positions.len() / 3) as GLsizei,
        }
    }

    /// Draws `count` vertices starting at `first` as triangles.
    pub fn draw(&self, first: GLsizei, count: GLsizei) {
        debug_assert!(first + count <= self.vertex_count);
        gl!(gl::BindVertexArray(self.vao));
        gl!(gl::DrawArrays(gl::TRIANGLES, first, count));
    }

    pub fn vertex_count(&self) -> GLsizei {
        self.vertex_count
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        gl!(gl::DeleteBuffers(1, &self.vbo));
        gl!(gl::DeleteVertexArrays(1, &self.vao));
    }
}
