pub mod gl;
#[macro_use]
pub mod gl_errors;
pub mod context;
pub mod fps_counter;
pub mod mesh;
pub mod shader;
pub mod triangle;
