use juego::context::init_gl_context;
use juego::fps_counter::FpsCounter;
use juego::gl;
use juego::mesh::Mesh;
use juego::shader::{Shader, ShaderProgram, ShaderType};
use juego::triangle;

#[macro_use]
extern crate juego;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let mut context = init_gl_context(800, 600, "Juego")?;

    let program = ShaderProgram::from_shaders(&[
        Shader::from_source(triangle::VERTEX_SHADER, ShaderType::Vertex)?,
        Shader::from_source(triangle::FRAGMENT_SHADER, ShaderType::Fragment)?,
    ])?;
    let mesh = Mesh::from_positions(&triangle::VERTICES);

    let [r, g, b, a] = triangle::CLEAR_COLOR;
    gl!(gl::ClearColor(r, g, b, a));

    let mut fps_counter = FpsCounter::new();
    while !context.should_close() {
        gl!(gl::Clear(gl::COLOR_BUFFER_BIT));
        program.set_used();
        mesh.draw(0, triangle::DRAWN_VERTEX_COUNT);
        context.swap_buffers();

        if let Some(fps) = fps_counter.tick() {
            log::debug!("FPS: {:.2}", fps);
        }
    }
    Ok(())
}
