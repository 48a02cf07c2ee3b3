use std::ffi::c_void;

use color_eyre::eyre::eyre;
use glfw::{Action, Context, Glfw, Key, PWindow, WindowHint};

use crate::gl;

use super::GlContext;

pub struct GlfwContext {
    glfw: Glfw,
    window: PWindow,
}

impl GlfwContext {
    pub fn new(width: u32, height: u32, title: &str) -> color_eyre::Result<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| eyre!("failed to initialize GLFW: {e:?}"))?;

        glfw.window_hint(WindowHint::ContextVersion(3, 3));
        glfw.window_hint(WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));

        let (mut window, _) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or_else(|| eyre!("failed to create GLFW window"))?;

        window.make_current();
        window.set_key_polling(true);

        let mut context = GlfwContext { glfw, window };
        gl::load_with(|symbol| context.get_proc_address(symbol));
        if !gl::Viewport::is_loaded() {
            return Err(eyre!("failed to load OpenGL function pointers"));
        }
        log::debug!("loaded OpenGL function pointers");
        Ok(context)
    }
}

impl GlContext for GlfwContext {
    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
        self.glfw.poll_events();
        if self.window.get_key(Key::Escape) == Action::Press {
            self.window.set_should_close(true);
        }
        let (width, height) = self.window.get_framebuffer_size();
        gl!(gl::Viewport(0, 0, width, height));
    }

    fn size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width as u32, height as u32)
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn get_proc_address(&mut self, fn_name: &str) -> *const c_void {
        self.window.get_proc_address(fn_name)
    }
}
