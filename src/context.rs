use std::ffi::c_void;

pub mod glfw;

pub trait GlContext {
    /// Swaps buffers and polls events; also services the per-frame
    /// viewport reset and the Escape-to-exit check.
    fn swap_buffers(&mut self);
    fn size(&self) -> (u32, u32);
    fn should_close(&self) -> bool;
    fn get_proc_address(&mut self, fn_name: &str) -> *const c_void;
}

pub fn init_gl_context(
    width: u32,
    height: u32,
    title: &str,
) -> color_eyre::Result<Box<dyn GlContext>> {
    Ok(Box::new(glfw::GlfwContext::new(width, height, title)?))
}
