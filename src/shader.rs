use color_eyre::eyre::eyre;

use crate::gl;

pub enum ShaderType {
    Vertex,
    Fragment,
}

pub struct Shader(u32);

impl Shader {
    pub fn from_source(src: &str, shader_type: ShaderType) -> color_eyre::Result<Self> {
        let id = gl!(gl::CreateShader(match shader_type {
            ShaderType::Vertex => gl::VERTEX_SHADER,
            ShaderType::Fragment => gl::FRAGMENT_SHADER,
        }));
        let c_str = std::ffi::CString::new(src.as_bytes())?;
        gl!(gl::ShaderSource(id, 1, &c_str.as_ptr(), std::ptr::null()));
        gl!(gl::CompileShader(id));

        let mut success: gl::types::GLint = 1;
        gl!(gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut success));
        if success == 0 {
            let mut len: gl::types::GLint = 0;
            gl!(gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len));
            let error = create_whitespace_cstring_with_len(len as usize);
            gl!(gl::GetShaderInfoLog(
                id,
                len,
                std::ptr::null_mut(),
                error.as_ptr() as *mut gl::types::GLchar
            ));
            return Err(eyre!(
                "shader compilation error: {}",
                error.to_string_lossy()
            ));
        }
        Ok(Shader(id))
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        gl!(gl::DeleteShader(self.id()))
    }
}

pub struct ShaderProgram(u32);

impl ShaderProgram {
    pub fn from_shaders(shaders: &[Shader]) -> color_eyre::Result<Self> {
        let id = gl!(gl::CreateProgram());
        for shader in shaders {
            gl!(gl::AttachShader(id, shader.id()));
        }
        gl!(gl::LinkProgram(id));

        let mut success: gl::types::GLint = 1;
        gl!(gl::GetProgramiv(id, gl::LINK_STATUS, &mut success));
        if success == 0 {
            let mut len: gl::types::GLint = 0;
            gl!(gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len));
            let error = create_whitespace_cstring_with_len(len as usize);
            gl!(gl::GetProgramInfoLog(
                id,
                len,
                std::ptr::null_mut(),
                error.as_ptr() as *mut gl::types::GLchar
            ));
            return Err(eyre!("program link error: {}", error.to_string_lossy()));
        }
        // Stage objects can go as soon as the program holds the linked code.
        for shader in shaders {
            gl!(gl::DetachShader(id, shader.id()));
        }
        Ok(ShaderProgram(id))
    }

    pub fn set_used(&self) {
        gl!(gl::UseProgram(self.0));
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        gl!(gl::DeleteProgram(self.id()))
    }
}

// CString full of spaces, sized to receive a driver info log.
fn create_whitespace_cstring_with_len(len: usize) -> std::ffi::CString {
    let buffer: Vec<u8> = vec![b' '; len];
    std::ffi::CString::new(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_buffer_has_requested_len() {
        let buf = create_whitespace_cstring_with_len(16);
        assert_eq!(buf.as_bytes().len(), 16);
        assert!(buf.as_bytes().iter().all(|&b| b == b' '));
    }

    #[test]
    fn info_log_buffer_handles_zero_len() {
        assert_eq!(create_whitespace_cstring_with_len(0).as_bytes().len(), 0);
    }
}
