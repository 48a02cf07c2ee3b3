use crate::gl;
use crate::gl::types::GLenum;

pub fn error_name(code: GLenum) -> &'static str {
    match code {
        gl::INVALID_ENUM => "INVALID_ENUM",
        gl::INVALID_VALUE => "INVALID_VALUE",
        gl::INVALID_OPERATION => "INVALID_OPERATION",
        gl::INVALID_FRAMEBUFFER_OPERATION => "INVALID_FRAMEBUFFER_OPERATION",
        gl::OUT_OF_MEMORY => "OUT_OF_MEMORY",
        gl::STACK_OVERFLOW => "STACK_OVERFLOW",
        gl::STACK_UNDERFLOW => "STACK_UNDERFLOW",
        _ => "UNKNOWN_ERROR",
    }
}

/// Drains the GL error queue, logging every pending error with a backtrace.
pub fn check_gl_error() {
    unsafe {
        let mut error = gl::GetError();
        while error != gl::NO_ERROR {
            let backtrace = std::backtrace::Backtrace::capture();
            log::error!("OpenGL error: {}\n{:#?}", error_name(error), backtrace);
            error = gl::GetError();
        }
    }
}

/// Wraps a single GL call and drains the error queue right after it.
#[macro_export]
macro_rules! gl {
    (gl::$call:ident ( $($arg:expr),* $(,)? )) => {{
        let result = unsafe { gl::$call($($arg),*) };
        $crate::gl_errors::check_gl_error();
        result
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_their_names() {
        assert_eq!(error_name(gl::INVALID_ENUM), "INVALID_ENUM");
        assert_eq!(error_name(gl::INVALID_OPERATION), "INVALID_OPERATION");
        assert_eq!(error_name(gl::OUT_OF_MEMORY), "OUT_OF_MEMORY");
    }

    #[test]
    fn unknown_code_maps_to_placeholder() {
        assert_eq!(error_name(0xDEAD), "UNKNOWN_ERROR");
    }
}
