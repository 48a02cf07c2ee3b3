//! The fixed scene: vertex data, shader sources and clear color.

/// 12 vertices (x, y, z) in normalized device coordinates. Only the first
/// triangle is drawn; the rest of the upload is kept as-is.
#[rustfmt::skip]
pub const VERTICES: [f32; 36] = [
     0.5,  0.5, 0.0,   0.5, -0.5, 0.0,  -0.5,  0.5, 0.0,
     0.5, -0.5, 0.0,  -0.5, -0.5, 0.0,  -0.5,  0.5, 0.0,
     1.0,  1.0, 0.0,   1.0,  0.0, 0.0,   0.0,  1.0, 0.0,
    -1.0, -1.0, 0.0,  -1.0,  0.0, 0.0,   0.0, -1.0, 0.0,
];

/// Vertex count passed to the per-frame draw call: one triangle.
pub const DRAWN_VERTEX_COUNT: i32 = 3;

pub const VERTEX_SHADER: &str = "\
#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

pub const FRAGMENT_SHADER: &str = "\
#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
";

pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 0.2];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_form_whole_triangles() {
        assert_eq!(VERTICES.len() % 9, 0);
    }

    #[test]
    fn vertices_are_in_ndc_range() {
        assert!(VERTICES.iter().all(|c| (-1.0..=1.0).contains(c)));
    }

    #[test]
    fn drawn_count_fits_the_upload() {
        let uploaded = (VERTICES.len() / 3) as i32;
        assert!(DRAWN_VERTEX_COUNT <= uploaded);
    }

    #[test]
    fn shaders_target_gl33_core() {
        assert!(VERTEX_SHADER.starts_with("#version 330 core"));
        assert!(FRAGMENT_SHADER.starts_with("#version 330 core"));
    }

    #[test]
    fn sources_contain_no_nul_bytes() {
        assert!(!VERTEX_SHADER.contains('\0'));
        assert!(!FRAGMENT_SHADER.contains('\0'));
    }
}
