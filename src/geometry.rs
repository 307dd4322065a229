//! Shared vertex tables.
//!
//! Cube and quad layouts used across lessons live here once instead of
//! being re-declared per lesson.

use glam::Vec3;

/// Position + texture coordinate vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexturedVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
}

impl TexturedVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    /// Buffer layout matching `@location(0) position, @location(1) uv`.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Position + normal vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct NormalVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit outward face normal.
    pub normal: [f32; 3],
}

impl NormalVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Buffer layout matching `@location(0) position, @location(1) normal`.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

const fn tv(position: [f32; 3], uv: [f32; 2]) -> TexturedVertex {
    TexturedVertex { position, uv }
}

const fn nv(position: [f32; 3], normal: [f32; 3]) -> NormalVertex {
    NormalVertex { position, normal }
}

/// Unit cube centred on the origin, 36 vertices, two triangles per face.
pub const CUBE_TEXTURED: [TexturedVertex; 36] = [
    // back (-Z)
    tv([-0.5, -0.5, -0.5], [0.0, 0.0]),
    tv([0.5, -0.5, -0.5], [1.0, 0.0]),
    tv([0.5, 0.5, -0.5], [1.0, 1.0]),
    tv([0.5, 0.5, -0.5], [1.0, 1.0]),
    tv([-0.5, 0.5, -0.5], [0.0, 1.0]),
    tv([-0.5, -0.5, -0.5], [0.0, 0.0]),
    // front (+Z)
    tv([-0.5, -0.5, 0.5], [0.0, 0.0]),
    tv([0.5, -0.5, 0.5], [1.0, 0.0]),
    tv([0.5, 0.5, 0.5], [1.0, 1.0]),
    tv([0.5, 0.5, 0.5], [1.0, 1.0]),
    tv([-0.5, 0.5, 0.5], [0.0, 1.0]),
    tv([-0.5, -0.5, 0.5], [0.0, 0.0]),
    // left (-X)
    tv([-0.5, 0.5, 0.5], [1.0, 0.0]),
    tv([-0.5, 0.5, -0.5], [1.0, 1.0]),
    tv([-0.5, -0.5, -0.5], [0.0, 1.0]),
    tv([-0.5, -0.5, -0.5], [0.0, 1.0]),
    tv([-0.5, -0.5, 0.5], [0.0, 0.0]),
    tv([-0.5, 0.5, 0.5], [1.0, 0.0]),
    // right (+X)
    tv([0.5, 0.5, 0.5], [1.0, 0.0]),
    tv([0.5, 0.5, -0.5], [1.0, 1.0]),
    tv([0.5, -0.5, -0.5], [0.0, 1.0]),
    tv([0.5, -0.5, -0.5], [0.0, 1.0]),
    tv([0.5, -0.5, 0.5], [0.0, 0.0]),
    tv([0.5, 0.5, 0.5], [1.0, 0.0]),
    // bottom (-Y)
    tv([-0.5, -0.5, -0.5], [0.0, 1.0]),
    tv([0.5, -0.5, -0.5], [1.0, 1.0]),
    tv([0.5, -0.5, 0.5], [1.0, 0.0]),
    tv([0.5, -0.5, 0.5], [1.0, 0.0]),
    tv([-0.5, -0.5, 0.5], [0.0, 0.0]),
    tv([-0.5, -0.5, -0.5], [0.0, 1.0]),
    // top (+Y)
    tv([-0.5, 0.5, -0.5], [0.0, 1.0]),
    tv([0.5, 0.5, -0.5], [1.0, 1.0]),
    tv([0.5, 0.5, 0.5], [1.0, 0.0]),
    tv([0.5, 0.5, 0.5], [1.0, 0.0]),
    tv([-0.5, 0.5, 0.5], [0.0, 0.0]),
    tv([-0.5, 0.5, -0.5], [0.0, 1.0]),
];

const NEG_Z: [f32; 3] = [0.0, 0.0, -1.0];
const POS_Z: [f32; 3] = [0.0, 0.0, 1.0];
const NEG_X: [f32; 3] = [-1.0, 0.0, 0.0];
const POS_X: [f32; 3] = [1.0, 0.0, 0.0];
const NEG_Y: [f32; 3] = [0.0, -1.0, 0.0];
const POS_Y: [f32; 3] = [0.0, 1.0, 0.0];

/// Unit cube with per-face outward normals, 36 vertices.
pub const CUBE_WITH_NORMALS: [NormalVertex; 36] = [
    nv([-0.5, -0.5, -0.5], NEG_Z),
    nv([0.5, -0.5, -0.5], NEG_Z),
    nv([0.5, 0.5, -0.5], NEG_Z),
    nv([0.5, 0.5, -0.5], NEG_Z),
    nv([-0.5, 0.5, -0.5], NEG_Z),
    nv([-0.5, -0.5, -0.5], NEG_Z),
    nv([-0.5, -0.5, 0.5], POS_Z),
    nv([0.5, -0.5, 0.5], POS_Z),
    nv([0.5, 0.5, 0.5], POS_Z),
    nv([0.5, 0.5, 0.5], POS_Z),
    nv([-0.5, 0.5, 0.5], POS_Z),
    nv([-0.5, -0.5, 0.5], POS_Z),
    nv([-0.5, 0.5, 0.5], NEG_X),
    nv([-0.5, 0.5, -0.5], NEG_X),
    nv([-0.5, -0.5, -0.5], NEG_X),
    nv([-0.5, -0.5, -0.5], NEG_X),
    nv([-0.5, -0.5, 0.5], NEG_X),
    nv([-0.5, 0.5, 0.5], NEG_X),
    nv([0.5, 0.5, 0.5], POS_X),
    nv([0.5, 0.5, -0.5], POS_X),
    nv([0.5, -0.5, -0.5], POS_X),
    nv([0.5, -0.5, -0.5], POS_X),
    nv([0.5, -0.5, 0.5], POS_X),
    nv([0.5, 0.5, 0.5], POS_X),
    nv([-0.5, -0.5, -0.5], NEG_Y),
    nv([0.5, -0.5, -0.5], NEG_Y),
    nv([0.5, -0.5, 0.5], NEG_Y),
    nv([0.5, -0.5, 0.5], NEG_Y),
    nv([-0.5, -0.5, 0.5], NEG_Y),
    nv([-0.5, -0.5, -0.5], NEG_Y),
    nv([-0.5, 0.5, -0.5], POS_Y),
    nv([0.5, 0.5, -0.5], POS_Y),
    nv([0.5, 0.5, 0.5], POS_Y),
    nv([0.5, 0.5, 0.5], POS_Y),
    nv([-0.5, 0.5, 0.5], POS_Y),
    nv([-0.5, 0.5, -0.5], POS_Y),
];

/// Unit quad in the XY plane facing +Z, 6 vertices.
///
/// For lessons that draw a single textured rectangle, such as a billboard
/// or a pass that samples an offscreen color target. The bundled lessons
/// only draw cubes.
pub const QUAD: [TexturedVertex; 6] = [
    tv([-0.5, 0.5, 0.0], [0.0, 1.0]),
    tv([-0.5, -0.5, 0.0], [0.0, 0.0]),
    tv([0.5, -0.5, 0.0], [1.0, 0.0]),
    tv([-0.5, 0.5, 0.0], [0.0, 1.0]),
    tv([0.5, -0.5, 0.0], [1.0, 0.0]),
    tv([0.5, 0.5, 0.0], [1.0, 1.0]),
];

/// World positions of the ten cubes in the camera lessons.
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Vec3 {
        let (a, b, c) = (Vec3::from(a), Vec3::from(b), Vec3::from(c));
        (b - a).cross(c - a).normalize()
    }

    #[test]
    fn cube_tables_cover_every_face() {
        assert_eq!(CUBE_TEXTURED.len(), 36);
        assert_eq!(CUBE_WITH_NORMALS.len(), 36);
        for (textured, lit) in CUBE_TEXTURED.iter().zip(&CUBE_WITH_NORMALS) {
            assert_eq!(textured.position, lit.position);
            assert!(textured.position.iter().all(|c| c.abs() == 0.5));
        }
    }

    #[test]
    fn normals_are_unit_and_perpendicular_to_faces() {
        for tri in CUBE_WITH_NORMALS.chunks(3) {
            let normal = Vec3::from(tri[0].normal);
            assert!((normal.length() - 1.0).abs() < 1e-6);
            let geometric =
                face_normal(tri[0].position, tri[1].position, tri[2].position);
            assert!(geometric.cross(normal).length() < 1e-6);
            // Every vertex lies on the face the normal points out of.
            for vertex in tri {
                assert_eq!(Vec3::from(vertex.position).dot(normal), 0.5);
            }
        }
    }

    #[test]
    fn quad_lies_in_xy_plane() {
        assert!(QUAD.iter().all(|v| v.position[2] == 0.0));
        assert!(QUAD
            .iter()
            .flat_map(|v| v.uv)
            .all(|c| (0.0..=1.0).contains(&c)));
    }

    #[test]
    fn vertex_strides_match_attributes() {
        assert_eq!(TexturedVertex::layout().array_stride, 20);
        assert_eq!(NormalVertex::layout().array_stride, 24);
        assert_eq!(CUBE_POSITIONS.len(), 10);
    }
}
