use glam::Vec2;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

/// Two triangles covering `size` pixels at `position`, textured with the
/// `tex_min..tex_max` region.
pub fn make_quad(position: Vec2, size: Vec2, tex_min: Vec2, tex_max: Vec2) -> [Vertex; 6] {
    let (x0, y0) = (position.x, position.y);
    let (x1, y1) = (position.x + size.x, position.y + size.y);
    let (u0, v0) = (tex_min.x, tex_min.y);
    let (u1, v1) = (tex_max.x, tex_max.y);

    [
        Vertex {
            position: [x0, y0],
            tex_coords: [u0, v0],
        },
        Vertex {
            position: [x1, y0],
            tex_coords: [u1, v0],
        },
        Vertex {
            position: [x0, y1],
            tex_coords: [u0, v1],
        },
        Vertex {
            position: [x1, y0],
            tex_coords: [u1, v0],
        },
        Vertex {
            position: [x1, y1],
            tex_coords: [u1, v1],
        },
        Vertex {
            position: [x0, y1],
            tex_coords: [u0, v1],
        },
    ]
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

const fn mv(x: f32, y: f32, z: f32, u: f32, v: f32) -> MeshVertex {
    MeshVertex {
        position: [x, y, z],
        tex_coords: [u, v],
    }
}

/// Unit cube centered on the origin, one texture per face.
pub const CUBE_VERTICES: [MeshVertex; 36] = [
    // back
    mv(-0.5, -0.5, -0.5, 0.0, 0.0),
    mv(0.5, -0.5, -0.5, 1.0, 0.0),
    mv(0.5, 0.5, -0.5, 1.0, 1.0),
    mv(0.5, 0.5, -0.5, 1.0, 1.0),
    mv(-0.5, 0.5, -0.5, 0.0, 1.0),
    mv(-0.5, -0.5, -0.5, 0.0, 0.0),
    // front
    mv(-0.5, -0.5, 0.5, 0.0, 0.0),
    mv(0.5, -0.5, 0.5, 1.0, 0.0),
    mv(0.5, 0.5, 0.5, 1.0, 1.0),
    mv(0.5, 0.5, 0.5, 1.0, 1.0),
    mv(-0.5, 0.5, 0.5, 0.0, 1.0),
    mv(-0.5, -0.5, 0.5, 0.0, 0.0),
    // left
    mv(-0.5, 0.5, 0.5, 1.0, 0.0),
    mv(-0.5, 0.5, -0.5, 1.0, 1.0),
    mv(-0.5, -0.5, -0.5, 0.0, 1.0),
    mv(-0.5, -0.5, -0.5, 0.0, 1.0),
    mv(-0.5, -0.5, 0.5, 0.0, 0.0),
    mv(-0.5, 0.5, 0.5, 1.0, 0.0),
    // right
    mv(0.5, 0.5, 0.5, 1.0, 0.0),
    mv(0.5, 0.5, -0.5, 1.0, 1.0),
    mv(0.5, -0.5, -0.5, 0.0, 1.0),
    mv(0.5, -0.5, -0.5, 0.0, 1.0),
    mv(0.5, -0.5, 0.5, 0.0, 0.0),
    mv(0.5, 0.5, 0.5, 1.0, 0.0),
    // bottom
    mv(-0.5, -0.5, -0.5, 0.0, 1.0),
    mv(0.5, -0.5, -0.5, 1.0, 1.0),
    mv(0.5, -0.5, 0.5, 1.0, 0.0),
    mv(0.5, -0.5, 0.5, 1.0, 0.0),
    mv(-0.5, -0.5, 0.5, 0.0, 0.0),
    mv(-0.5, -0.5, -0.5, 0.0, 1.0),
    // top
    mv(-0.5, 0.5, -0.5, 0.0, 1.0),
    mv(0.5, 0.5, -0.5, 1.0, 1.0),
    mv(0.5, 0.5, 0.5, 1.0, 0.0),
    mv(0.5, 0.5, 0.5, 1.0, 0.0),
    mv(-0.5, 0.5, 0.5, 0.0, 0.0),
    mv(-0.5, 0.5, -0.5, 0.0, 1.0),
];
