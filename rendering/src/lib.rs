pub mod camera;
pub mod instance;
pub mod orbit_camera;
pub mod scene;
pub mod vertex;

pub use camera::{Camera, CameraUniform};
pub use instance::{InstanceFlag, TileInstance, TileInstanceRaw};
pub use orbit_camera::{OrbitCamera, OrbitUniform, Perspective};
pub use vertex::{CUBE_VERTICES, MeshVertex, Vertex, make_quad};
