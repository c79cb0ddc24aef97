//! Per-frame scene state. Each scene owns its camera and reacts to input
//! events between frames; nothing here is shared or global.

pub mod orbit;
pub mod tiles;

pub use orbit::{MeshDraw, OrbitFrame, OrbitScene};
pub use tiles::{TileFrame, TileScene};
