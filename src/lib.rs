pub mod game;
pub mod scenes;
pub mod script;
pub mod settings;
pub mod settings_types;
pub mod time;

pub use game::{Frame, FrameContext, Game, Scene};
pub use scenes::{MeshDraw, OrbitFrame, OrbitScene, TileFrame, TileScene};
pub use settings::{AppMode, Settings};
pub use time::FrameClock;

pub fn storage_dir() -> std::path::PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    path.push("Isoscape");
    let _ = std::fs::create_dir_all(&path);
    path
}
