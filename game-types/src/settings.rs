use serde::{Deserialize, Serialize};

/// Which experiment the frame loop drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppMode {
    #[default]
    Tiles,
    Orbit,
}

impl AppMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Tiles => "tiles",
            Self::Orbit => "orbit",
        }
    }
}

impl std::str::FromStr for AppMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tiles" | "tile" => Ok(Self::Tiles),
            "orbit" | "rpg" => Ok(Self::Orbit),
            other => Err(format!("unknown mode '{other}', expected 'tiles' or 'orbit'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionRatioSetting {
    Fixed(f32),
    Isometric,
}

impl Default for ProjectionRatioSetting {
    fn default() -> Self {
        Self::Fixed(2.0 / 3.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSheetSettings {
    pub texture_width: u32,
    pub texture_height: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub sprite_index: u32,
}

impl Default for SpriteSheetSettings {
    fn default() -> Self {
        Self {
            texture_width: 256,
            texture_height: 192,
            cell_width: 256,
            cell_height: 192,
            sprite_index: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilemapSettings {
    pub rows: u32,
    pub columns: u32,
    pub tile_width: f32,
    pub tile_height: f32,
    pub projection_ratio: ProjectionRatioSetting,
    pub sprite_sheet: SpriteSheetSettings,
}

impl Default for TilemapSettings {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 10,
            tile_width: 256.0,
            tile_height: 192.0,
            projection_ratio: ProjectionRatioSetting::default(),
            sprite_sheet: SpriteSheetSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Pixels per arrow-key press.
    pub pan_speed: f32,
    /// Zoom change per scroll notch.
    pub zoom_speed: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Pixels the hovered tile is raised by at zoom 1.
    pub hover_lift: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            pan_speed: 15.0,
            zoom_speed: 0.1,
            min_zoom: 0.25,
            max_zoom: 4.0,
            hover_lift: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    pub initial_radius: f32,
    /// Radians per frame while an orbit key is held.
    pub key_rotate_speed: f32,
    pub drag_rotate_speed: f32,
    pub zoom_speed: f32,
    /// When false, scrolling up moves the eye towards the target.
    pub invert_zoom: bool,
    /// World units per second.
    pub hero_speed: f32,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            initial_radius: 3.0,
            key_rotate_speed: 0.1,
            drag_rotate_speed: 0.1,
            zoom_speed: 0.5,
            invert_zoom: false,
            hero_speed: 1.0,
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    pub queue_capacity: usize,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self { queue_capacity: 64 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyBinding(pub [String; 2]);

impl KeyBinding {
    pub fn single(code: &str) -> Self {
        KeyBinding([code.to_string(), "".to_string()])
    }

    pub fn pair(first: &str, second: &str) -> Self {
        KeyBinding([first.to_string(), second.to_string()])
    }
}

impl<'a> IntoIterator for &'a KeyBinding {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for KeyBinding {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.0[1].is_empty() {
            serializer.serialize_str(&self.0[0])
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for KeyBinding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Either {
            Single(String),
            Multiple(Vec<String>),
        }

        match Either::deserialize(deserializer)? {
            Either::Single(s) => Ok(KeyBinding([s, "".to_string()])),
            Either::Multiple(v) => {
                let mut bindings = ["".to_string(), "".to_string()];
                for (i, s) in v.into_iter().enumerate().take(2) {
                    bindings[i] = s;
                }
                Ok(KeyBinding(bindings))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub pan_up: KeyBinding,
    pub pan_down: KeyBinding,
    pub pan_left: KeyBinding,
    pub pan_right: KeyBinding,
    pub orbit_left: KeyBinding,
    pub orbit_up: KeyBinding,
    pub hero_left: KeyBinding,
    pub hero_right: KeyBinding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            pan_up: KeyBinding::single("ArrowUp"),
            pan_down: KeyBinding::single("ArrowDown"),
            pan_left: KeyBinding::single("ArrowLeft"),
            pan_right: KeyBinding::single("ArrowRight"),
            orbit_left: KeyBinding::single("KeyW"),
            orbit_up: KeyBinding::single("KeyS"),
            hero_left: KeyBinding::pair("KeyA", "KeyQ"),
            hero_right: KeyBinding::pair("KeyD", "KeyE"),
        }
    }
}
