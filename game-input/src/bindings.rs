use super::{GameAction, InputState, KeyCode};
use game_types::KeyBindings;
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    /// The modifier a key stands for; empty for ordinary keys.
    pub fn from_key(key: KeyCode) -> Self {
        Self {
            ctrl: matches!(key, KeyCode::ControlLeft | KeyCode::ControlRight),
            shift: matches!(key, KeyCode::ShiftLeft | KeyCode::ShiftRight),
            alt: matches!(key, KeyCode::AltLeft | KeyCode::AltRight),
        }
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            ctrl: self.ctrl || other.ctrl,
            shift: self.shift || other.shift,
            alt: self.alt || other.alt,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.shift && !self.alt
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyBinding {
    pub fn new(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: Modifiers::none(),
        }
    }

    pub fn matches(&self, key: KeyCode, modifiers: Modifiers) -> bool {
        self.key == key && self.modifiers == modifiers
    }

    pub fn is_pressed(&self, input: &InputState) -> bool {
        input.is_key_pressed(self.key) && input.modifiers() == self.modifiers
    }

    pub fn from_dom_code(code: &str) -> Option<Self> {
        let mut parts = code.split('+');
        let key_part = parts.next_back()?;

        let mut modifiers = Modifiers::none();
        for modifier in parts {
            match modifier {
                "Ctrl" => modifiers.ctrl = true,
                "Shift" => modifiers.shift = true,
                "Alt" => modifiers.alt = true,
                _ => return None,
            }
        }

        KeyCode::from_dom_code(key_part).map(|key| KeyBinding { key, modifiers })
    }

    pub fn to_dom_code(&self) -> String {
        let key_str = self.key.to_dom_code();
        if self.modifiers.is_empty() {
            key_str.to_string()
        } else {
            let mut parts = Vec::new();
            if self.modifiers.ctrl {
                parts.push("Ctrl");
            }
            if self.modifiers.shift {
                parts.push("Shift");
            }
            if self.modifiers.alt {
                parts.push("Alt");
            }
            parts.push(key_str);
            parts.join("+")
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputBindings {
    bindings: HashMap<GameAction, Vec<KeyBinding>>,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self::from_settings(&KeyBindings::default())
    }
}

impl InputBindings {
    pub fn from_settings(settings: &KeyBindings) -> Self {
        let mut bindings = HashMap::new();

        for action in GameAction::all() {
            let codes = match action {
                GameAction::PanUp => &settings.pan_up,
                GameAction::PanDown => &settings.pan_down,
                GameAction::PanLeft => &settings.pan_left,
                GameAction::PanRight => &settings.pan_right,
                GameAction::OrbitLeft => &settings.orbit_left,
                GameAction::OrbitUp => &settings.orbit_up,
                GameAction::HeroLeft => &settings.hero_left,
                GameAction::HeroRight => &settings.hero_right,
            };

            let parsed: Vec<KeyBinding> = codes
                .into_iter()
                .filter(|code| !code.is_empty())
                .filter_map(|code| {
                    let binding = KeyBinding::from_dom_code(code);
                    if binding.is_none() {
                        warn!(?action, code = code.as_str(), "Ignoring unknown key binding");
                    }
                    binding
                })
                .collect();

            bindings.insert(*action, parsed);
        }

        Self { bindings }
    }

    pub fn get(&self, action: GameAction) -> &[KeyBinding] {
        self.bindings.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First action bound to `key` with exactly these modifiers.
    pub fn action_for(&self, key: KeyCode, modifiers: Modifiers) -> Option<GameAction> {
        GameAction::all()
            .iter()
            .copied()
            .find(|action| self.get(*action).iter().any(|b| b.matches(key, modifiers)))
    }

    pub fn is_action_pressed(&self, action: GameAction, input: &InputState) -> bool {
        self.get(action).iter().any(|b| b.is_pressed(input))
    }
}
