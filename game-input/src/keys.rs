macro_rules! key_codes {
    ($($name:ident),* $(,)?) => {
        /// Physical keys, named after their DOM `KeyboardEvent.code`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum KeyCode {
            $($name),*
        }

        impl KeyCode {
            pub const ALL: &'static [KeyCode] = &[$(KeyCode::$name),*];

            pub fn to_dom_code(self) -> &'static str {
                match self {
                    $(KeyCode::$name => stringify!($name)),*
                }
            }
        }
    };
}

key_codes! {
    ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL, KeyM,
    KeyN, KeyO, KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
    Digit0, Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8, Digit9,
    Space, Escape, Enter, Tab, Backspace, Minus, Equal,
    ShiftLeft, ShiftRight, ControlLeft, ControlRight, AltLeft, AltRight,
    F1, F2, F3, F4, F5,
}

impl KeyCode {
    pub fn from_dom_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.to_dom_code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "middle" => Some(Self::Middle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_code_round_trip_names() {
        assert_eq!(KeyCode::from_dom_code("ArrowUp"), Some(KeyCode::ArrowUp));
        assert_eq!(KeyCode::KeyW.to_dom_code(), "KeyW");
        assert_eq!(KeyCode::from_dom_code("Arrowup"), None);
    }
}
