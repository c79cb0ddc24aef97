use super::{ButtonAction, InputEvent, KeyCode, Modifiers, MouseButton};
use std::collections::HashSet;

/// Keys and buttons currently held, plus the last known cursor position.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashSet<KeyCode>,
    buttons: HashSet<MouseButton>,
    modifiers: Modifiers,
    cursor: (f32, f32),
    cursor_inside: bool,
}

impl InputState {
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Key {
                key,
                action,
                modifiers,
            } => {
                match action {
                    ButtonAction::Press | ButtonAction::Repeat => {
                        self.keys.insert(key);
                    }
                    ButtonAction::Release => {
                        self.keys.remove(&key);
                    }
                }
                // Modifiers reported with the event plus any modifier keys still held.
                self.modifiers = self
                    .keys
                    .iter()
                    .fold(modifiers, |held, key| held.union(Modifiers::from_key(*key)));
            }
            InputEvent::MouseButton { button, action } => match action {
                ButtonAction::Press | ButtonAction::Repeat => {
                    self.buttons.insert(button);
                }
                ButtonAction::Release => {
                    self.buttons.remove(&button);
                }
            },
            InputEvent::CursorMoved { x, y, .. } => {
                self.cursor = (x, y);
                self.cursor_inside = true;
            }
            InputEvent::CursorEntered(inside) => self.cursor_inside = inside,
            InputEvent::Scroll { .. } | InputEvent::Resized { .. } => {}
        }
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    /// Modifiers in effect as of the most recent key event.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    pub fn cursor_inside(&self) -> bool {
        self.cursor_inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release() {
        let mut state = InputState::default();
        state.apply(&InputEvent::button(MouseButton::Right, ButtonAction::Press));
        state.apply(&InputEvent::key(KeyCode::KeyW, ButtonAction::Press));
        assert!(state.is_button_pressed(MouseButton::Right));
        assert!(state.is_key_pressed(KeyCode::KeyW));

        state.apply(&InputEvent::button(MouseButton::Right, ButtonAction::Release));
        state.apply(&InputEvent::key(KeyCode::KeyW, ButtonAction::Release));
        assert!(!state.is_button_pressed(MouseButton::Right));
        assert!(!state.is_key_pressed(KeyCode::KeyW));
    }

    #[test]
    fn test_modifiers_from_event_and_held_keys() {
        let mut state = InputState::default();
        state.apply(&InputEvent::Key {
            key: KeyCode::KeyW,
            action: ButtonAction::Press,
            modifiers: Modifiers { shift: true, ..Modifiers::none() },
        });
        assert!(state.modifiers().shift);

        state.apply(&InputEvent::key(KeyCode::KeyW, ButtonAction::Release));
        assert!(state.modifiers().is_empty());

        state.apply(&InputEvent::key(KeyCode::ControlRight, ButtonAction::Press));
        state.apply(&InputEvent::key(KeyCode::KeyA, ButtonAction::Press));
        assert_eq!(state.modifiers(), Modifiers { ctrl: true, ..Modifiers::none() });

        state.apply(&InputEvent::key(KeyCode::ControlRight, ButtonAction::Release));
        assert!(state.modifiers().is_empty());
    }

    #[test]
    fn test_cursor_tracking() {
        let mut state = InputState::default();
        assert!(!state.cursor_inside());
        state.apply(&InputEvent::CursorMoved { x: 3.0, y: 4.0, dx: 3.0, dy: 4.0 });
        assert_eq!(state.cursor(), (3.0, 4.0));
        assert!(state.cursor_inside());
        state.apply(&InputEvent::CursorEntered(false));
        assert!(!state.cursor_inside());
    }
}
