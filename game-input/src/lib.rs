mod actions;
mod bindings;
mod events;
mod keys;
mod state;

pub use actions::GameAction;
pub use bindings::{InputBindings, KeyBinding, Modifiers};
pub use events::{ButtonAction, InputDevice, InputEvent, InputQueue};
pub use keys::{KeyCode, MouseButton};
pub use state::InputState;
