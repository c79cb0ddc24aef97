use super::{KeyCode, Modifiers, MouseButton};
use std::collections::VecDeque;
use tracing::{trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Press,
    Release,
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDevice {
    Keyboard,
    Mouse,
    Window,
}

/// Discrete input reported by the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key {
        key: KeyCode,
        action: ButtonAction,
        modifiers: Modifiers,
    },
    MouseButton {
        button: MouseButton,
        action: ButtonAction,
    },
    /// Absolute cursor position plus the raw delta since the previous one.
    CursorMoved { x: f32, y: f32, dx: f32, dy: f32 },
    CursorEntered(bool),
    Scroll { dx: f32, dy: f32 },
    Resized { width: u32, height: u32 },
}

impl InputEvent {
    pub fn key(key: KeyCode, action: ButtonAction) -> Self {
        InputEvent::Key {
            key,
            action,
            modifiers: Modifiers::none(),
        }
    }

    pub fn button(button: MouseButton, action: ButtonAction) -> Self {
        InputEvent::MouseButton { button, action }
    }

    pub fn scroll(dy: f32) -> Self {
        InputEvent::Scroll { dx: 0.0, dy }
    }

    pub fn device(&self) -> InputDevice {
        match self {
            InputEvent::Key { .. } => InputDevice::Keyboard,
            InputEvent::MouseButton { .. }
            | InputEvent::CursorMoved { .. }
            | InputEvent::CursorEntered(_)
            | InputEvent::Scroll { .. } => InputDevice::Mouse,
            InputEvent::Resized { .. } => InputDevice::Window,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InputEvent::Key { .. } => "Key Event",
            InputEvent::MouseButton { .. } => "Mouse Button Event",
            InputEvent::CursorMoved { .. } => "Cursor Position Event",
            InputEvent::CursorEntered(_) => "Cursor Enter Event",
            InputEvent::Scroll { .. } => "Mouse Scroll Event",
            InputEvent::Resized { .. } => "Resize Event",
        }
    }
}

/// Bounded FIFO between the windowing callbacks and the frame update.
#[derive(Debug)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
    capacity: usize,
    last_cursor: Option<(f32, f32)>,
    dropped: u64,
}

impl InputQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
            last_cursor: None,
            dropped: 0,
        }
    }

    /// Queues an event. When the queue is full the event is dropped and `false` returned.
    pub fn push(&mut self, event: InputEvent) -> bool {
        if self.events.len() >= self.capacity {
            self.dropped += 1;
            warn!(
                kind = event.kind(),
                capacity = self.capacity,
                dropped = self.dropped,
                "Input queue full, dropping event"
            );
            return false;
        }
        trace!(device = ?event.device(), kind = event.kind(), "Input event queued");
        self.events.push_back(event);
        true
    }

    /// Queues a cursor move, computing the delta from the previous cursor position.
    /// The first reported position has a zero delta.
    pub fn push_cursor(&mut self, x: f32, y: f32) -> bool {
        let (dx, dy) = match self.last_cursor {
            Some((px, py)) => (x - px, y - py),
            None => (0.0, 0.0),
        };
        self.last_cursor = Some((x, y));
        self.push(InputEvent::CursorMoved { x, y, dx, dy })
    }

    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
