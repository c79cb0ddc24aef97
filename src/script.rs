//! Plain-text input scripts for driving the game without a window.
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! resize 1280 720
//! move 640 360
//! button right down
//! move 700 380
//! press Shift+KeyW
//! scroll 0 1
//! frame 3
//! ```

use anyhow::{Context, bail};
use game_input::{ButtonAction, InputEvent, KeyBinding, MouseButton};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptStep {
    Event(InputEvent),
    /// Cursor position; the queue derives the delta.
    Cursor(f32, f32),
    /// Run this many frames.
    Frames(u32),
}

pub const TILES_DEMO: &str = "\
# hover across the map, drag it, then zoom in and out
move 640 360
frame
move 700 420
frame 2
button right down
move 760 400
move 820 380
button right up
frame
press ArrowLeft
release ArrowLeft
scroll 2
frame
scroll -4
frame 2
";

pub const ORBIT_DEMO: &str = "\
# orbit with the keyboard, drag with the mouse, walk the hero
press KeyW
frame 10
release KeyW
press KeyS
frame 5
release KeyS
move 640 360
button left down
move 700 340
frame
button left up
press KeyD
frame 30
release KeyD
scroll 1
frame
";

pub fn parse(source: &str) -> anyhow::Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let step = parse_line(line).with_context(|| format!("line {}: '{}'", index + 1, line))?;
        steps.push(step);
    }
    Ok(steps)
}

fn parse_line(line: &str) -> anyhow::Result<ScriptStep> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let float = |i: usize| -> anyhow::Result<f32> {
        let word = args.get(i).with_context(|| format!("missing argument {}", i + 1))?;
        let value: f32 = word.parse().with_context(|| format!("'{word}' is not a number"))?;
        if !value.is_finite() {
            bail!("'{word}' is not finite");
        }
        Ok(value)
    };
    let uint = |i: usize| -> anyhow::Result<u32> {
        let word = args.get(i).with_context(|| format!("missing argument {}", i + 1))?;
        word.parse()
            .with_context(|| format!("'{word}' is not a non-negative integer"))
    };

    let step = match command {
        "frame" => ScriptStep::Frames(if args.is_empty() { 1 } else { uint(0)? }),
        "move" => ScriptStep::Cursor(float(0)?, float(1)?),
        "scroll" => {
            if args.len() > 1 {
                ScriptStep::Event(InputEvent::Scroll {
                    dx: float(0)?,
                    dy: float(1)?,
                })
            } else {
                ScriptStep::Event(InputEvent::scroll(float(0)?))
            }
        }
        "press" | "release" | "repeat" => {
            let code = args.first().context("missing key")?;
            let binding =
                KeyBinding::from_dom_code(code).with_context(|| format!("unknown key '{code}'"))?;
            let action = match command {
                "press" => ButtonAction::Press,
                "release" => ButtonAction::Release,
                _ => ButtonAction::Repeat,
            };
            ScriptStep::Event(InputEvent::Key {
                key: binding.key,
                action,
                modifiers: binding.modifiers,
            })
        }
        "button" => {
            let name = args.first().context("missing button")?;
            let button =
                MouseButton::from_name(name).with_context(|| format!("unknown button '{name}'"))?;
            let action = match args.get(1).copied() {
                Some("down") => ButtonAction::Press,
                Some("up") => ButtonAction::Release,
                other => bail!("expected 'down' or 'up', got {other:?}"),
            };
            ScriptStep::Event(InputEvent::button(button, action))
        }
        "resize" => ScriptStep::Event(InputEvent::Resized {
            width: uint(0)?,
            height: uint(1)?,
        }),
        "enter" => ScriptStep::Event(InputEvent::CursorEntered(true)),
        "leave" => ScriptStep::Event(InputEvent::CursorEntered(false)),
        other => bail!("unknown command '{other}'"),
    };
    Ok(step)
}
