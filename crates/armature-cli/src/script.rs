//! Gesture script parsing and replay.
//!
//! A script is a line-oriented list of gestures fed straight into the
//! interaction controller, with `#` comments and blank lines skipped:
//!
//! ```text
//! viewport 1080 1920
//! down 0.0 -0.4        # touch the base
//! start                # begin a drag (extrudes a bone)
//! move 0 0 0.0 -0.1
//! end 0.0 -0.1
//! tap 0.1 -0.2         # touch-down plus short press
//! long 0.1 -0.2        # touch-down plus long press
//! clear                # confirm a requested model clear
//! ```

use armature_interact::{Controller, LongPressOutcome};
use thiserror::Error;

/// Errors raised while parsing a gesture script.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// A line began with something that is not a gesture.
    #[error("line {line}: unknown gesture {word:?}")]
    UnknownGesture {
        /// 1-based line number.
        line: usize,
        /// The offending word.
        word: String,
    },
    /// A gesture was missing a numeric argument.
    #[error("line {line}: missing argument")]
    MissingArgument {
        /// 1-based line number.
        line: usize,
    },
    /// An argument did not parse as a number.
    #[error("line {line}: bad number {word:?}")]
    BadNumber {
        /// 1-based line number.
        line: usize,
        /// The offending word.
        word: String,
    },
    /// A gesture had arguments left over.
    #[error("line {line}: trailing arguments")]
    TrailingArguments {
        /// 1-based line number.
        line: usize,
    },
}

/// One replayable gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Set the viewport size (width, height).
    Viewport(f64, f64),
    /// Touch-down at normalized device coordinates.
    Down(f64, f64),
    /// Touch-down followed by a short press.
    Tap(f64, f64),
    /// Touch-down followed by a long press.
    Long(f64, f64),
    /// Start a drag from the last touch-down.
    DragStart,
    /// Drag step: raw deltas and normalized coordinates.
    DragMove(f64, f64, f64, f64),
    /// End the drag.
    DragEnd(f64, f64),
    /// Confirm a pending destructive model clear.
    Clear,
}

fn number(word: Option<&str>, line: usize) -> Result<f64, ScriptError> {
    let word = word.ok_or(ScriptError::MissingArgument { line })?;
    word.parse().map_err(|_| ScriptError::BadNumber {
        line,
        word: word.to_string(),
    })
}

/// Parse a gesture script.
pub fn parse(text: &str) -> Result<Vec<Gesture>, ScriptError> {
    let mut gestures = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");
        let gesture = match command {
            "viewport" => Gesture::Viewport(
                number(words.next(), line_number)?,
                number(words.next(), line_number)?,
            ),
            "down" => Gesture::Down(
                number(words.next(), line_number)?,
                number(words.next(), line_number)?,
            ),
            "tap" => Gesture::Tap(
                number(words.next(), line_number)?,
                number(words.next(), line_number)?,
            ),
            "long" => Gesture::Long(
                number(words.next(), line_number)?,
                number(words.next(), line_number)?,
            ),
            "start" => Gesture::DragStart,
            "move" => Gesture::DragMove(
                number(words.next(), line_number)?,
                number(words.next(), line_number)?,
                number(words.next(), line_number)?,
                number(words.next(), line_number)?,
            ),
            "end" => Gesture::DragEnd(
                number(words.next(), line_number)?,
                number(words.next(), line_number)?,
            ),
            "clear" => Gesture::Clear,
            other => {
                return Err(ScriptError::UnknownGesture {
                    line: line_number,
                    word: other.to_string(),
                })
            }
        };
        if words.next().is_some() {
            return Err(ScriptError::TrailingArguments { line: line_number });
        }
        gestures.push(gesture);
    }
    Ok(gestures)
}

/// Replay gestures against a controller.
pub fn replay(controller: &mut Controller, gestures: &[Gesture]) {
    for gesture in gestures {
        match *gesture {
            Gesture::Viewport(width, height) => controller.set_viewport(width, height),
            Gesture::Down(x, y) => {
                controller.on_touch_down(x, y);
            }
            Gesture::Tap(x, y) => {
                controller.on_touch_down(x, y);
                controller.on_short_press(x, y);
            }
            Gesture::Long(x, y) => {
                controller.on_touch_down(x, y);
                if controller.on_long_press() == LongPressOutcome::ClearRequested {
                    log::info!("model clear requested; confirm with a `clear` line");
                }
            }
            Gesture::DragStart => controller.on_drag_start(),
            Gesture::DragMove(dx, dy, x, y) => controller.on_drag_move(dx, dy, x, y),
            Gesture::DragEnd(x, y) => controller.on_drag_end(x, y),
            Gesture::Clear => controller.clear_model(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armature_interact::State;

    #[test]
    fn test_parse_full_script() {
        let script = "\
# build one bone
viewport 1080 1920
down 0.0 -0.4
start
move 0 0 0.0 -0.1
end 0.0 -0.1
";
        let gestures = parse(script).unwrap();
        assert_eq!(gestures.len(), 5);
        assert_eq!(gestures[0], Gesture::Viewport(1080.0, 1920.0));
        assert_eq!(gestures[2], Gesture::DragStart);
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert!(parse("wiggle 1 2").is_err());
        assert!(parse("down 0.0").is_err());
        assert!(parse("down 0.0 zero").is_err());
        assert!(parse("start now").is_err());
    }

    #[test]
    fn test_replay_builds_a_bone() {
        // Aim at the world origin through the default camera: project
        // it to NDC up front so the script stays plain numbers.
        let mut controller = Controller::new();
        let origin = controller
            .camera()
            .view_projection()
            .apply_homogeneous(&armature_math::Point3::origin(), 1.0);
        let script = format!(
            "down {x} {y}\nstart\nend {x} {y}\n",
            x = origin.x,
            y = origin.y
        );
        let gestures = parse(&script).unwrap();
        replay(&mut controller, &gestures);
        assert_eq!(controller.model().cylinders().len(), 1);
        assert_eq!(controller.state(), State::Single);
    }
}
