//! Raw input filtering
//!
//! Maps key and pointer presses onto the logical inputs the simulation
//! understands, depending on the current phase.

use crate::sim::{GamePhase, InputEvent};

/// Primary pointer button number
pub const PRIMARY_BUTTON: u8 = 1;

/// A raw press from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Key symbol name, e.g. `"space"`, `"Up"`, `"Return"`
    Key(String),
    Pointer { button: u8 },
}

impl RawInput {
    pub fn key(name: impl Into<String>) -> Self {
        RawInput::Key(name.into())
    }

    /// Space, Up arrow or the primary pointer button
    pub fn is_jump(&self) -> bool {
        match self {
            RawInput::Key(name) => matches!(name.as_str(), "space" | "Up"),
            RawInput::Pointer { button } => *button == PRIMARY_BUTTON,
        }
    }
}

/// Translate a raw press into a logical input for the given phase
pub fn map_raw_input(raw: &RawInput, phase: GamePhase) -> Option<InputEvent> {
    match phase {
        GamePhase::Menu if raw.is_jump() => Some(InputEvent::Start),
        GamePhase::Ready | GamePhase::Playing if raw.is_jump() => Some(InputEvent::Jump),
        GamePhase::GameOver => match raw {
            RawInput::Key(_) => Some(InputEvent::Restart),
            RawInput::Pointer { .. } => None,
        },
        _ => None,
    }
}
