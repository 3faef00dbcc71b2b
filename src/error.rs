//! Error types for the rotor-machine library.
//!
//! Configuration and input problems are detected once, at the boundary
//! (construction time or message parsing), and reported as a
//! [`RotorMachineError`]. Encoding a validated message never fails.

use thiserror::Error;

/// Errors produced by the rotor-machine library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotorMachineError {
    /// Wiring table does not contain exactly 26 symbols.
    #[error("wiring must contain exactly 26 symbols, got {length}")]
    InvalidWiringLength { length: usize },

    /// Wiring table contains a symbol outside the alphabet.
    #[error("wiring symbol {symbol:?} is not part of the alphabet")]
    InvalidWiringSymbol { symbol: char },

    /// Wiring table lists the same symbol twice.
    #[error("wiring symbol {symbol:?} appears more than once")]
    DuplicateWiringSymbol { symbol: char },

    /// Notch symbol is not part of the alphabet.
    #[error("notch {notch:?} is not part of the alphabet")]
    InvalidNotch { notch: char },

    /// Rotor position is outside 0..=25.
    #[error("rotor position {position} is outside the range 0..=25")]
    PositionOutOfRange { position: usize },

    /// Rotor increment is outside 0..=25.
    #[error("rotor increment {increment} is outside the range 0..=25")]
    IncrementOutOfRange { increment: usize },

    /// Repeat count is below 1.
    #[error("repeat must be at least 1, got {repeat}")]
    InvalidRepeat { repeat: usize },

    /// A rotor set needs at least one rotor.
    #[error("a rotor set needs at least one rotor")]
    EmptyRotorSet,

    /// A per-rotor settings list does not match the number of rotors.
    #[error("expected {expected} {setting}, got {actual}")]
    SettingsMismatch {
        setting: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Rotor model name not recognised.
    #[error("unknown rotor model {0:?}")]
    UnknownRotorModel(String),

    /// Reflector model name not recognised.
    #[error("unknown reflector model {0:?}")]
    UnknownReflectorModel(String),

    /// A numeric setting could not be parsed.
    #[error("invalid setting {0:?}: expected a non-negative integer")]
    InvalidSetting(String),

    /// Message contains a symbol that is neither a space nor in the alphabet.
    #[error("message character {symbol:?} at offset {offset} is not a letter or space")]
    InvalidMessageCharacter { symbol: char, offset: usize },

    /// Index-level lookup outside 0..=25.
    #[error("index {index} is outside the alphabet range 0..=25")]
    InvalidIndex { index: usize },
}

/// Type alias for Result with [`RotorMachineError`].
pub type Result<T> = std::result::Result<T, RotorMachineError>;
