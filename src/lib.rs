//! Electromechanical rotor cipher machine.
//!
//! Each character's alphabet index passes through a chain of rotating
//! substitution rotors, a static reflector, and back through the rotors in
//! reverse. The rotors advance before every character with odometer-style
//! stepping, notch-triggered carries and the historical double step of the
//! middle rotors.
//!
//! # Architecture
//!
//! ```text
//! Wiring    (validated 26-symbol permutation)
//!     ↕ owned by
//! Rotor     (wiring + notch + position + increment)
//!     ↕ N rotors in sequence, plus a reflector Wiring
//! RotorSet  (orchestrator — stepping + forward pass × repeat + reflect + backward pass × repeat)
//! ```
//!
//! # Examples
//!
//! Encode and decode with the historical I-II-III / B machine:
//!
//! ```
//! use rotor_machine::presets;
//!
//! let mut encoder = presets::default_rotor_set().unwrap();
//! let cipher = encoder.encode_str("ATTACK AT DAWN").unwrap();
//!
//! let mut decoder = presets::default_rotor_set().unwrap();
//! assert_eq!(decoder.encode_str(&cipher).unwrap(), "ATTACK AT DAWN");
//! ```
//!
//! Build a custom machine that runs the chain three times per direction:
//!
//! ```
//! use rotor_machine::config::MachineConfig;
//! use rotor_machine::presets::{ReflectorModel, RotorModel};
//!
//! let config = MachineConfig::from_parts(
//!     &[RotorModel::IV, RotorModel::V, RotorModel::I],
//!     &[5, 12, 20],
//!     &[1, 1, 1],
//!     ReflectorModel::C,
//!     3,
//! )
//! .unwrap();
//! let mut rs = config.build().unwrap();
//! let cipher = rs.encode_str("MEET ME AT NOON").unwrap();
//! assert_eq!(cipher, "YZBD UA KW LQQK");
//! assert_eq!(rs.positions(), vec![5, 13, 9]);
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod presets;

mod message;
mod rotor;
mod rotor_set;
mod wiring;

pub use error::{Result, RotorMachineError};
pub use message::Message;
pub use rotor::Rotor;
pub use rotor_set::RotorSet;
pub use wiring::Wiring;
