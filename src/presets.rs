//! Historical rotor and reflector wirings.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RotorMachineError};
use crate::rotor::Rotor;
use crate::rotor_set::RotorSet;
use crate::wiring::Wiring;

/// Historical rotor wirings I to V.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorModel {
    I,
    II,
    III,
    IV,
    V,
}

impl RotorModel {
    /// All models, in numeral order.
    pub const ALL: [RotorModel; 5] = [
        RotorModel::I,
        RotorModel::II,
        RotorModel::III,
        RotorModel::IV,
        RotorModel::V,
    ];

    pub fn wiring_table(self) -> &'static str {
        match self {
            RotorModel::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            RotorModel::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            RotorModel::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            RotorModel::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            RotorModel::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
        }
    }

    pub fn notch(self) -> char {
        match self {
            RotorModel::I => 'Q',
            RotorModel::II => 'E',
            RotorModel::III => 'V',
            RotorModel::IV => 'J',
            RotorModel::V => 'Z',
        }
    }

    /// Builds a rotor of this model at `position` with step `increment`.
    ///
    /// # Errors
    /// Returns the range errors of [`Rotor::new`].
    pub fn build(self, position: usize, increment: usize) -> Result<Rotor> {
        Rotor::new(
            Wiring::new(self.wiring_table())?,
            self.notch(),
            position,
            increment,
        )
    }

    fn name(self) -> &'static str {
        match self {
            RotorModel::I => "I",
            RotorModel::II => "II",
            RotorModel::III => "III",
            RotorModel::IV => "IV",
            RotorModel::V => "V",
        }
    }
}

impl FromStr for RotorModel {
    type Err = RotorMachineError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        RotorModel::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RotorMachineError::UnknownRotorModel(s.to_string()))
    }
}

impl fmt::Display for RotorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Historical reflector wirings A, B and C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorModel {
    A,
    B,
    C,
}

impl ReflectorModel {
    pub const ALL: [ReflectorModel; 3] = [ReflectorModel::A, ReflectorModel::B, ReflectorModel::C];

    pub fn wiring_table(self) -> &'static str {
        match self {
            ReflectorModel::A => "EJMZALYXVBWFCRQUONTSPIKHGD",
            ReflectorModel::B => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            ReflectorModel::C => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
        }
    }

    pub fn wiring(self) -> Result<Wiring> {
        Wiring::new(self.wiring_table())
    }

    fn name(self) -> &'static str {
        match self {
            ReflectorModel::A => "A",
            ReflectorModel::B => "B",
            ReflectorModel::C => "C",
        }
    }
}

impl FromStr for ReflectorModel {
    type Err = RotorMachineError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ReflectorModel::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RotorMachineError::UnknownReflectorModel(s.to_string()))
    }
}

impl fmt::Display for ReflectorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rotors I, II, III (left to right), reflector B, all positions 0,
/// increments 1, repeat 1.
///
/// # Examples
///
/// ```
/// use rotor_machine::presets;
///
/// let mut rs = presets::default_rotor_set().unwrap();
/// assert_eq!(rs.encode_str("A").unwrap(), "B");
/// ```
pub fn default_rotor_set() -> Result<RotorSet> {
    let rotors = [RotorModel::I, RotorModel::II, RotorModel::III]
        .into_iter()
        .map(|model| model.build(0, 1))
        .collect::<Result<Vec<_>>>()?;
    RotorSet::new(rotors, ReflectorModel::B.wiring()?, 1)
}
