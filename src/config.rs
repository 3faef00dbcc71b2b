//! Machine configuration.
//!
//! Collects the rotor models, their positions and increments, the reflector
//! and the repeat count, validates them together, and assembles a
//! [`RotorSet`]. With no overrides the configuration is the historical
//! default: rotors I, II, III, reflector B, positions 0, increments 1,
//! repeat 1.

use crate::error::{Result, RotorMachineError};
use crate::presets::{ReflectorModel, RotorModel};
use crate::rotor;
use crate::rotor_set::RotorSet;

/// Settings for one rotor slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSettings {
    /// Wiring and notch
    pub model: RotorModel,

    /// Initial position (0..=25)
    pub position: usize,

    /// Step per advance (0..=25)
    pub increment: usize,
}

/// Complete configuration for one machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Rotor slots, leftmost first
    pub rotors: Vec<RotorSettings>,

    /// Reflector wiring
    pub reflector: ReflectorModel,

    /// Passes through the chain per direction per character
    pub repeat: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        let rotors = [RotorModel::I, RotorModel::II, RotorModel::III]
            .into_iter()
            .map(|model| RotorSettings {
                model,
                position: 0,
                increment: 1,
            })
            .collect();
        MachineConfig {
            rotors,
            reflector: ReflectorModel::B,
            repeat: 1,
        }
    }
}

impl MachineConfig {
    /// Combines per-rotor lists into a configuration.
    ///
    /// # Errors
    /// - [`RotorMachineError::EmptyRotorSet`] if `models` is empty.
    /// - [`RotorMachineError::SettingsMismatch`] if `positions` or
    ///   `increments` do not have one entry per rotor.
    /// - [`RotorMachineError::PositionOutOfRange`] /
    ///   [`RotorMachineError::IncrementOutOfRange`] for values above 25.
    /// - [`RotorMachineError::InvalidRepeat`] if `repeat < 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotor_machine::config::MachineConfig;
    /// use rotor_machine::presets::{ReflectorModel, RotorModel};
    ///
    /// let config = MachineConfig::from_parts(
    ///     &[RotorModel::I, RotorModel::II, RotorModel::III],
    ///     &[3, 7, 11],
    ///     &[2, 5, 3],
    ///     ReflectorModel::B,
    ///     1,
    /// )
    /// .unwrap();
    /// let mut rs = config.build().unwrap();
    /// assert_eq!(rs.encode_str("ATTACK AT DAWN").unwrap(), "WWXNPS OX GZHG");
    /// ```
    pub fn from_parts(
        models: &[RotorModel],
        positions: &[usize],
        increments: &[usize],
        reflector: ReflectorModel,
        repeat: usize,
    ) -> Result<Self> {
        if models.is_empty() {
            return Err(RotorMachineError::EmptyRotorSet);
        }
        check_len("positions", models.len(), positions.len())?;
        check_len("increments", models.len(), increments.len())?;
        if repeat < 1 {
            return Err(RotorMachineError::InvalidRepeat { repeat });
        }

        let mut rotors = Vec::with_capacity(models.len());
        for ((&model, &position), &increment) in models.iter().zip(positions).zip(increments) {
            rotor::check_position(position)?;
            rotor::check_increment(increment)?;
            rotors.push(RotorSettings {
                model,
                position,
                increment,
            });
        }

        Ok(MachineConfig {
            rotors,
            reflector,
            repeat,
        })
    }

    /// Assembles the rotor set described by this configuration.
    ///
    /// # Errors
    /// Returns any construction error of [`RotorSet::new`] or
    /// [`RotorModel::build`].
    pub fn build(&self) -> Result<RotorSet> {
        let rotors = self
            .rotors
            .iter()
            .map(|settings| settings.model.build(settings.position, settings.increment))
            .collect::<Result<Vec<_>>>()?;
        RotorSet::new(rotors, self.reflector.wiring()?, self.repeat)
    }

    /// Number of rotor slots.
    pub fn num_rotors(&self) -> usize {
        self.rotors.len()
    }
}

/// Parses a comma-separated list of non-negative integers such as `"0,0,0"`.
///
/// Whitespace around entries is ignored.
///
/// # Errors
/// Returns [`RotorMachineError::InvalidSetting`] naming the first entry that
/// is not a non-negative integer.
pub fn parse_settings_list(list: &str) -> Result<Vec<usize>> {
    list.split(',')
        .map(|entry| {
            let entry = entry.trim();
            entry
                .parse()
                .map_err(|_| RotorMachineError::InvalidSetting(entry.to_string()))
        })
        .collect()
}

/// Parses a comma-separated list of rotor models such as `"I,II,III"`.
///
/// # Errors
/// Returns [`RotorMachineError::UnknownRotorModel`] for the first unknown
/// name.
pub fn parse_rotor_list(list: &str) -> Result<Vec<RotorModel>> {
    list.split(',').map(str::parse::<RotorModel>).collect()
}

fn check_len(setting: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(RotorMachineError::SettingsMismatch {
            setting,
            expected,
            actual,
        });
    }
    Ok(())
}
