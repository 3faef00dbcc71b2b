//! Rotor: a single rotating substitution unit.
//!
//! A rotor owns its wiring and notch, plus the mutable position and step
//! increment. The wiring lookups themselves ignore the position; the
//! relative offset between neighbouring rotors is applied by
//! [`RotorSet`](crate::RotorSet) while the signal travels between them.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::{Result, RotorMachineError};
use crate::wiring::Wiring;

/// Largest accepted position or increment.
const MAX_SETTING: usize = ALPHABET_LEN - 1;

/// Rotating substitution unit with wiring, notch, position and increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Wiring,
    notch: char,
    position: usize,
    increment: usize,
}

impl Rotor {
    /// Creates a rotor.
    ///
    /// # Parameters
    /// - `wiring`: The substitution table.
    /// - `notch`: Symbol that triggers a carry when it sits at `position`.
    /// - `position`: Initial rotational offset (0..=25).
    /// - `increment`: Step applied on every advance (0..=25).
    ///
    /// # Errors
    /// - [`RotorMachineError::InvalidNotch`] if `notch` is not in `A..=Z`.
    /// - [`RotorMachineError::PositionOutOfRange`] if `position > 25`.
    /// - [`RotorMachineError::IncrementOutOfRange`] if `increment > 25`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotor_machine::{Rotor, Wiring};
    ///
    /// let wiring = Wiring::new("BDFHJLCPRTXVZNYEIWGAKMUSQO").unwrap();
    /// let mut rotor = Rotor::new(wiring, 'V', 10, 1).unwrap();
    /// assert!(!rotor.at_notch());
    /// rotor.advance();
    /// assert!(rotor.at_notch());
    /// ```
    pub fn new(wiring: Wiring, notch: char, position: usize, increment: usize) -> Result<Self> {
        if alphabet::index_of(notch).is_none() {
            return Err(RotorMachineError::InvalidNotch { notch });
        }
        check_position(position)?;
        check_increment(increment)?;
        Ok(Rotor {
            wiring,
            notch,
            position,
            increment,
        })
    }

    /// Alphabet index of the symbol wired at `pos`.
    ///
    /// # Errors
    /// Returns [`RotorMachineError::InvalidIndex`] if `pos >= 26`.
    pub fn forward(&self, pos: usize) -> Result<usize> {
        self.wiring.forward(pos)
    }

    /// Slot `i` such that `wiring[i] == ALPHABET[pos]`.
    ///
    /// # Errors
    /// Returns [`RotorMachineError::InvalidIndex`] if `pos >= 26`.
    pub fn backward(&self, pos: usize) -> Result<usize> {
        self.wiring.backward(pos)
    }

    /// Moves the rotor by its increment, wrapping at 26.
    pub fn advance(&mut self) {
        self.position = (self.position + self.increment) % ALPHABET_LEN;
    }

    /// `true` when the symbol at the current position is the notch.
    pub fn at_notch(&self) -> bool {
        self.wiring.symbol_at(self.position) == Some(self.notch)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// # Errors
    /// Returns [`RotorMachineError::PositionOutOfRange`] if `position > 25`.
    pub fn set_position(&mut self, position: usize) -> Result<()> {
        check_position(position)?;
        self.position = position;
        Ok(())
    }

    /// Sets a position already checked by the caller.
    pub(crate) fn restore_position(&mut self, position: usize) {
        self.position = position % ALPHABET_LEN;
    }

    pub fn increment(&self) -> usize {
        self.increment
    }

    /// # Errors
    /// Returns [`RotorMachineError::IncrementOutOfRange`] if `increment > 25`.
    pub fn set_increment(&mut self, increment: usize) -> Result<()> {
        check_increment(increment)?;
        self.increment = increment;
        Ok(())
    }

    pub fn notch(&self) -> char {
        self.notch
    }

    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    pub(crate) fn map_forward(&self, pos: usize) -> usize {
        self.wiring.map_forward(pos)
    }

    pub(crate) fn map_backward(&self, pos: usize) -> usize {
        self.wiring.map_backward(pos)
    }
}

pub(crate) fn check_position(position: usize) -> Result<()> {
    if position > MAX_SETTING {
        return Err(RotorMachineError::PositionOutOfRange { position });
    }
    Ok(())
}

pub(crate) fn check_increment(increment: usize) -> Result<()> {
    if increment > MAX_SETTING {
        return Err(RotorMachineError::IncrementOutOfRange { increment });
    }
    Ok(())
}
