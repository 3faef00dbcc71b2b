//! RotorSet: ordered rotor chain, reflector and repeat count.
//!
//! Orchestrates odometer stepping (including the double-step anomaly of
//! the middle rotors), the forward pass through the chain, the reflector,
//! and the backward pass, for every character of a message.
//!
//! Rotor index 0 is the leftmost, slowest rotor; the last index is the
//! rightmost rotor, which steps on every character.

use tracing::{debug, trace, warn};

use crate::alphabet::{self, ALPHABET, ALPHABET_LEN};
use crate::error::{Result, RotorMachineError};
use crate::message::Message;
use crate::rotor::{self, Rotor};
use crate::wiring::Wiring;

/// Rotor chain plus reflector: the complete cipher machine.
///
/// # Architecture
///
/// ```text
/// input ─► +offset ─► [rotor n-1 … rotor 0] × repeat ─► reflector
///                                                          │
/// output ◄─ −offset ◄─ [rotor 0 … rotor n-1] × repeat ◄────┘
/// ```
///
/// The offset is the rightmost rotor's position. Between two neighbours
/// the signal is re-indexed by the difference of their positions.
#[derive(Debug, Clone)]
pub struct RotorSet {
    rotors: Vec<Rotor>,
    reflector: Wiring,
    repeat: usize,
    ground_settings: Vec<usize>,
}

impl RotorSet {
    /// Assembles a rotor set.
    ///
    /// The current rotor positions become the ground settings restored by
    /// [`reset`](Self::reset).
    ///
    /// # Errors
    /// - [`RotorMachineError::EmptyRotorSet`] if `rotors` is empty.
    /// - [`RotorMachineError::InvalidRepeat`] if `repeat < 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotor_machine::{Rotor, RotorSet, Wiring};
    ///
    /// let rotor = Rotor::new(Wiring::new("BDFHJLCPRTXVZNYEIWGAKMUSQO").unwrap(), 'V', 0, 1).unwrap();
    /// let reflector = Wiring::new("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
    ///
    /// let mut rs = RotorSet::new(vec![rotor], reflector, 1).unwrap();
    /// assert_eq!(rs.encode_str("HELLO").unwrap(), "ZUQUJ");
    /// ```
    pub fn new(rotors: Vec<Rotor>, reflector: Wiring, repeat: usize) -> Result<Self> {
        if rotors.is_empty() {
            return Err(RotorMachineError::EmptyRotorSet);
        }
        check_repeat(repeat)?;
        if !reflector.is_involution() {
            warn!(
                reflector = %reflector,
                "reflector is not an involution, encoding will not be reciprocal"
            );
        }

        let ground_settings: Vec<usize> = rotors.iter().map(Rotor::position).collect();
        debug!(
            rotors = rotors.len(),
            repeat,
            positions = ?ground_settings,
            "rotor set assembled"
        );

        Ok(RotorSet {
            rotors,
            reflector,
            repeat,
            ground_settings,
        })
    }

    // ──────── Stepping ────────

    /// Advances the chain once, before a character is encoded.
    ///
    /// 1. The rightmost rotor always advances.
    /// 2. Every interior rotor (not first, not last) that sits on its notch
    ///    advances (double step), scanning right to left.
    /// 3. Scanning from the rightmost rotor down to index 1, every rotor on
    ///    its notch advances its left neighbour.
    ///
    /// Step 3 sees the positions produced by steps 1 and 2. A single-rotor
    /// set only performs step 1.
    pub fn step(&mut self) {
        let last = self.rotors.len() - 1;

        self.rotors[last].advance();

        if let Some(interior) = self.rotors.get_mut(1..last) {
            for rotor in interior.iter_mut().rev() {
                if rotor.at_notch() {
                    rotor.advance();
                }
            }
        }

        for i in (1..=last).rev() {
            if self.rotors[i].at_notch() {
                self.rotors[i - 1].advance();
            }
        }
    }

    // ──────── Signal path ────────

    /// Passes `pos` through the chain from the rightmost rotor to the
    /// leftmost, re-indexing between neighbours.
    ///
    /// `pos` is reduced modulo 26.
    pub fn traverse_forward(&self, pos: usize) -> usize {
        let mut pos = pos % ALPHABET_LEN;
        for i in (0..self.rotors.len()).rev() {
            let rotor = &self.rotors[i];
            pos = rotor.map_forward(pos);
            if i != 0 {
                pos = shift(pos, rotor.position(), self.rotors[i - 1].position());
            }
        }
        pos
    }

    /// Passes `pos` through the chain from the leftmost rotor to the
    /// rightmost; inverse of [`traverse_forward`](Self::traverse_forward)
    /// for fixed positions.
    ///
    /// `pos` is reduced modulo 26.
    pub fn traverse_backward(&self, pos: usize) -> usize {
        let mut pos = pos % ALPHABET_LEN;
        let last = self.rotors.len() - 1;
        for (i, rotor) in self.rotors.iter().enumerate() {
            pos = rotor.map_backward(pos);
            if i != last {
                pos = shift(pos, rotor.position(), self.rotors[i + 1].position());
            }
        }
        pos
    }

    /// Alphabet index of `reflector[pos]`. The reflector never rotates.
    ///
    /// `pos` is reduced modulo 26.
    pub fn reflect(&self, pos: usize) -> usize {
        self.reflector.map_forward(pos)
    }

    // ──────── Encoding ────────

    /// Encodes `message`, stepping the rotors once per character.
    ///
    /// Spaces are copied through unchanged but still step the rotors, so
    /// after the call every rotor has moved through `message.len()` step
    /// events. Encoding the result again from the same starting positions
    /// yields the original text when the reflector is an involution.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotor_machine::{presets, Message};
    ///
    /// let mut rs = presets::default_rotor_set().unwrap();
    /// let plain = Message::parse("HELLO WORLD").unwrap();
    /// let cipher = rs.encode(&plain);
    /// assert_eq!(cipher, "ILBDA QQDPC");
    ///
    /// rs.reset();
    /// let back = rs.encode(&Message::parse(&cipher).unwrap());
    /// assert_eq!(back, "HELLO WORLD");
    /// ```
    pub fn encode(&mut self, message: &Message) -> String {
        let mut encoded = String::with_capacity(message.len());
        for symbol in message.as_str().chars() {
            self.step();
            trace!(symbol = %symbol, positions = ?self.positions(), "rotors stepped");

            match alphabet::index_of(symbol) {
                Some(index) => encoded.push(self.encode_index(index)),
                // Message holds only letters and spaces.
                None => encoded.push(symbol),
            }
        }
        encoded
    }

    /// Validates `raw` as a [`Message`] and encodes it.
    ///
    /// # Errors
    /// Returns [`RotorMachineError::InvalidMessageCharacter`] if `raw`
    /// contains anything other than letters and spaces. The rotors are not
    /// stepped in that case.
    pub fn encode_str(&mut self, raw: &str) -> Result<String> {
        let message = Message::parse(raw)?;
        Ok(self.encode(&message))
    }

    fn encode_index(&self, index: usize) -> char {
        let offset = self.rightmost().position();
        let mut pos = (index + offset) % ALPHABET_LEN;

        for _ in 0..self.repeat {
            pos = self.traverse_forward(pos);
        }
        pos = self.reflect(pos);
        for _ in 0..self.repeat {
            pos = self.traverse_backward(pos);
        }

        ALPHABET[alphabet::pos_mod(pos as i64 - offset as i64)]
    }

    // ──────── Settings ────────

    /// Current rotor positions, leftmost first.
    pub fn positions(&self) -> Vec<usize> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Moves every rotor to the given position and records them as the new
    /// ground settings.
    ///
    /// # Errors
    /// - [`RotorMachineError::SettingsMismatch`] if `positions` does not have
    ///   one entry per rotor.
    /// - [`RotorMachineError::PositionOutOfRange`] if any entry exceeds 25.
    ///
    /// Nothing changes on error.
    pub fn set_positions(&mut self, positions: &[usize]) -> Result<()> {
        if positions.len() != self.rotors.len() {
            return Err(RotorMachineError::SettingsMismatch {
                setting: "positions",
                expected: self.rotors.len(),
                actual: positions.len(),
            });
        }
        for &position in positions {
            rotor::check_position(position)?;
        }
        for (rotor, &position) in self.rotors.iter_mut().zip(positions) {
            rotor.restore_position(position);
        }
        self.ground_settings = positions.to_vec();
        Ok(())
    }

    /// Returns every rotor to its ground setting.
    pub fn reset(&mut self) {
        for (rotor, &position) in self.rotors.iter_mut().zip(&self.ground_settings) {
            rotor.restore_position(position);
        }
    }

    pub fn repeat(&self) -> usize {
        self.repeat
    }

    /// # Errors
    /// Returns [`RotorMachineError::InvalidRepeat`] if `repeat < 1`.
    pub fn set_repeat(&mut self, repeat: usize) -> Result<()> {
        check_repeat(repeat)?;
        self.repeat = repeat;
        Ok(())
    }

    /// The rotors, leftmost first.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Mutable access to one rotor, e.g. to change its increment.
    ///
    /// Position changes made here do not alter the ground settings.
    pub fn rotor_mut(&mut self, index: usize) -> Option<&mut Rotor> {
        self.rotors.get_mut(index)
    }

    pub fn reflector(&self) -> &Wiring {
        &self.reflector
    }

    /// Number of rotors (always at least 1).
    pub fn num_rotors(&self) -> usize {
        self.rotors.len()
    }

    fn rightmost(&self) -> &Rotor {
        &self.rotors[self.rotors.len() - 1]
    }
}

/// Re-indexes `pos` from a rotor at position `from` into one at `to`.
fn shift(pos: usize, from: usize, to: usize) -> usize {
    alphabet::pos_mod(pos as i64 - from as i64 + to as i64)
}

fn check_repeat(repeat: usize) -> Result<()> {
    if repeat < 1 {
        return Err(RotorMachineError::InvalidRepeat { repeat });
    }
    Ok(())
}
