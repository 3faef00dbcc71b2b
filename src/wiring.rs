//! Wiring: a validated permutation of the alphabet.
//!
//! Rotors and the reflector both carry a wiring table. Only rotors add
//! position and notch state on top of it; the table itself never changes
//! after construction.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{self, ALPHABET, ALPHABET_LEN};
use crate::error::{Result, RotorMachineError};

/// Marker for an unfilled slot while building the inverse table.
const UNSET: u8 = u8::MAX;

/// A 26-symbol permutation of the alphabet.
///
/// Holds both directions as lookup tables: `to_alpha[slot]` is the alphabet
/// index of the symbol wired at `slot`, and `to_slot[index]` is the slot that
/// carries `ALPHABET[index]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Wiring {
    symbols: [char; ALPHABET_LEN],
    to_alpha: [u8; ALPHABET_LEN],
    to_slot: [u8; ALPHABET_LEN],
}

impl Wiring {
    /// Builds a wiring from its 26 symbols, listed slot by slot.
    ///
    /// # Errors
    /// - [`RotorMachineError::InvalidWiringLength`] if `table` does not hold
    ///   exactly 26 characters.
    /// - [`RotorMachineError::InvalidWiringSymbol`] for a character outside
    ///   `A..=Z`.
    /// - [`RotorMachineError::DuplicateWiringSymbol`] if a symbol repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotor_machine::Wiring;
    ///
    /// let wiring = Wiring::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
    /// assert_eq!(wiring.forward(0).unwrap(), 4);
    ///
    /// assert!(Wiring::new("ABC").is_err());
    /// ```
    pub fn new(table: &str) -> Result<Self> {
        let length = table.chars().count();
        if length != ALPHABET_LEN {
            return Err(RotorMachineError::InvalidWiringLength { length });
        }

        let mut symbols = [' '; ALPHABET_LEN];
        let mut to_alpha = [0u8; ALPHABET_LEN];
        let mut to_slot = [UNSET; ALPHABET_LEN];

        for (slot, symbol) in table.chars().enumerate() {
            let index = alphabet::index_of(symbol)
                .ok_or(RotorMachineError::InvalidWiringSymbol { symbol })?;
            if to_slot[index] != UNSET {
                return Err(RotorMachineError::DuplicateWiringSymbol { symbol });
            }
            symbols[slot] = symbol;
            to_alpha[slot] = index as u8;
            to_slot[index] = slot as u8;
        }

        Ok(Wiring {
            symbols,
            to_alpha,
            to_slot,
        })
    }

    /// Returns the alphabet index of the symbol wired at `pos`.
    ///
    /// # Errors
    /// Returns [`RotorMachineError::InvalidIndex`] if `pos >= 26`.
    pub fn forward(&self, pos: usize) -> Result<usize> {
        self.to_alpha
            .get(pos)
            .map(|&index| index as usize)
            .ok_or(RotorMachineError::InvalidIndex { index: pos })
    }

    /// Returns the slot whose symbol is `ALPHABET[pos]`; inverse of
    /// [`forward`](Self::forward).
    ///
    /// # Errors
    /// Returns [`RotorMachineError::InvalidIndex`] if `pos >= 26`.
    pub fn backward(&self, pos: usize) -> Result<usize> {
        self.to_slot
            .get(pos)
            .map(|&slot| slot as usize)
            .ok_or(RotorMachineError::InvalidIndex { index: pos })
    }

    /// Total forward lookup; `pos` is reduced modulo 26.
    pub(crate) fn map_forward(&self, pos: usize) -> usize {
        self.to_alpha[pos % ALPHABET_LEN] as usize
    }

    /// Total backward lookup; `pos` is reduced modulo 26.
    pub(crate) fn map_backward(&self, pos: usize) -> usize {
        self.to_slot[pos % ALPHABET_LEN] as usize
    }

    /// The symbols in slot order.
    pub fn symbols(&self) -> &[char; ALPHABET_LEN] {
        &self.symbols
    }

    /// The symbol wired at `slot`, or `None` if `slot >= 26`.
    pub fn symbol_at(&self, slot: usize) -> Option<char> {
        self.symbols.get(slot).copied()
    }

    /// `true` if applying the wiring twice is the identity, which is what
    /// makes a reflector reciprocal.
    pub fn is_involution(&self) -> bool {
        (0..ALPHABET_LEN).all(|i| self.map_forward(self.map_forward(i)) == i)
    }
}

impl FromStr for Wiring {
    type Err = RotorMachineError;

    fn from_str(s: &str) -> Result<Self> {
        Wiring::new(s)
    }
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl Default for Wiring {
    /// The identity wiring `A..=Z`.
    fn default() -> Self {
        let mut identity = [0u8; ALPHABET_LEN];
        for (i, item) in identity.iter_mut().enumerate() {
            *item = i as u8;
        }
        Wiring {
            symbols: ALPHABET,
            to_alpha: identity,
            to_slot: identity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";
    const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

    #[test]
    fn test_wiring_is_permutation() {
        let wiring = Wiring::new(ROTOR_I).unwrap();
        let mut seen = [false; ALPHABET_LEN];
        for slot in 0..ALPHABET_LEN {
            let index = wiring.forward(slot).unwrap();
            assert!(!seen[index], "index {} produced twice", index);
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_forward_backward_inverse() {
        let wiring = Wiring::new(ROTOR_I).unwrap();
        for pos in 0..ALPHABET_LEN {
            let out = wiring.forward(pos).unwrap();
            assert_eq!(wiring.backward(out).unwrap(), pos);
        }
    }

    #[test]
    fn test_known_lookups() {
        let wiring = Wiring::new(ROTOR_I).unwrap();
        // slot 0 carries 'E'
        assert_eq!(wiring.forward(0).unwrap(), 4);
        // 'A' sits in slot 20
        assert_eq!(wiring.backward(0).unwrap(), 20);
        assert_eq!(wiring.backward(4).unwrap(), 0);
    }

    #[test]
    fn test_out_of_range_index() {
        let wiring = Wiring::new(ROTOR_I).unwrap();
        assert_eq!(
            wiring.forward(26),
            Err(RotorMachineError::InvalidIndex { index: 26 })
        );
        assert_eq!(
            wiring.backward(100),
            Err(RotorMachineError::InvalidIndex { index: 100 })
        );
    }

    #[test]
    fn test_rejects_short_table() {
        assert_eq!(
            Wiring::new("ABCDEFGHIJKLMNOPQRSTUVWXY"),
            Err(RotorMachineError::InvalidWiringLength { length: 25 })
        );
    }

    #[test]
    fn test_rejects_duplicate() {
        assert_eq!(
            Wiring::new("AACDEFGHIJKLMNOPQRSTUVWXYZ"),
            Err(RotorMachineError::DuplicateWiringSymbol { symbol: 'A' })
        );
    }

    #[test]
    fn test_rejects_lowercase_symbol() {
        assert_eq!(
            Wiring::new("aBCDEFGHIJKLMNOPQRSTUVWXYZ"),
            Err(RotorMachineError::InvalidWiringSymbol { symbol: 'a' })
        );
    }

    #[test]
    fn test_involution() {
        assert!(Wiring::new(REFLECTOR_B).unwrap().is_involution());
        assert!(!Wiring::new(ROTOR_I).unwrap().is_involution());
        assert!(Wiring::default().is_involution());
    }

    #[test]
    fn test_display_and_parse() {
        let wiring: Wiring = ROTOR_I.parse().unwrap();
        assert_eq!(wiring.to_string(), ROTOR_I);
        assert_eq!(wiring.symbol_at(7), Some('Q'));
        assert_eq!(wiring.symbol_at(26), None);
    }

    #[test]
    fn test_total_lookup_wraps() {
        let wiring = Wiring::new(ROTOR_I).unwrap();
        assert_eq!(wiring.map_forward(26), wiring.map_forward(0));
        assert_eq!(wiring.map_backward(30), wiring.map_backward(4));
    }
}
