//! Message: validated plaintext/ciphertext accepted by the machine.
//!
//! A [`Message`] only ever holds `A..=Z` and spaces, so encoding it cannot
//! fail.

use std::fmt;
use std::str::FromStr;

use crate::alphabet;
use crate::error::{Result, RotorMachineError};

/// Uppercase letters and spaces, ready to be encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(String);

impl Message {
    /// Upper-cases `raw` (ASCII only) and checks every character.
    ///
    /// # Errors
    /// Returns [`RotorMachineError::InvalidMessageCharacter`] for the first
    /// character that is neither a space nor a letter; `offset` counts
    /// characters, not bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotor_machine::Message;
    ///
    /// let msg = Message::parse("Hello World").unwrap();
    /// assert_eq!(msg.as_str(), "HELLO WORLD");
    ///
    /// assert!(Message::parse("HELLO, WORLD").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let mut normalized = String::with_capacity(raw.len());
        for (offset, symbol) in raw.chars().enumerate() {
            let upper = symbol.to_ascii_uppercase();
            if upper != ' ' && alphabet::index_of(upper).is_none() {
                return Err(RotorMachineError::InvalidMessageCharacter { symbol, offset });
            }
            normalized.push(upper);
        }
        Ok(Message(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters, spaces included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Message {
    type Err = RotorMachineError;

    fn from_str(s: &str) -> Result<Self> {
        Message::parse(s)
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
