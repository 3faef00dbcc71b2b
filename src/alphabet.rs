//! The fixed 26-symbol alphabet used for every index/character conversion.

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Ordered reference alphabet, index 0..=25.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Returns the alphabet index of `symbol`, or `None` if it is not an
/// uppercase ASCII letter.
///
/// # Examples
///
/// ```
/// use rotor_machine::alphabet;
///
/// assert_eq!(alphabet::index_of('A'), Some(0));
/// assert_eq!(alphabet::index_of('Z'), Some(25));
/// assert_eq!(alphabet::index_of('a'), None);
/// ```
pub fn index_of(symbol: char) -> Option<usize> {
    if symbol.is_ascii_uppercase() {
        Some((symbol as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Returns the symbol at `index`, or `None` if `index >= 26`.
pub fn symbol_at(index: usize) -> Option<char> {
    ALPHABET.get(index).copied()
}

/// Modulo 26 that is never negative, even for negative `value`.
pub fn pos_mod(value: i64) -> usize {
    let len = ALPHABET_LEN as i64;
    (((value % len) + len) % len) as usize
}
