//! Periodicity collapse.

/// Shortest prefix that the whole sequence is an exact repetition of.
///
/// `abcabcabc` gives `abc`; a sequence without such structure is returned
/// unchanged.
pub fn minimal_period<T: PartialEq>(symbols: &[T]) -> &[T] {
    let n = symbols.len();
    (1..=n / 2)
        .filter(|len| n % len == 0)
        .find(|&len| symbols.chunks(len).all(|chunk| chunk == &symbols[..len]))
        .map_or(symbols, |len| &symbols[..len])
}
