//! The Gödel numbering encoder.
//!
//! Builds a short formula from a fixed symbol table and displays its
//! Gödel number as a positional prime factorization. The number itself
//! is deliberately never computed: the point is the encoding, and the
//! real value overflows anything worth showing.

use std::time::Duration;

use crate::timer::Countdown;

/// Symbol table in the Nagel & Newman style: each syntactic symbol maps
/// to a small code that becomes a prime's exponent.
pub const ENCODER_SYMBOLS: [(char, u32); 12] = [
    ('~', 1),
    ('v', 2),
    ('>', 3),
    ('E', 4),
    ('=', 5),
    ('0', 6),
    ('s', 7),
    ('(', 8),
    (')', 9),
    ('a', 10),
    ('x', 11),
    ('y', 12),
];

/// First ten primes, one per formula position.
pub const PRIMES: [u32; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// Formula length cap; also the number of primes on display.
const MAX_FORMULA: usize = 10;

/// Mock computation delay before the factorization is revealed.
const CALC_DELAY: Duration = Duration::from_millis(1500);

/// One term of the factorization display: `prime ^ code` for `symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Factor {
    pub prime: u32,
    pub code: u32,
    pub symbol: char,
}

#[derive(Debug, Default)]
pub struct Encoder {
    formula: Vec<char>,
    calculating: Option<Countdown>,
    encoded: bool,
    /// Cursor over the symbol keyboard.
    cursor: usize,
}

impl Encoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn code_of(symbol: char) -> Option<u32> {
        ENCODER_SYMBOLS
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, code)| *code)
    }

    #[must_use]
    pub fn formula(&self) -> &[char] {
        &self.formula
    }

    #[must_use]
    pub fn is_calculating(&self) -> bool {
        self.calculating.is_some()
    }

    #[must_use]
    pub fn is_encoded(&self) -> bool {
        self.encoded
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_next(&mut self) {
        self.cursor = (self.cursor + 1) % ENCODER_SYMBOLS.len();
    }

    pub fn cursor_prev(&mut self) {
        self.cursor = (self.cursor + ENCODER_SYMBOLS.len() - 1) % ENCODER_SYMBOLS.len();
    }

    /// Append the symbol under the keyboard cursor.
    pub fn push_selected(&mut self) {
        self.push(ENCODER_SYMBOLS[self.cursor].0);
    }

    /// Append a symbol. Unknown symbols and pushes past the cap are
    /// ignored; any displayed result is invalidated.
    pub fn push(&mut self, symbol: char) {
        if Self::code_of(symbol).is_none() || self.formula.len() >= MAX_FORMULA {
            return;
        }
        self.formula.push(symbol);
        self.invalidate();
    }

    pub fn backspace(&mut self) {
        self.formula.pop();
        self.invalidate();
    }

    pub fn clear(&mut self) {
        self.formula.clear();
        self.invalidate();
    }

    /// Start the mock computation. No-op on an empty formula or while a
    /// computation is already running.
    pub fn encode(&mut self) {
        if self.formula.is_empty() || self.calculating.is_some() {
            return;
        }
        self.encoded = false;
        self.calculating = Some(Countdown::new(CALC_DELAY));
    }

    pub fn tick(&mut self, delta: Duration) {
        if let Some(countdown) = self.calculating.as_mut()
            && countdown.tick(delta)
        {
            self.calculating = None;
            self.encoded = true;
        }
    }

    /// The positional factorization, available once encoding finished:
    /// the i-th prime raised to the i-th symbol's code.
    #[must_use]
    pub fn factorization(&self) -> Vec<Factor> {
        if !self.encoded {
            return Vec::new();
        }
        self.formula
            .iter()
            .zip(PRIMES.iter())
            .filter_map(|(&symbol, &prime)| {
                Self::code_of(symbol).map(|code| Factor {
                    prime,
                    code,
                    symbol,
                })
            })
            .collect()
    }

    fn invalidate(&mut self) {
        self.encoded = false;
        self.calculating = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_is_capped_at_ten_symbols() {
        let mut enc = Encoder::new();
        for _ in 0..11 {
            enc.push('s');
        }
        assert_eq!(enc.formula().len(), 10);
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        let mut enc = Encoder::new();
        enc.push('Z');
        assert!(enc.formula().is_empty());
    }

    #[test]
    fn encode_reveals_factorization_after_the_delay() {
        let mut enc = Encoder::new();
        for c in ['0', '=', '0'] {
            enc.push(c);
        }
        enc.encode();
        assert!(enc.is_calculating());
        assert!(enc.factorization().is_empty());

        enc.tick(Duration::from_millis(1500));
        assert!(enc.is_encoded());
        let factors = enc.factorization();
        assert_eq!(
            factors,
            vec![
                Factor { prime: 2, code: 6, symbol: '0' },
                Factor { prime: 3, code: 5, symbol: '=' },
                Factor { prime: 5, code: 6, symbol: '0' },
            ]
        );
    }

    #[test]
    fn editing_invalidates_a_displayed_result() {
        let mut enc = Encoder::new();
        enc.push('~');
        enc.encode();
        enc.tick(Duration::from_secs(2));
        assert!(enc.is_encoded());

        enc.backspace();
        assert!(!enc.is_encoded());
        assert!(enc.factorization().is_empty());
    }

    #[test]
    fn encode_on_empty_formula_is_a_no_op() {
        let mut enc = Encoder::new();
        enc.encode();
        assert!(!enc.is_calculating());
    }

    #[test]
    fn keyboard_cursor_wraps() {
        let mut enc = Encoder::new();
        enc.cursor_prev();
        assert_eq!(enc.cursor(), ENCODER_SYMBOLS.len() - 1);
        enc.cursor_next();
        assert_eq!(enc.cursor(), 0);
    }
}
