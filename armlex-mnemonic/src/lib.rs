//! Provide the closed vocabulary of ARM mnemonics and assembler directives.
//!
//! The vocabulary is definitional: a lexeme is a keyword exactly when its
//! upper-cased spelling is listed, so plausible spellings which are not in
//! the table (for example `ADDEQS`, with the condition before `S`) are not
//! keywords.

use std::fmt;
use thiserror::Error;
use table::MNEMONICS;

mod table;

/// Length of the longest entry in the vocabulary.
pub const MAX_LEN: usize = 7;

/// An error which can be returned when a lexeme is not in the vocabulary.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[error("`{0}` is not a known mnemonic or directive")]
pub struct UnknownMnemonic(String);

/// A vocabulary entry in its canonical upper-case spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mnemonic(&'static str);

impl Mnemonic {
    /// Look the lexeme up, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use armlex_mnemonic::Mnemonic;
    /// assert_eq!(Mnemonic::lookup("movS").map(|m| m.as_str()), Some("MOVS"));
    /// assert_eq!(Mnemonic::lookup("ADDI"), None);
    /// ```
    pub fn lookup(lexeme: &str) -> Option<Self> {
        let bytes = lexeme.as_bytes();
        if bytes.is_empty() || bytes.len() > MAX_LEN {
            return None;
        }

        let mut buf = [0u8; MAX_LEN];
        let upper = &mut buf[..bytes.len()];
        upper.copy_from_slice(bytes);
        upper.make_ascii_uppercase();
        let upper = &*upper;

        MNEMONICS
            .binary_search_by(|probe| probe.as_bytes().cmp(upper))
            .ok()
            .map(|index| Mnemonic(MNEMONICS[index]))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl TryFrom<&str> for Mnemonic {
    type Error = UnknownMnemonic;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Mnemonic::lookup(value).ok_or_else(|| UnknownMnemonic(value.to_string()))
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Return true if the lexeme is a mnemonic or directive, ignoring case.
pub fn is_keyword(lexeme: &str) -> bool {
    Mnemonic::lookup(lexeme).is_some()
}

/// Iterate over the whole vocabulary in byte order.
pub fn vocabulary() -> impl Iterator<Item = Mnemonic> {
    MNEMONICS.iter().copied().map(Mnemonic)
}
