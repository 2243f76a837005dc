//! Tokens produced by the ARM assembly lexer.
//!
//! A `Token` borrows its text from the scanned source and carries a
//! `Category`, the tag a highlighting host maps to a visual style. The tag
//! strings returned by `Category::as_str` are the contract with the host.

use derive_new::new;
use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;
use armlex_span::{Span, Spannable};

#[derive(new)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token<'src> {
    text: &'src str,
    span: Span,
    category: Category,
}

impl<'src> Token<'src> {
    /// The exact slice of the source this token covers.
    pub fn text(&self) -> &'src str {
        self.text
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn start(&self) -> usize {
        self.span.offset()
    }

    pub fn end(&self) -> usize {
        self.span.end()
    }
}

impl Spannable for Token<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

/// An error which can be returned when parsing a category tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown token category `{0}`")]
pub struct UnknownCategory(String);

macro_rules! categories {
    ($($(#[$meta:meta])* $variant:ident => $tag:literal,)*) => {
        /// Classification of a lexeme. The set is closed and flat.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Category {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        impl Category {
            /// Every category, in declaration order.
            pub const ALL: &'static [Category] = &[$(Category::$variant,)*];

            /// Return the tag string of this category.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Category::$variant => $tag,)*
                }
            }
        }

        impl FromStr for Category {
            type Err = UnknownCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok(Category::$variant),)*
                    _ => Err(UnknownCategory(s.to_string())),
                }
            }
        }
    };
}

categories! {
    /// A member of the mnemonic/directive vocabulary.
    Keyword => "keyword",
    Identifier => "identifier",
    /// A symbol run which is exactly one of `+ - * =`.
    OperatorSymbol => "operator.symbol",
    OperatorOther => "operator.other",
    BracketCurly => "bracket.curly",
    BracketSquare => "bracket.square",
    BracketParenthesis => "bracket.parenthesis",
    /// `#0x..`
    ImmediateHex => "number.immediate.hex",
    /// `#0b..`
    ImmediateBin => "number.immediate.bin",
    /// `#..`
    ImmediateDec => "number.immediate.dec",
    BareHex => "number.bare.hex",
    BareBin => "number.bare.bin",
    BareDec => "number.bare.dec",
    /// `,` or `.`
    Delimiter => "delimiter",
    String => "string",
    StringEscape => "string.escape",
    StringEscapeInvalid => "string.escape.invalid",
    /// A string opened but never closed on its line.
    StringInvalid => "string.invalid",
    StringQuoteOpen => "string.quote.open",
    StringQuoteClose => "string.quote.close",
    Char => "char",
    CharInvalid => "char.invalid",
    Comment => "comment",
    /// `>>;` comment marking a line expected to evaluate successfully.
    CommentExpectPass => "comment.expect-pass",
    /// `>>-` comment marking a line expected to fail.
    CommentExpectFail => "comment.expect-fail",
    Whitespace => "whitespace",
    /// A character no rule accepts.
    Invalid => "invalid",
}

impl Category {
    /// Return true if the category marks malformed source.
    pub fn is_malformed(&self) -> bool {
        use Category::*;
        matches!(self, Invalid | StringInvalid | StringEscapeInvalid | CharInvalid)
    }

    /// Return true if the category is one of the six numeric literal forms.
    pub fn is_number(&self) -> bool {
        use Category::*;
        matches!(
            self,
            ImmediateHex | ImmediateBin | ImmediateDec | BareHex | BareBin | BareDec
        )
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
