//! Ordered rule tables, one per mode.
//!
//! Rules are tried in table order and the first one whose pattern matches
//! wins; each pattern is itself greedy. An `Include` entry splices another
//! mode's table in place without pushing that mode.

use armlex_token::Category;
use crate::mode::Mode;
use crate::pattern::{self, Pattern};

/// Symbol runs tagged `operator.symbol`; any other run is `operator.other`.
///
/// `,` never reaches this test because the symbol pattern excludes it, so a
/// comma is always a delimiter.
pub(crate) const OPERATORS: [&str; 5] = ["+", "-", "*", ",", "="];

/// What to do with a matched lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Emit(Category),
    /// `keyword` if the lexeme is in the vocabulary, else `identifier`.
    Classify,
    /// `operator.symbol` if the whole run is in `OPERATORS`, else `operator.other`.
    Operator,
    /// The bracket category matching the character.
    Bracket,
    /// Split into a one-byte opening quote, the body and a one-byte closing quote.
    Quoted { quote: Category, body: Category },
    /// Emit and enter a mode.
    Push(Category, Mode),
    /// Emit and return to the previous mode.
    Pop(Category),
}

#[derive(Clone, Copy)]
pub(crate) enum Entry {
    Rule(Pattern, Action),
    Include(Mode),
}

/// Return the rule table of the mode.
pub(crate) fn table(mode: Mode) -> &'static [Entry] {
    use Action::*;
    use Category::*;
    use Entry::*;

    static ROOT: &[Entry] = &[
        Rule(pattern::identifier, Classify),
        Include(Mode::Whitespace),
        Rule(pattern::bracket, Bracket),
        Rule(pattern::symbols, Operator),
        Rule(pattern::immediate_hex, Emit(ImmediateHex)),
        Rule(pattern::immediate_bin, Emit(ImmediateBin)),
        Rule(pattern::immediate_dec, Emit(ImmediateDec)),
        Rule(pattern::bare_hex, Emit(BareHex)),
        Rule(pattern::bare_bin, Emit(BareBin)),
        Rule(pattern::bare_dec, Emit(BareDec)),
        // After numbers, which never start with `.`.
        Rule(pattern::delimiter, Emit(Delimiter)),
        Rule(pattern::unterminated_string, Emit(StringInvalid)),
        Rule(pattern::double_quote, Push(StringQuoteOpen, Mode::String)),
        Rule(pattern::char_literal, Emit(Char)),
        Rule(pattern::char_escape, Quoted { quote: Char, body: StringEscape }),
        Rule(pattern::single_quote, Emit(CharInvalid)),
        Rule(pattern::any_escape, Emit(StringEscapeInvalid)),
        Rule(pattern::comment, Emit(Comment)),
        Rule(pattern::expect_pass, Emit(CommentExpectPass)),
        Rule(pattern::expect_fail, Emit(CommentExpectFail)),
    ];

    static STRING: &[Entry] = &[
        Rule(pattern::string_text, Emit(String)),
        Rule(pattern::escape, Emit(StringEscape)),
        Rule(pattern::any_escape, Emit(StringEscapeInvalid)),
        Rule(pattern::double_quote, Pop(StringQuoteClose)),
    ];

    static WHITESPACE: &[Entry] = &[
        Rule(pattern::whitespace, Emit(Whitespace)),
    ];

    match mode {
        Mode::Root => ROOT,
        Mode::String => STRING,
        Mode::Whitespace => WHITESPACE,
    }
}

/// Find the first rule of the mode matching at the start of `rest`.
///
/// Return the match length and the rule's action.
pub(crate) fn find(mode: Mode, rest: &str) -> Option<(usize, Action)> {
    table(mode).iter().find_map(|entry| match *entry {
        Entry::Rule(pattern, action) => pattern(rest).map(|len| (len, action)),
        Entry::Include(mode) => find(mode, rest),
    })
}
