//! Anchored matchers used by the rule tables.
//!
//! Every matcher looks at the start of the remaining input and returns the
//! byte length of its greedy match, or `None`. A returned length is never
//! zero and always ends on a character boundary.

/// Signature shared by all matchers.
pub(crate) type Pattern = fn(&str) -> Option<usize>;

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn is_line_end(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

fn is_symbol(b: u8) -> bool {
    b"=!~?:&|+-*/^%".contains(&b)
}

/// Count leading bytes satisfying `pred`.
fn run(s: &str, pred: impl Fn(u8) -> bool) -> usize {
    s.bytes().take_while(|&b| pred(b)).count()
}

fn non_empty(len: usize) -> Option<usize> {
    (len > 0).then_some(len)
}

fn single(s: &str, pred: impl Fn(u8) -> bool) -> Option<usize> {
    s.bytes().next().filter(|&b| pred(b)).map(|_| 1)
}

/// `[a-z_$][\w$]*`, ignoring case.
pub(crate) fn identifier(s: &str) -> Option<usize> {
    single(s, is_ident_start)?;
    Some(1 + run(&s[1..], is_ident_continue))
}

/// `[ \t\r\n]+`
pub(crate) fn whitespace(s: &str) -> Option<usize> {
    non_empty(run(s, |b| matches!(b, b' ' | b'\t' | b'\r' | b'\n')))
}

/// One of `{ } ( ) [ ]`.
pub(crate) fn bracket(s: &str) -> Option<usize> {
    single(s, |b| matches!(b, b'{' | b'}' | b'(' | b')' | b'[' | b']'))
}

/// `[=!~?:&|+\-*/^%]+`
pub(crate) fn symbols(s: &str) -> Option<usize> {
    non_empty(run(s, is_symbol))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Radix {
    Hex,
    Bin,
    Dec,
}

impl Radix {
    fn is_digit(self, b: u8) -> bool {
        match self {
            Radix::Hex => b.is_ascii_hexdigit(),
            Radix::Bin => b == b'0' || b == b'1',
            Radix::Dec => b.is_ascii_digit(),
        }
    }

    /// Return the length of the radix prefix at the start of `s`.
    fn prefix(self, s: &str) -> Option<usize> {
        let marker = match self {
            Radix::Hex => b'x',
            Radix::Bin => b'b',
            Radix::Dec => return Some(0),
        };
        match s.as_bytes() {
            [b'0', m, ..] if m.to_ascii_lowercase() == marker => Some(2),
            _ => None,
        }
    }
}

/// `-?` prefix digit (digit | `_`)*
fn literal(s: &str, radix: Radix) -> Option<usize> {
    let sign = usize::from(s.starts_with('-'));
    let body = &s[sign..];
    let prefix = radix.prefix(body)?;
    let digits = &body[prefix..];
    single(digits, |b| radix.is_digit(b))?;
    let rest = run(&digits[1..], |b| b == b'_' || radix.is_digit(b));
    Some(sign + prefix + 1 + rest)
}

fn immediate(s: &str, radix: Radix) -> Option<usize> {
    let body = s.strip_prefix('#')?;
    literal(body, radix).map(|len| len + 1)
}

pub(crate) fn immediate_hex(s: &str) -> Option<usize> {
    immediate(s, Radix::Hex)
}

pub(crate) fn immediate_bin(s: &str) -> Option<usize> {
    immediate(s, Radix::Bin)
}

pub(crate) fn immediate_dec(s: &str) -> Option<usize> {
    immediate(s, Radix::Dec)
}

pub(crate) fn bare_hex(s: &str) -> Option<usize> {
    literal(s, Radix::Hex)
}

pub(crate) fn bare_bin(s: &str) -> Option<usize> {
    literal(s, Radix::Bin)
}

pub(crate) fn bare_dec(s: &str) -> Option<usize> {
    literal(s, Radix::Dec)
}

/// `,` or `.`
pub(crate) fn delimiter(s: &str) -> Option<usize> {
    single(s, |b| b == b',' || b == b'.')
}

/// A `"` whose string reaches the end of its line without closing.
///
/// The body may hold `\` pairs, but a `\` right before the line end makes
/// the match fail, as does any `"`.
pub(crate) fn unterminated_string(s: &str) -> Option<usize> {
    let body = s.strip_prefix('"')?;
    let bytes = body.as_bytes();
    let mut i = 0;
    loop {
        match bytes.get(i) {
            None => break,
            Some(&b) if is_line_end(b) => break,
            Some(b'"') => return None,
            Some(b'\\') => i += 1 + any_char(&body[i + 1..])?,
            Some(_) => i += 1,
        }
    }
    Some(1 + i)
}

/// A lone `"`.
pub(crate) fn double_quote(s: &str) -> Option<usize> {
    single(s, |b| b == b'"')
}

/// A lone `'`.
pub(crate) fn single_quote(s: &str) -> Option<usize> {
    single(s, |b| b == b'\'')
}

/// Length of the first character unless it ends the line.
fn any_char(s: &str) -> Option<usize> {
    let ch = s.chars().next()?;
    match ch {
        '\n' | '\r' => None,
        _ => Some(ch.len_utf8()),
    }
}

/// `'[^\\']'`
pub(crate) fn char_literal(s: &str) -> Option<usize> {
    let body = s.strip_prefix('\'')?;
    let ch = body.chars().next().filter(|&c| c != '\\' && c != '\'')?;
    let close = &body[ch.len_utf8()..];
    close.starts_with('\'').then(|| ch.len_utf8() + 2)
}

/// A recognised escape between single quotes.
pub(crate) fn char_escape(s: &str) -> Option<usize> {
    let body = s.strip_prefix('\'')?;
    let len = escape(body)?;
    body[len..].starts_with('\'').then_some(len + 2)
}

/// `\` followed by a simple escape letter, `x` with one to four hex
/// digits, `u` with exactly four or `U` with exactly eight.
///
/// Simple letters and `x` match in either case; `u` and `U` stay distinct.
pub(crate) fn escape(s: &str) -> Option<usize> {
    let body = s.strip_prefix('\\')?;
    let hex = |count: usize| run(&body[1..], |b| b.is_ascii_hexdigit()).min(count);
    match body.bytes().next()? {
        b'u' => (hex(4) == 4).then_some(6),
        b'U' => (hex(8) == 8).then_some(10),
        b => match b.to_ascii_lowercase() {
            b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' | b'\\' | b'"' | b'\'' => Some(2),
            b'x' => non_empty(hex(4)).map(|n| n + 2),
            _ => None,
        },
    }
}

/// `\` followed by any character on the same line.
pub(crate) fn any_escape(s: &str) -> Option<usize> {
    let body = s.strip_prefix('\\')?;
    any_char(body).map(|len| len + 1)
}

fn line_comment(s: &str, lead: &str) -> Option<usize> {
    let body = s.strip_prefix(lead)?;
    Some(lead.len() + run(body, |b| !is_line_end(b)))
}

/// `;` through end of line.
pub(crate) fn comment(s: &str) -> Option<usize> {
    line_comment(s, ";")
}

/// `>>;` through end of line.
pub(crate) fn expect_pass(s: &str) -> Option<usize> {
    line_comment(s, ">>;")
}

/// `>>-` through end of line.
pub(crate) fn expect_fail(s: &str) -> Option<usize> {
    line_comment(s, ">>-")
}

/// `[^\\"]+`, crossing line ends.
pub(crate) fn string_text(s: &str) -> Option<usize> {
    non_empty(run(s, |b| b != b'"' && b != b'\\'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_shapes() {
        assert_eq!(identifier("mov r0"), Some(3));
        assert_eq!(identifier("_start:"), Some(6));
        assert_eq!(identifier("$a$1 "), Some(4));
        assert_eq!(identifier("0x10"), None);
        assert_eq!(identifier(""), None);
    }

    #[test]
    fn symbol_runs_exclude_comma() {
        assert_eq!(symbols("+-*/ x"), Some(4));
        assert_eq!(symbols(",+"), None);
        assert_eq!(symbols("#1"), None);
    }

    #[test]
    fn hex_literals() {
        assert_eq!(immediate_hex("#0x1F,"), Some(5));
        assert_eq!(immediate_hex("#-0XdEaD_bEeF"), Some(13));
        assert_eq!(immediate_hex("#0x"), None);
        assert_eq!(immediate_hex("#0x_1"), None);
        assert_eq!(bare_hex("0xFFg"), Some(4));
        assert_eq!(bare_hex("#0x1"), None);
    }

    #[test]
    fn binary_literals() {
        assert_eq!(immediate_bin("#0b1010"), Some(7));
        assert_eq!(bare_bin("0B1_0_1"), Some(7));
        assert_eq!(bare_bin("0b102"), Some(4));
        assert_eq!(bare_bin("0b2"), None);
    }

    #[test]
    fn decimal_literals() {
        assert_eq!(immediate_dec("#10"), Some(3));
        assert_eq!(immediate_dec("#-1_000 "), Some(7));
        assert_eq!(immediate_dec("#x"), None);
        assert_eq!(bare_dec("10"), Some(2));
        assert_eq!(bare_dec("-5"), Some(2));
        assert_eq!(bare_dec("_5"), None);
        assert_eq!(bare_dec("0x1F"), Some(1));
    }

    #[test]
    fn unterminated_strings() {
        assert_eq!(unterminated_string("\"abc"), Some(4));
        assert_eq!(unterminated_string("\"abc\nnext"), Some(4));
        assert_eq!(unterminated_string("\"a\\\"b"), Some(5));
        assert_eq!(unterminated_string("\"abc\""), None);
        assert_eq!(unterminated_string("\"abc\\"), None);
        assert_eq!(unterminated_string("\"abc\\\n"), None);
        assert_eq!(unterminated_string("\""), Some(1));
    }

    #[test]
    fn char_literals() {
        assert_eq!(char_literal("'a'"), Some(3));
        assert_eq!(char_literal("'é'"), Some(4));
        assert_eq!(char_literal("'\\'"), None);
        assert_eq!(char_literal("''"), None);
        assert_eq!(char_literal("'ab'"), None);
        assert_eq!(char_escape("'\\n'"), Some(4));
        assert_eq!(char_escape("'\\x41'"), Some(6));
        assert_eq!(char_escape("'\\q'"), None);
        assert_eq!(char_escape("'\\N'"), Some(4));
    }

    #[test]
    fn escapes() {
        assert_eq!(escape("\\n"), Some(2));
        assert_eq!(escape("\\\""), Some(2));
        assert_eq!(escape("\\x4"), Some(3));
        assert_eq!(escape("\\x41424"), Some(6));
        assert_eq!(escape("\\x"), None);
        assert_eq!(escape("\\u00e9z"), Some(6));
        assert_eq!(escape("\\u00e"), None);
        assert_eq!(escape("\\U0001F600"), Some(10));
        assert_eq!(escape("\\U0001F60"), None);
        assert_eq!(escape("\\q"), None);
        assert_eq!(escape("\\N"), Some(2));
        assert_eq!(escape("\\T"), Some(2));
        assert_eq!(escape("\\X41"), Some(4));
        assert_eq!(escape("\\U00e9"), None);
        assert_eq!(escape("\\Q"), None);
    }

    #[test]
    fn any_escape_stays_on_line() {
        assert_eq!(any_escape("\\q"), Some(2));
        assert_eq!(any_escape("\\é"), Some(3));
        assert_eq!(any_escape("\\\n"), None);
        assert_eq!(any_escape("\\"), None);
    }

    #[test]
    fn comments_stop_at_line_end() {
        assert_eq!(comment("; load\nmov"), Some(6));
        assert_eq!(comment(";\r\n"), Some(1));
        assert_eq!(expect_pass(">>; ok"), Some(6));
        assert_eq!(expect_fail(">>- bad\n"), Some(7));
        assert_eq!(expect_pass(">>- bad"), None);
        assert_eq!(comment(">>; ok"), None);
    }

    #[test]
    fn string_text_spans_lines() {
        assert_eq!(string_text("ab\ncd\"x"), Some(5));
        assert_eq!(string_text("\\n"), None);
        assert_eq!(string_text("\""), None);
    }
}
