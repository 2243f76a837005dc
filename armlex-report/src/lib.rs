//! Render caret diagnostics pointing into source text.

use std::fmt;
use armlex_span::Span;
use unicode_width::UnicodeWidthStr;

/// Report a diagnostic to stderr.
pub fn report(input: &str, span: Span, name: &str, what: &str, msg: &str) {
    eprint!("{}", Diagnostic { input, span, name, what, msg });
}

/// Render a diagnostic for `span` of `input`.
///
/// A span on a single line gets one excerpt with a caret underline. A span
/// crossing lines shows its first and last lines.
pub fn render(input: &str, span: Span, name: &str, what: &str, msg: &str) -> String {
    Diagnostic { input, span, name, what, msg }.to_string()
}

struct Diagnostic<'a> {
    input: &'a str,
    span: Span,
    name: &'a str,
    what: &'a str,
    msg: &'a str,
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = position(self.input, self.span.offset());
        let end = position(self.input, self.span.end());

        let lines = self.input.split('\n').collect::<Vec<_>>();
        let line_at = |n: usize| {
            let line = lines.get(n - 1).copied().unwrap_or_default();
            line.strip_suffix('\r').unwrap_or(line)
        };
        // Offsets past a stripped `\r` land on the end of the line.
        let upto = |line: &str, at: usize| at.min(line.len());

        writeln!(f, "[error] {} at {}", self.what, self.name)?;
        if start.0 == end.0 {
            let line = line_at(start.0);
            let (from, to) = (upto(line, start.1), upto(line, end.1));
            let linenum = " ".repeat(start.0.to_string().width());
            let padding = " ".repeat(line[..from].width());
            let indicator = "^".repeat(line[from..to].width().max(1));
            writeln!(f, "{} | {}", start.0, line)?;
            writeln!(f, "{}   {}{} {}", linenum, padding, indicator, self.msg)
        } else {
            let line = line_at(start.0);
            let from = upto(line, start.1);
            let linenum = " ".repeat(end.0.to_string().width());
            let padding = " ".repeat(line[..from].width());
            let indicator = "^".repeat(line[from..].width());
            writeln!(f, "{} | {}", start.0, line)?;
            writeln!(f, "{} : {}{}", linenum, padding, indicator)?;

            let line = line_at(end.0);
            let indicator = "^".repeat(line[..upto(line, end.1)].width());
            writeln!(f, "{} | {}", end.0, line)?;
            writeln!(f, "{}   {} {}", linenum, indicator, self.msg)
        }
    }
}

/// Return line (1-indexing) and byte offset on the line of `offset`.
fn position(input: &str, offset: usize) -> (usize, usize) {
    let mut position = (1, 0);
    for (at, ch) in input.char_indices() {
        if at >= offset {
            break;
        }

        if ch == '\n' {
            position.0 += 1;
            position.1 = 0;
        } else {
            position.1 += ch.len_utf8();
        }
    }
    position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line() {
        let input = "mov r0, #5\nmov r1, <\n";
        let text = render(input, Span::new(19, 1), "a.s", "while lexing", "invalid character");
        let expected = concat!(
            "[error] while lexing at a.s\n",
            "2 | mov r1, <\n",
            "            ^ invalid character\n",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn wide_characters_widen_underline() {
        let input = "; 日本\n\\";
        let text = render(input, Span::new(1, 7), "a.s", "while lexing", "x");
        assert!(text.ends_with("1 | ; 日本\n     ^^^^^ x\n"), "{text}");
    }

    #[test]
    fn multi_line() {
        let input = "\"ab\ncd\"";
        let text = render(input, Span::new(1, 5), "a.s", "while lexing", "spans lines");
        let expected = concat!(
            "[error] while lexing at a.s\n",
            "1 | \"ab\n",
            "  :  ^^\n",
            "2 | cd\"\n",
            "    ^^ spans lines\n",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn carriage_return_is_not_printed() {
        let input = "\"ab\r\nmov";
        let text = render(input, Span::new(0, 3), "a.s", "while lexing", "unterminated");
        assert!(text.contains("1 | \"ab\n"), "{text}");
        assert!(text.ends_with("    ^^^ unterminated\n"), "{text}");
    }

    #[test]
    fn span_past_last_line() {
        let text = render("mov\n", Span::new(4, 0), "a.s", "while lexing", "end");
        assert!(text.contains("2 | \n"), "{text}");
    }

    #[test]
    fn diagnostic_formats_into_any_writer() {
        use std::fmt::Write;

        let input = "mov r0, <";
        let span = Span::new(8, 1);
        let diagnostic = Diagnostic { input, span, name: "a.s", what: "while lexing", msg: "x" };
        let mut out = String::from("> ");
        write!(out, "{}", diagnostic).unwrap();
        assert_eq!(out, format!("> {}", render(input, span, "a.s", "while lexing", "x")));
        assert!(out.ends_with("            ^ x\n"), "{out}");
    }

    #[test]
    fn positions() {
        assert_eq!(position("ab\ncd", 0), (1, 0));
        assert_eq!(position("ab\ncd", 4), (2, 1));
        assert_eq!(position("é\nx", 2), (1, 2));
    }
}
