use armlex_lexer::{lex, Lexer, Mode};
use armlex_span::Spannable;
use armlex_token::Category;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn tags(input: &str) -> Vec<(&str, &'static str)> {
    lex(input)
        .iter()
        .map(|t| (t.text(), t.category().as_str()))
        .collect()
}

fn category_of(input: &str) -> Category {
    let tokens = lex(input);
    assert_eq!(tokens.len(), 1, "{input:?} should be a single token");
    tokens[0].category()
}

/// Check the partition invariant and return the token count.
fn assert_partition(input: &str) -> usize {
    let tokens = lex(input);
    let mut offset = 0;
    for token in &tokens {
        assert!(!token.span().is_empty(), "empty token in {input:?}");
        assert_eq!(token.start(), offset, "gap or overlap in {input:?}");
        assert_eq!(&input[token.span().range()], token.text());
        offset = token.end();
    }
    assert_eq!(offset, input.len());
    assert_eq!(tokens.iter().map(|t| t.text()).collect::<String>(), input);
    tokens.len()
}

#[test]
fn end_to_end_line() {
    assert_eq!(
        tags("mov r0, #5 ; load\n"),
        [
            ("mov", "keyword"),
            (" ", "whitespace"),
            ("r0", "identifier"),
            (",", "delimiter"),
            (" ", "whitespace"),
            ("#5", "number.immediate.dec"),
            (" ", "whitespace"),
            ("; load", "comment"),
            ("\n", "whitespace"),
        ]
    );
}

#[test]
fn keywords_ignore_case() {
    assert_eq!(category_of("MOV"), Category::Keyword);
    assert_eq!(category_of("mov"), Category::Keyword);
    assert_eq!(category_of("Mov"), Category::Keyword);
    assert_eq!(category_of("MOVX"), Category::Identifier);
    assert_eq!(category_of("ADDI"), Category::Identifier);
    assert_eq!(category_of("addeqs"), Category::Identifier);
    assert_eq!(category_of("addseq"), Category::Keyword);
}

#[test]
fn numeric_literals() {
    assert_eq!(category_of("#0x1F"), Category::ImmediateHex);
    assert_eq!(category_of("#0b11"), Category::ImmediateBin);
    assert_eq!(category_of("#10"), Category::ImmediateDec);
    assert_eq!(category_of("#-10"), Category::ImmediateDec);
    assert_eq!(category_of("0xff_ff"), Category::BareHex);
    assert_eq!(category_of("0b101"), Category::BareBin);
    assert_eq!(category_of("10"), Category::BareDec);
    assert_eq!(category_of("1_000"), Category::BareDec);
}

#[test]
fn sign_before_bare_number_is_an_operator() {
    assert_eq!(tags("-5"), [("-", "operator.symbol"), ("5", "number.bare.dec")]);
}

#[test]
fn incomplete_prefixes_fall_back_to_decimal() {
    assert_eq!(
        tags("#0x 0b2"),
        [
            ("#0", "number.immediate.dec"),
            ("x", "identifier"),
            (" ", "whitespace"),
            ("0", "number.bare.dec"),
            ("b2", "identifier"),
        ]
    );
}

#[test]
fn dots_and_commas_are_delimiters() {
    assert_eq!(
        tags(".text 1.5,"),
        [
            (".", "delimiter"),
            ("text", "identifier"),
            (" ", "whitespace"),
            ("1", "number.bare.dec"),
            (".", "delimiter"),
            ("5", "number.bare.dec"),
            (",", "delimiter"),
        ]
    );
}

#[test]
fn block_transfer() {
    assert_eq!(
        tags("ldmfd sp!, {r0-r3}"),
        [
            ("ldmfd", "keyword"),
            (" ", "whitespace"),
            ("sp", "identifier"),
            ("!", "operator.other"),
            (",", "delimiter"),
            (" ", "whitespace"),
            ("{", "bracket.curly"),
            ("r0", "identifier"),
            ("-", "operator.symbol"),
            ("r3", "identifier"),
            ("}", "bracket.curly"),
        ]
    );
}

#[test]
fn terminated_string() {
    assert_eq!(
        tags("\"abc\""),
        [
            ("\"", "string.quote.open"),
            ("abc", "string"),
            ("\"", "string.quote.close"),
        ]
    );
}

#[test]
fn unterminated_string_takes_rest_of_line() {
    assert_eq!(tags("\"abc"), [("\"abc", "string.invalid")]);
    assert_eq!(
        tags("\"abc ; x\nmov"),
        [
            ("\"abc ; x", "string.invalid"),
            ("\n", "whitespace"),
            ("mov", "keyword"),
        ]
    );
}

#[test]
fn string_escapes() {
    assert_eq!(
        tags(r#""a\tb\x41\qc""#),
        [
            ("\"", "string.quote.open"),
            ("a", "string"),
            ("\\t", "string.escape"),
            ("b", "string"),
            ("\\x41", "string.escape"),
            ("\\q", "string.escape.invalid"),
            ("c", "string"),
            ("\"", "string.quote.close"),
        ]
    );
}

#[test]
fn escape_letters_ignore_case() {
    assert_eq!(
        tags(r#""\T\X41\U0001F600""#),
        [
            ("\"", "string.quote.open"),
            ("\\T", "string.escape"),
            ("\\X41", "string.escape"),
            ("\\U0001F600", "string.escape"),
            ("\"", "string.quote.close"),
        ]
    );
    assert_eq!(
        tags(r"'\N'"),
        [("'", "char"), ("\\N", "string.escape"), ("'", "char")]
    );
}

#[test]
fn escaped_quote_does_not_close() {
    assert_eq!(
        tags(r#""say \"hi\"""#),
        [
            ("\"", "string.quote.open"),
            ("say ", "string"),
            ("\\\"", "string.escape"),
            ("hi", "string"),
            ("\\\"", "string.escape"),
            ("\"", "string.quote.close"),
        ]
    );
}

#[test]
fn trailing_backslash_opens_string_mode() {
    let mut lexer = Lexer::new("\"ab\\");
    let tokens = lexer.by_ref().map(|t| (t.text(), t.category().as_str())).collect::<Vec<_>>();
    assert_eq!(
        tokens,
        [
            ("\"", "string.quote.open"),
            ("ab", "string"),
            ("\\", "invalid"),
        ]
    );
    assert_eq!(lexer.mode(), Mode::String);
}

#[test]
fn character_literals() {
    assert_eq!(tags("'a'"), [("'a'", "char")]);
    assert_eq!(
        tags("'\\n'"),
        [("'", "char"), ("\\n", "string.escape"), ("'", "char")]
    );
    assert_eq!(
        tags("'\\q'"),
        [
            ("'", "char.invalid"),
            ("\\q", "string.escape.invalid"),
            ("'", "char.invalid"),
        ]
    );
    assert_eq!(
        tags("'ab'"),
        [("'", "char.invalid"), ("ab", "identifier"), ("'", "char.invalid")]
    );
}

#[test]
fn comment_variants() {
    assert_eq!(tags("; plain comment"), [("; plain comment", "comment")]);
    assert_eq!(tags(">>; expect pass"), [(">>; expect pass", "comment.expect-pass")]);
    assert_eq!(tags(">>- expect fail"), [(">>- expect fail", "comment.expect-fail")]);
    assert_eq!(
        tags("mov r0, #1 >>; r0 = 1\r\n"),
        [
            ("mov", "keyword"),
            (" ", "whitespace"),
            ("r0", "identifier"),
            (",", "delimiter"),
            (" ", "whitespace"),
            ("#1", "number.immediate.dec"),
            (" ", "whitespace"),
            (">>; r0 = 1", "comment.expect-pass"),
            ("\r\n", "whitespace"),
        ]
    );
}

#[test]
fn pathological_single_characters() {
    assert_eq!(tags("\""), [("\"", "string.invalid")]);
    assert_eq!(tags("'"), [("'", "char.invalid")]);
    assert_eq!(tags("\\"), [("\\", "invalid")]);
    assert_eq!(tags("<"), [("<", "invalid")]);
}

#[test]
fn each_scan_restarts_at_root() {
    let source = "\"open\\";
    assert_eq!(lex(source), lex(source));
    assert_eq!(Lexer::new(source).mode(), Mode::Root);
}

#[test]
fn program_partitions() {
    let program = "\
start   MOV r0, #0x10       ; counter
        ADR r1, table
loop    LDRB r2, [r1], #1
        SUBS r0, r0, #1
        BNE loop            >>- branch target
table   DCB \"hi\\n\", 'x', 0
        END
";
    let count = assert_partition(program);
    assert!(count > 40);
    let malformed = lex(program)
        .into_iter()
        .filter(|t| t.category().is_malformed())
        .collect::<Vec<_>>();
    assert!(malformed.is_empty(), "{malformed:?}");
}

proptest! {
    #[test]
    fn arbitrary_input_is_partitioned(input in any::<String>()) {
        let count = assert_partition(&input);
        prop_assert_eq!(count == 0, input.is_empty());
    }

    #[test]
    fn assembly_like_input_is_partitioned(
        parts in proptest::collection::vec(
            proptest::sample::select(vec![
                "mov", "r0", "#", "-", "0x", "0b", "1", "f", "_", ",", ".", "\"",
                "'", "\\", "n", "u", ";", ">>", " ", "\t", "\r", "\n", "{", "]",
                "é", "<",
            ]),
            0..64,
        )
    ) {
        let input = parts.concat();
        let count = assert_partition(&input);
        prop_assert_eq!(count == 0, input.is_empty());
    }
}
