use legoc::{
    config::{Config, IdentifierPolicy, KeywordSet, OperatorSet},
    error::{Location, Stage},
    interpreter::{
        lexer::{Scan, scan},
        token::TokenKind,
    },
};

fn scan_default(src: &str) -> Scan {
    scan(src, &Config::default())
}

fn kinds(scan: &Scan) -> Vec<TokenKind> {
    scan.tokens.iter().map(|t| t.kind).collect()
}

fn lexemes(scan: &Scan) -> Vec<&str> {
    scan.tokens.iter().map(|t| t.lexeme.as_str()).collect()
}

#[test]
fn keywords_and_identifiers() {
    let scan = scan_default("Display total While brick_2");

    assert_eq!(kinds(&scan),
               [TokenKind::Keyword, TokenKind::Identifier, TokenKind::Keyword, TokenKind::Identifier]);
    assert_eq!(lexemes(&scan), ["Display", "total", "While", "brick_2"]);
    assert!(scan.diagnostics.is_empty());
}

#[test]
fn keywords_are_case_sensitive() {
    let scan = scan_default("display");

    assert_eq!(kinds(&scan), [TokenKind::Identifier]);
}

#[test]
fn integer_and_float_literals() {
    let scan = scan_default("42 3.14 7.");

    assert_eq!(kinds(&scan),
               [TokenKind::IntegerLiteral, TokenKind::FloatLiteral, TokenKind::FloatLiteral]);
    assert_eq!(lexemes(&scan), ["42", "3.14", "7."]);
}

#[test]
fn second_decimal_point_ends_the_number() {
    let scan = scan_default("1.2.3");

    assert_eq!(kinds(&scan),
               [TokenKind::FloatLiteral, TokenKind::Unknown, TokenKind::IntegerLiteral]);
    assert_eq!(lexemes(&scan), ["1.2", ".", "3"]);
    assert_eq!(scan.diagnostics.len(), 1);
}

#[test]
fn string_literals_keep_their_quotes() {
    let scan = scan_default("\"a b\" \"\"");

    assert_eq!(kinds(&scan), [TokenKind::StringLiteral, TokenKind::StringLiteral]);
    assert_eq!(lexemes(&scan), ["\"a b\"", "\"\""]);
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    let scan = scan_default("x = \"never closed\nDisplay x");

    assert_eq!(kinds(&scan), [TokenKind::Identifier, TokenKind::Operator, TokenKind::Unknown]);
    assert_eq!(scan.tokens[2].lexeme, "\"never closed\nDisplay x");
    assert_eq!(scan.diagnostics.len(), 1);
    assert_eq!(scan.diagnostics[0].location, Location::Offset { offset: 4, line: 1 });
}

#[test]
fn comments_are_discarded() {
    let scan = scan_default("## a note Display \"x\"\nx = 1 ## another");

    assert_eq!(lexemes(&scan), ["x", "=", "1"]);
    assert!(scan.tokens.iter().all(|t| t.line == 2));
}

#[test]
fn unknown_characters_do_not_stop_scanning() {
    let scan = scan_default("a @ b $");

    assert_eq!(kinds(&scan),
               [TokenKind::Identifier, TokenKind::Unknown, TokenKind::Identifier, TokenKind::Unknown]);
    assert_eq!(scan.diagnostics.len(), 2);
    assert_eq!(scan.diagnostics[0].stage, Stage::Lexical);
    assert!(scan.diagnostics[0].message.contains("'@'"));
    assert!(scan.diagnostics[0].message.contains("position 2"));
}

#[test]
fn strict_identifier_rules() {
    let scan = scan_default("Foo abc_ abcdefghijklmnopqrstu abcdefghijklmnopqrst a_1");

    assert_eq!(kinds(&scan),
               [TokenKind::Unknown,
                TokenKind::Unknown,
                TokenKind::Unknown,
                TokenKind::Identifier,
                TokenKind::Identifier]);
    assert_eq!(scan.diagnostics.len(), 3);
    assert!(scan.diagnostics[0].message.contains("'Foo' starts with an uppercase letter"));
    assert!(scan.diagnostics[1].message.contains("underscore"));
    assert!(scan.diagnostics[2].message.contains("longer than 20"));
}

#[test]
fn permissive_identifiers() {
    let config = Config::default().with_identifier_policy(IdentifierPolicy::Permissive);
    let scan = scan("Foo abc_", &config);

    assert_eq!(kinds(&scan), [TokenKind::Identifier, TokenKind::Identifier]);
    assert!(scan.diagnostics.is_empty());
}

#[test]
fn keyword_set_is_swappable() {
    let config = Config::default().with_keywords(KeywordSet::from_words(["Show"]));
    let scan = scan("Show Display", &config);

    assert_eq!(kinds(&scan), [TokenKind::Keyword, TokenKind::Unknown]);
}

#[test]
fn keyword_presets_grow() {
    let minimal = Config::default().with_keywords(KeywordSet::minimal());
    let extended = Config::default().with_keywords(KeywordSet::extended());

    assert_eq!(kinds(&scan("Broke", &minimal)), [TokenKind::Unknown]);
    assert_eq!(kinds(&scan("Broke", &extended)), [TokenKind::Keyword]);
    assert_eq!(kinds(&scan("Wobble", &extended)), [TokenKind::Unknown]);
    assert_eq!(kinds(&scan("Wobble", &Config::default())), [TokenKind::Keyword]);
    assert!(KeywordSet::minimal().len() < KeywordSet::extended().len());
    assert!(KeywordSet::extended().len() < KeywordSet::full().len());
}

#[test]
fn operators_and_punctuators() {
    let scan = scan_default("+-*/=(){};");

    assert_eq!(&kinds(&scan)[..5], [TokenKind::Operator; 5]);
    assert_eq!(&kinds(&scan)[5..], [TokenKind::Punctuator; 5]);
    assert!(scan.diagnostics.is_empty());
}

#[test]
fn operator_set_is_configurable() {
    let tilde = Config::default().with_operators(OperatorSet::tilde());

    assert_eq!(kinds(&scan_default("~ -")), [TokenKind::Unknown, TokenKind::Operator]);
    assert_eq!(kinds(&scan("~ - =", &tilde)),
               [TokenKind::Operator, TokenKind::Unknown, TokenKind::Operator]);
}

#[test]
fn space_tokens_are_optional() {
    let config = Config::default().with_space_tokens(true);
    let scan = scan("a  b\n\tc", &config);

    assert_eq!(kinds(&scan),
               [TokenKind::Identifier,
                TokenKind::Space,
                TokenKind::Space,
                TokenKind::Identifier,
                TokenKind::Identifier]);
    assert_eq!(scan.tokens[1].lexeme, " ");
    assert_eq!(scan.tokens[2].span, 2..3);

    assert_eq!(kinds(&scan_default("a  b")), [TokenKind::Identifier, TokenKind::Identifier]);
}

#[test]
fn tracks_lines_and_offsets() {
    let scan = scan_default("a = 1\n\"two\nlines\" b\n\n@");

    let lines: Vec<_> = scan.tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, [1, 1, 1, 2, 3, 5]);
    assert_eq!(scan.tokens[4].span, 18..19);
    assert_eq!(scan.diagnostics[0].location, Location::Offset { offset: 21, line: 5 });
}

#[test]
fn lego_names() {
    assert_eq!(TokenKind::IntegerLiteral.lego_name(), "Linklit");
    assert_eq!(TokenKind::FloatLiteral.lego_name(), "Bubblelit");
    assert_eq!(TokenKind::StringLiteral.lego_name(), "Piecelit");
    assert_eq!(TokenKind::Unknown.lego_name(), "UNKNOWN");
    assert_eq!(TokenKind::FloatLiteral.to_string(), "FLOAT_LITERAL");
}
