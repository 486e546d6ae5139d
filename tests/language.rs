use std::fs;

use legoc::{
    AnalysisResult, analyze, analyze_with,
    ast::Statement,
    config::Config,
    error::{Location, Stage, SyntaxError},
    interpreter::{
        evaluator::core::{BREAK_LINE, RUNTIME_ERROR_PREFIX},
        lexer::scan,
        token::TokenKind,
    },
};
use walkdir::WalkDir;

fn kinds(result: &AnalysisResult) -> Vec<TokenKind> {
    result.tokens.iter().map(|t| t.kind).collect()
}

fn lexemes(result: &AnalysisResult) -> Vec<&str> {
    result.tokens.iter().map(|t| t.lexeme.as_str()).collect()
}

fn assert_clean(src: &str) -> AnalysisResult {
    let result = analyze(src);
    assert!(result.is_clean(),
            "Script was not clean:\n{src}\nDiagnostics: {:?}\nSyntax error: {:?}",
            result.diagnostics,
            result.syntax_error);
    result
}

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "lego"))
    {
        let path = entry.path();
        let code =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += 1;

        let result = analyze(&code);
        assert!(result.is_clean(),
                "Program {path:?} was not clean:\n{code}\nDiagnostics: {:?}\nSyntax error: {:?}",
                result.diagnostics,
                result.syntax_error);
        assert!(!result.output.iter().any(|line| line.starts_with(RUNTIME_ERROR_PREFIX)),
                "Program {path:?} had runtime errors: {:?}",
                result.output);
    }

    assert!(count > 0, "No programs found in tests/programs");
}

#[test]
fn sample_program_output() {
    let code = fs::read_to_string("tests/programs/variables.lego").unwrap();
    assert_eq!(analyze(&code).output, ["4.0", "2.5", "4.0", "7.0", "4.0", "None"]);

    let code = fs::read_to_string("tests/programs/structure.lego").unwrap();
    let result = analyze_with(&code, &Config::default().with_program_brackets(true));
    assert!(result.is_clean(), "{:?}", result.diagnostics);
    assert_eq!(result.output, ["10.0", BREAK_LINE]);
}

#[test]
fn display_string() {
    let result = assert_clean("Display \"hi\"");

    assert_eq!(kinds(&result), [TokenKind::Keyword, TokenKind::StringLiteral]);
    assert_eq!(lexemes(&result), ["Display", "\"hi\""]);
    assert_eq!(result.statements.len(), 1);
    assert!(matches!(&result.statements[0],
                     Statement::Display { operand } if operand.lexeme == "\"hi\""));
    assert_eq!(result.output, ["hi"]);
}

#[test]
fn assignment_produces_no_output() {
    let result = assert_clean("x = 5");

    assert_eq!(kinds(&result),
               [TokenKind::Identifier, TokenKind::Operator, TokenKind::IntegerLiteral]);
    assert!(matches!(&result.statements[..],
                     [Statement::Assignment { name, operand, .. }]
                     if name == "x" && operand.lexeme == "5"));
    assert!(result.output.is_empty());
}

#[test]
fn display_without_operand_is_syntax_error() {
    let result = analyze("Display");

    assert!(matches!(result.syntax_error, Some(SyntaxError::MissingDisplayOperand { .. })));
    assert!(result.statements.is_empty());
    assert_eq!(kinds(&result), [TokenKind::Keyword]);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn unterminated_string_is_diagnosed_once() {
    let result = analyze("\"unterminated");

    assert_eq!(kinds(&result), [TokenKind::Unknown]);
    assert_eq!(lexemes(&result), ["\"unterminated"]);
    assert_eq!(result.diagnostics.len(), 1);
    assert!(result.diagnostics[0].message.contains("Missing closing quote"));
    assert_eq!(result.diagnostics[0].stage, Stage::Lexical);
    assert!(result.statements.is_empty());
    assert!(result.output.is_empty());
    assert!(result.syntax_error.is_none());
}

#[test]
fn repeated_operator_is_diagnosed_once() {
    let result = analyze("5 + + 3");

    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].location, Location::Token { index: 2, line: 1 });
}

#[test]
fn break_appends_marker() {
    let result = assert_clean("Broke");

    assert_eq!(kinds(&result), [TokenKind::Keyword]);
    assert!(matches!(&result.statements[..], [Statement::Break { .. }]));
    assert_eq!(result.output, [BREAK_LINE]);
}

#[test]
fn syntax_error_keeps_earlier_results() {
    let result = analyze("x = 1 Display x Display");

    assert_eq!(result.tokens.len(), 6);
    assert_eq!(result.statements.len(), 2);
    assert_eq!(result.output, ["1.0"]);
    assert!(matches!(result.syntax_error,
                     Some(SyntaxError::MissingDisplayOperand { index: 5, .. })));
}

#[test]
fn diagnostics_do_not_stop_execution() {
    let result = analyze("@ Display 2 Rebrick Display Foo");

    // '@', the bare return keyword and the uppercase identifier.
    assert_eq!(result.diagnostics.len(), 3);
    assert_eq!(result.output, ["2.0"]);
    // `Display Foo` has no valid operand once `Foo` is demoted.
    assert!(result.syntax_error.is_some());
}

#[test]
fn lexical_diagnostics_come_before_structural_ones() {
    let result = analyze("+ @");

    let stages: Vec<_> = result.diagnostics.iter().map(|d| d.stage).collect();
    assert_eq!(stages, [Stage::Lexical, Stage::Structural]);
}

#[test]
fn runs_are_independent() {
    assert_eq!(analyze("x = 1 Display x").output, ["1.0"]);
    assert_eq!(analyze("Display x").output, ["None"]);
}

#[test]
fn scanning_is_idempotent() {
    let config = Config::default();
    let source = "Build x = 1.5 ## c\n@ \"open Display x Destroy";

    assert_eq!(scan(source, &config), scan(source, &config));
    assert_eq!(analyze(source), analyze(source));
}

#[test]
fn parsing_terminates_on_any_input() {
    for source in ["", "   \n\t ", "@@@@", "((((;;;;", "+ - * /", "Destroy Build While", "\"", "##"] {
        let result = analyze(source);
        assert!(result.statements.is_empty(), "{source:?}");
        assert!(result.syntax_error.is_none(), "{source:?}");
    }
}

fn is_skipped_text(gap: &str) -> bool {
    gap.split('\n').all(|line| {
                       let line = line.trim();
                       line.is_empty() || line.starts_with("##")
                   })
}

fn assert_round_trip(source: &str) {
    let tokens = scan(source, &Config::default()).tokens;
    let mut rebuilt = String::new();
    let mut cursor = 0;

    for token in &tokens {
        let gap = &source[cursor..token.span.start];
        assert!(is_skipped_text(gap), "dropped {gap:?} from {source:?}");
        assert_eq!(&source[token.span.clone()], token.lexeme);

        rebuilt.push_str(gap);
        rebuilt.push_str(&token.lexeme);
        cursor = token.span.end;
    }
    assert!(is_skipped_text(&source[cursor..]));
    rebuilt.push_str(&source[cursor..]);

    assert_eq!(rebuilt, source);
}

#[test]
fn lexemes_and_skipped_text_rebuild_the_source() {
    assert_round_trip("Display \"hi\"");
    assert_round_trip("x = 5\n## comment\n\tDisplay x ## trailing\n");
    assert_round_trip("1.2.3 @# Foo abc_ \"open");
    assert_round_trip("Build { ( ) ; } ~ - Destroy");
    assert_round_trip("");
}
