use std::fs;

use clap::{Parser, ValueEnum};
use legoc::{
    AnalysisResult, analyze_with,
    config::{Config, IdentifierPolicy, KeywordSet, OperatorSet},
    interpreter::token::TokenKind,
};

/// Analyzes a Lego-C program: lists its lexemes and tokens, reports errors
/// and shows the program output.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells legoc to read a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Keyword vocabulary of the grammar revision to use.
    #[arg(short, long, value_enum, default_value_t = Keywords::Full)]
    keywords: Keywords,

    /// Use `~` instead of `-` as an operator.
    #[arg(long)]
    tilde: bool,

    /// Accept any word that is not a keyword as an identifier.
    #[arg(long)]
    permissive: bool,

    /// Require programs to start with `Build` and end with `Destroy`.
    #[arg(short, long)]
    brackets: bool,

    /// List literal spaces as tokens.
    #[arg(short, long)]
    spaces: bool,

    contents: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Keywords {
    Minimal,
    Extended,
    Full,
}

impl Args {
    fn config(&self) -> Config {
        let keywords = match self.keywords {
            Keywords::Minimal => KeywordSet::minimal(),
            Keywords::Extended => KeywordSet::extended(),
            Keywords::Full => KeywordSet::full(),
        };
        let operators = if self.tilde {
            OperatorSet::tilde()
        } else {
            OperatorSet::arithmetic()
        };
        let policy = if self.permissive {
            IdentifierPolicy::Permissive
        } else {
            IdentifierPolicy::Strict
        };

        Config::default().with_keywords(keywords)
                         .with_operators(operators)
                         .with_identifier_policy(policy)
                         .with_program_brackets(self.brackets)
                         .with_space_tokens(self.spaces)
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    let result = analyze_with(&script, &args.config());
    print_report(&result);

    if !result.is_clean() {
        std::process::exit(2);
    }
}

fn print_report(result: &AnalysisResult) {
    println!("Lexemes / Tokens:");
    for token in &result.tokens {
        let name = match token.kind {
            TokenKind::Keyword => token.lexeme.as_str(),
            TokenKind::Space => "Space",
            kind => kind.lego_name(),
        };
        println!("  {:<24} {name}", token.lexeme);
    }

    println!("\nErrors:");
    if result.is_clean() {
        println!("  No errors detected.");
    }
    for diagnostic in &result.diagnostics {
        println!("  {diagnostic}");
    }
    if let Some(error) = &result.syntax_error {
        println!("  {error}");
        println!("  Statements after this point were not parsed.");
    }

    println!("\nProgram:");
    for line in &result.output {
        println!("  {line}");
    }
}
