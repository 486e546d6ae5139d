use std::collections::BTreeSet;

/// Keywords of the original grammar revision.
const MINIMAL_KEYWORDS: &[&str] = &["Build", "Destroy", "Pane", "Link", "Display", "Rebrick"];

/// Keywords added by the extended grammar revision.
const EXTENDED_KEYWORDS: &[&str] = &["Broke", "Change", "Con", "Const", "Create", "Def", "Do",
                                     "Flip", "Ifsnap", "Piece", "Revoid", "Set", "Subs", "While"];

/// Keywords added by the later grammar variants.
const FULL_KEYWORDS: &[&str] = &["Base", "Bubble", "Else", "Elseif", "False", "For", "True",
                                 "Put", "Stable", "Snap", "Snapif", "Wobble"];

/// The assignment operator. Always scanned as an operator, whatever the
/// configured [`OperatorSet`] contains.
pub const ASSIGNMENT_OPERATOR: char = '=';

/// The active keyword vocabulary.
///
/// Keywords are case-sensitive. The set is plain data: the scanner only ever
/// asks [`KeywordSet::contains`], so any vocabulary can be swapped in without
/// touching scanning logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: BTreeSet<String>,
}

impl KeywordSet {
    /// The six keywords of the first grammar revision.
    #[must_use]
    pub fn minimal() -> Self {
        Self::from_words(MINIMAL_KEYWORDS.iter().copied())
    }

    /// The minimal set plus the keywords of the extended revision
    /// (`Broke`, `While`, ...).
    #[must_use]
    pub fn extended() -> Self {
        Self::from_words(MINIMAL_KEYWORDS.iter().chain(EXTENDED_KEYWORDS).copied())
    }

    /// Every keyword any grammar revision has used.
    #[must_use]
    pub fn full() -> Self {
        Self::from_words(MINIMAL_KEYWORDS.iter()
                                         .chain(EXTENDED_KEYWORDS)
                                         .chain(FULL_KEYWORDS)
                                         .copied())
    }

    /// Builds a keyword set from an arbitrary list of words.
    ///
    /// # Example
    /// ```
    /// use legoc::config::KeywordSet;
    ///
    /// let keywords = KeywordSet::from_words(["Show", "Stop"]);
    /// assert!(keywords.contains("Show"));
    /// assert!(!keywords.contains("show"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { words: words.into_iter().map(Into::into).collect() }
    }

    /// Returns `true` if `word` is a keyword.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterates over the keywords in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::full()
    }
}

/// The single-character operators recognised by the scanner.
///
/// Operators are always one character long; there are no multi-character
/// operators such as `==` in this grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorSet {
    chars: BTreeSet<char>,
}

impl OperatorSet {
    /// `+ - * /`
    #[must_use]
    pub fn arithmetic() -> Self {
        Self::from_chars(['+', '-', '*', '/'])
    }

    /// `+ ~ * /`, the revision that replaced `-` with `~`.
    #[must_use]
    pub fn tilde() -> Self {
        Self::from_chars(['+', '~', '*', '/'])
    }

    pub fn from_chars<I>(chars: I) -> Self
        where I: IntoIterator<Item = char>
    {
        Self { chars: chars.into_iter().collect() }
    }

    /// Returns `true` if `c` scans as an operator. The assignment operator is
    /// always included.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        c == ASSIGNMENT_OPERATOR || self.chars.contains(&c)
    }
}

impl Default for OperatorSet {
    fn default() -> Self {
        Self::arithmetic()
    }
}

/// How strictly words that are not keywords are accepted as identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierPolicy {
    /// Any word that is not a keyword is an identifier.
    Permissive,
    /// Identifiers must start with a lowercase letter, be 1 to 20 characters
    /// long and must not end in an underscore.
    #[default]
    Strict,
}

/// Settings shared by every stage of one analysis run.
///
/// The defaults describe the most recent grammar revision: the full keyword
/// vocabulary, the `+ - * /` operators, strict identifiers, no program
/// bracket enforcement and no space tokens.
///
/// # Example
/// ```
/// use legoc::config::{Config, IdentifierPolicy, OperatorSet};
///
/// let config = Config::default().with_operators(OperatorSet::tilde())
///                               .with_identifier_policy(IdentifierPolicy::Permissive)
///                               .with_program_brackets(true);
///
/// assert!(config.operators.contains('~'));
/// assert!(!config.operators.contains('-'));
/// assert!(config.enforce_program_brackets);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The keyword vocabulary.
    pub keywords:                 KeywordSet,
    /// The operator characters.
    pub operators:                OperatorSet,
    /// Identifier acceptance rules.
    pub identifier_policy:        IdentifierPolicy,
    /// Require the program to start with [`Config::program_start`] and end
    /// with [`Config::program_end`].
    pub enforce_program_brackets: bool,
    /// Emit a `SPACE` token for every literal space character.
    pub emit_space_tokens:        bool,
    /// Keyword that introduces a display statement.
    pub display_keyword:          String,
    /// Keyword that forms a break statement.
    pub break_keyword:            String,
    /// Keyword whose operand shape is checked by the validator.
    pub return_keyword:           String,
    /// Keyword that must open a bracketed program.
    pub program_start:            String,
    /// Keyword that must close a bracketed program.
    pub program_end:              String,
}

impl Default for Config {
    fn default() -> Self {
        Self { keywords:                 KeywordSet::default(),
               operators:                OperatorSet::default(),
               identifier_policy:        IdentifierPolicy::default(),
               enforce_program_brackets: false,
               emit_space_tokens:        false,
               display_keyword:          "Display".to_string(),
               break_keyword:            "Broke".to_string(),
               return_keyword:           "Rebrick".to_string(),
               program_start:            "Build".to_string(),
               program_end:              "Destroy".to_string(), }
    }
}

impl Config {
    #[must_use]
    pub fn with_keywords(mut self, keywords: KeywordSet) -> Self {
        self.keywords = keywords;
        self
    }

    #[must_use]
    pub fn with_operators(mut self, operators: OperatorSet) -> Self {
        self.operators = operators;
        self
    }

    #[must_use]
    pub fn with_identifier_policy(mut self, policy: IdentifierPolicy) -> Self {
        self.identifier_policy = policy;
        self
    }

    #[must_use]
    pub fn with_program_brackets(mut self, enforce: bool) -> Self {
        self.enforce_program_brackets = enforce;
        self
    }

    #[must_use]
    pub fn with_space_tokens(mut self, emit: bool) -> Self {
        self.emit_space_tokens = emit;
        self
    }
}
