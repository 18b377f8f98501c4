//! Token kinds for the service source.
//!
//! The lexer only needs to be precise enough to find export annotations and the
//! signatures that follow them. Everything else in a function body lexes into
//! generic punctuation or identifiers and is skipped by the scanner.

use logos::Logos;

/// All token kinds. `#[repr(u16)]` keeps discriminants small for [`TokenSet`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum TokenKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("<")]
    AngleOpen,

    /// Always a single `>`; `>>` lexes as two tokens so nested generics close one level each.
    #[token(">")]
    AngleClose,

    /// `::` path separator. Defined before `Colon` for correct precedence.
    #[token("::")]
    PathSep,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token("=")]
    Equals,

    #[token("->")]
    Arrow,

    /// `=>` lexed whole so its `>` never closes a generic.
    #[token("=>")]
    FatArrow,

    #[token("#")]
    Pound,

    #[token("&")]
    Amp,

    #[token(";")]
    Semicolon,

    /// Remaining single-character operators.
    #[regex(r"[.!?*+\-/%^|@$~]")]
    Punct,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    StringLiteral,

    #[regex(r#"r"[^"]*""#)]
    #[regex(r##"r#"(?:[^"]|"[^#])*"#"##)]
    RawStringLiteral,

    #[regex(r"'(?:[^'\\]|\\.[^']*)'")]
    CharLiteral,

    #[regex(r"'[a-zA-Z_][a-zA-Z0-9_]*")]
    Lifetime,

    #[regex(r"[0-9][0-9a-zA-Z_]*")]
    Number,

    #[token("async")]
    KwAsync,

    #[token("fn")]
    KwFn,

    /// Defined after keywords so they take precedence.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/", allow_greedy = true)]
    BlockComment,

    /// Coalesced unrecognized characters.
    Garbage,

    // Must be last - used for bounds checking in `TokenSet`
    #[doc(hidden)]
    __LAST,
}

use TokenKind::*;

impl TokenKind {
    /// Whitespace only. Comments are deliberately not included: the export shape
    /// allows whitespace between its tokens and nothing else.
    #[inline]
    pub fn is_whitespace(self) -> bool {
        self == Whitespace
    }

    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, LineComment | BlockComment)
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        self.is_whitespace() || self.is_comment()
    }

    /// Tokens that need a separating space when re-joined into normalized text.
    #[inline]
    pub fn is_word(self) -> bool {
        WORDS.contains(self)
    }
}

const WORDS: TokenSet = TokenSet::new(&[Ident, Number, KwAsync, KwFn, Lifetime]);

/// 64-bit bitset of `TokenKind`s for O(1) membership testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "TokenKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }
}

/// Openers that raise bracket depth for parameter splitting.
pub const OPENERS: TokenSet = TokenSet::new(&[ParenOpen, BracketOpen, AngleOpen]);

/// Closers matching [`OPENERS`].
pub const CLOSERS: TokenSet = TokenSet::new(&[ParenClose, BracketClose, AngleClose]);
