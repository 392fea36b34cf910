//! Token definitions for the OpenSCAD subset
//!
//! Tokens are defined with the logos derive macro. Keywords are exact tokens, so they win over
//! the identifier pattern only on an exact match (`user` is an identifier).
use logos::Logos;

/// All tokens the lexer can produce
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // Keywords
    #[token("use")]
    Use,
    #[token("include")]
    Include,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("undef")]
    Undef,

    // Literals
    #[regex(r"[A-Za-z_$][A-Za-z0-9_]*")]
    Identifier,
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    Number,
    #[regex(r#""([^"\\]|\\.)*""#)]
    String,
    /// `<file>` after `use` or `include`; produced by [`lex`](super::lex), never by logos
    Path,

    // Comments
    #[regex(r"//[^\r\n]*")]
    LineComment,
    #[token("/*", block_comment)]
    BlockComment,

    // Operators
    #[token("||")]
    Or,
    #[token("&&")]
    And,
    #[token("==")]
    Equal,
    #[token("!=")]
    NotEqual,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,

    // Punctuation
    #[token("=")]
    Assign,
    #[token(";")]
    Semicolon,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
}

/// Consume up to and including the closing `*/`; unterminated comments are an error
fn block_comment(lex: &mut logos::Lexer<TokenKind>) -> bool {
    match lex.remainder().find("*/") {
        Some(index) => {
            lex.bump(index + 2);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        TokenKind::lexer(source)
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("use user undef $fn _x"),
            vec![
                TokenKind::Use,
                TokenKind::Identifier,
                TokenKind::Undef,
                TokenKind::Identifier,
                TokenKind::Identifier
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds("42 1.5 .5 1e3 2.E-4"),
            vec![TokenKind::Number; 5]
        );
    }

    #[test]
    fn test_angle_brackets_are_comparisons() {
        assert_eq!(
            kinds("a<b>c"),
            vec![
                TokenKind::Identifier,
                TokenKind::Less,
                TokenKind::Identifier,
                TokenKind::Greater,
                TokenKind::Identifier
            ]
        );
        assert_eq!(
            kinds("a <= b"),
            vec![TokenKind::Identifier, TokenKind::LessEqual, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            kinds("// line\n/* a\n * b */ x / y"),
            vec![
                TokenKind::LineComment,
                TokenKind::BlockComment,
                TokenKind::Identifier,
                TokenKind::Slash,
                TokenKind::Identifier
            ]
        );
    }

    #[test]
    fn test_strings_with_escapes() {
        assert_eq!(kinds(r#""a \"quoted\" word""#), vec![TokenKind::String]);
    }

    #[test]
    fn test_block_comment_edges() {
        assert_eq!(kinds("/** doc **/ x"), vec![TokenKind::BlockComment, TokenKind::Identifier]);
        assert_eq!(kinds("/**/"), vec![TokenKind::BlockComment]);

        let mut lexer = TokenKind::lexer("/* c */ /* d */");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::BlockComment)));
        assert_eq!(lexer.slice(), "/* c */");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::BlockComment)));
        assert_eq!(lexer.slice(), "/* d */");
    }

    #[test]
    fn test_unterminated_block_comment_is_an_error() {
        let mut lexer = TokenKind::lexer("x /* open");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Identifier)));
        assert_eq!(lexer.next(), Some(Err(())));
        assert_eq!(lexer.slice(), "/*");
    }
}
