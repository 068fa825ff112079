//! Token definitions for the spacing pass of the line formatter.
//!
//! Only the punctuation the formatter has opinions about gets its own token. Compound
//! operators are lexed whole so that `==`, `<=` or `:=` are never mistaken for `=` or `:`.
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineToken {
    #[regex(r"\s+")]
    Whitespace,

    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    // Bare assignment only
    #[token("=")]
    Assign,

    #[token("==")]
    #[token(":=")]
    #[regex(r"[<>!+\-*/%&|^@~]+=?")]
    Operator,

    #[regex(r"[^\s(),:=<>!+\-*/%&|^@~]+")]
    Word,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<(LineToken, &str)> {
        let mut lexer = LineToken::lexer(source);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next() {
            tokens.push((token.unwrap(), lexer.slice()));
        }
        tokens
    }

    #[test]
    fn test_call() {
        assert_eq!(
            lex("print ( x )"),
            vec![
                (LineToken::Word, "print"),
                (LineToken::Whitespace, " "),
                (LineToken::OpenParen, "("),
                (LineToken::Whitespace, " "),
                (LineToken::Word, "x"),
                (LineToken::Whitespace, " "),
                (LineToken::CloseParen, ")"),
            ]
        );
    }

    #[test]
    fn test_compound_operators_are_single_tokens() {
        for op in ["==", "!=", "<=", ">=", ":=", "+=", "**=", "//=", ">>=", "->"] {
            assert_eq!(lex(op), vec![(LineToken::Operator, op)], "operator {op}");
        }
    }

    #[test]
    fn test_assignment_against_comparison() {
        assert_eq!(
            lex("a=b==c"),
            vec![
                (LineToken::Word, "a"),
                (LineToken::Assign, "="),
                (LineToken::Word, "b"),
                (LineToken::Operator, "=="),
                (LineToken::Word, "c"),
            ]
        );
    }

    #[test]
    fn test_unary_minus_after_assign() {
        assert_eq!(
            lex("x=-1"),
            vec![
                (LineToken::Word, "x"),
                (LineToken::Assign, "="),
                (LineToken::Operator, "-"),
                (LineToken::Word, "1"),
            ]
        );
    }

    #[test]
    fn test_dotted_names_and_brackets_are_words() {
        assert_eq!(lex("a.b[0]"), vec![(LineToken::Word, "a.b[0]")]);
    }
}
