use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Ident(String),
    IntegerConst(i64),
    RealConst(f64),

    Assign,
    Plus,
    Minus,
    Mul,
    FloatDiv,

    Semi,
    Dot,
    Comma,
    Colon,

    Lparen,
    Rparen,

    Program,
    Var,
    IntegerDiv,
    Integer,
    Real,
    Begin,
    End,

    Eof,
}

impl Token {
    pub fn variant_eq(&self, other: &Token) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Upper-case kind name, as printed by the token dump.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Ident(_) => "ID",
            Token::IntegerConst(_) => "INTEGER_CONST",
            Token::RealConst(_) => "REAL_CONST",

            Token::Assign => "ASSIGN",
            Token::Plus => "PLUS",
            Token::Minus => "MINUS",
            Token::Mul => "MUL",
            Token::FloatDiv => "FLOAT_DIV",

            Token::Semi => "SEMI",
            Token::Dot => "DOT",
            Token::Comma => "COMMA",
            Token::Colon => "COLON",

            Token::Lparen => "LPAREN",
            Token::Rparen => "RPAREN",

            Token::Program => "PROGRAM",
            Token::Var => "VAR",
            Token::IntegerDiv => "INTEGER_DIV",
            Token::Integer => "INTEGER",
            Token::Real => "REAL",
            Token::Begin => "BEGIN",
            Token::End => "END",

            Token::Eof => "EOF",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Ident(ident) => write!(f, "{}", ident),
            Token::IntegerConst(value) => write!(f, "{}", value),
            Token::RealConst(value) => write!(f, "{:?}", value),

            Token::Assign => write!(f, ":="),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Mul => write!(f, "*"),
            Token::FloatDiv => write!(f, "/"),

            Token::Semi => write!(f, ";"),
            Token::Dot => write!(f, "."),
            Token::Comma => write!(f, ","),
            Token::Colon => write!(f, ":"),

            Token::Lparen => write!(f, "("),
            Token::Rparen => write!(f, ")"),

            Token::Program => write!(f, "PROGRAM"),
            Token::Var => write!(f, "VAR"),
            Token::IntegerDiv => write!(f, "DIV"),
            Token::Integer => write!(f, "INTEGER"),
            Token::Real => write!(f, "REAL"),
            Token::Begin => write!(f, "BEGIN"),
            Token::End => write!(f, "END"),

            Token::Eof => write!(f, "end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_eq_ignores_payload() {
        assert!(Token::Ident("a".to_string()).variant_eq(&Token::Ident("b".to_string())));
        assert!(Token::IntegerConst(1).variant_eq(&Token::IntegerConst(2)));
        assert!(!Token::IntegerConst(1).variant_eq(&Token::RealConst(1.0)));
        assert!(!Token::Colon.variant_eq(&Token::Assign));
    }

    #[test]
    fn kind() {
        let tests = vec![
            (Token::Ident("x".to_string()), "ID"),
            (Token::IntegerConst(1), "INTEGER_CONST"),
            (Token::RealConst(1.5), "REAL_CONST"),
            (Token::Assign, "ASSIGN"),
            (Token::Colon, "COLON"),
            (Token::Mul, "MUL"),
            (Token::FloatDiv, "FLOAT_DIV"),
            (Token::IntegerDiv, "INTEGER_DIV"),
            (Token::Integer, "INTEGER"),
            (Token::Semi, "SEMI"),
            (Token::Dot, "DOT"),
            (Token::Eof, "EOF"),
        ];

        for (token, expected) in tests {
            assert_eq!(token.kind(), expected);
        }
    }

    #[test]
    fn token_dump_line() {
        let tokens = vec![
            Token::Program,
            Token::Ident("Part".to_string()),
            Token::Semi,
            Token::RealConst(3.14),
        ];
        let lines: Vec<String> = tokens
            .iter()
            .map(|token| format!("Token({}, {})", token.kind(), token))
            .collect();
        assert_eq!(
            lines,
            vec![
                "Token(PROGRAM, PROGRAM)",
                "Token(ID, Part)",
                "Token(SEMI, ;)",
                "Token(REAL_CONST, 3.14)",
            ]
        );
    }

    #[test]
    fn display() {
        let tests = vec![
            (Token::Ident("Total".to_string()), "Total"),
            (Token::IntegerConst(42), "42"),
            (Token::RealConst(3.0), "3.0"),
            (Token::RealConst(3.14), "3.14"),
            (Token::Assign, ":="),
            (Token::IntegerDiv, "DIV"),
            (Token::Eof, "end of input"),
        ];

        for (token, expected) in tests {
            assert_eq!(token.to_string(), expected);
        }
    }
}
