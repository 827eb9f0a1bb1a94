use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    error::{LexError, Result},
    token::Token,
};

lazy_static! {
    static ref RESERVED_KEYWORDS: HashMap<&'static str, Token> = {
        let mut keywords = HashMap::new();
        keywords.insert("PROGRAM", Token::Program);
        keywords.insert("VAR", Token::Var);
        keywords.insert("DIV", Token::IntegerDiv);
        keywords.insert("INTEGER", Token::Integer);
        keywords.insert("REAL", Token::Real);
        keywords.insert("BEGIN", Token::Begin);
        keywords.insert("END", Token::End);
        keywords
    };
}

pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    char: Option<char>,
    line: usize,
    column: usize,
    exhausted: bool,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let char = chars.first().copied();
        Self {
            chars,
            position: 0,
            char,
            line: 1,
            column: 1,
            exhausted: false,
        }
    }

    /// Scans the next token. Once the input is used up this keeps
    /// returning `Token::Eof`.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments()?;

        let (line, column) = (self.line, self.column);

        let Some(char) = self.char else {
            return Ok(Token::Eof);
        };

        let token = match char {
            ':' if self.is_next_char('=') => {
                self.read_char();
                Token::Assign
            }
            ':' => Token::Colon,
            ';' => Token::Semi,
            '.' => Token::Dot,
            ',' => Token::Comma,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Mul,
            '/' => Token::FloatDiv,
            '(' => Token::Lparen,
            ')' => Token::Rparen,
            _ if char.is_ascii_digit() => return self.read_number(line, column),
            _ if char.is_alphabetic() || char == '_' => return Ok(self.read_identifier()),
            _ => {
                return Err(LexError::UnexpectedChar {
                    found: char,
                    line,
                    column,
                }
                .into())
            }
        };

        self.read_char();

        Ok(token)
    }

    fn read_char(&mut self) {
        match self.char {
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => self.column += 1,
            None => return,
        }
        self.position += 1;
        self.char = self.chars.get(self.position).copied();
    }

    fn is_next_char(&self, ch: char) -> bool {
        self.chars.get(self.position + 1).eq(&Some(&ch))
    }

    fn read_while(&mut self, condition: impl Fn(char) -> bool) -> String {
        let mut literal = String::new();
        while let Some(char) = self.char {
            if !condition(char) {
                break;
            }
            literal.push(char);
            self.read_char();
        }
        literal
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<()> {
        loop {
            match self.char {
                Some(char) if char.is_whitespace() => self.read_char(),
                Some('{') => self.skip_comment()?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_comment(&mut self) -> Result<()> {
        let (line, column) = (self.line, self.column);
        self.read_char();
        while let Some(char) = self.char {
            self.read_char();
            if char == '}' {
                return Ok(());
            }
        }
        Err(LexError::UnterminatedComment { line, column }.into())
    }

    fn read_identifier(&mut self) -> Token {
        let literal = self.read_while(|char| char.is_alphanumeric() || char == '_');
        match RESERVED_KEYWORDS.get(literal.to_uppercase().as_str()) {
            Some(keyword) => keyword.clone(),
            None => Token::Ident(literal),
        }
    }

    fn read_number(&mut self, line: usize, column: usize) -> Result<Token> {
        let mut literal = self.read_while(|char| char.is_ascii_digit());

        let fraction_follows = self.char == Some('.')
            && self
                .chars
                .get(self.position + 1)
                .is_some_and(|char| char.is_ascii_digit());

        let invalid = |literal: &str| LexError::InvalidNumber {
            literal: literal.to_string(),
            line,
            column,
        };

        if fraction_follows {
            literal.push('.');
            self.read_char();
            literal.push_str(&self.read_while(|char| char.is_ascii_digit()));
            let value = literal.parse::<f64>().map_err(|_| invalid(&literal))?;
            if !value.is_finite() {
                return Err(invalid(&literal).into());
            }
            return Ok(Token::RealConst(value));
        }

        let value = literal.parse::<i64>().map_err(|_| invalid(&literal))?;
        Ok(Token::IntegerConst(value))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token>;

    /// Yields every token before end of input. Stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.next_token() {
            Ok(Token::Eof) => {
                self.exhausted = true;
                None
            }
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            }
            token => Some(token),
        }
    }
}
