//! Import declaration scanner for Go source files.
//!
//! Reads only as far as the import block: the package clause, then every
//! consecutive `import` declaration. The rest of the file is never lexed.

use anyhow::{Context, Result, bail};
use std::fs;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

pub trait ImportScanner {
    /// Import paths declared by the file at `path`, in source order.
    fn imports(&self, path: &Path) -> Result<Vec<String>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GoImportScanner;

impl ImportScanner for GoImportScanner {
    fn imports(&self, path: &Path) -> Result<Vec<String>> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        parse_imports(&source).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ident(String),
    Str(String),
    LParen,
    RParen,
    Semi,
    Dot,
    Other(char),
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match self.chars.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') => {
                    let mut ahead = self.chars.clone();
                    ahead.next();
                    match ahead.peek() {
                        Some('/') => {
                            while let Some(c) = self.bump() {
                                if c == '\n' {
                                    break;
                                }
                            }
                        }
                        Some('*') => {
                            let start = self.line;
                            self.bump();
                            self.bump();
                            let mut prev = '\0';
                            loop {
                                match self.bump() {
                                    Some('/') if prev == '*' => break,
                                    Some(c) => prev = c,
                                    None => bail!("line {}: comment not terminated", start),
                                }
                            }
                        }
                        _ => return Ok(()),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_trivia()?;
        let Some(c) = self.bump() else {
            return Ok(None);
        };
        let token = match c {
            '"' => Token::Str(self.interpreted_string()?),
            '`' => Token::Str(self.raw_string()?),
            '(' => Token::LParen,
            ')' => Token::RParen,
            ';' => Token::Semi,
            '.' => Token::Dot,
            c if c == '_' || c.is_alphabetic() => {
                let mut ident = String::from(c);
                while let Some(&next) = self.chars.peek() {
                    if next == '_' || next.is_alphanumeric() {
                        ident.push(next);
                        self.bump();
                    } else {
                        break;
                    }
                }
                Token::Ident(ident)
            }
            other => Token::Other(other),
        };
        Ok(Some(token))
    }

    /// Like `next_token`, but skips explicit semicolons.
    fn next_significant(&mut self) -> Result<Option<Token>> {
        loop {
            match self.next_token()? {
                Some(Token::Semi) => continue,
                other => return Ok(other),
            }
        }
    }

    fn interpreted_string(&mut self) -> Result<String> {
        let start = self.line;
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(out),
                Some('\\') => match self.bump() {
                    Some('\\') => out.push('\\'),
                    Some('"') => out.push('"'),
                    Some(other) if other != '\n' => {
                        out.push('\\');
                        out.push(other);
                    }
                    _ => bail!("line {}: string literal not terminated", start),
                },
                Some('\n') | None => bail!("line {}: string literal not terminated", start),
                Some(c) => out.push(c),
            }
        }
    }

    fn raw_string(&mut self) -> Result<String> {
        let start = self.line;
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('`') => return Ok(out),
                Some(c) => out.push(c),
                None => bail!("line {}: raw string literal not terminated", start),
            }
        }
    }

    /// Reads one import spec: `[name | . | _] "path"`.
    fn import_spec(&mut self, first: Token) -> Result<String> {
        match first {
            Token::Str(path) => Ok(path),
            Token::Ident(_) | Token::Dot => match self.next_token()? {
                Some(Token::Str(path)) => Ok(path),
                _ => bail!("line {}: expected import path after import name", self.line),
            },
            other => bail!("line {}: unexpected {:?} in import declaration", self.line, other),
        }
    }
}

/// Extracts the import paths of a Go source file.
pub fn parse_imports(source: &str) -> Result<Vec<String>> {
    let mut lexer = Lexer::new(source);

    match lexer.next_significant()? {
        Some(Token::Ident(keyword)) if keyword == "package" => {}
        _ => bail!("line {}: expected package clause", lexer.line),
    }
    match lexer.next_significant()? {
        Some(Token::Ident(_)) => {}
        _ => bail!("line {}: expected package name", lexer.line),
    }

    let mut imports = Vec::new();
    while let Some(Token::Ident(keyword)) = lexer.next_significant()? {
        if keyword != "import" {
            break;
        }
        match lexer.next_significant()? {
            Some(Token::LParen) => loop {
                match lexer.next_significant()? {
                    Some(Token::RParen) => break,
                    Some(token) => imports.push(lexer.import_spec(token)?),
                    None => bail!("import group not terminated"),
                }
            },
            Some(token) => imports.push(lexer.import_spec(token)?),
            None => bail!("unexpected end of file in import declaration"),
        }
    }

    Ok(imports)
}
