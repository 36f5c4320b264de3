//! Recursive-descent parser for the dpath grammar.
//!
//! A non-empty path that does not start with a rune is read as if it began
//! with `:`. Offsets in errors always refer to the input as given.

use crate::error::{GrammarError, GrammarReason, Result};
use crate::path::{Path, Step, LOCKED_RUNE, OPEN_RUNE};

/// The grammar accepted by [`parse`], in W3C EBNF.
pub const GRAMMAR: &str = r#"
dpath ::= (step)* EOF
step  ::= (rune) (name)
name  ::= [a-z0-9]+
rune  ::= ":" | "."
"#;

/// Parse a dpath into its steps.
///
/// # Examples
///
/// ```
/// use dmap_path::{parse, Step};
///
/// let path = parse(":a.b").unwrap();
/// assert_eq!(path.steps(), &[Step::locked("a"), Step::open("b")]);
/// assert_eq!(parse("a").unwrap(), parse(":a").unwrap());
/// assert!(parse("").unwrap().is_empty());
/// assert!(parse(":A").is_err());
/// ```
pub fn parse(input: &str) -> Result<Path> {
    if input.is_empty() {
        return Ok(Path::default());
    }
    let implicit_rune = !input.starts_with([LOCKED_RUNE, OPEN_RUNE]);
    Parser {
        input,
        pos: 0,
        implicit_rune,
    }
    .dpath()
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    implicit_rune: bool,
}

impl Parser<'_> {
    fn dpath(mut self) -> Result<Path> {
        let mut steps = Vec::new();
        while self.peek().is_some() {
            steps.push(self.step()?);
        }
        Ok(Path::new(steps))
    }

    fn step(&mut self) -> Result<Step> {
        let locked = self.rune()?;
        let name = self.name()?;
        Ok(Step::new(locked, name))
    }

    fn rune(&mut self) -> Result<bool> {
        if self.implicit_rune {
            self.implicit_rune = false;
            return Ok(true);
        }
        match self.peek() {
            Some(LOCKED_RUNE) => {
                self.pos += 1;
                Ok(true)
            }
            Some(OPEN_RUNE) => {
                self.pos += 1;
                Ok(false)
            }
            Some(c) => Err(self.error(GrammarReason::ExpectedRune(c))),
            None => Err(self.error(GrammarReason::EmptyName)),
        }
    }

    fn name(&mut self) -> Result<String> {
        let start = self.pos;
        while matches!(self.peek(), Some('a'..='z' | '0'..='9')) {
            self.pos += 1;
        }
        if self.pos == start {
            let reason = match self.peek() {
                None | Some(LOCKED_RUNE | OPEN_RUNE) => GrammarReason::EmptyName,
                Some(c) => GrammarReason::UnexpectedChar(c),
            };
            return Err(self.error(reason));
        }
        Ok(self.input[start..self.pos].to_string())
    }

    // Only ASCII is ever consumed, so `pos` stays on a char boundary.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn error(&self, reason: GrammarReason) -> GrammarError {
        GrammarError {
            input: self.input.to_string(),
            offset: self.pos,
            reason,
        }
    }
}
