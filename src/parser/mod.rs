//! Precedence parser turning one assembled line into a [`Chain`] tree.
//!
//! Operators are resolved loosest first. At each level exactly one rule
//! applies:
//!
//! 1. `;` (first occurrence)
//! 2. `&&` / `||` (first occurrence)
//! 3. `|` (last occurrence)
//! 4. redirections (last occurrence)
//! 5. leading `!`
//! 6. `( ... )` spanning the whole command
//! 7. empty text
//! 8. an atomic command
//!
//! Only parentheses nest; operators inside them belong to the subshell.

mod redirect;
mod scan;
mod tokenize;

pub use redirect::{Redirect, RedirectMode, RedirectTarget};
pub use tokenize::ArgVector;

use scan::{Scan, Split};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chain {
    Empty,
    Command(ArgVector),
    Sequence(Box<Chain>, Box<Chain>),
    And(Box<Chain>, Box<Chain>),
    Or(Box<Chain>, Box<Chain>),
    Pipe(Box<Chain>, Box<Chain>),
    Redirect(Box<Chain>, Redirect),
    Negate(Box<Chain>),
    Subshell(Box<Chain>),
    /// Reported with status 2 when evaluation reaches it.
    Malformed(SyntaxError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    MissingCloseParen,
    TrailingAfterParen,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxError::MissingCloseParen => write!(f, "syntax error: missing ')'"),
            SyntaxError::TrailingAfterParen => write!(f, "syntax error: unexpected text after ')'"),
        }
    }
}

pub fn parse(text: &str) -> Chain {
    if let Some(split) = scan::first_top_level(text, |bytes, i| (bytes[i] == b';').then_some(1)) {
        let (left, right) = binary(text, split);
        return Chain::Sequence(left, right);
    }

    let mut conjunction = b'&';
    let conditional = scan::first_top_level(text, |bytes, i| match &bytes[i..] {
        [op @ (b'&' | b'|'), next, ..] if next == op => {
            conjunction = *op;
            Some(2)
        }
        _ => None,
    });
    if let Some(split) = conditional {
        let (left, right) = binary(text, split);
        return if conjunction == b'&' {
            Chain::And(left, right)
        } else {
            Chain::Or(left, right)
        };
    }

    let pipe = scan::last_top_level(text, |bytes, i| {
        if bytes[i] != b'|' {
            Scan::Continue
        } else if i > 0 && bytes[i - 1] == b'|' {
            Scan::Skip(1)
        } else {
            Scan::Found(Split { at: i, len: 1 })
        }
    });
    if let Some(split) = pipe {
        let (left, right) = binary(text, split);
        return Chain::Pipe(left, right);
    }

    if let Some((command, redirect)) = redirect::split_redirect(text) {
        return Chain::Redirect(Box::new(parse(command)), redirect);
    }

    parse_unit(text.trim())
}

fn binary(text: &str, split: Split) -> (Box<Chain>, Box<Chain>) {
    (
        Box::new(parse(split.left(text))),
        Box::new(parse(split.right(text))),
    )
}

fn parse_unit(trimmed: &str) -> Chain {
    if let Some(rest) = trimmed.strip_prefix('!') {
        return Chain::Negate(Box::new(parse(rest)));
    }

    if trimmed.starts_with('(') {
        return match scan::matching_paren(trimmed) {
            Some(close) if close == trimmed.len() - 1 => {
                Chain::Subshell(Box::new(parse(&trimmed[1..close])))
            }
            Some(_) => Chain::Malformed(SyntaxError::TrailingAfterParen),
            None => Chain::Malformed(SyntaxError::MissingCloseParen),
        };
    }

    if trimmed.is_empty() {
        return Chain::Empty;
    }

    let argv = ArgVector::tokenize(trimmed);
    if argv.is_empty() {
        Chain::Empty
    } else {
        Chain::Command(argv)
    }
}
