//! Line normalization and command parsing.

use core::convert::Infallible;

use winnow::ascii::multispace1;
use winnow::combinator::{alt, opt, preceded};
use winnow::token::{literal, rest};
use winnow::Parser;

use crate::config::ConsoleConfig;
use crate::error::CommandError;

use super::number::{parse_lenient, parse_strict};
use super::{Command, RawText};

/// Longest line, after trimming, that is matched against the grammar.
pub const MAX_LINE_LEN: usize = 64;

/// Trim surrounding whitespace and upper-case a line.
///
/// Returns `None` if the trimmed line is longer than [`MAX_LINE_LEN`].
pub fn normalize(line: &str) -> Option<heapless::String<MAX_LINE_LEN>> {
    let mut out = heapless::String::new();
    for c in line.trim().chars() {
        out.push(c.to_ascii_uppercase()).ok()?;
    }
    Some(out)
}

/// Upper-cased prefix of `text` that fits in [`RawText`].
fn raw_text(text: &str) -> RawText {
    let mut out = RawText::new();
    for c in text.trim().chars() {
        if out.push(c.to_ascii_uppercase()).is_err() {
            break;
        }
    }
    out
}

/// Command parser.
///
/// Holds the numeric argument policy: lenient by default, where an argument
/// is read as far as it forms a number and 0 otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandParser {
    strict: bool,
}

impl CommandParser {
    /// Creates a lenient parser.
    pub const fn new() -> Self {
        Self { strict: false }
    }

    /// Creates a parser that rejects malformed numeric arguments.
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Creates a parser from the console configuration.
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            strict: config.strict_arguments,
        }
    }

    /// Whether malformed numbers are rejected.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Parses a line.
    ///
    /// # Errors
    ///
    /// Only in strict mode: `CommandError::InvalidNumber` when a numeric
    /// argument is not a whole integer.
    pub fn parse(&self, line: &str) -> Result<Command, CommandError> {
        if self.strict {
            parse_with(line, |arg| {
                parse_strict(arg).ok_or_else(|| CommandError::InvalidNumber(raw_text(arg)))
            })
        } else {
            Ok(Command::parse(line))
        }
    }
}

impl Command {
    /// Parse a line with lenient numeric arguments.
    pub fn parse(line: &str) -> Self {
        match parse_with(line, |arg| Ok::<_, Infallible>(parse_lenient(arg))) {
            Ok(command) => command,
            Err(never) => match never {},
        }
    }
}

/// Keywords of the command grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Move,
    Goto,
    Home,
    Speed,
    Status,
}

fn parse_keyword<'s>(input: &mut &'s str) -> winnow::Result<Keyword> {
    alt((
        literal("MOVE").value(Keyword::Move),
        literal("GOTO").value(Keyword::Goto),
        literal("HOME").value(Keyword::Home),
        literal("SPEED").value(Keyword::Speed),
        literal("STATUS").value(Keyword::Status),
    ))
    .parse_next(input)
}

/// Keyword, then optionally whitespace and the rest of the line as argument.
fn parse_statement<'s>(input: &mut &'s str) -> winnow::Result<(Keyword, Option<&'s str>)> {
    (parse_keyword, opt(preceded(multispace1, rest))).parse_next(input)
}

fn parse_with<E>(
    line: &str,
    number: impl FnOnce(&str) -> Result<i64, E>,
) -> Result<Command, E> {
    let Some(text) = normalize(line) else {
        return Ok(Command::Unknown(raw_text(line)));
    };

    let Ok(statement) = parse_statement.parse(text.as_str()) else {
        return Ok(Command::Unknown(raw_text(&text)));
    };

    let command = match statement {
        (Keyword::Home, None) => Command::Home,
        (Keyword::Status, None) => Command::Status,
        (Keyword::Move, Some(arg)) => Command::Move(number(arg)?),
        (Keyword::Goto, Some(arg)) => Command::Goto(number(arg)?),
        (Keyword::Speed, Some(arg)) => Command::SetSpeed(number(arg)?),
        _ => Command::Unknown(raw_text(&text)),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(Command::parse("MOVE 400"), Command::Move(400));
        assert_eq!(Command::parse("GOTO -120"), Command::Goto(-120));
        assert_eq!(Command::parse("HOME"), Command::Home);
        assert_eq!(Command::parse("SPEED 800"), Command::SetSpeed(800));
        assert_eq!(Command::parse("STATUS"), Command::Status);
    }

    #[test]
    fn test_case_and_whitespace_normalized() {
        assert_eq!(Command::parse("  move 25\r\n"), Command::Move(25));
        assert_eq!(Command::parse("\thome "), Command::Home);
        assert_eq!(Command::parse("Status"), Command::Status);
        assert_eq!(Command::parse("goto  -5"), Command::Goto(-5));
        assert_eq!(Command::parse("MOVE\t5"), Command::Move(5));
        assert_eq!(Command::parse("speed \t 700"), Command::SetSpeed(700));
    }

    #[test]
    fn test_lenient_arguments() {
        assert_eq!(Command::parse("MOVE abc"), Command::Move(0));
        assert_eq!(Command::parse("SPEED 900us"), Command::SetSpeed(900));
    }

    #[test]
    fn test_unknown() {
        let unknown = |s: &str| Command::Unknown(RawText::try_from(s).unwrap());
        assert_eq!(Command::parse("foo"), unknown("FOO"));
        assert_eq!(Command::parse("MOVE"), unknown("MOVE"));
        assert_eq!(Command::parse("HOME NOW"), unknown("HOME NOW"));
        assert_eq!(Command::parse("MOVEX 5"), unknown("MOVEX 5"));
        assert_eq!(Command::parse("STATUSX"), unknown("STATUSX"));
        assert_eq!(Command::parse("XHOME"), unknown("XHOME"));
        assert_eq!(Command::parse(""), unknown(""));
    }

    #[test]
    fn test_overlong_line_is_unknown() {
        let line = format!("MOVE {}", "1".repeat(100));
        match Command::parse(&line) {
            Command::Unknown(raw) => assert!(raw.starts_with("MOVE 111")),
            other => panic!("expected unknown, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_rejects_malformed_number() {
        let parser = CommandParser::strict();
        assert_eq!(parser.parse("move 12"), Ok(Command::Move(12)));
        assert_eq!(
            parser.parse("move 12abc"),
            Err(CommandError::InvalidNumber(RawText::try_from("12ABC").unwrap()))
        );
        assert!(parser.parse("foo").is_ok());
    }

    #[test]
    fn test_parser_from_config() {
        let parser = CommandParser::from_config(&ConsoleConfig {
            strict_arguments: true,
        });
        assert!(parser.is_strict());
        assert!(!CommandParser::new().is_strict());
    }
}
