//! Turns one source line into a [`Line`]: either a label definition or an
//! opcode with its comma-separated arguments.

use pest::Parser;

use crate::error::ParseError;
use crate::grammar::{HackParser, Rule};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Arg {
    /// One to three letters from `{A, D, M}`, e.g. `M` or `AD`.
    Register(String),
    /// A `$name` variable reference.
    Symbol(String),
    /// An `@name` label reference.
    Label(String),
    /// A decimal literal, signed only to admit the constant `-1`.
    Number(i32),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line {
    Label(String),
    Instruction { opcode: String, args: Vec<Arg> },
}

/// Strips a `#`-comment and surrounding whitespace; `None` for blank lines.
pub fn strip_comment(raw: &str) -> Option<&str> {
    let code = match raw.find('#') {
        Some(i) => &raw[..i],
        None => raw,
    };
    let trimmed = code.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

pub fn parse_line(text: &str) -> Result<Line, ParseError> {
    let pair = HackParser::parse(Rule::line, text)?.next().unwrap();
    let inner = pair.into_inner().next().unwrap();

    match inner.as_rule() {
        Rule::label_line => {
            let identifier = inner.into_inner().next().unwrap();
            Ok(Line::Label(identifier.as_str().to_string()))
        }
        Rule::instruction_line => {
            let mut parts = inner.into_inner();
            let opcode = parts.next().unwrap().as_str().to_string();
            let args = parts.map(build_arg).collect::<Result<Vec<_>, _>>()?;
            Ok(Line::Instruction { opcode, args })
        }
        _ => unreachable!("line always contains a label_line or instruction_line"),
    }
}

/// `arg` is an atomic rule, so its match is exposed as a single token rather
/// than the `register_combo`/`symbol_ref`/`label_ref`/`number` choice that
/// matched inside it; the grammar guarantees these prefixes are mutually
/// exclusive, so the text alone is enough to tell them apart.
fn build_arg(pair: pest::iterators::Pair<Rule>) -> Result<Arg, ParseError> {
    let text = pair.as_str();
    let arg = match text.as_bytes()[0] {
        b'$' => Arg::Symbol(text[1..].to_string()),
        b'@' => Arg::Label(text[1..].to_string()),
        b'A' | b'D' | b'M' => Arg::Register(text.to_string()),
        _ => Arg::Number(text.parse::<i32>()?),
    };
    Ok(arg)
}
