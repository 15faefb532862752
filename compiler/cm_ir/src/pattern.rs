//! Pattern AST.
//!
//! A [`Pattern`] is produced by `cm_parse` from pattern text such as
//! `{x: {a, b}, y: [c, d], z: e}` or `Pair([x, _])`, and consumed by the
//! structural matcher in `cm_patterns`.
//!
//! # Grammar
//!
//! ```text
//! Pattern           := Array | Object | Function | Identifier | IdentifierSpecial
//!                     | Number | String | Any
//! Array             := "[" (Pattern? ",")* Pattern? "]"
//! Object            := "{" ( (ObjectElement ",")* ObjectElement )? "}"
//! ObjectElement     := Identifier (":" Pattern)?
//! Function          := Identifier "(" (Object | Array)? ")"
//! IdentifierSpecial := "true" | "false" | "null" | "undefined"
//! Any               := "_"
//! ```

use std::fmt;

/// Literal spelled as a bare word: `true`, `false`, `null`, `undefined`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Special {
    True,
    False,
    Null,
    Undefined,
}

impl Special {
    /// Look up a reserved word. Returns `None` for ordinary identifiers.
    pub fn from_word(word: &str) -> Option<Special> {
        match word {
            "true" => Some(Special::True),
            "false" => Some(Special::False),
            "null" => Some(Special::Null),
            "undefined" => Some(Special::Undefined),
            _ => None,
        }
    }

    /// The source spelling of this literal.
    pub fn as_str(self) -> &'static str {
        match self {
            Special::True => "true",
            Special::False => "false",
            Special::Null => "null",
            Special::Undefined => "undefined",
        }
    }
}

impl fmt::Display for Special {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `key` or `key: pattern` element of an object pattern.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectEntry {
    /// Property name looked up on the matched value.
    pub key: String,
    /// Sub-pattern for the property. `None` is the shorthand form, which
    /// binds the property to a capture named after `key`.
    pub value: Option<Pattern>,
}

impl ObjectEntry {
    /// Shorthand entry: `{ key }`.
    pub fn shorthand(key: impl Into<String>) -> Self {
        ObjectEntry {
            key: key.into(),
            value: None,
        }
    }

    /// Entry with an explicit sub-pattern: `{ key: pattern }`.
    pub fn with_pattern(key: impl Into<String>, value: Pattern) -> Self {
        ObjectEntry {
            key: key.into(),
            value: Some(value),
        }
    }
}

/// Argument list of a constructor pattern.
///
/// Only array and object literals are legal inside `Name(...)`, so the
/// argument is one of two shapes rather than an arbitrary [`Pattern`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FunctionArgs {
    /// `Name([a, b])`: destructure the constructor arguments by position.
    Positional(Vec<Pattern>),
    /// `Name({a, b: c})`: destructure the value's properties by key.
    Keyed(Vec<ObjectEntry>),
}

/// Parsed pattern.
///
/// Nodes are immutable once built and own their children.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pattern {
    /// `[p0, p1, ...]`, matched against an array of exactly this length.
    Array(Vec<Pattern>),
    /// `{k0, k1: p1, ...}`, matched against any value that has every key.
    Object(Vec<ObjectEntry>),
    /// `Name`, `Name()`, `Name([...])` or `Name({...})`.
    ///
    /// `args` is `None` for `Name()`, which still checks the type tag.
    Function {
        name: String,
        args: Option<FunctionArgs>,
    },
    /// Capturing binder; matches anything.
    Identifier(String),
    /// `true`, `false`, `null` or `undefined`.
    Special(Special),
    /// Numeric literal.
    Number(f64),
    /// String literal with escapes already resolved.
    String(String),
    /// `_`: matches anything, binds nothing.
    Any,
    /// Elided slot in an array pattern: matches anything, binds nothing,
    /// but still occupies a position.
    Blank,
}

impl Pattern {
    /// Short name of the node kind, for diagnostics and tracing.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Pattern::Array(_) => "array",
            Pattern::Object(_) => "object",
            Pattern::Function { .. } => "function",
            Pattern::Identifier(_) => "identifier",
            Pattern::Special(_) => "special identifier",
            Pattern::Number(_) => "number",
            Pattern::String(_) => "string",
            Pattern::Any => "wildcard",
            Pattern::Blank => "blank",
        }
    }

    /// Names captured by this pattern, in the order a match binds them.
    ///
    /// A name that appears twice is listed twice; the later capture wins
    /// when the match runs.
    pub fn binders(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_binders(&mut names);
        names
    }

    fn collect_binders<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Pattern::Identifier(name) => names.push(name),
            Pattern::Array(elements)
            | Pattern::Function {
                args: Some(FunctionArgs::Positional(elements)),
                ..
            } => {
                for element in elements {
                    element.collect_binders(names);
                }
            }
            Pattern::Object(entries)
            | Pattern::Function {
                args: Some(FunctionArgs::Keyed(entries)),
                ..
            } => {
                for entry in entries {
                    match &entry.value {
                        Some(value) => value.collect_binders(names),
                        None => names.push(&entry.key),
                    }
                }
            }
            Pattern::Function { args: None, .. }
            | Pattern::Special(_)
            | Pattern::Number(_)
            | Pattern::String(_)
            | Pattern::Any
            | Pattern::Blank => {}
        }
    }
}

fn write_elements(f: &mut fmt::Formatter<'_>, elements: &[Pattern]) -> fmt::Result {
    f.write_str("[")?;
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{element}")?;
    }
    // A trailing separator is dropped by the parser, so a trailing blank
    // needs one more to survive a re-parse.
    if matches!(elements.last(), Some(Pattern::Blank)) {
        f.write_str(",")?;
    }
    f.write_str("]")
}

fn write_entries(f: &mut fmt::Formatter<'_>, entries: &[ObjectEntry]) -> fmt::Result {
    f.write_str("{")?;
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{entry}")?;
    }
    f.write_str("}")
}

fn write_string_literal(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            '\0' => f.write_str("\\0")?,
            _ => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

impl fmt::Display for ObjectEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}: {value}", self.key),
            None => f.write_str(&self.key),
        }
    }
}

impl fmt::Display for FunctionArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionArgs::Positional(elements) => write_elements(f, elements),
            FunctionArgs::Keyed(entries) => write_entries(f, entries),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Array(elements) => write_elements(f, elements),
            Pattern::Object(entries) => write_entries(f, entries),
            Pattern::Function { name, args } => match args {
                Some(args) => write!(f, "{name}({args})"),
                None => write!(f, "{name}()"),
            },
            Pattern::Identifier(name) => f.write_str(name),
            Pattern::Special(special) => write!(f, "{special}"),
            Pattern::Number(value) => write!(f, "{value}"),
            Pattern::String(value) => write_string_literal(f, value),
            Pattern::Any => f.write_str("_"),
            Pattern::Blank => Ok(()),
        }
    }
}
