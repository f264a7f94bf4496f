/*!
Error types for [`cmdarg`][crate].

There are two kinds of failure. A [`ConfigError`] is a defect in the
program's own declarations, found while registering descriptors. A
[`ParseError`] is a problem with the command line the program was given.
Failing to convert a value into a type is not an error at all; the typed
accessors on [`CmdArg`][crate::CmdArg] return [`None`] instead.
 */

use core::fmt;

use joinery::JoinableIterator;

use crate::descriptor::CmdArg;

/// A set of descriptors couldn't be registered together.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// A descriptor was declared with an empty identifier
    EmptyIdentifier,

    /// A descriptor used one of the names reserved for `--help`
    Reserved { identifier: String, name: String },

    /// Two descriptors share an identifier or alias
    Duplicate {
        identifier: String,
        existing: String,
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyIdentifier => write!(f, "argument identifiers must not be empty"),
            ConfigError::Reserved { identifier, name } => write!(
                f,
                "argument {identifier:?} uses {name:?}, which is reserved for help"
            ),
            ConfigError::Duplicate {
                identifier,
                existing,
                name,
            } => write!(
                f,
                "argument {identifier:?} uses {name:?}, which already belongs to {existing:?}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// A required argument that never appeared on the command line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MissingArgument {
    pub identifier: String,
    pub long_name: String,
    pub short_name: String,
}

impl MissingArgument {
    pub(crate) fn new(arg: &CmdArg) -> Self {
        Self {
            identifier: arg.identifier().to_owned(),
            long_name: arg.long_name().to_owned(),
            short_name: arg.short_name().to_owned(),
        }
    }
}

impl fmt::Display for MissingArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.long_name, self.short_name)
    }
}

/// Discriminant of a [`ParseError`], for callers that want to branch
/// without matching on the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    HelpRequested,
    MissingRequired,
    UnrecognizedFlag,
}

/// Something about the command line prevented a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// `--help` or `-h` was given. Scanning stopped at that token.
    HelpRequested,

    /// One or more required arguments never appeared. Every missing argument
    /// is listed, in registration order.
    MissingRequired(Vec<MissingArgument>),

    /// A flag-shaped token didn't match any declared argument. Only reported
    /// by a [strict][crate::Parser::strict] parser.
    UnrecognizedFlag { flag: String },
}

impl ParseError {
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::HelpRequested => ParseErrorKind::HelpRequested,
            ParseError::MissingRequired(_) => ParseErrorKind::MissingRequired,
            ParseError::UnrecognizedFlag { .. } => ParseErrorKind::UnrecognizedFlag,
        }
    }

    /// The missing required arguments, if that's what this error is about
    #[must_use]
    pub fn missing(&self) -> &[MissingArgument] {
        match self {
            ParseError::MissingRequired(missing) => missing,
            _ => &[],
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::HelpRequested => write!(f, "usage message was requested"),
            ParseError::MissingRequired(missing) => write!(
                f,
                "missing required arguments: {}",
                missing.iter().join_with(", ")
            ),
            ParseError::UnrecognizedFlag { flag } => write!(f, "unrecognized flag {flag}"),
        }
    }
}

impl core::error::Error for ParseError {}
