use std::ffi::{OsStr, OsString};

use crate::{errors::ParseError, parser::Parser};

/// Helper type for loading arguments from the environment. Usually you can
/// just use [`Parser::parse_env`] instead of reaching for this type.
///
/// This type exists to provide a convenient owned container for args
/// retrieved from [`std::env`], so that they can be handed to a [`Parser`] in
/// the borrowed byte form it scans.
#[derive(Debug, Clone)]
pub struct LoadedArguments {
    arguments: Vec<OsString>,
}

impl LoadedArguments {
    pub fn from_env() -> Self {
        Self {
            arguments: std::env::args_os().collect(),
        }
    }

    pub fn argv0(&self) -> Option<&OsStr> {
        self.arguments.first().map(OsString::as_os_str)
    }

    pub fn try_parse_into(&self, parser: &mut Parser) -> Result<(), ParseError> {
        parser.try_parse(self.arguments.iter().map(|arg| arg.as_encoded_bytes()))
    }

    pub fn parse_into(&self, parser: &mut Parser) {
        parser.parse(self.arguments.iter().map(|arg| arg.as_encoded_bytes()))
    }
}

impl<T: Into<OsString>> FromIterator<T> for LoadedArguments {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            arguments: iter.into_iter().map(Into::into).collect(),
        }
    }
}
