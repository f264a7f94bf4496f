/*!
The resolution table: every registered descriptor, and the names that lead to
it.
 */

use std::collections::HashMap;

use cmdarg_lexer::{HELP_LONG, HELP_SHORT, as_flag};

use crate::descriptor::{ArgSpec, CmdArg};
use crate::errors::ConfigError;

/// The identifier of the built-in help argument
pub const HELP_IDENTIFIER: &str = "help";

/// Every name that belongs to the built-in help argument. No declared
/// argument may use any of these.
pub const RESERVED_NAMES: [&str; 3] = [HELP_IDENTIFIER, HELP_LONG, HELP_SHORT];

/// A stable reference to a descriptor registered with a
/// [`Parser`][crate::Parser]. Handles are only meaningful for the parser
/// that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(usize);

impl Handle {
    /// The handle of the built-in help argument, which is always registered
    /// first
    pub const HELP: Handle = Handle(0);

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Descriptors in registration order, plus an index from each of their names
#[derive(Debug, Clone)]
pub(crate) struct Registry {
    args: Vec<CmdArg>,
    names: HashMap<String, Handle>,
}

impl Registry {
    pub fn new() -> Self {
        let help = ArgSpec::new(HELP_IDENTIFIER)
            .abbreviation("h")
            .help("displays this help screen")
            .build();

        debug_assert_eq!(help.names(), RESERVED_NAMES);

        Self {
            names: RESERVED_NAMES
                .iter()
                .map(|&name| (name.to_owned(), Handle::HELP))
                .collect(),
            args: Vec::from([help]),
        }
    }

    /// Add a descriptor, indexing it by its identifier and both aliases. On
    /// error, nothing is added.
    pub fn insert(&mut self, arg: CmdArg) -> Result<Handle, ConfigError> {
        if arg.identifier().is_empty() {
            return Err(ConfigError::EmptyIdentifier);
        }

        let names = arg.names();

        for (i, &name) in names.iter().enumerate() {
            if RESERVED_NAMES.contains(&name) {
                return Err(ConfigError::Reserved {
                    identifier: arg.identifier().to_owned(),
                    name: name.to_owned(),
                });
            }

            let existing = match self.names.get(name) {
                Some(&handle) => self.args[handle.index()].identifier(),
                None if names[..i].contains(&name) => arg.identifier(),
                None => continue,
            };

            return Err(ConfigError::Duplicate {
                identifier: arg.identifier().to_owned(),
                existing: existing.to_owned(),
                name: name.to_owned(),
            });
        }

        for alias in [arg.long_name(), arg.short_name()] {
            if as_flag(alias.as_bytes()).is_none() {
                log::warn!(
                    "argument {:?}: alias {alias:?} can never match a command-line flag",
                    arg.identifier()
                );
            }
        }

        let handle = Handle(self.args.len());
        self.names
            .extend(names.iter().map(|&name| (name.to_owned(), handle)));
        self.args.push(arg);

        Ok(handle)
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Handle> {
        self.names.get(name).copied()
    }

    #[inline]
    pub fn get(&self, handle: Handle) -> &CmdArg {
        &self.args[handle.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, handle: Handle) -> &mut CmdArg {
        &mut self.args[handle.index()]
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &CmdArg> {
        self.args.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CmdArg> {
        self.args.iter_mut()
    }
}
