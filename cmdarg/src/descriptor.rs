/*!
Argument descriptors: the declaration of a single named argument, plus the
state it accumulates while the command line is scanned.

Descriptors are declared with an [`ArgSpec`], which is a plain value that is
configured by chaining, and then finalized into a [`CmdArg`] with
[`build`][ArgSpec::build]. Only a [`CmdArg`] can be registered with a
[`Parser`][crate::Parser].
 */

use lazy_format::lazy_format;

/**
How tokens on the command line update a descriptor.

The policy is applied twice: once when the descriptor's own flag is matched,
and once for every non-flag token that follows it, until the next recognized
flag.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    /// Matching the flag stores `"true"`. Trailing tokens are ignored.
    #[default]
    SetTrue,

    /// Matching the flag stores `"false"`. Trailing tokens are ignored.
    SetFalse,

    /// Each trailing token replaces the stored value; the last one wins.
    StoreSingle,

    /// Every trailing token is appended, in order.
    StoreMany,

    /// Matching the flag bumps the occurrence count. Trailing tokens are
    /// ignored.
    Count,
}

impl Action {
    /// True if this policy accepts trailing tokens as values
    #[inline]
    #[must_use]
    pub const fn takes_values(self) -> bool {
        matches!(self, Action::StoreSingle | Action::StoreMany)
    }
}

/**
The configuration of a single argument, before it has been finalized.

By default, an argument with identifier `foo` is spelled `--foo` and `-foo`
on the command line, is optional, and uses [`Action::SetTrue`].

```
use cmdarg::{Action, ArgSpec};

let output = ArgSpec::new("output")
    .abbreviation("o")
    .help("where to write the report")
    .required(true)
    .action(Action::StoreSingle)
    .build();

assert_eq!(output.long_name(), "--output");
assert_eq!(output.short_name(), "-o");
```
*/
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ArgSpec {
    identifier: String,
    long_name: String,
    short_name: String,
    description: String,
    required: bool,
    action: Action,
}

impl ArgSpec {
    pub fn new(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();

        Self {
            long_name: format!("--{identifier}"),
            short_name: format!("-{identifier}"),
            identifier,
            description: String::new(),
            required: false,
            action: Action::default(),
        }
    }

    /// Set the long alias. `name("out")` makes the argument `--out`.
    pub fn name(self, alias: impl AsRef<str>) -> Self {
        Self {
            long_name: format!("--{}", alias.as_ref()),
            ..self
        }
    }

    /// Set the short alias. `abbreviation("o")` makes the argument `-o`.
    pub fn abbreviation(self, alias: impl AsRef<str>) -> Self {
        Self {
            short_name: format!("-{}", alias.as_ref()),
            ..self
        }
    }

    pub fn help(self, text: impl Into<String>) -> Self {
        Self {
            description: text.into(),
            ..self
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }

    pub fn action(self, action: Action) -> Self {
        Self { action, ..self }
    }

    /// Finalize this configuration into a descriptor that can be registered
    /// with a [`Parser`][crate::Parser].
    #[must_use]
    pub fn build(self) -> CmdArg {
        CmdArg {
            spec: self,
            observed: false,
            values: Vec::new(),
            count: 0,
        }
    }
}

/**
A finalized argument descriptor.

The declaration half of a [`CmdArg`] never changes after
[`build`][ArgSpec::build]. The state half (whether the argument was seen, the
values collected for it, and how many times it appeared) is written only by
the [`Parser`][crate::Parser] during a scan, and is read-only afterwards.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdArg {
    spec: ArgSpec,
    observed: bool,
    values: Vec<String>,
    count: u32,
}

impl CmdArg {
    /// The canonical name of this argument
    #[inline]
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.spec.identifier
    }

    /// The long alias, including its `--` prefix
    #[inline]
    #[must_use]
    pub fn long_name(&self) -> &str {
        &self.spec.long_name
    }

    /// The short alias, including its `-` prefix
    #[inline]
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.spec.short_name
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.spec.description
    }

    #[inline]
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.spec.required
    }

    #[inline]
    #[must_use]
    pub fn action(&self) -> Action {
        self.spec.action
    }

    /// True if this argument's flag appeared at least once in the most
    /// recent parse
    #[inline]
    #[must_use]
    pub fn is_observed(&self) -> bool {
        self.observed
    }

    /// The raw values collected for this argument, in command line order
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The number of times this argument's flag appeared
    #[inline]
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The three names this argument can be looked up by
    pub fn names(&self) -> [&str; 3] {
        [self.identifier(), self.long_name(), self.short_name()]
    }

    /**
    A one-line description of this argument, as shown in the help text:

    ```text
    [Required] output (--output, -o): 	where to write the report
    ```
    */
    #[must_use]
    pub fn summary(&self) -> String {
        let requirement = match self.spec.required {
            true => "[Required]",
            false => "[Optional]",
        };

        lazy_format!(
            "{requirement} {identifier} ({long}, {short}): \t{description}",
            identifier = self.identifier(),
            long = self.long_name(),
            short = self.short_name(),
            description = self.description(),
        )
        .to_string()
    }

    /// Forget everything collected by a previous parse
    pub(crate) fn reset(&mut self) {
        self.observed = false;
        self.values.clear();
        self.count = 0;
    }

    /// This argument's flag was matched on the command line
    pub(crate) fn activate(&mut self) {
        self.observed = true;
        self.count = self.count.saturating_add(1);

        match self.spec.action {
            Action::SetTrue => self.store("true".to_owned()),
            Action::SetFalse => self.store("false".to_owned()),
            Action::StoreSingle | Action::StoreMany | Action::Count => {}
        }
    }

    /// A non-flag token followed this argument's flag. Returns false if the
    /// action doesn't take values and the token was dropped.
    pub(crate) fn feed(&mut self, value: String) -> bool {
        match self.spec.action {
            Action::StoreSingle => self.store(value),
            Action::StoreMany => self.values.push(value),
            Action::SetTrue | Action::SetFalse | Action::Count => return false,
        }

        true
    }

    fn store(&mut self, value: String) {
        self.values.clear();
        self.values.push(value);
    }
}
