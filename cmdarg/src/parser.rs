use std::{io, ops::Index, process};

use cmdarg_lexer::{Arg, Tokenizer, Visitor};

use crate::descriptor::CmdArg;
use crate::errors::{ConfigError, MissingArgument, ParseError};
use crate::printers::print_help;
use crate::program::ProgramInfo;
use crate::registry::{Handle, Registry};

/// The exit status used after printing the help text
pub const HELP_EXIT_CODE: i32 = 1;

/// The exit status used when the command line couldn't be parsed
pub const ERROR_EXIT_CODE: i32 = 1;

/**
The set of declared arguments for a program, and the engine that fills them
in from the command line.

A parser is built once from all of the program's [`CmdArg`]s, then fed the
command line with [`parse`][Parser::parse] or
[`try_parse`][Parser::try_parse]. Afterwards, each argument can be looked up by
its identifier or by either alias, and its values read back.

```
use cmdarg::{Action, ArgSpec, Parser};

let mut parser = Parser::new([
    ArgSpec::new("verbose").abbreviation("v").build(),
    ArgSpec::new("input")
        .abbreviation("i")
        .required(true)
        .action(Action::StoreMany)
        .build(),
]);

parser
    .try_parse(["prog", "-v", "--input", "a.txt", "b.txt"])
    .unwrap();

assert!(parser.get("-v").is_observed());
assert_eq!(parser.get("input").values(), ["a.txt", "b.txt"]);
```

# Scanning

Arguments are scanned once, left to right, after skipping the program name.
A token that matches the flag grammar (`-name` or `--name`, letters and
hyphens only) and names a declared argument makes that argument *active*.
Every other token is a value for the active argument, handled according to
its [`Action`][crate::Action]. Tokens before the first recognized flag are
ignored, as are flag-shaped tokens that don't name any argument (unless the
parser is [strict][Parser::strict]).

`--help` and `-h` are always reserved. They stop the scan immediately.
*/
#[derive(Debug, Clone)]
pub struct Parser {
    registry: Registry,
    info: Option<ProgramInfo>,
    strict: bool,
}

impl Parser {
    /// Create a parser for a set of arguments.
    ///
    /// # Panics
    ///
    /// Panics if the arguments can't be registered together; see
    /// [`try_new`][Parser::try_new].
    #[must_use]
    pub fn new(args: impl IntoIterator<Item = CmdArg>) -> Self {
        Self::try_new(args).unwrap_or_else(|error| panic!("invalid argument declarations: {error}"))
    }

    /// Create a parser for a set of arguments, with a banner for the help
    /// text.
    ///
    /// # Panics
    ///
    /// Panics if the arguments can't be registered together; see
    /// [`try_new`][Parser::try_new].
    #[must_use]
    pub fn with_info(info: ProgramInfo, args: impl IntoIterator<Item = CmdArg>) -> Self {
        Self::try_with_info(info, args)
            .unwrap_or_else(|error| panic!("invalid argument declarations: {error}"))
    }

    /// Create a parser for a set of arguments. Fails if any argument has an
    /// empty identifier, or if any identifier or alias is used twice or is
    /// one of the reserved help names.
    pub fn try_new(args: impl IntoIterator<Item = CmdArg>) -> Result<Self, ConfigError> {
        Self::build(None, args)
    }

    pub fn try_with_info(
        info: ProgramInfo,
        args: impl IntoIterator<Item = CmdArg>,
    ) -> Result<Self, ConfigError> {
        Self::build(Some(info), args)
    }

    fn build(
        info: Option<ProgramInfo>,
        args: impl IntoIterator<Item = CmdArg>,
    ) -> Result<Self, ConfigError> {
        let mut registry = Registry::new();

        args.into_iter()
            .try_for_each(|arg| registry.insert(arg).map(drop))?;

        Ok(Self {
            registry,
            info,
            strict: false,
        })
    }

    /// In strict mode, a flag-shaped token that doesn't name any declared
    /// argument is an error instead of being ignored.
    #[must_use]
    pub fn strict(self, strict: bool) -> Self {
        Self { strict, ..self }
    }

    #[inline]
    #[must_use]
    pub fn info(&self) -> Option<&ProgramInfo> {
        self.info.as_ref()
    }

    /**
    Scan a command line and fill in every declared argument. The first item
    is the program name, and is skipped.

    Any state from an earlier parse is discarded first. Scanning stops early
    at `--help` or `-h`, with [`ParseError::HelpRequested`]. Otherwise, after
    the scan, every required argument that never appeared is reported
    together in [`ParseError::MissingRequired`].
    */
    pub fn try_parse<I, T>(&mut self, args: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let args: Vec<T> = args.into_iter().collect();

        self.registry.iter_mut().for_each(CmdArg::reset);

        let mut tokens = Tokenizer::new(args.iter().skip(1).map(|arg| arg.as_ref()));
        let mut scan = Scan {
            registry: &mut self.registry,
            active: None,
            strict: self.strict,
        };

        while let Some(step) = tokens.next_token(&mut scan) {
            step?;
        }

        self.validate()
    }

    /// Scan a command line like [`try_parse`][Parser::try_parse]. If help was
    /// requested, print it to stdout and exit with [`HELP_EXIT_CODE`]; if
    /// there was any other error, print it to stderr and exit with
    /// [`ERROR_EXIT_CODE`]. If the help text itself can't be written, that
    /// failure is reported on stderr before exiting.
    pub fn parse<I, T>(&mut self, args: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let result = self.try_parse(args);
        self.exit_on_error(result)
    }

    /// [`try_parse`][Parser::try_parse] the arguments this process was
    /// started with
    pub fn try_parse_env(&mut self) -> Result<(), ParseError> {
        crate::arguments::LoadedArguments::from_env().try_parse_into(self)
    }

    /// [`parse`][Parser::parse] the arguments this process was started with
    pub fn parse_env(&mut self) {
        let result = self.try_parse_env();
        self.exit_on_error(result)
    }

    fn exit_on_error(&self, result: Result<(), ParseError>) {
        if let Err(error) = result {
            let code = self.report(&error, &mut io::stdout().lock(), &mut io::stderr().lock());
            process::exit(code)
        }
    }

    /// Write what `parse` shows for `error`, returning the exit status to
    /// use. Help goes to `out`; everything else, including a failure to
    /// write the help, goes to `err`.
    fn report(
        &self,
        error: &ParseError,
        out: &mut impl io::Write,
        err: &mut impl io::Write,
    ) -> i32 {
        match error {
            ParseError::HelpRequested => {
                if let Err(io_error) = self.write_help(out).and_then(|()| out.flush()) {
                    let _ = writeln!(err, "failed to print help: {io_error}");
                }

                HELP_EXIT_CODE
            }
            error => {
                let _ = writeln!(err, "{error}");
                ERROR_EXIT_CODE
            }
        }
    }

    fn validate(&self) -> Result<(), ParseError> {
        let missing: Vec<MissingArgument> = self
            .registry
            .iter()
            .filter(|arg| arg.is_required() && !arg.is_observed())
            .map(MissingArgument::new)
            .collect();

        match missing.is_empty() {
            true => Ok(()),
            false => Err(ParseError::MissingRequired(missing)),
        }
    }

    /// Find the handle of an argument by its identifier or either alias
    #[inline]
    #[must_use]
    pub fn handle(&self, name: &str) -> Option<Handle> {
        self.registry.lookup(name)
    }

    /// Look up an argument by its identifier or either alias
    #[must_use]
    pub fn try_get(&self, name: &str) -> Option<&CmdArg> {
        self.handle(name).map(|handle| self.registry.get(handle))
    }

    /// Look up an argument by its identifier or either alias.
    ///
    /// # Panics
    ///
    /// Panics if no argument has that name. Asking for an undeclared argument
    /// is a bug in the program, not a property of the command line.
    #[must_use]
    pub fn get(&self, name: &str) -> &CmdArg {
        match self.try_get(name) {
            Some(arg) => arg,
            None => panic!("no argument named {name:?} was declared"),
        }
    }

    /// Every registered argument, in registration order, starting with the
    /// built-in help argument
    pub fn arguments(&self) -> impl Iterator<Item = &CmdArg> {
        self.registry.iter()
    }

    /// Print the help text to stdout
    pub fn help(&self) -> io::Result<()> {
        self.write_help(&mut io::stdout().lock())
    }

    /// Write the help text: the program banner, if any, and then one summary
    /// line per argument
    pub fn write_help(&self, out: &mut impl io::Write) -> io::Result<()> {
        print_help(out, self.info.as_ref(), self.arguments())
    }

    /// Print every argument's complete state to stdout. Only available in
    /// debug builds.
    #[cfg(debug_assertions)]
    pub fn dump(&self) -> io::Result<()> {
        self.write_dump(&mut io::stdout().lock())
    }

    #[cfg(debug_assertions)]
    pub fn write_dump(&self, out: &mut impl io::Write) -> io::Result<()> {
        crate::printers::print_dump(out, self.arguments())
    }
}

impl Index<Handle> for Parser {
    type Output = CmdArg;

    #[inline]
    fn index(&self, handle: Handle) -> &CmdArg {
        self.registry.get(handle)
    }
}

/// The in-progress state of a single scan over the command line
struct Scan<'a> {
    registry: &'a mut Registry,
    active: Option<Handle>,
    strict: bool,
}

impl<'arg> Visitor<'arg> for &mut Scan<'_> {
    type Value = Result<(), ParseError>;

    fn visit_help(self, flag: &'arg str) -> Self::Value {
        log::debug!("{flag}: help requested");
        Err(ParseError::HelpRequested)
    }

    fn visit_flag(self, flag: &'arg str) -> Self::Value {
        match self.registry.lookup(flag) {
            Some(handle) => {
                let arg = self.registry.get_mut(handle);
                log::debug!("{flag}: activating {:?}", arg.identifier());

                arg.activate();
                self.active = Some(handle);
                Ok(())
            }
            None if self.strict => Err(ParseError::UnrecognizedFlag {
                flag: flag.to_owned(),
            }),
            None => {
                log::trace!("ignoring unrecognized flag {flag}");
                Ok(())
            }
        }
    }

    fn visit_value(self, value: &'arg Arg) -> Self::Value {
        let Some(handle) = self.active else {
            log::trace!("ignoring {value:?}: no active argument");
            return Ok(());
        };

        let arg = self.registry.get_mut(handle);
        let text = match value.as_str() {
            Some(text) => text.to_owned(),
            None => String::from_utf8_lossy(value.bytes()).into_owned(),
        };

        if arg.feed(text) {
            log::trace!("{:?}: collected {value:?}", arg.identifier());
        } else {
            log::trace!("{:?}: ignoring {value:?}", arg.identifier());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, ArgSpec};

    fn foo_bar(action: Action) -> Parser {
        Parser::new([
            ArgSpec::new("foo").abbreviation("f").action(action).build(),
            ArgSpec::new("bar").abbreviation("b").action(action).build(),
        ])
    }

    #[test]
    fn empty_parser_has_only_help() {
        let parser = Parser::new([]);

        assert_eq!(parser.arguments().count(), 1);
        assert_eq!(parser.get("-h").identifier(), "help");
    }

    #[test]
    fn leading_values_are_ignored() {
        let mut parser = foo_bar(Action::StoreMany);
        parser.try_parse(["prog", "stray", "--foo", "a"]).unwrap();

        assert_eq!(parser.get("foo").values(), ["a"]);
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let mut parser = foo_bar(Action::StoreMany);
        parser
            .try_parse(["prog", "--foo", "a", "--unknown", "b", "-32"])
            .unwrap();

        // The unknown flag is neither a value nor a new active argument
        assert_eq!(parser.get("foo").values(), ["a", "b", "-32"]);
    }

    #[test]
    fn strict_mode_reports_unknown_flags() {
        let mut parser = foo_bar(Action::StoreMany).strict(true);

        assert_eq!(
            parser.try_parse(["prog", "--foo", "a", "--unknown"]),
            Err(ParseError::UnrecognizedFlag {
                flag: "--unknown".to_owned()
            })
        );

        // Non-flag strays are still fine
        parser.try_parse(["prog", "stray", "--foo", "-", "--"]).unwrap();
        assert_eq!(parser.get("foo").values(), ["-", "--"]);
    }

    #[test]
    fn help_stops_the_scan() {
        let mut parser = foo_bar(Action::SetTrue);

        assert_eq!(
            parser.try_parse(["prog", "--foo", "-h", "--bar"]),
            Err(ParseError::HelpRequested)
        );

        assert!(parser.get("foo").is_observed());
        assert!(!parser.get("bar").is_observed());
    }

    #[test]
    fn reparsing_starts_fresh() {
        let mut parser = foo_bar(Action::Count);

        parser.try_parse(["prog", "-f", "-f"]).unwrap();
        assert_eq!(parser.get("foo").count(), 2);

        parser.try_parse(["prog", "-b"]).unwrap();
        assert_eq!(parser.get("foo").count(), 0);
        assert!(!parser.get("foo").is_observed());
        assert_eq!(parser.get("bar").count(), 1);
    }

    #[test]
    fn non_utf8_values_are_lossy() {
        let mut parser = foo_bar(Action::StoreSingle);
        let args: [&[u8]; 3] = [b"prog", b"--foo", b"a\xffb"];
        parser.try_parse(args).unwrap();

        assert_eq!(parser.get("foo").values(), ["a\u{FFFD}b"]);

        let args: [&[u8]; 3] = [b"prog", b"--foo", "caf\u{e9}".as_bytes()];
        parser.try_parse(args).unwrap();

        assert_eq!(parser.get("foo").values(), ["caf\u{e9}"]);
    }

    #[test]
    fn handles_index_the_parser() {
        let parser = foo_bar(Action::SetTrue);
        let handle = parser.handle("-b").unwrap();

        assert_eq!(parser[handle].identifier(), "bar");
        assert_eq!(parser.handle("--nope"), None);
        assert!(parser.try_get("nope").is_none());
    }

    #[test]
    #[should_panic(expected = "no argument named \"nope\"")]
    fn unknown_lookup_panics() {
        let _ = foo_bar(Action::SetTrue).get("nope");
    }

    #[test]
    #[should_panic(expected = "invalid argument declarations")]
    fn conflicting_declarations_panic() {
        let _ = Parser::new([
            ArgSpec::new("foo").abbreviation("f").build(),
            ArgSpec::new("file").abbreviation("f").build(),
        ]);
    }

    #[test]
    fn help_text_includes_banner_and_help() {
        let parser = Parser::with_info(
            ProgramInfo {
                program_name: Some("demo".to_owned()),
                version: Some("0.1.0".to_owned()),
                ..ProgramInfo::default()
            },
            [ArgSpec::new("foo").abbreviation("f").help("foo it").build()],
        );

        let mut out = Vec::new();
        parser.write_help(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "demo 0.1.0\n\
            [Optional] help (--help, -h): \tdisplays this help screen\n\
            [Optional] foo (--foo, -f): \tfoo it\n"
        );
    }

    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn report_help() {
        let parser = foo_bar(Action::SetTrue);
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let code = parser.report(&ParseError::HelpRequested, &mut out, &mut err);

        assert_eq!(code, HELP_EXIT_CODE);
        assert!(err.is_empty());
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
    }

    #[test]
    fn report_help_write_failure() {
        let parser = foo_bar(Action::SetTrue);
        let mut err = Vec::new();

        let code = parser.report(&ParseError::HelpRequested, &mut BrokenPipe, &mut err);

        assert_eq!(code, HELP_EXIT_CODE);
        assert!(String::from_utf8(err).unwrap().starts_with("failed to print help: "));
    }

    #[test]
    fn report_missing_arguments() {
        let mut parser = Parser::new([ArgSpec::new("input")
            .abbreviation("i")
            .required(true)
            .build()]);

        let error = parser.try_parse(["prog"]).unwrap_err();
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let code = parser.report(&error, &mut out, &mut err);

        assert_eq!(code, ERROR_EXIT_CODE);
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            format!("{error}\n")
        );
    }
}
