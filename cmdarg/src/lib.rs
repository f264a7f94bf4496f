/*!
A small, declaration-driven command-line argument parser.

A program declares each of its named arguments with an [`ArgSpec`], finalizes
them with [`build`][ArgSpec::build], and hands them all to a [`Parser`]. The
parser scans the command line once, records which arguments appeared and what
values followed them, and checks that every required argument was given.
Afterwards, arguments can be looked up by identifier or by either alias, and
their values read back as strings, numbers, booleans, or your own types via
[`FromValues`].

```no_run
use cmdarg::{Action, ArgSpec, Parser, ProgramInfo};

let mut parser = Parser::with_info(
    ProgramInfo {
        program_name: Some("frobnicate".to_owned()),
        version: Some("1.2.0".to_owned()),
        ..ProgramInfo::default()
    },
    [
        ArgSpec::new("input")
            .abbreviation("i")
            .help("files to frobnicate")
            .required(true)
            .action(Action::StoreMany)
            .build(),
        ArgSpec::new("level")
            .abbreviation("l")
            .help("how hard to frobnicate")
            .action(Action::StoreSingle)
            .build(),
    ],
);

// Prints the help text and exits for `--help`, or reports missing
// arguments and exits.
parser.parse_env();

let level: u32 = parser.get("level").as_int().unwrap_or(3);
for input in parser.get("-i").values() {
    println!("frobnicating {input} at level {level}");
}
```

The command line syntax is deliberately simple: `--name` and `-n` are flags,
everything else is a value for the most recent flag. There is no
`--name=value`, no clustering of short flags, and no subcommands. See
[`Parser`] for the details.
*/

pub mod arguments;
mod convert;
pub mod descriptor;
pub mod errors;
mod parser;
mod printers;
mod program;
mod registry;

pub use convert::{Float, FromRadix, FromValues};
pub use descriptor::{Action, ArgSpec, CmdArg};
pub use errors::{ConfigError, MissingArgument, ParseError, ParseErrorKind};
pub use parser::{ERROR_EXIT_CODE, HELP_EXIT_CODE, Parser};
pub use program::ProgramInfo;
pub use registry::{Handle, RESERVED_NAMES};
