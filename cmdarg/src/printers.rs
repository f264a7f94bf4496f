use std::io::{self, Write as _};

#[cfg(debug_assertions)]
use indent_write::io::IndentWriter;
#[cfg(debug_assertions)]
use joinery::JoinableIterator;
#[cfg(debug_assertions)]
use lazy_format::lazy_format;

use crate::descriptor::CmdArg;
use crate::program::ProgramInfo;

/*
Overall structure:

NAME VERSION by AUTHOR, LICENSE license
DESCRIPTION

[Optional] help (--help, -h): 	displays this help screen
[Required] foo (--foo, -f): 	description of foo
 */
pub fn print_help<'a>(
    out: &mut impl io::Write,
    info: Option<&ProgramInfo>,
    args: impl IntoIterator<Item = &'a CmdArg>,
) -> io::Result<()> {
    if let Some(info) = info {
        info.write_banner(out)?;
    }

    args.into_iter()
        .try_for_each(|arg| writeln!(out, "{}", arg.summary()))
}

/// Print the full internal state of every argument, for diagnostics
#[cfg(debug_assertions)]
pub fn print_dump<'a>(
    out: &mut impl io::Write,
    args: impl IntoIterator<Item = &'a CmdArg>,
) -> io::Result<()> {
    args.into_iter().try_for_each(|arg| {
        writeln!(out, "{}:", arg.identifier())?;

        {
            let mut body = IndentWriter::new("    ", &mut *out);
            let values = arg
                .values()
                .iter()
                .map(|value| lazy_format!("{value:?}"))
                .join_with(", ");

            writeln!(body, "Long name: {}", arg.long_name())?;
            writeln!(body, "Short name: {}", arg.short_name())?;
            writeln!(body, "Description: {}", arg.description())?;
            writeln!(body, "Required?: {}", arg.is_required())?;
            writeln!(body, "Set?: {}", arg.is_observed())?;
            writeln!(body, "Action: {:?}", arg.action())?;
            writeln!(body, "Values: [{values}]")?;
            writeln!(body, "Count: {}", arg.count())?;
        }

        writeln!(out)
    })
}
