#![no_std]

/*!
Low-level tokenization of command-line arguments. Takes care of deciding which
raw arguments are flags, which are values, and which one is a request for help.
No type handling and no knowledge of declared arguments happens here; usually
this is too low level to use directly.

The flag grammar is deliberately small: one or two leading hyphens, then an
ASCII letter, then any run of ASCII letters and hyphens. There's no
`--option=value` syntax and no clustering of short flags, and a bare `-` or
`--` is always a value.
*/

mod arg;

pub use arg::Arg;

/// The long form of the reserved help flag
pub const HELP_LONG: &str = "--help";

/// The short form of the reserved help flag
pub const HELP_SHORT: &str = "-h";

/**
The [`Tokenizer`] type operates by passing arguments it finds into a
[`Visitor`], to be handled.
 */
pub trait Visitor<'arg> {
    type Value;

    /// The argument was exactly `--help` or `-h`
    fn visit_help(self, flag: &'arg str) -> Self::Value;

    /// The argument matched the flag grammar, such as `--verbose` or `-v`. The
    /// flag is passed with its hyphens intact.
    fn visit_flag(self, flag: &'arg str) -> Self::Value;

    /// Anything else
    fn visit_value(self, value: &'arg Arg) -> Self::Value;
}

/**
Check if a raw argument matches the flag grammar, returning it as a [`str`] if
it does. The grammar is `^(-|--)[A-Za-z]+[A-Za-z-]*$`.
*/
pub fn as_flag(argument: &[u8]) -> Option<&str> {
    let name = match argument {
        [b'-', b'-', name @ ..] | [b'-', name @ ..] => name,
        _ => return None,
    };

    let (&head, tail) = name.split_first()?;

    if !head.is_ascii_alphabetic() {
        return None;
    }

    if !tail.iter().all(|&b| b.is_ascii_alphabetic() || b == b'-') {
        return None;
    }

    // Everything we accepted is ASCII
    core::str::from_utf8(argument).ok()
}

/// Check if a raw argument is exactly one of the reserved help flags
#[inline]
pub fn is_help(argument: &[u8]) -> bool {
    argument == HELP_LONG.as_bytes() || argument == HELP_SHORT.as_bytes()
}

/**
A `Tokenizer` is the main entry point into `cmdarg_lexer`. It classifies one
argument in each call to `next_token`, sending it to the given [`Visitor`].

[cmdarg-lexer][crate] operates entirely on borrowed data, because we assume
that command-line arguments can be loaded early on in `main` and then handled
in a borrowed form for the rest of the program. The ubiquitous `'arg` lifetime
refers to this borrowed command line data.
*/
#[derive(Debug, Clone)]
pub struct Tokenizer<I> {
    args: I,
}

impl<'arg, I> Tokenizer<I>
where
    I: Iterator<Item = &'arg [u8]>,
{
    /**
    Create a new [`Tokenizer`] from an iterator of byte slices, where each
    byte slice is a single argument received from the command line. This list
    should *exclude* the name of the program, which is commonly passed as the
    first argument in the list.
     */
    #[inline]
    #[must_use]
    pub fn new(args: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            args: args.into_iter(),
        }
    }

    /// Classify the next argument and hand it to `visitor`. Returns `None`
    /// once the arguments are exhausted.
    pub fn next_token<V>(&mut self, visitor: V) -> Option<V::Value>
    where
        V: Visitor<'arg>,
    {
        let argument = self.args.next()?;

        Some(match as_flag(argument) {
            Some(flag) if is_help(argument) => visitor.visit_help(flag),
            Some(flag) => visitor.visit_flag(flag),
            None => visitor.visit_value(Arg::new(argument)),
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::{string::String, vec::Vec};

    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Token {
        Help(String),
        Flag(String),
        Value(Vec<u8>),
    }

    struct Collect;

    impl<'arg> Visitor<'arg> for Collect {
        type Value = Token;

        fn visit_help(self, flag: &'arg str) -> Token {
            Token::Help(flag.into())
        }

        fn visit_flag(self, flag: &'arg str) -> Token {
            Token::Flag(flag.into())
        }

        fn visit_value(self, value: &'arg Arg) -> Token {
            Token::Value(value.bytes().into())
        }
    }

    fn tokenize(args: &[&str]) -> Vec<Token> {
        let mut tokenizer = Tokenizer::new(args.iter().map(|arg| arg.as_bytes()));
        core::iter::from_fn(|| tokenizer.next_token(Collect)).collect()
    }

    #[test]
    fn flag_grammar_accepts() {
        for flag in ["--flag", "--long-flag", "-short", "-s", "-S", "--a-", "--x--y"] {
            assert_eq!(as_flag(flag.as_bytes()), Some(flag), "{flag:?}");
        }
    }

    #[test]
    fn flag_grammar_rejects() {
        for arg in [
            "abc--flag",
            "--flag12",
            " --flag  ",
            " --flag",
            "--flag  ",
            "--",
            "-",
            "---flag",
            "--1flag",
            "-32",
            "--fl_ag",
            "",
            "flag",
        ] {
            assert_eq!(as_flag(arg.as_bytes()), None, "{arg:?}");
        }
    }

    #[test]
    fn non_ascii_is_never_a_flag() {
        assert_eq!(as_flag("--flägg".as_bytes()), None);
        assert_eq!(as_flag(b"--fl\xffag"), None);
    }

    #[test]
    fn classify_mixed_arguments() {
        let tokens = tokenize(&["--foo", "a", "-b", "--", "-", "-12", "-h", "--help"]);

        assert_eq!(
            tokens,
            [
                Token::Flag("--foo".into()),
                Token::Value(b"a".to_vec()),
                Token::Flag("-b".into()),
                Token::Value(b"--".to_vec()),
                Token::Value(b"-".to_vec()),
                Token::Value(b"-12".to_vec()),
                Token::Help("-h".into()),
                Token::Help("--help".into()),
            ]
        );
    }

    #[test]
    fn help_lookalikes_are_plain_flags() {
        let tokens = tokenize(&["--helpful", "-hh", "help"]);

        assert_eq!(
            tokens,
            [
                Token::Flag("--helpful".into()),
                Token::Flag("-hh".into()),
                Token::Value(b"help".to_vec()),
            ]
        );
    }

    #[test]
    fn arg_debug_shows_invalid_bytes() {
        use core::fmt::Write;

        let mut out = String::new();
        write!(out, "{:?}", Arg::new(b"ab\xffcd")).unwrap();
        assert_eq!(out, r#""ab"..[0xff].."cd""#);
    }

    #[test]
    fn arg_as_str_requires_utf8() {
        assert_eq!(Arg::new(b"report.txt").as_str(), Some("report.txt"));
        assert_eq!(Arg::new("\u{e9}t\u{e9}".as_bytes()).as_str(), Some("\u{e9}t\u{e9}"));
        assert_eq!(Arg::new(b"ab\xffcd").as_str(), None);
    }
}
