/*!
Read-time conversions from the raw strings collected for a [`CmdArg`] into
typed values.

None of these conversions touch the descriptor's state, and none of them fail
loudly: a value that can't be converted is simply [`None`]. Use
[`is_observed`][CmdArg::is_observed] to tell an absent argument apart from one
that was given an unusable value.
 */

use std::panic::{self, AssertUnwindSafe};

use crate::descriptor::CmdArg;

/// Integer types that can be parsed in an arbitrary radix
pub trait FromRadix: Sized {
    fn from_radix(src: &str, radix: u32) -> Option<Self>;
}

macro_rules! from_radix {
    ($($type:ident)*) => {
        $(
            impl FromRadix for $type {
                #[inline]
                fn from_radix(src: &str, radix: u32) -> Option<Self> {
                    $type::from_str_radix(src, radix).ok()
                }
            }
        )*
    };
}

from_radix! {
    u8 u16 u32 u64 u128 usize
    i8 i16 i32 i64 i128 isize
}

/// Floating point types
pub trait Float: Sized {
    fn from_decimal(src: &str) -> Option<Self>;
}

macro_rules! float {
    ($($type:ident)*) => {
        $(
            impl Float for $type {
                #[inline]
                fn from_decimal(src: &str) -> Option<Self> {
                    src.parse().ok()
                }
            }
        )*
    };
}

float! { f32 f64 }

/**
Types that can be built from all of the values collected for an argument.
Implement this on your own types to use them with [`CmdArg::get`].

```
use cmdarg::{Action, ArgSpec, FromValues, Parser};

#[derive(Debug, PartialEq)]
struct Point {
    x: i64,
    y: i64,
}

impl FromValues for Point {
    fn from_values(values: &[String]) -> Option<Self> {
        match values {
            [x, y, ..] => Some(Point {
                x: x.parse().ok()?,
                y: y.parse().ok()?,
            }),
            _ => None,
        }
    }
}

let mut parser = Parser::new([
    ArgSpec::new("point").action(Action::StoreMany).build(),
]);

parser.try_parse(["prog", "--point", "3", "-4"]).unwrap();
assert_eq!(parser.get("point").get::<Point>(), Some(Point { x: 3, y: -4 }));
```
*/
pub trait FromValues: Sized {
    fn from_values(values: &[String]) -> Option<Self>;
}

impl CmdArg {
    /// The first raw value, if there is one
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.values().first().map(String::as_str)
    }

    /// The first value as a base-10 integer
    #[inline]
    #[must_use]
    pub fn as_int<T: FromRadix>(&self) -> Option<T> {
        self.as_int_radix(10)
    }

    /// The first value as an integer in the given radix. Radixes outside of
    /// `2..=36` never produce a value.
    #[must_use]
    pub fn as_int_radix<T: FromRadix>(&self, radix: u32) -> Option<T> {
        if !(2..=36).contains(&radix) {
            return None;
        }

        T::from_radix(self.as_str()?, radix)
    }

    /// The first value as a floating point number
    #[inline]
    #[must_use]
    pub fn as_float<T: Float>(&self) -> Option<T> {
        T::from_decimal(self.as_str()?)
    }

    /// The first value as a boolean: `true` or `false`, in any case
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        let value = self.as_str()?;

        if value.eq_ignore_ascii_case("true") {
            Some(true)
        } else if value.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    /**
    Convert all of the values with a caller-supplied function. A panic inside
    `convert` is caught and treated the same as the function returning
    [`None`].

    Catching the panic doesn't bypass the process's panic hook, so the
    default hook still prints the panic message to stderr. Programs that
    want converter panics to stay silent can install their own hook with
    [`std::panic::set_hook`].
    */
    pub fn convert_with<T>(&self, convert: impl FnOnce(&[String]) -> Option<T>) -> Option<T> {
        let values = self.values();

        match panic::catch_unwind(AssertUnwindSafe(|| convert(values))) {
            Ok(value) => value,
            Err(_) => {
                log::debug!("converter for {:?} panicked", self.identifier());
                None
            }
        }
    }

    /// Convert all of the values into a type that implements [`FromValues`]
    #[inline]
    pub fn get<T: FromValues>(&self) -> Option<T> {
        self.convert_with(T::from_values)
    }
}
