use core::{fmt, mem};

/**
A single, raw argument passed in from the command line.

Given `--output report.txt -v`, the tokenizer hands `report.txt` to its
visitor as an [`Arg`]; flags are handed over as [`str`], because anything that
matches the flag grammar is plain ASCII.

An [`Arg`] internally is just a byte slice, since that's what the OS gives us.
Callers can manually turn it into a [`str`] with [`as_str`][Arg::as_str] or
[`from_utf8`][core::str::from_utf8], and from there parse it however they need.
*/
#[derive(Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Arg([u8]);

impl Arg {
    pub const fn new(bytes: &[u8]) -> &Self {
        // SAFETY: Arg is repr transparent to a byte slice, so it's safe to
        // transmute into it.
        unsafe { mem::transmute(bytes) }
    }

    pub const fn bytes(&self) -> &[u8] {
        &self.0
    }

    /// Get the argument as a string, if it's valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.0).ok()
    }
}

/**
Debug-print an arg. This implementation does its best to treat the arg as a
string, but includes non-utf-8 bytes in their hex representation as needed.
 */
impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_bytes(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
            f.write_str("[")?;

            let mut bytes = bytes.iter().copied();

            if let Some(b) = bytes.next() {
                write!(f, "{b:#x}")?;
                bytes.try_for_each(|b| write!(f, ",{b:#x}"))?;
            }

            f.write_str("]")
        }

        self.0.utf8_chunks().enumerate().try_for_each(|(i, chunk)| {
            if i > 0 {
                write!(f, "..")?
            }

            match (chunk.valid(), chunk.invalid()) {
                (s, b"") => write!(f, "{s:?}"),
                ("", b) => write_bytes(f, b),
                (s, b) => {
                    write!(f, "{s:?}..")?;
                    write_bytes(f, b)
                }
            }
        })
    }
}
