use std::io;

use lazy_format::lazy_format;

/// Column width the banner description is wrapped to
const BANNER_WIDTH: usize = 80;

/**
Information about the program itself, shown at the top of the help text:

```text
frobnicate 1.2.0 by Jane Doe, MIT license
Frobnicates files in place.

```

Every field is optional; absent fields are left out of the banner.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramInfo {
    pub program_name: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
    pub description: Option<String>,
}

impl ProgramInfo {
    /// Write the banner to stdout
    pub fn render(&self) -> io::Result<()> {
        self.write_banner(&mut io::stdout().lock())
    }

    pub fn write_banner(&self, out: &mut impl io::Write) -> io::Result<()> {
        let name = lazy_format!(match (&self.program_name) {
            Some(name) => "{name} ",
            None => "",
        });

        let version = lazy_format!(match (&self.version) {
            Some(version) => "{version} ",
            None => "",
        });

        let author = lazy_format!(match (&self.author) {
            Some(author) => "by {author}",
            None => "",
        });

        let license = lazy_format!(match ((&self.author, &self.license)) {
            (Some(_), Some(license)) => ", {license} license",
            (None, Some(license)) => "{license} license",
            (_, None) => "",
        });

        let headline = format!("{name}{version}{author}{license}");
        let headline = headline.trim();

        if !headline.is_empty() {
            writeln!(out, "{headline}")?;
        }

        if let Some(description) = &self.description {
            for line in textwrap::wrap(description, BANNER_WIDTH) {
                writeln!(out, "{line}")?;
            }

            writeln!(out)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner(info: &ProgramInfo) -> String {
        let mut out = Vec::new();
        info.write_banner(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_banner() {
        let info = ProgramInfo {
            program_name: Some("frobnicate".to_owned()),
            version: Some("1.2.0".to_owned()),
            author: Some("Jane Doe".to_owned()),
            license: Some("MIT".to_owned()),
            description: Some("Frobnicates files in place.".to_owned()),
        };

        assert_eq!(
            banner(&info),
            "frobnicate 1.2.0 by Jane Doe, MIT license\nFrobnicates files in place.\n\n"
        );
    }

    #[test]
    fn partial_banner() {
        let info = ProgramInfo {
            program_name: Some("frobnicate".to_owned()),
            version: Some("1.2.0".to_owned()),
            ..ProgramInfo::default()
        };

        assert_eq!(banner(&info), "frobnicate 1.2.0\n");
    }

    #[test]
    fn license_without_author() {
        let info = ProgramInfo {
            program_name: Some("frob".to_owned()),
            version: Some("1.0".to_owned()),
            license: Some("MIT".to_owned()),
            ..ProgramInfo::default()
        };

        assert_eq!(banner(&info), "frob 1.0 MIT license\n");

        let info = ProgramInfo {
            license: Some("MIT".to_owned()),
            ..ProgramInfo::default()
        };

        assert_eq!(banner(&info), "MIT license\n");
    }

    #[test]
    fn empty_banner() {
        assert_eq!(banner(&ProgramInfo::default()), "");
    }

    #[test]
    fn long_descriptions_wrap() {
        let info = ProgramInfo {
            description: Some("word ".repeat(40)),
            ..ProgramInfo::default()
        };

        let text = banner(&info);
        assert!(text.lines().all(|line| line.len() <= BANNER_WIDTH));
        assert!(text.lines().count() > 2);
    }
}
