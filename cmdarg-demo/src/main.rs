mod error;

use cmdarg::{Action, ArgSpec, CmdArg, FromValues, Parser, ProgramInfo};
use lazy_format::lazy_format;

use crate::error::DemoError;

#[derive(Debug, Clone, Copy)]
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

/// The grid position of the `index`th label, starting from `origin`
fn position(origin: Point, index: i64, step: i64) -> Result<Point, DemoError> {
    let offset = index.checked_mul(step).ok_or(DemoError::OutOfRange { index })?;

    Ok(Point {
        x: origin.x.checked_add(offset).ok_or(DemoError::OutOfRange { index })?,
        y: origin.y.checked_add(offset).ok_or(DemoError::OutOfRange { index })?,
    })
}

fn declarations() -> Vec<CmdArg> {
    let mut args = vec![
        ArgSpec::new("input")
            .abbreviation("i")
            .help("one or more labels to place on the grid")
            .required(true)
            .action(Action::StoreMany)
            .build(),
        ArgSpec::new("origin")
            .abbreviation("o")
            .help("the x and y coordinates of the first label")
            .action(Action::StoreMany)
            .build(),
        ArgSpec::new("step")
            .abbreviation("s")
            .help("distance between labels, in hex")
            .action(Action::StoreSingle)
            .build(),
        ArgSpec::new("scale")
            .help("multiplier applied to every coordinate")
            .action(Action::StoreSingle)
            .build(),
        ArgSpec::new("verbose")
            .abbreviation("v")
            .help("repeat for more detail")
            .action(Action::Count)
            .build(),
        ArgSpec::new("no-color")
            .name("no-color")
            .abbreviation("C")
            .help("disable colored output")
            .action(Action::SetFalse)
            .build(),
    ];

    if cfg!(debug_assertions) {
        args.push(
            ArgSpec::new("dump")
                .help("print the parsed state of every argument")
                .build(),
        );
    }

    args
}

#[cfg(debug_assertions)]
fn dump(parser: &Parser) -> anyhow::Result<()> {
    use anyhow::Context as _;

    if parser.get("dump").is_observed() {
        parser.dump().context("failed to write argument dump")?;
    }

    Ok(())
}

#[cfg(not(debug_assertions))]
fn dump(_parser: &Parser) -> anyhow::Result<()> {
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut parser = Parser::with_info(
        ProgramInfo {
            program_name: Some(env!("CARGO_PKG_NAME").to_owned()),
            version: Some(env!("CARGO_PKG_VERSION").to_owned()),
            license: Some("MPL-2.0".to_owned()),
            description: Some("Lays labels out along a diagonal.".to_owned()),
            ..ProgramInfo::default()
        },
        declarations(),
    );

    parser.parse_env();

    dump(&parser)?;

    let origin = match parser.get("origin") {
        arg if arg.is_observed() => arg.get::<Point>().ok_or(DemoError::BadOrigin)?,
        _ => Point { x: 0, y: 0 },
    };

    let step: i64 = match parser.get("step") {
        arg if arg.is_observed() => arg.as_int_radix(16).ok_or_else(|| DemoError::NotANumber {
            field: "step",
            value: arg.as_str().unwrap_or_default().to_owned(),
        })?,
        _ => 1,
    };

    let scale: f64 = match parser.get("scale") {
        arg if arg.is_observed() => arg.as_float().ok_or_else(|| DemoError::NotANumber {
            field: "scale",
            value: arg.as_str().unwrap_or_default().to_owned(),
        })?,
        _ => 1.0,
    };

    if scale <= 0.0 {
        return Err(DemoError::NonPositiveScale(scale).into());
    }

    let verbosity = parser.get("verbose").count();
    let color = parser.get("no-color").as_bool().unwrap_or(true);
    log::info!("origin {origin:?}, step {step}, scale {scale}, color {color}");

    for (i, label) in (0i64..).zip(parser.get("input").values()) {
        let Point { x, y } = position(origin, i, step)?;
        let (x, y) = (x as f64 * scale, y as f64 * scale);

        let place = lazy_format!(match (color) {
            true => "\x1b[1m({x}, {y})\x1b[0m",
            false => "({x}, {y})",
        });

        match verbosity {
            0 => println!("{label}"),
            _ => println!("{label} at {place}"),
        }
    }

    Ok(())
}
