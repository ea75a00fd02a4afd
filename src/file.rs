use std::fs;
use std::path::Path;

use nalgebra::Point3;
use tracing::debug;

use crate::consts;
use crate::error::{ConfigError, LoadError};
use crate::model::orrery::{BodyInfo, Orrery};

/// Reads a body file. The format is one body per line, after a header line:
///
/// ```text
/// name     radius  period  color
/// Sun      -       -       ffff00
/// Earth    1.000   365     2ca02c
/// ```
///
/// A `-` radius and period marks the central body; if there isn't one, it's
/// the Sun. Blank lines and anything after a `#` are ignored.
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<Orrery, LoadError> {
    let contents = fs::read_to_string(filename.as_ref())?;
    let orrery = parse_bodies(&contents)?;
    debug!(
        "Loaded {} bodies from {}",
        orrery.len(),
        filename.as_ref().display()
    );
    Ok(orrery)
}

pub fn parse_bodies(contents: &str) -> Result<Orrery, LoadError> {
    let mut central = None;
    let mut orbiting = vec![];

    // Read lines, skipping header. Line numbers are 1-based.
    for (idx, line) in contents.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let line = match line.find('#') {
            Some(i) => &line[..i],
            None => line,
        };
        let mut fields = line.split_ascii_whitespace();

        let name = match fields.next() {
            Some(name) => name,
            None => continue,
        };

        let parse_error = |message: String| LoadError::Parse {
            line: line_no,
            message,
        };

        macro_rules! next_string {
            ($what:expr) => {
                fields
                    .next()
                    .ok_or_else(|| parse_error(format!("missing {} for '{}'", $what, name)))?
            };
        }

        let radius = next_string!("radius");
        let period = next_string!("period");
        let color = parse_color(next_string!("color")).map_err(parse_error)?;
        if let Some(extra) = fields.next() {
            return Err(parse_error(format!("unexpected field '{}'", extra)));
        }

        let info = BodyInfo::new(name, color);
        if radius == "-" && period == "-" {
            if central.is_some() {
                return Err(LoadError::Config {
                    line: line_no,
                    source: ConfigError::DuplicateCentralBody,
                });
            }
            central = Some(info);
        } else {
            let radius = parse_f64(radius, "radius").map_err(parse_error)?;
            let period = parse_f64(period, "period").map_err(parse_error)?;
            orbiting.push((line_no, info, radius, period));
        }
    }

    let mut orrery = Orrery::new(central.unwrap_or_else(consts::sun));
    for (line, info, radius, period) in orbiting {
        orrery
            .add_body(info, radius, period)
            .map_err(|source| LoadError::Config { line, source })?;
    }
    Ok(orrery)
}

fn parse_f64(s: &str, what: &str) -> Result<f64, String> {
    s.parse::<f64>()
        .map_err(|_| format!("{} '{}' is not a number", what, s))
}

fn parse_color(s: &str) -> Result<Point3<f32>, String> {
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("color '{}' should have six hex digits", s));
    }
    let hex = u32::from_str_radix(s, 16).map_err(|_| format!("color '{}' is not hex", s))?;
    Ok(consts::rgb(hex))
}
