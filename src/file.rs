//! Loading bodies from a whitespace-separated table.
//!
//! The first line is a header and is skipped. Every other non-empty line
//! describes one body:
//!
//! ```text
//! name  mass(kg)  x(AU)  y(AU)  vx(m/s)  vy(m/s)  color  radius(px)  kind
//! Sun   1.98892e30  0  0  0  0  ffff00  10  fixed
//! Earth 5.9742e24   1  0  0  29783  0000ff  4  -
//! ```
//!
//! `kind` is `fixed` for the anchor and `-` for everything else. Lines starting
//! with `#` are ignored.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use nalgebra::{Point3, Vector2};

use crate::astro::AU;
use crate::model::error::ConstructionError;
use crate::model::orrery::{BodyInfo, Orrery};

#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Parse { line: usize, reason: String },
    DuplicateName { line: usize, name: String },
    Construction { line: usize, source: ConstructionError },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            LoadError::Parse { line, reason } => write!(f, "Line {}: {}", line, reason),
            LoadError::DuplicateName { line, name } => {
                write!(f, "Line {}: body {} is defined twice", line, name)
            }
            LoadError::Construction { line, source } => write!(f, "Line {}: {}", line, source),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Construction { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub fn read_file(filename: impl AsRef<Path>) -> Result<Orrery, LoadError> {
    let path = filename.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;

    let orrery = parse_bodies(&contents)?;
    log::info!("Loaded {} bodies from {}", orrery.len(), path.display());
    Ok(orrery)
}

pub fn parse_bodies(contents: &str) -> Result<Orrery, LoadError> {
    let mut orrery = Orrery::new();
    let mut names = HashSet::new();

    // Read lines, skipping header. Line numbers are 1-based.
    for (idx, line) in contents.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = Fields::new(line, line_no);

        let name = fields.next_string("name")?;
        let mass = fields.next_f64("mass")?;
        let position = Vector2::new(fields.next_f64("x")?, fields.next_f64("y")?) * AU;
        let velocity = Vector2::new(fields.next_f64("vx")?, fields.next_f64("vy")?);
        let color = parse_color(fields.next_string("color")?).ok_or_else(|| LoadError::Parse {
            line: line_no,
            reason: "color must be six hex digits".to_owned(),
        })?;
        let radius = fields.next_f64("radius")? as f32;
        let kind = fields.next_string("kind")?;
        fields.finish()?;

        if !names.insert(name.to_lowercase()) {
            return Err(LoadError::DuplicateName {
                line: line_no,
                name: name.to_owned(),
            });
        }

        let info = BodyInfo {
            name: name.to_owned(),
            radius,
            color,
        };

        let result = match kind {
            "fixed" => orrery.add_fixed_body(info, mass, position, velocity),
            "-" => orrery.add_body(info, mass, position, velocity),
            other => {
                return Err(LoadError::Parse {
                    line: line_no,
                    reason: format!("kind must be 'fixed' or '-', got '{}'", other),
                })
            }
        };
        result.map_err(|source| LoadError::Construction {
            line: line_no,
            source,
        })?;
    }

    Ok(orrery)
}

struct Fields<'a> {
    inner: std::str::SplitAsciiWhitespace<'a>,
    line: usize,
}

impl<'a> Fields<'a> {
    fn new(line: &'a str, line_no: usize) -> Self {
        Fields {
            inner: line.split_ascii_whitespace(),
            line: line_no,
        }
    }

    fn next_string(&mut self, what: &str) -> Result<&'a str, LoadError> {
        self.inner.next().ok_or_else(|| LoadError::Parse {
            line: self.line,
            reason: format!("missing {}", what),
        })
    }

    fn next_f64(&mut self, what: &str) -> Result<f64, LoadError> {
        let field = self.next_string(what)?;
        field.parse::<f64>().map_err(|_| LoadError::Parse {
            line: self.line,
            reason: format!("{} is not a number: '{}'", what, field),
        })
    }

    fn finish(mut self) -> Result<(), LoadError> {
        match self.inner.next() {
            None => Ok(()),
            Some(extra) => Err(LoadError::Parse {
                line: self.line,
                reason: format!("unexpected trailing field '{}'", extra),
            }),
        }
    }
}

pub fn parse_color(s: &str) -> Option<Point3<f32>> {
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;

    Some(Point3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0))
}
