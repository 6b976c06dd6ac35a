//! Line-oriented drawing scripts
//!
//! A script is a sequence of commands, one per line. Blank lines are
//! ignored and `#` starts a comment that runs to the end of the line.
//!
//! ```text
//! # two fused squares and a distant triangle
//! shape rectangle 0 0 9 9
//! shape rectangle 9 0 18 9
//! shape triangle-up 60 60 80 80
//! polyline open 0 40 10 45 20 40
//! fill 50 5
//! erase 70 75
//! reset
//! ```
//!
//! Shape names are those accepted by [`ShapeKind`]'s `FromStr`. Corner and
//! polyline coordinates may be fractional; `fill` and `erase` take integer
//! pixel coordinates.

use crate::engine;
use pixgroup_core::{Pixel, ShapeKind, Vertex};
use pixgroup_region::GroupingStore;
use thiserror::Error;

/// A single script command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Stamp a shape spanned by two corners
    Shape {
        kind: ShapeKind,
        a: Vertex,
        b: Vertex,
    },
    /// Draw a free-form polyline
    Polyline { closed: bool, vertices: Vec<Vertex> },
    /// Paint-bucket fill from a pixel
    Fill(Pixel),
    /// Erase the group under a pixel
    Erase(Pixel),
    /// Clear the canvas
    Reset,
}

/// Errors raised while parsing a script
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{name}'")]
    UnknownCommand { line: usize, name: String },

    #[error("line {line}: '{command}' expects {expected}, found {found} argument(s)")]
    WrongArity {
        line: usize,
        command: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: unknown shape '{name}'")]
    UnknownShape { line: usize, name: String },

    #[error("line {line}: polyline mode must be 'open' or 'closed', got '{value}'")]
    InvalidMode { line: usize, value: String },
}

/// Counts reported by [`run_commands`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands that completed
    pub applied: usize,
    /// Commands rejected by the engine (logged and skipped)
    pub failed: usize,
    /// Groups removed by `erase`
    pub erased: usize,
}

/// Parse a whole script.
///
/// # Errors
///
/// Stops at the first malformed line; the error carries its 1-based line
/// number.
pub fn parse_script(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let text = raw.split('#').next().unwrap_or("");
        let words: Vec<&str> = text.split_whitespace().collect();
        if let Some((&name, args)) = words.split_first() {
            commands.push(parse_command(idx + 1, name, args)?);
        }
    }
    Ok(commands)
}

fn parse_command(line: usize, name: &str, args: &[&str]) -> Result<Command, ScriptError> {
    match name {
        "shape" => {
            if args.len() != 5 {
                return Err(ScriptError::WrongArity {
                    line,
                    command: "shape",
                    expected: "a kind and four coordinates",
                    found: args.len(),
                });
            }
            let kind = args[0].parse::<ShapeKind>().map_err(|_| ScriptError::UnknownShape {
                line,
                name: args[0].to_string(),
            })?;
            let coords = parse_reals(line, &args[1..])?;
            Ok(Command::Shape {
                kind,
                a: Vertex::new(coords[0], coords[1]),
                b: Vertex::new(coords[2], coords[3]),
            })
        }
        "polyline" => {
            let Some((&mode, rest)) = args.split_first() else {
                return Err(ScriptError::WrongArity {
                    line,
                    command: "polyline",
                    expected: "a mode and coordinate pairs",
                    found: 0,
                });
            };
            let closed = match mode {
                "open" => false,
                "closed" => true,
                other => {
                    return Err(ScriptError::InvalidMode {
                        line,
                        value: other.to_string(),
                    });
                }
            };
            if rest.is_empty() || rest.len() % 2 != 0 {
                return Err(ScriptError::WrongArity {
                    line,
                    command: "polyline",
                    expected: "a mode and coordinate pairs",
                    found: args.len(),
                });
            }
            let vertices = parse_reals(line, rest)?
                .chunks_exact(2)
                .map(|c| Vertex::new(c[0], c[1]))
                .collect();
            Ok(Command::Polyline { closed, vertices })
        }
        "fill" => parse_pixel(line, "fill", args).map(Command::Fill),
        "erase" => parse_pixel(line, "erase", args).map(Command::Erase),
        "reset" => {
            if !args.is_empty() {
                return Err(ScriptError::WrongArity {
                    line,
                    command: "reset",
                    expected: "no arguments",
                    found: args.len(),
                });
            }
            Ok(Command::Reset)
        }
        other => Err(ScriptError::UnknownCommand {
            line,
            name: other.to_string(),
        }),
    }
}

fn parse_reals(line: usize, args: &[&str]) -> Result<Vec<f64>, ScriptError> {
    args.iter()
        .map(|s| {
            s.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ScriptError::InvalidNumber {
                    line,
                    value: s.to_string(),
                })
        })
        .collect()
}

fn parse_pixel(line: usize, command: &'static str, args: &[&str]) -> Result<Pixel, ScriptError> {
    if args.len() != 2 {
        return Err(ScriptError::WrongArity {
            line,
            command,
            expected: "two integer coordinates",
            found: args.len(),
        });
    }
    let mut coords = [0i32; 2];
    for (slot, s) in coords.iter_mut().zip(args) {
        *slot = s.parse().map_err(|_| ScriptError::InvalidNumber {
            line,
            value: s.to_string(),
        })?;
    }
    Ok(Pixel::new(coords[0], coords[1]))
}

/// Apply commands to a store in order.
///
/// Engine errors (such as an off-canvas seed) are logged and counted in
/// [`RunSummary::failed`]; the remaining commands still run.
pub fn run_commands(store: &mut GroupingStore, commands: &[Command]) -> RunSummary {
    let mut summary = RunSummary::default();
    for (i, command) in commands.iter().enumerate() {
        let result = match command {
            Command::Shape { kind, a, b } => engine::draw_shape(store, *kind, *a, *b).map(|_| ()),
            Command::Polyline { closed, vertices } => {
                engine::draw_polyline(store, vertices, *closed, false).map(|_| ())
            }
            Command::Fill(seed) => engine::flood_fill_at(store, *seed).map(|_| ()),
            Command::Erase(p) => engine::erase(store, *p).map(|id| {
                if id.is_some() {
                    summary.erased += 1;
                }
            }),
            Command::Reset => {
                store.reset();
                Ok(())
            }
        };
        match result {
            Ok(()) => summary.applied += 1,
            Err(e) => {
                log::warn!("command {} ({:?}) failed: {}", i + 1, command, e);
                summary.failed += 1;
            }
        }
    }
    log::info!(
        "ran {} command(s): {} applied, {} failed, {} group(s) live",
        commands.len(),
        summary.applied,
        summary.failed,
        store.group_count()
    );
    summary
}
