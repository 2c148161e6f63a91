//! CLI dispatch for the `pxpaint draw` command.
//!
//! Parses `coords=color` operation flags, applies them to a saved canvas and
//! writes the result back as JSON (or PNG when the output says so).

use std::path::Path;
use std::process::ExitCode;

use tracing::info;

use crate::canvas::Canvas;
use crate::color::ColorInput;
use crate::draw::DrawOp;
use crate::output::{self, SaveFormat};

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Raw operation flags, as given on the command line.
#[derive(Debug, Default)]
pub struct DrawSpecs {
    pub clear: Option<String>,
    pub fill: Vec<String>,
    pub rect: Vec<String>,
    pub line: Vec<String>,
    pub set: Vec<String>,
    pub flood: Vec<String>,
}

/// Split `1,2,3=color` into its numbers and color, checking the arity.
fn parse_spec<'a>(flag: &str, spec: &'a str, arity: usize) -> Result<(Vec<i64>, &'a str), String> {
    let (coords, color) = spec
        .split_once('=')
        .ok_or_else(|| format!("--{} '{}': expected coordinates=color", flag, spec))?;
    let color = color.trim();
    if color.is_empty() {
        return Err(format!("--{} '{}': missing color", flag, spec));
    }

    let numbers = coords
        .split(',')
        .map(|n| n.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("--{} '{}': {}", flag, spec, e))?;
    if numbers.len() != arity {
        return Err(format!(
            "--{} '{}': expected {} numbers, got {}",
            flag,
            spec,
            arity,
            numbers.len()
        ));
    }
    Ok((numbers, color))
}

/// Turn the flags into drawing operations, in application order.
pub fn parse_ops(specs: &DrawSpecs) -> Result<Vec<DrawOp>, String> {
    let mut ops = Vec::new();

    if let Some(color) = &specs.clear {
        ops.push(DrawOp::Clear { color: ColorInput::from(color.as_str()) });
    }
    for (flag, list, filled) in [("fill", &specs.fill, true), ("rect", &specs.rect, false)] {
        for spec in list {
            let (n, color) = parse_spec(flag, spec, 4)?;
            ops.push(DrawOp::Rect {
                x: n[0],
                y: n[1],
                width: n[2],
                height: n[3],
                color: color.into(),
                filled,
            });
        }
    }
    for spec in &specs.line {
        let (n, color) = parse_spec("line", spec, 4)?;
        ops.push(DrawOp::Line { x1: n[0], y1: n[1], x2: n[2], y2: n[3], color: color.into() });
    }
    for spec in &specs.set {
        let (n, color) = parse_spec("set", spec, 2)?;
        ops.push(DrawOp::Set { x: n[0], y: n[1], color: color.into() });
    }
    for spec in &specs.flood {
        let (n, color) = parse_spec("flood", spec, 2)?;
        ops.push(DrawOp::Flood { x: n[0], y: n[1], color: color.into() });
    }

    Ok(ops)
}

/// Apply every operation, stopping at the first failure.
pub fn apply_all(canvas: &mut Canvas, ops: &[DrawOp]) -> crate::error::Result<usize> {
    let mut touched = 0;
    for op in ops {
        touched += canvas.apply(op)?;
    }
    Ok(touched)
}

/// Execute the draw command.
pub fn run_draw(input: &Path, specs: &DrawSpecs, output: Option<&Path>) -> ExitCode {
    let ops = match parse_ops(specs) {
        Ok(ops) if ops.is_empty() => {
            eprintln!("Error: no drawing operations given (try --set, --line, --rect)");
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        Ok(ops) => ops,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let mut canvas = match output::load_json(input) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let touched = match apply_all(&mut canvas, &ops) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    info!(ops = ops.len(), touched, "applied drawing operations");

    let target = output.unwrap_or(input);
    let format = SaveFormat::from_path(target).unwrap_or(SaveFormat::Json);
    if let Err(e) = output::save(&canvas, target, format) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    eprintln!("Wrote: {}", target.display());
    ExitCode::from(EXIT_SUCCESS)
}
