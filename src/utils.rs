use std::fs;
use std::io::{BufRead, BufReader};

use anyhow::{Context, Result};

/// Reads one class weight per line, in class-id order. Blank lines are
/// skipped.
pub fn class_weights_from_file(filename: &str) -> Result<Vec<f32>> {
    let file_in = fs::File::open(filename)
        .with_context(|| format!("cannot open class weight file {filename}"))?;
    let file_reader = BufReader::new(file_in);

    let mut weights = Vec::new();
    for line in file_reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let weight = line
            .parse::<f32>()
            .with_context(|| format!("invalid class weight \"{line}\" in {filename}"))?;
        weights.push(weight);
    }
    Ok(weights)
}
