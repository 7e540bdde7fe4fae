// src/artifact.rs
//
// Template splicing and artifact commits. Each artifact is produced by
// substituting a marker line inside a pre-existing template file; writes go
// through a temp-file-and-rename commit so a crashed run never leaves a
// half-substituted template on disk.

use crate::errors::CompileError;
use anyhow::Context;
use log::info;
use std::fs;
use std::path::Path;

/// Marker replaced by generated declarations inside template files.
pub const GENERATE_MARKER: &str = "// $GENERATE_HERE$";

/// Replaces the marker with the generated text. The marker's leading
/// whitespace is applied to every generated line, so the output stays
/// aligned with the surrounding template.
pub fn splice(template: &str, generated: &str) -> Option<String> {
    let marker_line = template
        .lines()
        .find(|line| line.trim_end().ends_with(GENERATE_MARKER))?;
    let indent: String = marker_line
        .chars()
        .take_while(|c| c.is_whitespace())
        .collect();
    let indented = generated
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    Some(template.replacen(marker_line, &indented, 1))
}

/// Splices `generated` into the template at `path` and commits the result
/// in place. The rename is the commit point.
pub fn write_spliced(path: &Path, generated: &str) -> anyhow::Result<()> {
    let template = fs::read_to_string(path)
        .with_context(|| format!("reading template {}", path.display()))?;
    let spliced = splice(&template, generated).ok_or_else(|| CompileError::MissingMarker {
        path: path.display().to_string(),
        marker: GENERATE_MARKER,
    })?;

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, spliced).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("committing {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}
