//! # SVG export
//!
//! One-way conversion of a [`Snapshot`] into a standalone SVG 1.1 document. Each drawable
//! segment becomes one `<line>`, in the same order the renderer draws them.

use std::fmt::Write;

use crate::state::Snapshot;
use crate::stroke::Segment;

const PROLOGUE: &str = concat!(
    r#"<?xml version="1.0" standalone="no"?>"#,
    r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "#,
    r#""http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd"> "#,
);

/// Produce a complete SVG document for the snapshot.
#[must_use]
pub fn export(snapshot: &Snapshot) -> String {
    // Rough guess, lines are ~150 bytes each.
    let mut out = String::with_capacity(256 + snapshot.points().len() * 150);
    // Writing into a `String` cannot fail.
    let _ = write_document(&mut out, snapshot);
    log::debug!(
        "exported {}x{} document, {} bytes",
        snapshot.width(),
        snapshot.height(),
        out.len()
    );
    out
}

fn write_document(out: &mut impl Write, snapshot: &Snapshot) -> std::fmt::Result {
    let [width, height] = snapshot.dimensions();
    out.write_str(PROLOGUE)?;
    writeln!(
        out,
        r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg" version="1.1">"#
    )?;
    for segment in snapshot.segments() {
        write_line(out, &segment)?;
    }
    writeln!(out, "</svg>")
}

fn write_line(out: &mut impl Write, segment: &Segment) -> std::fmt::Result {
    let [x1, y1] = segment.from;
    let [x2, y2] = segment.to;
    write!(
        out,
        r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke-width="{}" stroke="{}""#,
        segment.width,
        segment.color.svg_rgb(),
    )?;
    if !segment.color.is_opaque() {
        write!(out, r#" stroke-opacity="{}""#, segment.color.opacity())?;
    }
    writeln!(out, r#" stroke-linecap="round" stroke-linejoin="round" />"#)
}
