//! draw.io (mxGraph) XML writer.
//!
//! Serializes a [`DiagramDoc`] into an `mxfile` document that draw.io and
//! app.diagrams.net open directly. Every interpolated attribute goes through
//! [`escape_xml`], so account names pulled from model output cannot break the
//! document or smuggle markup into it.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::architecture::model::Architecture;
use crate::diagram::layout::layout_architecture;
use crate::diagram::model::{Cell, DiagramDoc};

/// Render an architecture as a complete draw.io file.
///
/// `modified` is stamped into the `mxfile` header; callers pass the current
/// time so the writer itself stays deterministic.
pub fn to_drawio_xml(architecture: &Architecture, modified: DateTime<Utc>) -> String {
    write_document(&layout_architecture(architecture), modified)
}

/// Serialize an already laid-out document.
fn write_document(doc: &DiagramDoc, modified: DateTime<Utc>) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.push('\n');
    let _ = writeln!(
        out,
        r#"<mxfile host="app.diagrams.net" modified="{}" agent="lzdw" version="21.0.0" type="device">"#,
        escape_xml(&modified.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
    );
    let _ = writeln!(
        out,
        r#"  <diagram name="{}" id="landing-zone">"#,
        escape_xml(&doc.name),
    );
    let _ = writeln!(
        out,
        r##"    <mxGraphModel dx="1422" dy="762" grid="1" gridSize="10" guides="1" tooltips="1" connect="1" arrows="1" fold="1" page="1" pageScale="1" pageWidth="{}" pageHeight="{}" math="0" shadow="0" background="#FFFFFF">"##,
        doc.page_width, doc.page_height,
    );
    out.push_str("      <root>\n");
    out.push_str("        <mxCell id=\"0\" />\n");
    out.push_str("        <mxCell id=\"1\" parent=\"0\" />\n");
    for cell in &doc.cells {
        write_cell(&mut out, cell);
    }
    out.push_str("      </root>\n");
    out.push_str("    </mxGraphModel>\n");
    out.push_str("  </diagram>\n");
    out.push_str("</mxfile>\n");
    out
}

fn write_cell(out: &mut String, cell: &Cell) {
    match cell {
        Cell::Vertex {
            id,
            value,
            style,
            geometry,
        } => {
            let _ = writeln!(
                out,
                r#"        <mxCell id="{}" value="{}" style="{}" vertex="1" parent="1">"#,
                escape_xml(id),
                escape_xml(value),
                escape_xml(style),
            );
            let _ = writeln!(
                out,
                r#"          <mxGeometry x="{}" y="{}" width="{}" height="{}" as="geometry" />"#,
                geometry.x, geometry.y, geometry.width, geometry.height,
            );
            out.push_str("        </mxCell>\n");
        }
        Cell::Edge {
            id,
            style,
            source,
            target,
            waypoints,
        } => {
            let _ = writeln!(
                out,
                r#"        <mxCell id="{}" value="" style="{}" edge="1" parent="1">"#,
                escape_xml(id),
                escape_xml(style),
            );
            out.push_str("          <mxGeometry relative=\"1\" as=\"geometry\">\n");
            let _ = writeln!(
                out,
                r#"            <mxPoint x="{}" y="{}" as="sourcePoint" />"#,
                source.0, source.1,
            );
            let _ = writeln!(
                out,
                r#"            <mxPoint x="{}" y="{}" as="targetPoint" />"#,
                target.0, target.1,
            );
            if !waypoints.is_empty() {
                out.push_str("            <Array as=\"points\">\n");
                for (x, y) in waypoints {
                    let _ = writeln!(out, r#"              <mxPoint x="{x}" y="{y}" />"#);
                }
                out.push_str("            </Array>\n");
            }
            out.push_str("          </mxGeometry>\n");
            out.push_str("        </mxCell>\n");
        }
    }
}

/// Escape a string for use inside an XML attribute value.
fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
