//! SVG emission for QR symbols.
//!
//! # Responsibilities
//! - Encode text into a module matrix (via the `qrcode` crate)
//! - Emit one `<rect>` per dark module, scaled to the requested size
//! - Order rects by the text-seeded permutation for animation
//!
//! # Design Decisions
//! - Pure function: no caching, no I/O
//! - Encoding failure returns an empty-but-valid SVG and logs a warning

use std::fmt::Write as _;

use qrcode::{Color, QrCode};

use crate::qr::shuffle::{seed_from_text, shuffle};

/// Render `text` as an animated-order SVG of `size` × `size` logical pixels.
///
/// Rects carry a `data-i` index in emission order so the presentation layer
/// can stagger their appearance. The order is deterministic per text.
pub fn render_svg(text: &str, size: u32) -> String {
    let code = match QrCode::new(text.as_bytes()) {
        Ok(code) => code,
        Err(e) => {
            tracing::warn!(error = %e, "QR encoding failed, emitting empty SVG");
            return empty_svg(size);
        }
    };

    let width = code.width();
    let module = size as f64 / width as f64;
    let colors = code.to_colors();

    let mut cells: Vec<(f64, f64)> = Vec::new();
    for row in 0..width {
        for col in 0..width {
            if colors[row * width + col] == Color::Dark {
                cells.push((col as f64 * module, row as f64 * module));
            }
        }
    }

    shuffle(&mut cells, seed_from_text(text));

    let mut svg = svg_open(size);
    for (i, (x, y)) in cells.iter().enumerate() {
        // Infallible: writing to a String cannot fail.
        let _ = write!(
            svg,
            r#"<rect x="{x}" y="{y}" width="{module}" height="{module}" data-i="{i}" fill="currentColor"/>"#
        );
    }
    svg.push_str("</svg>");
    svg
}

fn svg_open(size: u32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}" style="overflow:visible">"#
    )
}

/// Valid markup with no drawable content, used when encoding fails.
pub fn empty_svg(size: u32) -> String {
    let mut svg = svg_open(size);
    svg.push_str("</svg>");
    svg
}
