//! PNG preview of a glyph using tiny-skia.
//!
//! The glyph base sits at the centre of a transparent square pixmap. The
//! shaft points toward where the wind blows from: 0° is north (up) and
//! angles increase clockwise.

use crate::config::RasterConfig;
use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, Path as SkPath, PathBuilder, Pixmap, Stroke,
    Transform,
};
use tracing::debug;
use windbarbs::{Glyph, SubPath};

/// Draw `glyph` rotated to `direction_deg`.
pub fn render_glyph(glyph: &Glyph, direction_deg: f32, config: &RasterConfig) -> Result<Pixmap> {
    config.validate().map_err(|e| anyhow!(e))?;
    let [r, g, b, a] = config.rgba().map_err(|e| anyhow!(e))?;

    let mut pixmap = Pixmap::new(config.size, config.size)
        .ok_or_else(|| anyhow!("Failed to create {0}x{0} pixmap", config.size))?;
    pixmap.fill(Color::TRANSPARENT);

    let center = config.size as f32 / 2.0;
    // glyph y grows upward, pixmap y grows downward
    let transform = Transform::from_scale(config.scale, -config.scale)
        .post_rotate(direction_deg)
        .post_translate(center, center);

    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;

    let stroke = Stroke {
        // stroke width is scaled along with the path
        width: config.stroke_width / config.scale,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };

    for subpath in glyph.paths() {
        let Some(path) = build_path(subpath) else {
            continue;
        };
        if subpath.closed {
            pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
        }
        pixmap.stroke_path(&path, &paint, &stroke, transform, None);
    }

    debug!(
        kind = ?glyph.kind(),
        direction = direction_deg,
        size = config.size,
        "Rendered glyph preview"
    );
    Ok(pixmap)
}

/// Render and write a PNG file.
pub fn write_png(
    glyph: &Glyph,
    direction_deg: f32,
    config: &RasterConfig,
    output: &Path,
) -> Result<()> {
    let pixmap = render_glyph(glyph, direction_deg, config)?;
    let png = pixmap
        .encode_png()
        .context("Failed to encode glyph preview as PNG")?;
    std::fs::write(output, png)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}

fn build_path(subpath: &SubPath) -> Option<SkPath> {
    let (first, rest) = subpath.points.split_first()?;

    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for point in rest {
        pb.line_to(point.x as f32, point.y as f32);
    }
    if subpath.closed {
        pb.close();
    }
    pb.finish()
}
