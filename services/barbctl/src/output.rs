//! Text output for resolved glyphs.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use windbarbs::{Bucket, Glyph, ResolvedSymbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `MULTILINESTRING` well-known text
    Wkt,
    /// SVG path data
    Svg,
    /// JSON document with classification and geometry
    Json,
}

#[derive(Serialize)]
struct ResolvedOutput<'a> {
    locator: String,
    /// Non-finite speeds serialize as `null`.
    knots: f64,
    bucket: Bucket,
    mirrored: bool,
    glyph: &'a Glyph,
}

/// Render a resolved symbol in the requested format.
pub fn format_resolved(resolved: &ResolvedSymbol<'_>, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Wkt => resolved.glyph.to_wkt(),
        OutputFormat::Svg => resolved.glyph.to_svg_path(),
        OutputFormat::Json => serde_json::to_string(&ResolvedOutput {
            locator: resolved.locator.to_string(),
            knots: resolved.knots,
            bucket: resolved.bucket,
            mirrored: resolved.hemisphere.is_south(),
            glyph: &resolved.glyph,
        })?,
    })
}

/// Short label for a cache bucket.
pub fn bucket_label(bucket: Bucket) -> String {
    match bucket {
        Bucket::Calm => "calm".to_string(),
        Bucket::NoData => "no-data".to_string(),
        Bucket::Family(knots) => format!("{} kts", knots),
        Bucket::Invalid => "invalid".to_string(),
    }
}

/// Pennant/long/short counts for a bucket, `-` for sentinels.
pub fn decomposition_label(bucket: Bucket) -> String {
    match bucket.decompose() {
        Some(d) => format!("P{} L{} S{}", d.pennants, d.long_barbs, d.short_barbs),
        None => "-".to_string(),
    }
}
