//! Subcommand implementations.
//!
//! Each command writes its results to the given writer so stdout stays
//! free of log output and tests can capture what would be printed.

use crate::config::RasterConfig;
use crate::output::{bucket_label, decomposition_label, format_resolved, OutputFormat};
use crate::raster;
use anyhow::{anyhow, bail, Result};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};
use windbarbs::{Feature, SymbolExpression, WindBarbFactory};

/// Marker printed for a locator that resolves to no shape.
pub const NO_SHAPE: &str = "NO SHAPE";

/// Resolve every locator, one output line each.
///
/// Returns the number of locators that resolved. Fails only when none did.
pub fn resolve(
    factory: &WindBarbFactory<'_>,
    locators: &[String],
    feature: &Feature,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<usize> {
    let mut resolved_count = 0;

    for locator in locators {
        let result = SymbolExpression::parse(locator)
            .and_then(|symbol| factory.resolve(Some(&symbol), Some(feature)));

        match result {
            Ok(resolved) => {
                writeln!(out, "{}", format_resolved(&resolved, format)?)?;
                resolved_count += 1;
            }
            Err(e) => {
                writeln!(out, "{}", NO_SHAPE)?;
                warn!(locator = %locator, error = %e, "Locator resolved to no shape");
            }
        }
    }

    info!(
        total = locators.len(),
        resolved = resolved_count,
        "Resolved locators"
    );
    if resolved_count == 0 && !locators.is_empty() {
        bail!("None of the {} locators resolved to a shape", locators.len());
    }
    Ok(resolved_count)
}

/// List every cached glyph of a symbol set.
pub fn table(factory: &WindBarbFactory<'_>, symbol_set: &str, out: &mut impl Write) -> Result<()> {
    let set = factory.registry().get(symbol_set)?;
    for (bucket, glyph) in set.cache().entries() {
        writeln!(
            out,
            "{:<8}\t{:<9}\t{}",
            bucket_label(bucket),
            decomposition_label(bucket),
            glyph.to_wkt()
        )?;
    }
    Ok(())
}

/// Rasterize one locator to a PNG file.
pub fn render(
    factory: &WindBarbFactory<'_>,
    locator: &str,
    direction_deg: f32,
    config: &RasterConfig,
    output: &Path,
) -> Result<()> {
    let resolved = factory
        .resolve_locator(locator)
        .map_err(|e| anyhow!("{}: {}", locator, e))?;

    if !direction_deg.is_finite() {
        warn!(direction = direction_deg, "Non-finite direction, drawing unrotated");
    }
    let direction = if direction_deg.is_finite() {
        direction_deg
    } else {
        0.0
    };

    raster::write_png(&resolved.glyph, direction, config, output)?;
    info!(
        locator,
        bucket = ?resolved.bucket,
        output = %output.display(),
        "Wrote glyph preview"
    );
    Ok(())
}

/// Parse a `key=value` feature attribute.
pub fn parse_attr(text: &str) -> Result<(String, String), String> {
    match text.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{}'", text)),
    }
}
