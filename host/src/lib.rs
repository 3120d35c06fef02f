pub mod cli;

use bounce_core::{compute_params_hash, FixedParams, ParamsOverride, Preset, SimParams};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest config file accepted (64 KiB)
pub const MAX_CONFIG_SIZE: u64 = 64 * 1024;

/// Values computed from the primary parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Derived {
    pub ball_rad: f32,
    pub max_x: f32,
    pub max_y: f32,
    pub tile_width: f32,
    pub tile_height: f32,
}

impl From<&SimParams> for Derived {
    fn from(p: &SimParams) -> Self {
        Self {
            ball_rad: p.ball_rad(),
            max_x: p.max_x(),
            max_y: p.max_y(),
            tile_width: p.tile_width(),
            tile_height: p.tile_height(),
        }
    }
}

/// Everything known about one resolved parameter set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamsReport {
    /// Preset the parameters started from
    pub preset: Preset,

    /// Resolved primary parameters
    pub params: SimParams,

    /// Radius, bounds and tile size
    pub derived: Derived,

    /// Q16.16 rendering for deterministic consumers
    pub fixed: FixedParams,

    /// Hex-encoded SHA-256 of `params`
    pub fingerprint: String,

    /// RFC 3339 UTC creation time
    pub generated_at: String,
}

/// Read a JSON override file.
///
/// # Arguments
/// * `path` - JSON object with any subset of the `SimParams` fields
///
/// # Returns
/// * `Ok(ParamsOverride)` - The parsed override
/// * `Err` - If the file is missing, too large, or not a valid override
pub fn load_override(path: &Path) -> Result<ParamsOverride, Box<dyn std::error::Error>> {
    let metadata = fs::metadata(path)
        .map_err(|e| format!("Error accessing config '{}': {}", path.display(), e))?;
    if metadata.len() > MAX_CONFIG_SIZE {
        return Err(format!(
            "Config file too large: {} bytes (max {} bytes)",
            metadata.len(),
            MAX_CONFIG_SIZE
        )
        .into());
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Error reading config '{}': {}", path.display(), e))?;
    let over: ParamsOverride = serde_json::from_str(&raw)
        .map_err(|e| format!("Error parsing config '{}': {}", path.display(), e))?;

    tracing::debug!("Loaded override from {}: {:?}", path.display(), over);
    Ok(over)
}

/// Start from `preset`, layer the optional config file on top, then validate.
pub fn resolve_params(
    preset: Preset,
    config: Option<&Path>,
) -> Result<SimParams, Box<dyn std::error::Error>> {
    tracing::info!("Resolving parameters from preset: {}", preset);

    let mut params = SimParams::preset(preset);
    if let Some(path) = config {
        let over = load_override(path)?;
        if over.is_empty() {
            tracing::warn!("Config {} sets no fields", path.display());
        }
        params = over.apply(&params);
        tracing::info!("Applied overrides from {}", path.display());
    }

    params
        .validate()
        .map_err(|e| format!("Invalid parameters: {}", e))?;
    Ok(params)
}

pub fn build_report(preset: Preset, params: &SimParams) -> ParamsReport {
    ParamsReport {
        preset,
        params: *params,
        derived: Derived::from(params),
        fixed: FixedParams::from(params),
        fingerprint: hex::encode(compute_params_hash(params)),
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// Check a report against its own parameters.
///
/// Recomputes the fingerprint and the derived values; a report edited by hand
/// after export will no longer match.
pub fn verify_report(report: &ParamsReport) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Verifying report fingerprint {}", report.fingerprint);

    let expected = hex::encode(compute_params_hash(&report.params));
    if expected != report.fingerprint.to_lowercase() {
        return Err(format!(
            "Fingerprint mismatch: report says {}, parameters hash to {}",
            report.fingerprint, expected
        )
        .into());
    }
    if report.derived != Derived::from(&report.params) {
        return Err("Derived values do not match parameters".into());
    }
    if report.fixed != FixedParams::from(&report.params) {
        return Err("Fixed-point values do not match parameters".into());
    }
    report
        .params
        .validate()
        .map_err(|e| format!("Invalid parameters: {}", e))?;

    tracing::info!("Report verification successful");
    Ok(())
}

pub fn default_report_filename(preset: Preset, timestamp: i64) -> String {
    format!("bounce-params_{}_{}.json", preset, timestamp)
}

pub fn save_report(report: &ParamsReport, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_report(path: &Path) -> Result<ParamsReport, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    let report: ParamsReport = serde_json::from_str(&json)?;
    Ok(report)
}
