//! Runtime tuning read once from the environment.

use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_opt_u8(name: &str) -> Option<u8> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
}

static PARALLEL_ROW_THRESHOLD: OnceLock<usize> = OnceLock::new();

/// Minimum grid height at which whole-grid operations fan rows out to rayon.
pub fn parallel_row_threshold() -> usize {
    *PARALLEL_ROW_THRESHOLD.get_or_init(|| parse_env_usize("BITPLANE_PARALLEL_ROWS", 512).max(1))
}

static IMAGE_THRESHOLD: OnceLock<Option<u8>> = OnceLock::new();

/// Luma threshold used by image import when the caller supplies none.
///
/// `None` means Otsu's method picks the threshold per image.
pub fn image_threshold_override() -> Option<u8> {
    *IMAGE_THRESHOLD.get_or_init(|| parse_env_opt_u8("BITPLANE_IMAGE_THRESHOLD"))
}
