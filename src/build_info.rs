//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version banner, e.g. `clumsy 0.1.0 (2026-10-19, a1b2c3d)`.
pub fn version_line() -> String {
    format!(
        "clumsy {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
