use tracing::Level;

/// Parses a configured level name, falling back to `info` for anything unknown.
pub fn max_level(raw: &str) -> Level {
    raw.trim().parse().unwrap_or(Level::INFO)
}

/// Installs `tracing-wasm` as the global subscriber. Must run at most once.
pub fn init(level: &str) {
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(max_level(level))
        .build();

    tracing_wasm::set_as_global_default_with_config(config);
}
