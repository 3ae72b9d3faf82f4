//! Default TOML config template with inline documentation comments.

/// The default TOML config content. Every value is commented out, so
/// the file parses to `HaloConfig::default()`.
pub fn default_config_toml() -> &'static str {
    r#"# Halo Configuration
# Only override what you want to change -- missing fields use defaults.

[bloom]
# enabled = true

[bloom.brightness]
# mode = "soft"          # hard, soft
# threshold = 0.7        # 0.0-4.0 (luminance cutoff)
# knee = 0.1             # 0.001-1.0 (soft transition half-width)

[bloom.blur]
# radius = 8.0           # 1.0-32.0 texels, sigma = radius / 2
# passes = 1             # 1-5 horizontal+vertical iterations

[bloom.composite]
# mode = "adaptive"      # simple, adaptive
# intensity = 0.8        # 0.0-8.0
# adaptive_min = 0.2     # multiplier over dark scene regions
# adaptive_max = 1.5     # multiplier over bright scene regions
# adaptive_low = 0.5     # scene luminance where the ramp starts
# adaptive_high = 0.9    # scene luminance where the ramp saturates

[render]
# width = 1280           # 1-8192
# height = 720           # 1-8192
# output_format = "rgba8unorm"   # rgba8unorm, rgba16float

[logging]
# level = "info"         # trace, debug, info, warn, error
"#
}
