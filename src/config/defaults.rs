//! Default values and the built-in option table.
//!
//! Centralized constants to avoid magic values scattered across the codebase.
//! Adding an option means adding one entry to [`options`].

use super::registry::OptionSpec;

/// Default number of render threads (0 lets the renderer decide).
pub const NTHREADS: i32 = 0;

/// Default samples per pixel (0 lets the renderer decide).
pub const SPP: i32 = 0;

/// Default random seed.
pub const SEED: i32 = 0;

/// Default output image path.
pub const IMAGE_FILE: &str = "image.ppm";

/// Default scene description path.
pub const INPUT_FILE: &str = "scene.txt";

/// Default for `--quiet`.
pub const QUIET: bool = false;

/// Default for `--logutil`.
pub const LOG_UTIL: bool = false;

/// Default for `--partial`.
pub const PARTIAL: bool = false;

/// The renderer's options, in lookup order.
#[must_use]
pub fn options() -> Vec<OptionSpec> {
    vec![
        OptionSpec::int("nthreads", NTHREADS).with_alias("n"),
        OptionSpec::int("spp", SPP),
        OptionSpec::int("seed", SEED).with_alias("s"),
        OptionSpec::string("imagefile", IMAGE_FILE).with_field("image_file"),
        OptionSpec::string("input", INPUT_FILE)
            .with_alias("input_file")
            .with_field("input_file"),
        OptionSpec::flag("quiet", QUIET).with_alias("q"),
        OptionSpec::flag("logutil", LOG_UTIL)
            .with_alias("l")
            .with_field("log_util"),
        OptionSpec::flag("partial", PARTIAL).with_alias("p"),
    ]
}
