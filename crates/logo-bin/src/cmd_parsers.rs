use clap::ArgMatches;
use logo_core::options::DecoderOptions;

use crate::cmd_args::arg_parsers::IPaletteFormat;

pub mod global_options;

/// Build the options shared by every decoder of a run
pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let palette_format = options
        .get_one::<IPaletteFormat>("palette-format")
        .map(|f| f.to_palette_format())
        .unwrap_or_default();
    let flip = options.get_flag("flip-24bit");
    let strict_mode = options.get_flag("strict");
    let defaults = DecoderOptions::default();
    let max_width = options
        .get_one::<usize>("max-width")
        .copied()
        .unwrap_or(defaults.max_width());
    let max_height = options
        .get_one::<usize>("max-height")
        .copied()
        .unwrap_or(defaults.max_height());

    defaults
        .set_max_width(max_width)
        .set_max_height(max_height)
        .set_palette_format(palette_format)
        .set_flip_truecolor(flip)
        .set_strict_mode(strict_mode)
}
