pub static FILES_HELP: &str = "Images of a charge logo

All images must share the size, depth and palette of the first one.
Exactly --logo-files images are used, extra ones are ignored.";

pub static PALETTE_FORMAT_HELP: &str = "Packing of palette colors

rgb565: 16 bit 5-6-5, stored as unsigned short
rgb888: 8-8-8 for 18 bit panels, stored as unsigned int
rgb444: 4-4-4, written as 0x0RGB, stored as unsigned short";

pub static FLIP_HELP: &str = "Write 24 bit images top row first

BMP files store the bottom row first. Palette images are always
written top row first, 24 bit images keep the stored order unless
this is set.";

pub static STRICT_HELP: &str = "Check every charge logo image against the first one

Without this the size, depth and palette size of the first image are
used for every image without looking at their headers.";
