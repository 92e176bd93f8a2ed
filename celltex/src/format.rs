#![allow(non_camel_case_types)]

use num_enum::TryFromPrimitive;

/// Layout flag overlaid on the format byte: rows are linear with an
/// explicit pitch. Swizzled (Morton-ordered) layout when clear.
pub const LINEAR: u8 = 0x20;
/// Sampler flag overlaid on the format byte: texture coordinates are
/// pixel indices rather than normalized to [0,1].
pub const UNNORMALIZE: u8 = 0x40;

/// Base texture formats, i.e. the format byte with [`LINEAR`] and
/// [`UNNORMALIZE`] masked off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, TryFromPrimitive)]
#[repr(u8)]
pub enum TextureFormat {
	B8 = 0x81,
	A1R5G5B5 = 0x82,
	A4R4G4B4 = 0x83,
	R5G6B5 = 0x84,
	A8R8G8B8 = 0x85,
	Dxt1 = 0x86,
	Dxt23 = 0x87,
	Dxt45 = 0x88,
	G8B8 = 0x8B,
	B8R8G8R8 = 0x8D,
	R8B8R8G8 = 0x8E,
	R6G5B5 = 0x8F,
	Depth24D8 = 0x90,
	Depth24D8Float = 0x91,
	Depth16 = 0x92,
	Depth16Float = 0x93,
	X16 = 0x94,
	Y16X16 = 0x95,
	R5G5B5A1 = 0x97,
	Hilo8 = 0x98,
	HiloS8 = 0x99,
	W16Z16Y16X16Float = 0x9A,
	W32Z32Y32X32Float = 0x9B,
	X32Float = 0x9C,
	D1R5G5B5 = 0x9D,
	D8R8G8B8 = 0x9E,
	Y16X16Float = 0x9F,
}

/// Which byte-group reversal a format needs when it crosses the
/// little-endian/big-endian boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invert {
	None,
	Swap16,
	Swap32,
	/// 32-bit reversal applied only at even x coordinates; the packed-pair
	/// formats share their chroma byte between neighbouring pixels.
	Swap32Even,
}

impl TextureFormat {
	pub fn is_dxtn(self) -> bool {
		matches!(self, TextureFormat::Dxt1 | TextureFormat::Dxt23 | TextureFormat::Dxt45)
	}

	pub fn is_raw_compressed(self) -> bool {
		matches!(self, TextureFormat::B8R8G8R8 | TextureFormat::R8B8R8G8)
	}

	/// Bytes per texel, or per block for the dxtn formats.
	pub fn pixel_depth(self) -> usize {
		use TextureFormat::*;
		match self {
			B8 => 1,
			A1R5G5B5 | A4R4G4B4 | R5G6B5 | G8B8 | R6G5B5
			| Depth16 | Depth16Float | X16 | D1R5G5B5 | R5G5B5A1
			| Hilo8 | HiloS8 | B8R8G8R8 | R8B8R8G8 => 2,
			A8R8G8B8 | Depth24D8 | Depth24D8Float | Y16X16
			| X32Float | D8R8G8B8 | Y16X16Float => 4,
			W16Z16Y16X16Float => 8,
			W32Z32Y32X32Float => 16,
			Dxt1 => 8,
			Dxt23 | Dxt45 => 16,
		}
	}

	/// Row stride in bytes; a block row for the dxtn formats.
	pub fn pitch(self, width: usize) -> usize {
		if self.is_dxtn() {
			(width + 3) / 4 * self.pixel_depth()
		} else if self.is_raw_compressed() {
			(width + 1) / 2 * 4
		} else {
			width * self.pixel_depth()
		}
	}

	pub fn invert(self) -> Invert {
		use TextureFormat::*;
		match self {
			B8R8G8R8 | R8B8R8G8 => Invert::Swap32Even,
			W32Z32Y32X32Float | X32Float => Invert::Swap32,
			X16 | Y16X16 | Y16X16Float | W16Z16Y16X16Float => Invert::Swap16,
			Dxt1 | Dxt23 | Dxt45 => Invert::None,
			_ => match self.pixel_depth() {
				2 => Invert::Swap16,
				_ => Invert::Swap32,
			},
		}
	}
}

/// The 16-bit component-remap word: bits 0..8 hold four 2-bit source
/// selectors (output positions A,R,G,B in that order), bits 8..16 hold
/// four 2-bit per-position modes.
#[allow(non_snake_case)]
pub mod REMAP {
	pub const ZERO:  u32 = 0;
	pub const ONE:   u32 = 1;
	pub const REMAP: u32 = 2;

	pub const FROM_A: u32 = 0;
	pub const FROM_R: u32 = 1;
	pub const FROM_G: u32 = 2;
	pub const FROM_B: u32 = 3;

	pub const MASK_RRRR: u32 = REMAP << 8 | REMAP << 10 | REMAP << 12 | REMAP << 14;
	pub const MASK_1RRR: u32 = ONE << 8 | REMAP << 10 | REMAP << 12 | REMAP << 14;
	pub const MASK_R000: u32 = REMAP << 8;

	pub const ORDER_ARGB: u32 = MASK_RRRR | FROM_A | FROM_R << 2 | FROM_G << 4 | FROM_B << 6;
	pub const ORDER_BGRA: u32 = MASK_RRRR | FROM_B | FROM_G << 2 | FROM_R << 4 | FROM_A << 6;
	pub const ORDER_ABGR: u32 = MASK_RRRR | FROM_A | FROM_B << 2 | FROM_G << 4 | FROM_R << 6;
	pub const ORDER_AGRB: u32 = MASK_RRRR | FROM_A | FROM_G << 2 | FROM_R << 4 | FROM_B << 6;
	pub const ORDER_ARBG: u32 = MASK_RRRR | FROM_A | FROM_R << 2 | FROM_B << 4 | FROM_G << 6;
	pub const ORDER_1RGB: u32 = MASK_1RRR | FROM_A | FROM_R << 2 | FROM_G << 4 | FROM_B << 6;
	pub const ORDER_1BBB: u32 = MASK_1RRR | FROM_A | FROM_B << 2 | FROM_B << 4 | FROM_B << 6;
	pub const ORDER_B000: u32 = MASK_R000 | FROM_B | FROM_B << 2 | FROM_B << 4 | FROM_B << 6;
}
