#[allow(non_snake_case)]
pub mod DDSD {
	pub const DEFAULT:     u32 = CAPS | HEIGHT | WIDTH | PIXELFORMAT;
	pub const CAPS:        u32 = 0x00000001;
	pub const HEIGHT:      u32 = 0x00000002;
	pub const WIDTH:       u32 = 0x00000004;
	pub const PITCH:       u32 = 0x00000008;
	pub const PIXELFORMAT: u32 = 0x00001000;
	pub const MIPMAPCOUNT: u32 = 0x00020000;
	pub const LINEARSIZE:  u32 = 0x00080000;
	pub const DEPTH:       u32 = 0x00800000;
}

#[allow(non_snake_case)]
pub mod DDSCAPS {
	pub const ALPHA:   u32 = 0x00000002;
	pub const COMPLEX: u32 = 0x00000008;
	pub const TEXTURE: u32 = 0x00001000;
	pub const MIPMAP:  u32 = 0x00400000;
}

#[allow(non_snake_case)]
pub mod DDSCAPS2 {
	pub const CUBEMAP:           u32 = 0x00000200;
	pub const CUBEMAP_POSITIVEX: u32 = 0x00000400;
	pub const CUBEMAP_NEGATIVEX: u32 = 0x00000800;
	pub const CUBEMAP_POSITIVEY: u32 = 0x00001000;
	pub const CUBEMAP_NEGATIVEY: u32 = 0x00002000;
	pub const CUBEMAP_POSITIVEZ: u32 = 0x00004000;
	pub const CUBEMAP_NEGATIVEZ: u32 = 0x00008000;
	pub const CUBEMAP_ALLFACES:  u32 = CUBEMAP_POSITIVEX | CUBEMAP_NEGATIVEX
		| CUBEMAP_POSITIVEY | CUBEMAP_NEGATIVEY
		| CUBEMAP_POSITIVEZ | CUBEMAP_NEGATIVEZ;
	pub const VOLUME:            u32 = 0x00200000;
}

#[allow(non_snake_case)]
pub mod DDPF {
	pub const ALPHAPIXELS:   u32 = 0x00000001;
	pub const ALPHA:         u32 = 0x00000002;
	pub const FOURCC:        u32 = 0x00000004;
	pub const RGB:           u32 = 0x00000040;
	pub const YUV:           u32 = 0x00000200;
	pub const LUMINANCE:     u32 = 0x00020000;
	pub const BUMPLUMINANCE: u32 = 0x00040000;
	pub const BUMPDUDV:      u32 = 0x00080000;
}

/// D3D9 format numbers that appear *as numbers* in the fourcc field of
/// floating-point dds files, next to the usual four-character codes.
#[allow(non_snake_case)]
pub mod D3DFMT {
	pub const R16F:          u32 = 111;
	pub const G16R16F:       u32 = 112;
	pub const A16B16G16R16F: u32 = 113;
	pub const R32F:          u32 = 114;
	pub const G32R32F:       u32 = 115;
	pub const A32B32G32R32F: u32 = 116;
}
