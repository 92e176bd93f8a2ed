//! Synthesizes a dds header from a gtf texture descriptor.

use celltex_dds::dds::{D3DFMT, DDPF, DDSCAPS, DDSCAPS2, DDSD, Dds, PixelFormat};

use crate::convert::Error;
use crate::format::TextureFormat;
use crate::gtf::TextureInfo;

pub fn dds_header(info: &TextureInfo, raw: TextureFormat) -> Result<Dds, Error> {
	let mut dds = Dds {
		width: info.width as u32,
		height: info.height as u32,
		pixel_format: pixel_format(raw)?,
		..Dds::default()
	};

	if info.mipmap > 1 {
		dds.flags |= DDSD::MIPMAPCOUNT;
		dds.caps |= DDSCAPS::MIPMAP | DDSCAPS::COMPLEX;
		dds.mip_map_count = info.mipmap as u32;
	}
	if info.dimension == 3 {
		dds.flags |= DDSD::DEPTH;
		dds.caps |= DDSCAPS::COMPLEX;
		dds.caps2 |= DDSCAPS2::VOLUME;
		dds.depth = info.depth as u32;
	}
	if info.cubemap != 0 {
		dds.caps |= DDSCAPS::COMPLEX;
		dds.caps2 |= DDSCAPS2::CUBEMAP | DDSCAPS2::CUBEMAP_ALLFACES;
	}
	if dds.pixel_format.flags & DDPF::ALPHAPIXELS != 0 {
		dds.caps |= DDSCAPS::ALPHA;
	}

	if raw.is_dxtn() {
		let w = info.width as u32;
		let h = info.height as u32;
		dds.flags |= DDSD::LINEARSIZE;
		dds.pitch_or_linear_size = (w + 3) / 4 * ((h + 3) / 4) * raw.pixel_depth() as u32;
	} else if !raw.is_raw_compressed() && info.pitch != 0 {
		dds.flags |= DDSD::PITCH;
		dds.pitch_or_linear_size = info.pitch;
	}

	Ok(dds)
}

fn pixel_format(raw: TextureFormat) -> Result<PixelFormat, Error> {
	use TextureFormat as TF;

	fn masked(flags: u32, bits: u32, r: u32, g: u32, b: u32, a: u32) -> PixelFormat {
		PixelFormat {
			flags,
			four_cc: [0; 4],
			rgb_bit_count: bits,
			r_bit_mask: r,
			g_bit_mask: g,
			b_bit_mask: b,
			a_bit_mask: a,
		}
	}

	fn fourcc(cc: [u8; 4]) -> PixelFormat {
		PixelFormat {
			flags: DDPF::FOURCC,
			four_cc: cc,
			rgb_bit_count: 0,
			r_bit_mask: 0,
			g_bit_mask: 0,
			b_bit_mask: 0,
			a_bit_mask: 0,
		}
	}

	const RGB: u32 = DDPF::RGB;
	const RGBA: u32 = DDPF::RGB | DDPF::ALPHAPIXELS;

	Ok(match raw {
		TF::B8 => masked(DDPF::LUMINANCE, 8, 0x000000FF, 0, 0, 0),
		TF::A1R5G5B5 => masked(RGBA, 16, 0x7C00, 0x03E0, 0x001F, 0x8000),
		TF::R5G5B5A1 => masked(RGBA, 16, 0xF800, 0x07C0, 0x003E, 0x0001),
		TF::A4R4G4B4 => masked(RGBA, 16, 0x0F00, 0x00F0, 0x000F, 0xF000),
		TF::R5G6B5 => masked(RGB, 16, 0xF800, 0x07E0, 0x001F, 0),
		TF::R6G5B5 => masked(DDPF::BUMPLUMINANCE, 16, 0xFC00, 0x03E0, 0x001F, 0),
		TF::D1R5G5B5 => masked(RGB, 16, 0x7C00, 0x03E0, 0x001F, 0),
		TF::G8B8 => masked(DDPF::LUMINANCE | DDPF::ALPHAPIXELS, 16, 0x00FF, 0, 0, 0xFF00),
		TF::X16 => masked(DDPF::LUMINANCE, 16, 0xFFFF, 0, 0, 0),
		TF::A8R8G8B8 => masked(RGBA, 32, 0x00FF0000, 0x0000FF00, 0x000000FF, 0xFF000000),
		TF::D8R8G8B8 => masked(RGB, 32, 0x00FF0000, 0x0000FF00, 0x000000FF, 0),
		TF::Y16X16 => masked(RGB, 32, 0x0000FFFF, 0xFFFF0000, 0, 0),
		TF::Dxt1 => fourcc(*b"DXT1"),
		TF::Dxt23 => fourcc(*b"DXT3"),
		TF::Dxt45 => fourcc(*b"DXT5"),
		TF::B8R8G8R8 => fourcc(*b"RGBG"),
		TF::R8B8R8G8 => fourcc(*b"GRGB"),
		// the reverse of the R16F mapping lands on G16R16F
		TF::Y16X16Float => fourcc(D3DFMT::G16R16F.to_le_bytes()),
		TF::W16Z16Y16X16Float => fourcc(D3DFMT::A16B16G16R16F.to_le_bytes()),
		TF::X32Float => fourcc(D3DFMT::R32F.to_le_bytes()),
		TF::W32Z32Y32X32Float => fourcc(D3DFMT::A32B32G32R32F.to_le_bytes()),
		TF::Depth24D8 | TF::Depth24D8Float | TF::Depth16 | TF::Depth16Float
		| TF::Hilo8 | TF::HiloS8 => return Err(Error::UnsupportedFormat("dds")),
	})
}
