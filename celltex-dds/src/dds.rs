mod enums;

use gospel::read::{Le as _, Reader};
use gospel::write::{Le as _, Writer};

pub use enums::*;

/// Size of the serialized header, magic included.
pub const HEADER_SIZE: usize = 128;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("dds header is truncated")]
	Eof,

	#[error("this is not a dds file")]
	InvalidMagic,

	#[error("dds header size must be 124, got {0}")]
	InvalidSize(u32),

	#[error("dds pixel format size must be 32, got {0}")]
	InvalidPixelFormatSize(u32),

	#[error("dds files with a DX10 extended header are not supported")]
	Dx10Unsupported,
}

// Any underrun while decoding the fixed-size header is an EOF.
impl From<gospel::read::Error> for Error {
	fn from(_: gospel::read::Error) -> Self {
		Error::Eof
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dds {
	/// See [`DDSD`] for values.
	pub flags: u32,
	pub height: u32,
	pub width: u32,
	pub pitch_or_linear_size: u32,
	pub depth: u32,
	pub mip_map_count: u32,
	pub reserved: [u32; 11],
	pub pixel_format: PixelFormat,
	/// See [`DDSCAPS`] for values.
	pub caps: u32,
	/// See [`DDSCAPS2`] for values.
	pub caps2: u32,
	pub caps3: u32,
	pub caps4: u32,
	pub reserved2: u32,
}

impl Dds {
	pub fn read(f: &mut Reader) -> Result<Self, Error> {
		if f.remaining().len() < HEADER_SIZE {
			return Err(Error::Eof);
		}
		if f.array::<4>()? != *b"DDS " {
			return Err(Error::InvalidMagic);
		}
		let size = f.u32()?;
		if size != 124 {
			return Err(Error::InvalidSize(size));
		}
		let flags = f.u32()?;
		let height = f.u32()?;
		let width = f.u32()?;
		let pitch_or_linear_size = f.u32()?;
		let depth = f.u32()?;
		let mip_map_count = f.u32()?;
		let mut reserved = [0; 11];
		for v in &mut reserved {
			*v = f.u32()?;
		}
		let pixel_format = PixelFormat::read(f)?;
		let caps = f.u32()?;
		let caps2 = f.u32()?;
		let caps3 = f.u32()?;
		let caps4 = f.u32()?;
		let reserved2 = f.u32()?;

		if pixel_format.four_cc == *b"DX10" {
			return Err(Error::Dx10Unsupported);
		}

		Ok(Dds {
			flags, height, width, pitch_or_linear_size, depth,
			mip_map_count, reserved, pixel_format,
			caps, caps2, caps3, caps4, reserved2,
		})
	}

	pub fn write(&self, f: &mut Writer) {
		f.slice(b"DDS ");
		f.u32(124);
		f.u32(self.flags);
		f.u32(self.height);
		f.u32(self.width);
		f.u32(self.pitch_or_linear_size);
		f.u32(self.depth);
		f.u32(self.mip_map_count);
		for v in self.reserved {
			f.u32(v);
		}
		self.pixel_format.write(f);
		f.u32(self.caps);
		f.u32(self.caps2);
		f.u32(self.caps3);
		f.u32(self.caps4);
		f.u32(self.reserved2);
	}
}

impl Default for Dds {
	fn default() -> Self {
		Self {
			flags: DDSD::DEFAULT,
			height: 0,
			width: 0,
			pitch_or_linear_size: 0,
			depth: 0,
			mip_map_count: 1,
			reserved: Default::default(),
			pixel_format: PixelFormat::default(),
			caps: DDSCAPS::TEXTURE,
			caps2: 0,
			caps3: 0,
			caps4: 0,
			reserved2: 0,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelFormat {
	/// See [`DDPF`] for values.
	pub flags: u32,
	pub four_cc: [u8; 4],
	pub rgb_bit_count: u32,
	pub r_bit_mask: u32,
	pub g_bit_mask: u32,
	pub b_bit_mask: u32,
	pub a_bit_mask: u32,
}

impl PixelFormat {
	fn read(f: &mut Reader) -> Result<Self, Error> {
		let size = f.u32()?;
		if size != 32 {
			return Err(Error::InvalidPixelFormatSize(size));
		}
		Ok(PixelFormat {
			flags: f.u32()?,
			four_cc: f.array::<4>()?,
			rgb_bit_count: f.u32()?,
			r_bit_mask: f.u32()?,
			g_bit_mask: f.u32()?,
			b_bit_mask: f.u32()?,
			a_bit_mask: f.u32()?,
		})
	}

	fn write(&self, f: &mut Writer) {
		f.u32(32);
		f.u32(self.flags);
		f.slice(&self.four_cc);
		f.u32(self.rgb_bit_count);
		f.u32(self.r_bit_mask);
		f.u32(self.g_bit_mask);
		f.u32(self.b_bit_mask);
		f.u32(self.a_bit_mask);
	}
}

/// The default for a `PixelFormat` is a little-endian ARGB32 format.
impl Default for PixelFormat {
	fn default() -> Self {
		Self {
			flags: DDPF::ALPHAPIXELS | DDPF::RGB,
			four_cc: Default::default(),
			rgb_bit_count: 32,
			r_bit_mask: 0x00FF0000,
			g_bit_mask: 0x0000FF00,
			b_bit_mask: 0x000000FF,
			a_bit_mask: 0xFF000000,
		}
	}
}

pub fn read(data: &[u8]) -> Result<Dds, Error> {
	Dds::read(&mut Reader::new(data))
}

pub fn write(dds: &Dds) -> Vec<u8> {
	let mut f = Writer::new();
	dds.write(&mut f);
	f.finish().expect("no labels are used")
}
