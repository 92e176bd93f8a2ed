//! The GTF container: a 12-byte file header, a table of texture
//! attributes, then per-texture payload regions. Everything on the wire is
//! big-endian, and the file, the header+attribute block and every texture
//! offset are multiples of 128 bytes.

use crate::format::{LINEAR, TextureFormat, UNNORMALIZE};

mod read;
mod write;

/// Version written into every produced file (202.00.00). Readers accept
/// other versions; older revisions share this layout.
pub const VERSION: u32 = 0x02020000;

pub const ALIGN: u64 = 128;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("gtf file length {0} is not a multiple of 128")]
	FileAlignment(usize),

	#[error("gtf header is truncated")]
	Eof,

	#[error("gtf attribute table extends past the end of the file")]
	AttributeEof,

	#[error("gtf texture count must be 1..=255, got {0}")]
	TextureCount(u32),

	#[error("gtf texture-region size {0} is not a multiple of 128")]
	SizeAlignment(u32),

	#[error("gtf texture id {0} is out of range")]
	TextureId(u32),

	#[error("gtf texture offset {0} is not a multiple of 128")]
	TextureOffset(u32),

	#[error("gtf texture {0} extends past the end of the file")]
	TextureEof(u32),

	#[error("no texture with id {0}")]
	TextureNotFound(u32),

	#[error("{0}")]
	Write(#[from] gospel::write::Error),
}

impl From<gospel::read::Error> for Error {
	fn from(_: gospel::read::Error) -> Self {
		Error::Eof
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gtf {
	pub header: Header,
	pub textures: Vec<TextureAttribute>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
	pub version: u32,
	/// Size of the texture region, i.e. everything after the
	/// header+attribute block.
	pub size: u32,
	pub num_texture: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureAttribute {
	pub id: u32,
	pub offset_to_tex: u32,
	pub texture_size: u32,
	pub info: TextureInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextureInfo {
	/// Base format code with the [`LINEAR`] and [`UNNORMALIZE`] flag bits
	/// overlaid.
	pub format: u8,
	pub mipmap: u8,
	/// 1, 2 or 3.
	pub dimension: u8,
	pub cubemap: u8,
	pub remap: u32,
	pub width: u16,
	pub height: u16,
	pub depth: u16,
	pub location: u8,
	pub padding: u8,
	pub pitch: u32,
	pub offset: u32,
}

impl TextureInfo {
	pub fn raw_format(&self) -> Result<TextureFormat, u8> {
		let raw = self.format & !(LINEAR | UNNORMALIZE);
		TextureFormat::try_from(raw).map_err(|_| raw)
	}

	pub fn is_swizzled(&self) -> bool {
		self.format & LINEAR == 0
	}

	pub fn faces(&self) -> usize {
		if self.cubemap != 0 { 6 } else { 1 }
	}
}

pub fn align128(n: u64) -> u64 {
	(n + ALIGN - 1) & !(ALIGN - 1)
}

/// Size of the header plus `num_texture` attribute records, padded out to
/// the 128-byte alignment the texture region starts on.
pub fn header_block_size(num_texture: u32) -> u64 {
	align128(12 + 48 * num_texture as u64)
}

pub fn read(data: &[u8]) -> Result<Gtf, Error> {
	read::read(data)
}

/// Serializes the header+attribute block, zero-padded to [`ALIGN`].
pub fn write(gtf: &Gtf) -> Result<Vec<u8>, Error> {
	write::write(gtf)
}
