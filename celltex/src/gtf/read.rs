use gospel::read::{Be as _, Reader};

use super::{Error, Gtf, Header, TextureAttribute, TextureInfo, header_block_size};

pub fn read(data: &[u8]) -> Result<Gtf, Error> {
	if data.len() % 128 != 0 {
		return Err(Error::FileAlignment(data.len()));
	}
	if data.len() < 12 {
		return Err(Error::Eof);
	}

	let f = &mut Reader::new(data);
	let header = Header {
		version: f.u32()?,
		size: f.u32()?,
		num_texture: f.u32()?,
	};

	if (data.len() as u64) < header_block_size(header.num_texture) {
		return Err(Error::AttributeEof);
	}
	if !(1..=255).contains(&header.num_texture) {
		return Err(Error::TextureCount(header.num_texture));
	}
	if header.size % 128 != 0 {
		return Err(Error::SizeAlignment(header.size));
	}

	let mut textures = Vec::with_capacity(header.num_texture as usize);
	for _ in 0..header.num_texture {
		let tex = read_attribute(f)?;
		if tex.id > 255 {
			return Err(Error::TextureId(tex.id));
		}
		if tex.offset_to_tex % 128 != 0 {
			return Err(Error::TextureOffset(tex.offset_to_tex));
		}
		if tex.offset_to_tex as u64 + tex.texture_size as u64 > data.len() as u64 {
			return Err(Error::TextureEof(tex.id));
		}
		textures.push(tex);
	}

	Ok(Gtf { header, textures })
}

fn read_attribute(f: &mut Reader) -> Result<TextureAttribute, Error> {
	let id = f.u32()?;
	let offset_to_tex = f.u32()?;
	let texture_size = f.u32()?;
	f.u32()?; // pad
	let info = TextureInfo {
		format: f.u8()?,
		mipmap: f.u8()?,
		dimension: f.u8()?,
		cubemap: f.u8()?,
		remap: f.u32()?,
		width: f.u16()?,
		height: f.u16()?,
		depth: f.u16()?,
		location: f.u8()?,
		padding: f.u8()?,
		pitch: f.u32()?,
		offset: f.u32()?,
	};
	f.slice(8)?; // pad
	Ok(TextureAttribute { id, offset_to_tex, texture_size, info })
}
