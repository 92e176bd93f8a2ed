//! Packs several dds images into one gtf file, each texture region placed
//! on a 128-byte boundary after the shared header+attribute block.

use crate::convert::{Error, Options, prepare_dds};
use crate::gtf::{self, Gtf, Header, TextureAttribute, align128, header_block_size};

pub fn pack(images: &[&[u8]], options: Options) -> Result<Vec<u8>, Error> {
	if images.is_empty() || images.len() > 255 {
		return Err(Error::ImageCount(images.len()));
	}

	let num = images.len() as u32;
	let block = header_block_size(num);

	let mut prepared = Vec::with_capacity(images.len());
	let mut textures = Vec::with_capacity(images.len());
	let mut offset = block;
	for (id, data) in images.iter().enumerate() {
		let image = prepare_dds(data, options)?;
		let end = offset + image.plan.gtf_size as u64;
		if end > u32::MAX as u64 {
			return Err(Error::FileTooLong);
		}
		textures.push(TextureAttribute {
			id: id as u32,
			offset_to_tex: offset as u32,
			texture_size: image.plan.gtf_size as u32,
			info: image.info,
		});
		prepared.push(image);
		offset = align128(end);
	}
	let total = offset;

	let mut out = vec![0; total as usize];
	for (tex, image) in textures.iter().zip(&prepared) {
		crate::convert::move_into_gtf(&mut out[tex.offset_to_tex as usize..], image)?;
	}

	let gtf = Gtf {
		header: Header {
			version: gtf::VERSION,
			size: (total - block) as u32,
			num_texture: num,
		},
		textures,
	};
	out[..block as usize].copy_from_slice(&gtf::write(&gtf)?);
	Ok(out)
}
