use gospel::write::{Be as _, Writer};

use super::{Error, Gtf, TextureAttribute, header_block_size};

pub fn write(gtf: &Gtf) -> Result<Vec<u8>, Error> {
	let mut f = Writer::new();
	f.u32(gtf.header.version);
	f.u32(gtf.header.size);
	f.u32(gtf.header.num_texture);
	for tex in &gtf.textures {
		write_attribute(&mut f, tex);
	}
	let block = header_block_size(gtf.header.num_texture) as usize;
	f.slice(&vec![0; block - f.len()]);
	Ok(f.finish()?)
}

fn write_attribute(f: &mut Writer, tex: &TextureAttribute) {
	f.u32(tex.id);
	f.u32(tex.offset_to_tex);
	f.u32(tex.texture_size);
	f.u32(0); // pad
	f.u8(tex.info.format);
	f.u8(tex.info.mipmap);
	f.u8(tex.info.dimension);
	f.u8(tex.info.cubemap);
	f.u32(tex.info.remap);
	f.u16(tex.info.width);
	f.u16(tex.info.height);
	f.u16(tex.info.depth);
	f.u8(tex.info.location);
	f.u8(tex.info.padding);
	f.u32(tex.info.pitch);
	f.u32(tex.info.offset);
	f.slice(&[0; 8]); // pad
}
