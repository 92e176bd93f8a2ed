//! The two conversion drivers: parse one container, plan the layout, move
//! the payload bytes, write the other container.

use gospel::write::Writer;

use celltex_dds::dds::{self, D3DFMT, DDPF, DDSCAPS2, DDSD};

use crate::blit;
use crate::classify;
use crate::format::{Invert, LINEAR, TextureFormat, UNNORMALIZE};
use crate::gtf::{self, Gtf, Header, TextureAttribute, TextureInfo, align128, header_block_size};
use crate::layout::{self, Plan};
use crate::swizzle;
use crate::synth;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{0}")]
	Dds(#[from] dds::Error),

	#[error("{0}")]
	Gtf(#[from] gtf::Error),

	#[error("dds payload extends past the end of the file")]
	DdsEof,

	#[error("gtf payload extends past the end of the file")]
	GtfEof,

	#[error("unsupported dds header: {0}")]
	UnsupportedHeader(&'static str),

	#[error("pixel format has no {0} equivalent")]
	UnsupportedFormat(&'static str),

	#[error("texture data overflows the dds buffer")]
	DdsOverflow,

	#[error("texture data overflows the gtf buffer")]
	GtfOverflow,

	#[error("output file would exceed the 4 GiB limit")]
	FileTooLong,

	#[error("a packed gtf holds 1..=255 images, got {0}")]
	ImageCount(usize),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
	/// Keep uncompressed power-of-two textures in linear layout instead of
	/// swizzling them. Dxtn textures swizzle regardless.
	pub linearize: bool,
	/// Mark the texture as sampled with unnormalized coordinates.
	pub unnormalize: bool,
}

/// A dds file parsed and planned, ready to move into a gtf region.
pub(crate) struct DdsImage<'a> {
	pub payload: &'a [u8],
	pub info: TextureInfo,
	pub raw: TextureFormat,
	pub plan: Plan,
}

/// Converts a single dds file into a single-texture gtf file.
pub fn dds_to_gtf(data: &[u8], options: Options) -> Result<Vec<u8>, Error> {
	let image = prepare_dds(data, options)?;

	let block = header_block_size(1);
	let total = align128(block + image.plan.gtf_size as u64);
	if total > u32::MAX as u64 {
		return Err(Error::FileTooLong);
	}

	let mut out = vec![0; total as usize];
	move_into_gtf(&mut out[block as usize..], &image)?;

	let gtf = Gtf {
		header: Header {
			version: gtf::VERSION,
			size: (total - block) as u32,
			num_texture: 1,
		},
		textures: vec![TextureAttribute {
			id: 0,
			offset_to_tex: block as u32,
			texture_size: image.plan.gtf_size as u32,
			info: image.info,
		}],
	};
	out[..block as usize].copy_from_slice(&gtf::write(&gtf)?);
	Ok(out)
}

/// Extracts the texture with the given id from a gtf file as a dds file.
pub fn gtf_to_dds(data: &[u8], id: u32) -> Result<Vec<u8>, Error> {
	let parsed = gtf::read(data)?;
	let tex = parsed.textures.iter()
		.find(|t| t.id == id)
		.ok_or(gtf::Error::TextureNotFound(id))?;

	let raw = tex.info.raw_format().map_err(|_| Error::UnsupportedFormat("dds"))?;
	let header = synth::dds_header(&tex.info, raw)?;
	let plan = layout::plan(&tex.info, raw, 0);

	let offset = tex.offset_to_tex as usize;
	if offset + plan.gtf_size > data.len() {
		return Err(Error::GtfEof);
	}

	let mut out = vec![0; dds::HEADER_SIZE + plan.dds_size];
	let mut f = Writer::new();
	header.write(&mut f);
	out[..dds::HEADER_SIZE].copy_from_slice(&f.finish().map_err(gtf::Error::from)?);

	let mut mover = Mover {
		dst: &mut out[dds::HEADER_SIZE..],
		src: &data[offset..],
		to_gtf: false,
	};
	mover.run(&plan, &tex.info, raw)?;
	Ok(out)
}

/// Moves a prepared dds image into a gtf texture region.
pub(crate) fn move_into_gtf(region: &mut [u8], image: &DdsImage) -> Result<(), Error> {
	let mut mover = Mover {
		dst: region,
		src: image.payload,
		to_gtf: true,
	};
	mover.run(&image.plan, &image.info, image.raw)
}

/// Parses a dds file and derives the gtf descriptor and layout plan for it.
pub(crate) fn prepare_dds(data: &[u8], options: Options) -> Result<DdsImage, Error> {
	let header = dds::read(data)?;
	let payload = &data[dds::HEADER_SIZE..];
	let (raw, remap) = classify::classify(&header.pixel_format)?;

	let volume = header.caps2 & DDSCAPS2::VOLUME != 0 && header.flags & DDSD::DEPTH != 0;
	let cubemap = header.caps2 & DDSCAPS2::CUBEMAP != 0;
	if cubemap && header.caps2 & DDSCAPS2::CUBEMAP_ALLFACES != DDSCAPS2::CUBEMAP_ALLFACES {
		return Err(Error::UnsupportedHeader("cubemap without all six faces"));
	}
	if cubemap && volume {
		return Err(Error::UnsupportedHeader("texture is both cubemap and volume"));
	}

	let width = header.width;
	let height = header.height;
	let depth = if volume { header.depth } else { 1 };
	if volume {
		if width > 512 || height > 512 || depth > 512 {
			return Err(Error::UnsupportedHeader("volume textures go up to 512"));
		}
	} else if width > 4096 || height > 4096 {
		return Err(Error::UnsupportedHeader("textures go up to 4096"));
	}

	let mipmap = if header.flags & DDSD::MIPMAPCOUNT != 0 {
		header.mip_map_count.max(1)
	} else {
		1
	};
	if mipmap > 1 + width.max(height).max(depth).max(1).ilog2() {
		return Err(Error::UnsupportedHeader("too many mipmap levels"));
	}

	let pot = |n: u32| n == 0 || n.is_power_of_two();
	let swizzlable = !raw.is_raw_compressed() && pot(width) && pot(height) && pot(depth);
	let swizzled = swizzlable && (raw.is_dxtn() || !options.linearize);

	let mut format = raw as u8;
	let mut pitch = 0;
	if !swizzled {
		format |= LINEAR;
		pitch = raw.pitch(width as usize) as u32;
	}
	if options.unnormalize {
		format |= UNNORMALIZE;
	}

	let info = TextureInfo {
		format,
		mipmap: mipmap as u8,
		dimension: if volume { 3 } else { 2 },
		cubemap: cubemap as u8,
		remap,
		width: width as u16,
		height: height as u16,
		depth: depth as u16,
		location: 0,
		padding: 0,
		pitch,
		offset: 0,
	};

	// the dds payload is narrower than the gtf texel for these two
	let pf = &header.pixel_format;
	let dds_depth = if pf.flags & DDPF::FOURCC != 0
		&& u32::from_le_bytes(pf.four_cc) == D3DFMT::R16F
	{
		2
	} else if pf.flags & DDPF::FOURCC == 0 && pf.rgb_bit_count == 24 {
		3
	} else {
		0
	};

	let plan = layout::plan(&info, raw, dds_depth);
	if payload.len() < plan.dds_size {
		return Err(Error::DdsEof);
	}

	Ok(DdsImage { payload, info, raw, plan })
}

/// Walks a layout table, transferring bytes between the gtf and dds sides
/// of one texture. Offsets in the records are relative to the two payload
/// slices held here.
struct Mover<'a> {
	dst: &'a mut [u8],
	src: &'a [u8],
	to_gtf: bool,
}

impl Mover<'_> {
	fn gtf_len(&self) -> usize {
		if self.to_gtf { self.dst.len() } else { self.src.len() }
	}

	fn dds_len(&self) -> usize {
		if self.to_gtf { self.src.len() } else { self.dst.len() }
	}

	fn xfer(&mut self, gtf: usize, dds: usize, n: usize, inv: Invert) {
		let (d, s) = if self.to_gtf { (gtf, dds) } else { (dds, gtf) };
		let dst = &mut self.dst[d..];
		let src = &self.src[s..];
		match inv {
			Invert::None => blit::copy(dst, src, n),
			Invert::Swap16 => blit::copy_swap16(dst, src, n),
			Invert::Swap32 => blit::copy_swap32(dst, src, n),
			Invert::Swap32Even => blit::copy_swap32_even(dst, src, n),
		}
	}

	fn run(&mut self, plan: &Plan, info: &TextureInfo, raw: TextureFormat) -> Result<(), Error> {
		let swizzled = info.is_swizzled();
		for rec in &plan.layouts {
			if rec.width == 0 || rec.height == 0 || rec.depth == 0 {
				continue;
			}

			// the planner knows the extremes each record touches; check
			// them once, ahead of the loops
			let (gtf_offset, gtf_size) = if swizzled {
				(rec.swizzle_offset, rec.swizzle_size)
			} else {
				(rec.linear_offset, rec.linear_size)
			};
			if rec.dds_offset + rec.dds_size > self.dds_len() {
				return Err(Error::DdsOverflow);
			}
			if gtf_offset + gtf_size > self.gtf_len() {
				return Err(Error::GtfOverflow);
			}

			if raw.is_dxtn() {
				if swizzled && info.dimension == 3 {
					self.dxt_volume(rec, raw);
				} else if swizzled {
					self.xfer(rec.swizzle_offset, rec.dds_offset, rec.dds_size, Invert::None);
				} else {
					self.dxt_linear(rec);
				}
			} else {
				self.texels(rec, raw, swizzled);
			}
		}
		Ok(())
	}

	/// Volume texture compression: dxtn blocks of up to four depth slices
	/// pack together into consecutive super-blocks.
	fn dxt_volume(&mut self, rec: &layout::Layout, raw: TextureFormat) {
		let bb = raw.pixel_depth();
		let bw = (rec.width + 3) / 4;
		let bh = (rec.height + 3) / 4;
		let slice = bw * bh * bb;
		let depth_block_num = (rec.depth - 1) % 4 + 1;
		let block_depth = (rec.depth + 3) / 4;

		let mut gtf_pos = rec.swizzle_offset;
		for z in 0..block_depth {
			for y in 0..bh {
				for x in 0..bw {
					for d in 0..depth_block_num {
						let dds_pos = rec.dds_offset
							+ slice * (z * 4 + d)
							+ bb * (x + y * bw);
						self.xfer(gtf_pos, dds_pos, bb, Invert::None);
						gtf_pos += bb;
					}
				}
			}
		}
	}

	fn dxt_linear(&mut self, rec: &layout::Layout) {
		let bh = (rec.height + 3) / 4;
		for z in 0..rec.depth {
			for y in 0..bh {
				let gtf_pos = rec.linear_offset + (z * bh + y) * rec.pitch;
				let dds_pos = rec.dds_offset + (z * bh + y) * rec.dds_pitch;
				self.xfer(gtf_pos, dds_pos, rec.dds_pitch, Invert::None);
			}
		}
	}

	fn texels(&mut self, rec: &layout::Layout, raw: TextureFormat, swizzled: bool) {
		let inv = raw.invert();
		let mut cd = rec.color_depth;
		let mut width = rec.width;

		// wide float texels swizzle as runs of 32-bit words
		if swizzled && raw == TextureFormat::W32Z32Y32X32Float {
			width *= 4;
			cd = 4;
		} else if swizzled && raw == TextureFormat::W16Z16Y16X16Float {
			width *= 2;
			cd = 4;
		}
		if raw.is_raw_compressed() {
			width = (width + 1) & !1;
		}

		let (dds_depth, dds_pitch) = if rec.dds_expand {
			(rec.dds_depth, rec.dds_pitch)
		} else {
			(cd, width * cd)
		};
		let n = match inv {
			Invert::Swap32Even => 4,
			_ if rec.dds_expand => dds_depth,
			_ => cd,
		};

		let lw = width.trailing_zeros();
		let lh = rec.height.trailing_zeros();
		let lv = rec.depth.trailing_zeros();

		for z in 0..rec.depth {
			for y in 0..rec.height {
				for x in 0..width {
					if inv == Invert::Swap32Even && x % 2 != 0 {
						continue;
					}
					let gtf_pos = if swizzled {
						rec.swizzle_offset + swizzle::offset_3d(x, y, z, lw, lh, lv) * cd
					} else {
						rec.linear_offset + (z * rec.height + y) * rec.pitch + x * cd
					};
					let dds_pos = rec.dds_offset + (z * rec.height + y) * dds_pitch + x * dds_depth;
					self.xfer(gtf_pos, dds_pos, n, inv);
				}
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use celltex_dds::dds::{DDSCAPS, Dds, PixelFormat};
	use crate::format::REMAP;

	fn dds_bytes(header: &Dds, payload: &[u8]) -> Vec<u8> {
		let mut out = dds::write(header);
		out.extend_from_slice(payload);
		out
	}

	fn fill(n: usize) -> Vec<u8> {
		(0..n).map(|i| (i * 31 + 7) as u8).collect()
	}

	fn fourcc_pf(cc: [u8; 4]) -> PixelFormat {
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

	fn round_trip(data: &[u8], options: Options) {
		let gtf = dds_to_gtf(data, options).unwrap();
		let back = gtf_to_dds(&gtf, 0).unwrap();
		assert_eq!(&back[dds::HEADER_SIZE..], &data[dds::HEADER_SIZE..]);
	}

	#[test]
	fn minimal_dxt1_to_gtf() {
		let header = Dds {
			flags: DDSD::DEFAULT | DDSD::LINEARSIZE,
			width: 1,
			height: 1,
			pitch_or_linear_size: 8,
			pixel_format: fourcc_pf(*b"DXT1"),
			..Dds::default()
		};
		let out = dds_to_gtf(&dds_bytes(&header, &[0xFF; 8]), Options::default()).unwrap();
		assert_eq!(out.len(), 256);

		let parsed = gtf::read(&out).unwrap();
		assert_eq!(parsed.header, Header { version: gtf::VERSION, size: 128, num_texture: 1 });
		let tex = &parsed.textures[0];
		assert_eq!((tex.id, tex.offset_to_tex, tex.texture_size), (0, 128, 8));
		assert_eq!(tex.info.format, 0x86);
		assert_eq!(tex.info.mipmap, 1);
		assert_eq!(tex.info.dimension, 2);
		assert_eq!(tex.info.remap, REMAP::ORDER_ARGB);
		assert_eq!((tex.info.width, tex.info.height, tex.info.depth), (1, 1, 1));
		assert_eq!(&out[128..136], &[0xFF; 8]);
		assert!(out[136..].iter().all(|b| *b == 0));
	}

	#[test]
	fn minimal_dxt1_back_to_dds() {
		let header = Dds {
			flags: DDSD::DEFAULT | DDSD::LINEARSIZE,
			width: 1,
			height: 1,
			pitch_or_linear_size: 8,
			pixel_format: fourcc_pf(*b"DXT1"),
			..Dds::default()
		};
		let gtf = dds_to_gtf(&dds_bytes(&header, &[0xFF; 8]), Options::default()).unwrap();
		let back = gtf_to_dds(&gtf, 0).unwrap();
		let parsed = dds::read(&back).unwrap();
		assert_eq!(parsed.pixel_format.four_cc, *b"DXT1");
		assert_ne!(parsed.flags & DDSD::LINEARSIZE, 0);
		assert_eq!(parsed.pitch_or_linear_size, 8);
		assert_eq!(&back[128..], &[0xFF; 8]);
	}

	#[test]
	fn argb_linearize() {
		let payload = fill(64 * 64 * 4);
		let header = Dds { width: 64, height: 64, ..Dds::default() };
		let data = dds_bytes(&header, &payload);
		let out = dds_to_gtf(&data, Options { linearize: true, unnormalize: false }).unwrap();

		let info = gtf::read(&out).unwrap().textures[0].info;
		assert_eq!(info.format, TextureFormat::A8R8G8B8 as u8 | LINEAR);
		assert_eq!(info.pitch, 256);
		// 32-bit texels cross the endian boundary reversed
		assert_eq!(&out[128..132], &[payload[3], payload[2], payload[1], payload[0]]);
		round_trip(&data, Options { linearize: true, unnormalize: false });
	}

	#[test]
	fn unnormalize_sets_the_flag() {
		let header = Dds { width: 8, height: 8, ..Dds::default() };
		let data = dds_bytes(&header, &fill(8 * 8 * 4));
		let out = dds_to_gtf(&data, Options { linearize: false, unnormalize: true }).unwrap();
		let info = gtf::read(&out).unwrap().textures[0].info;
		assert_eq!(info.format, TextureFormat::A8R8G8B8 as u8 | UNNORMALIZE);
	}

	#[test]
	fn round_trip_dxt5_block() {
		let header = Dds {
			flags: DDSD::DEFAULT | DDSD::LINEARSIZE,
			width: 4,
			height: 4,
			pitch_or_linear_size: 16,
			pixel_format: fourcc_pf(*b"DXT5"),
			..Dds::default()
		};
		round_trip(&dds_bytes(&header, &fill(16)), Options::default());
	}

	#[test]
	fn round_trip_swizzled_argb() {
		let header = Dds { width: 8, height: 8, ..Dds::default() };
		round_trip(&dds_bytes(&header, &fill(8 * 8 * 4)), Options::default());
	}

	#[test]
	fn round_trip_mip_chain() {
		let header = Dds {
			flags: DDSD::DEFAULT | DDSD::MIPMAPCOUNT,
			width: 8,
			height: 8,
			mip_map_count: 4,
			..Dds::default()
		};
		round_trip(&dds_bytes(&header, &fill((64 + 16 + 4 + 1) * 4)), Options::default());
	}

	#[test]
	fn round_trip_cubemap() {
		let header = Dds {
			width: 4,
			height: 4,
			caps: DDSCAPS::TEXTURE | DDSCAPS::COMPLEX,
			caps2: DDSCAPS2::CUBEMAP | DDSCAPS2::CUBEMAP_ALLFACES,
			..Dds::default()
		};
		round_trip(&dds_bytes(&header, &fill(6 * 4 * 4 * 4)), Options::default());
	}

	#[test]
	fn round_trip_dxt_volume() {
		let header = Dds {
			flags: DDSD::DEFAULT | DDSD::DEPTH,
			width: 8,
			height: 8,
			depth: 8,
			caps: DDSCAPS::TEXTURE | DDSCAPS::COMPLEX,
			caps2: DDSCAPS2::VOLUME,
			pixel_format: fourcc_pf(*b"DXT1"),
			..Dds::default()
		};
		// 2×2 blocks of 8 bytes per slice, 8 slices
		let payload = fill(2 * 2 * 8 * 8);
		let data = dds_bytes(&header, &payload);
		let gtf = dds_to_gtf(&data, Options::default()).unwrap();
		// four depth slices pack per vtc super-block: the second block out
		// is the first block of slice 1
		assert_eq!(&gtf[128 + 8..128 + 16], &payload[32..40]);
		round_trip(&data, Options::default());
	}

	#[test]
	fn round_trip_swizzled_volume() {
		let header = Dds {
			flags: DDSD::DEFAULT | DDSD::DEPTH,
			width: 4,
			height: 4,
			depth: 4,
			caps: DDSCAPS::TEXTURE | DDSCAPS::COMPLEX,
			caps2: DDSCAPS2::VOLUME,
			..Dds::default()
		};
		round_trip(&dds_bytes(&header, &fill(4 * 4 * 4 * 4)), Options::default());
	}

	#[test]
	fn round_trip_npot_dxt_is_linear() {
		let header = Dds {
			flags: DDSD::DEFAULT | DDSD::LINEARSIZE,
			width: 12,
			height: 4,
			pitch_or_linear_size: 24,
			pixel_format: fourcc_pf(*b"DXT1"),
			..Dds::default()
		};
		let data = dds_bytes(&header, &fill(24));
		let out = dds_to_gtf(&data, Options::default()).unwrap();
		let info = gtf::read(&out).unwrap().textures[0].info;
		assert_ne!(info.format & LINEAR, 0);
		round_trip(&data, Options::default());
	}

	#[test]
	fn round_trip_wide_float_texels() {
		let header = Dds {
			width: 4,
			height: 4,
			pixel_format: fourcc_pf(113u32.to_le_bytes()),
			..Dds::default()
		};
		round_trip(&dds_bytes(&header, &fill(4 * 4 * 8)), Options::default());
	}

	#[test]
	fn round_trip_packed_pairs() {
		let header = Dds {
			width: 4,
			height: 2,
			pixel_format: fourcc_pf(*b"RGBG"),
			..Dds::default()
		};
		let data = dds_bytes(&header, &fill(4 * 2 * 2));
		let out = dds_to_gtf(&data, Options::default()).unwrap();
		let info = gtf::read(&out).unwrap().textures[0].info;
		// packed pairs never swizzle
		assert_ne!(info.format & LINEAR, 0);
		assert_eq!(info.remap, REMAP::ORDER_AGRB);
		round_trip(&data, Options::default());
	}

	#[test]
	fn gtf_survives_a_dds_detour() {
		let header = Dds { width: 8, height: 8, ..Dds::default() };
		let first = dds_to_gtf(&dds_bytes(&header, &fill(8 * 8 * 4)), Options::default()).unwrap();
		let detour = gtf_to_dds(&first, 0).unwrap();
		let second = dds_to_gtf(&detour, Options::default()).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn rgb24_expands_into_zeroed_texels() {
		let header = Dds {
			pixel_format: PixelFormat {
				flags: DDPF::RGB,
				four_cc: [0; 4],
				rgb_bit_count: 24,
				r_bit_mask: 0xFF0000,
				g_bit_mask: 0x00FF00,
				b_bit_mask: 0x0000FF,
				a_bit_mask: 0,
			},
			width: 2,
			height: 2,
			..Dds::default()
		};
		let payload = fill(2 * 2 * 3);
		let out = dds_to_gtf(&dds_bytes(&header, &payload), Options::default()).unwrap();
		let info = gtf::read(&out).unwrap().textures[0].info;
		assert_eq!(info.format, TextureFormat::D8R8G8B8 as u8);
		assert_eq!(info.remap, REMAP::ORDER_1RGB);
		// three source bytes land in each 4-byte texel, fourth stays zero
		assert_eq!(&out[128..132], &[payload[0], payload[1], payload[2], 0]);
	}

	#[test]
	fn r16f_expands_into_zeroed_texels() {
		let header = Dds {
			width: 4,
			height: 4,
			pixel_format: fourcc_pf(111u32.to_le_bytes()),
			..Dds::default()
		};
		let payload = fill(4 * 4 * 2);
		let out = dds_to_gtf(&dds_bytes(&header, &payload), Options::default()).unwrap();
		let info = gtf::read(&out).unwrap().textures[0].info;
		assert_eq!(info.format, TextureFormat::Y16X16Float as u8);
		// two source bytes swap into the low half of each 4-byte texel
		assert_eq!(&out[128..132], &[payload[1], payload[0], 0, 0]);
	}

	#[test]
	fn truncated_payload_is_rejected() {
		let header = Dds { width: 8, height: 8, ..Dds::default() };
		let data = dds_bytes(&header, &fill(10));
		assert!(matches!(dds_to_gtf(&data, Options::default()), Err(Error::DdsEof)));
	}

	#[test]
	fn partial_cubemap_is_rejected() {
		let header = Dds {
			width: 4,
			height: 4,
			caps2: DDSCAPS2::CUBEMAP | DDSCAPS2::CUBEMAP_POSITIVEX,
			..Dds::default()
		};
		let data = dds_bytes(&header, &fill(4 * 4 * 4));
		assert!(matches!(dds_to_gtf(&data, Options::default()), Err(Error::UnsupportedHeader(_))));
	}

	#[test]
	fn oversize_dimensions_are_rejected() {
		let header = Dds { width: 8192, height: 4, ..Dds::default() };
		let data = dds_bytes(&header, &[]);
		assert!(matches!(dds_to_gtf(&data, Options::default()), Err(Error::UnsupportedHeader(_))));

		let volume = Dds {
			flags: DDSD::DEFAULT | DDSD::DEPTH,
			width: 1024,
			height: 1024,
			depth: 1024,
			caps2: DDSCAPS2::VOLUME,
			..Dds::default()
		};
		let data = dds_bytes(&volume, &[]);
		assert!(matches!(dds_to_gtf(&data, Options::default()), Err(Error::UnsupportedHeader(_))));
	}

	#[test]
	fn excess_mipmaps_are_rejected() {
		let header = Dds {
			flags: DDSD::DEFAULT | DDSD::MIPMAPCOUNT,
			width: 8,
			height: 8,
			mip_map_count: 5,
			..Dds::default()
		};
		let data = dds_bytes(&header, &fill(400));
		assert!(matches!(dds_to_gtf(&data, Options::default()), Err(Error::UnsupportedHeader(_))));
	}

	#[test]
	fn dx10_is_rejected() {
		let header = Dds {
			width: 4,
			height: 4,
			pixel_format: fourcc_pf(*b"DX10"),
			..Dds::default()
		};
		let data = dds_bytes(&header, &[]);
		assert!(matches!(
			dds_to_gtf(&data, Options::default()),
			Err(Error::Dds(dds::Error::Dx10Unsupported)),
		));
	}

	#[test]
	fn missing_texture_id() {
		let header = Dds { width: 8, height: 8, ..Dds::default() };
		let gtf = dds_to_gtf(&dds_bytes(&header, &fill(8 * 8 * 4)), Options::default()).unwrap();
		assert!(matches!(
			gtf_to_dds(&gtf, 5),
			Err(Error::Gtf(gtf::Error::TextureNotFound(5))),
		));
	}

	#[test]
	fn parse_is_idempotent() {
		let header = Dds { width: 8, height: 8, ..Dds::default() };
		let data = dds_bytes(&header, &fill(8 * 8 * 4));
		let a = prepare_dds(&data, Options::default()).unwrap();
		let b = prepare_dds(&data, Options::default()).unwrap();
		assert_eq!(a.info, b.info);
		assert_eq!(a.plan, b.plan);
	}
}
