//! Turns a texture descriptor into the ordered table of per-mip, per-face
//! sub-image records the byte mover walks. Faces are outermost, mips
//! innermost, matching the payload order of both containers.

use crate::format::TextureFormat;
use crate::gtf::{TextureInfo, align128};

/// One sub-image: a single mip level of a single cube face, all of its
/// depth slices included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
	pub width: usize,
	pub height: usize,
	pub depth: usize,
	/// Row stride of the linear gtf layout for this mip; block rows for
	/// the dxtn formats.
	pub pitch: usize,
	/// Bytes per gtf texel, or per block for the dxtn formats.
	pub color_depth: usize,
	/// Bytes per dds texel when the dds payload is narrower than the gtf
	/// texel (see [`Layout::dds_expand`]); zero otherwise.
	pub dds_depth: usize,
	/// The dds payload needs widening into the gtf texel: `R16F` carries
	/// 2-byte texels into a 4-byte format, 24-bit rgb carries 3 bytes.
	pub dds_expand: bool,
	pub dds_offset: usize,
	pub dds_size: usize,
	pub dds_pitch: usize,
	pub linear_offset: usize,
	pub linear_size: usize,
	pub swizzle_offset: usize,
	pub swizzle_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
	pub layouts: Vec<Layout>,
	/// Total dds payload span.
	pub dds_size: usize,
	/// Total gtf payload span for the descriptor's active layout mode.
	pub gtf_size: usize,
}

/// `dds_depth` is the dds-side texel width when it differs from the gtf
/// texel (0 for none); only the dds→gtf direction ever passes nonzero.
pub fn plan(info: &TextureInfo, raw: TextureFormat, dds_depth: usize) -> Plan {
	let swizzled = info.is_swizzled();
	let faces = info.faces();
	let cd = raw.pixel_depth();

	let mut layouts = Vec::with_capacity(faces * info.mipmap as usize);
	let mut dds_offset = 0;
	let mut linear_offset = 0;
	let mut swizzle_offset = 0;

	for face in 0..faces {
		for mip in 0..info.mipmap as u32 {
			let w = (info.width as usize) >> mip;
			let h = (info.height as usize) >> mip;
			let v = (info.depth as usize) >> mip;
			if w == 0 && h == 0 && v == 0 {
				break;
			}
			let (w, h, v) = (w.max(1), h.max(1), v.max(1));
			let pitch = raw.pitch(w);

			let (mut dds_pitch, mut dds_size, linear_size, swizzle_size);
			if raw.is_dxtn() {
				let rows = (h + 3) / 4;
				dds_pitch = (w + 3) / 4 * cd;
				dds_size = dds_pitch * rows * v;
				linear_size = pitch * rows * v;
				swizzle_size = dds_size;
			} else if raw.is_raw_compressed() {
				dds_pitch = (w + 1) / 2 * 4;
				dds_size = dds_pitch * h * v;
				linear_size = pitch * h * v;
				swizzle_size = dds_size;
			} else {
				dds_pitch = w * cd;
				dds_size = dds_pitch * h * v;
				linear_size = pitch * h * v;
				swizzle_size = dds_size;
			}
			if dds_depth != 0 {
				dds_pitch = w * dds_depth;
				dds_size = dds_pitch * h * v;
			}

			// each face of a swizzled cubemap starts on a fresh 128-byte
			// boundary
			if swizzled && face > 0 && mip == 0 {
				swizzle_offset = align128(swizzle_offset as u64) as usize;
			}

			layouts.push(Layout {
				width: w,
				height: h,
				depth: v,
				pitch,
				color_depth: cd,
				dds_depth,
				dds_expand: dds_depth != 0,
				dds_offset,
				dds_size,
				dds_pitch,
				linear_offset,
				linear_size,
				swizzle_offset,
				swizzle_size,
			});

			dds_offset += dds_size;
			linear_offset += linear_size;
			swizzle_offset += swizzle_size;
		}
	}

	Plan {
		layouts,
		dds_size: dds_offset,
		gtf_size: if swizzled { swizzle_offset } else { linear_offset },
	}
}
