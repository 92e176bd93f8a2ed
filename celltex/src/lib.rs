//! A bidirectional codec between two texture containers: little-endian
//! dds files and the big-endian gtf files the PS3 GPU consumes. Headers
//! are translated, payloads are moved byte-exactly — swizzled, endian
//! swapped or block reordered as the format demands — and nothing is ever
//! decoded to pixels.

pub mod blit;
pub mod classify;
pub mod convert;
pub mod format;
pub mod gtf;
pub mod layout;
pub mod pack;
pub mod swizzle;
pub mod synth;
