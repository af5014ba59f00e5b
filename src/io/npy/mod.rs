pub mod reader;
pub mod writer;

const MAGIC: &[u8; 6] = b"\x93NUMPY";

/// Header plus preamble is padded to a multiple of this many bytes.
const ALIGN: usize = 64;
