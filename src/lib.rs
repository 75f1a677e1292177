//! # bmpfx
//!
//! Decode a 24-bit uncompressed BMP into floating-point pixels, run a
//! sequence of named filters over it, and encode the result back to BMP.
//!
//! ## Supported Format
//!
//! One BMP profile: 14-byte file header, 40-byte `BITMAPINFOHEADER`,
//! 24 bits per pixel, no compression, bottom-up rows padded to 4 bytes.
//! Rows are kept in file order in memory; nothing is flipped.
//!
//! ## Non-Goals
//!
//! - Compressed BMP, palettes, bit depths other than 24
//! - Top-down (negative height) BMPs: rejected, not guessed at
//! - Other image formats
//! - Streaming decode; the whole image lives in memory
//!
//! ## Usage
//!
//! ```no_run
//! use bmpfx::{DecodeRequest, EncodeRequest, FilterSpec, Pipeline};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let mut image = DecodeRequest::new(data).decode(Unstoppable)?;
//!
//! let specs = [
//!     FilterSpec::new("crop", vec![640.0, 480.0]),
//!     FilterSpec::new("blur", vec![1.5]),
//! ];
//! let report = Pipeline::default().apply(&mut image, &specs, Unstoppable)?;
//! assert!(report.all_applied());
//!
//! let bmp = EncodeRequest::new().encode(&image, Unstoppable)?;
//! # let _ = bmp;
//! # Ok::<(), bmpfx::BitmapError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod image;
mod info;
mod limits;
mod pixel;

pub mod bmp;
pub mod filter;

mod decode;
mod encode;

// Re-exports
pub use bmp::Strictness;
pub use decode::{DecodeRequest, decode, read_file, read_file_with};
pub use encode::{EncodeRequest, encode, write_file};
pub use enough::{Stop, Unstoppable};
pub use error::{BitmapError, FilterError};
pub use filter::{FilterRegistry, FilterSpec, Pipeline, PipelineReport, parse_filter_args};
pub use image::Image;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::Color;
