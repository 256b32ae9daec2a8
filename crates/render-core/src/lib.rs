//! Core rendering abstractions for PDF generation.
//!
//! This crate provides the pieces shared by PDF rendering backends:
//! - `DocumentRenderer` trait for abstracting PDF writing operations
//! - Error types for rendering operations
//! - WinAnsi text encoding and coordinate conversion

mod error;
mod info;
mod traits;
pub mod encoding;
pub mod utils;

pub use encoding::{EncodingPolicy, decode_win_ansi, encode_win_ansi};
pub use error::RenderError;
pub use info::DocumentInfo;
pub use traits::DocumentRenderer;
