//! Visual styling derived from the configured palette.
//!
//! Every style the interface draws with lives on [`Theme`], which is built
//! once from the session [`Palette`](snp_core::Palette) and then only read.

mod theme;

pub use theme::{Theme, parse_color};
