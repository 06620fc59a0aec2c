//! Top-level facade crate for coinquote.
//!
//! Re-exports the core types and the exporter library so users can depend on a single crate.

pub mod core {
    pub use coinquote_core::*;
}

pub mod exporter {
    pub use coinquote_exporter::*;
}
