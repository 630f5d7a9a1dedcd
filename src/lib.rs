//! `nmrdata` compiles periodic table and NMR reference data into a single
//! data module
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of workspace crates.
#[doc(inline)]
pub use nmrdata_tables as tables;

#[doc(inline)]
pub use nmrdata_compile as compile;
