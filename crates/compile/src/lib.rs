//! Isotope selection and data module output
//!
//! This crate turns the element and NMR reference tables from
//! `nmrdata-tables` into one record per element, then writes the lot as a
//! JavaScript module for the viewer that consumes it.
//!
//! ## Quickstart example
//!
//! ```rust, no_run
//! # use nmrdata_compile::{compile, to_module};
//! # use nmrdata_tables::{read_elements, read_nmr_json};
//! let elements = read_elements("path/to/elements.csv").unwrap();
//! let nmr = read_nmr_json("path/to/nmr.json").unwrap();
//!
//! // One record per element with at least one natural isotope
//! let table = compile(&elements, &nmr);
//!
//! // `const nmrData = {...};` followed by a default export
//! println!("{}", to_module(&table).unwrap());
//! ```
//!
//! ## Selection rules
//!
//! For every element the isotopes are visited in source order. Isotopes that
//! do not occur in nature are ignored. Isotopes with no spin data are only kept
//! while they are at least as abundant as the smaller of the most abundant
//! NMR-active and most abundant quadrupolar isotopes seen so far, and are then
//! given a spin of 0. See [select_element()] for details.
//!
//! Each [ElementRecord] points at three isotopes by mass number:
//!
//! | Field | Key | Meaning |
//! | ----- | --- | ------- |
//! | `most_abundant_isotope` | `maxiso` | Highest abundance of all kept isotopes |
//! | `most_abundant_nmr_isotope` | `maxiso_NMR` | Highest abundance with non-zero spin |
//! | `most_abundant_quadrupolar_isotope` | `maxiso_Q` | Highest abundance with non-zero Q |
//!
//! ## Muonium
//!
//! There is no use for free neutrons, so the `n` entry of the element table
//! is written as muonium (`Mu`) with a fixed mass of [MUONIUM_MASS].

mod error;
mod keyed;
mod record;
mod select;
mod writer;

#[doc(inline)]
pub use record::{CompiledTable, ElementRecord, IsotopeRecord};

#[doc(inline)]
pub use select::{compile, select_element, MUONIUM_MASS, MUONIUM_SYMBOL, NEUTRON_SYMBOL};

#[doc(inline)]
pub use writer::{
    from_json_str, from_module_str, to_json, to_module, write_json, write_module,
    MODULE_CONSTANT,
};

#[doc(inline)]
pub use error::{Error, Result};
