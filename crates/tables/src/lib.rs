//! Element, isotope and NMR reference tables
//!
#![doc = include_str!("../readme.md")]
//!
//! ## Quickstart example
//!
//! ```rust, no_run
//! # use nmrdata_tables::{read_elements, read_nmr_json};
//! // Element table in either JSON or CSV format, inferred from the extension
//! let elements = read_elements("path/to/elements.csv").unwrap();
//!
//! // NMR properties keyed by symbol and mass number
//! let nmr = read_nmr_json("path/to/nmr.json").unwrap();
//!
//! // Spin of hydrogen-1, if the table knows about it
//! let spin = nmr.isotope("H", 1).and_then(|data| data.spin);
//! ```

// Split into subfiles for development, but anything important is re-exported
mod element;
mod error;
mod nmr;
mod reader;

#[doc(inline)]
pub use element::{Element, ElementTable, Isotope};

#[doc(inline)]
pub use nmr::{NmrData, NmrIsotopes, NmrTable};

#[doc(inline)]
pub use reader::{
    elements_from_csv_str, elements_from_json_str, nmr_from_json_str, read_elements,
    read_elements_csv, read_elements_json, read_nmr_json,
};

#[doc(inline)]
pub use error::{Error, Result};
