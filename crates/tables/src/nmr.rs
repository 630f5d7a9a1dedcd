use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// NMR properties of every isotope known for one element
///
/// Keys are mass numbers as strings, e.g. `"13"`.
pub type NmrIsotopes = BTreeMap<String, NmrData>;

/// Nuclear properties relevant to NMR for a single isotope
///
/// All fields are optional. A missing key and an explicit JSON `null` are
/// both treated as unknown.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct NmrData {
    /// Nuclear spin quantum number
    #[serde(rename = "I")]
    pub spin: Option<f64>,
    /// Gyromagnetic ratio (rad/s/T)
    pub gamma: Option<f64>,
    /// Quadrupole moment (mb)
    #[serde(rename = "Q")]
    pub quadrupole: Option<f64>,
}

/// NMR data for every element, keyed by element symbol
///
/// Deserialises directly from the JSON mapping of symbol to mass number to
/// [NmrData].
///
/// ```rust
/// # use nmrdata_tables::{nmr_from_json_str, NmrData};
/// let table = nmr_from_json_str(r#"{ "C": { "13": { "I": 0.5, "gamma": 67282840.0 } } }"#)
///     .unwrap();
///
/// let carbon13 = table.isotope("C", 13).unwrap();
/// assert_eq!(carbon13.spin, Some(0.5));
/// assert_eq!(carbon13.quadrupole, None);
///
/// // Nothing known about carbon-12
/// assert!(table.isotope("C", 12).is_none());
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(transparent)]
pub struct NmrTable {
    elements: BTreeMap<String, NmrIsotopes>,
}

impl NmrTable {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the data for one isotope
    pub fn insert(&mut self, symbol: &str, mass_number: u16, data: NmrData) {
        self.elements
            .entry(symbol.to_string())
            .or_default()
            .insert(mass_number.to_string(), data);
    }

    /// All isotope data for an element symbol
    pub fn element(&self, symbol: &str) -> Option<&NmrIsotopes> {
        self.elements.get(symbol)
    }

    /// Data for a single isotope, looked up by symbol and mass number
    pub fn isotope(&self, symbol: &str, mass_number: u16) -> Option<&NmrData> {
        self.element(symbol)
            .and_then(|isotopes| isotopes.get(&mass_number.to_string()))
    }

    /// Every element symbol in the table
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    /// Number of elements in the table
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the table has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
