use serde::{Deserialize, Serialize};
use std::format as f;

/// Type alias for `Vec<Element>`, in source order
pub type ElementTable = Vec<Element>;

/// A chemical element and every isotope listed for it
///
/// The `isotopes` are in the order given by the source table. This order
/// matters to the compiler and is never changed here.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Element {
    /// Element symbol e.g. 'H', 'Co', or 'n' for the free neutron
    pub symbol: String,
    /// Atomic number (Z)
    pub number: u8,
    /// All isotopes, including those that do not occur naturally
    #[serde(default)]
    pub isotopes: Vec<Isotope>,
}

impl Element {
    /// Display name for one of this element's isotopes, e.g. `Co59`
    ///
    /// ```rust
    /// # use nmrdata_tables::{Element, Isotope};
    /// let element = Element {
    ///     symbol: "Co".to_string(),
    ///     number: 27,
    ///     isotopes: vec![],
    /// };
    /// let isotope = Isotope { isotope: 59, mass: 58.9332002, abundance: 1.0 };
    /// assert_eq!(element.nuclide_name(&isotope), "Co59");
    /// ```
    pub fn nuclide_name(&self, isotope: &Isotope) -> String {
        f!("{}{}", self.symbol, isotope.isotope)
    }

    /// Find an isotope by mass number
    pub fn isotope(&self, mass_number: u16) -> Option<&Isotope> {
        self.isotopes.iter().find(|i| i.isotope == mass_number)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} (Z={}, {} isotopes)",
            self.symbol,
            self.number,
            self.isotopes.len()
        )
    }
}

/// Mass and abundance data for a single isotope
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Isotope {
    /// Mass number (Z+N, total nucleons)
    pub isotope: u16,
    /// Atomic mass (u)
    pub mass: f64,
    /// Natural abundance, zero for isotopes that do not occur in nature
    pub abundance: f64,
}

impl Isotope {
    /// Check if the isotope occurs in nature at all
    pub fn is_natural(&self) -> bool {
        self.abundance != 0.0
    }
}
