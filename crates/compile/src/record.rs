//! Compiled per-element records

use crate::keyed::{self, Keyed};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A naturally occurring isotope retained in the output
///
/// Unlike the source NMR data, `spin` is always defined here. Isotopes kept
/// without any known spin are given a spin of 0, written to JSON as `0.0`
/// since every spin is a float. Consumers read `0` and `0.0` the same.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IsotopeRecord {
    /// Mass number (Z+N, total nucleons)
    #[serde(rename = "A")]
    pub mass_number: u16,
    /// Atomic mass (u)
    pub mass: f64,
    /// Natural abundance, never zero
    pub abundance: f64,
    /// Nuclear spin quantum number
    pub spin: f64,
    /// Gyromagnetic ratio (rad/s/T)
    pub gamma: Option<f64>,
    /// Quadrupole moment (mb)
    #[serde(rename = "Q")]
    pub quadrupole: Option<f64>,
}

impl IsotopeRecord {
    /// Mass number as the string label used for keys and pointers
    pub fn label(&self) -> String {
        self.mass_number.to_string()
    }

    /// Check for a non-zero spin
    pub fn is_nmr_active(&self) -> bool {
        self.spin != 0.0
    }

    /// Check for a known, non-zero quadrupole moment
    pub fn is_quadrupolar(&self) -> bool {
        matches!(self.quadrupole, Some(q) if q != 0.0)
    }
}

impl Keyed for IsotopeRecord {
    fn key(&self) -> String {
        self.label()
    }
}

/// Everything kept for a single element
///
/// Field names when serialised follow the data module consumed downstream,
/// so `atomic_number` is written as `Z`, `most_abundant_isotope` as `maxiso`,
/// and so on. The `isotopes` are written as an object keyed by mass number
/// in the order they were found.
///
/// The three `most_abundant_*` fields hold mass number labels of isotopes
/// present in `isotopes`, or `None` if nothing qualified.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ElementRecord {
    /// Element symbol, `Mu` in place of the free neutron
    pub symbol: String,
    /// Atomic number
    #[serde(rename = "Z")]
    pub atomic_number: u8,
    /// Retained isotopes in discovery order
    #[serde(with = "keyed")]
    pub isotopes: Vec<IsotopeRecord>,
    /// Most abundant retained isotope
    #[serde(rename = "maxiso")]
    pub most_abundant_isotope: Option<String>,
    /// Most abundant isotope with non-zero spin
    #[serde(rename = "maxiso_NMR")]
    pub most_abundant_nmr_isotope: Option<String>,
    /// Most abundant isotope with a non-zero quadrupole moment
    #[serde(rename = "maxiso_Q")]
    pub most_abundant_quadrupolar_isotope: Option<String>,
}

impl ElementRecord {
    /// Find a retained isotope by mass number
    pub fn isotope(&self, mass_number: u16) -> Option<&IsotopeRecord> {
        self.isotopes.iter().find(|i| i.mass_number == mass_number)
    }

    /// The isotope named by `most_abundant_isotope`
    pub fn most_abundant(&self) -> Option<&IsotopeRecord> {
        self.find_label(&self.most_abundant_isotope)
    }

    /// The isotope named by `most_abundant_nmr_isotope`
    pub fn most_abundant_nmr(&self) -> Option<&IsotopeRecord> {
        self.find_label(&self.most_abundant_nmr_isotope)
    }

    /// The isotope named by `most_abundant_quadrupolar_isotope`
    pub fn most_abundant_quadrupolar(&self) -> Option<&IsotopeRecord> {
        self.find_label(&self.most_abundant_quadrupolar_isotope)
    }

    fn find_label(&self, label: &Option<String>) -> Option<&IsotopeRecord> {
        let label = label.as_deref()?;
        self.isotopes.iter().find(|i| i.label() == label)
    }
}

impl Keyed for ElementRecord {
    fn key(&self) -> String {
        self.symbol.clone()
    }
}

impl std::fmt::Display for ElementRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let labels: Vec<String> = self.isotopes.iter().map(IsotopeRecord::label).collect();
        writeln!(f, "{} (Z={})", self.symbol, self.atomic_number)?;
        writeln!(f, "  Isotopes         {}", labels.join(" "))?;
        writeln!(f, "  Most abundant    {}", display(&self.most_abundant_isotope))?;
        writeln!(
            f,
            "  Most abundant I  {}",
            display(&self.most_abundant_nmr_isotope)
        )?;
        write!(
            f,
            "  Most abundant Q  {}",
            display(&self.most_abundant_quadrupolar_isotope)
        )
    }
}

fn display(label: &Option<String>) -> &str {
    label.as_deref().unwrap_or("none")
}

/// Every compiled [ElementRecord], in element table order
///
/// Serialises to a JSON object keyed by element symbol. Symbols are unique,
/// inserting a record for a symbol already present replaces it in place.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CompiledTable {
    elements: Vec<ElementRecord>,
}

impl CompiledTable {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, replacing any existing record with the same symbol
    pub fn insert(&mut self, record: ElementRecord) {
        match self.elements.iter_mut().find(|e| e.symbol == record.symbol) {
            Some(existing) => *existing = record,
            None => self.elements.push(record),
        }
    }

    /// Find a record by symbol
    pub fn get(&self, symbol: &str) -> Option<&ElementRecord> {
        self.elements.iter().find(|e| e.symbol == symbol)
    }

    /// Iterate over every record in order
    pub fn iter(&self) -> std::slice::Iter<'_, ElementRecord> {
        self.elements.iter()
    }

    /// Every symbol in order
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|e| e.symbol.as_str())
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if no elements were compiled
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl FromIterator<ElementRecord> for CompiledTable {
    fn from_iter<I: IntoIterator<Item = ElementRecord>>(iter: I) -> Self {
        let mut table = CompiledTable::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

impl<'a> IntoIterator for &'a CompiledTable {
    type Item = &'a ElementRecord;
    type IntoIter = std::slice::Iter<'a, ElementRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Serialize for CompiledTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        keyed::serialize(&self.elements, serializer)
    }
}

impl<'de> Deserialize<'de> for CompiledTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = keyed::deserialize(deserializer)?;
        Ok(CompiledTable { elements })
    }
}
