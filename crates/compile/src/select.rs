//! Isotope selection for each element

// internal modules
use crate::record::{CompiledTable, ElementRecord, IsotopeRecord};

// nmrdata modules
use nmrdata_tables::{Element, NmrTable};

// external crates
use log::{debug, trace, warn};

/// Symbol of the free neutron entry in the element table
pub const NEUTRON_SYMBOL: &str = "n";

/// Symbol used in place of the free neutron
pub const MUONIUM_SYMBOL: &str = "Mu";

/// Mass given to every muonium isotope (u)
pub const MUONIUM_MASS: f64 = 0.113428913072988;

/// Compile every element in the table
///
/// Each element is passed through [select_element()] in order, and elements
/// with nothing worth keeping are left out entirely.
///
/// ```rust
/// # use nmrdata_compile::compile;
/// # use nmrdata_tables::{elements_from_csv_str, nmr_from_json_str};
/// let elements = elements_from_csv_str(
///     "symbol,number,isotope,mass,abundance
/// C,6,12,12.0,0.9893
/// C,6,13,13.0033548378,0.0107
/// Tc,43,99,98.9062546,0.0",
/// )
/// .unwrap();
/// let nmr = nmr_from_json_str(r#"{ "C": { "13": { "I": 0.5 } } }"#).unwrap();
///
/// let table = compile(&elements, &nmr);
///
/// // Technetium has no natural isotopes
/// assert_eq!(table.len(), 1);
///
/// let carbon = table.get("C").unwrap();
/// assert_eq!(carbon.most_abundant_isotope.as_deref(), Some("12"));
/// assert_eq!(carbon.most_abundant_nmr_isotope.as_deref(), Some("13"));
/// assert_eq!(carbon.most_abundant_quadrupolar_isotope, None);
/// ```
pub fn compile(elements: &[Element], nmr: &NmrTable) -> CompiledTable {
    let table: CompiledTable = elements
        .iter()
        .filter_map(|element| select_element(element, nmr))
        .collect();

    // NMR data under a symbol no element resolves to never makes it out
    for symbol in nmr.symbols() {
        if !elements.iter().any(|e| output_symbol(&e.symbol) == symbol) {
            warn!("NMR data for \"{symbol}\" does not match any element");
        }
    }

    debug!("Compiled {} of {} elements", table.len(), elements.len());
    table
}

/// Select the isotopes worth keeping for a single element
///
/// Isotopes are visited in source order:
///
/// - Isotopes with zero abundance are skipped
/// - Isotopes with no known spin are dropped if they are less abundant than
///   the smaller of the most abundant NMR-active and most abundant
///   quadrupolar isotopes found so far, otherwise kept with a spin of 0
/// - Every kept isotope can become the most abundant overall, the most
///   abundant with non-zero spin, or the most abundant with a non-zero
///   quadrupole moment
///
/// Because the comparison uses running maxima, the result depends on the
/// isotope order. A mass number listed twice keeps its first position but
/// takes the data of the last occurrence.
///
/// The free neutron is renamed to muonium, with every mass fixed to
/// [MUONIUM_MASS] and NMR data looked up under [MUONIUM_SYMBOL].
///
/// Returns `None` if no isotope was kept.
///
/// ```rust
/// # use nmrdata_compile::select_element;
/// # use nmrdata_tables::{Element, Isotope, NmrData, NmrTable};
/// let element = Element {
///     symbol: "He".to_string(),
///     number: 2,
///     isotopes: vec![
///         Isotope { isotope: 3, mass: 3.0160293097, abundance: 0.00000134 },
///         Isotope { isotope: 4, mass: 4.0026032497, abundance: 0.99999866 },
///     ],
/// };
///
/// let mut nmr = NmrTable::new();
/// nmr.insert("He", 3, NmrData { spin: Some(0.5), gamma: Some(-203789469.0), quadrupole: Some(0.0) });
///
/// let record = select_element(&element, &nmr).unwrap();
/// assert_eq!(record.most_abundant_isotope.as_deref(), Some("4"));
/// assert_eq!(record.most_abundant_nmr_isotope.as_deref(), Some("3"));
///
/// // Helium-4 has no NMR data and was given a spin of 0
/// assert_eq!(record.isotope(4).unwrap().spin, 0.0);
/// ```
pub fn select_element(element: &Element, nmr: &NmrTable) -> Option<ElementRecord> {
    let symbol = output_symbol(&element.symbol);
    let is_muonium = symbol == MUONIUM_SYMBOL;

    let mut most = Leader::default();
    let mut most_nmr = Leader::default();
    let mut most_quadrupolar = Leader::default();

    let mut isotopes: Vec<IsotopeRecord> = Vec::new();

    for isotope in &element.isotopes {
        let mass_number = isotope.isotope;
        let abundance = isotope.abundance;

        if !isotope.is_natural() {
            trace!("Skipping {symbol}{mass_number}, does not occur in nature");
            continue;
        }

        let data = nmr.isotope(symbol, mass_number);
        let gamma = data.and_then(|d| d.gamma);
        let quadrupole = data.and_then(|d| d.quadrupole);

        let spin = match data.and_then(|d| d.spin) {
            Some(spin) => spin,
            None if abundance < most_nmr.abundance.min(most_quadrupolar.abundance) => {
                trace!("Dropping {symbol}{mass_number}, no spin data and not abundant enough");
                continue;
            }
            None => 0.0,
        };

        most.offer(mass_number, abundance);

        if spin != 0.0 {
            most_nmr.offer(mass_number, abundance);
        }

        if matches!(quadrupole, Some(q) if q != 0.0) {
            most_quadrupolar.offer(mass_number, abundance);
        }

        let record = IsotopeRecord {
            mass_number,
            mass: if is_muonium { MUONIUM_MASS } else { isotope.mass },
            abundance,
            spin,
            gamma,
            quadrupole,
        };

        // Mass numbers are keys, a repeat replaces the earlier record in place
        match isotopes
            .iter_mut()
            .find(|i| i.mass_number == mass_number)
        {
            Some(existing) => {
                trace!("Replacing repeated {symbol}{mass_number}");
                *existing = record;
            }
            None => isotopes.push(record),
        }
    }

    if most.mass_number.is_none() {
        debug!("No usable isotope data for {symbol}, element dropped");
        return None;
    }

    let record = ElementRecord {
        symbol: symbol.to_string(),
        atomic_number: element.number,
        isotopes,
        most_abundant_isotope: most.label(),
        most_abundant_nmr_isotope: most_nmr.label(),
        most_abundant_quadrupolar_isotope: most_quadrupolar.label(),
    };

    debug!("{record}");
    Some(record)
}

/// Symbol an element is stored and looked up under
fn output_symbol(symbol: &str) -> &str {
    if symbol == NEUTRON_SYMBOL {
        MUONIUM_SYMBOL
    } else {
        symbol
    }
}

/// Running maximum of abundance over the isotopes offered so far
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Leader {
    mass_number: Option<u16>,
    abundance: f64,
}

impl Leader {
    /// Take the lead only with a strictly greater abundance
    fn offer(&mut self, mass_number: u16, abundance: f64) {
        if abundance > self.abundance {
            self.mass_number = Some(mass_number);
            self.abundance = abundance;
        }
    }

    fn label(&self) -> Option<String> {
        self.mass_number.map(|a| a.to_string())
    }
}
