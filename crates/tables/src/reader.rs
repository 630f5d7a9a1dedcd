//! Read operations for the element and NMR tables

// standard library
use std::format as f;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// crate modules
use crate::element::{Element, ElementTable, Isotope};
use crate::error::{Error, Result};
use crate::nmr::NmrTable;

// external crates
use log::{debug, info};
use serde::Deserialize;

/// Read an element table, inferring the format from the file extension
///
/// Files ending in `.json` are read with [read_elements_json()] and files
/// ending in `.csv` with [read_elements_csv()]. The check is case insensitive.
///
/// ```rust, no_run
/// # use nmrdata_tables::read_elements;
/// let elements = read_elements("path/to/elements.json").unwrap();
/// ```
pub fn read_elements<P: AsRef<Path>>(path: P) -> Result<ElementTable> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("json") => read_elements_json(path),
        Some("csv") => read_elements_csv(path),
        _ => Err(Error::UnknownFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Read a JSON array of [Element]s
///
/// ```rust, no_run
/// # use nmrdata_tables::read_elements_json;
/// let elements = read_elements_json("path/to/elements.json").unwrap();
/// ```
pub fn read_elements_json<P: AsRef<Path>>(path: P) -> Result<ElementTable> {
    info!("Reading element table {:?}", path.as_ref());
    let reader = BufReader::new(File::open(path)?);
    let elements: ElementTable = serde_json::from_reader(reader)?;
    validate(&elements)?;
    Ok(elements)
}

/// Read a flat CSV element table with one isotope per row
///
/// The header must contain `symbol`, `number`, `isotope`, `mass` and
/// `abundance`. Consecutive rows with the same symbol make up one element.
///
/// ```rust, no_run
/// # use nmrdata_tables::read_elements_csv;
/// let elements = read_elements_csv("path/to/elements.csv").unwrap();
/// ```
pub fn read_elements_csv<P: AsRef<Path>>(path: P) -> Result<ElementTable> {
    info!("Reading element table {:?}", path.as_ref());
    let reader = csv_reader().from_path(path)?;
    elements_from_csv_reader(reader)
}

/// Read the NMR table from a JSON file
///
/// ```rust, no_run
/// # use nmrdata_tables::read_nmr_json;
/// let nmr = read_nmr_json("path/to/nmr.json").unwrap();
/// ```
pub fn read_nmr_json<P: AsRef<Path>>(path: P) -> Result<NmrTable> {
    info!("Reading NMR table {:?}", path.as_ref());
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Parse an element table from a JSON string
///
/// ```rust
/// # use nmrdata_tables::elements_from_json_str;
/// let text = r#"[
///   { "symbol": "He", "number": 2, "isotopes": [
///     { "isotope": 3, "mass": 3.0160293097, "abundance": 0.00000134 },
///     { "isotope": 4, "mass": 4.0026032497, "abundance": 0.99999866 }
///   ]}
/// ]"#;
///
/// let elements = elements_from_json_str(text).unwrap();
/// assert_eq!(elements[0].isotopes[1].isotope, 4);
/// ```
pub fn elements_from_json_str(text: &str) -> Result<ElementTable> {
    let elements: ElementTable = serde_json::from_str(text)?;
    validate(&elements)?;
    Ok(elements)
}

/// Parse a flat CSV element table from a string
///
/// ```rust
/// # use nmrdata_tables::elements_from_csv_str;
/// let text = "symbol,number,isotope,mass,abundance
/// Li,3,6,6.0151223,0.0759
/// Li,3,7,7.016004,0.9241";
///
/// let elements = elements_from_csv_str(text).unwrap();
/// assert_eq!(elements.len(), 1);
/// assert_eq!(elements[0].isotopes.len(), 2);
/// ```
pub fn elements_from_csv_str(text: &str) -> Result<ElementTable> {
    elements_from_csv_reader(csv_reader().from_reader(text.as_bytes()))
}

/// Parse the NMR table from a JSON string
pub fn nmr_from_json_str(text: &str) -> Result<NmrTable> {
    Ok(serde_json::from_str(text)?)
}

/// A single row of the flat CSV table
#[derive(Deserialize, Debug)]
struct IsotopeRow {
    symbol: String,
    number: u8,
    isotope: u16,
    mass: f64,
    abundance: f64,
}

impl From<IsotopeRow> for Isotope {
    fn from(row: IsotopeRow) -> Self {
        Isotope {
            isotope: row.isotope,
            mass: row.mass,
            abundance: row.abundance,
        }
    }
}

fn csv_reader() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All).comment(Some(b'#'));
    builder
}

fn elements_from_csv_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<ElementTable> {
    let mut elements = ElementTable::new();

    for row in reader.deserialize::<IsotopeRow>() {
        push_row(&mut elements, row?)?;
    }

    validate(&elements)?;
    Ok(elements)
}

/// Append a row to the last element, or start a new one
fn push_row(elements: &mut ElementTable, row: IsotopeRow) -> Result<()> {
    if let Some(element) = elements.last_mut().filter(|e| e.symbol == row.symbol) {
        if element.number != row.number {
            return Err(Error::InconsistentElement {
                symbol: row.symbol,
                reason: f!(
                    "atomic number changed from {} to {}",
                    element.number,
                    row.number
                ),
            });
        }
        element.isotopes.push(row.into());
        return Ok(());
    }

    // A symbol seen before must have been interrupted by another element
    if elements.iter().any(|e| e.symbol == row.symbol) {
        return Err(Error::InconsistentElement {
            symbol: row.symbol,
            reason: "rows are not contiguous".to_string(),
        });
    }

    elements.push(Element {
        symbol: row.symbol.clone(),
        number: row.number,
        isotopes: vec![row.into()],
    });
    Ok(())
}

/// Reject masses and abundances no physical table would contain
fn validate(elements: &[Element]) -> Result<()> {
    for element in elements {
        for isotope in &element.isotopes {
            if !isotope.abundance.is_finite() || isotope.abundance < 0.0 {
                return Err(Error::InvalidAbundance {
                    nuclide: element.nuclide_name(isotope),
                    value: isotope.abundance,
                });
            }
            if !isotope.mass.is_finite() {
                return Err(Error::InvalidMass {
                    nuclide: element.nuclide_name(isotope),
                    value: isotope.mass,
                });
            }
        }
    }

    debug!(
        "Validated {} elements with {} isotopes",
        elements.len(),
        elements.iter().map(|e| e.isotopes.len()).sum::<usize>()
    );
    Ok(())
}
