//! Write operations for the compiled data module

// standard library
use std::format as f;
use std::io::Write;

// crate modules
use crate::error::{Error, Result};
use crate::record::CompiledTable;

/// Name of the constant holding the data in the emitted module
pub const MODULE_CONSTANT: &str = "nmrData";

/// Serialise a [CompiledTable] to JSON with a 2-space indent
pub fn to_json(table: &CompiledTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// Wrap the JSON payload in a module with a default export
///
/// The text has the form:
///
/// ```text
/// const nmrData = { ... };
///
/// export default nmrData;
/// ```
///
/// ```rust
/// # use nmrdata_compile::{to_module, CompiledTable};
/// let module = to_module(&CompiledTable::new()).unwrap();
/// assert_eq!(module, "const nmrData = {};\n\nexport default nmrData;\n");
/// ```
pub fn to_module(table: &CompiledTable) -> Result<String> {
    Ok(f!(
        "const {MODULE_CONSTANT} = {};\n\nexport default {MODULE_CONSTANT};\n",
        to_json(table)?
    ))
}

/// Write the module text, followed by a newline, to any writer
pub fn write_module<W: Write>(table: &CompiledTable, mut writer: W) -> Result<()> {
    writeln!(writer, "{}", to_module(table)?)?;
    writer.flush()?;
    Ok(())
}

/// Write the bare JSON payload, followed by a newline, to any writer
pub fn write_json<W: Write>(table: &CompiledTable, mut writer: W) -> Result<()> {
    writeln!(writer, "{}", to_json(table)?)?;
    writer.flush()?;
    Ok(())
}

/// Parse a JSON payload back into a [CompiledTable]
pub fn from_json_str(text: &str) -> Result<CompiledTable> {
    Ok(serde_json::from_str(text)?)
}

/// Parse the payload of a module produced by [to_module()]
///
/// ```rust
/// # use nmrdata_compile::{from_module_str, to_module, CompiledTable};
/// let table = CompiledTable::new();
/// let module = to_module(&table).unwrap();
/// assert_eq!(from_module_str(&module).unwrap(), table);
/// ```
pub fn from_module_str(text: &str) -> Result<CompiledTable> {
    let prefix = f!("const {MODULE_CONSTANT} = ");
    let suffix = f!("export default {MODULE_CONSTANT};");

    let payload = text
        .trim_start()
        .strip_prefix(&prefix)
        .ok_or_else(|| Error::MalformedModule(f!("expected \"{prefix}\" at the start")))?
        .trim_end()
        .strip_suffix(&suffix)
        .ok_or_else(|| Error::MalformedModule(f!("expected \"{suffix}\" at the end")))?
        .trim_end()
        .strip_suffix(';')
        .ok_or_else(|| Error::MalformedModule("missing ';' after the payload".to_string()))?;

    from_json_str(payload)
}
