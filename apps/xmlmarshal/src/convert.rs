//! Input/output plumbing and the two conversion directions.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use xmlmarshal_model::Value;
use xmlmarshal_xml::Marshaller;

/// Read the whole input file, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

/// Write the result to a file, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), bytes = text.len(), "wrote output");
    } else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}").context("failed to write to stdout")?;
    }
    Ok(())
}

/// Encode JSON text as an XML document named `root`.
pub fn json_to_xml(marshaller: Marshaller, json: &str, root: &str) -> Result<String> {
    let value = Value::from_json_str(json).context("invalid JSON input")?;
    marshaller
        .encode(&value, root)
        .with_context(|| format!("failed to encode <{root}> document"))
}

/// Decode an XML document into indented JSON text.
pub fn xml_to_json(marshaller: Marshaller, xml: &str) -> Result<String> {
    let value = marshaller
        .decode(xml)
        .context("failed to decode XML document")?;
    value
        .to_json_string_pretty()
        .context("failed to render JSON")
}
