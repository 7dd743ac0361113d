use anyhow::bail;
use std::collections::HashMap;

use crate::webindex::domain::PackageRecord;
use crate::shared::Result;

/// Fields a well-formed Packages stanza must carry.
const REQUIRED_FIELDS: [&str; 4] = ["Package", "Version", "Architecture", "Filename"];

/// Parses a Packages index into records.
///
/// The input is stanza-formatted text: `Key: value` lines, values continued
/// on following lines indented with whitespace, stanzas separated by one or
/// more blank lines. `index_arch` is the architecture of the index being
/// parsed and is attached to every record.
///
/// A stanza missing any of `Package`, `Version`, `Architecture` or
/// `Filename` is a fatal error: there is no way to build a usable record
/// from it, and a silently incomplete index is worse than a hard failure.
pub fn parse_index(content: &str, index_arch: &str) -> Result<Vec<PackageRecord>> {
    let mut records = Vec::new();

    for (stanza_number, stanza) in split_stanzas(content).into_iter().enumerate() {
        let fields = parse_stanza(&stanza, stanza_number + 1)?;
        records.push(stanza_to_record(&fields, index_arch, stanza_number + 1)?);
    }

    Ok(records)
}

/// Split the file into stanzas on blank lines, keeping line structure.
fn split_stanzas(content: &str) -> Vec<Vec<String>> {
    let mut stanzas = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                stanzas.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.to_string());
        }
    }
    if !current.is_empty() {
        stanzas.push(current);
    }

    stanzas
}

/// Parse one stanza's lines into a field map, folding continuation lines
/// into the preceding field value.
fn parse_stanza(lines: &[String], stanza_number: usize) -> Result<HashMap<String, String>> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut last_key: Option<String> = None;

    for line in lines {
        if line.starts_with(' ') || line.starts_with('\t') {
            match last_key.as_ref().and_then(|key| fields.get_mut(key)) {
                Some(value) => {
                    value.push('\n');
                    value.push_str(line.trim_start());
                }
                None => bail!(
                    "stanza {} starts with a continuation line: {:?}",
                    stanza_number,
                    line
                ),
            }
        } else {
            match line.split_once(':') {
                Some((key, value)) => {
                    let key = key.trim().to_string();
                    fields.insert(key.clone(), value.trim().to_string());
                    last_key = Some(key);
                }
                None => bail!(
                    "stanza {} contains a line without a colon: {:?}",
                    stanza_number,
                    line
                ),
            }
        }
    }

    Ok(fields)
}

fn stanza_to_record(
    fields: &HashMap<String, String>,
    index_arch: &str,
    stanza_number: usize,
) -> Result<PackageRecord> {
    for field in REQUIRED_FIELDS {
        if !fields.contains_key(field) {
            bail!("stanza {} is missing the {} field", stanza_number, field);
        }
    }

    Ok(PackageRecord::new(
        index_arch,
        fields["Package"].as_str(),
        fields["Version"].as_str(),
        fields["Architecture"].as_str(),
        fields["Filename"].as_str(),
    ))
}
