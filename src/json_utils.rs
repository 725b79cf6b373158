use crate::errors::LoadError;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse a translation document. The root must be a JSON object.
pub fn read_translation_file(path: &Path) -> Result<Value, LoadError> {
    let s = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let v = parse_document(&s).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if !v.is_object() {
        return Err(LoadError::NotAnObject { path: path.to_path_buf() });
    }
    Ok(v)
}

// No nesting limit; serde_stacker grows the stack on demand for deep documents.
fn parse_document(s: &str) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_str(s);
    de.disable_recursion_limit();
    let v = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(v)
}
