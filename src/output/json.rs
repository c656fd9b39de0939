use super::write_output;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn output_json<T: Serialize + ?Sized>(value: &T, output_file: Option<&Path>) -> Result<()> {
    write_output(&to_json(value)?, output_file)
}
