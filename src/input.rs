//! Input document loading

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use tablex_core::{SelectionParams, Table, TableDocument};

use crate::error::InputError;

/// Load the table from a `{"data": Table}` document.
///
/// Shape violations are logged, not rejected; the selector and serializer
/// tolerate ragged tables.
pub fn load_table(path: &Path) -> Result<Table, InputError> {
    let document: TableDocument = read_json(path)?;
    let table = document.data;
    for violation in table.shape_violations() {
        tracing::warn!(table = %table.table_name, "{}", violation);
    }
    Ok(table)
}

/// Load the selection parameters; absent signals default to 0
pub fn load_params(path: &Path) -> Result<SelectionParams, InputError> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
