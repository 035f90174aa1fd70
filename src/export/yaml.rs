//! YAML export functionality

use std::io::Write;

use serde::Serialize;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export both collections to YAML, with a short header comment
pub fn export_full_yaml<W: Write>(storage: &Storage, mut writer: W) -> FinanceResult<()> {
    let export = FullExport::from_storage(storage)?;

    let header = format!(
        "# Finance Visualizer Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    export_yaml(&export, writer)
}

/// Serialize any value as YAML
pub fn export_yaml<T, W>(value: &T, writer: W) -> FinanceResult<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    serde_yaml::to_writer(writer, value).map_err(|e| FinanceError::Export(e.to_string()))
}
