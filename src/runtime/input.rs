//! Reads the invocation descriptor (the SDC JSON document).
//!
//! Only the lookup values and the `accepter` selector are used; every other field
//! in the document is ignored.

use crate::model::FetchKey;
use crate::operation::OperationSelection;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse input file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputDescriptor {
    #[serde(rename = "ProductionOrderConfirmation")]
    pub production_order_confirmation: ConfirmationInput,
    #[serde(alias = "Accepter")]
    pub accepter: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfirmationInput {
    #[serde(rename = "OrderID")]
    pub order_id: String,
    pub confirmation_group: String,
    pub sequence: String,
    pub order_operation: String,
    pub material_movements: MaterialMovementsInput,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MaterialMovementsInput {
    pub batch: String,
}

impl InputDescriptor {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn fetch_key(&self) -> FetchKey {
        let conf = &self.production_order_confirmation;
        FetchKey {
            order_id: conf.order_id.clone(),
            batch: conf.material_movements.batch.clone(),
            confirmation_group: conf.confirmation_group.clone(),
            sequence: conf.sequence.clone(),
            order_operation: conf.order_operation.clone(),
        }
    }

    pub fn selection(&self) -> OperationSelection {
        OperationSelection::parse(&self.accepter)
    }
}

/// Loads and parses the descriptor at `path`.
pub fn read_input(path: &Path) -> Result<InputDescriptor, InputError> {
    debug!(path = %path.display(), "Reading input descriptor");
    let raw = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let input = InputDescriptor::from_json(&raw).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), accepter = ?input.accepter, "Input descriptor loaded");
    Ok(input)
}
