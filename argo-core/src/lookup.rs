//! Float lookup by identifier.

use crate::dataset::{Coordinates, FloatDataset, FloatRecord};
use serde::Serialize;

/// A successful lookup: the stored identifier, where the float is, and the
/// record that charts are drawn from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoundFloat {
    pub id: String,
    pub coordinates: Coordinates,
    pub record: FloatRecord,
}

/// Outcome of one search. There is no partial or ambiguous variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupResult {
    NotFound { query: String },
    Found(FoundFloat),
}

impl LookupResult {
    fn not_found(query: &str) -> Self {
        LookupResult::NotFound {
            query: query.to_string(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    pub fn found(&self) -> Option<&FoundFloat> {
        match self {
            LookupResult::Found(found) => Some(found),
            LookupResult::NotFound { .. } => None,
        }
    }
}

/// Find a float by identifier.
///
/// The input is trimmed and compared case-insensitively against stored
/// identifiers; only exact matches count and the first one in dataset order
/// wins. A matched float without both coordinates is reported as not found.
pub fn find(dataset: &FloatDataset, raw_id: &str) -> LookupResult {
    let query = raw_id.trim();
    if query.is_empty() {
        return LookupResult::not_found("");
    }

    let needle = query.to_lowercase();
    let Some((id, entry)) = dataset.iter().find(|(id, _)| id.to_lowercase() == needle) else {
        log::info!("[Argo] lookup: no float matches '{}'", query);
        return LookupResult::not_found(query);
    };

    let Some(record) = entry.primary_record() else {
        log::info!("[Argo] lookup: float {} has no profiles", id);
        return LookupResult::not_found(query);
    };

    match record.coordinates() {
        Some(coordinates) => LookupResult::Found(FoundFloat {
            id: id.to_string(),
            coordinates,
            record,
        }),
        None => {
            log::info!("[Argo] lookup: float {} has no position", id);
            LookupResult::not_found(query)
        }
    }
}
