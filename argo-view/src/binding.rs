//! Search result to chart/map state.

use argo_core::{extract_series, ChartSeries, Coordinates, Field, LookupResult};
use serde::Serialize;

/// Zoom level used when the map centers on a found float.
pub const FOCUS_ZOOM: u8 = 6;
/// Zoom level of the initial world view.
pub const DEFAULT_ZOOM: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapFocus {
    pub center: Coordinates,
    pub zoom: u8,
}

impl Default for MapFocus {
    fn default() -> Self {
        Self {
            center: Coordinates {
                latitude: 0.0,
                longitude: 0.0,
            },
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Message shown when a search misses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotFoundNotice {
    pub query: String,
}

impl NotFoundNotice {
    pub fn message(&self) -> String {
        format!("No float found with ID \"{}\"", self.query)
    }
}

/// What the dashboard shows for the latest search.
///
/// There are two shapes: charts, focus and highlight all set (found), or all
/// cleared with an optional notice (not found). The default is the
/// pre-search state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    pub temperature: Option<ChartSeries>,
    pub salinity: Option<ChartSeries>,
    pub focus: Option<MapFocus>,
    pub highlighted: Option<String>,
    pub notice: Option<NotFoundNotice>,
}

impl ViewState {
    pub fn from_result(result: &LookupResult) -> Self {
        match result {
            LookupResult::Found(found) => Self {
                temperature: Some(extract_series(&found.record, Field::Temperature)),
                salinity: Some(extract_series(&found.record, Field::Salinity)),
                focus: Some(MapFocus {
                    center: found.coordinates,
                    zoom: FOCUS_ZOOM,
                }),
                highlighted: Some(found.id.clone()),
                notice: None,
            },
            // Blank searches clear the view without a notice.
            LookupResult::NotFound { query } if query.is_empty() => Self::default(),
            LookupResult::NotFound { query } => Self {
                notice: Some(NotFoundNotice {
                    query: query.clone(),
                }),
                ..Self::default()
            },
        }
    }

    /// Replace the whole state with the one derived from `result`.
    pub fn bind(&mut self, result: &LookupResult) {
        *self = Self::from_result(result);
    }

    pub fn series(&self, field: Field) -> Option<&ChartSeries> {
        match field {
            Field::Temperature => self.temperature.as_ref(),
            Field::Salinity => self.salinity.as_ref(),
        }
    }

    /// Where the map should look: the found float, or the world view.
    pub fn map_focus(&self) -> MapFocus {
        self.focus.unwrap_or_default()
    }
}
