//! Map markers, bounds and popup tables.

use argo_core::{Coordinates, FloatDataset, FloatEntry, MeasurementSample, Profile};
use serde::Serialize;

const MISSING: &str = "—";

/// One row of a marker popup's depth-wise measurement table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupRow {
    pub depth: String,
    pub pressure: String,
    pub temperature: String,
    pub salinity: String,
}

impl PopupRow {
    fn from_sample(depth: &str, sample: &MeasurementSample) -> Self {
        Self {
            depth: depth.to_string(),
            pressure: format_value(sample.pressure, 1),
            temperature: format_value(sample.temperature, 2),
            salinity: format_value(sample.salinity, 2),
        }
    }
}

/// A map marker for one profile (or one flat record).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: String,
    pub coordinates: Coordinates,
    /// Position of the profile within its float's profile list.
    pub profile_index: usize,
    pub highlighted: bool,
    pub sample_time: Option<String>,
    pub rows: Vec<PopupRow>,
}

/// Southwest/northeast corners enclosing a set of markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// Table rows for a profile popup, in stored depth order.
pub fn popup_rows(profile: &Profile) -> Vec<PopupRow> {
    profile
        .measurements
        .iter()
        .map(|depth| PopupRow::from_sample(&depth.label, &depth.sample))
        .collect()
}

/// Build markers for every positioned record in the dataset.
///
/// Records without both coordinates get no marker. When `highlighted` names
/// a stored identifier, the marker for that float's first record is the one
/// highlighted.
pub fn markers(dataset: &FloatDataset, highlighted: Option<&str>) -> Vec<Marker> {
    let mut out = Vec::new();
    let mut unplaced = 0u32;
    for (id, entry) in dataset.iter() {
        let is_target = highlighted == Some(id);
        match entry {
            FloatEntry::Profiles(profiles) => {
                for (idx, profile) in profiles.iter().enumerate() {
                    let Some(coordinates) = profile.coordinates() else {
                        unplaced += 1;
                        continue;
                    };
                    out.push(Marker {
                        id: id.to_string(),
                        coordinates,
                        profile_index: idx,
                        highlighted: is_target && idx == 0,
                        sample_time: None,
                        rows: popup_rows(profile),
                    });
                }
            }
            FloatEntry::Flat(record) => {
                let Some(coordinates) = record.coordinates() else {
                    unplaced += 1;
                    continue;
                };
                let sample = MeasurementSample {
                    pressure: None,
                    temperature: record.temperature,
                    salinity: record.salinity,
                };
                out.push(Marker {
                    id: id.to_string(),
                    coordinates,
                    profile_index: 0,
                    highlighted: is_target,
                    sample_time: record
                        .sample_time
                        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string()),
                    rows: vec![PopupRow::from_sample("surface", &sample)],
                });
            }
        }
    }
    if unplaced > 0 {
        log::debug!("[Argo] map: {} records have no position", unplaced);
    }
    out
}

/// Bounds enclosing all markers, or `None` when there are none.
pub fn fit_bounds(markers: &[Marker]) -> Option<Bounds> {
    let first = markers.first()?.coordinates;
    let init = Bounds {
        south: first.latitude,
        west: first.longitude,
        north: first.latitude,
        east: first.longitude,
    };
    Some(markers.iter().fold(init, |b, m| Bounds {
        south: b.south.min(m.coordinates.latitude),
        west: b.west.min(m.coordinates.longitude),
        north: b.north.max(m.coordinates.latitude),
        east: b.east.max(m.coordinates.longitude),
    }))
}

fn format_value(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../fixtures/argo_profiles.json");

    fn fixture() -> FloatDataset {
        FloatDataset::from_json_str(FIXTURE).unwrap()
    }

    #[test]
    fn one_marker_per_positioned_profile() {
        let all = markers(&fixture(), None);
        // 2902746 has two profiles, Argo001 one, 5906439 lacks a latitude
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, "2902746");
        assert_eq!(all[1].profile_index, 1);
        assert!(all.iter().all(|m| !m.highlighted));
    }

    #[test]
    fn highlights_exactly_one_marker() {
        let all = markers(&fixture(), Some("2902746"));
        let lit: Vec<&Marker> = all.iter().filter(|m| m.highlighted).collect();
        assert_eq!(lit.len(), 1);
        assert_eq!(lit[0].profile_index, 0);

        let again = markers(&fixture(), Some("2902746"));
        assert_eq!(all, again);
    }

    #[test]
    fn popup_rows_format_like_the_table() {
        let all = markers(&fixture(), None);
        let argo001 = all.iter().find(|m| m.id == "Argo001").unwrap();
        assert_eq!(
            argo001.rows[0],
            PopupRow {
                depth: "1".to_string(),
                pressure: "25.0".to_string(),
                temperature: "27.80".to_string(),
                salinity: "34.90".to_string(),
            }
        );
        assert_eq!(argo001.rows[2].temperature, "—");
    }

    #[test]
    fn flat_records_get_a_surface_row() {
        let dataset = FloatDataset::from_json_str(
            r#"[{"argo_id": "S1", "latitude": 1, "longitude": 2, "temperature_C": 25.456,
                 "sample_time": "2024-05-02T03:04:00Z"}]"#,
        )
        .unwrap();
        let all = markers(&dataset, Some("S1"));
        assert_eq!(all.len(), 1);
        assert!(all[0].highlighted);
        assert_eq!(all[0].sample_time.as_deref(), Some("2024-05-02 03:04 UTC"));
        assert_eq!(all[0].rows[0].temperature, "25.46");
        assert_eq!(all[0].rows[0].salinity, "—");
    }

    #[test]
    fn bounds_enclose_all_markers() {
        let bounds = fit_bounds(&markers(&fixture(), None)).unwrap();
        assert_eq!(
            bounds,
            Bounds {
                south: -8.25,
                west: 67.915,
                north: 12.617,
                east: 80.5,
            }
        );
        assert_eq!(fit_bounds(&[]), None);
    }
}
