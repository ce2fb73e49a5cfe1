//! Canonical float data model and the JSON ingestion boundary.
//!
//! The static dataset comes in several spellings. Everything is normalized
//! here into one schema so the rest of the pipeline never sees
//! `latitude_degN` vs `latitude`, `temperature_degC` vs `temperature_C`, etc.
//!
//! # Accepted documents
//!
//! - **Profile form**: `{ "<argo id>": [ { latitude, longitude, measurements: { "<depth>": {..} } } ] }`
//! - **Flat form, keyed**: `{ "<argo id>": { latitude, longitude, temperature, salinity, sample_time } }`
//! - **Flat form, listed**: `[ { argo_id, latitude, longitude, temperature, salinity, sample_time } ]`
//!
//! Both keyed forms may be mixed within one object.

use crate::error::LoadError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// A latitude/longitude pair in decimal degrees. Both halves are always present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

// Accepted spellings per canonical field, canonical name first.
const PRESSURE_KEYS: &[&str] = &["pressure", "pressure_dbar"];
const TEMPERATURE_KEYS: &[&str] = &["temperature", "temperature_degC", "temperature_C"];
const SALINITY_KEYS: &[&str] = &["salinity", "salinity_psu", "salinity_PSU"];
const LATITUDE_KEYS: &[&str] = &["latitude", "latitude_degN"];
const LONGITUDE_KEYS: &[&str] = &["longitude", "longitude_degE"];

/// One depth-wise measurement. Any field may be missing for a given depth.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementSample {
    /// Pressure in decibars, used as the depth axis.
    pub pressure: Option<f64>,
    /// Temperature in °C.
    pub temperature: Option<f64>,
    /// Practical salinity (PSU).
    pub salinity: Option<f64>,
}

impl MeasurementSample {
    /// Build a sample from an arbitrary JSON value. Anything that is not an
    /// object yields an empty sample, which series extraction skips.
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                pressure: number_field(map, PRESSURE_KEYS),
                temperature: number_field(map, TEMPERATURE_KEYS),
                salinity: number_field(map, SALINITY_KEYS),
            },
            _ => Self::default(),
        }
    }
}

/// A measurement keyed by the depth label it was stored under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthSample {
    pub label: String,
    pub sample: MeasurementSample,
}

/// One location-stamped set of depth-resolved measurements.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Per-depth samples in document order.
    pub measurements: Vec<DepthSample>,
}

impl Profile {
    fn from_object(map: &Map<String, Value>) -> Self {
        let measurements = match map.get("measurements") {
            Some(Value::Object(depths)) => depths
                .iter()
                .map(|(label, value)| DepthSample {
                    label: label.clone(),
                    sample: MeasurementSample::from_value(value),
                })
                .collect(),
            _ => Vec::new(),
        };
        Self {
            latitude: number_field(map, LATITUDE_KEYS),
            longitude: number_field(map, LONGITUDE_KEYS),
            measurements,
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        coordinates(self.latitude, self.longitude)
    }
}

/// A single surface point: position plus one temperature/salinity reading.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct FlatRecord {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub temperature: Option<f64>,
    pub salinity: Option<f64>,
    pub sample_time: Option<DateTime<Utc>>,
}

impl FlatRecord {
    fn from_object(map: &Map<String, Value>) -> Self {
        Self {
            latitude: number_field(map, LATITUDE_KEYS),
            longitude: number_field(map, LONGITUDE_KEYS),
            temperature: number_field(map, TEMPERATURE_KEYS),
            salinity: number_field(map, SALINITY_KEYS),
            sample_time: map
                .get("sample_time")
                .and_then(Value::as_str)
                .and_then(parse_sample_time),
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        coordinates(self.latitude, self.longitude)
    }
}

/// What a float identifier maps to in the dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum FloatEntry {
    Profiles(Vec<Profile>),
    Flat(FlatRecord),
}

impl FloatEntry {
    /// The record used for single-result display: the first profile, or the
    /// flat record itself.
    pub fn primary_record(&self) -> Option<FloatRecord> {
        match self {
            FloatEntry::Profiles(profiles) => profiles.first().cloned().map(FloatRecord::Profile),
            FloatEntry::Flat(record) => Some(FloatRecord::Flat(record.clone())),
        }
    }

    fn from_value(id: &str, value: Value) -> Result<Self, LoadError> {
        match value {
            Value::Array(items) => {
                let mut profiles = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    match item {
                        Value::Object(map) => profiles.push(Profile::from_object(map)),
                        other => {
                            return Err(LoadError::Shape(format!(
                                "profile {} of float {} is {}, expected an object",
                                idx,
                                id,
                                json_kind(other)
                            )))
                        }
                    }
                }
                Ok(FloatEntry::Profiles(profiles))
            }
            Value::Object(map) => Ok(FloatEntry::Flat(FlatRecord::from_object(&map))),
            other => Err(LoadError::Shape(format!(
                "float {} maps to {}, expected an array or object",
                id,
                json_kind(&other)
            ))),
        }
    }
}

/// The single record a successful lookup selects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum FloatRecord {
    Profile(Profile),
    Flat(FlatRecord),
}

impl FloatRecord {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            FloatRecord::Profile(profile) => profile.coordinates(),
            FloatRecord::Flat(record) => record.coordinates(),
        }
    }
}

/// The whole float dataset, in document order.
///
/// Identifiers are stored exactly as they appear in the source; lookups
/// compare them case-insensitively.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FloatDataset {
    entries: Vec<(String, FloatEntry)>,
}

impl FloatDataset {
    pub fn from_entries(entries: Vec<(String, FloatEntry)>) -> Self {
        Self { entries }
    }

    /// Parse a JSON document in any of the accepted forms.
    pub fn from_json_str(body: &str) -> Result<Self, LoadError> {
        let document: Value = serde_json::from_str(body)?;
        Self::from_value(document)
    }

    pub fn from_value(document: Value) -> Result<Self, LoadError> {
        match document {
            Value::Object(map) => Self::from_keyed(map),
            Value::Array(points) => Self::from_points(points),
            other => Err(LoadError::Shape(format!(
                "expected an object or array at the top level, found {}",
                json_kind(&other)
            ))),
        }
    }

    fn from_keyed(map: Map<String, Value>) -> Result<Self, LoadError> {
        let mut entries = Vec::with_capacity(map.len());
        for (id, value) in map {
            let entry = FloatEntry::from_value(&id, value)?;
            entries.push((id, entry));
        }
        Ok(Self { entries })
    }

    /// Flat points grouped by `argo_id`; the first point for an id wins.
    fn from_points(points: Vec<Value>) -> Result<Self, LoadError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut entries = Vec::new();
        let mut skipped = 0u32;
        for (idx, point) in points.iter().enumerate() {
            let Value::Object(map) = point else {
                return Err(LoadError::Shape(format!(
                    "point {} is {}, expected an object",
                    idx,
                    json_kind(point)
                )));
            };
            let id = match map.get("argo_id").and_then(argo_id_string) {
                Some(id) => id,
                None => {
                    skipped += 1;
                    continue;
                }
            };
            if seen.contains(&id) {
                log::warn!("[Argo] ingest: dropping repeated point for float {}", id);
                continue;
            }
            seen.insert(id.clone());
            entries.push((id, FloatEntry::Flat(FlatRecord::from_object(map))));
        }
        if skipped > 0 {
            log::warn!("[Argo] ingest: skipped {} points without argo_id", skipped);
        }
        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FloatEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a `sample_time` string.
///
/// Accepts RFC 3339, or a naive `YYYY-MM-DD[ T]HH:MM[:SS]` / `YYYY-MM-DD`
/// which is read as UTC.
pub fn parse_sample_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return Some(time.with_timezone(&Utc));
    }
    for format in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Option<Coordinates> {
    Some(Coordinates {
        latitude: latitude?,
        longitude: longitude?,
    })
}

fn argo_id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The first spelling of a field present in `map`, read as a number.
///
/// Numbers only; `null`, strings and other values count as absent. A record
/// carrying two spellings of one field keeps the earlier key in `keys`, or
/// the later one when the earlier holds no number.
fn number_field(map: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find_map(|value| value.as_f64().filter(|v| v.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const FIXTURE: &str = include_str!("../../fixtures/argo_profiles.json");

    fn profiles_of<'a>(dataset: &'a FloatDataset, id: &str) -> &'a [Profile] {
        match dataset.iter().find(|(key, _)| *key == id) {
            Some((_, FloatEntry::Profiles(profiles))) => profiles,
            other => panic!("expected profiles for {}, got {:?}", id, other),
        }
    }

    #[test]
    fn parses_profile_form_with_source_field_names() {
        let body = r#"{"F1": [{"latitude_degN": 10, "longitude_degE": 20,
            "measurements": {"0": {"pressure_dbar": 5, "temperature_degC": 28.1, "salinity_psu": 35.2}}}]}"#;
        let dataset = FloatDataset::from_json_str(body).unwrap();
        let profiles = profiles_of(&dataset, "F1");
        assert_eq!(profiles.len(), 1);
        assert_eq!(
            profiles[0].coordinates(),
            Some(Coordinates {
                latitude: 10.0,
                longitude: 20.0
            })
        );
        let sample = profiles[0].measurements[0].sample;
        assert_eq!(sample.pressure, Some(5.0));
        assert_eq!(sample.temperature, Some(28.1));
        assert_eq!(sample.salinity, Some(35.2));
    }

    #[test]
    fn parses_canonical_and_alternate_spellings() {
        let body = r#"{"F2": [{"latitude": -3.5, "longitude": 71.25,
            "measurements": {"0": {"pressure": 2, "temperature_C": 25.0, "salinity_PSU": 34.0}}}]}"#;
        let dataset = FloatDataset::from_json_str(body).unwrap();
        let profile = &profiles_of(&dataset, "F2")[0];
        assert_eq!(profile.latitude, Some(-3.5));
        assert_eq!(profile.longitude, Some(71.25));
        assert_eq!(profile.measurements[0].sample.temperature, Some(25.0));
        assert_eq!(profile.measurements[0].sample.salinity, Some(34.0));
    }

    #[test]
    fn repeated_spellings_keep_the_sample() {
        let body = r#"{"F1": [{"latitude": 10, "longitude": 20, "measurements": {"0": {
            "pressure_dbar": 5, "temperature_degC": 28.1, "temperature_C": 28.1, "salinity_psu": 35.2
        }}}]}"#;
        let dataset = FloatDataset::from_json_str(body).unwrap();
        let sample = profiles_of(&dataset, "F1")[0].measurements[0].sample;
        assert_eq!(sample.pressure, Some(5.0));
        assert_eq!(sample.temperature, Some(28.1));
        assert_eq!(sample.salinity, Some(35.2));
    }

    #[test]
    fn repeated_spellings_on_a_profile_are_accepted() {
        let body = r#"{"F1": [{"latitude": 10, "latitude_degN": 10, "longitude": null, "longitude_degE": 20,
            "measurements": {"0": {"pressure": 1, "temperature": "bad", "temperature_C": 27.0}}}]}"#;
        let dataset = FloatDataset::from_json_str(body).unwrap();
        let profile = &profiles_of(&dataset, "F1")[0];
        assert_eq!(
            profile.coordinates(),
            Some(Coordinates {
                latitude: 10.0,
                longitude: 20.0
            })
        );
        assert_eq!(profile.measurements[0].sample.temperature, Some(27.0));
    }

    #[test]
    fn repeated_spellings_on_a_flat_point_are_accepted() {
        let body = r#"[{"argo_id": "A1", "latitude": 1, "latitude_degN": 1, "longitude": 2,
            "salinity_PSU": 34.5, "salinity_psu": 34.5}]"#;
        let dataset = FloatDataset::from_json_str(body).unwrap();
        let first = dataset.iter().next();
        match first {
            Some((_, FloatEntry::Flat(record))) => {
                assert_eq!(record.latitude, Some(1.0));
                assert_eq!(record.salinity, Some(34.5));
            }
            other => panic!("expected flat record, got {:?}", other),
        }
    }

    #[test]
    fn missing_and_non_numeric_values_are_absent() {
        let body = r#"{"F3": [{"latitude": 1, "longitude": 2, "measurements": {
            "0": {"pressure_dbar": 5, "temperature_degC": null, "salinity_psu": "n/a"},
            "1": null
        }}]}"#;
        let dataset = FloatDataset::from_json_str(body).unwrap();
        let profile = &profiles_of(&dataset, "F3")[0];
        assert_eq!(profile.measurements.len(), 2);
        assert_eq!(profile.measurements[0].sample.pressure, Some(5.0));
        assert_eq!(profile.measurements[0].sample.temperature, None);
        assert_eq!(profile.measurements[0].sample.salinity, None);
        assert_eq!(profile.measurements[1].sample, MeasurementSample::default());
    }

    #[test]
    fn profile_without_measurements_is_empty() {
        let dataset = FloatDataset::from_json_str(r#"{"F4": [{"latitude": 1, "longitude": 2}]}"#)
            .unwrap();
        assert!(profiles_of(&dataset, "F4")[0].measurements.is_empty());
    }

    #[test]
    fn measurement_labels_keep_document_order() {
        let body = r#"{"F5": [{"measurements": {"9": {}, "1": {}, "5": {}}}]}"#;
        let dataset = FloatDataset::from_json_str(body).unwrap();
        let labels: Vec<&str> = profiles_of(&dataset, "F5")[0]
            .measurements
            .iter()
            .map(|m| m.label.as_str())
            .collect();
        assert_eq!(labels, vec!["9", "1", "5"]);
    }

    #[test]
    fn parses_flat_point_array() {
        let body = r#"[
            {"argo_id": "A1", "latitude": 5.5, "longitude": 60.0, "temperature_C": 27.3,
             "salinity_PSU": 35.0, "sample_time": "2024-03-01 12:00:00"},
            {"argo_id": 2902746, "latitude": 6.0, "longitude": 61.0},
            {"latitude": 0.0, "longitude": 0.0},
            {"argo_id": "A1", "latitude": 99.0, "longitude": 99.0}
        ]"#;
        let dataset = FloatDataset::from_json_str(body).unwrap();
        assert_eq!(dataset.len(), 2);
        let ids: Vec<&str> = dataset.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["A1", "2902746"]);
        let first = dataset.iter().next();
        match first {
            Some((_, FloatEntry::Flat(record))) => {
                assert_eq!(record.latitude, Some(5.5));
                assert_eq!(record.temperature, Some(27.3));
                assert_eq!(record.salinity, Some(35.0));
                assert_eq!(
                    record.sample_time,
                    Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
                );
            }
            other => panic!("expected flat record, got {:?}", other),
        }
    }

    #[test]
    fn parses_keyed_flat_records() {
        let body = r#"{"B7": {"latitude": 3, "longitude": 4, "temperature": 20.5}}"#;
        let dataset = FloatDataset::from_json_str(body).unwrap();
        let first = dataset.iter().next();
        match first {
            Some(("B7", FloatEntry::Flat(record))) => {
                assert_eq!(record.temperature, Some(20.5));
                assert_eq!(record.salinity, None);
                assert_eq!(record.sample_time, None);
            }
            other => panic!("expected flat record, got {:?}", other),
        }
    }

    #[test]
    fn empty_object_is_an_empty_dataset() {
        let dataset = FloatDataset::from_json_str("{}").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn rejects_scalar_documents() {
        assert!(matches!(
            FloatDataset::from_json_str("42"),
            Err(LoadError::Shape(_))
        ));
        assert!(matches!(
            FloatDataset::from_json_str(r#"{"F1": 42}"#),
            Err(LoadError::Shape(_))
        ));
        assert!(matches!(
            FloatDataset::from_json_str(r#"{"F1": [1, 2]}"#),
            Err(LoadError::Shape(_))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            FloatDataset::from_json_str("{\"F1\": ["),
            Err(LoadError::Malformed(_))
        ));
    }

    #[test]
    fn primary_record_is_first_profile() {
        let dataset = FloatDataset::from_json_str(FIXTURE).unwrap();
        let (_, entry) = dataset.iter().next().unwrap();
        match entry.primary_record() {
            Some(FloatRecord::Profile(profile)) => {
                assert_eq!(profile.latitude, Some(12.482));
                assert_eq!(profile.measurements.len(), 6);
            }
            other => panic!("expected first profile, got {:?}", other),
        }
        assert_eq!(FloatEntry::Profiles(Vec::new()).primary_record(), None);
    }

    #[test]
    fn parses_fixture() {
        let dataset = FloatDataset::from_json_str(FIXTURE).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(profiles_of(&dataset, "2902746").len(), 2);
        assert_eq!(profiles_of(&dataset, "5906439")[0].coordinates(), None);
    }

    #[test]
    fn sample_time_formats() {
        let expected = Utc.with_ymd_and_hms(2023, 7, 14, 6, 30, 0).unwrap();
        assert_eq!(parse_sample_time("2023-07-14T06:30:00Z"), Some(expected));
        assert_eq!(parse_sample_time("2023-07-14T08:30:00+02:00"), Some(expected));
        assert_eq!(parse_sample_time("2023-07-14 06:30:00"), Some(expected));
        assert_eq!(parse_sample_time("2023-07-14 06:30"), Some(expected));
        assert_eq!(
            parse_sample_time("2023-07-14"),
            Some(Utc.with_ymd_and_hms(2023, 7, 14, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_sample_time("yesterday"), None);
    }
}
