//! Chart series extraction.
//!
//! Turns a record's per-depth measurements into `(depth, value)` points
//! sorted by depth. Pressure (dbar) stands in for depth. Samples missing
//! either coordinate are dropped, never zero-filled.

use crate::dataset::{FloatRecord, MeasurementSample};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which measurement a series plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Temperature,
    Salinity,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Temperature => "Temperature",
            Field::Salinity => "Salinity",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Field::Temperature => "°C",
            Field::Salinity => "PSU",
        }
    }

    fn read(self, sample: &MeasurementSample) -> Option<f64> {
        match self {
            Field::Temperature => sample.temperature,
            Field::Salinity => sample.salinity,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Temperature => write!(f, "temperature"),
            Field::Salinity => write!(f, "salinity"),
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "temperature" | "temp" => Ok(Field::Temperature),
            "salinity" | "sal" => Ok(Field::Salinity),
            other => Err(format!(
                "unknown field '{}', expected temperature or salinity",
                other
            )),
        }
    }
}

/// The independent axis of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesAxis {
    /// Pressure in dbar, used as depth.
    Pressure,
    /// Unix seconds of `sample_time`.
    ///
    /// Only flat records use this axis. Ingestion keeps one point per float,
    /// so a time series holds at most one point.
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

/// Points ascending by `x`, ties in their original relative order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub axis: SeriesAxis,
    pub points: Vec<SeriesPoint>,
}

impl ChartSeries {
    pub fn empty(axis: SeriesAxis) -> Self {
        Self {
            axis,
            points: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Extract the series for `field` from a record.
///
/// Profiles yield one point per depth that has both a pressure and the
/// requested value. A flat record yields at most one point on the time axis.
pub fn extract_series(record: &FloatRecord, field: Field) -> ChartSeries {
    match record {
        FloatRecord::Profile(profile) => {
            let mut points: Vec<SeriesPoint> = profile
                .measurements
                .iter()
                .filter_map(|depth| {
                    let x = depth.sample.pressure?;
                    let y = field.read(&depth.sample)?;
                    Some(SeriesPoint { x, y })
                })
                .collect();
            // sort_by is stable
            points.sort_by(|a, b| a.x.total_cmp(&b.x));
            ChartSeries {
                axis: SeriesAxis::Pressure,
                points,
            }
        }
        FloatRecord::Flat(flat) => {
            let value = match field {
                Field::Temperature => flat.temperature,
                Field::Salinity => flat.salinity,
            };
            let points = match (flat.sample_time, value) {
                (Some(time), Some(y)) => vec![SeriesPoint {
                    x: time.timestamp() as f64,
                    y,
                }],
                _ => Vec::new(),
            };
            ChartSeries {
                axis: SeriesAxis::Time,
                points,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DepthSample, FlatRecord, Profile};
    use chrono::{TimeZone, Utc};

    fn sample(pressure: Option<f64>, temperature: Option<f64>, salinity: Option<f64>) -> MeasurementSample {
        MeasurementSample {
            pressure,
            temperature,
            salinity,
        }
    }

    fn profile(samples: Vec<MeasurementSample>) -> FloatRecord {
        FloatRecord::Profile(Profile {
            latitude: Some(10.0),
            longitude: Some(20.0),
            measurements: samples
                .into_iter()
                .enumerate()
                .map(|(idx, sample)| DepthSample {
                    label: idx.to_string(),
                    sample,
                })
                .collect(),
        })
    }

    fn xy(series: &ChartSeries) -> Vec<(f64, f64)> {
        series.points.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn sorts_by_pressure_and_skips_missing_values() {
        let record = profile(vec![
            sample(Some(5.0), Some(28.1), Some(35.2)),
            sample(Some(3.0), Some(29.0), None),
        ]);
        let temperature = extract_series(&record, Field::Temperature);
        assert_eq!(temperature.axis, SeriesAxis::Pressure);
        assert_eq!(xy(&temperature), vec![(3.0, 29.0), (5.0, 28.1)]);
        let salinity = extract_series(&record, Field::Salinity);
        assert_eq!(xy(&salinity), vec![(5.0, 35.2)]);
    }

    #[test]
    fn skips_samples_without_pressure() {
        let record = profile(vec![
            sample(None, Some(20.0), Some(34.0)),
            sample(Some(0.0), Some(21.0), Some(34.5)),
        ]);
        assert_eq!(
            xy(&extract_series(&record, Field::Temperature)),
            vec![(0.0, 21.0)]
        );
    }

    #[test]
    fn ties_keep_original_order() {
        let record = profile(vec![
            sample(Some(10.0), Some(1.0), None),
            sample(Some(5.0), Some(2.0), None),
            sample(Some(10.0), Some(3.0), None),
            sample(Some(5.0), Some(4.0), None),
        ]);
        assert_eq!(
            xy(&extract_series(&record, Field::Temperature)),
            vec![(5.0, 2.0), (5.0, 4.0), (10.0, 1.0), (10.0, 3.0)]
        );
    }

    #[test]
    fn extraction_is_repeatable() {
        let record = profile(vec![
            sample(Some(50.0), Some(12.0), Some(35.0)),
            sample(Some(1.0), Some(28.0), Some(34.0)),
            sample(Some(50.0), Some(11.0), Some(35.1)),
        ]);
        let first = serde_json::to_string(&extract_series(&record, Field::Salinity)).unwrap();
        let second = serde_json::to_string(&extract_series(&record, Field::Salinity)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn no_valid_samples_gives_empty_series() {
        let record = profile(vec![sample(Some(5.0), None, None), sample(None, None, None)]);
        let series = extract_series(&record, Field::Temperature);
        assert!(series.is_empty());
        assert_eq!(series, ChartSeries::empty(SeriesAxis::Pressure));
    }

    #[test]
    fn flat_record_plots_against_time() {
        let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let record = FloatRecord::Flat(FlatRecord {
            latitude: Some(1.0),
            longitude: Some(2.0),
            temperature: Some(26.5),
            salinity: None,
            sample_time: Some(time),
        });
        let temperature = extract_series(&record, Field::Temperature);
        assert_eq!(temperature.axis, SeriesAxis::Time);
        assert_eq!(xy(&temperature), vec![(time.timestamp() as f64, 26.5)]);
        assert!(extract_series(&record, Field::Salinity).is_empty());
    }

    #[test]
    fn field_parses_from_cli_strings() {
        assert_eq!("Temperature".parse::<Field>(), Ok(Field::Temperature));
        assert_eq!("sal".parse::<Field>(), Ok(Field::Salinity));
        assert!("oxygen".parse::<Field>().is_err());
        assert_eq!(Field::Salinity.to_string(), "salinity");
    }
}
