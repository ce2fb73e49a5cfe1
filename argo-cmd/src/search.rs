//! Dataset-backed commands: search, series export and marker listing.

use argo_core::{
    extract_series, ChartSeries, DatasetStore, Field, LookupResult, SeriesAxis,
};
use argo_view::{fit_bounds, markers, Marker};
use log::info;
use std::fmt::Write as _;
use std::io;

/// Load the dataset, falling back to an empty store on failure so that
/// every lookup simply misses.
async fn load_or_empty(source: &str) -> DatasetStore {
    match DatasetStore::load(source).await {
        Ok(store) => {
            info!("Loaded {} floats from {}", store.dataset().len(), source);
            store
        }
        Err(e) => {
            log::error!("Failed to load dataset from {}: {}", source, e);
            DatasetStore::empty()
        }
    }
}

/// Run a lookup and print the result.
pub async fn run_search(source: &str, id: &str, json: bool) -> anyhow::Result<()> {
    let store = load_or_empty(source).await;
    let result = store.find(id);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", describe_lookup(&result));
    }
    Ok(())
}

/// Print one series, or write it as CSV when `csv_path` is given.
pub async fn run_series(
    source: &str,
    id: &str,
    field: Field,
    csv_path: Option<&str>,
) -> anyhow::Result<()> {
    let store = load_or_empty(source).await;
    let found = match store.find(id) {
        LookupResult::Found(found) => found,
        LookupResult::NotFound { query } => {
            println!("No float found with ID \"{}\"", query);
            return Ok(());
        }
    };
    let series = extract_series(&found.record, field);

    match csv_path {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            write_series_csv(file, &series)?;
            info!(
                "Wrote {} {} points for {} to {}",
                series.len(),
                field,
                found.id,
                path
            );
        }
        None => print!("{}", describe_series(&series, field)),
    }
    Ok(())
}

/// List every marker and the bounds that enclose them.
pub async fn run_markers(source: &str) -> anyhow::Result<()> {
    let store = load_or_empty(source).await;
    let all = markers(store.dataset(), None);
    for marker in &all {
        println!("{}", describe_marker(marker));
    }
    match fit_bounds(&all) {
        Some(b) => println!(
            "{} markers within S {:.3} W {:.3} N {:.3} E {:.3}",
            all.len(),
            b.south,
            b.west,
            b.north,
            b.east
        ),
        None => println!("No positioned floats"),
    }
    Ok(())
}

/// Human-readable lookup summary with both series.
pub fn describe_lookup(result: &LookupResult) -> String {
    match result {
        LookupResult::NotFound { query } if query.is_empty() => "No float ID given\n".to_string(),
        LookupResult::NotFound { query } => format!("No float found with ID \"{}\"\n", query),
        LookupResult::Found(found) => {
            let mut out = format!(
                "Found float {} at {:.3}, {:.3}\n",
                found.id, found.coordinates.latitude, found.coordinates.longitude
            );
            for field in [Field::Temperature, Field::Salinity] {
                out.push_str(&describe_series(&extract_series(&found.record, field), field));
            }
            out
        }
    }
}

fn describe_series(series: &ChartSeries, field: Field) -> String {
    let axis = match series.axis {
        SeriesAxis::Pressure => "pressure (dbar)",
        SeriesAxis::Time => "sample time (unix s)",
    };
    let mut out = format!(
        "{} ({}) by {}: {} points\n",
        field.label(),
        field.unit(),
        axis,
        series.len()
    );
    for point in &series.points {
        let _ = writeln!(out, "  {:>10.1}  {:>8.2}", point.x, point.y);
    }
    out
}

fn describe_marker(marker: &Marker) -> String {
    format!(
        "{}{} #{} at {:.3}, {:.3} ({} depths)",
        if marker.highlighted { "* " } else { "" },
        marker.id,
        marker.profile_index,
        marker.coordinates.latitude,
        marker.coordinates.longitude,
        marker.rows.len()
    )
}

/// Write a series as `x,y` CSV with a header row.
pub fn write_series_csv<W: io::Write>(writer: W, series: &ChartSeries) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["x", "y"])?;
    for point in &series.points {
        wtr.write_record([point.x.to_string(), point.y.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
