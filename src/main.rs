//! Spatial hotspot analysis tool
//!
//! Reads geographic points from a CSV file (or generates the built-in
//! demo dataset), runs the projection + DBSCAN pipeline, prints a cluster
//! report, and optionally writes labeled points back out as CSV.

use clap::Parser;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::path::PathBuf;


use spatial_dbscan::generate::{HOTSPOT_KEY, SOURCE_KEY};
use spatial_dbscan::{
    AnalysisConfig, AnalysisResult, GeodeticPoint, PointRecord, analyze, modesto_demo,
};

#[derive(Parser)]
#[command(name = "spatial_dbscan")]
#[command(about = "Spatial hotspot analysis: UTM projection + DBSCAN clustering", long_about = None)]
struct Args {
    /// Input CSV file with latitude,longitude columns (default: generate demo data)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output CSV file with labeled points
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// DBSCAN epsilon parameter (clustering radius in meters)
    #[arg(short, long, default_value_t = 250.0)]
    eps: f64,

    /// DBSCAN min_samples parameter (minimum points in eps-neighborhood)
    #[arg(short = 'm', long, default_value_t = 5)]
    min_samples: usize,

    /// Seed for the synthetic demo dataset
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let records = match &args.input {
        Some(input) => match read_records(input) {
            Ok(records) => {
                if args.debug {
                    println!("Read {} points from {:?}", records.len(), input);
                }
                records
            }
            Err(e) => {
                eprintln!("Error reading CSV: {}", e);
                std::process::exit(1);
            }
        },
        None => match modesto_demo(args.seed) {
            Ok(records) => {
                if args.debug {
                    println!(
                        "Generated {} demo points with seed {}",
                        records.len(),
                        args.seed
                    );
                }
                records
            }
            Err(e) => {
                eprintln!("Error generating demo data: {}", e);
                std::process::exit(1);
            }
        },
    };

    if records.is_empty() {
        eprintln!("No points found in CSV file");
        std::process::exit(1);
    }

    if args.debug {
        println!(
            "Running DBSCAN with eps={:.1} m, min_samples={}",
            args.eps, args.min_samples
        );
    }

    let config = AnalysisConfig {
        eps: args.eps,
        min_samples: args.min_samples,
    };
    let result = match analyze(records, &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Analysis failed: {}", e);
            std::process::exit(1);
        }
    };

    print_report(&result);

    if let Some(output_file) = &args.output {
        if let Err(e) = write_results_to_csv(output_file, &result) {
            eprintln!("Error writing CSV: {}", e);
            std::process::exit(1);
        }
        if args.debug {
            println!("Labeled points written to {:?}", output_file);
        }
    }
}

/// Reads point records from a CSV file
///
/// Expected format: `latitude,longitude` (header row is optional, detected
/// by a non-numeric first field). Extra columns are ignored; rows whose
/// coordinate columns fail to parse are skipped. Out-of-range coordinates
/// are an error, never clamped.
fn read_records(filename: &PathBuf) -> Result<Vec<PointRecord>, Box<dyn std::error::Error>> {
    let file = File::open(filename)?;
    let mut reader = ReaderBuilder::new().has_headers(false).from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        rows.push(row);
    }

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    // Determine if first row is header
    let has_header = rows[0][0].parse::<f64>().is_err();
    let start_idx = if has_header { 1 } else { 0 };

    let mut records = Vec::new();
    for row in rows.iter().skip(start_idx) {
        if row.len() < 2 {
            continue;
        }

        let lat = row[0].parse::<f64>();
        let lon = row[1].parse::<f64>();
        if let (Ok(lat), Ok(lon)) = (lat, lon) {
            let location = GeodeticPoint::new(lon, lat)?;
            records.push(PointRecord::new(records.len(), location));
        }
    }

    Ok(records)
}

/// Prints the analysis report to stdout
fn print_report(result: &AnalysisResult) {
    let stats = &result.statistics;
    let report = &result.zone_report;

    println!("Total points: {}", stats.total);
    println!(
        "Projection: UTM zone {}{}",
        report.zone.number,
        if report.zone.south { "S" } else { "N" }
    );
    if report.spans_zones {
        println!(
            "Warning: dataset spans UTM zones; projected into zone {} \
             (max central meridian offset {:.2} deg)",
            report.zone.number, report.max_meridian_offset_deg
        );
    }
    println!("Clusters found: {}", result.clusters.len());
    println!(
        "Noise points: {} ({:.1}%)",
        stats.noise_count,
        stats.noise_ratio * 100.0
    );
    for cluster in &result.clusters {
        println!(
            "Cluster {}: {} points, centroid ({:.4}, {:.4})",
            cluster.id, cluster.size, cluster.centroid.lat, cluster.centroid.lon
        );
    }
    println!(
        "Extent: {:.0} m x {:.0} m, density {:.2} points/km^2",
        stats.extent_width_m, stats.extent_height_m, stats.density_per_km2
    );
    println!(
        "Suggested parameters: eps={:.1} m, min_samples={}",
        stats.suggested_eps, stats.suggested_min_samples
    );
}

/// Writes labeled points to an output CSV
///
/// Columns: `id,latitude,longitude,cluster,source,hotspot` where cluster
/// is the assigned label (-1 for noise) and the last two columns carry
/// generator provenance when present.
fn write_results_to_csv(
    output_file: &PathBuf,
    result: &AnalysisResult,
) -> Result<(), Box<dyn std::error::Error>> {
    let out_file = File::create(output_file)?;
    let mut writer = WriterBuilder::new().from_writer(out_file);

    writer.write_record(["id", "latitude", "longitude", "cluster", "source", "hotspot"])?;

    for (record, &label) in result.records.iter().zip(&result.labels) {
        let source = record.attributes.get(SOURCE_KEY).map_or("", |s| s.as_str());
        let hotspot = record
            .attributes
            .get(HOTSPOT_KEY)
            .map_or("", |s| s.as_str());
        writer.write_record([
            record.id.to_string(),
            record.location.lat.to_string(),
            record.location.lon.to_string(),
            label.to_string(),
            source.to_string(),
            hotspot.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
