use anyhow::{Context, Result};
use llproto_core::{scanner::scan_stream_with_stats, FrameConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::info;

#[derive(Serialize, Deserialize)]
struct RecoveredFrame {
    offset: usize,
    size: usize,
    payload: String,
}

pub fn execute(config: &FrameConfig, input: &str, output: Option<&str>, stats_only: bool) -> Result<()> {
    info!("Scanning file: {}", input);

    // Read input file
    let data = fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;

    info!("File size: {} bytes", data.len());

    let (located_frames, stats) = scan_stream_with_stats(config, &data);

    // Print statistics
    println!("\n=== Scan Results ===");
    println!("Bytes scanned:     {} bytes", stats.bytes_scanned);
    println!("Valid frames:      {}", stats.frames_found);
    println!("Too short:         {}", stats.too_short);
    println!("Too long:          {}", stats.too_long);
    println!("Incomplete tail:   {} bytes", stats.incomplete_tail);
    println!("Bytes recovered:   {} bytes", stats.bytes_recovered);
    println!("Recovery rate:     {:.2}%", stats.recovery_rate());
    println!();

    if stats_only {
        return Ok(());
    }

    let recovered: Vec<RecoveredFrame> = located_frames
        .iter()
        .map(|lf| RecoveredFrame {
            offset: lf.offset,
            size: lf.size,
            payload: hex::encode(&lf.payload),
        })
        .collect();

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&recovered)
            .with_context(|| "Failed to serialize recovered frames")?;

        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;

        info!("Recovered frames written to: {}", output_path);
    } else {
        println!("=== Recovered Frames ===");
        for frame in &recovered {
            println!("Frame @ offset {}: {} bytes, payload {}", frame.offset, frame.size, frame.payload);
        }
    }

    Ok(())
}
