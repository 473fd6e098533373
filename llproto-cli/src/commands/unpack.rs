use anyhow::{Context, Result};
use llproto_core::{scanner::scan_stream_with_stats, FrameConfig};
use std::fs;
use tracing::{info, warn};

/// Recover every frame in a captured stream and write the payloads back to back
pub fn execute(config: &FrameConfig, input: &str, output: &str) -> Result<()> {
    info!("Unpacking frames from {} to {}", input, output);

    let data = fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;

    let (located_frames, stats) = scan_stream_with_stats(config, &data);

    if stats.decode_failures() > 0 || stats.incomplete_tail > 0 {
        warn!(
            "Skipped {} damaged frame candidates and {} trailing bytes",
            stats.decode_failures(),
            stats.incomplete_tail
        );
    }

    let mut output_data = Vec::with_capacity(located_frames.len() * config.payload_size());
    for frame in &located_frames {
        output_data.extend_from_slice(&frame.payload);
    }

    fs::write(output, &output_data)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    info!(
        "Unpacked {} frames ({} payload bytes)",
        located_frames.len(),
        output_data.len()
    );

    Ok(())
}
