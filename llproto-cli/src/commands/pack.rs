use anyhow::{bail, Context, Result};
use llproto_core::{encoder::encode_frame, FrameConfig};
use std::fs;
use tracing::info;

/// Split a raw file into payload-sized chunks and frame each one
///
/// A trailing partial chunk is an error unless `pad` supplies a fill byte.
pub fn execute(config: &FrameConfig, input: &str, output: &str, pad: Option<u8>) -> Result<()> {
    info!("Packing data from {} to {}", input, output);

    let data = fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;
    let size = config.payload_size();

    let trailing = data.len() % size;
    if trailing != 0 && pad.is_none() {
        bail!(
            "Input length {} is not a multiple of the payload size {} ({} trailing bytes); use --pad",
            data.len(),
            size,
            trailing
        );
    }

    let mut output_data = Vec::with_capacity(data.len() + data.len() / size * 2);
    let mut frames = 0usize;

    for chunk in data.chunks(size) {
        let result = if chunk.len() == size {
            encode_frame(config, chunk)
        } else {
            let mut padded = chunk.to_vec();
            padded.resize(size, pad.unwrap_or_default());
            encode_frame(config, &padded)
        };
        let encoded = result.with_context(|| format!("Failed to encode frame {}", frames))?;

        output_data.extend_from_slice(&encoded);
        frames += 1;
    }

    fs::write(output, &output_data)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    info!(
        "Successfully packed {} frames ({} bytes total, {} bytes redundancy)",
        frames,
        output_data.len(),
        output_data.len() - frames * size
    );

    Ok(())
}
