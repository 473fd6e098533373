//! Basic encoding example

use llproto_core::{Framer, Status};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("llproto Basic Encoding Example\n");

    let framer = Framer::with_markers(8, 0xAA, 0xBB, 0xCC)?;

    // Sensor readings, some of which collide with marker values
    let readings: [[u8; 8]; 3] = [
        [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08],
        [0x10, 0xAA, 0x20, 0xBB, 0x30, 0xCC, 0x40, 0x50],
        [0xCC; 8],
    ];

    let mut output = Vec::new();
    for (i, reading) in readings.iter().enumerate() {
        let encoded = framer.encode(reading)?;
        println!(
            "Frame {}: {} bytes (redundancy {} bytes)",
            i + 1,
            encoded.len(),
            encoded.len() - reading.len()
        );
        output.extend_from_slice(&encoded);
    }

    std::fs::write("example_output.llp", &output)?;
    println!("\nWrote {} bytes to example_output.llp", output.len());

    // Read the frames back one call at a time
    let mut payload = [0u8; 8];
    let mut rest = &output[..];
    loop {
        let result = framer.decode(rest, &mut payload);
        if result.status != Status::Success {
            println!("Stopped: {}", result.status);
            break;
        }
        println!("Decoded {:02X?}", payload);
        if result.remainder == 0 {
            break;
        }
        rest = &rest[result.remainder..];
    }

    println!("Use 'llproto scan --input example_output.llp --payload-size 8' to read it back");

    Ok(())
}
