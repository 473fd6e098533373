//! Example demonstrating recovery from a noisy link

use llproto_core::{Framer, Status};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("llproto Noisy Link Recovery Example\n");

    let framer = Framer::default();

    // Step 1: Frame ten messages
    println!("Step 1: Creating 10 frames...");
    let mut stream = Vec::new();
    for i in 0..10u8 {
        let mut payload = [0u8; 16];
        payload.iter_mut().enumerate().for_each(|(j, b)| *b = i ^ (j as u8 * 0x11));
        stream.extend_from_slice(&framer.encode(&payload)?);
        stream.extend_from_slice(b"\x00\x00");
    }
    println!("Created clean stream: {} bytes\n", stream.len());

    // Step 2: Damage the stream
    println!("Step 2: Simulating damage...");
    stream[45..50].fill(0xFF);
    println!("Overwrote bytes 45-50");
    stream.drain(100..104);
    println!("Deleted bytes 100-104");
    println!("Damaged stream: {} bytes\n", stream.len());

    // Step 3: Scan
    println!("Step 3: Scanning damaged stream...");
    let (frames, stats) = framer.scan(&stream);

    println!("\n=== Recovery Results ===");
    println!("Bytes scanned:     {}", stats.bytes_scanned);
    println!("Valid frames:      {}", stats.frames_found);
    println!("Too short:         {}", stats.too_short);
    println!("Too long:          {}", stats.too_long);
    println!("Recovery rate:     {:.2}%", stats.recovery_rate());

    for frame in &frames {
        println!("  offset {:4}: {:02X?}", frame.offset, frame.payload.as_ref());
    }

    // Step 4: A single decode call tells exactly why a candidate failed
    println!("\nStep 4: Inspecting the first damaged candidate...");
    let mut payload = [0u8; 16];
    let mut rest = &stream[..];
    loop {
        let result = framer.decode(rest, &mut payload);
        match result.status {
            Status::Success if result.remainder > 0 => rest = &rest[result.remainder..],
            Status::MessageTooShort | Status::MessageTooLong => {
                println!("Candidate rejected: {} (resume at +{})", result.status, result.remainder);
                break;
            }
            _ => {
                println!("No damaged candidate found: {}", result.status);
                break;
            }
        }
    }

    Ok(())
}
