use bit_stream::BitStream;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Packing 10-bit sensor readings ===\n");

    let readings: Vec<u16> = vec![512, 1019, 3, 744, 88];

    let mut stream = BitStream::new();
    for reading in &readings {
        stream.write_bits(reading, 10);
    }

    println!(
        "  {} readings -> {} bytes (a Vec<u16> would take {})",
        readings.len(),
        stream.len(),
        readings.len() * 2
    );

    let path = std::env::temp_dir().join("readings.bits");
    stream.write_to_file(&path)?;

    let mut loaded = BitStream::from_file(&path)?;
    println!("  reloaded {} bytes from {}\n", loaded.len(), path.display());

    for (i, reading) in readings.iter().enumerate() {
        let value: u16 = loaded.read_bits_as(10)?;
        println!("  reading {i}: {value}");
        assert_eq!(value, *reading);
    }

    std::fs::remove_file(&path)?;
    Ok(())
}
