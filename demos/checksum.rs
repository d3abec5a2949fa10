//! Hash each command-line argument and print the digests
//!
//! Run with `cargo run --example checksum -- abc hello`.

use sha256::digest_hex;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        println!("usage: checksum <message> [<message>...]");
        println!("empty message digest: {}", digest_hex(b"")?);
        return Ok(());
    }

    for arg in &args {
        println!("{}  {arg}", digest_hex(arg.as_bytes())?);
    }

    Ok(())
}
