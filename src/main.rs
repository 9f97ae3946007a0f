use anyhow::{Context, Result};
use log::info;

use gcode_packet_encoder::config::Args;
use gcode_packet_encoder::encoder;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::from_env();

    info!(
        "encoding {} -> {}",
        args.input.display(),
        args.output.display()
    );

    encoder::encode_file(&args.input, &args.output)
        .with_context(|| format!("failed to encode {}", args.input.display()))?;

    Ok(())
}
