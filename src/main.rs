use std::path::PathBuf;
use log::{info, LevelFilter};
use simplelog::{Config, SimpleLogger};
use clap::Parser;
use clap_num::maybe_hex;
use crate::image_builder::build_image;
use crate::error::PpmGenError;
use crate::output::write_image;
use crate::random::Random;
use crate::util::measure_exec_time;

mod color;
mod surface;
mod frame;
mod rasterizer;
mod random;
mod image_builder;
mod ppm;
mod output;
mod error;
mod util;
#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(
        short = 'd',
        long = "debug",
        help = "debug mode",
        default_value_t = 0
    )]
    debug: u8,

    #[arg(
        short = 's',
        long = "seed",
        help = "seed for a reproducible image, entropy seeded when omitted",
        value_parser=maybe_hex::<u64>
    )]
    seed: Option<u64>,

    #[arg(
        short = 'o',
        long = "output",
        help = "output PPM file",
        default_value = "./image.ppm"
    )]
    output: PathBuf
}

fn logger_init(debug: u8) -> Result<(), PpmGenError> {

    let log_level = match debug {
        1 => LevelFilter::Debug,
        2 => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    SimpleLogger::init(log_level, Config::default())?;
    Ok(())
}

fn main() -> Result<(), PpmGenError> {
    let args: Args = Args::parse();

    logger_init(args.debug)?;

    info!("PPM Generator");

    let mut random = if let Some(seed) = args.seed {
        info!("seed: 0x{:016X}", seed);
        Random::with_seed(seed)
    } else {
        info!("seed: entropy");
        Random::new()
    };

    let (data, duration) = measure_exec_time(|| {
        let frame = build_image(&mut random);
        ppm::encode(&frame)
    });

    info!("image generated, execution time: {:.2?}", duration);

    let size = write_image(&args.output, &data)?;
    info!("wrote {} bytes to {}", size, args.output.display());

    Ok(())
}
