use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info, LevelFilter};

use svgpix::{load_file, write_file, OutputFormat};

/// Render an SVG document, or convert a raster image, to a raster image
#[derive(Parser, Debug)]
#[command(name = "svgpix", version, about)]
struct Args {
    /// Input document (.svg) or raster image (png, ppm, p3, bmp, jpg, ico, gif)
    input: PathBuf,

    /// Output image; format taken from the extension
    /// (png, ppm, pnm, p3, bmp, jpg, jpeg, ico, gif)
    output: PathBuf,

    /// Output format, overrides the extension
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// More logging, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn run(args: &Args) -> svgpix::Result<()> {
    let format = match args.format {
        Some(f) => f,
        None => OutputFormat::from_path(&args.output)?,
    };
    let img = load_file(&args.input)?;
    write_file(&img, &args.output, format)?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::new();
    logger.filter_level(level(args.verbose));
    if std::env::var_os("RUST_LOG").is_some() {
        logger.parse_default_env();
    }
    logger.init();

    if let Err(e) = run(&args) {
        error!("{}: {}", args.input.display(), e);
        process::exit(1);
    }
    info!("converted {} to {}", args.input.display(), args.output.display());
}
