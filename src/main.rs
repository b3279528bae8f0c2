//
// image2grlib: convert a monochrome BMP into a 1BPP_UNCOMP tImage C
// source for the MSP430 Graphics Library.
//

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, error, info};

mod bitmap;
mod error;
mod input;
mod source;

use error::{Error, Result};

#[derive(Debug, Parser)]
#[command(name = "image2grlib")]
#[command(about = "Convert a monochrome BMP into grlib C source")]
#[command(version)]
struct Cli {
    /// Input .bmp file in monochrome format
    input: PathBuf,

    /// Output object name; also names the generated <NAME>.c
    name: String,

    /// Only log results and errors
    #[arg(short, long)]
    quiet: bool,

    /// Reject bitmaps containing pixels other than pure black or white
    #[arg(short, long)]
    strict: bool,
}

fn init_logging(quiet: bool) {
    let level = if quiet { "info" } else { "debug" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Parse the command line. Help and version requests exit immediately.
fn parse_cli<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => Err(Error::ArgumentCount(e)),
    }
}

fn convert(cli: &Cli) -> Result<PathBuf> {
    let gray = input::load_grayscale(&cli.input, cli.strict)?;
    let packed = bitmap::pack(&gray);

    let path = source::source_path(&cli.name);
    source::create_source_file(&path, &cli.name, &packed)?;
    Ok(path)
}

fn main() {
    let cli = match parse_cli(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            init_logging(false);
            error!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    init_logging(cli.quiet);
    debug!("args: {:?}", cli);

    match convert(&cli) {
        Ok(path) => info!("{} converted to {} successfully", cli.input.display(), path.display()),
        Err(e) => {
            error!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
