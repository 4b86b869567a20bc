mod error;

use std::path::PathBuf;

use clap::Parser;
use hcl_gamut::{Component, GamutSampler, SamplerConfig, ViewMode};
use image::{Rgba, RgbaImage};
use serde::Deserialize;

use error::Error;

/// Render a slice through the HCL color space to a PNG image. Colors outside
/// of the sRGB gamut are transparent.
#[derive(Parser)]
struct Args {
    /// Which axes vary across the image: hlc, clh or hcl.
    #[clap(long, value_parser)]
    mode: Option<ViewMode>,
    /// Value of the axis that is held fixed.
    #[clap(long, value_parser, allow_hyphen_values = true)]
    value: Option<Component>,
    /// Number of samples along each side of the image.
    #[clap(long, value_parser)]
    resolution: Option<usize>,
    /// Enlarge each sample to a block of scale x scale pixels.
    #[clap(long, value_parser, default_value_t = 1)]
    scale: u32,
    /// TOML file with a [sampler] table and default mode and value.
    #[clap(long, value_parser)]
    config: Option<PathBuf>,
    /// Where to write the PNG image.
    #[clap(short, long, value_parser, default_value = "slice.png")]
    output: PathBuf,
    /// Print the color under this pixel of the output image.
    #[clap(long, value_parser)]
    pick_x: Option<Component>,
    /// See --pick-x.
    #[clap(long, value_parser)]
    pick_y: Option<Component>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    sampler: SamplerConfig,
    mode: ViewMode,
    value: Component,
}

impl Config {
    fn load(args: &Args) -> Result<Self, Error> {
        let mut config = match &args.config {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                toml::from_str(&std::fs::read_to_string(path)?)?
            }
            None => Config::default(),
        };

        if let Some(resolution) = args.resolution {
            config.sampler.resolution = resolution;
        }
        if let Some(mode) = args.mode {
            config.mode = mode;
        }
        if let Some(value) = args.value {
            config.value = value;
        }

        Ok(config)
    }
}

/// Side length of the rendered image, or an error if it does not fit in 32
/// bits.
fn image_side(resolution: usize, scale: u32) -> Result<u32, Error> {
    u32::try_from(resolution)
        .ok()
        .and_then(|n| n.checked_mul(scale))
        .ok_or(Error::ImageTooLarge { resolution, scale })
}

fn render(sampler: &GamutSampler, scale: u32) -> Result<RgbaImage, Error> {
    let side = image_side(sampler.resolution(), scale)?;
    let n = sampler.resolution();
    let pixels = sampler.pixels();

    // Each sample becomes a scale x scale block, no blending between samples.
    Ok(RgbaImage::from_fn(side, side, |x, y| {
        let (x, y) = ((x / scale) as usize, (y / scale) as usize);
        Rgba(pixels[y * n + x].to_rgba())
    }))
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if args.scale == 0 {
        return Err(Error::ZeroScale);
    }
    let pick = match (args.pick_x, args.pick_y) {
        (Some(x), Some(y)) => Some((x, y)),
        (None, None) => None,
        _ => return Err(Error::IncompletePick),
    };

    let config = Config::load(&args)?;
    image_side(config.sampler.resolution, args.scale)?;

    let sampler = GamutSampler::with_view(config.sampler, config.mode, config.value)?;

    let img = render(&sampler, args.scale)?;
    img.save(&args.output)?;
    tracing::info!(
        "rendered {} slice at {} to {} ({} of {} samples out of gamut)",
        sampler.mode(),
        sampler.fixed_value(),
        args.output.display(),
        sampler.invalid_count(),
        sampler.pixels().len()
    );

    if let Some((x, y)) = pick {
        let (width, height) = img.dimensions();
        match sampler.lookup(x, y, width as Component, height as Component) {
            Some(color) => println!("{color}"),
            None => println!("no color"),
        }
    }

    Ok(())
}
