use image::ImageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error while saving image: {0}")]
    Image(#[from] ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Sampler(#[from] hcl_gamut::Error),

    #[error("Scale must be at least 1")]
    ZeroScale,
    #[error("A {resolution} sample slice at scale {scale} does not fit in an image")]
    ImageTooLarge { resolution: usize, scale: u32 },
    #[error("--pick-x and --pick-y must be given together")]
    IncompletePick,
}
