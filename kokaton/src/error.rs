use std::path::PathBuf;
use thiserror::Error;

/// All the ways the game can fail to start.
#[derive(Debug, Error)]
pub enum Error {
    /// None of the candidate directories holds the game's artwork.
    #[error("No asset directory found, searched: {searched:?}")]
    AssetDirNotFound { searched: Vec<PathBuf> },
    /// An asset file does not exist.
    #[error("Missing asset `{}`", path.display())]
    MissingAsset { path: PathBuf },
    /// An asset file exists but could not be decoded.
    #[error("Unable to decode asset `{}`", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
