use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::sprites::Sprite;
use log::debug;

/// Asset identifiers.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Frame {
    Background,
    Kokaton,
    Victory,
    Defeat,
    Beam,
    Explosion,
}

/// A list of assets loaded into memory.
#[derive(Debug)]
pub struct Assets {
    background: Sprite,
    kokaton: Sprite,
    victory: Sprite,
    defeat: Sprite,
    beam: Sprite,
    explosion: Sprite,
}

impl Frame {
    pub const ALL: [Frame; 6] = [
        Frame::Background,
        Frame::Kokaton,
        Frame::Victory,
        Frame::Defeat,
        Frame::Beam,
        Frame::Explosion,
    ];

    /// File name of the asset within the asset directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Frame::Background => "pg_bg.jpg",
            Frame::Kokaton => "3.png",
            Frame::Victory => "6.png",
            Frame::Defeat => "8.png",
            Frame::Beam => "beam.png",
            Frame::Explosion => "explosion.gif",
        }
    }
}

impl Assets {
    /// Build the asset list from any sprite source, e.g. procedurally generated artwork.
    pub fn from_fn<F>(mut f: F) -> Assets
    where
        F: FnMut(Frame) -> Sprite,
    {
        Assets {
            background: f(Frame::Background),
            kokaton: f(Frame::Kokaton),
            victory: f(Frame::Victory),
            defeat: f(Frame::Defeat),
            beam: f(Frame::Beam),
            explosion: f(Frame::Explosion),
        }
    }

    pub fn sprite(&self, frame: Frame) -> &Sprite {
        match frame {
            Frame::Background => &self.background,
            Frame::Kokaton => &self.kokaton,
            Frame::Victory => &self.victory,
            Frame::Defeat => &self.defeat,
            Frame::Beam => &self.beam,
            Frame::Explosion => &self.explosion,
        }
    }
}

/// Pick the first candidate directory that exists.
pub fn find_asset_dir<I>(candidates: I) -> Result<PathBuf, Error>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut searched = Vec::new();

    for dir in candidates {
        if dir.is_dir() {
            return Ok(dir);
        }
        searched.push(dir);
    }

    Err(Error::AssetDirNotFound { searched })
}

/// Load all static assets from `dir` into an `Assets` structure.
///
/// Every asset is required.
pub fn load_assets(dir: &Path) -> Result<Assets, Error> {
    Ok(Assets {
        background: load_image(dir, Frame::Background)?,
        kokaton: load_image(dir, Frame::Kokaton)?,
        victory: load_image(dir, Frame::Victory)?,
        defeat: load_image(dir, Frame::Defeat)?,
        beam: load_image(dir, Frame::Beam)?,
        explosion: load_image(dir, Frame::Explosion)?,
    })
}

/// Decode an image file to RGBA pixels.
fn load_image(dir: &Path, frame: Frame) -> Result<Sprite, Error> {
    let path = dir.join(frame.file_name());
    if !path.is_file() {
        return Err(Error::MissingAsset { path });
    }

    debug!("Loading {:?} from {}", frame, path.display());
    let image = image::open(&path).map_err(|source| Error::Decode {
        path: path.clone(),
        source,
    })?;

    Ok(Sprite::from_image(&image.to_rgba8()))
}
