//! Sprite and font loading. Every asset is optional: a missing file is logged and
//! the renderer falls back to plain shapes.

use std::path::Path;

use macroquad::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("texture {path} could not be loaded: {reason}")]
    Texture { path: String, reason: String },
    #[error("font {path} could not be loaded: {reason}")]
    Font { path: String, reason: String },
}

#[derive(Default)]
pub struct Assets {
    pub background: Option<Texture2D>,
    pub bird: Option<Texture2D>,
    pub pipe: Option<Texture2D>,
    pub floor: Option<Texture2D>,
    pub font: Option<Font>,
}

impl Assets {
    pub async fn load(dir: &str) -> Self {
        let root = Path::new(dir);
        let images = root.join("media").join("img");

        Self {
            background: texture(&images.join("background-day.png")).await,
            bird: texture(&images.join("bluebird-midflap.png")).await,
            pipe: texture(&images.join("pipe-green.png")).await,
            floor: texture(&images.join("base.png")).await,
            font: font(&root.join("font").join("04B_19.TTF")).await,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.background.is_some()
            && self.bird.is_some()
            && self.pipe.is_some()
            && self.floor.is_some()
            && self.font.is_some()
    }
}

async fn load_texture_file(path: &Path) -> Result<Texture2D, AssetError> {
    let path = path.to_string_lossy().into_owned();
    let loaded = load_texture(&path).await;
    let texture = loaded.map_err(|e| AssetError::Texture {
        reason: e.to_string(),
        path,
    })?;
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}

async fn load_font_file(path: &Path) -> Result<Font, AssetError> {
    let path = path.to_string_lossy().into_owned();
    let loaded = load_ttf_font(&path).await;
    loaded.map_err(|e| AssetError::Font {
        reason: e.to_string(),
        path,
    })
}

async fn texture(path: &Path) -> Option<Texture2D> {
    load_texture_file(path)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "drawing rectangles instead"))
        .ok()
}

async fn font(path: &Path) -> Option<Font> {
    load_font_file(path)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "text overlays disabled"))
        .ok()
}
