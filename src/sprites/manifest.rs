//! Sprite manifest loading and image lookup.
//!
//! The manifest names an image directory per fighter and per fireball plus the
//! platform and background images. Images that are not on disk are skipped and
//! the renderer draws a flat coloured rectangle in their place.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::AnimationKind;
use crate::combat::PlayerId;
use crate::content::ContentLoadError;

/// Manifest location, relative to the working directory.
pub const MANIFEST_PATH: &str = "assets/sprites/manifest.json";

/// Asset root that manifest paths are relative to.
const ASSET_ROOT: &str = "assets";

/// Raw manifest JSON structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpriteManifest {
    pub version: u32,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub platform: Option<ImageDef>,
    #[serde(default)]
    pub fighters: Vec<FighterSpritesDef>,
    #[serde(default)]
    pub projectiles: Vec<ProjectileSpritesDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageDef {
    pub path: String,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
}

/// Right-facing images for one fighter, stored as `<directory>/<kind><index>.png`.
#[derive(Debug, Clone, Deserialize)]
pub struct FighterSpritesDef {
    pub player: PlayerId,
    pub directory: String,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
}

/// Fireball images for one owner, stored as `<directory>/<index>.png`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectileSpritesDef {
    pub player: PlayerId,
    pub directory: String,
    pub frames: usize,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
}

fn default_color() -> [f32; 3] {
    [0.8, 0.8, 0.8]
}

fn to_color(rgb: [f32; 3]) -> Color {
    Color::srgb(rgb[0], rgb[1], rgb[2])
}

impl SpriteManifest {
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    pub fn load(path: &Path) -> Result<Self, ContentLoadError> {
        let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
            file: path.display().to_string(),
            message: format!("IO error: {}", e),
        })?;
        Self::from_json(&contents).map_err(|e| ContentLoadError {
            file: path.display().to_string(),
            message: format!("Parse error: {}", e),
        })
    }
}

/// Loaded image handles keyed by enum tuples, plus fallback colours.
#[derive(Resource, Debug, Clone)]
pub struct SpriteRegistry {
    fighters: HashMap<(PlayerId, AnimationKind, usize), Handle<Image>>,
    projectiles: HashMap<(PlayerId, usize), Handle<Image>>,
    pub platform: Option<Handle<Image>>,
    pub background: Option<Handle<Image>>,
    fighter_colors: [Color; 2],
    projectile_colors: [Color; 2],
    pub platform_color: Color,
    /// Manifest entries whose image file was not found.
    pub missing: usize,
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self {
            fighters: HashMap::new(),
            projectiles: HashMap::new(),
            platform: None,
            background: None,
            fighter_colors: [Color::srgb(0.8, 0.25, 0.2), Color::srgb(0.25, 0.4, 0.85)],
            projectile_colors: [Color::srgb(1.0, 0.55, 0.1), Color::srgb(0.4, 0.8, 1.0)],
            platform_color: Color::srgb(0.35, 0.22, 0.15),
            missing: 0,
        }
    }
}

impl SpriteRegistry {
    /// Resolve every manifest entry against the asset root and load the
    /// images that exist.
    pub fn from_manifest(manifest: &SpriteManifest, asset_server: &AssetServer) -> Self {
        let mut registry = SpriteRegistry::default();
        let load = |path: String, missing: &mut usize| -> Option<Handle<Image>> {
            if Path::new(ASSET_ROOT).join(&path).exists() {
                Some(asset_server.load(path))
            } else {
                *missing += 1;
                None
            }
        };
        let mut missing = 0;

        for def in &manifest.fighters {
            registry.fighter_colors[def.player.index()] = to_color(def.color);
            for kind in AnimationKind::ALL {
                for index in 0..kind.cycle().image_count() {
                    let path = format!("{}/{}{}.png", def.directory, kind.file_stem(), index);
                    if let Some(handle) = load(path, &mut missing) {
                        registry.fighters.insert((def.player, kind, index), handle);
                    }
                }
            }
        }

        for def in &manifest.projectiles {
            registry.projectile_colors[def.player.index()] = to_color(def.color);
            for index in 0..def.frames {
                let path = format!("{}/{}.png", def.directory, index);
                if let Some(handle) = load(path, &mut missing) {
                    registry.projectiles.insert((def.player, index), handle);
                }
            }
        }

        if let Some(platform) = &manifest.platform {
            registry.platform_color = to_color(platform.color);
            registry.platform = load(platform.path.clone(), &mut missing);
        }
        if let Some(background) = &manifest.background {
            registry.background = load(background.clone(), &mut missing);
        }

        registry.missing = missing;
        registry
    }

    pub fn fighter_image(
        &self,
        player: PlayerId,
        kind: AnimationKind,
        index: usize,
    ) -> Option<Handle<Image>> {
        self.fighters.get(&(player, kind, index)).cloned()
    }

    pub fn projectile_image(&self, player: PlayerId, index: usize) -> Option<Handle<Image>> {
        self.projectiles.get(&(player, index)).cloned()
    }

    pub fn fighter_color(&self, player: PlayerId) -> Color {
        self.fighter_colors[player.index()]
    }

    pub fn projectile_color(&self, player: PlayerId) -> Color {
        self.projectile_colors[player.index()]
    }
}

/// System to load the sprite manifest at startup.
pub(crate) fn load_sprite_registry(
    mut registry: ResMut<SpriteRegistry>,
    asset_server: Res<AssetServer>,
) {
    let manifest = match SpriteManifest::load(Path::new(MANIFEST_PATH)) {
        Ok(manifest) => manifest,
        Err(e) => {
            warn!("{}; drawing placeholder shapes", e);
            return;
        }
    };

    *registry = SpriteRegistry::from_manifest(&manifest, &asset_server);
    if registry.missing > 0 {
        warn!(
            "{} sprite images listed in {} were not found; using placeholder shapes for them",
            registry.missing, MANIFEST_PATH
        );
    }
    info!(
        "Loaded sprite manifest v{} with {} fighter and {} fireball images",
        manifest.version,
        registry.fighters.len(),
        registry.projectiles.len()
    );
}
