//! Opaque texture and sound handles.
//!
//! The renderer and audio engine own the actual assets. Animations only
//! carry small ids, resolved once from names when an animation is built.
//!
//! ```
//! use chip_fx::core::AssetTable;
//!
//! let mut assets = AssetTable::new();
//! let halo = assets.register_texture("halo");
//! assert_eq!(assets.texture("fx", "halo"), Ok(halo));
//! assert!(assets.texture("fx", "missing").is_err());
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};

/// Handle to a texture (visual descriptor) owned by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u16);

impl TextureId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TextureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Texture({})", self.0)
    }
}

/// Handle to a play-once sound owned by the audio engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoundId(pub u16);

impl SoundId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for SoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sound({})", self.0)
    }
}

/// Name → handle lookup for textures and sounds.
///
/// Games fill this at load time with whatever ids their renderer and
/// audio engine hand out. Registration is idempotent: registering a name
/// twice returns the id it already has.
#[derive(Clone, Debug, Default)]
pub struct AssetTable {
    textures: FxHashMap<String, TextureId>,
    sounds: FxHashMap<String, SoundId>,
}

impl AssetTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture under an auto-assigned id.
    pub fn register_texture(&mut self, name: impl Into<String>) -> TextureId {
        let next = TextureId::new(self.textures.len() as u16);
        *self.textures.entry(name.into()).or_insert(next)
    }

    /// Register a sound under an auto-assigned id.
    pub fn register_sound(&mut self, name: impl Into<String>) -> SoundId {
        let next = SoundId::new(self.sounds.len() as u16);
        *self.sounds.entry(name.into()).or_insert(next)
    }

    /// Bind a texture name to an id chosen by the renderer.
    pub fn insert_texture(&mut self, name: impl Into<String>, id: TextureId) {
        self.textures.insert(name.into(), id);
    }

    /// Bind a sound name to an id chosen by the audio engine.
    pub fn insert_sound(&mut self, name: impl Into<String>, id: SoundId) {
        self.sounds.insert(name.into(), id);
    }

    /// Resolve a texture for `animation`, failing if it was never loaded.
    pub fn texture(&self, animation: &str, name: &str) -> ConfigResult<TextureId> {
        self.textures
            .get(name)
            .copied()
            .ok_or_else(|| ConfigError::MissingTexture {
                animation: animation.to_string(),
                texture: name.to_string(),
            })
    }

    /// Resolve a sound for `animation`, failing if it was never loaded.
    pub fn sound(&self, animation: &str, name: &str) -> ConfigResult<SoundId> {
        self.sounds
            .get(name)
            .copied()
            .ok_or_else(|| ConfigError::MissingSound {
                animation: animation.to_string(),
                sound: name.to_string(),
            })
    }

    /// Look up a texture id without an error context.
    #[must_use]
    pub fn texture_id(&self, name: &str) -> Option<TextureId> {
        self.textures.get(name).copied()
    }

    /// Look up a sound id without an error context.
    #[must_use]
    pub fn sound_id(&self, name: &str) -> Option<SoundId> {
        self.sounds.get(name).copied()
    }

    #[must_use]
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    #[must_use]
    pub fn sound_count(&self) -> usize {
        self.sounds.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_idempotent() {
        let mut assets = AssetTable::new();
        let a = assets.register_texture("halo");
        let b = assets.register_texture("heal_cross");
        let again = assets.register_texture("halo");

        assert_eq!(a, TextureId::new(0));
        assert_eq!(b, TextureId::new(1));
        assert_eq!(again, a);
        assert_eq!(assets.texture_count(), 2);
    }

    #[test]
    fn test_missing_assets() {
        let mut assets = AssetTable::new();
        assets.register_sound("buff");

        assert_eq!(assets.sound("doping", "buff"), Ok(SoundId::new(0)));
        assert_eq!(
            assets.sound("shock", "lightning"),
            Err(ConfigError::MissingSound {
                animation: "shock".to_string(),
                sound: "lightning".to_string(),
            })
        );
        assert!(assets.texture("shock", "cloud").is_err());
    }

    #[test]
    fn test_insert_explicit_ids() {
        let mut assets = AssetTable::new();
        assets.insert_texture("plasma", TextureId::new(900));
        assets.insert_sound("electrisor", SoundId::new(12));

        assert_eq!(assets.texture_id("plasma"), Some(TextureId::new(900)));
        assert_eq!(assets.sound_id("electrisor"), Some(SoundId::new(12)));
        assert_eq!(assets.sound_id("nope"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TextureId::new(3)), "Texture(3)");
        assert_eq!(format!("{}", SoundId::new(4)), "Sound(4)");
    }
}
