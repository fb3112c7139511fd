//! Serializable animation recipes.
//!
//! A `Recipe` names its textures and sounds instead of holding ids, so it
//! can live in a JSON file next to the game's asset manifest. `resolve`
//! turns it into a ready-to-launch `Animation` against an `AssetTable`.

use serde::{Deserialize, Serialize};

use crate::anim::{
    Alteration, Animation, Behavior, Buff, BuffKind, Debris, DevilStrike, Fire, Inversion, Jump, Meteorite, Orbit,
    Plasma, Punishment, Rockfall, Sparkle, Steal, Storm, Teleport, DEFAULT_METEORITES, SPARKLE_INTERVAL,
};
use crate::core::error::check_timing;
use crate::core::{Area, AssetTable, Color, ConfigError, ConfigResult, TextureId};

/// Area marker parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub area: Area,
    pub color: Color,
}

impl Marker {
    #[must_use]
    pub const fn new(area: Area, color: Color) -> Self {
        Self { area, color }
    }
}

fn default_sparkle_interval() -> f64 {
    SPARKLE_INTERVAL
}

fn default_meteorites() -> u32 {
    DEFAULT_METEORITES
}

/// Family parameters, with every texture and sound given by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum FamilyRecipe {
    /// Shield, boost, heal, debuff, poison and damage return.
    Buff {
        kind: BuffKind,
        icon: String,
        #[serde(default)]
        area: Area,
        /// Overrides the kind's marker color.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
        /// Sparkle period for kinds that have one.
        #[serde(default = "default_sparkle_interval")]
        interval: f64,
    },
    Steal {
        icon: String,
        aureol: String,
        spinning: String,
        sparkle: String,
        area: Area,
        color: Color,
    },
    Teleport,
    Inversion,
    Jump,
    Storm {
        cloud: String,
        cloud_z: f64,
        cloud_life: f64,
        bolt: String,
        spread: f64,
        period: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        marker: Option<Marker>,
    },
    Plasma {
        orb: String,
        bolts: [String; 2],
        #[serde(default)]
        sounds: Vec<String>,
    },
    Meteorite {
        #[serde(default = "default_meteorites")]
        bursts: u32,
    },
    Rockfall {
        rock: String,
    },
    DevilStrike {
        circle: String,
        shadow: String,
        laser: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        shot_sound: Option<String>,
    },
    Fire {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        burn: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        marker: Option<Marker>,
        /// `(initial delay, period)` of the scorch impacts.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scorch: Option<(f64, f64)>,
    },
    Debris {
        texture: String,
        height: f64,
        fall: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        marker: Option<Marker>,
    },
    Orbit {
        halo: String,
    },
    Alteration {
        texture: String,
    },
    Punishment {
        spikes: [String; 2],
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sword: Option<String>,
    },
}

/// One named animation.
///
/// ```
/// use chip_fx::catalog::{FamilyRecipe, Recipe};
/// use chip_fx::core::AssetTable;
///
/// let recipe = Recipe::new("rock", Some("rock"), 40.0, FamilyRecipe::Debris {
///     texture: "rock".into(),
///     height: 150.0,
///     fall: 2.0,
///     marker: None,
/// });
///
/// let mut assets = AssetTable::new();
/// assert!(recipe.resolve(&assets).is_err());
/// assets.register_texture("rock");
/// assets.register_sound("rock");
/// assert_eq!(recipe.resolve(&assets).unwrap().duration(), 40.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Launch sound; `None` for silent launches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    pub duration: f64,
    #[serde(flatten)]
    pub family: FamilyRecipe,
}

impl Recipe {
    #[must_use]
    pub fn new(name: impl Into<String>, sound: Option<&str>, duration: f64, family: FamilyRecipe) -> Self {
        Self {
            name: name.into(),
            sound: sound.map(str::to_string),
            duration,
            family,
        }
    }

    /// Check timings and burst counts without touching any asset.
    pub fn validate(&self) -> ConfigResult<()> {
        let name = self.name.as_str();
        check_timing(name, "duration", self.duration)?;
        match &self.family {
            FamilyRecipe::Buff { interval, .. } => {
                check_timing(name, "interval", *interval)?;
            }
            FamilyRecipe::Storm { period, cloud_life, .. } => {
                check_timing(name, "period", *period)?;
                check_timing(name, "cloud_life", *cloud_life)?;
            }
            FamilyRecipe::Meteorite { bursts } if *bursts == 0 => {
                return Err(ConfigError::EmptyBurst { animation: self.name.clone() });
            }
            FamilyRecipe::Fire { burn, scorch, .. } => {
                if let Some(burn) = burn {
                    check_timing(name, "burn", *burn)?;
                }
                if let Some((initial, period)) = scorch {
                    check_timing(name, "scorch period", *period)?;
                    if !(initial.is_finite() && *initial >= 0.0) {
                        return Err(ConfigError::InvalidTiming {
                            animation: self.name.clone(),
                            field: "scorch delay",
                            value: *initial,
                        });
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Resolve every name and build the animation, ready to launch.
    pub fn resolve(&self, assets: &AssetTable) -> ConfigResult<Animation> {
        self.validate()?;
        let name = self.name.as_str();
        let texture = |t: &str| assets.texture(name, t);
        let sound = self.sound.as_deref().map(|s| assets.sound(name, s)).transpose()?;

        let behavior = match &self.family {
            FamilyRecipe::Buff { kind, icon, area, color, interval } => {
                let mut buff = Buff::new(*kind, texture(icon)?, texture(kind.aureol())?, *area, *color);
                if let Some(sparkle) = kind.sparkle() {
                    buff = buff.with_sparkle(Sparkle::new(texture(sparkle)?), *interval);
                }
                Behavior::Buff(buff)
            }
            FamilyRecipe::Steal { icon, aureol, spinning, sparkle, area, color } => Behavior::Steal(Steal::new(
                texture(icon)?,
                texture(aureol)?,
                texture(spinning)?,
                Sparkle::new(texture(sparkle)?),
                *area,
                *color,
            )),
            FamilyRecipe::Teleport => Behavior::Teleport(Teleport::new()),
            FamilyRecipe::Inversion => Behavior::Inversion(Inversion::new()),
            FamilyRecipe::Jump => Behavior::Jump(Jump::new()),
            FamilyRecipe::Storm { cloud, cloud_z, cloud_life, bolt, spread, period, marker } => {
                let mut storm = Storm::new(texture(cloud)?, *cloud_z, *cloud_life, texture(bolt)?, *spread, *period);
                if let Some(marker) = marker {
                    storm = storm.with_area(marker.area, marker.color);
                }
                Behavior::Storm(storm)
            }
            FamilyRecipe::Plasma { orb, bolts, sounds } => {
                let bolts: [TextureId; 2] = [texture(&bolts[0])?, texture(&bolts[1])?];
                let sounds = sounds
                    .iter()
                    .map(|s| assets.sound(name, s))
                    .collect::<ConfigResult<Vec<_>>>()?;
                Behavior::Plasma(Plasma::new(texture(orb)?, bolts, self.duration).with_sounds(sounds))
            }
            FamilyRecipe::Meteorite { bursts } => Behavior::Meteorite(Meteorite::new(*bursts)),
            FamilyRecipe::Rockfall { rock } => Behavior::Rockfall(Rockfall::new(texture(rock)?)),
            FamilyRecipe::DevilStrike { circle, shadow, laser, shot_sound } => {
                let mut strike = DevilStrike::new(texture(circle)?, texture(shadow)?, texture(laser)?);
                if let Some(shot) = shot_sound {
                    strike = strike.with_shot_sound(assets.sound(name, shot)?);
                }
                Behavior::DevilStrike(strike)
            }
            FamilyRecipe::Fire { burn, icon, marker, scorch } => {
                let mut fire = Fire::new();
                if let Some(burn) = burn {
                    fire = fire.with_burn(*burn);
                }
                if let Some(icon) = icon {
                    fire = fire.with_icon(texture(icon)?);
                }
                if let Some(marker) = marker {
                    fire = fire.with_area(marker.area, marker.color);
                }
                if let Some((initial, period)) = scorch {
                    fire = fire.with_scorch(*initial, *period);
                }
                Behavior::Fire(fire)
            }
            FamilyRecipe::Debris { texture: t, height, fall, marker } => {
                let mut debris = Debris::new(texture(t)?, *height, *fall);
                if let Some(marker) = marker {
                    debris = debris.with_area(marker.area, marker.color);
                }
                Behavior::Debris(debris)
            }
            FamilyRecipe::Orbit { halo } => Behavior::Orbit(Orbit::new(texture(halo)?)),
            FamilyRecipe::Alteration { texture: t } => Behavior::Alteration(Alteration::new(texture(t)?)),
            FamilyRecipe::Punishment { spikes, sword } => {
                let mut punishment = Punishment::new([texture(&spikes[0])?, texture(&spikes[1])?]);
                if let Some(sword) = sword {
                    punishment = punishment.with_sword(assets.sound(name, sword)?);
                }
                Behavior::Punishment(punishment)
            }
        };

        Animation::new(name, sound, self.duration, behavior)
    }

    /// Every texture name the recipe references.
    #[must_use]
    pub fn texture_names(&self) -> Vec<&str> {
        match &self.family {
            FamilyRecipe::Buff { kind, icon, .. } => {
                let mut names = vec![icon.as_str(), kind.aureol()];
                names.extend(kind.sparkle());
                names
            }
            FamilyRecipe::Steal { icon, aureol, spinning, sparkle, .. } => {
                vec![icon.as_str(), aureol.as_str(), spinning.as_str(), sparkle.as_str()]
            }
            FamilyRecipe::Teleport | FamilyRecipe::Inversion | FamilyRecipe::Jump | FamilyRecipe::Meteorite { .. } => {
                Vec::new()
            }
            FamilyRecipe::Storm { cloud, bolt, .. } => vec![cloud.as_str(), bolt.as_str()],
            FamilyRecipe::Plasma { orb, bolts, .. } => vec![orb.as_str(), bolts[0].as_str(), bolts[1].as_str()],
            FamilyRecipe::Rockfall { rock } => vec![rock.as_str()],
            FamilyRecipe::DevilStrike { circle, shadow, laser, .. } => {
                vec![circle.as_str(), shadow.as_str(), laser.as_str()]
            }
            FamilyRecipe::Fire { icon, .. } => icon.iter().map(String::as_str).collect(),
            FamilyRecipe::Debris { texture, .. } => vec![texture.as_str()],
            FamilyRecipe::Orbit { halo } => vec![halo.as_str()],
            FamilyRecipe::Alteration { texture } => vec![texture.as_str()],
            FamilyRecipe::Punishment { spikes, .. } => vec![spikes[0].as_str(), spikes[1].as_str()],
        }
    }

    /// Every sound name the recipe references, launch sound first.
    #[must_use]
    pub fn sound_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sound.iter().map(String::as_str).collect();
        match &self.family {
            FamilyRecipe::Plasma { sounds, .. } => names.extend(sounds.iter().map(String::as_str)),
            FamilyRecipe::DevilStrike { shot_sound, .. } => names.extend(shot_sound.as_deref()),
            FamilyRecipe::Punishment { sword, .. } => names.extend(sword.as_deref()),
            _ => {}
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::{CompletionPolicy, FamilyKind};

    fn assets_for(recipe: &Recipe) -> AssetTable {
        let mut assets = AssetTable::new();
        for name in recipe.texture_names() {
            assets.register_texture(name);
        }
        for name in recipe.sound_names() {
            assets.register_sound(name);
        }
        assets
    }

    fn boost() -> Recipe {
        Recipe::new(
            "adrenaline",
            Some("buff"),
            60.0,
            FamilyRecipe::Buff {
                kind: BuffKind::Boost,
                icon: "chip_adrenaline".into(),
                area: Area::Circle1,
                color: None,
                interval: SPARKLE_INTERVAL,
            },
        )
    }

    #[test]
    fn test_resolve_boost() {
        let recipe = boost();
        assert_eq!(recipe.texture_names(), vec!["chip_adrenaline", "buff_aureol", "halo"]);

        let anim = recipe.resolve(&assets_for(&recipe)).unwrap();
        assert_eq!(anim.name(), "adrenaline");
        assert_eq!(anim.kind(), FamilyKind::Boost);
        assert!(anim.sound().is_some());
    }

    #[test]
    fn test_missing_texture_named_in_error() {
        let recipe = boost();
        let mut assets = AssetTable::new();
        assets.register_sound("buff");
        assets.register_texture("chip_adrenaline");
        assets.register_texture("buff_aureol");

        assert_eq!(
            recipe.resolve(&assets).unwrap_err(),
            ConfigError::MissingTexture {
                animation: "adrenaline".into(),
                texture: "halo".into(),
            }
        );
    }

    #[test]
    fn test_timing_validation() {
        let mut recipe = boost();
        recipe.duration = 0.0;
        assert!(matches!(recipe.validate(), Err(ConfigError::InvalidTiming { field: "duration", .. })));

        let mut recipe = boost();
        if let FamilyRecipe::Buff { interval, .. } = &mut recipe.family {
            *interval = -2.0;
        }
        assert!(matches!(recipe.validate(), Err(ConfigError::InvalidTiming { field: "interval", .. })));

        let fire = Recipe::new(
            "flame",
            None,
            70.0,
            FamilyRecipe::Fire { burn: Some(100.0), icon: None, marker: None, scorch: Some((-1.0, 12.0)) },
        );
        assert!(matches!(fire.validate(), Err(ConfigError::InvalidTiming { field: "scorch delay", .. })));
    }

    #[test]
    fn test_empty_burst_rejected() {
        let recipe = Recipe::new("meteorite", None, 100.0, FamilyRecipe::Meteorite { bursts: 0 });
        assert_eq!(
            recipe.resolve(&AssetTable::new()).unwrap_err(),
            ConfigError::EmptyBurst { animation: "meteorite".into() }
        );

        let recipe = Recipe::new("meteorite", None, 100.0, FamilyRecipe::Meteorite { bursts: 6 });
        let anim = recipe.resolve(&AssetTable::new()).unwrap();
        assert_eq!(anim.policy(), CompletionPolicy::Bursts);
    }

    #[test]
    fn test_sound_names() {
        let recipe = Recipe::new(
            "plasma",
            None,
            120.0,
            FamilyRecipe::Plasma {
                orb: "plasma".into(),
                bolts: ["purple_lightning".into(), "lightning".into()],
                sounds: vec!["lightning".into(), "electrisor".into()],
            },
        );
        assert_eq!(recipe.sound_names(), vec!["lightning", "electrisor"]);
        assert!(recipe.resolve(&assets_for(&recipe)).is_ok());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(boost()).unwrap();
        assert_eq!(json["family"], "buff");
        assert_eq!(json["kind"], "boost");
        assert_eq!(json["area"], "circle1");
        assert!(json.get("color").is_none());

        let parsed: Recipe = serde_json::from_str(
            r#"{"name":"venom","sound":"poison","duration":60,"family":"buff","kind":"poison","icon":"chip_venom"}"#,
        )
        .unwrap();
        assert_eq!(
            parsed.family,
            FamilyRecipe::Buff {
                kind: BuffKind::Poison,
                icon: "chip_venom".into(),
                area: Area::SingleCell,
                color: None,
                interval: SPARKLE_INTERVAL,
            }
        );
    }
}
