//! The chips shipped with the game.

use crate::anim::{
    BuffKind, DEFAULT_METEORITES, INVERSION_DURATION, JUMP_DURATION, SPARKLE_INTERVAL, STEAL_DURATION,
    TELEPORT_DURATION,
};
use crate::core::{Area, AssetTable, Color};

use super::recipe::{FamilyRecipe, Marker, Recipe};

fn status(kind: BuffKind, name: &str, icon: &str, area: Area) -> Recipe {
    Recipe::new(
        name,
        Some(kind.sound()),
        kind.duration(),
        FamilyRecipe::Buff {
            kind,
            icon: format!("chip_{icon}"),
            area,
            color: None,
            interval: SPARKLE_INTERVAL,
        },
    )
}

fn steal(name: &str, sound: &str, spinning: &str, sparkle: &str, aureol: &str, area: Area, color: u32) -> Recipe {
    Recipe::new(
        name,
        Some(sound),
        STEAL_DURATION,
        FamilyRecipe::Steal {
            icon: format!("chip_{name}"),
            aureol: aureol.into(),
            spinning: spinning.into(),
            sparkle: sparkle.into(),
            area,
            color: Color::rgb(color),
        },
    )
}

#[allow(clippy::too_many_arguments)]
fn storm(
    name: &str,
    duration: f64,
    period: f64,
    cloud: &str,
    cloud_z: f64,
    cloud_life: f64,
    bolt: &str,
    spread: f64,
    marker: Option<Marker>,
) -> Recipe {
    Recipe::new(
        name,
        Some("lightning"),
        duration,
        FamilyRecipe::Storm {
            cloud: cloud.into(),
            cloud_z,
            cloud_life,
            bolt: bolt.into(),
            spread,
            period,
            marker,
        },
    )
}

fn debris(name: &str, sound: &str, duration: f64, texture: &str, height: f64, fall: f64) -> Recipe {
    Recipe::new(
        name,
        Some(sound),
        duration,
        FamilyRecipe::Debris {
            texture: texture.into(),
            height,
            fall,
            marker: None,
        },
    )
}

fn fire(name: &str, duration: f64, burn: Option<f64>, scorch: Option<(f64, f64)>) -> Recipe {
    Recipe::new(
        name,
        Some("fire"),
        duration,
        FamilyRecipe::Fire {
            burn,
            icon: None,
            marker: None,
            scorch,
        },
    )
}

fn orbit(name: &str, halo: &str) -> Recipe {
    Recipe::new(name, Some("liberation"), 60.0, FamilyRecipe::Orbit { halo: halo.into() })
}

const SHIELDS: &[&str] = &["armor", "carapace", "fortress", "helmet", "rampart", "shield", "wall"];

const BOOSTS: &[(&str, Area)] = &[
    ("adrenaline", Area::Circle1),
    ("doping", Area::SingleCell),
    ("leather_boots", Area::SingleCell),
    ("motivation", Area::SingleCell),
    ("protein", Area::SingleCell),
    ("rage", Area::SingleCell),
    ("reflexes", Area::SingleCell),
    ("steroid", Area::SingleCell),
    ("stretching", Area::SingleCell),
    ("warm_up", Area::SingleCell),
    ("winged_boots", Area::Circle1),
    ("whip", Area::SingleCell),
    ("acceleration", Area::SingleCell),
    ("solidification", Area::SingleCell),
    ("ferocity", Area::SingleCell),
    ("collar", Area::SingleCell),
    ("bark", Area::SingleCell),
];

const HEALS: &[(&str, Area)] = &[
    ("armoring", Area::SingleCell),
    ("bandage", Area::SingleCell),
    ("cure", Area::SingleCell),
    ("drip", Area::Circle2),
    ("regeneration", Area::SingleCell),
    ("remission", Area::SingleCell),
    ("vaccine", Area::SingleCell),
    ("loam", Area::SingleCell),
    ("fertilizer", Area::SingleCell),
];

const DEBUFFS: &[(&str, Area)] = &[
    ("slow_down", Area::SingleCell),
    ("ball_and_chain", Area::Circle2),
    ("tranquilizer", Area::SingleCell),
    ("soporific", Area::Circle3),
    ("fracture", Area::SingleCell),
];

const POISONS: &[(&str, Area)] = &[
    ("venom", Area::SingleCell),
    ("toxin", Area::Circle2),
    ("plague", Area::Circle3),
];

const DAMAGE_RETURNS: &[(&str, Area)] = &[("thorn", Area::Circle2), ("mirror", Area::Circle2)];

/// Every built-in recipe.
#[must_use]
pub fn recipes() -> Vec<Recipe> {
    let mut all = Vec::with_capacity(69);

    all.extend(SHIELDS.iter().map(|&name| status(BuffKind::Shield, name, name, Area::SingleCell)));
    for &(name, area) in BOOSTS {
        all.push(status(BuffKind::Boost, name, name, area));
    }
    // Shares the reflexes icon.
    all.push(status(BuffKind::Boost, "seven_league_boots", "reflexes", Area::SingleCell));
    for &(name, area) in HEALS {
        all.push(status(BuffKind::Heal, name, name, area));
    }
    for &(name, area) in DEBUFFS {
        all.push(status(BuffKind::Debuff, name, name, area));
    }
    for &(name, area) in POISONS {
        all.push(status(BuffKind::Poison, name, name, area));
    }
    for &(name, area) in DAMAGE_RETURNS {
        all.push(status(BuffKind::DamageReturn, name, name, area));
    }

    all.push(steal("precipitation", "buff", "halo", "halo", "buff_aureol", Area::X2, 0x0280db));
    all.push(steal("covetousness", "buff", "halo", "halo", "buff_aureol", Area::X2, 0x0280db));
    all.push(steal("vampirization", "heal", "halo_green", "heal_cross", "heal_cross", Area::Plus3, 0x5efe36));

    all.push(Recipe::new("teleportation", Some("teleportation"), TELEPORT_DURATION, FamilyRecipe::Teleport));
    all.push(Recipe::new("inversion", Some("teleportation"), INVERSION_DURATION, FamilyRecipe::Inversion));
    all.push(Recipe::new("jump", Some("move"), JUMP_DURATION, FamilyRecipe::Jump));

    all.push(storm("shock", 60.0, 2.0, "cloud", 220.0, 70.0, "lightning", 30.0, None));
    all.push(storm(
        "flash",
        70.0,
        1.0,
        "grey_cloud",
        220.0,
        80.0,
        "purple_lightning",
        30.0,
        Some(Marker::new(Area::Circle1, Color::RED)),
    ));
    all.push(storm(
        "lightning",
        80.0,
        1.0,
        "black_cloud",
        230.0,
        90.0,
        "red_lightning",
        40.0,
        Some(Marker::new(Area::Circle2, Color::RED)),
    ));
    all.push(Recipe::new(
        "plasma",
        None,
        120.0,
        FamilyRecipe::Plasma {
            orb: "plasma".into(),
            bolts: ["purple_lightning".into(), "lightning".into()],
            sounds: vec!["lightning".into(), "electrisor".into()],
        },
    ));

    all.push(Recipe::new(
        "meteorite",
        Some("meteorite"),
        100.0,
        FamilyRecipe::Meteorite { bursts: DEFAULT_METEORITES },
    ));
    all.push(Recipe::new("rockfall", Some("rockfall"), 70.0, FamilyRecipe::Rockfall { rock: "rock".into() }));
    all.push(Recipe::new(
        "devil_strike",
        Some("fire"),
        100.0,
        FamilyRecipe::DevilStrike {
            circle: "red_circle".into(),
            shadow: "daemon_shadow".into(),
            laser: "m_laser_bullet".into(),
            shot_sound: Some("rock".into()),
        },
    ));

    all.push(fire("flame", 70.0, Some(100.0), Some((2.0, 12.0))));
    all.push(fire("spark", 40.0, Some(50.0), None));
    all.push(Recipe::new(
        "burning",
        Some("fire"),
        60.0,
        FamilyRecipe::Fire {
            burn: None,
            icon: Some("chip_burning".into()),
            marker: Some(Marker::new(Area::Circle3, Color::RED)),
            scorch: None,
        },
    ));

    all.push(debris("ice", "ice", 30.0, "ice_small", 100.0, 1.5));
    // The iceberg falls silently.
    let mut iceberg = debris("iceberg", "ice", 40.0, "iceberg", 180.0, 3.0);
    iceberg.sound = None;
    if let FamilyRecipe::Debris { marker, .. } = &mut iceberg.family {
        *marker = Some(Marker::new(Area::Circle2, Color::WHITE));
    }
    all.push(iceberg);
    all.push(debris("pebble", "rock", 30.0, "pebble_small", 100.0, 2.0));
    all.push(debris("rock", "rock", 40.0, "rock", 150.0, 2.0));
    all.push(debris("stalactite", "ice", 40.0, "stalactite", 180.0, 3.0));

    all.push(orbit("liberation", "liberation_halo"));
    all.push(orbit("antidote", "antidote_halo"));
    all.push(Recipe::new(
        "alteration",
        Some("alteration"),
        60.0,
        FamilyRecipe::Alteration { texture: "alteration".into() },
    ));
    all.push(Recipe::new(
        "punishment",
        None,
        35.0,
        FamilyRecipe::Punishment {
            spikes: ["spike1".into(), "spike2".into()],
            sword: Some("sword".into()),
        },
    ));

    all
}

impl AssetTable {
    /// A table with an auto-assigned id for every texture and sound the
    /// built-in recipes reference.
    ///
    /// Handy for tools and tests; a game binds the ids its renderer and
    /// audio engine hand out instead.
    #[must_use]
    pub fn with_builtin_names() -> Self {
        let mut assets = Self::new();
        for recipe in recipes() {
            for name in recipe.texture_names() {
                assets.register_texture(name);
            }
            for name in recipe.sound_names() {
                assets.register_sound(name);
            }
        }
        assets
    }
}
