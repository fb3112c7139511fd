//! Named animation table.
//!
//! Every chip is a `Recipe`: a name, a launch sound, a duration and the
//! parameters of its family. `Catalog` keeps them by name and builds
//! `Animation`s on demand.
//!
//! ## Example
//!
//! ```
//! use chip_fx::catalog::Catalog;
//! use chip_fx::core::AssetTable;
//!
//! let catalog = Catalog::builtin();
//! let assets = AssetTable::with_builtin_names();
//!
//! let shield = catalog.create("shield", &assets).unwrap();
//! assert_eq!(shield.duration(), 60.0);
//! assert!(catalog.create("fireball", &assets).is_err());
//! ```

mod builtin;
mod recipe;

pub use builtin::recipes as builtin_recipes;
pub use recipe::{FamilyRecipe, Marker, Recipe};

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::anim::Animation;
use crate::core::{AssetTable, ConfigError, ConfigResult};

/// Recipes by name.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    recipes: FxHashMap<String, Recipe>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of every chip shipped with the game.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for recipe in builtin::recipes() {
            catalog.recipes.insert(recipe.name.clone(), recipe);
        }
        catalog
    }

    /// Register a recipe. Fails if the name is taken or its timings are
    /// invalid.
    pub fn register(&mut self, recipe: Recipe) -> ConfigResult<()> {
        if self.recipes.contains_key(&recipe.name) {
            return Err(ConfigError::DuplicateAnimation { name: recipe.name });
        }
        recipe.validate()?;
        debug!(animation = %recipe.name, "registered recipe");
        self.recipes.insert(recipe.name.clone(), recipe);
        Ok(())
    }

    /// Replace a recipe, returning the previous one.
    pub fn replace(&mut self, recipe: Recipe) -> ConfigResult<Option<Recipe>> {
        recipe.validate()?;
        Ok(self.recipes.insert(recipe.name.clone(), recipe))
    }

    /// Recipe registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.recipes.contains_key(name)
    }

    /// Names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.recipes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of recipes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// No recipe registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    /// Build a fresh animation for `name`.
    pub fn create(&self, name: &str, assets: &AssetTable) -> ConfigResult<Animation> {
        self.recipes
            .get(name)
            .ok_or_else(|| ConfigError::UnknownAnimation { name: name.to_string() })?
            .resolve(assets)
    }

    /// Resolve every recipe, collecting all failures.
    ///
    /// Meant for load time: a game checks its asset manifest against the
    /// catalog once instead of discovering a missing texture mid-fight.
    pub fn validate_all(&self, assets: &AssetTable) -> Result<(), Vec<ConfigError>> {
        let mut errors: Vec<ConfigError> = self
            .recipes
            .values()
            .filter_map(|recipe| recipe.resolve(assets).err())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            errors.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::FamilyKind;

    fn jump() -> Recipe {
        Recipe::new("hop", Some("move"), 30.0, FamilyRecipe::Jump)
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        catalog.register(jump()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("hop"));
        assert_eq!(catalog.get("hop").map(|r| r.duration), Some(30.0));
        assert!(catalog.get("skip").is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut catalog = Catalog::new();
        catalog.register(jump()).unwrap();

        assert_eq!(
            catalog.register(jump()),
            Err(ConfigError::DuplicateAnimation { name: "hop".into() })
        );
        let mut longer = jump();
        longer.duration = 45.0;
        assert_eq!(catalog.replace(longer).unwrap().map(|r| r.duration), Some(30.0));
    }

    #[test]
    fn test_invalid_recipe_rejected() {
        let mut catalog = Catalog::new();
        let mut bad = jump();
        bad.duration = f64::NAN;
        assert!(catalog.register(bad).is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_create() {
        let catalog = Catalog::builtin();
        let assets = AssetTable::with_builtin_names();

        let anim = catalog.create("jump", &assets).unwrap();
        assert_eq!(anim.kind(), FamilyKind::Jump);
        assert_eq!(
            catalog.create("nope", &assets).unwrap_err(),
            ConfigError::UnknownAnimation { name: "nope".into() }
        );
    }

    #[test]
    fn test_validate_all_reports_every_failure() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate_all(&AssetTable::with_builtin_names()).is_ok());

        let errors = catalog.validate_all(&AssetTable::new()).unwrap_err();
        assert_eq!(errors.len(), catalog.len());
    }

    #[test]
    fn test_names_sorted() {
        let catalog = Catalog::builtin();
        let names = catalog.names();
        assert_eq!(names.first(), Some(&"acceleration"));
        assert_eq!(names.last(), Some(&"winged_boots"));
    }
}
