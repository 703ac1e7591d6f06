use std::{fs, io, path::Path};

use serde::Deserialize;
use shared::domain::SaveMode;

pub const DEFAULT_CONFIG_PATH: &str = "recipe_box.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub save_mode: SaveMode,
    pub seed_sample_recipes: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            save_mode: SaveMode::InPlace,
            seed_sample_recipes: true,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    save_mode: Option<String>,
    seed_sample_recipes: Option<bool>,
    log_filter: Option<String>,
}

/// Settings plus the problems met while loading them. Loading happens before
/// the subscriber is installed, so callers log `warnings` afterwards.
#[derive(Debug, Default)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub warnings: Vec<String>,
}

/// Defaults, then the TOML file at `path` (if present), then `RECIPE_BOX__*`
/// environment variables.
pub fn load_settings(path: &Path) -> LoadedSettings {
    let mut loaded = LoadedSettings::default();

    match fs::read_to_string(path) {
        Ok(raw) => apply_file(&mut loaded, &raw, path),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => loaded
            .warnings
            .push(format!("could not read config '{}': {err}", path.display())),
    }

    apply_env(&mut loaded, |name| std::env::var(name).ok());
    loaded
}

fn apply_file(loaded: &mut LoadedSettings, raw: &str, path: &Path) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            loaded.warnings.push(format!(
                "ignoring unparseable config '{}': {err}",
                path.display()
            ));
            return;
        }
    };

    if let Some(v) = file_cfg.save_mode {
        set_save_mode(loaded, &v, "save_mode");
    }
    if let Some(v) = file_cfg.seed_sample_recipes {
        loaded.settings.seed_sample_recipes = v;
    }
    if let Some(v) = file_cfg.log_filter {
        loaded.settings.log_filter = v;
    }
}

fn apply_env(loaded: &mut LoadedSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("RECIPE_BOX__SAVE_MODE") {
        set_save_mode(loaded, &v, "RECIPE_BOX__SAVE_MODE");
    }
    if let Some(v) = lookup("RECIPE_BOX__SEED_SAMPLE_RECIPES") {
        match parse_bool(&v) {
            Some(parsed) => loaded.settings.seed_sample_recipes = parsed,
            None => loaded.warnings.push(format!(
                "ignoring RECIPE_BOX__SEED_SAMPLE_RECIPES={v:?}: expected true or false"
            )),
        }
    }
    if let Some(v) = lookup("RECIPE_BOX__LOG_FILTER") {
        if !v.trim().is_empty() {
            loaded.settings.log_filter = v;
        }
    }
}

fn set_save_mode(loaded: &mut LoadedSettings, raw: &str, source: &str) {
    match SaveMode::parse(raw) {
        Some(mode) => loaded.settings.save_mode = mode,
        None => loaded.warnings.push(format!(
            "ignoring {source}={raw:?}: expected append or in_place"
        )),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        env,
        path::PathBuf,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn file_values_override_defaults() {
        let mut loaded = LoadedSettings::default();
        apply_file(
            &mut loaded,
            "save_mode = \"append\"\nseed_sample_recipes = false\nlog_filter = \"debug\"\n",
            Path::new("recipe_box.toml"),
        );

        assert_eq!(
            loaded.settings,
            Settings {
                save_mode: SaveMode::Append,
                seed_sample_recipes: false,
                log_filter: "debug".into(),
            }
        );
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn env_overrides_win_over_file() {
        let mut loaded = LoadedSettings::default();
        apply_file(&mut loaded, "save_mode = \"append\"", Path::new("cfg.toml"));

        let vars = env_map(&[
            ("RECIPE_BOX__SAVE_MODE", "in-place"),
            ("RECIPE_BOX__SEED_SAMPLE_RECIPES", "no"),
        ]);
        apply_env(&mut loaded, |name| vars.get(name).cloned());

        assert_eq!(loaded.settings.save_mode, SaveMode::InPlace);
        assert!(!loaded.settings.seed_sample_recipes);
        assert_eq!(loaded.settings.log_filter, "info");
    }

    #[test]
    fn bad_values_are_reported_and_skipped() {
        let mut loaded = LoadedSettings::default();
        apply_file(&mut loaded, "save_mode = \"sometimes\"", Path::new("cfg.toml"));
        let vars = env_map(&[("RECIPE_BOX__SEED_SAMPLE_RECIPES", "maybe")]);
        apply_env(&mut loaded, |name| vars.get(name).cloned());

        assert_eq!(loaded.settings, Settings::default());
        assert_eq!(loaded.warnings.len(), 2);
    }

    #[test]
    fn unparseable_file_is_ignored_entirely() {
        let mut loaded = LoadedSettings::default();
        apply_file(&mut loaded, "save_mode = [", Path::new("cfg.toml"));

        assert_eq!(loaded.settings, Settings::default());
        assert_eq!(loaded.warnings.len(), 1);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path: PathBuf = env::temp_dir().join(format!("recipe_box_missing_{suffix}.toml"));

        let loaded = load_settings(&path);

        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn reads_config_file_from_disk() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("recipe_box_config_test_{suffix}.toml"));
        fs::write(&path, "seed_sample_recipes = false\n").expect("write config");

        let loaded = load_settings(&path);
        assert!(!loaded.settings.seed_sample_recipes);

        fs::remove_file(path).expect("cleanup");
    }
}
