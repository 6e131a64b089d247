use std::{
    fs, io,
    path::{Path, PathBuf},
};

use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("no maze preset named '{0}'")]
    UnknownPreset(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazePreset {
    pub title: String,
    pub columns: i32,
    pub rows: i32,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub default: bool,
}

impl MazePreset {
    pub fn new(title: impl Into<String>, columns: i32, rows: i32) -> Self {
        Self {
            title: title.into(),
            columns,
            rows,
            seed: None,
            default: false,
        }
    }
}

impl Default for MazePreset {
    fn default() -> Self {
        MazePreset::new("Medium", 12, 10)
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub cell_size: Option<(f64, f64)>,
    #[serde(default)]
    pub origin: Option<(f64, f64)>,
    #[serde(default)]
    pub break_entrance_and_exit: Option<bool>,
    #[serde(default)]
    pub mazes: Option<Vec<MazePreset>>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cell_size(mut self, value: (f64, f64)) -> Self {
        self.cell_size = Some(value);
        self
    }

    pub fn get_cell_size(&self) -> (f64, f64) {
        self.cell_size.unwrap_or((20.0, 20.0))
    }

    pub fn set_origin(mut self, value: (f64, f64)) -> Self {
        self.origin = Some(value);
        self
    }

    pub fn get_origin(&self) -> (f64, f64) {
        self.origin.unwrap_or_default()
    }

    pub fn set_break_entrance_and_exit(mut self, value: bool) -> Self {
        self.break_entrance_and_exit = Some(value);
        self
    }

    pub fn get_break_entrance_and_exit(&self) -> bool {
        self.break_entrance_and_exit.unwrap_or(true)
    }

    pub fn set_mazes(mut self, value: Vec<MazePreset>) -> Self {
        self.mazes = Some(value);
        self
    }

    pub fn get_mazes(&self) -> Vec<MazePreset> {
        self.mazes.clone().unwrap_or_default()
    }

    /// Finds preset by its title, case insensitive.
    pub fn preset(&self, title: &str) -> Result<MazePreset, SettingsError> {
        self.get_mazes()
            .into_iter()
            .find(|p| p.title.eq_ignore_ascii_case(title))
            .ok_or_else(|| SettingsError::UnknownPreset(title.to_string()))
    }

    /// Preset marked as default, then the first one, then the built-in one.
    pub fn default_preset(&self) -> MazePreset {
        let mazes = self.get_mazes();
        if mazes.iter().filter(|p| p.default).count() > 1 {
            log::warn!("More than one default maze preset, using the first one");
        }

        mazes
            .iter()
            .find(|p| p.default)
            .or_else(|| mazes.first())
            .cloned()
            .unwrap_or_default()
    }

    pub fn default_path() -> PathBuf {
        dirs::preference_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pmaze")
            .join("settings.ron")
    }

    pub fn parse(path: &Path, source: &str) -> Result<Self, SettingsError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        options
            .from_str(source)
            .map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Loads settings from `path`.
    ///
    /// If the file doesn't exist, the default settings are written there and
    /// returned. Failing to write them is only a warning.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(source) => Self::parse(path, &source),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("Settings file {:?} not found, creating default one", path);
                if let Err(err) = Self::write_default(path) {
                    log::warn!("Cannot write default settings to {:?}: {}", path, err);
                }
                Self::parse(path, DEFAULT_SETTINGS)
            }
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        Self::write_default(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_default(path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_parse() {
        let settings = Settings::parse(Path::new("default"), DEFAULT_SETTINGS).unwrap();
        assert_eq!(settings.get_cell_size(), (20.0, 20.0));
        assert!(settings.get_break_entrance_and_exit());

        let preset = settings.default_preset();
        assert_eq!((preset.columns, preset.rows), (12, 10));
        assert_eq!(settings.preset("tiny").unwrap().columns, 2);
    }

    #[test]
    fn missing_fields_fall_back() {
        let settings = Settings::parse(Path::new("x"), "()").unwrap();
        assert_eq!(settings.get_origin(), (0.0, 0.0));
        assert!(settings.get_break_entrance_and_exit());
        assert!(settings.get_mazes().is_empty());
        assert_eq!(settings.default_preset(), MazePreset::default());
    }

    #[test]
    fn preset_with_seed() {
        let settings = Settings::parse(
            Path::new("x"),
            r#"(mazes: [(title: "A", columns: 3, rows: 4), (title: "B", columns: 5, rows: 5, seed: 42)])"#,
        )
        .unwrap();

        assert_eq!(settings.default_preset().title, "A");
        assert_eq!(settings.preset("b").unwrap().seed, Some(42));
        assert!(matches!(
            settings.preset("C"),
            Err(SettingsError::UnknownPreset(name)) if name == "C"
        ));
    }

    #[test]
    fn invalid_settings() {
        let result = Settings::parse(Path::new("bad.ron"), "(mazes: 5)");
        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn builder_setters() {
        let settings = Settings::new()
            .set_origin((1.0, 2.0))
            .set_break_entrance_and_exit(false)
            .set_mazes(vec![MazePreset::new("One", 1, 1)]);
        assert_eq!(settings.get_origin(), (1.0, 2.0));
        assert!(!settings.get_break_entrance_and_exit());
        assert_eq!(settings.preset("one").unwrap().rows, 1);
    }

    #[test]
    fn load_creates_and_reset_restores_file() {
        let dir = std::env::temp_dir().join(format!("pmaze-settings-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("settings.ron");

        let created = Settings::load(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_SETTINGS);
        let preset = created.default_preset();
        assert_eq!((preset.columns, preset.rows), (12, 10));

        let reread = Settings::load(&path).unwrap();
        assert_eq!(reread.get_mazes(), created.get_mazes());
        assert_eq!(reread.get_cell_size(), created.get_cell_size());

        fs::write(&path, r#"(mazes: [(title: "Custom", columns: 3, rows: 3)])"#).unwrap();
        assert_eq!(Settings::load(&path).unwrap().default_preset().title, "Custom");

        Settings::reset_config(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_SETTINGS);
        assert_eq!(Settings::load(&path).unwrap().default_preset().columns, 12);

        assert!(matches!(Settings::load(&dir), Err(SettingsError::Io { .. })));

        fs::remove_dir_all(&dir).unwrap();
    }
}
