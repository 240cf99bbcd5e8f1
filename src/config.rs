//! Parses the optional `retint.ini` in the working directory.

use std::path::PathBuf;

use ini::Ini;

pub static CONFIG_FILE_NAME: &str = "retint.ini";

static DEFAULT_SOURCE_PALETTE: &str = "source.pal";
static DEFAULT_TARGET_PALETTE: &str = "target.pal";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source_palette: PathBuf,
    pub target_palette: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_palette: PathBuf::from(DEFAULT_SOURCE_PALETTE),
            target_palette: PathBuf::from(DEFAULT_TARGET_PALETTE),
        }
    }
}

impl AppConfig {
    /// A missing or unreadable config file falls back to the defaults.
    pub fn load() -> AppConfig {
        match Ini::from_file(CONFIG_FILE_NAME) {
            Ok(ini) => Self::from_ini(&ini),
            Err(_) => AppConfig::default(),
        }
    }

    pub fn from_ini(ini: &Ini) -> AppConfig {
        AppConfig {
            source_palette: PathBuf::from(ini.read_string(
                "palettes",
                "source",
                DEFAULT_SOURCE_PALETTE,
            )),
            target_palette: PathBuf::from(ini.read_string(
                "palettes",
                "target",
                DEFAULT_TARGET_PALETTE,
            )),
        }
    }
}
