use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_derive::{Deserialize, Serialize};

use crate::error::Result;
use crate::game::scaleform::OutTransition;
use crate::native::timecycle::TimeCycleLayout;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
    pub time_cycle: TimeCycleSettings,
    pub big_message: BigMessageSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: log::LevelFilter,
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: log::LevelFilter::Info,
            file: None
        }
    }
}

/// Where the time cycle manager lives and how it is laid out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeCycleSettings {
    pub layout: TimeCycleLayout,
    /// `lea rcx, [manager]`, the displacement starting at `manager_offset`.
    pub manager_pattern: String,
    pub manager_offset: usize,
    /// Start of the engine's hash to modifier index lookup, scanned linearly when absent.
    pub index_lookup_pattern: Option<String>,
    /// `mov ecx, tls_offset` in front of the allocator lookup.
    pub allocator_pattern: String,
}

impl Default for TimeCycleSettings {
    fn default() -> Self {
        TimeCycleSettings {
            layout: TimeCycleLayout::default(),
            manager_pattern: String::from("48 8D 0D ? ? ? ? 89 44 24 30 E8 ? ? ? ? 48 83 C4 28 C3"),
            manager_offset: 3,
            index_lookup_pattern: None,
            allocator_pattern: String::from("B9 ? ? ? ? 48 8B 0C 01 45 33 C9 49 8B D2 48"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BigMessageSettings {
    pub out_transition: OutTransition,
    /// Seconds.
    pub out_transition_time: f32,
}

impl Default for BigMessageSettings {
    fn default() -> Self {
        BigMessageSettings {
            out_transition: OutTransition::MoveUp,
            out_transition_time: 0.4
        }
    }
}

impl Settings {
    pub fn load<P>(path: P) -> Result<Settings> where P: AsRef<Path> {
        let file = File::open(path.as_ref())?;
        let settings = serde_json::from_reader(BufReader::new(file))?;
        debug!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn save<P>(&self, path: P) -> Result<()> where P: AsRef<Path> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path.as_ref())?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// `<config dir>/nativeui/settings.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nativeui").join("settings.json"))
    }

    /// Reads the settings file from the config dir, defaults when there is none.
    pub fn load_or_default() -> Result<Settings> {
        match Settings::default_path() {
            Some(path) if path.exists() => Settings::load(path),
            _ => Ok(Settings::default())
        }
    }
}
