//! Board settings with JSON persistence
//!
//! Saves and loads [`BoardSettings`] to/from a JSON file in the
//! platform configuration directory. Load failures fall back to
//! defaults with a warning; save failures are logged and never
//! interrupt the host.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::board::MovePolicy;
use crate::geometry::BoardGeometry;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Host-facing settings for a board session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSettings {
    /// Requested board size in pixels (rounded down to a multiple of 8).
    pub display_size: u32,

    /// Whether to show destination hints for a picked-up piece.
    pub show_hints: bool,

    /// Whether drops are validated against the move generator. Off by
    /// default: the plain drag flow accepts any destination square.
    pub enforce_moves: bool,

    /// Board color theme.
    pub board_theme: BoardTheme,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            display_size: 720,
            show_hints: true,
            enforce_moves: false,
            board_theme: BoardTheme::Classic,
        }
    }
}

impl BoardSettings {
    /// The move policy implied by `enforce_moves`.
    pub fn move_policy(&self) -> MovePolicy {
        if self.enforce_moves {
            MovePolicy::Enforced
        } else {
            MovePolicy::Unchecked
        }
    }

    /// Pixel geometry for the configured display size.
    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(self.display_size)
    }

    /// Load settings from the configuration directory, falling back to
    /// defaults when the file is missing or invalid.
    pub fn load() -> Self {
        let path = settings_path();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(contents) => match serde_json::from_str::<BoardSettings>(&contents) {
                    Ok(settings) => {
                        info!("[SETTINGS] Loaded settings from {:?}", path);
                        return settings;
                    }
                    Err(e) => {
                        warn!(
                            "[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.",
                            path, e
                        );
                    }
                },
                Err(e) => {
                    warn!(
                        "[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.",
                        path, e
                    );
                }
            }
        } else {
            info!(
                "[SETTINGS] No settings file found at {:?}. Using defaults.",
                path
            );
        }

        Self::default()
    }

    /// Save settings to the configuration directory. Failures are
    /// logged and swallowed.
    pub fn save(&self) {
        let path = settings_path();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    error!(
                        "[SETTINGS] Failed to create settings directory at {:?}: {}",
                        parent, e
                    );
                    return;
                }
            }
        }

        match serde_json::to_string_pretty(self) {
            Ok(json) => match fs::write(&path, json) {
                Ok(()) => info!("[SETTINGS] Saved settings to {:?}", path),
                Err(e) => {
                    error!("[SETTINGS] Failed to write settings file at {:?}: {}", path, e);
                }
            },
            Err(e) => error!("[SETTINGS] Failed to serialize settings: {}", e),
        }
    }
}

/// Helper to resolve the settings file path, falling back to the
/// current directory when no config directory exists.
fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "dragchess", "dragchess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Board visual themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardTheme {
    Classic,
    Modern,
    Wood,
    Marble,
}

impl BoardTheme {
    pub fn name(&self) -> &'static str {
        match self {
            BoardTheme::Classic => "Classic",
            BoardTheme::Modern => "Modern",
            BoardTheme::Wood => "Wood",
            BoardTheme::Marble => "Marble",
        }
    }

    /// Returns (light_square_rgb, dark_square_rgb)
    pub fn colors(&self) -> ((u8, u8, u8), (u8, u8, u8)) {
        match self {
            BoardTheme::Classic => ((238, 238, 210), (118, 150, 86)),
            BoardTheme::Modern => ((230, 230, 230), (77, 77, 77)),
            BoardTheme::Wood => ((217, 179, 140), (140, 89, 51)),
            BoardTheme::Marble => ((242, 242, 242), (38, 38, 38)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_enforcement_off() {
        let settings = BoardSettings::default();
        assert!(!settings.enforce_moves, "Base variant accepts any drop");
        assert_eq!(settings.move_policy(), MovePolicy::Unchecked);
        assert_eq!(settings.display_size, 720);
        assert!(settings.show_hints);
    }

    #[test]
    fn test_enforce_moves_maps_to_enforced_policy() {
        let settings = BoardSettings {
            enforce_moves: true,
            ..BoardSettings::default()
        };
        assert_eq!(settings.move_policy(), MovePolicy::Enforced);
    }

    #[test]
    fn test_settings_survive_json_round_trip() {
        let settings = BoardSettings {
            display_size: 512,
            show_hints: false,
            enforce_moves: true,
            board_theme: BoardTheme::Wood,
        };
        let json = serde_json::to_string(&settings).expect("settings should serialize");
        let restored: BoardSettings =
            serde_json::from_str(&json).expect("settings should deserialize");
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_classic_theme_square_colors() {
        let (light, dark) = BoardTheme::Classic.colors();
        assert_eq!(light, (238, 238, 210));
        assert_eq!(dark, (118, 150, 86));
    }
}
