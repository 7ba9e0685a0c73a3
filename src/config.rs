//! Engine configuration and the optional settings file.
//!
//! Example `vanishing.toml`:
//! ```toml
//! vanish_time = 12.5      # seconds, 5 to 30
//! play_mode = "vs-bot"    # or "two-player"
//! difficulty = "hard"     # easy, medium or hard
//! ```
//! Every key is optional; missing keys keep the defaults (or whatever the
//! command line already set).

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::bot::Difficulty;

pub const DEFAULT_VANISH_TIME: Duration = Duration::from_secs(10);
pub const MIN_VANISH_TIME: Duration = Duration::from_secs(5);
pub const MAX_VANISH_TIME: Duration = Duration::from_secs(30);

/// Pause before the bot's reply is shown in the terminal front end.
pub const DEFAULT_BOT_DELAY: Duration = Duration::from_millis(300);

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("vanish time must be between 5 and 30 seconds, got {seconds}")]
    VanishTimeOutOfRange { seconds: f64 },
    #[error("could not read settings file {path:?}: {error}")]
    Io { path: String, error: String },
    #[error("could not parse settings file {path:?}: {error}")]
    Parse { path: String, error: String },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayMode {
    TwoPlayer,
    VsBot,
}

impl Default for PlayMode {
    fn default() -> Self {
        PlayMode::TwoPlayer
    }
}

impl PlayMode {
    pub fn toggled(&self) -> Self {
        match self {
            PlayMode::TwoPlayer => PlayMode::VsBot,
            PlayMode::VsBot => PlayMode::TwoPlayer,
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayMode::TwoPlayer => "two-player",
            PlayMode::VsBot => "vs-bot",
        };
        write!(f, "{}", name)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for PlayMode {
    type Err = ParseError;
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode.trim().to_lowercase().as_str() {
            "two-player" | "pvp" => Ok(PlayMode::TwoPlayer),
            "vs-bot" | "bot" => Ok(PlayMode::VsBot),
            _ => Err("invalid play mode; options are: two-player, vs-bot"),
        }
    }
}

/// Checks a vanish time given in seconds against the allowed range.
pub fn vanish_time_from_secs(seconds: f64) -> Result<Duration, ConfigError> {
    let in_range = seconds.is_finite()
        && seconds >= MIN_VANISH_TIME.as_secs_f64()
        && seconds <= MAX_VANISH_TIME.as_secs_f64();
    if !in_range {
        return Err(ConfigError::VanishTimeOutOfRange { seconds });
    }
    Ok(Duration::from_secs_f64(seconds))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    vanish_time: Duration,
    play_mode: PlayMode,
    difficulty: Difficulty,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            vanish_time: DEFAULT_VANISH_TIME,
            play_mode: PlayMode::default(),
            difficulty: Difficulty::default(),
        }
    }
}

impl EngineConfig {
    pub fn new(
        vanish_secs: f64,
        play_mode: PlayMode,
        difficulty: Difficulty,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            vanish_time: vanish_time_from_secs(vanish_secs)?,
            play_mode,
            difficulty,
        })
    }

    pub fn vanish_time(&self) -> Duration {
        self.vanish_time
    }

    pub fn play_mode(&self) -> PlayMode {
        self.play_mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn with_vanish_secs(self, vanish_secs: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            vanish_time: vanish_time_from_secs(vanish_secs)?,
            ..self
        })
    }

    pub fn with_vanish_time_of(self, other: &EngineConfig) -> Self {
        Self {
            vanish_time: other.vanish_time,
            ..self
        }
    }

    pub fn with_play_mode(self, play_mode: PlayMode) -> Self {
        Self { play_mode, ..self }
    }

    pub fn with_difficulty(self, difficulty: Difficulty) -> Self {
        Self { difficulty, ..self }
    }
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub vanish_time: Option<f64>,
    pub play_mode: Option<PlayMode>,
    pub difficulty: Option<Difficulty>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|error| ConfigError::Io {
            path: display.clone(),
            error: error.to_string(),
        })?;
        Self::parse(&contents).map_err(|error| ConfigError::Parse {
            path: display,
            error,
        })
    }

    fn parse(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|error| error.to_string())
    }

    /// Overlays the values present in the file onto `config`.
    pub fn apply(&self, config: EngineConfig) -> Result<EngineConfig, ConfigError> {
        let mut config = config;
        if let Some(seconds) = self.vanish_time {
            config = config.with_vanish_secs(seconds)?;
        }
        if let Some(play_mode) = self.play_mode {
            config = config.with_play_mode(play_mode);
        }
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        Ok(config)
    }
}

impl FromStr for Settings {
    type Err = ConfigError;

    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        Self::parse(contents).map_err(|error| ConfigError::Parse {
            path: "<inline>".to_string(),
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.vanish_time(), Duration::from_secs(10));
        assert_eq!(config.play_mode(), PlayMode::TwoPlayer);
        assert_eq!(config.difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_vanish_time_range() {
        assert_eq!(vanish_time_from_secs(5.0), Ok(Duration::from_secs(5)));
        assert_eq!(vanish_time_from_secs(30.0), Ok(Duration::from_secs(30)));
        assert_eq!(
            vanish_time_from_secs(12.5),
            Ok(Duration::from_millis(12_500))
        );
        assert_eq!(
            vanish_time_from_secs(4.9),
            Err(ConfigError::VanishTimeOutOfRange { seconds: 4.9 })
        );
        assert!(vanish_time_from_secs(30.1).is_err());
        assert!(vanish_time_from_secs(f64::NAN).is_err());
        assert!(vanish_time_from_secs(f64::INFINITY).is_err());
    }

    #[test]
    fn test_play_mode_parse_and_toggle() {
        assert_eq!("vs-bot".parse::<PlayMode>(), Ok(PlayMode::VsBot));
        assert_eq!("pvp".parse::<PlayMode>(), Ok(PlayMode::TwoPlayer));
        assert!("online".parse::<PlayMode>().is_err());
        assert_eq!(PlayMode::VsBot.toggled(), PlayMode::TwoPlayer);
        assert_eq!(PlayMode::TwoPlayer.to_string(), "two-player");
    }

    #[test]
    fn test_settings_overlay() {
        let settings: Settings = "vanish_time = 7.5\ndifficulty = \"hard\"\n"
            .parse()
            .unwrap();
        let config = settings.apply(EngineConfig::default()).unwrap();
        assert_eq!(config.vanish_time(), Duration::from_millis(7_500));
        assert_eq!(config.difficulty(), Difficulty::Hard);
        assert_eq!(config.play_mode(), PlayMode::TwoPlayer);
    }

    #[test]
    fn test_settings_play_mode_key() {
        let settings: Settings = "play_mode = \"vs-bot\"".parse().unwrap();
        assert_eq!(settings.play_mode, Some(PlayMode::VsBot));
    }

    #[test]
    fn test_empty_settings_keep_config() {
        let settings: Settings = "".parse().unwrap();
        let config = EngineConfig::default().with_play_mode(PlayMode::VsBot);
        assert_eq!(settings.apply(config), Ok(config));
    }

    #[test]
    fn test_settings_reject_unknown_keys_and_bad_values() {
        assert!("board_size = 4".parse::<Settings>().is_err());
        assert!("difficulty = \"expert\"".parse::<Settings>().is_err());

        let settings: Settings = "vanish_time = 60.0".parse().unwrap();
        assert_eq!(
            settings.apply(EngineConfig::default()),
            Err(ConfigError::VanishTimeOutOfRange { seconds: 60.0 })
        );
    }

    #[test]
    fn test_missing_settings_file() {
        let error = Settings::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(error, ConfigError::Io { .. }));
    }
}
