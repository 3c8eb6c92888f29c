//! The scaffold configuration record
//!
//! A `ScaffoldConfig` is resolved exactly once per run, before any generator
//! executes, and is never mutated afterwards. Every generator reads the same
//! record, which is what keeps the generated artifacts consistent with each
//! other.

pub mod resolve;

pub use resolve::{resolve, Answer, Field, Prompter, Question, Shape};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Default workspace folder name when none is supplied
pub const DEFAULT_WORKSPACE: &str = "workspace";

/// Default app name when none is supplied
pub const DEFAULT_APP_NAME: &str = "MyApp";

/// Theme selection for the generated app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "theme-dark")]
    Dark,
    #[serde(rename = "theme-light")]
    Light,
    #[serde(rename = "all")]
    All,
    #[serde(rename = "none")]
    None,
}

impl Theme {
    /// All selectable values, in prompt order
    pub const CHOICES: &'static [Theme] = &[Theme::Dark, Theme::Light, Theme::All, Theme::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
            Theme::All => "all",
            Theme::None => "none",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown theme '{0}'")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Theme::CHOICES
            .iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(value))
            .copied()
            .ok_or_else(|| ParseThemeError(value.to_string()))
    }
}

/// Optional feature modules runnable on the main thread of a generated app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainThreadAddon {
    AmCharts,
    GoogleAnalytics,
    #[serde(rename = "HighlightJS")]
    HighlightJs,
    LocalStorage,
    #[serde(rename = "MapboxGL")]
    MapboxGl,
    Markdown,
    Siesta,
    Stylesheet,
}

impl MainThreadAddon {
    /// The full addon catalog, in prompt order
    pub const CATALOG: &'static [MainThreadAddon] = &[
        MainThreadAddon::AmCharts,
        MainThreadAddon::GoogleAnalytics,
        MainThreadAddon::HighlightJs,
        MainThreadAddon::LocalStorage,
        MainThreadAddon::MapboxGl,
        MainThreadAddon::Markdown,
        MainThreadAddon::Siesta,
        MainThreadAddon::Stylesheet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MainThreadAddon::AmCharts => "AmCharts",
            MainThreadAddon::GoogleAnalytics => "GoogleAnalytics",
            MainThreadAddon::HighlightJs => "HighlightJS",
            MainThreadAddon::LocalStorage => "LocalStorage",
            MainThreadAddon::MapboxGl => "MapboxGL",
            MainThreadAddon::Markdown => "Markdown",
            MainThreadAddon::Siesta => "Siesta",
            MainThreadAddon::Stylesheet => "Stylesheet",
        }
    }
}

impl fmt::Display for MainThreadAddon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown main thread addon '{0}'")]
pub struct ParseAddonError(String);

impl FromStr for MainThreadAddon {
    type Err = ParseAddonError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        MainThreadAddon::CATALOG
            .iter()
            .find(|addon| addon.as_str().eq_ignore_ascii_case(value))
            .copied()
            .ok_or_else(|| ParseAddonError(value.to_string()))
    }
}

/// Explicit inputs collected from the command line; `None` fields are
/// resolved interactively
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// App name in PascalCase
    pub app_name: Option<String>,

    /// Project root folder
    pub workspace: Option<String>,

    /// Theme selection (a single flag value; the resolved record always
    /// holds a sequence)
    pub themes: Option<Theme>,

    /// Main thread addons to include
    pub main_thread_addons: Option<Vec<MainThreadAddon>>,

    /// Start a dev server right after the build
    pub start: bool,
}

impl Default for CreateArgs {
    fn default() -> Self {
        Self {
            app_name: None,
            workspace: None,
            themes: None,
            main_thread_addons: None,
            start: true,
        }
    }
}

/// The fully resolved configuration record shared by all generators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub app_name: String,
    pub workspace: String,
    pub themes: Vec<Theme>,
    pub main_thread_addons: Vec<MainThreadAddon>,
    pub start: bool,
}

impl ScaffoldConfig {
    /// Lower-cased identifier form of the app name, used for package
    /// identifiers and folder names
    pub fn app_id(&self) -> String {
        self.app_name.to_lowercase()
    }

    /// `<workspace>/apps/<lower-cased app name>` - derived purely from the
    /// record, independent of filesystem state
    pub fn app_path(&self) -> PathBuf {
        Path::new(&self.workspace).join("apps").join(self.app_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_path_lowercases_the_app_name() {
        let config = ScaffoldConfig {
            app_name: "MyApp".into(),
            workspace: "workspace".into(),
            themes: vec![Theme::All],
            main_thread_addons: vec![],
            start: false,
        };
        assert_eq!(config.app_path(), PathBuf::from("workspace/apps/myapp"));
    }

    #[test]
    fn test_app_path_is_casing_independent() {
        let mut config = ScaffoldConfig {
            app_name: "ShopFloor".into(),
            workspace: "ws".into(),
            themes: vec![Theme::None],
            main_thread_addons: vec![],
            start: false,
        };
        let lower = config.app_path();
        config.app_name = "SHOPFLOOR".into();
        assert_eq!(config.app_path(), lower);
    }

    #[test]
    fn test_theme_round_trips_through_from_str() {
        for theme in Theme::CHOICES {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), *theme);
        }
    }

    #[test]
    fn test_theme_parsing_is_case_insensitive() {
        assert_eq!("Theme-Dark".parse::<Theme>().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!("solarized".parse::<Theme>().is_err());
    }

    #[test]
    fn test_addon_round_trips_through_from_str() {
        for addon in MainThreadAddon::CATALOG {
            assert_eq!(addon.as_str().parse::<MainThreadAddon>().unwrap(), *addon);
        }
    }

    #[test]
    fn test_addon_serializes_to_its_catalog_name() {
        let json = serde_json::to_string(&MainThreadAddon::HighlightJs).unwrap();
        assert_eq!(json, "\"HighlightJS\"");
    }

    #[test]
    fn test_theme_serializes_to_its_choice_name() {
        let json = serde_json::to_string(&Theme::Dark).unwrap();
        assert_eq!(json, "\"theme-dark\"");
    }
}
