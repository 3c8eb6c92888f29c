//! App registry (`<workspace>/apps.json`)
//!
//! Consumed by the framework build scripts to discover which apps to build
//! and with which themes and addons.

use crate::config::{MainThreadAddon, ScaffoldConfig, Theme};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct AppRegistry {
    pub apps: Vec<AppRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AppRecord {
    pub name: String,
    pub path: String,
    #[serde(rename = "mainThreadAddons")]
    pub main_thread_addons: Vec<MainThreadAddon>,
    pub themes: Vec<Theme>,
}

pub fn write(config: &ScaffoldConfig) -> io::Result<()> {
    fs::write(
        Path::new(&config.workspace).join("apps.json"),
        render(config)?,
    )
}

fn render(config: &ScaffoldConfig) -> io::Result<String> {
    let registry = AppRegistry {
        apps: vec![AppRecord {
            name: config.app_name.clone(),
            path: format!("apps/{}/", config.app_id()),
            main_thread_addons: config.main_thread_addons.clone(),
            themes: config.themes.clone(),
        }],
    };
    let mut body = serde_json::to_string_pretty(&registry).map_err(io::Error::other)?;
    body.push('\n');
    Ok(body)
}
