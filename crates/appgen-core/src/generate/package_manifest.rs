//! Project descriptor (`<workspace>/package.json`)
//!
//! Fixed script table and dependency list; the scripts reference build
//! entry points shipped inside the framework npm package.

use crate::config::ScaffoldConfig;
use crate::product::FrameworkConfig;
use serde_json::{json, Map, Value};
use std::fs;
use std::io;
use std::path::Path;

pub fn write<C: FrameworkConfig>(framework: &C, config: &ScaffoldConfig) -> io::Result<()> {
    fs::write(
        Path::new(&config.workspace).join("package.json"),
        render(framework, config)?,
    )
}

fn render<C: FrameworkConfig>(framework: &C, config: &ScaffoldConfig) -> io::Result<String> {
    let package = framework.npm_package();
    let webpack_dir = format!("./node_modules/{package}/buildScripts/webpack");

    let scripts = json!({
        "server-start": "webpack-dev-server --open",
        "build-development": format!("webpack --config {webpack_dir}/development/webpack.config.mjs"),
        "build-production": format!("webpack --config {webpack_dir}/production/webpack.config.mjs"),
        "dev-theme-dark": format!("webpack --config {webpack_dir}/development/webpack.scss.config.mjs --env json_file=theme.dark.json"),
        "dev-theme-light": format!("webpack --config {webpack_dir}/development/webpack.scss.config.mjs --env json_file=theme.light.json"),
        "prod-theme-dark": format!("webpack --config {webpack_dir}/production/webpack.scss.config.mjs --env json_file=theme.dark.json"),
        "prod-theme-light": format!("webpack --config {webpack_dir}/production/webpack.scss.config.mjs --env json_file=theme.light.json"),
        "test": "echo \"Error: no test specified\" && exit 1",
    });

    let mut dependencies = Map::new();
    dependencies.insert(
        package.to_string(),
        Value::from(framework.npm_package_version()),
    );
    dependencies.insert("sass".to_string(), Value::from("^1.24.0"));

    let manifest = json!({
        "name": config.app_id(),
        "version": "0.1.0",
        "private": true,
        "scripts": scripts,
        "dependencies": dependencies,
    });

    let mut body = serde_json::to_string_pretty(&manifest).map_err(io::Error::other)?;
    body.push('\n');
    Ok(body)
}
