//! App markup (`<appPath>/index.html`)
//!
//! Loads the framework bootstrap module and embeds the app config blob the
//! framework reads on the main thread. Theme combination policy (`all`,
//! `none`) is owned by the framework's theme build, not by this generator -
//! the selection is embedded verbatim.

use crate::config::{MainThreadAddon, ScaffoldConfig, Theme};
use crate::product::FrameworkConfig;
use serde::Serialize;
use std::fs;
use std::io;

#[derive(Serialize)]
struct AppConfigBlob<'a> {
    #[serde(rename = "appPath")]
    app_path: String,
    #[serde(rename = "mainThreadAddons")]
    main_thread_addons: &'a [MainThreadAddon],
    themes: &'a [Theme],
}

pub fn write<C: FrameworkConfig>(framework: &C, config: &ScaffoldConfig) -> io::Result<()> {
    fs::write(config.app_path().join("index.html"), render(framework, config)?)
}

fn render<C: FrameworkConfig>(framework: &C, config: &ScaffoldConfig) -> io::Result<String> {
    let blob = AppConfigBlob {
        app_path: format!("apps/{}/app.mjs", config.app_id()),
        main_thread_addons: &config.main_thread_addons,
        themes: &config.themes,
    };
    let blob = serde_json::to_string(&blob).map_err(io::Error::other)?;

    Ok(format!(
        r#"<!DOCTYPE HTML>
<html>
<head>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta charset="UTF-8">
    <title>{app_name}</title>
</head>
<body>
    <script id="app-config" type="application/json">{blob}</script>
    <script src="../../node_modules/{package}/src/Bootstrap.mjs" type="module"></script>
</body>
</html>
"#,
        app_name = config.app_name,
        package = framework.npm_package(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_config, TestFramework};
    use std::path::Path;

    #[test]
    fn test_markup_embeds_the_config_blob() {
        let mut config = test_config(Path::new("/tmp"));
        config.themes = vec![Theme::Dark];
        config.main_thread_addons = vec![MainThreadAddon::Stylesheet, MainThreadAddon::Markdown];

        let html = render(&TestFramework, &config).unwrap();
        assert!(html.contains(r#""appPath":"apps/myapp/app.mjs""#));
        assert!(html.contains(r#""mainThreadAddons":["Stylesheet","Markdown"]"#));
        assert!(html.contains(r#""themes":["theme-dark"]"#));
        assert!(html.contains("node_modules/testfw.mjs/src/Bootstrap.mjs"));
    }

    #[test]
    fn test_markup_titles_the_page_with_the_display_name() {
        let html = render(&TestFramework, &test_config(Path::new("/tmp"))).unwrap();
        assert!(html.contains("<title>MyApp</title>"));
    }
}
