//! Workspace landing page (`<workspace>/index.html`)

use crate::config::ScaffoldConfig;
use crate::product::FrameworkConfig;
use std::fs;
use std::io;
use std::path::Path;

pub fn write<C: FrameworkConfig>(framework: &C, config: &ScaffoldConfig) -> io::Result<()> {
    fs::write(
        Path::new(&config.workspace).join("index.html"),
        render(framework, config),
    )
}

fn render<C: FrameworkConfig>(framework: &C, config: &ScaffoldConfig) -> String {
    format!(
        r#"<!DOCTYPE HTML>
<html>
<head>
    <meta charset="UTF-8">
    <title>{display} workspace</title>
</head>
<body>
    <h1>{display} workspace</h1>
    <ul>
        <li><a href="apps/{app_id}/index.html">{app_name}</a></li>
    </ul>
</body>
</html>
"#,
        display = framework.display_name(),
        app_id = config.app_id(),
        app_name = config.app_name,
    )
}
