//! App bootstrap module (`<appPath>/app.mjs`)

use crate::config::ScaffoldConfig;
use crate::product::FrameworkConfig;
use std::fs;
use std::io;

pub fn write<C: FrameworkConfig>(framework: &C, config: &ScaffoldConfig) -> io::Result<()> {
    fs::write(config.app_path().join("app.mjs"), render(framework, config))
}

fn render<C: FrameworkConfig>(framework: &C, config: &ScaffoldConfig) -> String {
    format!(
        r#"import MainView from './MainView.mjs';

export const onStart = () => {namespace}.app({{
    appPath : 'apps/{app_id}/',
    mainView: MainView,
    name    : '{app_name}'
}});
"#,
        namespace = framework.display_name(),
        app_id = config.app_id(),
        app_name = config.app_name,
    )
}
