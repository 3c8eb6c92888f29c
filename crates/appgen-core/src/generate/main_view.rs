//! Main view component (`<appPath>/MainView.mjs`)

use crate::config::ScaffoldConfig;
use crate::product::FrameworkConfig;
use std::fs;
use std::io;

pub fn write<C: FrameworkConfig>(framework: &C, config: &ScaffoldConfig) -> io::Result<()> {
    fs::write(
        config.app_path().join("MainView.mjs"),
        render(framework, config),
    )
}

fn render<C: FrameworkConfig>(framework: &C, config: &ScaffoldConfig) -> String {
    format!(
        r#"import Container from '../../node_modules/{package}/src/container/Base.mjs';

class MainView extends Container {{
    static config = {{
        className: '{app_name}.MainView',
        layout   : {{ntype: 'fit'}},
        items    : [{{
            ntype: 'component',
            html : 'Welcome to your new {display} app.'
        }}]
    }}
}}

export default MainView;
"#,
        package = framework.npm_package(),
        app_name = config.app_name,
        display = framework.display_name(),
    )
}
