//! Ignore file (`<workspace>/.gitignore`)

use crate::config::ScaffoldConfig;
use std::fs;
use std::io;
use std::path::Path;

const CONTENT: &str = "\
.DS_Store
.idea
dist
node_modules
package-lock.json
";

pub fn write(config: &ScaffoldConfig) -> io::Result<()> {
    fs::write(Path::new(&config.workspace).join(".gitignore"), CONTENT)
}
