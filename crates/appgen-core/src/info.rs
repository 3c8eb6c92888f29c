//! Environment diagnostics for the `--info` flag

use crate::process::npm_binary;
use crate::product::FrameworkConfig;
use colored::Colorize;
use std::process::Command;

/// Probe result for one binary
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
}

impl RuntimeInfo {
    pub fn label(&self) -> &str {
        self.version.as_deref().unwrap_or("Not Found")
    }
}

fn probe(name: &'static str, binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => RuntimeInfo {
            name,
            version: Some(String::from_utf8_lossy(&out.stdout).trim().to_string()),
        },
        _ => RuntimeInfo {
            name,
            version: None,
        },
    }
}

pub fn check_node() -> RuntimeInfo {
    probe("Node", "node")
}

pub fn check_npm() -> RuntimeInfo {
    probe("npm", npm_binary())
}

pub fn check_yarn() -> RuntimeInfo {
    let binary = if cfg!(target_os = "windows") {
        "yarn.cmd"
    } else {
        "yarn"
    };
    probe("Yarn", binary)
}

/// Print environment debug info: generator version, host facts, and the
/// toolchain binaries the scaffold hands off to.
pub fn print_environment<C: FrameworkConfig>(framework: &C, generator: &str, version: &str) {
    println!("{}", "\nEnvironment Info:".bold());
    println!("\n  current version of {generator}: {version}");
    if let Ok(exe) = std::env::current_exe() {
        println!("  running from {}", exe.display());
    }

    let cpus = std::thread::available_parallelism()
        .map(|count| count.get())
        .unwrap_or(1);

    println!();
    println!("  System:");
    println!("    OS : {} {}", std::env::consts::OS, std::env::consts::ARCH);
    println!("    CPU: {cpus} logical cores");
    println!("  Binaries:");
    for info in [check_node(), check_npm(), check_yarn()] {
        println!("    {:<4}: {}", info.name, info.label());
    }
    println!("  Framework:");
    println!(
        "    {}: {}",
        framework.npm_package(),
        framework.npm_package_version()
    );
    println!("    docs: {}", framework.docs_url());
}
