//! Nucleon app generator - scaffolds a ready-to-build Nucleon workspace

use anyhow::Context;
use appgen_core::config::{CreateArgs, MainThreadAddon, Theme};
use appgen_core::info;
use appgen_core::pipeline::{self, InterruptFlag, Outcome, RunContext};
use appgen_core::process::SystemRunner;
use appgen_core::product::FrameworkConfig;
use appgen_core::tui::{self, CliclackPrompter};
use clap::Parser;
use colored::Colorize;
use std::time::Instant;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");

const BUGS_URL: &str = "https://github.com/nucleon-dev/nucleon-app/issues";

/// Nucleon framework configuration
#[derive(Clone)]
pub struct NucleonConfig;

impl FrameworkConfig for NucleonConfig {
    fn name(&self) -> &'static str {
        "nucleon"
    }

    fn display_name(&self) -> &'static str {
        "Nucleon"
    }

    fn npm_package(&self) -> &'static str {
        "nucleon.mjs"
    }

    fn npm_package_version(&self) -> &'static str {
        "^1.0.0"
    }

    fn build_script(&self) -> &'static str {
        "./node_modules/nucleon.mjs/buildScripts/buildAll.mjs"
    }

    fn build_args(&self) -> &'static [&'static str] {
        &["--no-questions"]
    }

    fn server_script(&self) -> &'static str {
        "server-start"
    }

    fn docs_url(&self) -> &'static str {
        "https://nucleon.dev/docs"
    }
}

#[derive(Parser, Debug)]
#[command(name = "nucleon-app")]
#[command(about = "Scaffolds a ready-to-build Nucleon app workspace")]
#[command(version)]
#[command(after_help = format!(
    "In case you have any issues, please create a ticket here:\n{BUGS_URL}"
))]
struct Args {
    /// Print environment debug info
    #[arg(short, long)]
    info: bool,

    /// Name of your app in PascalCase
    #[arg(short = 'n', long = "app-name")]
    app_name: Option<String>,

    /// "AmCharts", "GoogleAnalytics", "HighlightJS", "LocalStorage", "MapboxGL", "Markdown", "Siesta", "Stylesheet"
    #[arg(short = 'm', long = "mainThreadAddons", value_delimiter = ',')]
    main_thread_addons: Option<Vec<String>>,

    /// Start a web server right after the build
    #[arg(short, long, default_value_t = true, action = clap::ArgAction::Set)]
    start: bool,

    /// "theme-dark", "theme-light", "all", "none"
    #[arg(short, long)]
    themes: Option<String>,

    /// Name of the project root folder
    #[arg(short, long)]
    workspace: Option<String>,
}

fn create_args(args: &Args) -> anyhow::Result<CreateArgs> {
    let themes = args
        .themes
        .as_deref()
        .map(|value| value.parse::<Theme>())
        .transpose()
        .context("invalid --themes value")?;

    let main_thread_addons = args
        .main_thread_addons
        .as_ref()
        .map(|values| {
            values
                .iter()
                .map(|value| value.parse::<MainThreadAddon>())
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()
        .context("invalid --mainThreadAddons value")?;

    Ok(CreateArgs {
        app_name: args.app_name.clone(),
        workspace: args.workspace.clone(),
        themes,
        main_thread_addons,
        start: args.start,
    })
}

fn exit_with_error(err: anyhow::Error) -> ! {
    eprintln!("{}", "ERROR! An error was encountered while executing".red());
    eprintln!("{err:#}");
    println!("Exiting with error.");
    let _ = console::Term::stderr().show_cursor();
    std::process::exit(1);
}

fn main() {
    let args = Args::parse();
    let framework = NucleonConfig;

    // --info takes precedence over scaffolding
    if args.info {
        info::print_environment(&framework, GENERATOR_NAME, CLI_VERSION);
        return;
    }

    let create_args = match create_args(&args) {
        Ok(value) => value,
        Err(err) => exit_with_error(err),
    };

    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(panic_info);
    }));

    let interrupt = InterruptFlag::new();
    let ctx = RunContext::new(interrupt.clone());

    // A user interrupt is a clean exit, reported with the elapsed time
    let handler_started = Instant::now();
    ctrlc::set_handler(move || {
        interrupt.trip();
        println!("\nTotal time: {:.2}s", handler_started.elapsed().as_secs_f64());
        println!("Exiting without error.");
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(0);
    })
    .ok();

    if let Err(err) = tui::intro(&framework, GENERATOR_NAME, CLI_VERSION) {
        exit_with_error(err.into());
    }

    match pipeline::run(
        &framework,
        &create_args,
        &CliclackPrompter,
        &SystemRunner,
        &ctx,
    ) {
        Ok(Outcome::Completed) | Ok(Outcome::Interrupted) => {
            pipeline::report_elapsed(&ctx);
            println!("Exiting without error.");
            let _ = console::Term::stderr().show_cursor();
        }
        Err(err) => exit_with_error(err.into()),
    }
}
