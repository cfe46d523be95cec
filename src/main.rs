use std::path::PathBuf;

use anyhow::Context;

mod error;
mod generator;
mod model;
mod parser;
mod scanner;
mod settings;

use settings::GeneratorSettings;

const USAGE: &str = "Usage: spine-tester-gen [ROOT]

Scans ROOT (default: the current directory) for .spinescene files and writes
spine_tester/generated/go.go and spine_tester/generated/data.lua.";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    if args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return Ok(());
    }

    let root = match args.get(1) {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir().context("Failed to resolve the current directory")?,
    };

    let settings = GeneratorSettings::load();
    generator::run(&root, &settings)
        .with_context(|| format!("Failed to generate spine tester from {}", root.display()))?;

    Ok(())
}
