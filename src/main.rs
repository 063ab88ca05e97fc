//! Smoothie - Blends a recipe while telling a joke
//!
//! Reads ingredients from a file in `recipes/` or from a URL and adds them
//! one by one to a (simulated) blender.
//!
//! # Uso
//! ```bash
//! smoothie mango.txt
//! smoothie https://example.com/smoothies/tropical_sunrise.txt
//! ```

use anyhow::Result;
use clap::Parser;

mod commands;
mod core;

use crate::core::config::{self, Settings};
use crate::core::console::Console;

#[derive(Parser)]
#[command(name = "smoothie")]
#[command(about = "🥤 Smoothie - Blends a recipe of ingredients", long_about = None)]
#[command(version)]
struct Cli {
    /// Recipe file name (inside recipes/) or http(s) URL
    recipe: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let base = config::base_dir()?;
    let settings = Settings::load(&base)?;
    log::debug!("program directory: {}", base.display());

    let mut console = Console::stdout();
    commands::blend::run(&cli.recipe, &base, &settings, &mut console)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_takes_one_recipe() {
        let cli = Cli::try_parse_from(["smoothie", "mango.txt"]).unwrap();
        assert_eq!(cli.recipe, "mango.txt");

        assert!(Cli::try_parse_from(["smoothie"]).is_err());
        assert!(Cli::try_parse_from(["smoothie", "a.txt", "b.txt"]).is_err());
    }
}
