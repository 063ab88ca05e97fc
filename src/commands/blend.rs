//! Comando blend - Faz o smoothie
//!
//! Resolves a recipe reference (file in `recipes/` or URL) and blends it.
//! Recipe failures are reported on the console and never escape as errors.

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::core::config::Settings;
use crate::core::console::Console;
use crate::core::error::{self, SmoothieError};
use crate::core::fetch::RecipeFetcher;
use crate::core::presenter;
use crate::core::recipe::{Recipe, RecipeRef};

pub fn run<W: Write>(
    reference: &str,
    base: &Path,
    settings: &Settings,
    console: &mut Console<W>,
) -> Result<()> {
    let outcome = match RecipeRef::parse(reference) {
        RecipeRef::Remote(url) => {
            console.info(&format!("Fetching recipe from {}...", url))?;
            blend_remote(&url, base, settings, console)
        }
        RecipeRef::Local(name) => blend_local(&name, base, settings, console),
    };

    if let Err(err) = outcome {
        log::debug!("smoothie not made: {:?}", err);
        console.error(&err.report())?;
    }

    Ok(())
}

fn blend_local<W: Write>(
    name: &str,
    base: &Path,
    settings: &Settings,
    console: &mut Console<W>,
) -> error::Result<()> {
    let path = settings.recipes_path(base).join(name);
    if !path.exists() {
        return Err(SmoothieError::RecipeNotFound {
            name: name.to_string(),
        });
    }

    let recipe = Recipe::load(&path, name)?;
    presenter::make_smoothie(&recipe, &settings.timing, console)
}

fn blend_remote<W: Write>(
    url: &str,
    base: &Path,
    settings: &Settings,
    console: &mut Console<W>,
) -> error::Result<()> {
    let fetcher = RecipeFetcher::new(&settings.fetch)?;
    let remote = fetcher.fetch(url, base)?;

    // On early return the cached copy is dropped and removed
    let recipe = remote.load()?;
    let outcome = presenter::make_smoothie(&recipe, &settings.timing, console);
    remote.close();
    outcome
}
