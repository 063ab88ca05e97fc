//! Presenter module - Turns a recipe into a smoothie on screen

use colored::*;
use std::io::Write;

use crate::core::config::Timing;
use crate::core::console::Console;
use crate::core::error::{Result, SmoothieError};
use crate::core::jokes;
use crate::core::recipe::Recipe;

const BLENDING: &str = "Blending everything together...";

fn blending_status() -> String {
    BLENDING.bright_magenta().bold().to_string()
}

/// Blend a recipe, pausing `timing` between steps.
///
/// Fails with [`SmoothieError::EmptyRecipe`] before printing anything when the
/// recipe has no ingredients.
pub fn make_smoothie<W: Write>(
    recipe: &Recipe,
    timing: &Timing,
    console: &mut Console<W>,
) -> Result<()> {
    if recipe.ingredients.is_empty() {
        return Err(SmoothieError::EmptyRecipe {
            source_name: recipe.source.clone(),
        });
    }

    present(recipe, timing, console).map_err(SmoothieError::Output)
}

fn present<W: Write>(
    recipe: &Recipe,
    timing: &Timing,
    console: &mut Console<W>,
) -> std::io::Result<()> {
    console.banner(&format!("Starting to make: {}", recipe.title))?;
    console.info(&format!(
        "Let me enlighten you with a joke while you wait: {}",
        jokes::random()
    ))?;
    console.line("")?;

    for ingredient in &recipe.ingredients {
        console.hold(&format!("Adding {}...", ingredient), timing.add_delay())?;
        console.success(&format!("Added {}", ingredient))?;
    }

    console.hold(&blending_status(), timing.blend_delay())?;

    console.celebrate(&format!(
        "✨ Smoothie '{}' is ready! Enjoy! ✨",
        recipe.title
    ))
}
