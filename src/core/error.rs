//! Error module - Everything that can stop a smoothie

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a recipe could not be blended
#[derive(Error, Debug)]
pub enum SmoothieError {
    /// Local recipe file does not exist
    #[error("Recipe file '{name}' not found in recipes folder!")]
    RecipeNotFound { name: String },

    /// Recipe exists but has no non-blank lines
    #[error("No ingredients found in {source_name}!")]
    EmptyRecipe { source_name: String },

    /// Network or HTTP status failure
    #[error("Failed to fetch recipe: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Remote body was not UTF-8
    #[error("Failed to fetch recipe: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Could not materialize the remote recipe locally
    #[error("Failed to fetch recipe: {0}")]
    Transient(#[source] std::io::Error),

    /// Recipe file exists but could not be read as text
    #[error("Failed to read recipe {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Console write failed
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SmoothieError>;

impl SmoothieError {
    /// Message with every underlying cause appended, e.g.
    /// "Failed to fetch recipe: error sending request ...: Connection refused"
    pub fn report(&self) -> String {
        let mut message = self.to_string();

        // The direct source is already part of the message
        let causes = std::iter::successors(std::error::Error::source(self), |e| e.source()).skip(1);
        for cause in causes {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
        }

        message
    }
}
