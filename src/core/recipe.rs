//! Recipe module - Recipe references, parsing and titles

use std::path::Path;

use crate::core::config::transient;
use crate::core::error::{Result, SmoothieError};

/// Where a recipe comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeRef {
    /// File name inside the recipes directory
    Local(String),
    /// `http://` or `https://` URL
    Remote(String),
}

impl RecipeRef {
    pub fn parse(reference: &str) -> Self {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            RecipeRef::Remote(reference.to_string())
        } else {
            RecipeRef::Local(reference.to_string())
        }
    }
}

/// A loaded recipe
#[derive(Debug, Clone)]
pub struct Recipe {
    /// Display title, e.g. "Banana Blast"
    pub title: String,
    /// File name shown in messages
    pub source: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Load a recipe from a file, naming it after `source`
    pub fn load(path: &Path, source: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SmoothieError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        })?;

        let ingredients = parse_ingredients(&content);
        log::debug!("{} ingredient(s) in {}", ingredients.len(), path.display());

        Ok(Self {
            title: title_from_name(source),
            source: source.to_string(),
            ingredients,
        })
    }
}

/// One ingredient per line; surrounding whitespace and blank lines dropped
pub fn parse_ingredients(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// "banana_blast.txt" -> "Banana Blast"
pub fn title_from_name(name: &str) -> String {
    let stem = Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());

    title_case(&stem.replace('_', " "))
}

/// Upper-case the first letter of every run of letters, lower-case the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// File name for a remote recipe, taken from the last URL path segment
/// (percent-decoded)
pub fn remote_name(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .and_then(|mut segments| segments.next_back().map(String::from))
        })
        .map(|segment| match urlencoding::decode(&segment) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => segment,
        })
        .filter(|segment| !segment.is_empty())
        .unwrap_or_else(|| transient::FALLBACK_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_ref() {
        assert_eq!(
            RecipeRef::parse("https://example.com/a.txt"),
            RecipeRef::Remote("https://example.com/a.txt".to_string())
        );
        assert_eq!(
            RecipeRef::parse("http://example.com/a.txt"),
            RecipeRef::Remote("http://example.com/a.txt".to_string())
        );
        assert_eq!(
            RecipeRef::parse("mango.txt"),
            RecipeRef::Local("mango.txt".to_string())
        );
        assert_eq!(
            RecipeRef::parse("ftp://example.com/a.txt"),
            RecipeRef::Local("ftp://example.com/a.txt".to_string())
        );
    }

    #[test]
    fn test_parse_ingredients_drops_blanks_and_trims() {
        let ingredients = parse_ingredients("mango\n\nspinach\n  \nyogurt\n");
        assert_eq!(ingredients, vec!["mango", "spinach", "yogurt"]);

        let ingredients = parse_ingredients("  kale  \r\n\tice\t\r\nkale\n");
        assert_eq!(ingredients, vec!["kale", "ice", "kale"]);
    }

    #[test]
    fn test_parse_ingredients_empty() {
        assert!(parse_ingredients("").is_empty());
        assert!(parse_ingredients("\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_title() {
        assert_eq!(title_from_name("banana_blast"), "Banana Blast");
        assert_eq!(title_from_name("banana_blast.txt"), "Banana Blast");
        assert_eq!(title_from_name("MANGO.txt"), "Mango");
        assert_eq!(title_case("green 2go"), "Green 2Go");
    }

    #[test]
    fn test_remote_name() {
        assert_eq!(
            remote_name("https://example.com/smoothies/tropical_sunrise.txt"),
            "tropical_sunrise.txt"
        );
        assert_eq!(
            remote_name("https://example.com/tropical%20sunrise.txt"),
            "tropical sunrise.txt"
        );
        assert_eq!(
            title_from_name(&remote_name("https://example.com/tropical%20sunrise.txt")),
            "Tropical Sunrise"
        );
        assert_eq!(remote_name("https://example.com/%FF.txt"), "%FF.txt");
        assert_eq!(remote_name("https://example.com/"), "temp_recipe.txt");
        assert_eq!(remote_name("https://example.com"), "temp_recipe.txt");
    }

    #[test]
    fn test_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mango.txt");
        std::fs::write(&path, "mango\n\nspinach\n  \nyogurt\n").unwrap();

        let recipe = Recipe::load(&path, "mango.txt").unwrap();
        assert_eq!(recipe.title, "Mango");
        assert_eq!(recipe.source, "mango.txt");
        assert_eq!(recipe.ingredients, vec!["mango", "spinach", "yogurt"]);
    }

    #[test]
    fn test_load_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = Recipe::load(&path, "binary.txt").unwrap_err();
        assert!(matches!(err, SmoothieError::Unreadable { .. }));
    }
}
