//! Fetch module - Remote recipes
//!
//! A remote recipe is downloaded once, cached in a transient file inside the
//! program directory and parsed from there. The cache is a
//! [`tempfile::NamedTempFile`], so it is removed when [`RemoteRecipe`] is
//! dropped on any path, not only after a successful blend.

use std::io::Write;
use std::path::Path;

use reqwest::blocking::Client;
use tempfile::NamedTempFile;

use crate::core::config::{self, Fetch};
use crate::core::error::{Result, SmoothieError};
use crate::core::recipe::{self, Recipe};

pub struct RecipeFetcher {
    client: Client,
}

impl RecipeFetcher {
    pub fn new(settings: &Fetch) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(config::fetch::USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    /// GET the URL and decode the body as UTF-8
    pub fn fetch_text(&self, url: &str) -> Result<String> {
        log::info!("fetching recipe from {}", url);

        let response = self.client.get(url).send()?.error_for_status()?;
        let body = response.bytes()?;
        log::debug!("received {} bytes from {}", body.len(), url);

        Ok(String::from_utf8(body.to_vec())?)
    }

    /// Fetch a recipe and cache it in `dir`
    pub fn fetch(&self, url: &str, dir: &Path) -> Result<RemoteRecipe> {
        let content = self.fetch_text(url)?;
        RemoteRecipe::cache(url, &content, dir)
    }
}

/// A fetched recipe and its transient local copy
#[derive(Debug)]
pub struct RemoteRecipe {
    name: String,
    file: NamedTempFile,
}

impl RemoteRecipe {
    /// Write `content` to a fresh `temp_recipe*.txt` in `dir`
    pub fn cache(url: &str, content: &str, dir: &Path) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix(config::transient::PREFIX)
            .suffix(config::transient::SUFFIX)
            .tempfile_in(dir)
            .map_err(SmoothieError::Transient)?;

        file.write_all(content.as_bytes())
            .and_then(|_| file.flush())
            .map_err(SmoothieError::Transient)?;
        log::debug!("cached {} at {}", url, file.path().display());

        Ok(Self {
            name: recipe::remote_name(url),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Parse the cached copy
    pub fn load(&self) -> Result<Recipe> {
        Recipe::load(self.path(), &self.name)
    }

    /// Delete the cached copy now, reporting failures
    pub fn close(self) {
        let path = self.file.path().to_path_buf();
        if let Err(e) = self.file.close() {
            log::warn!("failed to remove {}: {}", path.display(), e);
        }
    }
}
