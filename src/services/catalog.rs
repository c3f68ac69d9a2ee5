//! Catalog file I/O and the shared catalog snapshot.
//!
//! Catalog files are TOML. [`CatalogService`] loads and validates them.
//! [`CatalogStore`] holds the active catalog behind an
//! `Arc` so each render works from one consistent snapshot while a reload
//! swaps in a new one.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

use crate::models::SkillCatalog;

/// Service for catalog file operations.
pub struct CatalogService;

impl CatalogService {
    /// Loads and validates a catalog file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use skillradar::services::CatalogService;
    ///
    /// let catalog = CatalogService::load(Path::new("skills.toml"))?;
    /// println!("{} roles", catalog.role_order().len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<SkillCatalog> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let catalog = Self::parse(&content)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?;

        info!(
            path = %path.display(),
            roles = catalog.roles.len(),
            items = catalog.items.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Parses and validates catalog TOML.
    pub fn parse(content: &str) -> Result<SkillCatalog> {
        let catalog: SkillCatalog = toml::from_str(content).context("Invalid catalog TOML")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads `path` if given, else the built-in catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<SkillCatalog> {
        path.map_or_else(|| Ok(SkillCatalog::builtin()), Self::load)
    }
}

/// The active catalog, replaced wholesale between render passes.
#[derive(Debug)]
pub struct CatalogStore {
    current: RwLock<Arc<SkillCatalog>>,
}

impl CatalogStore {
    /// Creates a store holding `catalog`.
    #[must_use]
    pub fn new(catalog: SkillCatalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// The catalog as of now. Later replacements do not affect the snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<SkillCatalog> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Installs a new catalog, returning the previous one.
    pub fn replace(&self, catalog: SkillCatalog) -> Arc<SkillCatalog> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, Arc::new(catalog))
    }

    /// Reloads from a file. On error the current catalog stays in place.
    pub fn reload(&self, path: &Path) -> Result<()> {
        let catalog = CatalogService::load(path)?;
        self.replace(catalog);
        Ok(())
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(SkillCatalog::builtin())
    }
}
