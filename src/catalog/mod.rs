//! Portfolio data model and loading
//!
//! A [`Portfolio`] bundles everything the app presents: the profile shown on
//! the home and about pages, the skill list, contact details and the project
//! [`Catalog`] that the filter engine works over.
//!
//! Portfolios are plain TOML files:
//!
//! ```toml
//! [profile]
//! name = "Sam Developer"
//!
//! [[projects]]
//! title = "Social Zone"
//! tags = ["React", "Node.js"]
//! ```
//!
//! The catalog is immutable once loaded. Project ids default to the
//! kebab-cased title (made unique with a numeric suffix), and tags form a
//! case-insensitive set.

pub mod error;

pub use error::CatalogError;

use crate::search::fold_case;
use heck::ToKebabCase;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_PORTFOLIO: &str = include_str!("default.toml");

/// A single showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
}

impl CatalogItem {
    /// Create an item, dropping blank tags and case-insensitive duplicates
    ///
    /// The first spelling of a tag is the one kept for display.
    #[must_use]
    pub fn new<I, S>(id: impl Into<String>, title: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            tags: dedup_tags(tags),
            github: None,
            live: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_github(mut self, url: impl Into<String>) -> Self {
        self.github = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_live(mut self, url: impl Into<String>) -> Self {
        self.live = Some(url.into());
        self
    }

    /// Check whether the item carries `tag`, ignoring case
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = fold_case(tag);
        self.tags.iter().any(|t| fold_case(t) == wanted)
    }
}

fn dedup_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    tags.into_iter()
        .map(|t| t.into().trim().to_string())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(fold_case(t)))
        .collect()
}

/// Ordered, immutable collection of projects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, keeping the given order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidItem` for an item with a blank title or id,
    /// and `CatalogError::DuplicateId` when two items share an id (ignoring case).
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for item in &items {
            if item.title.trim().is_empty() {
                return Err(CatalogError::InvalidItem(format!(
                    "project '{}' has an empty title",
                    item.id
                )));
            }
            if item.id.trim().is_empty() {
                return Err(CatalogError::InvalidItem(format!(
                    "project '{}' has an empty id",
                    item.title
                )));
            }
            if !ids.insert(fold_case(&item.id)) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a project by id, ignoring case
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        let wanted = fold_case(id);
        self.items.iter().find(|item| fold_case(&item.id) == wanted)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Who the portfolio belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub bio: String,
}

/// A skill badge, optionally with a hex accent color
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// A named outbound link (github, linkedin, web, ...)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub links: Vec<Link>,
}

impl Contact {
    /// Find a link by name, ignoring case
    #[must_use]
    pub fn link(&self, name: &str) -> Option<&Link> {
        let wanted = fold_case(name);
        self.links.iter().find(|l| fold_case(&l.name) == wanted)
    }
}

/// Project entry as written in a portfolio file
#[derive(Debug, Deserialize)]
struct ProjectEntry {
    #[serde(default)]
    id: Option<String>,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    github: Option<String>,
    #[serde(default)]
    live: Option<String>,
}

impl ProjectEntry {
    fn explicit_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }

    fn into_item(self, id: String) -> CatalogItem {
        let mut item = CatalogItem::new(id, self.title, self.tags).with_description(self.description);
        item.github = self.github;
        item.live = self.live;
        item
    }
}

/// Turn file entries into items, deriving ids for entries that lack one
///
/// A derived id is the kebab-cased title, or `project-N` (1-based position)
/// when the title has no usable characters. Derived ids never collide with
/// each other or with ids written in the file: `-2`, `-3`, ... is appended
/// until the id is free. Duplicate written ids are left for
/// [`Catalog::from_items`] to reject.
fn assign_ids(entries: Vec<ProjectEntry>) -> Vec<CatalogItem> {
    let mut taken: HashSet<String> = entries
        .iter()
        .filter_map(ProjectEntry::explicit_id)
        .map(fold_case)
        .collect();

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let id = match entry.explicit_id() {
                Some(id) => id.to_string(),
                None => {
                    let mut base = entry.title.to_kebab_case();
                    if base.is_empty() {
                        base = format!("project-{}", idx + 1);
                    }
                    let mut id = base.clone();
                    let mut n = 2;
                    while !taken.insert(fold_case(&id)) {
                        id = format!("{base}-{n}");
                        n += 1;
                    }
                    id
                }
            };
            entry.into_item(id)
        })
        .collect()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PortfolioFile {
    profile: Profile,
    skills: Vec<Skill>,
    contact: Contact,
    projects: Vec<ProjectEntry>,
}

/// The complete static content of the app
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub contact: Contact,
    pub projects: Catalog,
}

impl Portfolio {
    /// Parse a portfolio from TOML text
    ///
    /// A file without any `[[projects]]` yields an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed TOML, or a validation error
    /// from [`Catalog::from_items`].
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: PortfolioFile = toml::from_str(content)?;
        let items = assign_ids(file.projects);
        Ok(Self {
            profile: file.profile,
            skills: file.skills,
            contact: file.contact,
            projects: Catalog::from_items(items)?,
        })
    }

    /// Load a portfolio file from disk
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise any
    /// error from [`Portfolio::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let portfolio = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            projects = portfolio.projects.len(),
            "loaded portfolio"
        );
        Ok(portfolio)
    }

    /// The portfolio compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded file is broken, which the test suite guards against.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_PORTFOLIO)
    }

    /// Load from `path` when given, otherwise fall back to the built-in portfolio
    ///
    /// # Errors
    ///
    /// Propagates loading errors from [`Portfolio::load`] or [`Portfolio::builtin`].
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("no catalog configured, using built-in portfolio");
                Self::builtin()
            }
        }
    }
}
