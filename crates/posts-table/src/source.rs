//! Content collaborator contracts: post records and the provider trait.
//!
//! The core performs no I/O of its own. Fetching posts, resolving category
//! slugs, and running the host's content-filter pipeline are delegated to a
//! [`ContentProvider`] supplied by the embedding environment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A resolved category, as returned by [`ContentProvider::resolve_category`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Canonical category slug.
    pub slug: String,
}

/// A category attached to a post, with the data needed to render its link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLink {
    /// Canonical slug, used for filtering.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Category archive URL.
    pub url: String,
}

impl CategoryLink {
    /// Creates a category link.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        CategoryLink {
            slug: slug.into(),
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A published post record, immutable for the duration of a render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier.
    pub id: u64,
    /// Title text.
    pub title: String,
    /// Permalink URL.
    pub permalink: String,
    /// Author display name.
    pub author: String,
    /// Author archive URL.
    pub author_url: String,
    /// Publish date.
    pub date: NaiveDate,
    /// Categories the post belongs to.
    pub categories: Vec<CategoryLink>,
    /// Raw body, before content filters run.
    pub body: String,
}

impl Post {
    /// Creates a post with the given id and title; everything else starts
    /// empty.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Post {
            id,
            title: title.into(),
            permalink: String::new(),
            author: String::new(),
            author_url: String::new(),
            date: NaiveDate::default(),
            categories: Vec::new(),
            body: String::new(),
        }
    }

    /// Sets the permalink.
    pub fn permalink(mut self, url: impl Into<String>) -> Self {
        self.permalink = url.into();
        self
    }

    /// Sets the author name and archive URL.
    pub fn author(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.author = name.into();
        self.author_url = url.into();
        self
    }

    /// Sets the publish date.
    pub fn published(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Adds a category.
    pub fn category(mut self, link: CategoryLink) -> Self {
        self.categories.push(link);
        self
    }

    /// Sets the raw body.
    pub fn body(mut self, text: impl Into<String>) -> Self {
        self.body = text.into();
        self
    }
}

/// Filter handed to [`ContentProvider::fetch_posts`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostFilter {
    /// Resolved category slug to restrict the fetch to.
    pub category: Option<String>,
}

/// The embedding environment's content source.
///
/// Implementations return published posts only, already restricted to the
/// filter's category when one is set, in whatever order the host considers
/// canonical (typically reverse-chronological). The core passes that order
/// through unchanged; sorting is the client widget's job.
pub trait ContentProvider {
    /// Fetches the posts to render.
    fn fetch_posts(&self, filter: &PostFilter) -> Vec<Post>;

    /// Resolves a category slug, or `None` when the category does not exist.
    /// A `None` here makes the render proceed unfiltered.
    fn resolve_category(&self, slug: &str) -> Option<Category> {
        let _ = slug;
        None
    }

    /// Runs the host's content-transformation pipeline on a raw body.
    /// The default is the identity transform.
    fn apply_content_filters(&self, body: &str) -> String {
        body.to_string()
    }
}

/// A [`ContentProvider`] over an in-memory post list.
///
/// Categories are resolved from the posts' own category links. Useful for
/// static hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProvider {
    posts: Vec<Post>,
}

impl InMemoryProvider {
    /// Creates a provider over the given posts.
    pub fn new(posts: Vec<Post>) -> Self {
        InMemoryProvider { posts }
    }
}

impl ContentProvider for InMemoryProvider {
    fn fetch_posts(&self, filter: &PostFilter) -> Vec<Post> {
        match &filter.category {
            Some(slug) => self
                .posts
                .iter()
                .filter(|p| p.categories.iter().any(|c| c.slug == *slug))
                .cloned()
                .collect(),
            None => self.posts.clone(),
        }
    }

    fn resolve_category(&self, slug: &str) -> Option<Category> {
        self.posts
            .iter()
            .flat_map(|p| &p.categories)
            .find(|c| c.slug == slug)
            .map(|c| Category { slug: c.slug.clone() })
    }
}
