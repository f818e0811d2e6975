//! The render entry point.
//!
//! [`TableRenderer`] owns the compiled template environment and the
//! table-instance counter, and drives the pipeline:
//! resolve → fetch → project → assemble. It is stateless across renders
//! apart from the counter, so one renderer can serve a whole process.

use std::sync::atomic::{AtomicU64, Ordering};

use minijinja::Environment;

use crate::error::TableError;
use crate::locale::{DefaultLocale, Localizer};
use crate::source::{ContentProvider, PostFilter};
use crate::table::{
    assemble, build_environment, project_rows, resolve, Catalog, ColumnOverrides, NoOverrides,
    RawArgs, TableDefaults,
};

/// Renders posts tables from shortcode-style attributes.
pub struct TableRenderer {
    env: Environment<'static>,
    defaults: TableDefaults,
    counter: AtomicU64,
}

impl TableRenderer {
    /// Creates a renderer with the stock defaults.
    pub fn new() -> Result<Self, TableError> {
        Self::with_defaults(TableDefaults::default())
    }

    /// Creates a renderer with host-supplied defaults.
    pub fn with_defaults(defaults: TableDefaults) -> Result<Self, TableError> {
        Ok(TableRenderer {
            env: build_environment()?,
            defaults,
            counter: AtomicU64::new(0),
        })
    }

    /// Number of tables rendered so far by this renderer.
    pub fn table_count(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Renders a table with no column overrides and the passthrough locale.
    pub fn render(
        &self,
        args: &RawArgs,
        provider: &dyn ContentProvider,
    ) -> Result<String, TableError> {
        self.render_with(args, provider, &NoOverrides, &DefaultLocale)
    }

    /// Renders a table with the full set of collaborator hooks.
    ///
    /// A category that does not resolve is silently ignored and the table
    /// renders unfiltered. An empty record set yields an empty string rather
    /// than an empty table shell, and does not consume an instance number.
    pub fn render_with(
        &self,
        args: &RawArgs,
        provider: &dyn ContentProvider,
        overrides: &dyn ColumnOverrides,
        l10n: &dyn Localizer,
    ) -> Result<String, TableError> {
        let config = resolve(args, &self.defaults);

        let filter = match &config.category {
            Some(slug) => PostFilter {
                category: provider.resolve_category(slug).map(|c| c.slug),
            },
            None => PostFilter::default(),
        };
        let posts = provider.fetch_posts(&filter);
        if posts.is_empty() {
            return Ok(String::new());
        }

        // Instance numbers start at 1 and are reserved atomically so
        // concurrent renders never share an id.
        let table_id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;

        let catalog = Catalog::localized(l10n);
        let catalog = overrides.global(catalog);
        let catalog = overrides.for_table(catalog, table_id);

        let (rows, sort_index) = project_rows(&posts, &config, provider, l10n, &self.env)?;
        assemble(&self.env, &config, &catalog, &rows, sort_index, table_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{CategoryLink, InMemoryProvider, Post};
    use crate::table::{ColumnId, ColumnSpec};
    use chrono::NaiveDate;

    fn post(id: u64, title: &str, day: u32) -> Post {
        Post::new(id, title)
            .permalink(format!("https://example.com/{id}"))
            .author("Sam", "https://example.com/author/sam")
            .published(NaiveDate::from_ymd_opt(2024, 6, day).unwrap())
            .category(CategoryLink::new("news", "News", "https://example.com/c/news"))
            .body("Some words in the body.")
    }

    fn provider(count: u64) -> InMemoryProvider {
        InMemoryProvider::new((1..=count).map(|i| post(i, &format!("Post {i}"), 1)).collect())
    }

    #[test]
    fn empty_record_set_yields_empty_output() {
        let renderer = TableRenderer::new().unwrap();
        let html = renderer.render(&RawArgs::new(), &provider(0)).unwrap();
        assert_eq!(html, "");
        assert_eq!(renderer.table_count(), 0);
    }

    #[test]
    fn instance_counter_increments_per_successful_render() {
        let renderer = TableRenderer::new().unwrap();
        let p = provider(2);

        let first = renderer.render(&RawArgs::new(), &p).unwrap();
        assert!(first.contains("id=\"posts-table-1\""));
        assert_eq!(renderer.table_count(), 1);

        // An empty render in between does not consume an id.
        renderer.render(&RawArgs::new(), &provider(0)).unwrap();
        assert_eq!(renderer.table_count(), 1);

        let second = renderer.render(&RawArgs::new(), &p).unwrap();
        assert!(second.contains("id=\"posts-table-2\""));
        assert_eq!(renderer.table_count(), 2);
    }

    #[test]
    fn paging_reflects_record_count() {
        let renderer = TableRenderer::new().unwrap();
        let args = RawArgs::new().set("rows_per_page", "20");

        let big = renderer.render(&args, &provider(25)).unwrap();
        assert!(big.contains("data-paging=\"true\""));

        let small = renderer.render(&args, &provider(5)).unwrap();
        assert!(small.contains("data-paging=\"false\""));
    }

    #[test]
    fn unresolved_category_renders_unfiltered() {
        let renderer = TableRenderer::new().unwrap();
        let args = RawArgs::new().set("columns", "id").set("category", "no-such-category");
        let html = renderer.render(&args, &provider(3)).unwrap();
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<td>3</td>"));
    }

    #[test]
    fn resolved_category_filters_posts() {
        let posts = vec![
            post(1, "News post", 1),
            Post::new(2, "Other post")
                .published(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap())
                .category(CategoryLink::new("travel", "Travel", "/c/travel")),
        ];
        let renderer = TableRenderer::new().unwrap();
        let args = RawArgs::new().set("columns", "id").set("category", "news");
        let html = renderer.render(&args, &InMemoryProvider::new(posts)).unwrap();
        assert!(html.contains("<td>1</td>"));
        assert!(!html.contains("<td>2</td>"));
    }

    #[test]
    fn hidden_sort_column_appears_in_output() {
        let renderer = TableRenderer::new().unwrap();
        let args = RawArgs::new().set("columns", "date,author").set("sort_by", "title");
        let html = renderer.render(&args, &provider(1)).unwrap();
        assert!(html.contains(r#"<th data-name="title" data-visible="false">Title</th>"#));
        assert!(html.contains(r#"data-order='[[2,"asc"]]'"#));
        assert!(html.contains("Post 1")); // hidden cell carries the title
    }

    #[test]
    fn override_hooks_run_global_then_instance() {
        struct Hooks;
        impl ColumnOverrides for Hooks {
            fn global(&self, catalog: Catalog) -> Catalog {
                catalog.set(ColumnId::Date, ColumnSpec::new("When", 2))
            }
            fn for_table(&self, catalog: Catalog, table_id: u64) -> Catalog {
                if table_id == 1 {
                    let heading = format!("{} (local)", catalog.get(ColumnId::Date).heading);
                    catalog.set(ColumnId::Date, ColumnSpec::new(heading, 2))
                } else {
                    catalog
                }
            }
        }

        let renderer = TableRenderer::new().unwrap();
        let args = RawArgs::new().set("columns", "title,date");
        let html = renderer
            .render_with(&args, &provider(1), &Hooks, &DefaultLocale)
            .unwrap();
        // The instance pass saw the global pass's heading.
        assert!(html.contains(">When (local)</th>"));
    }

    #[test]
    fn localizer_translates_headings_and_tooltip() {
        struct French;
        impl Localizer for French {
            fn locale(&self) -> &str {
                "fr_FR"
            }
            fn translate(&self, text: &str) -> String {
                match text {
                    "Author" => "Auteur".to_string(),
                    "Posts by %s" => "Articles de %s".to_string(),
                    other => other.to_string(),
                }
            }
        }

        let renderer = TableRenderer::new().unwrap();
        let args = RawArgs::new().set("columns", "title,author");
        let html = renderer
            .render_with(&args, &provider(1), &NoOverrides, &French)
            .unwrap();
        assert!(html.contains(">Auteur</th>"));
        assert!(html.contains(r#"title="Articles de Sam""#));
    }

    #[test]
    fn default_render_emits_full_fragment() {
        let renderer = TableRenderer::new().unwrap();
        let html = renderer.render(&RawArgs::new(), &provider(2)).unwrap();
        assert!(html.starts_with("<table id=\"posts-table-1\""));
        assert!(html.contains("<thead><tr>"));
        assert!(html.contains("<tbody>"));
        assert!(html.ends_with("</tbody></table>"));
        // Default column list, in order.
        for name in ["title", "content", "date", "author", "category"] {
            assert!(html.contains(&format!("data-name=\"{name}\"")), "{name}");
        }
    }
}
