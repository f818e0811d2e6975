//! Row projection: post records to column-ordered, HTML-ready cells.
//!
//! Cells that carry markup (title, author, category links) render through
//! named templates so all dynamic text is escaped by the engine; plain cells
//! (id, date) are formatted directly. Records are projected in the order the
//! provider returned them; sorting belongs to the client widget.

use minijinja::{context, Environment};
use serde::Serialize;

use super::types::{ColumnId, TableConfig};
use crate::error::TableError;
use crate::locale::Localizer;
use crate::source::{ContentProvider, Post};
use crate::text::{decode_entities, strip_shortcodes, strip_tags, trim_words};

/// One projected record: final cell HTML in visible-column order, with the
/// hidden sort cell appended when present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectedRow {
    /// Cell HTML, aligned with the table's header cells.
    pub cells: Vec<String>,
}

/// Projects every post into a row and computes the widget's sort column
/// index.
///
/// When `config.sort_by` is not among the visible columns, each row gets one
/// extra trailing cell for it and the sort index points just past the last
/// visible column.
pub fn project_rows(
    posts: &[Post],
    config: &TableConfig,
    provider: &dyn ContentProvider,
    l10n: &dyn Localizer,
    env: &Environment<'static>,
) -> Result<(Vec<ProjectedRow>, usize), TableError> {
    let visible_sort_index = config.columns.iter().position(|c| *c == config.sort_by);
    let sort_index = visible_sort_index.unwrap_or(config.columns.len());

    let mut rows = Vec::with_capacity(posts.len());
    for post in posts {
        let mut cells = Vec::with_capacity(config.columns.len() + 1);
        for column in &config.columns {
            cells.push(project_cell(post, *column, config, provider, l10n, env)?);
        }
        if visible_sort_index.is_none() {
            cells.push(project_cell(post, config.sort_by, config, provider, l10n, env)?);
        }
        rows.push(ProjectedRow { cells });
    }

    Ok((rows, sort_index))
}

/// Projects one post into the display value for one column.
pub fn project_cell(
    post: &Post,
    column: ColumnId,
    config: &TableConfig,
    provider: &dyn ContentProvider,
    l10n: &dyn Localizer,
    env: &Environment<'static>,
) -> Result<String, TableError> {
    let html = match column {
        ColumnId::Id => post.id.to_string(),
        ColumnId::Title => env.get_template("cell/title.html")?.render(context! {
            permalink => post.permalink,
            title => post.title,
        })?,
        ColumnId::Category => env.get_template("cell/category.html")?.render(context! {
            categories => post.categories,
        })?,
        ColumnId::Date => post.date.format("%Y/%m/%d").to_string(),
        ColumnId::Author => {
            let tooltip = l10n.translate("Posts by %s").replace("%s", &post.author);
            env.get_template("cell/author.html")?.render(context! {
                url => post.author_url,
                tooltip => tooltip,
                name => post.author,
            })?
        }
        ColumnId::Content => {
            let filtered = provider.apply_content_filters(&strip_shortcodes(&post.body));
            // Decode before the template escapes, or entities in the body
            // would render double-escaped.
            let plain = decode_entities(&strip_tags(&filtered));
            let (text, truncated) = trim_words(&plain, config.content_length);
            env.get_template("cell/content.html")?.render(context! {
                text => text,
                truncated => truncated,
            })?
        }
    };
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::DefaultLocale;
    use crate::source::{CategoryLink, InMemoryProvider};
    use crate::table::assemble::build_environment;
    use crate::table::resolve::resolve;
    use crate::table::types::{RawArgs, TableDefaults};
    use chrono::NaiveDate;

    fn config_for(args: RawArgs) -> TableConfig {
        resolve(&args, &TableDefaults::default())
    }

    fn sample_post() -> Post {
        Post::new(42, "A <great> day")
            .permalink("https://example.com/a-great-day")
            .author("Jo Bloggs", "https://example.com/author/jo")
            .published(NaiveDate::from_ymd_opt(2016, 3, 9).unwrap())
            .category(CategoryLink::new("news", "News & Views", "https://example.com/category/news"))
            .category(CategoryLink::new("tips", "Tips", "https://example.com/category/tips"))
            .body("<p>First paragraph.</p> [gallery] <p>Second one here.</p>")
    }

    fn cell(post: &Post, column: ColumnId, config: &TableConfig) -> String {
        let env = build_environment().unwrap();
        let provider = InMemoryProvider::new(vec![]);
        project_cell(post, column, config, &provider, &DefaultLocale, &env).unwrap()
    }

    #[test]
    fn id_cell_is_plain_text() {
        let config = config_for(RawArgs::new());
        assert_eq!(cell(&sample_post(), ColumnId::Id, &config), "42");
    }

    #[test]
    fn title_cell_links_and_escapes() {
        let config = config_for(RawArgs::new());
        let html = cell(&sample_post(), ColumnId::Title, &config);
        assert_eq!(
            html,
            "<a href=\"https://example.com/a-great-day\">A &lt;great&gt; day</a>"
        );
    }

    #[test]
    fn url_attributes_keep_literal_slashes() {
        let config = config_for(RawArgs::new());
        let post = sample_post().permalink("https://example.com/read?a=1&b=2");
        let html = cell(&post, ColumnId::Title, &config);
        assert_eq!(
            html,
            "<a href=\"https://example.com/read?a=1&amp;b=2\">A &lt;great&gt; day</a>"
        );
        assert!(!html.contains("&#x2f;"));
    }

    #[test]
    fn date_cell_uses_slash_format() {
        let config = config_for(RawArgs::new());
        assert_eq!(cell(&sample_post(), ColumnId::Date, &config), "2016/03/09");
    }

    #[test]
    fn author_cell_carries_localized_tooltip() {
        let config = config_for(RawArgs::new());
        let html = cell(&sample_post(), ColumnId::Author, &config);
        assert!(html.contains("href=\"https://example.com/author/jo\""));
        assert!(html.contains("title=\"Posts by Jo Bloggs\""));
        assert!(html.contains("rel=\"author\""));
        assert!(html.contains(">Jo Bloggs</a>"));
    }

    #[test]
    fn category_cell_joins_links_with_comma_space() {
        let config = config_for(RawArgs::new());
        let html = cell(&sample_post(), ColumnId::Category, &config);
        assert_eq!(
            html,
            "<a href=\"https://example.com/category/news\">News &amp; Views</a>, \
             <a href=\"https://example.com/category/tips\">Tips</a>"
        );
    }

    #[test]
    fn content_cell_strips_markup_and_shortcodes() {
        let config = config_for(RawArgs::new());
        let html = cell(&sample_post(), ColumnId::Content, &config);
        assert_eq!(html, "First paragraph. Second one here.");
    }

    #[test]
    fn content_cell_escapes_body_entities_once() {
        let config = config_for(RawArgs::new());
        let post = sample_post().body("<p>Fish &amp; Chips today</p>");
        let html = cell(&post, ColumnId::Content, &config);
        assert_eq!(html, "Fish &amp; Chips today");
    }

    #[test]
    fn content_cell_truncates_with_ellipsis_marker() {
        let config = config_for(RawArgs::new().set("content_length", "3"));
        let post = sample_post().body("one two three four five");
        let html = cell(&post, ColumnId::Content, &config);
        assert_eq!(html, "one two three &hellip;");
    }

    #[test]
    fn content_cell_short_body_has_no_marker() {
        let config = config_for(RawArgs::new().set("content_length", "15"));
        let post = sample_post().body("just a few words");
        assert_eq!(cell(&post, ColumnId::Content, &config), "just a few words");
    }

    #[test]
    fn content_cell_runs_provider_filters() {
        struct Upper;
        impl ContentProvider for Upper {
            fn fetch_posts(&self, _: &crate::source::PostFilter) -> Vec<Post> {
                Vec::new()
            }
            fn apply_content_filters(&self, body: &str) -> String {
                body.to_uppercase()
            }
        }

        let env = build_environment().unwrap();
        let config = config_for(RawArgs::new());
        let post = sample_post().body("quiet words");
        let html =
            project_cell(&post, ColumnId::Content, &config, &Upper, &DefaultLocale, &env).unwrap();
        assert_eq!(html, "QUIET WORDS");
    }

    #[test]
    fn hidden_sort_column_is_appended_with_index_past_visible() {
        let env = build_environment().unwrap();
        let provider = InMemoryProvider::new(vec![]);
        let config = config_for(RawArgs::new().set("columns", "date,author").set("sort_by", "title"));
        let posts = vec![sample_post()];
        let (rows, sort_index) =
            project_rows(&posts, &config, &provider, &DefaultLocale, &env).unwrap();
        assert_eq!(sort_index, 2);
        assert_eq!(rows[0].cells.len(), 3);
        assert!(rows[0].cells[2].contains("A &lt;great&gt; day"));
    }

    #[test]
    fn visible_sort_column_adds_no_extra_cell() {
        let env = build_environment().unwrap();
        let provider = InMemoryProvider::new(vec![]);
        let config = config_for(RawArgs::new().set("columns", "title,date").set("sort_by", "date"));
        let posts = vec![sample_post()];
        let (rows, sort_index) =
            project_rows(&posts, &config, &provider, &DefaultLocale, &env).unwrap();
        assert_eq!(sort_index, 1);
        assert_eq!(rows[0].cells.len(), 2);
    }

    #[test]
    fn rows_preserve_provider_order() {
        let env = build_environment().unwrap();
        let provider = InMemoryProvider::new(vec![]);
        let config = config_for(RawArgs::new().set("columns", "id"));
        let posts = vec![Post::new(3, "c"), Post::new(1, "a"), Post::new(2, "b")];
        let (rows, _) = project_rows(&posts, &config, &provider, &DefaultLocale, &env).unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.cells[0].as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
