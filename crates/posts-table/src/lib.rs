//! # posts-table — searchable, sortable HTML post tables
//!
//! `posts-table` turns a list of post records and a handful of
//! shortcode-style options into a single HTML `<table>` fragment, annotated
//! with the `data-*` attributes a client-side table widget (DataTables and
//! friends) reads to configure paging, initial sort, click-to-search, and
//! responsive scrolling. All records ship to the client; paging, sorting,
//! and searching happen in the browser.
//!
//! The core is deliberately forgiving: options arrive as untrusted strings,
//! and every malformed value degrades to a documented default instead of an
//! error. The host environment plugs in through three small traits:
//! [`ContentProvider`] (where posts come from), [`ColumnOverrides`]
//! (per-table column customization), and [`Localizer`] (translations).
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use posts_table::{InMemoryProvider, Post, RawArgs, TableRenderer};
//!
//! let provider = InMemoryProvider::new(vec![
//!     Post::new(7, "Hello world")
//!         .permalink("https://example.com/hello-world")
//!         .author("Alice", "https://example.com/author/alice")
//!         .published(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
//!         .body("Welcome to the site."),
//! ]);
//!
//! let renderer = TableRenderer::new().unwrap();
//! let args = RawArgs::new()
//!     .set("columns", "title,date")
//!     .set("rows_per_page", "10");
//!
//! let html = renderer.render(&args, &provider).unwrap();
//! assert!(html.starts_with("<table id=\"posts-table-1\""));
//! assert!(html.contains("data-paging=\"false\"")); // one post, no paging
//! ```
//!
//! ## Columns
//!
//! The catalog is fixed: `id`, `title`, `category`, `date`, `author`, and
//! `content`. The `columns` option picks and orders them; unknown names are
//! dropped, and a list with nothing valid falls back to the default
//! `title,content,date,author,category`. Sorting by a column that is not
//! displayed adds it as a hidden column so the widget can still sort by it.
//!
//! ## Localization
//!
//! Headings and the author tooltip pass through the host's [`Localizer`].
//! The client widget's own strings come from per-locale bundles;
//! [`widget_language_url`] maps the active locale to the bundle URL, with
//! `None` meaning the widget's built-in English.

pub mod error;
pub mod locale;
pub mod renderer;
pub mod source;
pub mod table;
pub mod text;

pub use error::TableError;
pub use locale::{supported_locales, widget_language_url, DefaultLocale, Localizer};
pub use renderer::TableRenderer;
pub use source::{Category, CategoryLink, ContentProvider, InMemoryProvider, Post, PostFilter};
pub use table::{
    Catalog, ColumnId, ColumnOverrides, ColumnSpec, NoOverrides, ProjectedRow, RawArgs, SortOrder,
    TableConfig, TableDefaults, DEFAULT_COLUMNS, TABLE_CSS_CLASS,
};
