//! Core types for table configuration.
//!
//! This module defines the raw (untrusted) and resolved (normalized) option
//! sets, the closed column catalog identifiers, and the sort direction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The default visible column list, in display order.
pub const DEFAULT_COLUMNS: &str = "title,content,date,author,category";

/// Identifier of a displayable column.
///
/// The catalog is closed: these six columns are the only ones a table can
/// show. Option resolution drops anything else, so a column identifier that
/// reaches the projector is valid by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    /// Numeric post identifier.
    Id,
    /// Post title, linked to the post.
    Title,
    /// Comma-separated category links.
    Category,
    /// Publish date.
    Date,
    /// Author name, linked to the author archive.
    Author,
    /// Truncated post body.
    Content,
}

impl ColumnId {
    /// Every catalog column, in catalog order.
    pub const ALL: [ColumnId; 6] = [
        ColumnId::Id,
        ColumnId::Title,
        ColumnId::Category,
        ColumnId::Date,
        ColumnId::Author,
        ColumnId::Content,
    ];

    /// The column's identifier as it appears in shortcode options and
    /// `data-name` attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::Id => "id",
            ColumnId::Title => "title",
            ColumnId::Category => "category",
            ColumnId::Date => "date",
            ColumnId::Author => "author",
            ColumnId::Content => "content",
        }
    }

    /// Looks up a column by its lowercase identifier.
    pub fn from_name(name: &str) -> Option<ColumnId> {
        ColumnId::ALL.iter().copied().find(|c| c.as_str() == name)
    }
}

/// Initial sort direction handed to the client widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// The direction string used in the widget's `data-order` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Parses `asc`/`desc`; anything else is `None`.
    pub fn from_name(name: &str) -> Option<SortOrder> {
        match name {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Raw shortcode attributes: an option-name to string-value map.
///
/// No invariants. Keys may be missing, values malformed, column names
/// unknown; resolution degrades every problem to a default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawArgs {
    values: BTreeMap<String, String>,
}

impl RawArgs {
    /// Creates an empty option map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option, replacing any previous value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Returns the raw value for an option, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RawArgs {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The typed default option set used when raw values are missing or
/// malformed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefaults {
    /// Comma-separated default column list.
    pub columns: String,
    /// Default page length.
    pub rows_per_page: u32,
    /// Default sort column.
    pub sort_by: ColumnId,
    /// Default sort direction; `None` means "derive from the sort column".
    pub sort_order: Option<SortOrder>,
    /// Default category filter slug.
    pub category: Option<String>,
    /// Whether clicking a cell value filters the table.
    pub search_on_click: bool,
    /// Whether cell text wraps.
    pub wrap: bool,
    /// Word limit for the content column.
    pub content_length: u32,
    /// Scroll offset (px) applied when paging past the viewport.
    pub scroll_offset: i64,
}

impl Default for TableDefaults {
    fn default() -> Self {
        TableDefaults {
            columns: DEFAULT_COLUMNS.to_string(),
            rows_per_page: 20,
            sort_by: ColumnId::Date,
            sort_order: None,
            category: None,
            search_on_click: true,
            wrap: true,
            content_length: 15,
            scroll_offset: 15,
        }
    }
}

/// Normalized table configuration, built once per render.
///
/// Invariants: `columns` is non-empty, deduplicated, and contains only
/// catalog columns; `sort_by` is always a catalog column, even when it is not
/// in `columns` (it then becomes a hidden column at render time).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableConfig {
    /// Visible columns, in display order.
    pub columns: Vec<ColumnId>,
    /// Page length; `None` disables paging.
    pub rows_per_page: Option<u32>,
    /// Column the widget sorts by initially.
    pub sort_by: ColumnId,
    /// Initial sort direction.
    pub sort_order: SortOrder,
    /// Category filter slug, passed through verbatim.
    pub category: Option<String>,
    /// Whether clicking a cell value filters the table.
    pub search_on_click: bool,
    /// Whether cell text wraps.
    pub wrap: bool,
    /// Word limit for the content column.
    pub content_length: u32,
    /// Scroll offset in pixels; `None` disables scrolling.
    pub scroll_offset: Option<i64>,
}
