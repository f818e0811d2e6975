//! Option resolution: raw shortcode attributes to a normalized config.
//!
//! Resolution is total. Shortcode input is inherently untrusted, so every
//! malformed or missing value falls back to a documented default instead of
//! surfacing an error.

use super::types::{ColumnId, RawArgs, SortOrder, TableConfig, TableDefaults};

/// Resolves raw shortcode attributes into a [`TableConfig`].
///
/// Never fails, and resolving the same input twice yields the same config.
/// The resulting column list is non-empty and `sort_by` is always a catalog
/// column.
pub fn resolve(raw: &RawArgs, defaults: &TableDefaults) -> TableConfig {
    let columns = resolve_columns(raw.get("columns"), defaults);

    let rows_per_page = match raw.get("rows_per_page") {
        Some(value) => parse_int(value).filter(|n| *n >= 1).map(saturate_u32),
        None => Some(defaults.rows_per_page),
    };

    let sort_by = raw
        .get("sort_by")
        .and_then(|v| ColumnId::from_name(v.trim().to_lowercase().as_str()))
        .unwrap_or(defaults.sort_by);

    let sort_order = raw
        .get("sort_order")
        .and_then(|v| SortOrder::from_name(v.trim().to_lowercase().as_str()))
        .or(defaults.sort_order)
        .unwrap_or(if sort_by == ColumnId::Date {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        });

    let category = match raw.get("category") {
        Some(value) => {
            let slug = value.trim();
            if slug.is_empty() {
                None
            } else {
                Some(slug.to_string())
            }
        }
        None => defaults.category.clone(),
    };

    let search_on_click = raw
        .get("search_on_click")
        .map(parse_flag)
        .unwrap_or(defaults.search_on_click);

    let wrap = raw.get("wrap").map(parse_flag).unwrap_or(defaults.wrap);

    let content_length = raw
        .get("content_length")
        .and_then(|v| parse_int(v).filter(|n| *n >= 0))
        .map(saturate_u32)
        .unwrap_or(defaults.content_length);

    let scroll_offset = match raw.get("scroll_offset") {
        Some(value) => parse_int(value),
        None => Some(defaults.scroll_offset),
    };

    TableConfig {
        columns,
        rows_per_page,
        sort_by,
        sort_order,
        category,
        search_on_click,
        wrap,
        content_length,
        scroll_offset,
    }
}

/// Splits a comma-separated column list, keeping only catalog columns in
/// input order with duplicates dropped. An empty result falls back to the
/// full default list.
fn resolve_columns(raw: Option<&str>, defaults: &TableDefaults) -> Vec<ColumnId> {
    let supplied = raw.filter(|v| !v.trim().is_empty()).unwrap_or(&defaults.columns);

    let mut columns = parse_column_list(supplied);
    if columns.is_empty() {
        columns = parse_column_list(&defaults.columns);
    }
    columns
}

fn parse_column_list(list: &str) -> Vec<ColumnId> {
    let mut columns = Vec::new();
    for name in list.split(',') {
        if let Some(col) = ColumnId::from_name(name.trim().to_lowercase().as_str()) {
            if !columns.contains(&col) {
                columns.push(col);
            }
        }
    }
    columns
}

/// Permissive integer parsing. Whitespace is trimmed; anything that is not a
/// plain integer is `None`.
fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Clamps a non-negative parsed value into `u32` range. A plain `as` cast
/// would wrap, turning 2^32 into 0.
fn saturate_u32(n: i64) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Permissive truthy parsing: `1`, `true`, `yes`, and `on` (any case) are
/// true; everything else, including `0` and garbage, is false.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
