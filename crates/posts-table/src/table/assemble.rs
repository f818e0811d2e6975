//! Markup assembly: resolved config, catalog, and projected rows to the
//! final table fragment.
//!
//! All markup lives in named `.html` templates so the engine's HTML
//! auto-escaping covers every piece of dynamic text. URL and tooltip
//! attribute slots use the [`attr`] filter, which escapes without encoding
//! slashes. Cell HTML produced by the projector and the JSON sort attribute
//! are the only values marked `safe`, both being engine output or serializer
//! output already.

use minijinja::{context, Environment};
use serde::Serialize;

use super::catalog::Catalog;
use super::project::ProjectedRow;
use super::types::TableConfig;
use crate::error::TableError;

/// Base CSS class carried by every rendered table.
pub const TABLE_CSS_CLASS: &str = "posts-data-table";

const TABLE_TEMPLATE: &str = concat!(
    r#"<table id="posts-table-{{ table_id }}" class="{{ table_class }}" "#,
    r#"data-page-length="{{ page_length }}" data-paging="{{ paging }}" "#,
    r#"data-order='{{ order|safe }}' data-click-filter="{{ click_filter }}" "#,
    r#"data-scroll-offset="{{ scroll_offset }}" cellspacing="0" width="100%">"#,
    r#"<thead><tr>"#,
    r#"{% for col in headers %}"#,
    r#"{% if col.hidden %}"#,
    r#"<th data-name="{{ col.name }}" data-visible="false">{{ col.heading }}</th>"#,
    r#"{% else %}"#,
    r#"<th data-name="{{ col.name }}" data-priority="{{ col.priority }}" data-width="{{ col.width }}">{{ col.heading }}</th>"#,
    r#"{% endif %}"#,
    r#"{% endfor %}"#,
    r#"</tr></thead>"#,
    r#"<tbody>"#,
    r#"{% for row in rows %}<tr>{% for cell in row.cells %}<td>{{ cell|safe }}</td>{% endfor %}</tr>{% endfor %}"#,
    r#"</tbody></table>"#,
);

const TITLE_TEMPLATE: &str = r#"<a href="{{ permalink|attr }}">{{ title }}</a>"#;

const AUTHOR_TEMPLATE: &str =
    r#"<a href="{{ url|attr }}" title="{{ tooltip|attr }}" rel="author">{{ name }}</a>"#;

const CATEGORY_TEMPLATE: &str = concat!(
    r#"{% for cat in categories %}"#,
    r#"<a href="{{ cat.url|attr }}">{{ cat.name }}</a>"#,
    r#"{% if not loop.last %}, {% endif %}"#,
    r#"{% endfor %}"#,
);

const CONTENT_TEMPLATE: &str = r#"{{ text }}{% if truncated %} &hellip;{% endif %}"#;

/// Attribute-value escape filter.
///
/// The engine's HTML auto-escape also encodes `/`, which would mangle every
/// URL into `https:&#x2f;&#x2f;…`. Attribute slots use this filter instead:
/// it escapes `&`, `<`, `>`, and both quote characters, and leaves slashes
/// alone, matching conventional attribute escaping.
fn attr(value: String) -> minijinja::Value {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    minijinja::Value::from_safe_string(out)
}

/// Builds the template environment all renders share.
///
/// Every template name ends in `.html` so the engine's default auto-escape
/// callback applies HTML escaping; URL and tooltip slots go through the
/// `attr` filter instead.
pub fn build_environment() -> Result<Environment<'static>, TableError> {
    let mut env = Environment::new();
    env.add_filter("attr", attr);
    env.add_template("table.html", TABLE_TEMPLATE)?;
    env.add_template("cell/title.html", TITLE_TEMPLATE)?;
    env.add_template("cell/author.html", AUTHOR_TEMPLATE)?;
    env.add_template("cell/category.html", CATEGORY_TEMPLATE)?;
    env.add_template("cell/content.html", CONTENT_TEMPLATE)?;
    Ok(env)
}

/// One header cell's attributes, as the table template consumes them.
#[derive(Clone, Debug, Serialize)]
struct HeaderCell {
    name: &'static str,
    heading: String,
    priority: u8,
    width: String,
    hidden: bool,
}

/// Composes the final table fragment.
///
/// `sort_index` is the widget's sort column index as computed by the
/// projector; `table_id` is the table's process-unique instance number.
pub fn assemble(
    env: &Environment<'static>,
    config: &TableConfig,
    catalog: &Catalog,
    rows: &[ProjectedRow],
    sort_index: usize,
    table_id: u64,
) -> Result<String, TableError> {
    let mut headers: Vec<HeaderCell> = config
        .columns
        .iter()
        .map(|&col| {
            let spec = catalog.get(col);
            HeaderCell {
                name: col.as_str(),
                heading: spec.heading.clone(),
                priority: spec.priority,
                width: spec.width.clone(),
                hidden: false,
            }
        })
        .collect();

    if !config.columns.contains(&config.sort_by) {
        headers.push(HeaderCell {
            name: config.sort_by.as_str(),
            heading: catalog.get(config.sort_by).heading.clone(),
            priority: 0,
            width: String::new(),
            hidden: true,
        });
    }

    let mut table_class = TABLE_CSS_CLASS.to_string();
    if !config.wrap {
        table_class.push_str(" nowrap");
    }

    let paging = match config.rows_per_page {
        Some(n) => n > 1 && (n as usize) < rows.len(),
        None => false,
    };

    let order = serde_json::to_string(&[(sort_index, config.sort_order.as_str())])?;

    let scroll_offset = match config.scroll_offset {
        Some(offset) => offset.to_string(),
        None => "false".to_string(),
    };

    let html = env.get_template("table.html")?.render(context! {
        table_id => table_id,
        table_class => table_class,
        page_length => config.rows_per_page.unwrap_or(0),
        paging => if paging { "true" } else { "false" },
        order => order,
        click_filter => if config.search_on_click { "true" } else { "false" },
        scroll_offset => scroll_offset,
        headers => headers,
        rows => rows,
    })?;

    Ok(html)
}
