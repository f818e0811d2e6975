//! The column catalog: headings, display priorities, and width hints.
//!
//! The catalog is total over [`ColumnId`]; every column always has a spec.
//! Hosts customize it through [`ColumnOverrides`], which runs twice per
//! render: once globally, then once keyed by the table instance number.

use serde::{Deserialize, Serialize};

use super::types::ColumnId;
use crate::locale::Localizer;

/// Display metadata for one catalog column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Header text shown in the table head.
    pub heading: String,
    /// Visibility priority at narrow widths: 1 is kept longest, 6 is
    /// dropped first.
    pub priority: u8,
    /// Width hint handed to the client widget; empty means auto.
    pub width: String,
}

impl ColumnSpec {
    /// Creates a spec with an auto width.
    pub fn new(heading: impl Into<String>, priority: u8) -> Self {
        ColumnSpec {
            heading: heading.into(),
            priority,
            width: String::new(),
        }
    }

    /// Sets the heading.
    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    /// Sets the visibility priority.
    pub fn priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the width hint, e.g. `"20%"` or `"120px"`.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }
}

/// The full catalog: one [`ColumnSpec`] per [`ColumnId`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    specs: [ColumnSpec; ColumnId::ALL.len()],
}

impl Catalog {
    /// Builds the default catalog with headings run through the localizer.
    pub fn localized(l10n: &dyn Localizer) -> Self {
        let spec = |heading: &str, priority: u8| ColumnSpec::new(l10n.translate(heading), priority);
        Catalog {
            specs: [
                spec("ID", 3),
                spec("Title", 1),
                spec("Categories", 6),
                spec("Date", 2),
                spec("Author", 4),
                spec("Content", 5),
            ],
        }
    }

    /// Returns the spec for a column.
    pub fn get(&self, id: ColumnId) -> &ColumnSpec {
        &self.specs[Self::index(id)]
    }

    /// Replaces the spec for a column.
    pub fn set(mut self, id: ColumnId, spec: ColumnSpec) -> Self {
        self.specs[Self::index(id)] = spec;
        self
    }

    fn index(id: ColumnId) -> usize {
        ColumnId::ALL
            .iter()
            .position(|c| *c == id)
            .unwrap_or_default()
    }
}

/// Host hook for customizing the catalog before a table renders.
///
/// Both passes default to passthrough. The global pass runs first; the
/// per-table pass then sees the global pass's output, so instance-scoped
/// overrides win.
pub trait ColumnOverrides {
    /// Applied to every table.
    fn global(&self, catalog: Catalog) -> Catalog {
        catalog
    }

    /// Applied to the table with the given instance number only.
    fn for_table(&self, catalog: Catalog, table_id: u64) -> Catalog {
        let _ = table_id;
        catalog
    }
}

/// The no-op override set.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOverrides;

impl ColumnOverrides for NoOverrides {}
