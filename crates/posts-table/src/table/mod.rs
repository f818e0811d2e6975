//! The table pipeline: option resolution, column catalog, row projection,
//! and markup assembly.
//!
//! Control flow: raw shortcode attributes pass through [`resolve::resolve`]
//! into a [`TableConfig`]; the [`catalog::Catalog`] supplies per-column
//! display metadata (after the host's override hooks run); the projector
//! turns records into HTML cells; the assembler emits the fragment the
//! client widget consumes.

pub mod assemble;
pub mod catalog;
pub mod project;
pub mod resolve;
pub mod types;

pub use assemble::{assemble, build_environment, TABLE_CSS_CLASS};
pub use catalog::{Catalog, ColumnOverrides, ColumnSpec, NoOverrides};
pub use project::{project_rows, ProjectedRow};
pub use resolve::resolve;
pub use types::{ColumnId, RawArgs, SortOrder, TableConfig, TableDefaults, DEFAULT_COLUMNS};
