// Domain layer - pure data model and rules, no I/O
pub mod branding;
pub mod format;
pub mod fragment;
pub mod page;
pub mod series;
pub mod snapshot;
