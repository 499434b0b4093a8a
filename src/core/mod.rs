pub mod breadcrumbs;
pub mod dates;
pub mod filter;
pub mod fixtures;
pub mod models;
pub mod selection;
pub mod tree;
