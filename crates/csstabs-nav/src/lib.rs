//! Two-level navigation tabs for csstabs.
//!
//! This crate provides:
//! - [`ConfigDocument`]: the tab document (primary tabs, sub-tabs, styles)
//! - [`RouteContext`]: the module/action identity of the current route
//! - [`resolve`]: active tab and sub-tab group resolution
//! - [`project`]: a structural [`Node`] tree ready for serialization
//! - [`TabRenderer`]: load, resolve and project in one call
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use csstabs_config::Config;
//! use csstabs_nav::{FsDocumentSource, RouteContext, TabRenderer};
//!
//! let config = Config::load(None, None)?;
//! let renderer = TabRenderer::new(FsDocumentSource::new(config.locator()));
//!
//! let route = RouteContext::from_path("/users/edit");
//! let tree = renderer.render(None, &route)?;
//! # Ok(())
//! # }
//! ```

mod attributes;
mod document;
mod projection;
mod render;
mod resolver;
mod route;

pub use attributes::Attributes;
pub use document::{ConfigDocument, DocumentError, TabDefinition, TabLevelStyle, TabStyles};
pub use projection::{CONTAINER_TAG, Element, ITEM_TAG, LIST_TAG, Link, Node, project};
pub use render::{
    DocumentSource, FsDocumentSource, RenderError, Resolution, StaticDocumentSource, TabRenderer,
};
pub use resolver::{ResolvedTab, ResolvedTabs, group_parent, resolve, sub_tab_group};
pub use route::RouteContext;
