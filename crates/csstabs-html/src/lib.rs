//! HTML serialization of csstabs navigation trees.
//!
//! [`HtmlBackend`] turns the [`Node`](csstabs_nav::Node) tree produced by
//! `csstabs-nav` into markup. Element and link generation goes through the
//! [`TagBuilder`] trait, and route identifiers become hrefs via
//! [`UrlBuilder`].
//!
//! # Example
//!
//! ```
//! use csstabs_html::HtmlBackend;
//! use csstabs_nav::{ConfigDocument, RouteContext, project, resolve};
//!
//! let doc = ConfigDocument::from_yaml(
//!     "cssTabs:\n  mainTabs:\n    - { module: home, label: Home }\n",
//! )
//! .unwrap();
//! let tabs = resolve(&doc, &RouteContext::new("home", ""));
//!
//! let html = HtmlBackend::default().render(&project(&doc, &tabs));
//! assert_eq!(html, r#"<ul><li><a href="/home">Home</a></li></ul>"#);
//! ```

mod escape;
mod html;
mod url;

pub use escape::escape_html;
pub use html::{HtmlBackend, TagBuilder, render_node};
pub use url::UrlBuilder;
