//! HTML backend for navigation trees.

use std::fmt::Write;

use csstabs_nav::{Attributes, Node};

use crate::escape::escape_html;
use crate::url::UrlBuilder;

/// Markup generation for elements and links.
pub trait TagBuilder {
    /// Wrap already rendered `content` in a `name` element.
    fn tag(&self, name: &str, content: &str, attributes: &Attributes) -> String;

    /// Render a link with text `label` pointing at `route`.
    fn link_to(&self, label: &str, route: &str, attributes: &Attributes) -> String;
}

/// HTML render backend.
///
/// Produces the `div`/`ul`/`li`/`a` markup of the navigation tree. Labels
/// and attribute values are escaped, attributes are written in key order
/// and link hrefs come from the [`UrlBuilder`].
#[derive(Clone, Debug, Default)]
pub struct HtmlBackend {
    urls: UrlBuilder,
}

impl HtmlBackend {
    /// Create a backend building hrefs with `urls`.
    #[must_use]
    pub fn new(urls: UrlBuilder) -> Self {
        Self { urls }
    }

    /// The URL builder in use.
    #[must_use]
    pub fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    /// Render a navigation tree to HTML.
    #[must_use]
    pub fn render(&self, node: &Node) -> String {
        render_node(self, node)
    }
}

impl TagBuilder for HtmlBackend {
    fn tag(&self, name: &str, content: &str, attributes: &Attributes) -> String {
        format!("<{name}{}>{content}</{name}>", attribute_string(attributes))
    }

    fn link_to(&self, label: &str, route: &str, attributes: &Attributes) -> String {
        let mut attributes = attributes.clone();
        attributes.insert("href", self.urls.href(route));
        format!(
            "<a{}>{}</a>",
            attribute_string(&attributes),
            escape_html(label)
        )
    }
}

/// Render a navigation tree through any [`TagBuilder`].
pub fn render_node<B: TagBuilder + ?Sized>(builder: &B, node: &Node) -> String {
    match node {
        Node::Element(element) => {
            let content: String = element
                .children
                .iter()
                .map(|child| render_node(builder, child))
                .collect();
            builder.tag(element.tag, &content, &element.attributes)
        }
        Node::Link(link) => builder.link_to(&link.label, &link.target, &link.attributes),
        Node::Fragment(children) => children
            .iter()
            .map(|child| render_node(builder, child))
            .collect(),
    }
}

fn attribute_string(attributes: &Attributes) -> String {
    let mut out = String::new();
    for (key, value) in attributes.iter() {
        let _ = write!(out, r#" {}="{}""#, escape_html(key), escape_html(value));
    }
    out
}

#[cfg(test)]
mod tests {
    use csstabs_nav::{ConfigDocument, RouteContext, project, resolve};
    use pretty_assertions::assert_eq;

    use super::*;

    const DOCUMENT: &str = r"
cssTabs:
  configTabs:
    div: { id: tabs }
    mt_ul: { class: mainTabs }
    mt_li: { class: on }
    mt_a: { class: current }
    st_ul: { class: subTabs }
    st_a: { class: selected }
  mainTabs:
    - { module: dashboard, label: Dashboard }
    - { module: users, label: Users, linkOptions: { title: Manage users } }
  subTabs:
    - { module: users, action: list, label: List, parentTab: users }
    - { module: users, action: edit, label: Edit, parentTab: users }
";

    fn render(path: &str, urls: UrlBuilder) -> String {
        let doc = ConfigDocument::from_yaml(DOCUMENT).unwrap();
        let tabs = resolve(&doc, &RouteContext::from_path(path));
        HtmlBackend::new(urls).render(&project(&doc, &tabs))
    }

    #[test]
    fn test_render_full_markup() {
        let html = render("/users/edit", UrlBuilder::default());

        assert_eq!(
            html,
            concat!(
                r#"<div id="tabs">"#,
                r#"<ul class="mainTabs">"#,
                r#"<li><a href="/dashboard">Dashboard</a></li>"#,
                r#"<li class="on"><a class="current" href="/users" title="Manage users">Users</a></li>"#,
                "</ul>",
                r#"<ul class="subTabs">"#,
                r#"<li><a href="/users/list">List</a></li>"#,
                r#"<li><a class="selected" href="/users/edit">Edit</a></li>"#,
                "</ul>",
                "</div>",
            )
        );
    }

    #[test]
    fn test_render_without_sub_tabs() {
        let html = render("/dashboard", UrlBuilder::new("/app"));

        assert_eq!(
            html,
            concat!(
                r#"<div id="tabs">"#,
                r#"<ul class="mainTabs">"#,
                r#"<li class="on"><a class="current" href="/app/dashboard">Dashboard</a></li>"#,
                r#"<li><a href="/app/users" title="Manage users">Users</a></li>"#,
                "</ul>",
                "</div>",
            )
        );
    }

    #[test]
    fn test_link_options_href_ignored() {
        let backend = HtmlBackend::default();
        let attributes: Attributes = [("href", "http://evil.example"), ("rel", "nofollow")]
            .into_iter()
            .collect();

        let html = backend.link_to("Home", "home", &attributes);

        assert_eq!(html, r#"<a href="/home" rel="nofollow">Home</a>"#);
    }

    #[test]
    fn test_label_and_attributes_escaped() {
        let backend = HtmlBackend::default();
        let attributes: Attributes = [("title", r#"say "hi""#)].into_iter().collect();

        let html = backend.link_to("<b>Tom & Jerry</b>", "cartoons", &attributes);

        assert_eq!(
            html,
            r#"<a href="/cartoons" title="say &quot;hi&quot;">&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;</a>"#
        );
    }

    #[test]
    fn test_tag_without_attributes() {
        let backend = HtmlBackend::default();

        assert_eq!(backend.tag("ul", "", &Attributes::new()), "<ul></ul>");
    }

    struct PlainText;

    impl TagBuilder for PlainText {
        fn tag(&self, name: &str, content: &str, _attributes: &Attributes) -> String {
            format!("[{name} {content}]")
        }

        fn link_to(&self, label: &str, route: &str, _attributes: &Attributes) -> String {
            format!("{label}->{route};")
        }
    }

    #[test]
    fn test_render_node_with_custom_builder() {
        let doc = ConfigDocument::from_yaml(DOCUMENT).unwrap();
        let tabs = resolve(&doc, &RouteContext::new("users", "list"));

        let text = render_node(&PlainText, &project(&doc, &tabs));

        assert_eq!(
            text,
            "[div [ul [li Dashboard->dashboard;][li Users->users;]][ul [li List->users/list;][li Edit->users/edit;]]]"
        );
    }
}
