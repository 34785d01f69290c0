//! Structural projection of resolved tabs.
//!
//! Turns [`ResolvedTabs`] into a tree of list elements and links. The tree
//! carries no markup; a serializer such as `csstabs-html` renders it.
//!
//! ```text
//! div (container attributes, only when configured)
//! ├── ul (primary list style)
//! │   └── li (list item style) ── a (label, target, link options)
//! └── ul (secondary list style, only when sub-tabs resolved)
//!     └── li ── a
//! ```

use crate::document::{ConfigDocument, TabLevelStyle};
use crate::resolver::{ResolvedTab, ResolvedTabs};
use crate::Attributes;

/// Tag of the wrapping container.
pub const CONTAINER_TAG: &str = "div";
/// Tag of a tab list.
pub const LIST_TAG: &str = "ul";
/// Tag of a tab list item.
pub const ITEM_TAG: &str = "li";

/// Node of the projected tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Element with attributes and children.
    Element(Element),
    /// Link to a route.
    Link(Link),
    /// Sibling nodes without a wrapping element.
    Fragment(Vec<Node>),
}

/// Element node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// Tag name.
    pub tag: &'static str,
    /// Element attributes.
    pub attributes: Attributes,
    /// Child nodes.
    pub children: Vec<Node>,
}

/// Link node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    /// Link text.
    pub label: String,
    /// Route identifier (`module` or `module/action`).
    pub target: String,
    /// Link attributes.
    pub attributes: Attributes,
}

impl Node {
    /// Links in document order.
    #[must_use]
    pub fn links(&self) -> Vec<&Link> {
        let mut links = Vec::new();
        self.walk(&mut |node| {
            if let Node::Link(link) = node {
                links.push(link);
            }
        });
        links
    }

    /// List elements in document order.
    #[must_use]
    pub fn lists(&self) -> Vec<&Element> {
        let mut lists = Vec::new();
        self.walk(&mut |node| {
            if let Node::Element(element) = node
                && element.tag == LIST_TAG
            {
                lists.push(element);
            }
        });
        lists
    }

    /// Visit this node and its descendants depth-first.
    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        let children = match self {
            Node::Element(element) => element.children.as_slice(),
            Node::Fragment(children) => children.as_slice(),
            Node::Link(_) => &[],
        };
        for child in children {
            child.walk(visit);
        }
    }
}

impl Element {
    /// Links below this element in document order.
    #[must_use]
    pub fn links(&self) -> Vec<&Link> {
        self.children.iter().flat_map(Node::links).collect()
    }
}

/// Project resolved tabs into a node tree.
///
/// The secondary list is omitted when no sub-tabs resolved. Both lists are
/// wrapped in a container element when the document configures one.
#[must_use]
pub fn project(doc: &ConfigDocument, tabs: &ResolvedTabs) -> Node {
    let mut lists = vec![project_level(&tabs.primary, &doc.style.primary)];
    if !tabs.secondary.is_empty() {
        lists.push(project_level(&tabs.secondary, &doc.style.secondary));
    }

    match &doc.container {
        Some(attributes) => Node::Element(Element {
            tag: CONTAINER_TAG,
            attributes: attributes.clone(),
            children: lists,
        }),
        None => Node::Fragment(lists),
    }
}

fn project_level(tabs: &[ResolvedTab], style: &TabLevelStyle) -> Node {
    Node::Element(Element {
        tag: LIST_TAG,
        attributes: style.list.clone(),
        children: tabs.iter().map(project_tab).collect(),
    })
}

fn project_tab(tab: &ResolvedTab) -> Node {
    Node::Element(Element {
        tag: ITEM_TAG,
        attributes: tab.list_item_style.clone(),
        children: vec![Node::Link(Link {
            label: tab.label.clone(),
            target: tab.link_target.clone(),
            attributes: tab.link_options.clone(),
        })],
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{RouteContext, TabDefinition, resolve};

    fn document() -> ConfigDocument {
        ConfigDocument::from_yaml(
            r"
cssTabs:
  configTabs:
    div: { id: tabs }
    mt_ul: { class: main }
    mt_li: { class: active }
    mt_a: { class: current }
    st_ul: { class: sub }
  mainTabs:
    - { module: users, label: Users }
    - { module: orders, label: Orders }
  subTabs:
    - { module: users, action: list, label: List, parentTab: users }
    - { module: users, action: edit, label: Edit, parentTab: users }
",
        )
        .unwrap()
    }

    fn link_pairs(links: &[&Link]) -> Vec<(String, String)> {
        links
            .iter()
            .map(|l| (l.label.clone(), l.target.clone()))
            .collect()
    }

    fn resolved_pairs(tabs: &[ResolvedTab]) -> Vec<(String, String)> {
        tabs.iter()
            .map(|t| (t.label.clone(), t.link_target.clone()))
            .collect()
    }

    #[test]
    fn test_projection_structure() {
        let doc = document();
        let tabs = resolve(&doc, &RouteContext::new("users", "edit"));

        let Node::Element(container) = project(&doc, &tabs) else {
            panic!("expected container element");
        };

        assert_eq!(container.tag, CONTAINER_TAG);
        assert_eq!(container.attributes.get("id"), Some("tabs"));
        assert_eq!(container.children.len(), 2);

        let Node::Element(primary) = &container.children[0] else {
            panic!("expected primary list");
        };
        assert_eq!(primary.tag, LIST_TAG);
        assert_eq!(primary.attributes.get("class"), Some("main"));
        assert_eq!(primary.children.len(), 2);

        let Node::Element(first_item) = &primary.children[0] else {
            panic!("expected list item");
        };
        assert_eq!(first_item.tag, ITEM_TAG);
        assert_eq!(first_item.attributes.get("class"), Some("active"));
        assert_eq!(
            first_item.children,
            vec![Node::Link(Link {
                label: "Users".to_owned(),
                target: "users".to_owned(),
                attributes: [("class", "current")].into_iter().collect(),
            })]
        );
    }

    #[test]
    fn test_projection_round_trip() {
        let doc = document();
        let tabs = resolve(&doc, &RouteContext::new("users", "list"));

        let tree = project(&doc, &tabs);
        let lists = tree.lists();

        assert_eq!(lists.len(), 2);
        assert_eq!(link_pairs(&lists[0].links()), resolved_pairs(&tabs.primary));
        assert_eq!(link_pairs(&lists[1].links()), resolved_pairs(&tabs.secondary));

        let attributes: Vec<_> = tree.links().iter().map(|l| l.attributes.clone()).collect();
        let expected: Vec<_> = tabs
            .primary
            .iter()
            .chain(&tabs.secondary)
            .map(|t| t.link_options.clone())
            .collect();
        assert_eq!(attributes, expected);
    }

    #[test]
    fn test_no_sub_tabs_omits_secondary_list() {
        let doc = document();
        let tabs = resolve(&doc, &RouteContext::new("orders", ""));

        let tree = project(&doc, &tabs);

        assert_eq!(tree.lists().len(), 1);
        assert_eq!(link_pairs(&tree.links()), resolved_pairs(&tabs.primary));
    }

    #[test]
    fn test_without_container_is_fragment() {
        let doc = ConfigDocument {
            primary_tabs: vec![TabDefinition::new("home", "Home")],
            ..ConfigDocument::default()
        };
        let tabs = resolve(&doc, &RouteContext::new("home", ""));

        let tree = project(&doc, &tabs);

        let Node::Fragment(children) = &tree else {
            panic!("expected fragment, got {tree:?}");
        };
        assert_eq!(children.len(), 1);
    }

    #[test]
    fn test_empty_document_projects_empty_primary_list() {
        let doc = ConfigDocument::default();
        let tabs = resolve(&doc, &RouteContext::new("users", ""));

        let tree = project(&doc, &tabs);

        assert_eq!(
            tree,
            Node::Fragment(vec![Node::Element(Element {
                tag: LIST_TAG,
                attributes: Attributes::new(),
                children: Vec::new(),
            })])
        );
        assert!(tree.links().is_empty());
    }
}
