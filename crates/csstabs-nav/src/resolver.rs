//! Active tab resolution.
//!
//! Decides, for one route, which primary tab is active, which sub-tab
//! group is visible and which sub-tabs are active. Resolution is a pure
//! function of the document and the route.
//!
//! # Group parent
//!
//! Sub-tabs are grouped by their `parentTab`. The visible group is seeded
//! by scanning every sub-tab: an entry whose `parentTab` or whose own
//! `module` equals the route module sets the group parent to its
//! `parentTab`. Later matches overwrite earlier ones.
//!
//! When a group is visible, the primary tab matching the group parent is
//! active, so a sub-tab pointing into another module still highlights its
//! owning primary tab.

use serde::Serialize;

use crate::document::{ConfigDocument, TabDefinition, TabLevelStyle};
use crate::{Attributes, RouteContext};

/// A tab ready for projection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTab {
    /// Display text.
    pub label: String,
    /// Route identifier (`module` or `module/action`).
    pub link_target: String,
    /// Whether the tab belongs to the current route.
    pub is_active: bool,
    /// List item attributes (empty unless active).
    pub list_item_style: Attributes,
    /// Link attributes, with the level's active style merged in when active.
    pub link_options: Attributes,
}

/// Resolved tabs of both levels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedTabs {
    /// Primary tabs in declaration order.
    pub primary: Vec<ResolvedTab>,
    /// Visible sub-tabs in declaration order.
    pub secondary: Vec<ResolvedTab>,
}

impl ResolvedTabs {
    /// Active primary tab, if any.
    #[must_use]
    pub fn active_primary(&self) -> Option<&ResolvedTab> {
        self.primary.iter().find(|tab| tab.is_active)
    }

    /// Active sub-tabs.
    pub fn active_secondary(&self) -> impl Iterator<Item = &ResolvedTab> {
        self.secondary.iter().filter(|tab| tab.is_active)
    }
}

/// Find the parent module of the sub-tab group for a route.
///
/// Returns `None` when no sub-tab refers to the route module.
#[must_use]
pub fn group_parent<'a>(doc: &'a ConfigDocument, route: &RouteContext) -> Option<&'a str> {
    doc.secondary_tabs
        .iter()
        .rfind(|tab| {
            tab.parent_tab.as_deref() == Some(route.module.as_str()) || tab.module == route.module
        })
        .and_then(|tab| tab.parent_tab.as_deref())
}

/// Sub-tabs belonging to the group of `parent`, in declaration order.
pub fn sub_tab_group<'a>(
    doc: &'a ConfigDocument,
    parent: &'a str,
) -> impl Iterator<Item = &'a TabDefinition> {
    doc.secondary_tabs
        .iter()
        .filter(move |tab| tab.parent_tab.as_deref() == Some(parent))
}

/// Resolve both tab levels for a route.
///
/// # Example
///
/// ```
/// use csstabs_nav::{ConfigDocument, RouteContext, TabDefinition, resolve};
///
/// let doc = ConfigDocument {
///     primary_tabs: vec![
///         TabDefinition::new("users", "Users"),
///         TabDefinition::new("orders", "Orders"),
///     ],
///     secondary_tabs: vec![
///         TabDefinition::new("users", "List").with_action("list").with_parent("users"),
///         TabDefinition::new("users", "Edit").with_action("edit").with_parent("users"),
///     ],
///     ..ConfigDocument::default()
/// };
///
/// let tabs = resolve(&doc, &RouteContext::new("users", "edit"));
/// assert_eq!(tabs.active_primary().map(|t| t.label.as_str()), Some("Users"));
/// assert_eq!(tabs.secondary.len(), 2);
/// assert!(tabs.secondary[1].is_active);
/// ```
#[must_use]
pub fn resolve(doc: &ConfigDocument, route: &RouteContext) -> ResolvedTabs {
    let parent = group_parent(doc, route);
    tracing::debug!(
        module = %route.module,
        action = %route.action,
        group_parent = parent.unwrap_or_default(),
        "Resolving tabs"
    );

    let primary_module = parent.unwrap_or(route.module.as_str());
    let primary = doc
        .primary_tabs
        .iter()
        .map(|tab| resolve_tab(tab, &doc.style.primary, tab.module == primary_module))
        .collect();

    let secondary = parent
        .map(|parent| {
            sub_tab_group(doc, parent)
                .map(|tab| resolve_tab(tab, &doc.style.secondary, is_active_sub_tab(tab, route)))
                .collect()
        })
        .unwrap_or_default();

    ResolvedTabs { primary, secondary }
}

/// Sub-tabs match the concrete route: module always, action when the
/// route has one.
fn is_active_sub_tab(tab: &TabDefinition, route: &RouteContext) -> bool {
    if tab.module != route.module {
        return false;
    }
    !route.has_action() || tab.action.as_deref() == Some(route.action.as_str())
}

fn resolve_tab(tab: &TabDefinition, style: &TabLevelStyle, is_active: bool) -> ResolvedTab {
    let (list_item_style, link_options) = if is_active {
        (style.item.clone(), tab.link_options.over(&style.link))
    } else {
        (Attributes::new(), tab.link_options.clone())
    };

    ResolvedTab {
        label: tab.label.clone(),
        link_target: tab.link_target(),
        is_active,
        list_item_style,
        link_options,
    }
}
