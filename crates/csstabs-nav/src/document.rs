//! Tab document model.
//!
//! A tab document declares primary tabs, sub-tabs and the attribute sets
//! applied to each level. Documents are YAML, namespaced under `cssTabs`:
//!
//! ```yaml
//! cssTabs:
//!   configTabs:
//!     div:   { id: tabs }
//!     mt_ul: { class: main-tabs }
//!     mt_li: { class: active }
//!     mt_a:  { class: current }
//!     st_ul: { class: sub-tabs }
//!     st_li: { class: active }
//!     st_a:  { class: current }
//!   mainTabs:
//!     - { module: users, label: Users }
//!   subTabs:
//!     - { module: users, action: list, label: List, parentTab: users }
//! ```
//!
//! Style keys are prefixed per level (`mt_` for primary, `st_` for
//! secondary) and suffixed by the element they apply to. Every style key
//! is optional.

use serde::{Deserialize, Serialize};

use crate::Attributes;

/// One entry of either tab level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabDefinition {
    /// Route module the tab links to.
    pub module: String,
    /// Route action; `None` links to the module root.
    pub action: Option<String>,
    /// Display text.
    pub label: String,
    /// Extra attributes for the generated link.
    pub link_options: Attributes,
    /// Module of the primary tab owning this sub-tab.
    pub parent_tab: Option<String>,
}

impl TabDefinition {
    /// Create a tab linking to a module root.
    #[must_use]
    pub fn new(module: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Link the tab to a specific action.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Place the tab in the sub-tab group of `parent`.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_tab = Some(parent.into());
        self
    }

    /// Add a link attribute.
    #[must_use]
    pub fn with_link_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.link_options.insert(key, value);
        self
    }

    /// Route identifier the tab links to: `module` or `module/action`.
    #[must_use]
    pub fn link_target(&self) -> String {
        match &self.action {
            Some(action) => format!("{}/{action}", self.module),
            None => self.module.clone(),
        }
    }
}

/// Attribute sets for one tab level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TabLevelStyle {
    /// Merged into the active tab's link (`*_a`).
    pub link: Attributes,
    /// Applied to the active tab's list item (`*_li`).
    pub item: Attributes,
    /// Applied to the level's list container (`*_ul`).
    pub list: Attributes,
}

/// Styles of both levels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TabStyles {
    /// Primary tabs.
    pub primary: TabLevelStyle,
    /// Sub-tabs.
    pub secondary: TabLevelStyle,
}

/// Parsed tab document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    /// Per-level styles.
    pub style: TabStyles,
    /// Attributes of the wrapping element; `None` renders no wrapper.
    pub container: Option<Attributes>,
    /// Primary tabs in display order.
    pub primary_tabs: Vec<TabDefinition>,
    /// Sub-tabs of every group in declaration order.
    pub secondary_tabs: Vec<TabDefinition>,
}

/// Tab document error.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// YAML parsing error.
    #[error("Invalid tab document: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// A tab entry without module.
    #[error("{level}[{index}] has no module")]
    MissingModule {
        /// Level key (`mainTabs` or `subTabs`).
        level: &'static str,
        /// Zero-based entry index.
        index: usize,
    },
}

impl ConfigDocument {
    /// Parse a tab document from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] for invalid YAML and
    /// [`DocumentError::MissingModule`] for a tab entry that declares no
    /// module. A document without the `cssTabs` namespace is empty.
    pub fn from_yaml(content: &str) -> Result<Self, DocumentError> {
        let raw: RawDocument = serde_yaml::from_str(content)?;
        let tabs = raw.css_tabs.unwrap_or_default();
        let config = tabs.config_tabs.unwrap_or_default();

        Ok(Self {
            style: TabStyles {
                primary: TabLevelStyle {
                    link: config.mt_a,
                    item: config.mt_li,
                    list: config.mt_ul,
                },
                secondary: TabLevelStyle {
                    link: config.st_a,
                    item: config.st_li,
                    list: config.st_ul,
                },
            },
            container: (!config.div.is_empty()).then_some(config.div),
            primary_tabs: convert_level(tabs.main_tabs, "mainTabs")?,
            secondary_tabs: convert_level(tabs.sub_tabs, "subTabs")?,
        })
    }
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(rename = "cssTabs")]
    css_tabs: Option<RawTabs>,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawTabs {
    config_tabs: Option<RawConfigTabs>,
    main_tabs: Option<Vec<RawTab>>,
    sub_tabs: Option<Vec<RawTab>>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawConfigTabs {
    div: Attributes,
    mt_ul: Attributes,
    mt_li: Attributes,
    mt_a: Attributes,
    st_ul: Attributes,
    st_li: Attributes,
    st_a: Attributes,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawTab {
    module: Option<String>,
    action: Option<String>,
    label: Option<String>,
    link_options: Attributes,
    parent_tab: Option<String>,
}

/// Convert a raw tab level.
///
/// A level whose first entry has no label is a placeholder and yields no
/// tabs.
fn convert_level(
    raw: Option<Vec<RawTab>>,
    level: &'static str,
) -> Result<Vec<TabDefinition>, DocumentError> {
    let raw = raw.unwrap_or_default();
    let is_placeholder = raw
        .first()
        .is_none_or(|tab| tab.label.as_deref().is_none_or(str::is_empty));
    if is_placeholder {
        return Ok(Vec::new());
    }

    raw.into_iter()
        .enumerate()
        .map(|(index, tab)| {
            let module = non_empty(tab.module).ok_or(DocumentError::MissingModule { level, index })?;
            Ok(TabDefinition {
                module,
                action: non_empty(tab.action),
                label: tab.label.unwrap_or_default(),
                link_options: tab.link_options,
                parent_tab: non_empty(tab.parent_tab),
            })
        })
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
