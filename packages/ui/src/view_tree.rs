use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::navigation::{Destination, NavigationSink};

/// Kind of a node in a declarative view-tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    View,
    Region,
    Panel,
    Image,
    Heading,
    Action,
}

/// Runtime-independent description of what should appear on screen.
///
/// Attributes are kept in a `BTreeMap` so two renders of the same input
/// serialize to the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_activate: Option<Destination>,
}

impl ViewNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text: None,
            on_activate: None,
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// Sets the attribute only when a value is present.
    pub fn attr_opt(self, name: &str, value: Option<String>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Append one declaration to the inline `style` attribute.
    pub fn style(mut self, property: &str, value: impl Into<String>) -> Self {
        let style = self.attributes.entry("style".to_string()).or_default();
        if !style.is_empty() {
            style.push(' ');
        }
        style.push_str(&format!("{property}: {};", value.into()));
        self
    }

    pub fn style_opt(self, property: &str, value: Option<String>) -> Self {
        match value {
            Some(value) => self.style(property, value),
            None => self,
        }
    }

    /// Value of one declaration in the inline `style` attribute.
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.get_attr("style")?
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .find(|(name, _)| name.trim() == property)
            .map(|(_, value)| value.trim())
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn navigates_to(mut self, destination: Destination) -> Self {
        self.on_activate = Some(destination);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn is_activatable(&self) -> bool {
        self.on_activate.is_some()
    }

    /// Depth-first, pre-order walk over this node and its descendants.
    pub fn walk(&self) -> Vec<&ViewNode> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }

    pub fn find_all(&self, kind: NodeKind) -> Vec<&ViewNode> {
        self.walk().into_iter().filter(|n| n.kind == kind).collect()
    }

    /// Every node a user can activate.
    pub fn actions(&self) -> Vec<&ViewNode> {
        self.walk().into_iter().filter(|n| n.is_activatable()).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Issue the navigation intent bound to `node`, if any.
///
/// Returns the destination that was dispatched. Each call issues a fresh
/// intent; repeated activation is not de-duplicated.
pub fn dispatch(node: &ViewNode, sink: &dyn NavigationSink) -> Option<Destination> {
    let destination = node.on_activate?;
    tracing::debug!(path = destination.path(), "navigation intent");
    sink.navigate_to(destination);
    Some(destination)
}
