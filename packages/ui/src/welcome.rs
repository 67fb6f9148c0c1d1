use dioxus::prelude::*;
use dioxus::router::RouterContext;

use crate::assets::{AssetHandle, AssetResolver, SharedAssetResolver, WelcomeAssets};
use crate::navigation::{Destination, NavigationSink, SharedNavigationSink};
use crate::view_tree::{dispatch, NodeKind, ViewNode};

const WELCOME_CSS: Asset = asset!("/assets/styling/welcome.css");

pub const HEADING_TEXT: &str = "Get Started with RideFlow";
pub const CONTINUE_TEXT: &str = "Continue";

/// Pure model of the landing screen: assets in, view-tree out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WelcomeView {
    assets: WelcomeAssets,
}

impl WelcomeView {
    pub fn new(assets: WelcomeAssets) -> Self {
        Self { assets }
    }

    pub fn assets(&self) -> &WelcomeAssets {
        &self.assets
    }

    /// Build the view-tree. Never fails: an image that does not resolve is
    /// left out of the tree and everything else renders as usual.
    pub fn render(&self, resolver: &dyn AssetResolver) -> ViewNode {
        let background = resolve_or_degrade(resolver, &self.assets.background);
        let logo = resolve_or_degrade(resolver, &self.assets.logo);
        tracing::debug!(
            background = background.is_some(),
            logo = logo.is_some(),
            "render welcome screen"
        );

        let logo = ViewNode::new(NodeKind::Image)
            .attr("class", "welcome_logo")
            .attr("alt", "RideFlow")
            .attr_opt("src", logo)
            .style("width", "4rem")
            .style("margin-left", "2rem");

        let region = ViewNode::new(NodeKind::Region)
            .attr("class", "welcome_background")
            .style("flex", "1 1 auto")
            .style("display", "flex")
            .style("align-items", "flex-start")
            .style("padding-top", "2rem")
            .style_opt(
                "background-image",
                background.map(|url| format!("url(\"{url}\")")),
            )
            .style("background-size", "cover")
            .style("background-position", "center")
            .child(logo);

        let heading = ViewNode::new(NodeKind::Heading)
            .attr("class", "welcome_heading")
            .style("margin", "0")
            .style("font-size", "30px")
            .style("font-weight", "600")
            .text(HEADING_TEXT);

        let action = ViewNode::new(NodeKind::Action)
            .attr("class", "welcome_continue")
            .attr("href", Destination::Login.path())
            .attr("role", "button")
            .style("display", "flex")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("width", "100%")
            .style("margin-top", "1.25rem")
            .style("padding", "0.75rem 0")
            .style("border-radius", "0.5rem")
            .style("background-color", "#000")
            .style("color", "#fff")
            .style("text-decoration", "none")
            .text(CONTINUE_TEXT)
            .navigates_to(Destination::Login);

        let panel = ViewNode::new(NodeKind::Panel)
            .attr("class", "welcome_panel")
            .style("flex", "0 0 auto")
            .style("background-color", "#fff")
            .style("padding", "1rem 1rem 2rem")
            .child(heading)
            .child(action);

        ViewNode::new(NodeKind::View)
            .attr("class", "welcome")
            .style("display", "flex")
            .style("flex-direction", "column")
            .style("width", "100%")
            .style("height", "100vh")
            .style("overflow", "hidden")
            .child(region)
            .child(panel)
    }

    /// Activate "Continue": one intent to the login destination per call.
    pub fn activate_continue(&self, sink: &dyn NavigationSink) -> Destination {
        tracing::debug!(path = Destination::Login.path(), "continue activated");
        sink.navigate_to(Destination::Login);
        Destination::Login
    }
}

fn resolve_or_degrade(resolver: &dyn AssetResolver, handle: &AssetHandle) -> Option<String> {
    match resolver.resolve(handle) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::warn!(%err, "asset did not resolve, rendering without it");
            None
        }
    }
}

/// The sink the welcome screen reports to: a `SharedNavigationSink` from
/// context if one was provided, else the router when mounted under one.
///
/// `None` means neither exists; the action then falls back to its `href`.
pub fn use_navigation_sink() -> Option<SharedNavigationSink> {
    let injected = try_use_context::<SharedNavigationSink>();
    let has_router = use_hook(|| try_consume_context::<RouterContext>().is_some());
    injected.or_else(|| has_router.then(|| SharedNavigationSink::new(navigator())))
}

/// Landing screen. Reads `WelcomeAssets`, `SharedAssetResolver` and
/// `SharedNavigationSink` from context; falls back to the bundled images and
/// the router navigator.
#[component]
pub fn WelcomeScreen() -> Element {
    let assets = try_use_context::<WelcomeAssets>().unwrap_or_default();
    let resolver = try_use_context::<SharedAssetResolver>().unwrap_or_default();
    let sink = use_navigation_sink();

    let tree = WelcomeView::new(assets).render(&resolver);

    rsx! {
        document::Link { rel: "stylesheet", href: WELCOME_CSS }
        {render_node(&tree, sink.as_ref())}
    }
}

/// Click handling for an action node. Returns `true` when an intent was
/// dispatched and the browser's own link handling must be suppressed.
fn activate(node: &ViewNode, sink: Option<&SharedNavigationSink>) -> bool {
    match sink {
        Some(sink) => dispatch(node, sink).is_some(),
        None => false,
    }
}

fn render_node(node: &ViewNode, sink: Option<&SharedNavigationSink>) -> Element {
    let class = node.get_attr("class").map(str::to_string);
    let style = node.get_attr("style").map(str::to_string);
    let text = node.text.clone().unwrap_or_default();

    match node.kind {
        NodeKind::View | NodeKind::Region | NodeKind::Panel => rsx! {
            div { class, style,
                for child in node.children.iter() {
                    {render_node(child, sink)}
                }
            }
        },
        NodeKind::Image => {
            let src = node.get_attr("src").map(str::to_string);
            let alt = node.get_attr("alt").unwrap_or_default().to_string();
            rsx! { img { class, style, src, alt } }
        }
        NodeKind::Heading => rsx! { h2 { class, style, "{text}" } },
        NodeKind::Action => {
            let href = node.get_attr("href").map(str::to_string);
            let role = node.get_attr("role").map(str::to_string);
            let action = node.clone();
            let sink = sink.cloned();
            rsx! {
                a {
                    class,
                    style,
                    href,
                    role,
                    onclick: move |evt: MouseEvent| {
                        if activate(&action, sink.as_ref()) {
                            evt.prevent_default();
                        }
                    },
                    "{text}"
                }
            }
        }
    }
}
