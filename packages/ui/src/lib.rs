//! This crate contains all shared UI for the workspace.

mod assets;
pub use assets::{
    AssetError, AssetHandle, AssetResolver, BundledAssets, SharedAssetResolver, WelcomeAssets,
    BACKGROUND_HANDLE, LOGO_HANDLE,
};

mod navigation;
pub use navigation::{Destination, NavigationSink, RecordingNavigator, SharedNavigationSink};

mod view_tree;
pub use view_tree::{dispatch, NodeKind, ViewNode};

mod welcome;
pub use welcome::{use_navigation_sink, WelcomeScreen, WelcomeView, CONTINUE_TEXT, HEADING_TEXT};

mod theme;
pub use theme::RideFlowTheme;
