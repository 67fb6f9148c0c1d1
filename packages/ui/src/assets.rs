use std::rc::Rc;

use dioxus::prelude::*;
use thiserror::Error;

const BACKGROUND_IMAGE: Asset = asset!("/assets/rideflow-home.svg");
const LOGO_IMAGE: Asset = asset!("/assets/rideflow-logo.svg");

pub const BACKGROUND_HANDLE: &str = "rideflow-home";
pub const LOGO_HANDLE: &str = "rideflow-logo";

/// Build-time reference to an image, turned into a URL by an `AssetResolver`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetHandle(String);

impl AssetHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The resolver has never heard of this handle.
    #[error("unknown asset handle `{0}`")]
    Unknown(AssetHandle),
    /// The handle is known but its image cannot be served right now. Not
    /// produced by `BundledAssets`; resolvers backed by a CDN or a cache
    /// return it.
    #[error("asset `{handle}` is unavailable: {reason}")]
    Unavailable { handle: AssetHandle, reason: String },
}

/// Turns an `AssetHandle` into something an image element can display.
pub trait AssetResolver {
    fn resolve(&self, handle: &AssetHandle) -> Result<String, AssetError>;
}

/// Resolver backed by the images bundled with this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledAssets;

impl AssetResolver for BundledAssets {
    fn resolve(&self, handle: &AssetHandle) -> Result<String, AssetError> {
        match handle.id() {
            BACKGROUND_HANDLE => Ok(BACKGROUND_IMAGE.to_string()),
            LOGO_HANDLE => Ok(LOGO_IMAGE.to_string()),
            _ => Err(AssetError::Unknown(handle.clone())),
        }
    }
}

/// An `AssetResolver` that can live in Dioxus context. Provide one next to
/// overridden `WelcomeAssets` so the new handles resolve.
#[derive(Clone)]
pub struct SharedAssetResolver(Rc<dyn AssetResolver>);

impl SharedAssetResolver {
    pub fn new(resolver: impl AssetResolver + 'static) -> Self {
        Self(Rc::new(resolver))
    }
}

impl Default for SharedAssetResolver {
    fn default() -> Self {
        Self::new(BundledAssets)
    }
}

impl AssetResolver for SharedAssetResolver {
    fn resolve(&self, handle: &AssetHandle) -> Result<String, AssetError> {
        self.0.resolve(handle)
    }
}

/// The two images the welcome screen shows. Defaults to the production pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeAssets {
    pub background: AssetHandle,
    pub logo: AssetHandle,
}

impl Default for WelcomeAssets {
    fn default() -> Self {
        Self {
            background: AssetHandle::new(BACKGROUND_HANDLE),
            logo: AssetHandle::new(LOGO_HANDLE),
        }
    }
}
