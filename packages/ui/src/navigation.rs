use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus::router::Navigator;
use serde::{Deserialize, Serialize};

/// Named places the welcome flow can send the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    #[serde(rename = "/login")]
    Login,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Login => "/login",
        }
    }
}

/// Receives navigation intents. Implementations decide how the transition
/// actually happens.
pub trait NavigationSink {
    fn navigate_to(&self, destination: Destination);
}

impl NavigationSink for Navigator {
    fn navigate_to(&self, destination: Destination) {
        let target = NavigationTarget::Internal(destination.path().to_string());
        if let Some(failure) = self.push(target) {
            tracing::warn!(path = destination.path(), ?failure, "router rejected navigation");
        }
    }
}

impl<T: NavigationSink + ?Sized> NavigationSink for Rc<T> {
    fn navigate_to(&self, destination: Destination) {
        (**self).navigate_to(destination);
    }
}

/// Stub sink that keeps every intent it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    intents: RefCell<Vec<Destination>>,
}

impl RecordingNavigator {
    pub fn intents(&self) -> Vec<Destination> {
        self.intents.borrow().clone()
    }
}

impl NavigationSink for RecordingNavigator {
    fn navigate_to(&self, destination: Destination) {
        self.intents.borrow_mut().push(destination);
    }
}

/// A `NavigationSink` that can live in Dioxus context and in component props.
///
/// Provide one at the app root to replace the router navigator:
/// `use_context_provider(|| SharedNavigationSink::new(my_sink));`
#[derive(Clone)]
pub struct SharedNavigationSink(Rc<dyn NavigationSink>);

impl SharedNavigationSink {
    pub fn new(sink: impl NavigationSink + 'static) -> Self {
        Self(Rc::new(sink))
    }
}

impl NavigationSink for SharedNavigationSink {
    fn navigate_to(&self, destination: Destination) {
        self.0.navigate_to(destination);
    }
}

impl PartialEq for SharedNavigationSink {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}
