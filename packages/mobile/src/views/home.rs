use dioxus::prelude::*;
use ui::WelcomeScreen;

#[component]
pub fn Home() -> Element {
    rsx! { WelcomeScreen {} }
}
