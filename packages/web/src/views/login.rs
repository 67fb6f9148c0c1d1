use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    rsx! {
        div { class: "login",
            h2 { "Log in to RideFlow" }
        }
    }
}
