use dioxus::prelude::*;
use zino_dioxus::prelude::*;

pub fn Home() -> Element {
    rsx! {
        FluidContainer {
            Card {
                class: "card home-intro",
                title: rsx! { span { "Welcome to Waymark" } },
                content: rsx! {
                    p { "Plan trips and drop waypoints on a shared map." }
                },
            }
            div {
                id: "map",
                class: "map-viewport",
            }
        }
    }
}
