use crate::router::{self, Route};
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use zino_dioxus::prelude::*;

pub fn Wrapper() -> Element {
    rsx! {
        Navbar {
            NavbarBrand {
                a {
                    class: "navbar-item",
                    href: "{router::base_url()}",
                    strong { "Waymark" }
                }
            }
            NavbarStart {
                NavbarLink { to: Route::Home {}, "Home" }
            }
        }
        MainContainer {
            Outlet::<Route> {}
        }
        footer {
            class: "footer",
            div {
                class: "content has-text-centered",
                p { "Waymark" }
            }
        }
    }
}
