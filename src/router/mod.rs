//! Client-side routes and their descriptors.

use crate::view::{Home, Wrapper};
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use serde::Serialize;

/// The navigation base path, fixed at build time.
pub fn base_url() -> &'static str {
    option_env!("WAYMARK_BASE_URL").unwrap_or("/")
}

/// Routes of the application.
#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[layout(Wrapper)]
    #[route("/")]
    Home {},
    // Reserved for business accounts; stays disabled until the
    // `can_view_teams` guard exists.
    //
    // #[route("/teams")]
    // Teams {},
}

impl Default for Route {
    fn default() -> Self {
        Self::Home {}
    }
}

/// Returns the active route table in declaration order.
pub fn routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor {
            path: Route::Home {}.to_string(),
            name: "home",
            view: Home,
            meta: RouteMeta {
                requires_no_auth: true,
                ..RouteMeta::default()
            },
        },
        // RouteDescriptor {
        //     path: "/teams".to_owned(),
        //     name: "teams",
        //     view: Teams,
        //     meta: RouteMeta {
        //         requires_no_auth: false,
        //         requires_business_account: true,
        //     },
        // },
    ]
}

/// Metadata flags attached to a route. Nothing enforces them yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    /// The route can be visited without an authenticated session.
    pub requires_no_auth: bool,
    /// The route is restricted to business accounts.
    pub requires_business_account: bool,
}

/// A declarative mapping from a URL path to a lazily-loaded view.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescriptor {
    /// The URL path pattern, unique among active routes.
    pub path: String,
    /// The symbolic route name, intended to be unique.
    pub name: &'static str,
    /// The view factory, invoked on first navigation to `path`.
    #[serde(skip)]
    pub view: fn() -> Element,
    /// The metadata flags.
    pub meta: RouteMeta,
}

impl RouteDescriptor {
    /// The location of the route under the navigation base.
    pub fn href(&self) -> String {
        join_base(base_url(), &self.path)
    }
}

// Equality ignores `view`; function pointer addresses are not stable across codegen units.
impl PartialEq for RouteDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.name == other.name && self.meta == other.meta
    }
}

/// Joins the base path and a route path without doubling slashes.
fn join_base(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}{path}")
}

#[cfg(test)]
mod tests {
    use super::{base_url, join_base, routes, Route, Wrapper};
    use dioxus::prelude::VirtualDom;

    #[test]
    fn it_declares_a_single_active_route() {
        let table = routes();
        assert_eq!(table.len(), 1);

        let home = &table[0];
        assert_eq!(home.path, "/");
        assert_eq!(home.name, "home");
        assert!(home.meta.requires_no_auth);
        assert!(!home.meta.requires_business_account);
    }

    #[test]
    fn it_serializes_the_route_surface() {
        let table = serde_json::to_value(routes()).expect("route table should serialize");
        let home = &table[0];
        assert_eq!(home["path"], "/");
        assert_eq!(home["name"], "home");
        assert_eq!(home["meta"]["requiresNoAuth"], true);
        assert_eq!(home["meta"]["requiresBusinessAccount"], false);
        assert!(home.get("view").is_none());
    }

    #[test]
    fn it_keeps_paths_and_names_unique() {
        let table = routes();
        for (index, route) in table.iter().enumerate() {
            for other in &table[index + 1..] {
                assert_ne!(route.path, other.path);
                assert_ne!(route.name, other.name);
            }
        }
    }

    #[test]
    fn it_compares_descriptors_by_route_identity() {
        let home = &routes()[0];
        let mut twin = home.clone();
        twin.view = Wrapper;
        assert_eq!(home, &twin);

        twin.name = "elsewhere";
        assert_ne!(home, &twin);
    }

    #[test]
    fn it_resolves_the_home_path() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Home {}));
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::default(), Route::Home {});
    }

    #[test]
    fn it_rejects_the_disabled_teams_path() {
        assert!("/teams".parse::<Route>().is_err());
    }

    #[test]
    fn it_joins_the_base_url() {
        assert_eq!(base_url(), "/");
        assert_eq!(join_base("/", "/"), "/");
        assert_eq!(join_base("/desk", "/"), "/desk/");
        assert_eq!(join_base("/desk/", "/teams"), "/desk/teams");
        assert_eq!(routes()[0].href(), "/");
    }

    #[test]
    fn it_renders_the_home_view() {
        let home = &routes()[0];
        let mut vdom = VirtualDom::new(home.view);
        let mutations = vdom.rebuild_to_vec();
        assert!(!mutations.edits.is_empty());
    }
}
