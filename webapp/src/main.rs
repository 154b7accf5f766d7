#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::{error, info};

use folio::{config::SiteConfig, route::SitePath};

mod common;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod about;
use about::About;

mod projects;
use projects::Projects;

mod contact;
use contact::Contact;

fn main() {
    // the logger wants its level before anything can be logged, so a bad config is
    // reported just after init
    let (config, config_err) = match SiteConfig::embedded() {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    dioxus_logger::init(config.level()).expect("failed to init logger");

    if let Some(err) = config_err {
        error!("falling back to default site config: {err}");
    }

    info!({ owner = %config.owner }, "starting portfolio");
    LaunchBuilder::new().with_context(config).launch(App);
}

// the navbar layout wraps every route, including the catch-all, so it is mounted
// no matter what the path is
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/projects")]
        Projects {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        Unmatched { segments: Vec<String> },
}

impl From<SitePath> for Route {
    fn from(path: SitePath) -> Self {
        match path {
            SitePath::Home => Route::Home {},
            SitePath::About => Route::About {},
            SitePath::Projects => Route::Projects {},
            SitePath::Contact => Route::Contact {},
        }
    }
}

impl Route {
    fn site_path(&self) -> Option<SitePath> {
        match self {
            Route::Home {} => Some(SitePath::Home),
            Route::About {} => Some(SitePath::About),
            Route::Projects {} => Some(SitePath::Projects),
            Route::Contact {} => Some(SitePath::Contact),
            Route::Unmatched { .. } => None,
        }
    }
}

// paths outside the site render nothing below the navbar
#[component]
fn Unmatched(segments: Vec<String>) -> Element {
    tracing::debug!({ segments = ?segments }, "no page for path");
    rsx! {}
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use folio::route::{NAV_ITEMS, is_active, location_path};

    use super::*;

    #[test]
    fn every_site_path_has_a_route() {
        for page in SitePath::ALL {
            let route = Route::from(page);
            assert_eq!(route.to_string(), page.path());
            assert_eq!(route.site_path(), Some(page));
        }
    }

    #[test]
    fn declared_paths_parse_to_their_page() {
        for page in SitePath::ALL {
            let route = Route::from_str(page.path()).expect("declared path should parse");
            assert_eq!(route, Route::from(page));
        }
    }

    #[test]
    fn trailing_slash_renders_the_page_but_highlights_no_link() {
        let route = Route::from_str("/about/").expect("router accepts a trailing slash");
        assert_eq!(route, Route::About {});

        let current = location_path("/about/");
        assert!(NAV_ITEMS.iter().all(|item| !is_active(item, current)));
        assert!(is_active(&NAV_ITEMS[1], location_path("/about?from=home")));
    }

    #[test]
    fn other_paths_fall_through_to_unmatched() {
        let route = Route::from_str("/blog/first-post").expect("catch-all should parse");
        assert_eq!(route.site_path(), None);
        assert!(matches!(route, Route::Unmatched { .. }));
    }
}
