use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use crate::{Route, common::scroll::BodyScrollLock, components::icon::nav_icon};
use folio::{
    config::SiteConfig,
    nav::MenuController,
    route::{NAV_ITEMS, NavIcon, NavItem, is_active, location_path},
};

type NavMenu = Signal<MenuController<BodyScrollLock>>;

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    item: NavItem,
    current_path: String,
    menu: NavMenu,
}

// clicking a link closes the menu right away; the route effect in NavBarInner covers
// back/forward navigation, which never goes through a link
#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let item = props.item;
    let mut menu = props.menu;

    rsx! {
        Link {
            class: if is_active(&item, &props.current_path) { "nav-link active" } else { "nav-link" },
            to: Route::from(item.path),
            onclick: move |_| menu.write().close_menu(),
            {nav_icon(item.icon)}
            "{item.label}"
        }
    }
}

// NavBarInner
//
// the bar itself.  the same NAV_ITEMS list feeds the desktop row and the mobile menu;
// on narrow screens the row is hidden until the toggle opens it.  opening the menu
// takes the page scroll lock, which the MenuController gives back when the menu closes,
// when the route changes, or when this component goes away
#[component]
fn NavBarInner() -> Element {
    let config = use_context::<SiteConfig>();
    // highlight against the raw browser path, not the parsed Route: the router happily
    // maps "/about/" to the about page, but only "/about" is the about link
    let current_path = location_path(&router().full_route_string()).to_owned();

    let mut menu = use_signal(|| MenuController::new(current_path.clone(), BodyScrollLock));

    use_effect(use_reactive((&current_path,), move |(current_path,)| {
        menu.write().navigate(current_path);
    }));

    use_drop(move || {
        if let Ok(mut menu) = menu.try_write() {
            menu.close_menu();
        }
    });

    let menu_open = menu.read().menu_open();

    rsx! {
        nav { class: "navbar",
            Link {
                class: "nav-logo",
                to: Route::Home {},
                onclick: move |_| menu.write().close_menu(),
                {nav_icon(NavIcon::Code)}
                "{config.initials}"
            }
            button {
                class: "nav-toggle",
                aria_label: "Toggle navigation menu",
                aria_expanded: "{menu_open}",
                onclick: move |_| {
                    menu.write().toggle_menu();
                    debug!({ open = menu.peek().menu_open() }, "toggled navigation menu");
                },
                if menu_open {
                    "✕"
                } else {
                    "☰"
                }
            }
            div { class: if menu_open { "nav-links open" } else { "nav-links" },
                for item in NAV_ITEMS {
                    NavBarButton {
                        key: "{item.path}",
                        item,
                        current_path: current_path.clone(),
                        menu,
                    }
                }
            }
        }
    }
}

// NavBar
//
// the layout every route renders inside.  unmatched paths still get the bar, with an
// empty page below it
#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        main { class: "page", Outlet::<Route> {} }
    }
}
