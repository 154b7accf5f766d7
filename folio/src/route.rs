use std::fmt;

// site paths
//
// the closed set of pages.  matching is exact string equality on purpose: "/about/"
// and "/about/me" are not the about page, and nothing is prefix-matched
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SitePath {
    Home,
    About,
    Projects,
    Contact,
}

impl SitePath {
    pub const ALL: [SitePath; 4] = [
        SitePath::Home,
        SitePath::About,
        SitePath::Projects,
        SitePath::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            SitePath::Home => "/",
            SitePath::About => "/about",
            SitePath::Projects => "/projects",
            SitePath::Contact => "/contact",
        }
    }

    pub fn from_path(path: &str) -> Option<SitePath> {
        SitePath::ALL.into_iter().find(|p| p.path() == path)
    }
}

impl fmt::Display for SitePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

// icons shown next to nav labels and elsewhere on the pages
//
// the webapp decides how each variant is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Home,
    User,
    Code,
    Envelope,
}

impl NavIcon {
    pub fn css_name(self) -> &'static str {
        match self {
            NavIcon::Home => "home",
            NavIcon::User => "user",
            NavIcon::Code => "code",
            NavIcon::Envelope => "envelope",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: SitePath,
    pub label: &'static str,
    pub icon: NavIcon,
}

// the one list of nav links, shared by the desktop bar and the mobile menu
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        path: SitePath::Home,
        label: "Home",
        icon: NavIcon::Home,
    },
    NavItem {
        path: SitePath::About,
        label: "About",
        icon: NavIcon::User,
    },
    NavItem {
        path: SitePath::Projects,
        label: "Projects",
        icon: NavIcon::Code,
    },
    NavItem {
        path: SitePath::Contact,
        label: "Contact",
        icon: NavIcon::Envelope,
    },
];

pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    item.path.path() == current_path
}

// the pathname part of a history location, without any query string or fragment
pub fn location_path(location: &str) -> &str {
    match location.find(['?', '#']) {
        Some(end) => &location[..end],
        None => location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_through_the_table() {
        for page in SitePath::ALL {
            assert_eq!(SitePath::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn unknown_paths_do_not_match() {
        assert_eq!(SitePath::from_path("/blog"), None);
        assert_eq!(SitePath::from_path(""), None);
    }

    #[test]
    fn no_trailing_slash_or_prefix_matching() {
        assert_eq!(SitePath::from_path("/about/"), None);
        assert_eq!(SitePath::from_path("/projects/1"), None);
        assert_eq!(SitePath::from_path("/ABOUT"), None);
    }

    #[test]
    fn nav_items_cover_every_page_once() {
        let paths: Vec<SitePath> = NAV_ITEMS.iter().map(|item| item.path).collect();
        assert_eq!(paths, SitePath::ALL.to_vec());
    }

    #[test]
    fn exactly_one_link_is_active_for_each_page() {
        for page in SitePath::ALL {
            let active: Vec<&NavItem> = NAV_ITEMS
                .iter()
                .filter(|item| is_active(item, page.path()))
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].path, page);
        }
    }

    #[test]
    fn home_link_is_not_active_on_nested_paths() {
        let home = &NAV_ITEMS[0];
        assert!(is_active(home, "/"));
        assert!(!is_active(home, "/about"));
        assert!(!is_active(home, "/contact"));
    }

    #[test]
    fn location_path_drops_query_and_fragment() {
        assert_eq!(location_path("/about?ref=home"), "/about");
        assert_eq!(location_path("/contact#form"), "/contact");
        assert_eq!(location_path("/?a=1#top"), "/");
        assert_eq!(location_path("/projects"), "/projects");
    }

    #[test]
    fn location_path_keeps_trailing_slash() {
        assert_eq!(location_path("/about/?x=1"), "/about/");
        assert!(NAV_ITEMS.iter().all(|item| !is_active(item, location_path("/about/"))));
    }

    #[test]
    fn no_link_is_active_on_an_unknown_path() {
        assert!(NAV_ITEMS.iter().all(|item| !is_active(item, "/missing")));
    }
}
