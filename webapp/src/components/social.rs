use dioxus::prelude::*;

use crate::components::icon::social_icon;
use folio::config::{SiteConfig, SocialKind};

#[derive(Clone, PartialEq, Props)]
pub struct SocialLinksProps {
    kinds: Vec<SocialKind>,
    #[props(default = String::from("social-links"))]
    class: String,
    #[props(default)]
    style: String,
}

// renders the configured links whose kind is in `kinds`, in config order
#[component]
pub fn SocialLinks(props: SocialLinksProps) -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        div { class: "{props.class}", style: "{props.style}",
            for link in config.social_links(&props.kinds) {
                a {
                    key: "{link.url}",
                    class: "social-link",
                    href: "{link.url}",
                    title: link.kind.label(),
                    target: if link.kind.opens_new_tab() { "_blank" } else { "_self" },
                    rel: "noopener noreferrer",
                    {social_icon(link.kind)}
                }
            }
        }
    }
}
