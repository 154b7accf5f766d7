use dioxus::prelude::*;

use folio::{config::SocialKind, content::SkillIcon, route::NavIcon};

// icons are plain glyphs in a span; the css name lets a stylesheet swap in artwork
#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    name: &'static str,
    glyph: &'static str,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    rsx! {
        span { class: "icon icon-{props.name}", aria_hidden: "true", "{props.glyph}" }
    }
}

pub fn nav_icon(icon: NavIcon) -> Element {
    let glyph = match icon {
        NavIcon::Home => "⌂",
        NavIcon::User => "☺",
        NavIcon::Code => "</>",
        NavIcon::Envelope => "✉",
    };

    rsx! {
        Icon { name: icon.css_name(), glyph }
    }
}

pub fn skill_icon(icon: SkillIcon) -> Element {
    let glyph = match icon {
        SkillIcon::Code => "</>",
        SkillIcon::Server => "▤",
        SkillIcon::Database => "⛁",
        SkillIcon::Tools => "⚒",
        SkillIcon::React => "⚛",
        SkillIcon::NodeJs => "⬢",
    };

    rsx! {
        Icon { name: icon.css_name(), glyph }
    }
}

pub fn social_icon(kind: SocialKind) -> Element {
    let (name, glyph) = match kind {
        SocialKind::GitHub => ("github", "⌥"),
        SocialKind::LinkedIn => ("linkedin", "in"),
        SocialKind::Email => ("email", "✉"),
        SocialKind::Twitter => ("twitter", "✦"),
    };

    rsx! {
        Icon { name, glyph }
    }
}

pub fn external_link_icon() -> Element {
    rsx! {
        Icon { name: "external", glyph: "↗" }
    }
}
