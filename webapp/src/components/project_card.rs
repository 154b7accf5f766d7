use dioxus::prelude::*;

use crate::components::icon::{external_link_icon, social_icon};
use folio::{
    config::SocialKind,
    content::{Project, stagger_delay},
};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    project: Project,
    index: usize,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;
    let delay = stagger_delay(props.index);

    rsx! {
        div {
            class: "card project-card fade-up",
            style: "animation-delay: {delay};",
            div { class: "project-image",
                img {
                    src: project.image,
                    alt: project.title,
                    loading: "lazy",
                    decoding: "async",
                }
                div { class: "project-links",
                    a {
                        class: "project-link",
                        href: project.github_url,
                        title: "Source",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {social_icon(SocialKind::GitHub)}
                    }
                    a {
                        class: "project-link",
                        href: project.live_url,
                        title: "Live site",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {external_link_icon()}
                    }
                }
            }
            div { class: "project-content",
                h3 { "{project.title}" }
                p { "{project.description}" }
                div { class: "tech-list",
                    for tech in project.technologies.iter() {
                        span { key: "{tech}", class: "tech-tag", "{tech}" }
                    }
                }
            }
        }
    }
}
