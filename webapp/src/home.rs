use dioxus::prelude::*;

use crate::components::{icon::skill_icon, project_card::ProjectCard, social::SocialLinks};
use folio::{
    config::{SiteConfig, SocialKind},
    content::{HERO_STACK, HOME_ABOUT, HOME_SKILLS, PROJECTS, stagger_delay},
};

#[component]
pub fn Home() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        div { class: "home-container",
            // Hero section
            section { class: "hero",
                div { class: "profile-image pop-in",
                    img {
                        src: "{config.profile_image}",
                        alt: "Profile",
                        loading: "lazy",
                        decoding: "async",
                    }
                }
                h1 {
                    class: "page-title hero-title fade-up",
                    style: "animation-delay: 0.2s;",
                    "Hi, I'm {config.owner}"
                }
                h2 {
                    class: "hero-role fade-up",
                    style: "animation-delay: 0.3s;",
                    "{config.role}"
                }
                p {
                    class: "hero-tagline fade-up",
                    style: "animation-delay: 0.4s;",
                    "{config.tagline}"
                }
                div {
                    class: "tech-stack fade-up",
                    style: "animation-delay: 0.5s;",
                    for tech in HERO_STACK.iter() {
                        div { key: "{tech.label}", class: "tech-icon",
                            {skill_icon(tech.icon)}
                            span { class: "tech-label", "{tech.label}" }
                        }
                    }
                }
                SocialLinks {
                    kinds: vec![SocialKind::GitHub, SocialKind::LinkedIn],
                    class: "social-links fade-up".to_owned(),
                    style: "animation-delay: 0.6s; margin-top: 0;".to_owned(),
                }
            }

            // About section
            section { class: "page-section", id: "about",
                h2 { class: "section-title", "About Me" }
                div { class: "about-content",
                    div { class: "about-text",
                        for paragraph in HOME_ABOUT.iter() {
                            p { "{paragraph}" }
                        }
                    }
                    div { class: "skill-list",
                        for (index , tech) in HOME_SKILLS.iter().enumerate() {
                            div {
                                key: "{tech.label}",
                                class: "card skill-item fade-up",
                                style: format!("animation-delay: {};", stagger_delay(index)),
                                {skill_icon(tech.icon)}
                                "{tech.label}"
                            }
                        }
                    }
                }
            }

            // Featured projects
            section { class: "page-section",
                h2 { class: "section-title", "Featured Projects" }
                div { class: "projects-grid",
                    for (index , project) in PROJECTS.iter().enumerate() {
                        ProjectCard { key: "{project.title}", project: *project, index }
                    }
                }
            }
        }
    }
}
