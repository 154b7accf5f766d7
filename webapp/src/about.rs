use dioxus::prelude::*;

use crate::components::icon::skill_icon;
use folio::{
    config::SiteConfig,
    content::{ABOUT_PARAGRAPHS, SKILLS, Skill, stagger_delay},
};

#[derive(Clone, PartialEq, Props)]
struct SkillCardProps {
    skill: Skill,
    index: usize,
}

#[component]
fn SkillCard(props: SkillCardProps) -> Element {
    let skill = props.skill;
    let delay = stagger_delay(props.index);

    rsx! {
        div { class: "card skill-card fade-up", style: "animation-delay: {delay};",
            {skill_icon(skill.icon)}
            h3 { "{skill.title}" }
            p { "{skill.description}" }
            div { class: "tech-list",
                for tech in skill.technologies.iter() {
                    span { key: "{tech}", class: "tech-tag", "{tech}" }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        section { class: "page-section",
            div { class: "about-grid",
                div { class: "profile-image pop-in",
                    img { src: "{config.profile_image}", alt: "{config.owner}" }
                }
                div {
                    h1 { class: "page-title fade-up", "About Me" }
                    for (index , paragraph) in ABOUT_PARAGRAPHS.iter().enumerate() {
                        p {
                            class: "fade-up",
                            style: format!("animation-delay: {};", stagger_delay(index + 1)),
                            "{paragraph}"
                        }
                    }
                }
            }

            div { class: "skills-grid",
                for (index , skill) in SKILLS.iter().enumerate() {
                    SkillCard { key: "{skill.title}", skill: *skill, index }
                }
            }
        }
    }
}
