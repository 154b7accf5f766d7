use dioxus::prelude::*;

use crate::components::project_card::ProjectCard;
use folio::content::PROJECTS;

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { class: "page-section",
            header { class: "page-header",
                h1 { class: "page-title fade-up", "My Projects" }
                h2 {
                    class: "page-subtitle fade-up",
                    style: "animation-delay: 0.2s;",
                    "A collection of my work and personal projects"
                }
            }

            div { class: "projects-grid",
                for (index , project) in PROJECTS.iter().enumerate() {
                    ProjectCard { key: "{project.title}", project: *project, index }
                }
            }
        }
    }
}
