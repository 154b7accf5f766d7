// static page content
//
// everything here is fixed at build time and rendered in declaration order

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub github_url: &'static str,
    pub live_url: &'static str,
    pub technologies: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Server,
    Database,
    Tools,
    React,
    NodeJs,
}

impl SkillIcon {
    pub fn css_name(self) -> &'static str {
        match self {
            SkillIcon::Code => "code",
            SkillIcon::Server => "server",
            SkillIcon::Database => "database",
            SkillIcon::Tools => "tools",
            SkillIcon::React => "react",
            SkillIcon::NodeJs => "nodejs",
        }
    }
}

// an area of expertise on the about page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub icon: SkillIcon,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

// a single labelled technology, used by the home page hero and skill list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tech {
    pub icon: SkillIcon,
    pub label: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "KhojPandit",
        description: "A platform connecting users with pandits for ceremonies and rituals.",
        image: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?auto=format&fit=crop&q=80&w=1200&h=800",
        github_url: "https://github.com/yourusername/khojpandit",
        live_url: "https://khojpandit.com",
        technologies: &["React", "Node.js", "MongoDB"],
    },
    Project {
        title: "CleanDirty.ai",
        description: "A subscription-based storytelling platform with mobile-first design.",
        image: "https://images.unsplash.com/photo-1555066931-bf19f8e1083d?auto=format&fit=crop&q=80&w=1200&h=800",
        github_url: "https://github.com/yourusername/cleandirty",
        live_url: "https://cleandirty.ai",
        technologies: &["Next.js", "TypeScript", "Tailwind"],
    },
    Project {
        title: "Portfolio Website",
        description: "A modern, responsive portfolio website with smooth animations.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=1200&h=800",
        github_url: "https://github.com/yourusername/portfolio",
        live_url: "https://yourportfolio.com",
        technologies: &["React", "TypeScript", "Emotion"],
    },
];

pub const SKILLS: &[Skill] = &[
    Skill {
        icon: SkillIcon::Code,
        title: "Frontend Development",
        description: "Creating responsive and interactive user interfaces with modern frameworks and libraries.",
        technologies: &["React", "TypeScript", "Next.js", "Tailwind CSS"],
    },
    Skill {
        icon: SkillIcon::Server,
        title: "Backend Development",
        description: "Building scalable and efficient server-side applications with robust APIs.",
        technologies: &["Node.js", "Express", "REST APIs", "GraphQL"],
    },
    Skill {
        icon: SkillIcon::Database,
        title: "Database Management",
        description: "Designing and implementing database solutions for optimal performance and scalability.",
        technologies: &["MongoDB", "PostgreSQL", "Redis", "Prisma"],
    },
    Skill {
        icon: SkillIcon::Tools,
        title: "Development Tools",
        description: "Utilizing modern development tools and practices for efficient workflow.",
        technologies: &["Git", "Docker", "VS Code", "Figma"],
    },
];

pub const HERO_STACK: &[Tech] = &[
    Tech {
        icon: SkillIcon::React,
        label: "React",
    },
    Tech {
        icon: SkillIcon::NodeJs,
        label: "Node.js",
    },
    Tech {
        icon: SkillIcon::Database,
        label: "MongoDB",
    },
];

pub const HOME_SKILLS: &[Tech] = &[
    Tech {
        icon: SkillIcon::React,
        label: "React & Next.js",
    },
    Tech {
        icon: SkillIcon::NodeJs,
        label: "Node.js & Express",
    },
    Tech {
        icon: SkillIcon::Database,
        label: "MongoDB & SQL",
    },
    Tech {
        icon: SkillIcon::React,
        label: "TypeScript & JavaScript",
    },
];

pub const HOME_ABOUT: &[&str] = &[
    "I'm a passionate Full Stack Developer with a strong foundation in web development. \
     My journey in tech started with a curiosity for creating things that make a difference. \
     I specialize in building modern web applications using React, Node.js, and MongoDB.",
    "When I'm not coding, you can find me exploring new technologies, contributing to open-source projects, \
     or sharing my knowledge through technical blog posts.",
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a passionate Full Stack Developer with a strong foundation in web development. \
     My journey in tech started with a curiosity for creating things that make a difference. \
     I specialize in building modern web applications that are both beautiful and functional.",
    "With a focus on clean code and best practices, I create scalable solutions that help businesses grow. \
     I'm always learning and exploring new technologies to stay at the forefront of web development.",
];

// seconds between successive cards when they animate in
pub const STAGGER_SECS: f32 = 0.2;

pub fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f32 * STAGGER_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_titles_are_unique_and_ordered() {
        let titles: Vec<&str> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["KhojPandit", "CleanDirty.ai", "Portfolio Website"]);
    }

    #[test]
    fn every_project_has_links_and_technologies() {
        for project in PROJECTS {
            assert!(project.github_url.starts_with("https://"));
            assert!(project.live_url.starts_with("https://"));
            assert!(!project.technologies.is_empty());
        }
    }

    #[test]
    fn skills_keep_declaration_order() {
        let titles: Vec<&str> = SKILLS.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Frontend Development",
                "Backend Development",
                "Database Management",
                "Development Tools",
            ]
        );
        assert!(SKILLS.iter().all(|s| s.technologies.len() == 4));
    }

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger_delay(0), "0.0s");
        assert_eq!(stagger_delay(1), "0.2s");
        assert_eq!(stagger_delay(3), "0.6s");
    }
}
