use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// the document compiled into the binary; there is no config file on disk to read at
// runtime, and no environment variables
pub const EMBEDDED_CONFIG: &str = include_str!("../site.toml");

// site configuration
//
// who the site is about and the knobs the pages read.  the static page content
// itself lives in content.rs
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub owner: String,
    pub initials: String,
    pub role: String,
    pub tagline: String,
    pub profile_image: String,
    pub log_level: String,
    pub contact: ContactConfig,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ContactConfig {
    // how long the simulated send takes
    pub submit_delay_ms: u32,
    // make every simulated send fail, to see the error path in a browser
    #[serde(default)]
    pub fail_sends: bool,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
    Twitter,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            SocialKind::GitHub => "GitHub",
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::Email => "Email",
            SocialKind::Twitter => "Twitter",
        }
    }

    // mailto links stay in the current tab
    pub fn opens_new_tab(self) -> bool {
        self != SocialKind::Email
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

// as with a server config, the site table lives under [config] so the same document
// can carry other tables later
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

impl SiteConfig {
    pub fn embedded() -> anyhow::Result<SiteConfig> {
        read_config(EMBEDDED_CONFIG)
    }

    // unknown level strings fall back to INFO
    pub fn level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }

    pub fn social_links(&self, kinds: &[SocialKind]) -> impl Iterator<Item = &SocialLink> {
        self.social.iter().filter(move |link| kinds.contains(&link.kind))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            owner: String::from("Jaypee"),
            initials: String::from("JP"),
            role: String::from("Full Stack Developer"),
            tagline: String::from(
                "I build modern web applications with cutting-edge technologies. \
                 Let's create something amazing together.",
            ),
            profile_image: String::from("/images/profile.jpg"),
            log_level: String::from("debug"),
            contact: ContactConfig {
                submit_delay_ms: 1000,
                fail_sends: false,
            },
            social: vec![
                SocialLink {
                    kind: SocialKind::GitHub,
                    url: String::from("https://github.com/yourusername"),
                },
                SocialLink {
                    kind: SocialKind::LinkedIn,
                    url: String::from("https://linkedin.com/in/yourusername"),
                },
                SocialLink {
                    kind: SocialKind::Email,
                    url: String::from("mailto:your.email@example.com"),
                },
                SocialLink {
                    kind: SocialKind::Twitter,
                    url: String::from("https://twitter.com/yourusername"),
                },
            ],
        }
    }
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> anyhow::Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc)
        .map_err(|err| anyhow::Error::msg(format!("failed to parse site config: {err}")))?;

    debug!("successfully parsed site config");
    Ok(data.config)
}
