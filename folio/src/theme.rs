// theme tokens
//
// the single source for colors, gradients, shadows and timings.  these are plain
// constants so the webapp can splice them into its stylesheets at compile time

pub mod colors {
    // backgrounds
    pub const BG_PRIMARY: &str = "#0a192f";
    pub const BG_SECONDARY: &str = "#112240";
    pub const BG_CARD: &str = "rgba(17, 34, 64, 0.7)";
    pub const BG_GLASS: &str = "rgba(255, 255, 255, 0.05)";

    // text
    pub const TEXT_PRIMARY: &str = "#e6f1ff";
    pub const TEXT_SECONDARY: &str = "#8892b0";
    pub const TEXT_MUTED: &str = "#8892b0";

    // accents
    pub const ACCENT: &str = "#64ffda";
    pub const ACCENT_LIGHT: &str = "#88ffea";
    pub const ACCENT_GLOW: &str = "rgba(100, 255, 218, 0.3)";
    pub const HIGHLIGHT_TRANSPARENT: &str = "rgba(100, 255, 218, 0.1)";

    pub const NEON_PINK: &str = "#ff6b6b";
    pub const NEON_PURPLE: &str = "#bd93f9";
    pub const NEON_BLUE: &str = "#8be9fd";
}

pub mod gradients {
    pub const PRIMARY: &str = "linear-gradient(135deg, #0a192f 0%, #112240 100%)";
    pub const ACCENT: &str = "linear-gradient(45deg, #64ffda, #88ffea)";
    pub const GLASS: &str =
        "linear-gradient(45deg, rgba(100, 255, 218, 0.1), rgba(255, 255, 255, 0.05))";
    pub const NEON: &str = "linear-gradient(45deg, #64ffda, #ff6b6b)";
}

pub mod shadows {
    pub const GLOW: &str = "0 0 20px rgba(100, 255, 218, 0.2)";
    pub const CARD: &str = "0 4px 20px rgba(0, 0, 0, 0.2)";
    pub const NEON_GLOW: &str = "0 0 20px rgba(255, 107, 107, 0.2)";
}

pub mod transitions {
    pub const DEFAULT: &str = "0.3s cubic-bezier(0.4, 0, 0.2, 1)";
    pub const SLOW: &str = "0.5s cubic-bezier(0.4, 0, 0.2, 1)";
}

pub mod radius {
    pub const SMALL: &str = "8px";
    pub const MEDIUM: &str = "12px";
    pub const LARGE: &str = "20px";
    pub const CIRCLE: &str = "50%";
}

// below this width the navbar collapses into the toggleable menu
pub const MOBILE_BREAKPOINT: &str = "768px";
