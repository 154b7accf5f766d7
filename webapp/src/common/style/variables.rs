use constcat::concat;

use folio::theme::{colors, gradients, radius, shadows, transitions};

// the :root sheet is spliced together from the theme tokens so the css and the rust
// side can never disagree on a value
pub const CSS_VARIABLES: &str = concat!(
    r#"
:root {
  /* Backgrounds */
  --bg-primary: "#,
    colors::BG_PRIMARY,
    ";\n  --bg-secondary: ",
    colors::BG_SECONDARY,
    ";\n  --bg-card: ",
    colors::BG_CARD,
    ";\n  --bg-glass: ",
    colors::BG_GLASS,
    r#";

  /* Text */
  --text-primary: "#,
    colors::TEXT_PRIMARY,
    ";\n  --text-secondary: ",
    colors::TEXT_SECONDARY,
    ";\n  --text-muted: ",
    colors::TEXT_MUTED,
    r#";

  /* Accents */
  --accent: "#,
    colors::ACCENT,
    ";\n  --accent-light: ",
    colors::ACCENT_LIGHT,
    ";\n  --accent-glow: ",
    colors::ACCENT_GLOW,
    ";\n  --highlight-transparent: ",
    colors::HIGHLIGHT_TRANSPARENT,
    ";\n  --neon-pink: ",
    colors::NEON_PINK,
    ";\n  --neon-purple: ",
    colors::NEON_PURPLE,
    ";\n  --neon-blue: ",
    colors::NEON_BLUE,
    r#";

  /* Gradients */
  --gradient-primary: "#,
    gradients::PRIMARY,
    ";\n  --gradient-accent: ",
    gradients::ACCENT,
    ";\n  --gradient-glass: ",
    gradients::GLASS,
    ";\n  --gradient-neon: ",
    gradients::NEON,
    r#";

  /* Shadows */
  --shadow-glow: "#,
    shadows::GLOW,
    ";\n  --shadow-card: ",
    shadows::CARD,
    ";\n  --shadow-neon-glow: ",
    shadows::NEON_GLOW,
    r#";

  /* Animation */
  --transition-default: "#,
    transitions::DEFAULT,
    ";\n  --transition-slow: ",
    transitions::SLOW,
    r#";

  /* Border Radius */
  --radius-sm: "#,
    radius::SMALL,
    ";\n  --radius-md: ",
    radius::MEDIUM,
    ";\n  --radius-lg: ",
    radius::LARGE,
    ";\n  --radius-circle: ",
    radius::CIRCLE,
    r#";

  /* Layout */
  --nav-height: 72px;
  --content-width: 1200px;
}
"#
);
