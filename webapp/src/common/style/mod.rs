use constcat::concat;

mod components;
mod pages;
mod variables;

pub use components::{BASE_COMPONENTS, NAV_STYLES};
pub use pages::PAGE_STYLES;
pub use variables::CSS_VARIABLES;

pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--text-primary);
  background-color: var(--bg-primary);
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    NAV_STYLES,
    PAGE_STYLES
);
