// folio
//
// everything about the portfolio site that is not tied to the browser: which paths
// exist, how the navbar menu behaves, how the contact form moves between states,
// and the static content and theme tokens the pages render.  the webapp crate wires
// these into dioxus components and supplies the browser-backed seams.
pub mod config;
pub mod contact;
pub mod content;
pub mod nav;
pub mod route;
pub mod theme;
