use constcat::concat;

use folio::theme::MOBILE_BREAKPOINT;

pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 1rem 2rem;
  border-radius: var(--radius-md);
  font-family: 'Inter', sans-serif;
  font-weight: 600;
  cursor: pointer;
  border: none;
  outline: none;
  transition: transform var(--transition-default),
              box-shadow var(--transition-default);
}

.btn-accent {
  background: var(--gradient-accent);
  color: var(--bg-primary);
  box-shadow: var(--shadow-glow);
}

.btn-accent:hover {
  box-shadow: var(--shadow-neon-glow);
  transform: translateY(-2px);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
  transform: none;
}

/* Icons */
.icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  min-width: 1em;
  line-height: 1;
}

/* Cards */
.card {
  background: var(--bg-card);
  border-radius: var(--radius-md);
  box-shadow: var(--shadow-card);
  backdrop-filter: blur(10px);
  border: 1px solid var(--highlight-transparent);
  transition: transform var(--transition-default),
              box-shadow var(--transition-default);
}

.card:hover {
  transform: translateY(-4px) scale(1.02);
  box-shadow: var(--shadow-glow);
}

/* Technology chips */
.tech-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.tech-tag {
  font-size: 0.8rem;
  color: var(--accent);
  background: var(--highlight-transparent);
  padding: 0.25rem 0.75rem;
  border-radius: var(--radius-lg);
}

/* Social links */
.social-links {
  display: flex;
  justify-content: center;
  gap: 2rem;
  margin-top: 3rem;
}

.social-link {
  color: var(--text-muted);
  font-size: 1.8rem;
  transition: color var(--transition-default),
              transform var(--transition-default);
}

.social-link:hover {
  color: var(--accent);
  filter: drop-shadow(0 0 8px var(--accent-glow));
  transform: translateY(-3px);
}

/* Entrance animations */
@keyframes fade-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes pop-in {
  from { opacity: 0; transform: scale(0.8); }
  to { opacity: 1; transform: scale(1); }
}

.fade-up {
  animation: fade-up 0.8s cubic-bezier(0.4, 0, 0.2, 1) both;
}

.pop-in {
  animation: pop-in 0.8s cubic-bezier(0.4, 0, 0.2, 1) both;
}

@media (prefers-reduced-motion: reduce) {
  .fade-up, .pop-in {
    animation: none;
  }
}
"#;

pub const NAV_STYLES: &str = concat!(
    r#"
/* Navbar */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  height: var(--nav-height);
  background: var(--bg-card);
  backdrop-filter: blur(10px);
  border-bottom: 1px solid var(--highlight-transparent);
  padding: 1rem 2rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
  box-shadow: var(--shadow-card);
}

.nav-logo, .nav-link, .nav-toggle {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem;
  border-radius: var(--radius-sm);
  transition: color var(--transition-default),
              transform var(--transition-default);
}

.nav-logo {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-primary);
}

.nav-links {
  display: flex;
  gap: 2rem;
  align-items: center;
}

.nav-link {
  color: var(--text-muted);
  font-weight: 500;
}

.nav-logo:hover, .nav-link:hover, .nav-toggle:hover {
  color: var(--accent);
  transform: translateY(-2px);
  text-decoration: none;
}

.nav-link.active {
  color: var(--accent);
  background: var(--bg-glass);
}

.nav-toggle {
  display: none;
  background: none;
  border: none;
  color: var(--text-primary);
  font-size: 1.5rem;
  cursor: pointer;
}

.page {
  min-height: 100vh;
  padding-top: var(--nav-height);
}

@media (max-width: "#,
    MOBILE_BREAKPOINT,
    r#") {
  .nav-toggle {
    display: block;
  }

  .nav-links {
    display: none;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    background: var(--bg-card);
    padding: 1rem;
    flex-direction: column;
    gap: 1rem;
    border-top: 1px solid var(--highlight-transparent);
    box-shadow: var(--shadow-card);
  }

  .nav-links.open {
    display: flex;
  }
}
"#
);
