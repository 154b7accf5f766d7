pub const PAGE_STYLES: &str = r#"
/* Page layout shared by every route */
.page-section {
  max-width: var(--content-width);
  margin: 0 auto;
  padding: 6rem 2rem;
}

.page-header {
  text-align: center;
  margin-bottom: 4rem;
}

.page-title, .section-title {
  font-family: 'Inter', sans-serif;
  font-weight: 700;
  background: var(--gradient-neon);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.page-title {
  font-size: 3rem;
  margin-bottom: 1rem;
}

.section-title {
  font-size: 2.5rem;
  text-align: center;
  margin-bottom: 3rem;
}

.page-subtitle {
  font-size: 1.5rem;
  font-weight: 400;
  color: var(--text-secondary);
}

.profile-image {
  border-radius: var(--radius-circle);
  overflow: hidden;
  border: 4px solid var(--accent);
  box-shadow: var(--shadow-glow);
}

.profile-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

/* Home */
.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 2rem;
  background: var(--gradient-primary);
}

.hero .profile-image {
  width: 200px;
  height: 200px;
  margin-bottom: 2rem;
}

.hero-title {
  font-size: 3.5rem;
  margin-bottom: 1rem;
}

.hero-role {
  font-size: 1.8rem;
  color: var(--accent);
  margin-bottom: 1.5rem;
}

.hero-tagline {
  max-width: 600px;
  font-size: 1.1rem;
  color: var(--text-secondary);
  line-height: 1.8;
  margin-bottom: 2rem;
}

.tech-stack {
  display: flex;
  gap: 2rem;
  margin-bottom: 2rem;
}

.tech-icon {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  font-size: 2.5rem;
  color: var(--accent);
  transition: transform var(--transition-default);
}

.tech-icon:hover {
  transform: scale(1.1);
}

.tech-label {
  font-size: 0.9rem;
  color: var(--text-secondary);
}

.about-content {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 4rem;
  align-items: center;
}

.about-text p {
  color: var(--text-secondary);
  line-height: 1.8;
  margin-bottom: 1.5rem;
}

.skill-list {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
}

.skill-item {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem;
  color: var(--text-primary);
}

.skill-item .icon {
  color: var(--accent);
  font-size: 1.5rem;
}

/* About */
.about-grid {
  display: grid;
  grid-template-columns: 1fr 2fr;
  gap: 4rem;
  align-items: center;
  margin-bottom: 6rem;
}

.about-grid .profile-image {
  width: 300px;
  height: 300px;
}

.about-grid p {
  color: var(--text-secondary);
  font-size: 1.1rem;
  line-height: 1.8;
  margin-top: 1.5rem;
}

.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
  gap: 2rem;
}

.skill-card {
  padding: 2rem;
}

.skill-card .icon {
  font-size: 2.5rem;
  color: var(--accent);
  margin-bottom: 1rem;
}

.skill-card h3 {
  margin-bottom: 1rem;
}

.skill-card p {
  color: var(--text-secondary);
  line-height: 1.6;
  margin-bottom: 1.5rem;
}

/* Projects */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 2rem;
}

.project-card {
  overflow: hidden;
}

.project-image {
  position: relative;
  height: 200px;
  overflow: hidden;
}

.project-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  filter: brightness(0.9);
  transition: filter var(--transition-default);
}

.project-card:hover .project-image img {
  filter: brightness(1);
}

.project-links {
  position: absolute;
  top: 1rem;
  right: 1rem;
  display: flex;
  gap: 0.75rem;
}

.project-link {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: var(--radius-circle);
  background: var(--bg-card);
  color: var(--text-primary);
  transition: color var(--transition-default),
              transform var(--transition-default);
}

.project-link:hover {
  color: var(--accent);
  transform: scale(1.1);
}

.project-content {
  padding: 1.5rem;
}

.project-content h3 {
  margin-bottom: 0.75rem;
}

.project-content p {
  color: var(--text-secondary);
  line-height: 1.6;
  margin-bottom: 1rem;
}

/* Contact */
.contact-form {
  max-width: 800px;
  margin: 0 auto 4rem;
  padding: 2rem;
}

.form-group {
  margin-bottom: 1.5rem;
}

.form-group label {
  display: block;
  margin-bottom: 0.5rem;
  font-weight: 500;
}

.form-group input, .form-group textarea {
  width: 100%;
  padding: 0.8rem;
  border: 2px solid var(--bg-glass);
  border-radius: var(--radius-sm);
  background: transparent;
  color: var(--text-primary);
  font-family: 'Inter', sans-serif;
  transition: border-color var(--transition-default),
              box-shadow var(--transition-default);
}

.form-group textarea {
  min-height: 150px;
  resize: vertical;
}

.form-group input:focus, .form-group textarea:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: var(--shadow-glow);
}

.status-message {
  margin-top: 1rem;
  color: var(--accent);
}

.status-message.error {
  color: var(--neon-pink);
}

@media (max-width: 768px) {
  .about-content, .about-grid {
    grid-template-columns: 1fr;
  }

  .hero-title, .page-title {
    font-size: 2.5rem;
  }
}
"#;
