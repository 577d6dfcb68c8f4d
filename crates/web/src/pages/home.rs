// =============================================================================
// Portfolio Web - Home Page
// =============================================================================
// The whole site: particle background, navbar, then every section in
// navigation order.
// =============================================================================

use leptos::prelude::*;
use portfolio_motion::Section;

use crate::components::{Footer, Navbar, ParticleCanvas, RevealSection, Separator, SeparatorVariant};
use crate::content::{
    Project, ABOUT_FOCUS, ABOUT_INTRO, HERO_DESCRIPTION, OWNER, PROFILE_PICTURE, PROJECTS, SKILLS,
    SOCIAL_LINKS,
};

/// Single-page portfolio.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="particle-container">
            <ParticleCanvas />
            <div class="content-layer">
                <Navbar />
                <main class="main-content">
                    <HeroSection />
                    <Separator variant=SeparatorVariant::Glow />
                    <AboutSection />
                    <Separator />
                    <SkillsSection />
                    <Separator />
                    <ProjectsSection />
                    <Separator />
                    <ContactSection />
                </main>
                <Footer />
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// Sections
// -----------------------------------------------------------------------------

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <RevealSection section=Section::Home>
            <div class="profile-container">
                <img src=PROFILE_PICTURE alt=OWNER class="profile-pic" />
            </div>
            <div class="hero">
                <h1 class="hero-heading">
                    "Hi, I'm " <span>{OWNER}</span>
                </h1>
                <p class="hero-desc">{HERO_DESCRIPTION}</p>
            </div>
        </RevealSection>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <RevealSection section=Section::About>
            <h2>"About Me"</h2>
            <div class="about-content">
                <p>"I'm " <strong>{OWNER}</strong> {ABOUT_INTRO}</p>
                <p>{ABOUT_FOCUS}</p>
            </div>
        </RevealSection>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    view! {
        <RevealSection section=Section::Skills>
            <h2>"Skills"</h2>
            <div class="skill-container">
                {SKILLS
                    .iter()
                    .map(|skill| view! {
                        <div class="skill">
                            <img src=skill.logo alt=skill.label />
                            <p>{skill.label}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    view! {
        <RevealSection section=Section::Projects>
            <h2>"My Projects"</h2>
            <div class="projects-container">
                {PROJECTS.iter().map(project_card).collect_view()}
            </div>
        </RevealSection>
    }
}

fn project_card(project: &'static Project) -> impl IntoView {
    view! {
        <div class="project-card">
            <img src=project.image alt=project.image_alt />
            <div class="project-info">
                <h3>{project.title}</h3>
                <p>{project.summary}</p>
                <div class="project-links">
                    {project
                        .links
                        .iter()
                        .map(|link| view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class=link.kind.class()
                            >
                                <span class="project-icon">{link.kind.icon()}</span>
                                {link.kind.label()}
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <RevealSection section=Section::Contact>
            <h2>"Connect With Me"</h2>
            <div class="contact-container">
                <div class="contact-content">
                    <p>"Let's connect! Find me on these platforms:"</p>
                    <div class="social-links">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                let target = link.opens_new_tab().then_some("_blank");
                                let rel = link.opens_new_tab().then_some("noopener noreferrer");
                                view! {
                                    <a
                                        href=link.href
                                        target=target
                                        rel=rel
                                        class=format!("social-link {}", link.kind)
                                    >
                                        <span class="social-icon">{link.icon}</span>
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
