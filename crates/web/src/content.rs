// =============================================================================
// Portfolio Web - Static Content
// =============================================================================
// Table of Contents:
// 1. Profile
// 2. Skills
// 3. Projects
// 4. Social Links
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Profile
// -----------------------------------------------------------------------------

pub const OWNER: &str = "Supandi";
pub const BRAND: &str = "Suppa";
pub const PROFILE_PICTURE: &str = "./profile-pic.jpg";

pub const HERO_DESCRIPTION: &str = "I'm an Computer Science student passionate about data analysis \
    and artificial intelligence. I love building beautiful, interactive, and meaningful digital \
    experiences.";

pub const ABOUT_INTRO: &str = ", an Informatics Engineering student passionate about technology, \
    creativity, and problem solving. I enjoy turning ideas into functional applications and \
    exploring the fields of artificial intelligence, frontend development, and data handling.";

pub const ABOUT_FOCUS: &str = "My current focus is on building user-friendly interfaces and \
    exploring how AI can enhance learning and healthcare experiences. When I'm not coding, I like \
    to design, learn new tools, and experiment with creative projects.";

// -----------------------------------------------------------------------------
// 2. Skills
// -----------------------------------------------------------------------------

/// One entry of the skills grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub label: &'static str,
    pub logo: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { label: "React.js", logo: "./Logo/react.png" },
    Skill { label: "MySQL", logo: "./Logo/mysql.png" },
    Skill { label: "Python", logo: "./Logo/python.png" },
    Skill { label: "C++", logo: "./Logo/cpp.png" },
    Skill { label: "JavaScript", logo: "./Logo/javascript.png" },
];

// -----------------------------------------------------------------------------
// 3. Projects
// -----------------------------------------------------------------------------

/// Project link flavour; drives the icon and the CSS modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Paper,
    Code,
}

impl LinkKind {
    pub fn class(&self) -> &'static str {
        match self {
            LinkKind::Paper => "project-link paper",
            LinkKind::Code => "project-link github",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Paper => "View Paper",
            LinkKind::Code => "View Code",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            LinkKind::Paper => "📄",
            LinkKind::Code => "⌨",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub href: &'static str,
}

/// A project card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub summary: &'static str,
    pub links: &'static [ProjectLink],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "CodeEasier",
        image: "./Project-Pic/CodeEasier.png",
        image_alt: "CodeEasier App",
        summary: "A gamified coding learning app inspired by Beelingua. Users learn programming \
            through interactive lessons, daily missions, and achievements.",
        links: &[ProjectLink {
            kind: LinkKind::Code,
            href: "https://github.com/Shianndri-Zanniko/CodeEasier",
        }],
    },
    Project {
        title: "Multimodal Sentiment Analysis",
        image: "./Project-Pic/ICCSCI_Certificate.png",
        image_alt: "Multimodal Sentiment Analysis",
        summary: "Participated in the ICCSCI international conference, presenting my research on \
            Multimodal Sentiment Analysis, and received a certification for scientific contribution.",
        links: &[
            ProjectLink {
                kind: LinkKind::Paper,
                href: "/document/MSA_Paper_Supandi.pdf",
            },
            ProjectLink {
                kind: LinkKind::Code,
                href: "https://github.com/EifelLN/MELD-msa",
            },
        ],
    },
    Project {
        title: "Music Genre Classifier",
        image: "./Project-Pic/MusicGenreClassifier.png",
        image_alt: "Music Genre Classifier",
        summary: "Research project that uses Reinforcement Learning to optimize factory production \
            scheduling efficiently.",
        links: &[ProjectLink {
            kind: LinkKind::Code,
            href: "https://github.com/yourusername/ProductionAI",
        }],
    },
    Project {
        title: "Task Manager",
        image: "./Project-Pic/TaskManager.png",
        image_alt: "Production Schedule Optimization",
        summary: "Research project that uses Reinforcement Learning to optimize factory production \
            scheduling efficiently.",
        links: &[ProjectLink {
            kind: LinkKind::Code,
            href: "https://github.com/SupandiZhuo/TaskManagerProject.git",
        }],
    },
];

// -----------------------------------------------------------------------------
// 4. Social Links
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// CSS modifier
    pub kind: &'static str,
    pub icon: &'static str,
}

impl SocialLink {
    /// Mail links open in place, everything else in a new tab.
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/SupandiZhuo",
        kind: "github",
        icon: "⌨",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/supandi-zhuo-ba23762b5",
        kind: "linkedin",
        icon: "in",
    },
    SocialLink {
        label: "Email",
        href: "mailto:supandi@binus.ac.id",
        kind: "email",
        icon: "✉",
    },
];
