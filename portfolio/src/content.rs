//! Static page content: who the page is about, what they have built, and where
//! to find them. Nothing here changes at runtime.

/// A bundled icon glyph.
///
/// Glyphs are 24×24 stroke icons drawn with `currentColor`, so they pick up
/// the text color of whatever contains them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Github,
    Linkedin,
    Mail,
    ExternalLink,
    Code,
    Palette,
    Zap,
    ArrowRight,
    Download,
    Menu,
    Close,
}

impl Icon {
    pub const ALL: [Icon; 11] = [
        Icon::Github,
        Icon::Linkedin,
        Icon::Mail,
        Icon::ExternalLink,
        Icon::Code,
        Icon::Palette,
        Icon::Zap,
        Icon::ArrowRight,
        Icon::Download,
        Icon::Menu,
        Icon::Close,
    ];

    /// The SVG child elements of this glyph, to be placed inside a
    /// `<svg viewBox="0 0 24 24">`.
    pub const fn svg_body(self) -> &'static str {
        match self {
            Icon::Github => concat!(
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
                r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#,
            ),
            Icon::Linkedin => concat!(
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
                r#"<rect width="4" height="12" x="2" y="9"/>"#,
                r#"<circle cx="4" cy="4" r="2"/>"#,
            ),
            Icon::Mail => concat!(
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
                r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            ),
            Icon::ExternalLink => concat!(
                r#"<path d="M15 3h6v6"/>"#,
                r#"<path d="M10 14 21 3"/>"#,
                r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#,
            ),
            Icon::Code => concat!(
                r#"<polyline points="16 18 22 12 16 6"/>"#,
                r#"<polyline points="8 6 2 12 8 18"/>"#,
            ),
            Icon::Palette => concat!(
                r#"<circle cx="13.5" cy="6.5" r=".5" fill="currentColor"/>"#,
                r#"<circle cx="17.5" cy="10.5" r=".5" fill="currentColor"/>"#,
                r#"<circle cx="8.5" cy="7.5" r=".5" fill="currentColor"/>"#,
                r#"<circle cx="6.5" cy="12.5" r=".5" fill="currentColor"/>"#,
                r#"<path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z"/>"#,
            ),
            Icon::Zap => {
                r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#
            }
            Icon::ArrowRight => concat!(
                r#"<path d="M5 12h14"/>"#,
                r#"<path d="m12 5 7 7-7 7"/>"#,
            ),
            Icon::Download => concat!(
                r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>"#,
                r#"<polyline points="7 10 12 15 17 10"/>"#,
                r#"<line x1="12" x2="12" y1="15" y2="3"/>"#,
            ),
            Icon::Menu => concat!(
                r#"<line x1="4" x2="20" y1="12" y2="12"/>"#,
                r#"<line x1="4" x2="20" y1="6" y2="6"/>"#,
                r#"<line x1="4" x2="20" y1="18" y2="18"/>"#,
            ),
            Icon::Close => concat!(
                r#"<path d="M18 6 6 18"/>"#,
                r#"<path d="m6 6 12 12"/>"#,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    /// Tailwind gradient stops used for the card's hover tint.
    pub color_theme: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// 0–100; anything above is drawn as a full bar.
    pub proficiency: u8,
    pub icon: Icon,
}

impl Skill {
    pub fn bar_width(&self) -> String {
        format!("{}%", self.proficiency.min(100))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: &'static str,
    /// Accessible name for the icon-only link.
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub bio: [&'static str; 2],
    pub email: &'static str,
    pub contact_headline: &'static str,
    pub contact_pitch: &'static str,
    pub footer_tagline: &'static str,
    pub copyright_year: u16,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn copyright(&self) -> String {
        format!(
            "© {} {}. {}",
            self.copyright_year, self.name, self.footer_tagline
        )
    }
}

pub const PROFILE: Profile = Profile {
    name: "Gautam Jain",
    headline: "Aspiring Full Stack Developer",
    summary: "Hands-on experience building responsive, secure, and AI-powered web applications using React, Next.js, Node.js, and Tailwind CSS.",
    bio: [
        "I’m an aspiring full-stack developer with hands-on experience building secure, scalable, and AI-powered web applications using React, Next.js, Node.js, and Tailwind CSS. I enjoy turning complex challenges into intuitive, functional digital solutions.",
        "My recent experience includes an internship at CodeFire Technologies, where I contributed to enhancing an internal project management system with secure authentication, real-time updates, and performance optimizations. I also developed AI-integrated projects like a finance platform and a smart chatbot using Gemini API. I’m passionate about clean code, emerging technologies, and creating products that make a difference. Outside of development, I explore AI concepts, write blogs, and enjoy researching financial strategies.",
    ],
    email: "jaingautam10092004@gmail.com",
    contact_headline: "Let's Create Something Amazing",
    contact_pitch: "Ready to bring your vision to life? Let's collaborate and build something extraordinary together.",
    footer_tagline: "Crafted with passion and code.",
    copyright_year: 2025,
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "AI Finance Platform",
        description: "Full-stack personal finance management app with AI-powered expense tracking, budgeting, and receipt scanning using Gemini AI.",
        technologies: &["Next.js", "Tailwind CSS", "Node.js", "Gemini AI"],
        color_theme: "from-purple-500 to-cyan-500",
    },
    Project {
        title: "Chatbot with Gemini Integration",
        description: "React-based AI chat app using Vite for performance and Gemini AI for intelligent responses, secured with .env configs.",
        technologies: &["React", "Vite", "Node.js", "Gemini AI"],
        color_theme: "from-blue-500 to-teal-500",
    },
    Project {
        title: "Project Management System (CodeFire)",
        description: "Secure full-stack PMS and employee management system using React.js, Node.js (Express), and MySQL with JWT auth, pagination, bug fixes, and real-time notifications.",
        technologies: &["React.js", "Node.js", "Express", "MySQL"],
        color_theme: "from-orange-500 to-red-500",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "React / Next.js",
        proficiency: 90,
        icon: Icon::Code,
    },
    Skill {
        name: "Node.js / Express",
        proficiency: 85,
        icon: Icon::Code,
    },
    Skill {
        name: "Tailwind CSS / Vite",
        proficiency: 80,
        icon: Icon::Palette,
    },
    Skill {
        name: "AI Integration (Gemini)",
        proficiency: 75,
        icon: Icon::Zap,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::Github,
        href: "https://github.com/GautamJain2004",
        label: "GitHub",
    },
    SocialLink {
        icon: Icon::Linkedin,
        href: "https://www.linkedin.com/in/gautam-jain-b27358375/",
        label: "LinkedIn",
    },
    SocialLink {
        icon: Icon::Mail,
        href: "mailto:jaingautam10092004@gmail.com",
        label: "Email",
    },
];
