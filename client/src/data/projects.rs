//! Portfolio projects shown on the work page and the "latest work" strip.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use serde::Serialize;

/// Work-page filter category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[default]
    All,
    WebApplication,
    MobileApp,
    DesignSystem,
    Website,
}

impl Category {
    /// Filter buttons, in display order.
    pub const FILTERS: [Category; 5] =
        [Category::All, Category::WebApplication, Category::MobileApp, Category::DesignSystem, Category::Website];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::WebApplication => "Web Application",
            Self::MobileApp => "Mobile App",
            Self::DesignSystem => "Design System",
            Self::Website => "Website",
        }
    }

    /// Whether a project tagged `project` passes this filter.
    #[must_use]
    pub fn admits(self, project: Category) -> bool {
        self == Self::All || self == project
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    /// Emoji stand-in for a thumbnail.
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub link: &'static str,
    pub latest: bool,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "A modern e-commerce platform with advanced features like real-time inventory, payment processing, and analytics dashboard.",
        category: Category::WebApplication,
        image: "🛒",
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        link: "#",
        latest: true,
    },
    Project {
        id: 2,
        title: "Mobile Banking App",
        description: "Secure mobile banking application with biometric authentication, real-time transactions, and financial insights.",
        category: Category::MobileApp,
        image: "🏦",
        technologies: &["React Native", "Firebase", "TypeScript", "Redux"],
        link: "#",
        latest: true,
    },
    Project {
        id: 3,
        title: "Design System",
        description: "Comprehensive design system with reusable components, documentation, and design tokens for consistent brand experience.",
        category: Category::DesignSystem,
        image: "🎨",
        technologies: &["Figma", "Storybook", "React", "Tailwind CSS"],
        link: "#",
        latest: false,
    },
    Project {
        id: 4,
        title: "AI-Powered Dashboard",
        description: "Intelligent dashboard that uses machine learning to provide insights and predictions for business metrics.",
        category: Category::WebApplication,
        image: "📊",
        technologies: &["Python", "React", "TensorFlow", "PostgreSQL"],
        link: "#",
        latest: true,
    },
    Project {
        id: 5,
        title: "Social Media Platform",
        description: "Feature-rich social media platform with real-time messaging, content sharing, and community features.",
        category: Category::WebApplication,
        image: "📱",
        technologies: &["Next.js", "Socket.io", "Redis", "AWS"],
        link: "#",
        latest: false,
    },
    Project {
        id: 6,
        title: "Portfolio Website",
        description: "Beautiful portfolio website with modern design, smooth animations, and responsive layout.",
        category: Category::Website,
        image: "💼",
        technologies: &["Leptos", "Rust", "WebAssembly", "CSS"],
        link: "#",
        latest: false,
    },
];

/// Projects passing `category`, in catalogue order.
#[must_use]
pub fn by_category(category: Category) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| category.admits(p.category)).collect()
}

/// Projects flagged for the "latest work" strip.
#[must_use]
pub fn latest() -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.latest).collect()
}
