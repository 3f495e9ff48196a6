//! Contact details, offered services and footer links.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static CHANNELS: &[ContactChannel] = &[
    ContactChannel { label: "Email", value: "hello@yourportfolio.com", href: "mailto:hello@yourportfolio.com" },
    ContactChannel { label: "Phone", value: "+1 (555) 123-4567", href: "tel:+15551234567" },
    ContactChannel { label: "Location", value: "San Francisco, CA", href: "#" },
];

pub static SERVICES: &[&str] = &["Web Development", "UI/UX Design", "Consulting"];

pub static FOOTER_LINKS: &[ExternalLink] = &[
    ExternalLink { label: "LinkedIn", href: "https://linkedin.com" },
    ExternalLink { label: "Mail", href: "mailto:someone@example.com" },
    ExternalLink { label: "Website", href: "https://yourwebsite.com" },
    ExternalLink { label: "Nicey Studio", href: "https://niceystudio.com" },
];

pub const COPYRIGHT: &str = "© Portfolio 2025";
