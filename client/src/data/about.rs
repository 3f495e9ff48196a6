//! About-page content: résumé entries, skills, timeline and testimonials.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResumeEntry {
    pub title: &'static str,
    pub place: &'static str,
    pub period: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub year: u16,
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

pub static EXPERIENCE: &[ResumeEntry] = &[
    ResumeEntry { title: "Frontend Developer", place: "Tech Solutions Inc.", period: "2022 – Present" },
    ResumeEntry { title: "UI/UX Designer", place: "Creative Studio", period: "2020 – 2022" },
    ResumeEntry { title: "Junior Web Developer", place: "Startup Hub", period: "2018 – 2020" },
];

pub static EDUCATION: &[ResumeEntry] = &[
    ResumeEntry { title: "BS Computer Science", place: "NUST", period: "2017 – 2021" },
    ResumeEntry { title: "Intermediate (Pre-Engineering)", place: "Punjab Group of Colleges", period: "2015 – 2017" },
    ResumeEntry { title: "Matriculation", place: "Allied School", period: "2013 – 2015" },
];

pub static SKILLS: &[&str] = &[
    "UI/UX Design",
    "Frontend Development",
    "React & Next.js",
    "TypeScript",
    "Tailwind CSS",
    "Figma & Adobe Creative Suite",
];

/// Career milestones, oldest first.
pub static TIMELINE: &[Milestone] = &[
    Milestone { year: 2019, title: "Started Web Development", detail: "First client sites and a lot of late-night CSS." },
    Milestone { year: 2021, title: "Joined Tech Company", detail: "Moved into product work on a cross-functional team." },
    Milestone { year: 2023, title: "Freelance Full-Stack Developer", detail: "Shipping end-to-end builds for startups and agencies." },
    Milestone { year: 2025, title: "Expanding Horizons", detail: "Taking on larger engagements and mentoring." },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Product Manager @ StartupX",
        quote: "Delivered a polished product ahead of schedule and kept everyone in the loop.",
    },
    Testimonial {
        name: "James Lee",
        role: "CTO @ TechNova",
        quote: "Clean code, thoughtful architecture and great instincts for the user.",
    },
    Testimonial {
        name: "Emily Carter",
        role: "Designer @ CreativeHub",
        quote: "A rare developer who cares about every pixel as much as we do.",
    },
];
