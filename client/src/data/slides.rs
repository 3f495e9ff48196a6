//! Case-study panels for the home-page promotional stack.

#[cfg(test)]
#[path = "slides_test.rs"]
mod slides_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub summary: &'static str,
    pub metrics: [Metric; 2],
    pub cta: &'static str,
    /// Whether the call-to-action leads anywhere yet.
    pub cta_enabled: bool,
    pub link: &'static str,
}

pub static SLIDES: &[Slide] = &[
    Slide {
        title: "Optimizing a Corporate Intranet",
        summary: "Restructured navigation and search for a sprawling internal portal so employees find what they need in fewer clicks.",
        metrics: [
            Metric { label: "Conversion Rate", value: "20%" },
            Metric { label: "User Satisfaction", value: "95%" },
        ],
        cta: "Coming Soon",
        cta_enabled: false,
        link: "#",
    },
    Slide {
        title: "Developing a Mobile Health",
        summary: "Designed and shipped a patient companion app covering appointments, reminders and secure messaging.",
        metrics: [
            Metric { label: "Conversion Rate", value: "18%" },
            Metric { label: "User Satisfaction", value: "92%" },
        ],
        cta: "Explore",
        cta_enabled: true,
        link: "/work",
    },
    Slide {
        title: "Revamping an E-Commerce Website",
        summary: "Rebuilt product discovery and checkout for a mid-size retailer, cutting drop-off across the funnel.",
        metrics: [
            Metric { label: "Usability", value: "85%" },
            Metric { label: "User Retention", value: "70%" },
        ],
        cta: "View case study",
        cta_enabled: true,
        link: "/work",
    },
];
