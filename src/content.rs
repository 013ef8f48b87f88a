//! Literal page content.
//!
//! Everything the page shows lives here as `'static` records so the
//! components stay markup-only and the image tool can reuse the profile
//! text for the social banner.

use chrono::{DateTime, Datelike};

pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub initials: &'static str,
    pub roles: [&'static str; 2],
    pub company: &'static str,
    pub email: &'static str,
    pub phone_display: &'static str,
    pub phone_dial: &'static str,
    pub linkedin: &'static str,
    pub domain: &'static str,
    pub banner_skills: [&'static str; 3],
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn headline(&self) -> String {
        self.roles.join(" & ")
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone_dial)
    }
}

pub const PROFILE: Profile = Profile {
    first_name: "Susanth",
    last_name: "Jegadeesan",
    initials: "SJ",
    roles: ["QA Test Engineer", "Front-End Developer"],
    company: "Skillmine Technology Pvt Ltd",
    email: "susanthj14@gmail.com",
    phone_display: "+91 8754326992",
    phone_dial: "+918754326992",
    linkedin: "https://www.linkedin.com/in/susanth-j-597713227/",
    domain: "susanthj.in",
    banner_skills: ["Playwright", "Manual Testing", "React.js"],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavLink {
    /// The target element id, i.e. the href without its leading `#`.
    pub fn section_id(&self) -> &'static str {
        self.href.strip_prefix('#').unwrap_or(self.href)
    }
}

pub static NAV_LINKS: [NavLink; 7] = [
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Skills", href: "#skills" },
    NavLink { name: "Experience", href: "#experience" },
    NavLink { name: "Education", href: "#education" },
    NavLink { name: "Certifications", href: "#certifications" },
    NavLink { name: "Contact", href: "#contact" },
];

pub fn section_ids() -> impl Iterator<Item = &'static str> {
    NAV_LINKS.iter().map(NavLink::section_id)
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { value: "1+", label: "Years Experience" },
    Stat { value: "2", label: "Roles Handled" },
    Stat { value: "3", label: "Certifications" },
    Stat { value: "US", label: "Project Domain" },
];

pub static HIGHLIGHTS: [&str; 5] = [
    "Working on US-based financial services project (FCS)",
    "Proficient in Playwright automation with JS & TS",
    "Strong React.js front-end development background",
    "Experience in Agile methodology & defect lifecycle",
    "Open to relocation and remote opportunities",
];

pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: [Skill; 4],
}

pub static SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Testing & QA",
        skills: [
            Skill { name: "Playwright", icon: "devicon-playwright-plain", color: "#2EAD33" },
            Skill { name: "Manual Testing", icon: "extra-beaker", color: "#6366f1" },
            Skill { name: "Functional Testing", icon: "extra-bug", color: "#ef4444" },
            Skill { name: "API Testing", icon: "extra-speed", color: "#f59e0b" },
        ],
    },
    SkillCategory {
        title: "Programming",
        skills: [
            Skill { name: "JavaScript", icon: "devicon-javascript-plain", color: "#F7DF1E" },
            Skill { name: "TypeScript", icon: "devicon-typescript-plain", color: "#3178C6" },
            Skill { name: "HTML5", icon: "devicon-html5-plain", color: "#E34F26" },
            Skill { name: "CSS3", icon: "devicon-css3-plain", color: "#1572B6" },
        ],
    },
    SkillCategory {
        title: "Frameworks & Tools",
        skills: [
            Skill { name: "React.js", icon: "devicon-react-original", color: "#61DAFB" },
            Skill { name: "Node.js", icon: "devicon-nodejs-plain", color: "#339933" },
            Skill { name: "NestJS", icon: "devicon-nestjs-plain", color: "#E0234E" },
            Skill { name: "MongoDB", icon: "devicon-mongodb-plain", color: "#47A248" },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestingType {
    pub name: &'static str,
    pub hint: &'static str,
}

pub static TESTING_TYPES: [TestingType; 6] = [
    TestingType {
        name: "Functional Testing",
        hint: "Verifies each feature works according to business requirements and expected behavior.",
    },
    TestingType {
        name: "Regression Testing",
        hint: "Re-runs existing tests after code changes to ensure no existing functionality is broken.",
    },
    TestingType {
        name: "Smoke Testing",
        hint: "Quick high-level checks on critical paths to confirm the build is stable before full testing.",
    },
    TestingType {
        name: "UI Testing",
        hint: "Validates visual elements, layouts, responsiveness, and user interactions across the application.",
    },
    TestingType {
        name: "API Testing",
        hint: "Tests REST API endpoints for correct responses, status codes, and data integrity.",
    },
    TestingType {
        name: "Cross-browser Testing",
        hint: "Ensures consistent behavior and appearance across Chrome, Firefox, Safari, and Edge.",
    },
];

pub static METHODOLOGIES: [&str; 3] = ["Agile", "SDLC", "Defect Lifecycle Management"];

pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub current: bool,
    pub points: &'static [&'static str],
    pub tags: &'static [&'static str],
}

pub static JOBS: [Job; 2] = [
    Job {
        title: "Manual QA Test Engineer",
        company: "Skillmine Technology Pvt Ltd",
        period: "Mar 2025 - Present",
        current: true,
        points: &[
            "Working on US-based FCS (First Credit Service) project performing comprehensive QA testing",
            "Perform manual testing of enterprise web applications including functional, smoke, regression, and UI testing",
            "Design and execute comprehensive test cases for complex business scenarios",
            "Implement automation testing using Playwright framework with JavaScript and TypeScript",
            "Identify, log, and track defects through complete lifecycle using defect management tools",
            "Collaborate with development team in Agile environment to ensure quality deliverables",
        ],
        tags: &["Playwright", "JavaScript", "TypeScript", "Manual Testing", "Agile"],
    },
    Job {
        title: "Front-End Developer",
        company: "Skillmine Technology Pvt Ltd",
        period: "Dec 2023 - Sep 2024",
        current: false,
        points: &[
            "Developed CRM application features using React.js with focus on performance optimization",
            "Implemented frontend integration and enhanced UI/UX across multiple application modules",
            "Conducted basic testing and gathered user feedback to improve application quality",
        ],
        tags: &["React.js", "HTML", "CSS", "JavaScript", "UI/UX"],
    },
];

pub struct Degree {
    pub title: &'static str,
    pub school: &'static str,
    pub location: &'static str,
    pub period: &'static str,
}

pub const DEGREE: Degree = Degree {
    title: "B.Tech in Mechanical Engineering",
    school: "Kalasalingam Academy of Research and Education",
    location: "Srivilliputhur",
    period: "June 2016 - April 2020",
};

pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub static CERTIFICATIONS: [Certification; 3] = [
    Certification {
        title: "Playwright: Web Automation Testing From Zero to Hero",
        issuer: "Skillzen",
        year: "2025",
        icon: "devicon-playwright-plain",
        color: "#2EAD33",
    },
    Certification {
        title: "React.js - The Complete Guide (Hooks, React Router, Vite)",
        issuer: "Udemy",
        year: "2024",
        icon: "devicon-react-original",
        color: "#61DAFB",
    },
    Certification {
        title: "Node.js - The Complete Guide (CRUD Operations)",
        issuer: "Udemy",
        year: "2024",
        icon: "devicon-nodejs-plain",
        color: "#339933",
    },
];

/// Where a contact or social link points. Mail and phone targets are built
/// from [`PROFILE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Email,
    Phone,
    Web(&'static str),
}

impl Link {
    pub fn href(self) -> String {
        match self {
            Self::Email => PROFILE.mailto(),
            Self::Phone => PROFILE.tel(),
            Self::Web(url) => url.to_string(),
        }
    }

    pub fn is_external(self) -> bool {
        matches!(self, Self::Web(url) if is_external(url))
    }
}

pub struct ContactLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub link: Option<Link>,
}

pub static CONTACT_LINKS: [ContactLink; 4] = [
    ContactLink {
        icon: "extra-email",
        label: "Email",
        value: PROFILE.email,
        link: Some(Link::Email),
    },
    ContactLink {
        icon: "extra-phone",
        label: "Phone",
        value: PROFILE.phone_display,
        link: Some(Link::Phone),
    },
    ContactLink {
        icon: "devicon-linkedin-plain",
        label: "LinkedIn",
        value: "linkedin.com/in/susanth-j",
        link: Some(Link::Web(PROFILE.linkedin)),
    },
    ContactLink {
        icon: "extra-location",
        label: "Availability",
        value: "Open to Remote & Relocation",
        link: None,
    },
];

pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub link: Link,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: "extra-email",
        label: "Email",
        link: Link::Email,
    },
    SocialLink {
        icon: "extra-phone",
        label: "Phone",
        link: Link::Phone,
    },
    SocialLink {
        icon: "devicon-linkedin-plain",
        label: "LinkedIn",
        link: Link::Web(PROFILE.linkedin),
    },
];

/// Links leaving the site open in a new tab.
pub fn is_external(href: &str) -> bool {
    href.starts_with("http")
}

/// Contact form fields as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// `mailto:` link that opens the visitor's mail client with the message
    /// addressed to the site owner.
    pub fn mailto_link(&self) -> String {
        let subject = format!("Portfolio Contact from {}", self.name);
        let body = format!("{}\n\nFrom: {} ({})", self.message, self.name, self.email);
        format!(
            "mailto:{}?subject={}&body={}",
            PROFILE.email,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

/// Year shown in the footer, taken from the RFC 3339 build timestamp so
/// server and browser agree.
pub fn copyright_year(build_time: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(build_time)
        .ok()
        .map(|t| t.year())
}

pub const BUILD_TIME: &str = env!("BUILD_TIME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_target_sections() {
        let ids = section_ids().collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![
                "home",
                "about",
                "skills",
                "experience",
                "education",
                "certifications",
                "contact"
            ]
        );
    }

    #[test]
    fn test_profile_strings() {
        assert_eq!(PROFILE.full_name(), "Susanth Jegadeesan");
        assert_eq!(
            PROFILE.headline(),
            "QA Test Engineer & Front-End Developer"
        );
        assert_eq!(PROFILE.mailto(), "mailto:susanthj14@gmail.com");
        assert_eq!(PROFILE.tel(), "tel:+918754326992");
    }

    #[test]
    fn test_external_links() {
        assert!(is_external(PROFILE.linkedin));
        assert!(!is_external("mailto:someone@example.com"));
        assert!(!is_external("#contact"));

        // only the availability row has no link
        let without_link = CONTACT_LINKS
            .iter()
            .filter(|c| c.link.is_none())
            .map(|c| c.label)
            .collect::<Vec<_>>();
        assert_eq!(without_link, vec!["Availability"]);
    }

    #[test]
    fn test_links_come_from_profile() {
        assert_eq!(Link::Email.href(), "mailto:susanthj14@gmail.com");
        assert_eq!(Link::Phone.href(), "tel:+918754326992");
        assert!(!Link::Email.is_external());
        assert!(!Link::Phone.is_external());
        assert!(Link::Web(PROFILE.linkedin).is_external());
        assert!(!Link::Web("#contact").is_external());

        // contact rows and social icons agree on every target they share
        for social in &SOCIAL_LINKS {
            let row = CONTACT_LINKS
                .iter()
                .find(|c| c.label == social.label)
                .expect("every social link has a contact row");
            assert_eq!(row.link, Some(social.link));
        }
        assert_eq!(CONTACT_LINKS[0].value, PROFILE.email);
        assert_eq!(CONTACT_LINKS[1].value, PROFILE.phone_display);
    }

    #[test]
    fn test_mailto_link() {
        let form = ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello & welcome".to_string(),
        };
        let link = form.mailto_link();
        assert!(link.starts_with("mailto:susanthj14@gmail.com?subject="));
        assert!(link.contains("subject=Portfolio%20Contact%20from%20Jane%20Doe"));
        assert!(link.contains(
            "body=Hello%20%26%20welcome%0A%0AFrom%3A%20Jane%20Doe%20%28jane%40example.com%29"
        ));
    }

    #[test]
    fn test_copyright_year() {
        assert_eq!(copyright_year("2026-10-19T08:30:00+00:00"), Some(2026));
        assert_eq!(copyright_year("not a timestamp"), None);
        assert!(copyright_year(BUILD_TIME).is_some());
    }

    #[test]
    fn test_only_latest_job_is_current() {
        assert!(JOBS[0].current);
        assert!(JOBS.iter().filter(|j| j.current).count() == 1);
    }
}
