//! Everything the page says, as typed static data.

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub resume: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Keerthana",
    headline: "Front-End Developer | React Specialist",
    tagline: "Frontend Developer crafting blazing-fast, responsive web apps with React and clean, scalable code.",
    location: "Based in India",
    email: "hello@keerthana.dev",
    phone: "+91 98765 43210",
    github: "https://github.com/thayammalkeerthana",
    linkedin: "https://www.linkedin.com/in/thayammalkeerthana/",
    resume: "/resume.pdf",
};

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone.replace(' ', ""))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub years: &'static str,
    pub grade: &'static str,
}

pub const EDUCATION: Education = Education {
    degree: "B.E. in Computer Engineering",
    school: "Unnamalai Institute of Technology (Anna University)",
    years: "2018–2022",
    grade: "GPA: 8.1/10",
};

pub const BIO: [&str; 2] = [
    "As a Front-End Developer with 3+ years of experience, I specialize in creating scalable, user-focused applications using React.js, JavaScript, and modern UI libraries. I believe in writing clean, maintainable code that not only works beautifully but also scales efficiently.",
    "My journey in web development has taught me that the best applications are built with a deep understanding of user needs, technical excellence, and a collaborative spirit. I'm always eager to learn new technologies and tackle challenging problems.",
];

/// (emoji, strength) pairs shown in the about section.
pub const CORE_STRENGTHS: [(&str, &str); 4] = [
    ("💬", "Communication"),
    ("🤝", "Teamwork"),
    ("🔄", "Adaptability"),
    ("🧠", "Problem-Solving"),
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const QUICK_STATS: [Stat; 3] = [
    Stat {
        value: "3+",
        label: "Years Experience",
    },
    Stat {
        value: "10+",
        label: "Projects Completed",
    },
    Stat {
        value: "100%",
        label: "Client Satisfaction",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Role {
    pub company: &'static str,
    pub company_kind: &'static str,
    pub title: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
    pub tech: &'static [&'static str],
}

pub const EXPERIENCE: Role = Role {
    company: "Mitrahsoft Solutions",
    company_kind: "Private Limited",
    title: "Associate Software Developer",
    period: "May 2022 – Present",
    achievements: &[
        "Built scalable, responsive web applications with React & modern libraries",
        "Led performance tuning initiatives resulting in 40% faster load times",
        "Collaborated with cross-functional teams to deliver features on time",
        "Mentored junior developers and contributed to code review processes",
    ],
    tech: &[
        "React.js",
        "JavaScript",
        "TypeScript",
        "Redux",
        "Tailwind CSS",
        "Git",
    ],
};

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Frontend Development",
        icon: "💻",
        skills: &[
            "React.js",
            "Redux",
            "Redux Thunk",
            "Context API",
            "JavaScript (ES6)",
            "TypeScript",
        ],
    },
    SkillCategory {
        title: "UI/UX & Styling",
        icon: "🎨",
        skills: &[
            "Tailwind CSS",
            "Material UI",
            "Ant Design",
            "Bootstrap",
            "Responsive Design",
        ],
    },
    SkillCategory {
        title: "Backend & Database",
        icon: "🗄️",
        skills: &["Node.js", "Express.js", "MongoDB", "MySQL", "RESTful APIs"],
    },
    SkillCategory {
        title: "Testing & Tools",
        icon: "🧪",
        skills: &[
            "Playwright.js",
            "Git",
            "GitHub",
            "Postman",
            "Vercel",
            "Netlify",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Strength {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const SOFT_SKILLS: [Strength; 4] = [
    Strength {
        name: "Teamwork",
        icon: "👥",
        description: "Collaborative problem-solving",
    },
    Strength {
        name: "Problem Solving",
        icon: "💡",
        description: "Analytical thinking",
    },
    Strength {
        name: "Communication",
        icon: "💬",
        description: "Clear & effective",
    },
    Strength {
        name: "Adaptability",
        icon: "⚡",
        description: "Quick learning & flexibility",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Professional,
    Personal,
}

impl ProjectCategory {
    pub fn heading(&self) -> &'static str {
        match self {
            ProjectCategory::Professional => "Professional Projects",
            ProjectCategory::Personal => "Personal Projects",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub category: ProjectCategory,
    pub link: Option<&'static str>,
    pub achievements: &'static [&'static str],
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "High-Performance Reporting App",
        description: "Built a sophisticated reporting application using React and TypeScript. Implemented virtualization techniques to efficiently render nested JSON data and provide seamless export functionality.",
        tech: &["React", "TypeScript", "Tailwind CSS", "MongoDB", "Node.js"],
        category: ProjectCategory::Professional,
        link: None,
        achievements: &[
            "Implemented data virtualization for handling large datasets",
            "Built custom export functionality for multiple formats",
            "Achieved 99.9% uptime with optimized performance",
        ],
    },
    Project {
        title: "Conference Management Platform",
        description: "Developed a comprehensive conference management system handling both academic and enterprise events with integrated e-commerce capabilities.",
        tech: &["React", "Redux", "Ant Design", "Express.js"],
        category: ProjectCategory::Professional,
        link: None,
        achievements: &[
            "Managed registration for 1000+ attendees",
            "Integrated payment gateway and e-commerce features",
            "Built admin dashboard for event management",
        ],
    },
    Project {
        title: "Weight Loss Community App",
        description: "Created a social platform for weight loss community with React Native mobile app and comprehensive admin panel for community management.",
        tech: &["React", "React Native", "Redux Thunk", "MongoDB"],
        category: ProjectCategory::Professional,
        link: None,
        achievements: &[
            "Built cross-platform mobile application",
            "Implemented social features and community engagement",
            "Developed admin panel for content moderation",
        ],
    },
    Project {
        title: "E2E Testing Automation Suite",
        description: "Designed and implemented comprehensive end-to-end testing framework using TypeScript and Playwright for high reliability across multiple platforms.",
        tech: &["TypeScript", "Playwright", "CI/CD", "Testing"],
        category: ProjectCategory::Professional,
        link: None,
        achievements: &[
            "Achieved 95% test coverage across platforms",
            "Reduced manual testing time by 70%",
            "Integrated with CI/CD pipeline for automated testing",
        ],
    },
    Project {
        title: "Personal Portfolio Website",
        description: "Modern, responsive portfolio website with server rendering, smooth scroll-triggered animations, and optimal performance.",
        tech: &["Rust", "Leptos", "Tailwind CSS", "Responsive Design"],
        category: ProjectCategory::Personal,
        link: Some("#home"),
        achievements: &[
            "Achieved 100% Lighthouse performance score",
            "Implemented smooth animations and transitions",
            "Fully responsive across all devices",
        ],
    },
    Project {
        title: "Smart Todo Application",
        description: "Feature-rich todo application with React Hooks, local storage persistence, and intuitive user interface for task management.",
        tech: &["React", "Hooks", "LocalStorage", "CSS3"],
        category: ProjectCategory::Personal,
        link: None,
        achievements: &[
            "Implemented drag-and-drop functionality",
            "Added data persistence with local storage",
            "Built with modern React patterns and hooks",
        ],
    },
];

pub fn projects_in(category: ProjectCategory) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| p.category == category)
}

#[derive(Debug, Clone)]
pub struct ContactChannel {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: &'static str,
    pub href: String,
}

impl ContactChannel {
    /// Web links open in a new tab; `mailto:` and `tel:` stay in place.
    pub fn opens_new_tab(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub fn contact_channels() -> [ContactChannel; 4] {
    [
        ContactChannel {
            label: "Email",
            icon: "✉️",
            value: PROFILE.email,
            href: PROFILE.mailto(),
        },
        ContactChannel {
            label: "Phone",
            icon: "📞",
            value: PROFILE.phone,
            href: PROFILE.tel(),
        },
        ContactChannel {
            label: "LinkedIn",
            icon: "🔗",
            value: "linkedin.com/in/thayammalkeerthana",
            href: PROFILE.linkedin.to_string(),
        },
        ContactChannel {
            label: "GitHub",
            icon: "🐙",
            value: "github.com/thayammalkeerthana",
            href: PROFILE.github.to_string(),
        },
    ]
}

pub const AVAILABILITY: [&str; 2] = [
    "Available for freelance work",
    "Open to remote opportunities",
];

pub const BUILT_WITH: [&str; 3] = ["Rust", "Leptos", "Tailwind"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_projects_split_by_category() {
        let professional = projects_in(ProjectCategory::Professional).count();
        let personal = projects_in(ProjectCategory::Personal).count();
        assert_eq!(PROJECTS.len(), 6);
        assert_eq!((professional, personal), (4, 2));
    }

    #[test]
    fn test_category_keeps_display_order() {
        let titles = projects_in(ProjectCategory::Personal)
            .map(|p| p.title)
            .collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec!["Personal Portfolio Website", "Smart Todo Application"]
        );
    }

    #[test]
    fn test_contact_links() {
        let channels = contact_channels();
        let email = &channels[0];
        assert_eq!(email.href, "mailto:hello@keerthana.dev");
        assert!(!email.opens_new_tab());

        let phone = &channels[1];
        assert_eq!(phone.href, "tel:+919876543210");
        assert!(!phone.opens_new_tab());

        assert!(channels[2].opens_new_tab());
        assert!(channels[3].opens_new_tab());
    }

    #[test]
    fn test_no_empty_lists() {
        assert!(SKILL_CATEGORIES.iter().all(|c| !c.skills.is_empty()));
        assert!(PROJECTS
            .iter()
            .all(|p| !p.tech.is_empty() && !p.achievements.is_empty()));
        assert_eq!(EXPERIENCE.achievements.len(), 4);
    }
}
