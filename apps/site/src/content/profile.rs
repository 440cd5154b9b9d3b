use crate::models::{Experience, Profile, SocialLink};

pub const PROFILE: Profile = Profile {
    page_title: "Digital CV | Sahil Tiwari",
    page_icon: ":wave:",
    name: "Sahil Tiwari",
    description: "Data Scientist | ML Engineer | MLOps Engineer | AI Engineer | Data Analyst | Deep Learning | NLP.",
    email: "sahiltiwari1222@email.com",
};

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        platform: "LinkedIn",
        url: "https://www.linkedin.com/in/sahil-tiwari-b2269b27a/",
    },
    SocialLink {
        platform: "GitHub",
        url: "https://github.com/sahilTiwariiii",
    },
    SocialLink {
        platform: "Twitter",
        url: "https://twitter.com/sahil_tiwa96610",
    },
];

pub const QUALIFICATIONS: &[&str] = &[
    "✔️ Experience in extracting actionable insights from data",
    "✔️ Strong hands-on experience and knowledge in Python and Data Science",
    "✔️ Good understanding of statistical principles and their respective applications",
    "✔️ Excellent team-player and displaying strong sense of initiative on tasks",
];

pub const EXPERIENCE: Experience = Experience {
    role: "Bambhari (Frontend Developer)",
    summary: "During my internship at Bambhari, I gained valuable experience as a Frontend Developer and contributed to various aspects of web development projects. My responsibilities included:",
    responsibilities: &[
        "Collaborating with team members to design and develop user-friendly interfaces.",
        "Utilizing React.js, HTML, and CSS to create responsive and dynamic frontend applications.",
        "Implementing interactive features and ensuring cross-browser compatibility.",
        "Participating in agile development processes and contributing to team discussions and brainstorming sessions.",
    ],
    link_label: "Bambhari Website",
    link_url: "https://www.linkedin.com/company/bambhari/mycompany/",
};
