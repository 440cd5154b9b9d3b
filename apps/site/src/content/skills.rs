use crate::models::{SkillCategory, SkillTool};

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Data Science",
        emoji: "📊",
        summary: Some("Comprehensive knowledge and application of statistics, data analysis, and data visualization techniques."),
        tools: &[],
    },
    SkillCategory {
        name: "Machine Learning",
        emoji: "🤖",
        summary: Some("Proficient in developing and implementing machine learning models using various algorithms."),
        tools: &[],
    },
    SkillCategory {
        name: "Deep Learning",
        emoji: "🧠",
        summary: Some("Skilled in building and training deep neural networks for complex pattern recognition and predictive analytics."),
        tools: &[],
    },
    SkillCategory {
        name: "Natural Language Processing (NLP)",
        emoji: "💬",
        summary: Some("In-depth understanding of NLP techniques for text analysis, sentiment analysis, and language modeling."),
        tools: &[],
    },
    SkillCategory {
        name: "Data Analysis",
        emoji: "📈",
        summary: Some("Expertise in data wrangling, cleaning, and exploratory data analysis to extract meaningful insights."),
        tools: &[],
    },
    SkillCategory {
        name: "Libraries & Frameworks",
        emoji: "🛠️",
        summary: None,
        tools: &[
            SkillTool { name: "scikit-learn", description: "Machine learning library for Python." },
            SkillTool { name: "NumPy", description: "Fundamental package for scientific computing with Python." },
            SkillTool { name: "Seaborn", description: "Statistical data visualization library based on matplotlib." },
            SkillTool { name: "Pandas", description: "Data manipulation and analysis library." },
            SkillTool { name: "TensorFlow", description: "Open-source platform for machine learning." },
        ],
    },
    SkillCategory {
        name: "Programming Languages",
        emoji: "💻",
        summary: None,
        tools: &[
            SkillTool { name: "Python", description: "Advanced proficiency in Python for data science and machine learning." },
            SkillTool { name: "JavaScript", description: "Competence in JavaScript for web development." },
        ],
    },
    SkillCategory {
        name: "Databases",
        emoji: "🛢️",
        summary: None,
        tools: &[
            SkillTool { name: "MongoDB", description: "Experience with NoSQL databases for scalable data storage." },
            SkillTool { name: "SQL", description: "Proficiency in SQL for relational database management." },
        ],
    },
    SkillCategory {
        name: "MLOps Tools",
        emoji: "🚀",
        summary: None,
        tools: &[
            SkillTool { name: "MLflow", description: "Tool for managing the end-to-end machine learning lifecycle." },
            SkillTool { name: "DVC (Data Version Control)", description: "Version control system for machine learning projects." },
            SkillTool { name: "Github Actions", description: "Automation tool for CI/CD pipelines." },
            SkillTool { name: "AWS Cloud", description: "Knowledge of deploying and managing applications on AWS cloud infrastructure." },
        ],
    },
    SkillCategory {
        name: "Other Tools",
        emoji: "🔧",
        summary: None,
        tools: &[
            SkillTool { name: "Evidently AI", description: "Platform for managing and deploying AI models." },
        ],
    },
];
