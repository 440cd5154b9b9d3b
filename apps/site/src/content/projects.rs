use crate::models::{Animation, ProjectCard};

pub const PROJECTS_HEADING: &str = "🚀 My Machine Learning and MLOps Projects";

pub const PROJECTS_INTRO: &str = "Welcome to my portfolio of machine learning and MLOps projects. Below is an overview of my completed projects, each with detailed descriptions, tools used, and links to the project repositories. I've also included an animated sequence to visually guide you through my projects.";

pub const PROJECTS: &[ProjectCard] = &[
    ProjectCard {
        title: "🎓 Project 1: Student Performance Indicator",
        description: "This is a complete end-to-end machine learning and MLOps project. It involves predicting student performance using various machine learning techniques and deploying the model using MLOps tools.",
        tools: &[
            "Python 🐍", "MySQL 🛢️", "Docker 🐳", "Flask 🌐", "dotenv 🔐", "Machine Learning 🧠",
            "Statistics 📊", "Numpy 🔣", "Scikit-learn 🔍", "Pandas 🐼", "Seaborn 📈", "PyMySQL 🛠️",
            "DVC 🗂️", "MLflow 🚀", "AWS ☁️", "Streamlit 🌐",
        ],
        link: Some("https://github.com/sahilTiwariiii/Dssp"),
    },
    ProjectCard {
        title: "📧 Project 2: Email Spam Classifier",
        description: "A classification project to identify spam emails using natural language processing and machine learning algorithms.",
        tools: &["Python 🐍", "NLTK 📚", "Pandas 🐼", "Numpy 🔣", "Scikit-learn 🔍", "Streamlit 🌐"],
        link: Some("https://github.com/sahilTiwariiii/Email-Spam-Classifier"),
    },
    ProjectCard {
        title: "💻 Project 3: Laptop Price Predictor",
        description: "A regression project to predict laptop prices based on various features such as brand, RAM, storage, etc.",
        tools: &["Python 🐍", "Pandas 🐼", "Numpy 🔣", "Scikit-learn 🔍", "Streamlit 🌐"],
        link: Some("https://github.com/sahilTiwariiii/Laptop-Price-Predictor"),
    },
    ProjectCard {
        title: "🛒 Project 4: Diwali Sale Analysis",
        description: "Diwali Sale Analysis for an Ecommerce Organization",
        tools: &["Python 🐍", "Pandas 🐼", "Numpy 🔣", "Matplotlib 📊", "Seaborn 📈", "Jupyter Notebook 📓"],
        link: Some("https://github.com/sahilTiwariiii/Diwali-analysis"),
    },
    ProjectCard {
        title: "🛒 Project 5: E-commerce Web Application (MERN Stack)",
        description: "A full-stack web application for an e-commerce platform built using the MERN (MongoDB, Express, React, Node.js) stack.",
        tools: &["MongoDB 🍃", "Express 🏢", "React ⚛️", "Node.js 🟢", "JavaScript 📜", "CSS 🎨", "HTML 📝"],
        link: Some("https://github.com/sahilTiwariiii/Ecommerce-famous-MERN-app"),
    },
    ProjectCard {
        title: "📈 Project 6: Unio Marketplace Real Estate Website",
        description: "A web application for real estate listings using Unio Marketplace.",
        tools: &["Python 🐍", "Django 🌐", "JavaScript 📜", "HTML 📝", "CSS 🎨"],
        link: Some("https://github.com/sahilTiwariiii/UnioMarketPlace"),
    },
];

// Placeholder URL; rendered as authored until a real animation is published.
pub const ANIMATION: Animation = Animation {
    heading: "🔄 Animation of Project Sequence",
    caption: "To give you a better understanding of the sequence and flow of my projects, here is an animated overview:",
    image_url: "https://your-animation-link.com/animation.gif",
};
