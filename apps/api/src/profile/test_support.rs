use crate::profile::models::{
    ExperienceEntry, ProfileData, ProjectEntry, ResumeAsset, SkillCategory,
};

/// Small hand-built profile shared by unit tests across modules.
pub fn sample_profile() -> ProfileData {
    ProfileData {
        name: "Ada Lovelace".to_string(),
        role: "Systems Engineer".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+44 20 0000 0000".to_string(),
        location: "London, UK".to_string(),
        about: "Writes programs for analytical engines.".to_string(),
        photo: Some("ada.jpg".to_string()),
        github: Some("https://github.com/ada".to_string()),
        linkedin: Some("https://www.linkedin.com/in/ada".to_string()),
        skills: vec![
            SkillCategory {
                label: "Languages".to_string(),
                skills: vec!["Rust".to_string(), "Go".to_string()],
            },
            SkillCategory {
                label: "Data".to_string(),
                skills: vec!["PostgreSQL".to_string(), "Redis".to_string()],
            },
        ],
        experience: vec![
            ExperienceEntry {
                company: "Analytical Engines Ltd.".to_string(),
                role: "Programmer".to_string(),
                period: "1842 – 1843".to_string(),
                location: Some("London".to_string()),
                bullets: vec!["Published the first algorithm for a machine.".to_string()],
                tech: vec!["Punch cards".to_string()],
            },
            ExperienceEntry {
                company: "Difference Works".to_string(),
                role: "Consultant".to_string(),
                period: "1844 – 1845".to_string(),
                location: None,
                bullets: vec![],
                tech: vec![],
            },
        ],
        projects: vec![ProjectEntry {
            name: "Bernoulli Numbers".to_string(),
            description: "Computes Bernoulli numbers on the Analytical Engine.".to_string(),
            tech: vec!["Note G".to_string()],
            link: None,
            image: Some("bernoulli.png".to_string()),
        }],
        education: vec![],
        certificates: vec![],
        visa_status: "Authorized to work in the UK without sponsorship.".to_string(),
        resume: ResumeAsset {
            file: "ada.pdf".to_string(),
            download_name: "Ada_Lovelace_Resume.pdf".to_string(),
        },
        assistant_name: "Babbage".to_string(),
    }
}
