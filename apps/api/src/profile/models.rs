use serde::{Deserialize, Serialize};

/// Immutable portfolio profile. Loaded once at startup and shared read-only
/// via `Arc<ProfileData>` for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub about: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    /// Ordered. The chat skills answer flattens categories in this order.
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    pub visa_status: String,
    pub resume: ResumeAsset,
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,
}

fn default_assistant_name() -> String {
    "Manu".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub label: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub location: Option<String>,
    pub bullets: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    /// Asset file name, resolved against `ASSETS_DIR`.
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub program: String,
    pub period: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub name: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAsset {
    pub file: String,
    pub download_name: String,
}

/// A labelled outbound link in the contact block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

/// Sidebar contact block: identity plus whichever links are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactCard {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub links: Vec<ContactLink>,
}

impl ProfileData {
    /// Every skill name, category order first, then order within the category.
    pub fn all_skills(&self) -> Vec<&str> {
        self.skills
            .iter()
            .flat_map(|c| c.skills.iter().map(String::as_str))
            .collect()
    }

    /// First whitespace-delimited token of the name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn contact(&self) -> ContactCard {
        let links = [("GitHub", &self.github), ("LinkedIn", &self.linkedin)]
            .into_iter()
            .filter_map(|(label, url)| {
                url.as_deref()
                    .filter(|u| !u.trim().is_empty())
                    .map(|u| ContactLink {
                        label: label.to_string(),
                        url: u.to_string(),
                    })
            })
            .collect();

        ContactCard {
            name: self.name.clone(),
            role: self.role.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            links,
        }
    }
}
