//! Narrative guidance shown after a result: strengths, challenges, skills
//! to develop, activities for the career's stream, and related careers.

use crate::insight::FitBand;
use careerfit_core::{Career, Domain};
use serde::Serialize;

/// All narrative guidance for one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub fit: FitBand,
    pub strengths: Vec<&'static str>,
    pub challenges: Vec<&'static str>,
    pub skills_to_develop: Vec<&'static str>,
    pub recommended_activities: Vec<&'static str>,
    pub subject_focus: Vec<String>,
    pub similar_careers: Vec<&'static str>,
}

impl Guidance {
    pub fn for_result(career: &Career, score: u8) -> Self {
        let fit = FitBand::from_score(score);
        Self {
            fit,
            strengths: strengths(fit).to_vec(),
            challenges: challenges(fit).to_vec(),
            skills_to_develop: skills_to_develop(fit).to_vec(),
            recommended_activities: recommended_activities(career.domain).to_vec(),
            subject_focus: subject_focus(career.domain),
            similar_careers: similar_careers(&career.id).to_vec(),
        }
    }
}

pub fn strengths(fit: FitBand) -> &'static [&'static str] {
    match fit {
        FitBand::StrongFit => &[
            "Your natural abilities align strongly with this career",
            "You have the right mindset for the challenges ahead",
            "Your personality traits match what employers look for",
        ],
        FitBand::ModerateFit => &[
            "You have some natural strengths for this career",
            "With focused development, you can excel in this field",
            "Your basic aptitude is well-suited to this path",
        ],
        FitBand::NeedsAlignment => &[
            "You have potential that can be developed",
            "This career may require significant skill building",
            "Consider exploring related careers that might be a better fit",
        ],
    }
}

pub fn challenges(fit: FitBand) -> &'static [&'static str] {
    match fit {
        FitBand::StrongFit => &[
            "Stay updated with industry trends and continuous learning",
            "Build relevant experience through internships or projects",
            "Network with professionals in this field",
        ],
        FitBand::ModerateFit => &[
            "Focus on developing specific skills identified in the detailed insights",
            "Seek mentorship from professionals in this field",
            "Consider additional training or courses to strengthen weak areas",
        ],
        FitBand::NeedsAlignment => &[
            "Significant skill development will be needed in multiple areas",
            "Consider if this career truly aligns with your interests",
            "Explore alternative careers with higher compatibility",
        ],
    }
}

pub fn skills_to_develop(fit: FitBand) -> &'static [&'static str] {
    match fit {
        FitBand::StrongFit => &[
            "Advanced certification in your field",
            "Leadership and management skills",
            "Industry-specific software and tools",
            "Public speaking and presentation skills",
        ],
        FitBand::ModerateFit => &[
            "Core technical skills for this profession",
            "Time management and organization",
            "Communication and teamwork",
            "Problem-solving and critical thinking",
        ],
        FitBand::NeedsAlignment => &[
            "Foundation courses in relevant subjects",
            "Basic soft skills development",
            "Mentorship and guidance from professionals",
            "Exploratory internships or job shadowing",
        ],
    }
}

pub fn recommended_activities(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Pcb => &[
            "Join science clubs and attend medical camps",
            "Volunteer at hospitals or clinics",
            "Read medical journals and case studies",
            "Attend biology/chemistry workshops",
        ],
        Domain::Pcm => &[
            "Participate in coding competitions and hackathons",
            "Build personal projects and contribute to open source",
            "Join robotics or maker clubs",
            "Take online courses in programming and math",
        ],
        Domain::Commerce => &[
            "Start a small business or entrepreneurship project",
            "Learn accounting software and financial analysis",
            "Join business clubs and case study competitions",
            "Read business news and market reports",
        ],
        Domain::Humanities => &[
            "Join debate clubs and public speaking forums",
            "Write for school publications or blogs",
            "Participate in Model UN or mock trials",
            "Volunteer for social causes and NGOs",
        ],
    }
}

pub fn subject_focus(domain: Domain) -> Vec<String> {
    vec![
        format!(
            "Excel in your core subjects related to {}",
            domain.as_str().to_uppercase()
        ),
        "Maintain good grades in English for communication".into(),
        "Take additional courses or tuitions if needed".into(),
        "Stay updated with competitive exam patterns".into(),
    ]
}

pub fn similar_careers(career_id: &str) -> &'static [&'static str] {
    match career_id {
        "doctor" => &["Surgeon", "Medical Researcher", "Pediatrician"],
        "software-engineer" => &["Full-Stack Developer", "DevOps Engineer", "Mobile App Developer"],
        "chartered-accountant" => &["Financial Analyst", "Tax Consultant", "Auditor"],
        "lawyer" => &["Corporate Lawyer", "Civil Rights Attorney", "Legal Consultant"],
        "psychologist" => &["Clinical Psychologist", "Counselor", "Therapist"],
        _ => &["Explore the career library for more options"],
    }
}
