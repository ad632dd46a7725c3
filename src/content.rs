//! Portfolio content: the static data the presentation renders.
//!
//! Content is purely declarative. It is loaded once (from JSON, or the
//! built-in sample) and never mutated; the only thing the rest of the
//! application needs from it besides rendering is the ordered list of section
//! ids it contributes to the registry.

use crate::section::SectionRegistry;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// Section ids and navigation labels in document order.
pub const SECTIONS: [(&str, &str); 9] = [
    ("hero", "Accueil"),
    ("about", "À propos"),
    ("education", "Formation"),
    ("experience", "Expérience"),
    ("skills", "Compétences"),
    ("activities", "Activités"),
    ("volunteer", "Bénévolat"),
    ("certificates", "Certificats"),
    ("contact", "Contact"),
];

#[must_use]
/// Registry of the portfolio's sections in document order.
///
/// # Panics
///
/// Panics if [`SECTIONS`] contains duplicate ids, which it does not.
pub fn registry() -> SectionRegistry {
    SectionRegistry::from_pairs(&SECTIONS).expect("section ids are unique")
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Name and headline shown in the landing section.
pub struct Profile {
    /// Full display name.
    pub name: String,
    /// Headline lines shown under the name.
    pub headline: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Biographical summary and reachability details.
pub struct About {
    /// Free-text introduction paragraph.
    pub summary: String,
    /// Current city and country.
    pub location: String,
    /// Availability note.
    pub availability: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// LinkedIn profile URL.
    pub linkedin: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One diploma or study period.
pub struct Education {
    /// Institution name.
    pub school: String,
    /// Degree or curriculum followed.
    pub degree: String,
    /// Time span of the studies.
    pub period: String,
    /// City and country.
    pub location: String,
    /// Distinction or mention, when any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One professional experience.
pub struct Experience {
    /// Employer name.
    pub company: String,
    /// Role held.
    pub position: String,
    /// Time span of the engagement.
    pub period: String,
    /// City and country, or engagement kind.
    pub location: String,
    /// What the work consisted of.
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A themed group of skills.
pub struct SkillCategory {
    /// Category heading.
    pub title: String,
    /// Individual skills in the category.
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// An extra-academic or volunteer engagement.
pub struct Engagement {
    /// Organization name.
    pub organization: String,
    /// Role held.
    pub position: String,
    /// Time span of the engagement.
    pub period: String,
    /// City and country.
    pub location: String,
    /// What the engagement consisted of.
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A training certificate or job simulation.
pub struct Certificate {
    /// Certificate title.
    pub title: String,
    /// Issuing organization.
    pub issuer: String,
    /// Issue date.
    pub date: String,
    /// What the certificate covers.
    pub description: String,
    /// Issuer's credential identifier.
    pub credential_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Closing call-to-action and contact channels.
pub struct Contact {
    /// Invitation line shown above the channels.
    pub pitch: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// LinkedIn handle or URL.
    pub linkedin: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Everything the portfolio page presents, one field per section.
pub struct Portfolio {
    /// Landing section content.
    pub profile: Profile,
    /// "À propos" section content.
    pub about: About,
    /// Diplomas, newest first.
    pub education: Vec<Education>,
    /// Professional experiences, newest first.
    pub experience: Vec<Experience>,
    /// Skill categories.
    pub skills: Vec<SkillCategory>,
    /// Extra-academic activities.
    pub activities: Vec<Engagement>,
    /// Volunteer engagements.
    pub volunteer: Vec<Engagement>,
    /// Certificates, newest first.
    pub certificates: Vec<Certificate>,
    /// Contact section content.
    pub contact: Contact,
}

impl Portfolio {
    /// Loads a portfolio from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid portfolio
    /// JSON.
    pub fn load(path: &Path) -> io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    #[must_use]
    #[allow(clippy::too_many_lines)]
    /// The built-in sample portfolio.
    pub fn sample() -> Self {
        Self {
            profile: Profile {
                name: "Youness ABBOUBI".to_string(),
                headline: vec![
                    "Business strategy / project management strategy / consulting finance"
                        .to_string(),
                    "Industriel student @ EMI | Entrepreneur student SNEE2025 @ UM5".to_string(),
                ],
            },
            about: About {
                summary: "Élève ingénieur en 3ème année de Génie Industriel à l'École \
                          Mohammadia d'Ingénieurs (EMI), je suis passionné par l'optimisation \
                          des processus et l'analyse de données. Fort d'expériences \
                          enrichissantes chez JESA S.A, McKinsey & Company et Royal Air Maroc, \
                          je recherche une alternance pour approfondir mes compétences en \
                          gestion de projet et stratégie d'entreprise."
                    .to_string(),
                location: "Rabat, Maroc".to_string(),
                availability: "Disponible".to_string(),
                email: "abboubiyouness78@gmail.com".to_string(),
                phone: "+212-690363799".to_string(),
                linkedin: "https://www.linkedin.com/in/youness-abboubi".to_string(),
            },
            education: vec![
                Education {
                    school: "École Mohammadia d'Ingénieurs".to_string(),
                    degree: "Diplôme d'ingénieur en Génie Industriel".to_string(),
                    period: "Sept 2023 – Prévu Juin 2025".to_string(),
                    location: "Rabat, Maroc".to_string(),
                    note: None,
                },
                Education {
                    school: "CPGE Ibn Taymiya".to_string(),
                    degree: "Classes préparatoires aux grandes écoles option : PCSI/PSI*"
                        .to_string(),
                    period: "Sep 2021 – Juil 2023".to_string(),
                    location: "Rabat, Maroc".to_string(),
                    note: Some("Grand Admis".to_string()),
                },
                Education {
                    school: "Lycée BIRANZARAN".to_string(),
                    degree: "Baccalauréat option Sciences Physiques".to_string(),
                    period: "Juil 2021".to_string(),
                    location: "Fkih Ben Salah, Maroc".to_string(),
                    note: Some("Mention Très Bien".to_string()),
                },
            ],
            experience: vec![
                Experience {
                    company: "JESA S.A (JV OCP & WORLEY)".to_string(),
                    position: "Business strategy et project management".to_string(),
                    period: "Juil 2025 – Août 2025".to_string(),
                    location: "Casablanca, Maroc".to_string(),
                    description: "En charge de l'optimisation des investissements (CAPEX) et \
                                  des coûts opérationnels dans le cadre d'un projet de \
                                  transformation stratégique. J'ai conçu et déployé des \
                                  tableaux de bord KPI pour piloter les initiatives et mesurer \
                                  la performance. Mon analyse data-driven a permis \
                                  d'identifier des leviers d'amélioration et de recommander \
                                  des décisions éclairées."
                        .to_string(),
                },
                Experience {
                    company: "Walmart".to_string(),
                    position: "Sales Analytics & Market Strategy Intern".to_string(),
                    period: "Août 2025 – Sep 2025".to_string(),
                    location: "Stage".to_string(),
                    description: "Analyzed sales performance and market trends to support \
                                  data-driven strategic decisions for commercial optimization \
                                  at the world's largest retailer."
                        .to_string(),
                },
                Experience {
                    company: "Royal Air Maroc (RAM)".to_string(),
                    position: "Data Analyst et Assistant PMO – Amélioration Continue"
                        .to_string(),
                    period: "Juil 2024 – Août 2024".to_string(),
                    location: "Casablanca, Maroc".to_string(),
                    description: "Lors de ce stage en optimisation logistique, j'ai analysé \
                                  les flux de pièces aéronautiques via Power BI (15+ KPIs), \
                                  identifiant 20% de délais évitables. En mode Agile, j'ai \
                                  coordonné 3 services pour modéliser des solutions."
                        .to_string(),
                },
            ],
            skills: vec![
                SkillCategory {
                    title: "Compétences Techniques".to_string(),
                    skills: vec![
                        "Microsoft PowerPoint".to_string(),
                        "Excel".to_string(),
                        "Word".to_string(),
                        "Python".to_string(),
                        "Power BI".to_string(),
                    ],
                },
                SkillCategory {
                    title: "Compétences Analytiques".to_string(),
                    skills: vec![
                        "Résolution de problèmes".to_string(),
                        "Techniques analytiques".to_string(),
                        "Data Analysis".to_string(),
                    ],
                },
                SkillCategory {
                    title: "Compétences Relationnelles".to_string(),
                    skills: vec![
                        "Leadership".to_string(),
                        "Communication".to_string(),
                        "Travail d'équipe".to_string(),
                        "Adaptabilité".to_string(),
                    ],
                },
                SkillCategory {
                    title: "Langues".to_string(),
                    skills: vec![
                        "Français: Courant".to_string(),
                        "Anglais: Courant".to_string(),
                        "Arabe: Langue maternelle".to_string(),
                    ],
                },
            ],
            activities: vec![
                Engagement {
                    organization: "JCI (Junior Chamber International) RABAT".to_string(),
                    position: "Public Relations Manager & Board Member".to_string(),
                    period: "Janvier 2024 – Présent".to_string(),
                    location: "Rabat, Maroc".to_string(),
                    description: "Exécuté avec succès plus de 10 séminaires, chacun affichant \
                                  une augmentation moyenne de 68% de l'assistance par rapport \
                                  à l'année précédente, avec plus de 70 participants par \
                                  séminaire. Coordonné plus de 14 ateliers assurant le bon \
                                  déroulement et la satisfaction des participants."
                        .to_string(),
                },
                Engagement {
                    organization: "MDS - Moroccan Data Scientists".to_string(),
                    position: "Membre Actif".to_string(),
                    period: "2024 – Présent".to_string(),
                    location: "Maroc".to_string(),
                    description: "Participation active dans la communauté des data scientists \
                                  marocains, contribution aux projets collaboratifs et \
                                  partage de connaissances en analyse de données."
                        .to_string(),
                },
            ],
            volunteer: vec![
                Engagement {
                    organization: "Club OREMI - EMI".to_string(),
                    position: "Président du club d'orientation".to_string(),
                    period: "Avr 2024 – Juillet 2025".to_string(),
                    location: "EMI, Rabat".to_string(),
                    description: "Direction du club d'orientation de l'École Mohammadia \
                                  d'Ingénieurs, organisation d'événements d'orientation pour \
                                  les étudiants."
                        .to_string(),
                },
                Engagement {
                    organization: "Université Mohammed V".to_string(),
                    position: "Ambassadeur".to_string(),
                    period: "Mars 2025 – Présent".to_string(),
                    location: "Rabat, Maroc".to_string(),
                    description: "Représentation de l'université lors d'événements et \
                                  promotion des programmes académiques."
                        .to_string(),
                },
                Engagement {
                    organization: "Math&Maroc".to_string(),
                    position: "Membre du pôle orientation".to_string(),
                    period: "Janvier 2024 – Présent".to_string(),
                    location: "Maroc".to_string(),
                    description: "Contribution aux activités d'orientation et de soutien aux \
                                  étudiants en mathématiques."
                        .to_string(),
                },
                Engagement {
                    organization: "NIA (National Institutional Acceleration)".to_string(),
                    position: "Human Resources Manager".to_string(),
                    period: "Fév 2024 – Présent".to_string(),
                    location: "Maroc".to_string(),
                    description: "Gestion des ressources humaines et coordination des équipes \
                                  au sein de l'accélérateur institutionnel national."
                        .to_string(),
                },
            ],
            certificates: vec![
                Certificate {
                    title: "Accenture Nordics - Consultant".to_string(),
                    issuer: "Accenture".to_string(),
                    date: "Juillet 2025".to_string(),
                    description: "Programme de formation consultant couvrant les stratégies \
                                  de conseil, l'analyse business et les solutions digitales \
                                  pour les clients nordiques"
                        .to_string(),
                    credential_id: "atd5kZ7AWhsnC2Y8R".to_string(),
                },
                Certificate {
                    title: "BCG - Data for Decision Makers".to_string(),
                    issuer: "BCG X".to_string(),
                    date: "Juillet 2025".to_string(),
                    description: "Formation spécialisée en analyse de données pour la prise \
                                  de décision stratégique, couvrant les outils d'analyse \
                                  avancée et l'interprétation des données business"
                        .to_string(),
                    credential_id: "LdKdGaQTF3wa8XfGS".to_string(),
                },
                Certificate {
                    title: "EY - Financial Accounting Advisory Services (FAAS) Job Simulation"
                        .to_string(),
                    issuer: "EY".to_string(),
                    date: "Juillet 2025".to_string(),
                    description: "Simulation professionnelle en services consultatifs \
                                  comptables et financiers, incluant l'audit, la conformité \
                                  réglementaire et l'analyse financière"
                        .to_string(),
                    credential_id: "EY-FAAS-2025".to_string(),
                },
                Certificate {
                    title: "Certificat JNITI' 2025".to_string(),
                    issuer: "École Mohammedia d'Ingénieurs".to_string(),
                    date: "Mai 2025".to_string(),
                    description: "Certificat de participation aux Journées Nationales de \
                                  l'Ingénieur et des Technologies Industrielles, événement \
                                  phare de l'EMI"
                        .to_string(),
                    credential_id: "EMI-JNITI-2025".to_string(),
                },
            ],
            contact: Contact {
                pitch: "Intéressé par mon profil ? N'hésitez pas à me contacter pour \
                        discuter d'opportunités d'alternance."
                    .to_string(),
                email: "abboubiyouness78@gmail.com".to_string(),
                phone: "+212-690363799".to_string(),
                linkedin: "youness-abboubi".to_string(),
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/content.rs"]
mod tests;
