//! Static portfolio used whenever the backend is unavailable.
//!
//! The value is complete: every top-level field is set, and the optional
//! lists are present-but-empty so downstream renderers see the same shape the
//! backend would produce.

use once_cell::sync::Lazy;

use crate::models::portfolio::{
    Bullet, Education, PortfolioSnapshot, Profile, Project, SkillGroup, SkillItem, SocialLink,
};

static FALLBACK: Lazy<PortfolioSnapshot> = Lazy::new(build_fallback);

/// The fallback snapshot, built once on first use.
pub fn fallback_snapshot() -> &'static PortfolioSnapshot {
    &FALLBACK
}

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

fn skill(id: i64, name: &str, proficiency: i32, order: i32) -> SkillItem {
    SkillItem {
        id,
        name: name.to_string(),
        proficiency,
        order: Some(order),
    }
}

fn bullets(first_id: i64, lines: &[&str]) -> Vec<Bullet> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| Bullet {
            id: first_id + i as i64,
            text: line.to_string(),
            order: Some(i as i32 + 1),
        })
        .collect()
}

fn project(
    id: i64,
    title: &str,
    slug: &str,
    technologies: &[&str],
    github_url: &str,
    bullets: Vec<Bullet>,
) -> Project {
    Project {
        id,
        title: title.to_string(),
        slug: text(slug),
        description: None,
        short_description: None,
        featured_image: None,
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        live_url: None,
        github_url: text(github_url),
        is_featured: true,
        is_published: true,
        order: Some(id as i32),
        bullets,
    }
}

fn build_fallback() -> PortfolioSnapshot {
    let profile = Profile {
        id: 1,
        full_name: text("Djousse Tedongmene Alex"),
        title: text("Étudiant Master Actuariat & Finance Quantitative"),
        subtitle: text("Futur Actuaire & Data Scientist"),
        bio: text(
            "Étudiant en Master Sciences Actuarielles (ULB) avec un fort background \
             mathématique (UNamur). Passionné par la modélisation stochastique et \
             l'ingénierie logicielle appliquée à la finance. Rigueur théorique et \
             compétences pratiques en C++ et Python.",
        ),
        short_bio: text(
            "Étudiant en Master Sciences Actuarielles (ULB) avec un fort background mathématique.",
        ),
        email: text("alextedongmene@gmail.com"),
        phone: None,
        location: text("7011 Ghlin, Belgique"),
        avatar: None,
        resume: None,
        is_available_for_hire: true,
        social_links: vec![SocialLink {
            id: 1,
            platform: "GitHub".to_string(),
            url: "https://github.com/aldjoted".to_string(),
            icon: text("github"),
            icon_class: text("fab fa-github"),
            order: Some(1),
        }],
    };

    let skills = vec![
        SkillGroup {
            id: 1,
            name: "Mathématiques & Finance".to_string(),
            icon: text("fas fa-chart-line"),
            order: Some(1),
            items: vec![
                skill(1, "Modélisation Stochastique (MCMC)", 90, 1),
                skill(2, "Optimisation", 85, 2),
                skill(3, "Théorie du Risque", 80, 3),
                skill(4, "Analyse Spectrale (Koopman)", 75, 4),
            ],
        },
        SkillGroup {
            id: 2,
            name: "Développement".to_string(),
            icon: text("fas fa-code"),
            order: Some(2),
            items: vec![
                skill(5, "C++ (OOP)", 85, 1),
                skill(6, "Python (Numpy, Pandas, Sklearn)", 90, 2),
                skill(7, "Julia", 70, 3),
                skill(8, "MATLAB", 75, 4),
            ],
        },
        SkillGroup {
            id: 3,
            name: "Outils".to_string(),
            icon: text("fas fa-tools"),
            order: Some(3),
            items: vec![
                skill(9, "Git", 85, 1),
                skill(10, "Linux", 80, 2),
                skill(11, "LaTeX", 90, 3),
            ],
        },
    ];

    let projects = vec![
        project(
            1,
            "Framework C++ Modélisation Épidémique (SEPAIHRD)",
            "sepaihrd",
            &["C++", "OOP", "MCMC", "Optimisation mémoire"],
            "https://github.com/aldjoted/Mathematical-Modeling-Of-Infectious-Diseases-V1",
            bullets(
                1,
                &[
                    "Conception d'une architecture Orientée Objet (Factory Pattern) pour simuler des dynamiques stochastiques.",
                    "Implémentation d'algorithmes de calibration : MCMC (Metropolis-Hastings) et Particle Swarm Optimization (PSO).",
                    "Optimisation de la gestion mémoire pour des simulations Monte-Carlo.",
                ],
            ),
        ),
        project(
            2,
            "Analyse Data-Driven (Koopman/EDMD)",
            "koopman-edmd",
            &["MATLAB", "Koopman", "EDMD", "Marchés financiers"],
            "https://www.dropbox.com/scl/fo/gk7u4tg2eicwpmgedfep4/AN7WRkEu9yee6olaEJCt6GU?rlkey=qwvapkfz5ofc54ayqxdmrt2h3&st=aq9c3ffi&dl=0",
            bullets(
                4,
                &[
                    "Application de la théorie de l'opérateur de Koopman pour étudier la dynamique des marchés financiers.",
                    "Utilisation de l'algorithme EDMD pour identifier des structures cohérentes (\"Eigen-portfolios\").",
                    "Comparaison des approches linéaires (DMD) et non-linéaires pour l'analyse de séries temporelles.",
                ],
            ),
        ),
        project(
            3,
            "Solvers Itératifs (GMRES)",
            "gmres",
            &["Julia", "Python", "GMRES", "Algèbre linéaire numérique"],
            "https://github.com/aldjoted/GMRES",
            bullets(
                7,
                &[
                    "Implémentation de l'algorithme GMRES pour la résolution de systèmes linéaires de grande dimension.",
                    "Étude de l'impact du préconditionnement (ILU) sur la vitesse de convergence.",
                    "Analyse de la stabilité numérique comparativement aux méthodes directes.",
                ],
            ),
        ),
        project(
            4,
            "Optimisation d'Horaires (Algorithmes Génétiques)",
            "genetic-algorithms",
            &["Python", "Algorithmes génétiques", "Optimisation"],
            "https://github.com/aldjoted/GeneticAgorithms",
            bullets(
                10,
                &[
                    "Développement d'un algorithme pour la génération d'horaires sous contraintes multiples.",
                    "Mise en œuvre d'opérateurs génétiques (sélection, croisement, mutation) et test de paramètres.",
                ],
            ),
        ),
    ];

    let education = vec![
        Education {
            id: 1,
            institution: "Université Libre de Bruxelles (ULB)".to_string(),
            degree: "Master en Sciences Actuarielles".to_string(),
            field_of_study: text("Sciences Actuarielles"),
            start_date: text("2025-01-01"),
            end_date: None,
            is_current: true,
            ..Default::default()
        },
        Education {
            id: 2,
            institution: "Université de Namur (UNamur)".to_string(),
            degree: "Bachelier en Sciences Mathématiques".to_string(),
            field_of_study: text("Sciences Mathématiques"),
            start_date: text("2021-01-01"),
            end_date: text("2025-01-01"),
            is_current: false,
            ..Default::default()
        },
    ];

    PortfolioSnapshot {
        profile: Some(profile),
        skills,
        projects,
        education,
        experiences: Some(Vec::new()),
        certifications: Some(Vec::new()),
        languages: Some(Vec::new()),
        interests: Some(Vec::new()),
        custom_sections: Some(Vec::new()),
    }
}
