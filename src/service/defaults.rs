use chrono::Utc;
use uuid::Uuid;

use crate::models::{
    prize::WheelSegment,
    quiz::QuizQuestion,
};

/// Bundled datasets used when the content store holds no active rows.
/// Loaded once at startup; question ids are stable for the process lifetime,
/// which is all a quiz session needs.
pub struct GameDefaults {
    pub questions: Vec<QuizQuestion>,
    pub segments: Vec<WheelSegment>,
}

impl GameDefaults {
    pub fn load() -> Self {
        Self {
            questions: default_questions(),
            segments: default_segments(),
        }
    }
}

fn question(text: &str, options: [&str; 4], correct: i32, order: i32) -> QuizQuestion {
    QuizQuestion {
        id: Uuid::new_v4(),
        question: text.to_string(),
        option_1: options[0].to_string(),
        option_2: options[1].to_string(),
        option_3: options[2].to_string(),
        option_4: options[3].to_string(),
        correct_option: correct + 1,
        is_active: true,
        display_order: order,
        created_at: Utc::now(),
    }
}

fn default_questions() -> Vec<QuizQuestion> {
    let pool = [
        (
            "L'aquaponie combine...",
            [
                "L'élevage de poissons et la culture de plantes",
                "L'élevage de poulets et la culture de riz",
                "La pêche en mer et l'agriculture",
                "L'apiculture et le maraîchage",
            ],
            0,
        ),
        (
            "Quel pourcentage d'eau économise l'aquaponie par rapport à l'agriculture traditionnelle ?",
            [
                "Environ 30%",
                "Environ 50%",
                "Jusqu'à 90%",
                "Environ 10%",
            ],
            2,
        ),
        (
            "Les produits Aqua-Racine sont...",
            [
                "Traités aux pesticides",
                "Importés d'Europe",
                "100% bio et sans pesticides",
                "Génétiquement modifiés",
            ],
            2,
        ),
        (
            "Aqua-Racine propose...",
            [
                "Uniquement des poissons",
                "Des systèmes clés en main, formations et produits frais",
                "Uniquement des formations en ligne",
                "Des équipements de pêche",
            ],
            1,
        ),
        (
            "En aquaponie, les plantes se nourrissent grâce à...",
            [
                "Des engrais chimiques",
                "L'eau de pluie uniquement",
                "Les déjections des poissons transformées en nutriments",
                "De l'air comprimé",
            ],
            2,
        ),
        (
            "Aqua-Racine a été fondée par...",
            [
                "Un groupe d'investisseurs étrangers",
                "Trois jeunes femmes ivoiriennes",
                "Le gouvernement ivoirien",
                "Une université américaine",
            ],
            1,
        ),
        (
            "L'aquaponie est considérée comme...",
            [
                "Une technique polluante",
                "Une agriculture non durable",
                "Une solution d'agriculture durable et écologique",
                "Une méthode interdite",
            ],
            2,
        ),
        (
            "Quel type de poisson peut-on élever en aquaponie ?",
            [
                "Uniquement des poissons d'eau salée",
                "Des tilapias, silures et autres poissons d'eau douce",
                "Uniquement des poissons d'ornement",
                "Des requins",
            ],
            1,
        ),
        (
            "L'hydroponie est...",
            [
                "L'élevage de chevaux",
                "La culture de plantes hors-sol dans l'eau",
                "Une technique de soudure",
                "Un type de massage",
            ],
            1,
        ),
        (
            "Aqua-Racine livre ses produits...",
            [
                "Uniquement en Europe",
                "Par voie maritime en 3 mois",
                "Directement à domicile en Côte d'Ivoire",
                "Uniquement au siège de l'entreprise",
            ],
            2,
        ),
        (
            "Quels légumes peut-on cultiver en aquaponie ?",
            [
                "Aucun légume",
                "Salades, tomates, herbes aromatiques, etc.",
                "Uniquement des pommes de terre",
                "Uniquement du maïs",
            ],
            1,
        ),
        (
            "L'aquaponie utilise...",
            [
                "Beaucoup de pesticides",
                "Des engrais chimiques intensifs",
                "Un cycle naturel sans produits chimiques",
                "De l'eau de mer",
            ],
            2,
        ),
    ];

    pool.into_iter()
        .enumerate()
        .map(|(i, (text, options, correct))| question(text, options, correct, i as i32))
        .collect()
}

fn segment(label: &str, color: &str, icon: &str, prize_type: &str, is_winning: bool) -> WheelSegment {
    WheelSegment {
        label: label.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
        prize_type: prize_type.to_string(),
        is_winning,
    }
}

/// Alternating win/lose layout shown when no prizes are configured.
fn default_segments() -> Vec<WheelSegment> {
    vec![
        segment("10%", "#4caf50", "🎁", "discount", true),
        segment("Pas de chance", "#f44336", "😔", "lost", false),
        segment("15%", "#2196f3", "🎁", "discount", true),
        segment("Pas de chance", "#ff9800", "😔", "lost", false),
        segment("Livraison", "#9c27b0", "🚚", "free_delivery", true),
        segment("Pas de chance", "#e91e63", "😔", "lost", false),
        segment("20%", "#00bcd4", "🎁", "discount", true),
        segment("Pas de chance", "#795548", "😔", "lost", false),
    ]
}
