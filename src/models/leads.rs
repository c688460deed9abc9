use core::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_size", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProjectSize {
    Small,
    Medium,
    Large,
    Industrial,
}

impl Default for ProjectSize {
    fn default() -> Self {
        ProjectSize::Small
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "quote_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Pending,
    Contacted,
    InProgress,
    Quoted,
    Accepted,
    Rejected,
    Completed,
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            QuoteStatus::Pending => "pending",
            QuoteStatus::Contacted => "contacted",
            QuoteStatus::InProgress => "in_progress",
            QuoteStatus::Quoted => "quoted",
            QuoteStatus::Accepted => "accepted",
            QuoteStatus::Rejected => "rejected",
            QuoteStatus::Completed => "completed",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "contact_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    New,
    Read,
    Replied,
    Archived,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuoteRequest {
    #[validate(length(min = 1, max = 50, message = "Le prénom est requis"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "Le nom est requis"))]
    pub last_name: String,
    #[validate(email(message = "Adresse email invalide"))]
    pub email: String,
    #[validate(length(min = 7, max = 20, message = "Numéro de téléphone invalide"))]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[validate(length(min = 1, max = 100, message = "La ville est requise"))]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub project_size: ProjectSize,
    #[serde(default)]
    pub surface_area: String,
    #[serde(default)]
    pub budget_range: String,
    #[serde(default)]
    pub timeline: String,
    #[validate(length(min = 1, message = "La description du projet est requise"))]
    pub description: String,
    #[serde(default)]
    pub has_water_source: bool,
    #[serde(default)]
    pub has_electricity: bool,
    #[serde(default)]
    pub needs_training: bool,
    #[serde(default)]
    pub needs_maintenance: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(length(min = 1, max = 100, message = "Le nom est requis"))]
    pub name: String,
    #[validate(email(message = "Adresse email invalide"))]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[validate(length(min = 1, message = "Le message est requis"))]
    pub message: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewsletterRequest {
    #[validate(email(message = "Adresse email invalide"))]
    pub email: String,
}
