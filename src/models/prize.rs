use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::Type)]
#[sqlx(type_name = "prize_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PrizeType {
    Discount,
    FreeDelivery,
    FreeItem,
    Lost,
}

impl PrizeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrizeType::Discount => "discount",
            PrizeType::FreeDelivery => "free_delivery",
            PrizeType::FreeItem => "free_item",
            PrizeType::Lost => "lost",
        }
    }
}

impl fmt::Display for PrizeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Admin-managed wheel segment definition. `is_winning` is the single source
/// of truth for whether landing here yields a promo code.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GamePrize {
    pub id: Uuid,
    pub name: String,
    pub prize_type: PrizeType,
    pub discount_percent: i32,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub applies_to_fresh_only: bool,
    pub is_winning: bool,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

impl GamePrize {
    /// Label shown on the wheel itself.
    pub fn display_name(&self) -> String {
        match self.prize_type {
            PrizeType::Discount => format!("-{}%", self.discount_percent),
            PrizeType::Lost => "Pas de chance".to_string(),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WheelSegment {
    pub label: String,
    pub color: String,
    pub icon: String,
    pub prize_type: String,
    pub is_winning: bool,
}

impl From<&GamePrize> for WheelSegment {
    fn from(prize: &GamePrize) -> Self {
        Self {
            label: prize.display_name(),
            color: prize.color.clone(),
            icon: prize.icon.clone(),
            prize_type: prize.prize_type.as_str().to_string(),
            is_winning: prize.is_winning,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WheelSegmentsResponse {
    pub segments: Vec<WheelSegment>,
    pub total: usize,
}
