use rand::{Rng, seq::IndexedRandom};
use uuid::Uuid;

use crate::models::prize::GamePrize;

/// Fixed wheel used when no prize rows are configured. Weights sum to 100;
/// half the probability mass is the losing segment.
pub const FALLBACK_PRIZES: [FallbackPrize; 5] = [
    FallbackPrize {
        code: "10_percent",
        name: "10% de réduction",
        weight: 20,
    },
    FallbackPrize {
        code: "15_percent",
        name: "15% de réduction",
        weight: 10,
    },
    FallbackPrize {
        code: "free_delivery",
        name: "Livraison gratuite",
        weight: 15,
    },
    FallbackPrize {
        code: "free_guide",
        name: "Guide PDF gratuit",
        weight: 5,
    },
    FallbackPrize {
        code: "lost",
        name: "Pas de chance",
        weight: 50,
    },
];

pub const LOSING_CODE: &str = "lost";

#[derive(Debug)]
pub struct FallbackPrize {
    pub code: &'static str,
    pub name: &'static str,
    pub weight: u32,
}

/// Outcome of one wheel spin, from either the stored or the fallback path.
#[derive(Debug, Clone)]
pub struct SpinResult {
    pub prize_id: Option<Uuid>,
    pub code: String,
    pub name: String,
    pub discount_percent: i32,
    pub is_winning: bool,
    pub applies_to_fresh_only: bool,
}

/// Select one prize. Stored prizes are drawn uniformly, display order has no
/// effect on probability; the weighted fallback table only applies when the
/// store is empty.
pub fn spin<R: Rng>(prizes: &[GamePrize], rng: &mut R) -> SpinResult {
    match prizes.choose(rng) {
        Some(prize) => SpinResult {
            prize_id: Some(prize.id),
            code: prize.prize_type.as_str().to_string(),
            name: prize.name.clone(),
            discount_percent: prize.discount_percent,
            is_winning: prize.is_winning,
            applies_to_fresh_only: prize.applies_to_fresh_only,
        },
        None => spin_fallback(rng),
    }
}

pub fn spin_fallback<R: Rng>(rng: &mut R) -> SpinResult {
    let roll = rng.random_range(1..=100);
    let prize = fallback_for_roll(roll);

    SpinResult {
        prize_id: None,
        code: prize.code.to_string(),
        name: prize.name.to_string(),
        discount_percent: 0,
        is_winning: prize.code != LOSING_CODE,
        applies_to_fresh_only: true,
    }
}

/// Cumulative-weight lookup over [1,100].
pub fn fallback_for_roll(roll: u32) -> &'static FallbackPrize {
    let mut cumulative = 0;
    for prize in &FALLBACK_PRIZES {
        cumulative += prize.weight;
        if roll <= cumulative {
            return prize;
        }
    }

    // Unreachable while the weights sum to 100; the losing segment is the
    // safe answer if they ever drift.
    &FALLBACK_PRIZES[4]
}
