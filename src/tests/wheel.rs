#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::Utc;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use uuid::Uuid;

    use crate::{
        models::prize::{GamePrize, PrizeType},
        service::{
            defaults::GameDefaults,
            wheel::{FALLBACK_PRIZES, fallback_for_roll, spin, spin_fallback},
        },
    };

    fn prize(name: &str, prize_type: PrizeType, is_winning: bool, display_order: i32) -> GamePrize {
        GamePrize {
            id: Uuid::new_v4(),
            name: name.into(),
            prize_type,
            discount_percent: 10,
            description: String::new(),
            color: "#4caf50".into(),
            icon: "🎁".into(),
            applies_to_fresh_only: true,
            is_winning,
            is_active: true,
            display_order,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn stored_draw_is_uniform_regardless_of_order() {
        // Heavily skewed display orders must not skew the draw.
        let prizes = vec![
            prize("10% de réduction", PrizeType::Discount, true, 0),
            prize("Pas de chance", PrizeType::Lost, false, 100),
        ];

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut counts: HashMap<Uuid, u32> = HashMap::new();

        for _ in 0..1000 {
            let outcome = spin(&prizes, &mut rng);
            *counts.entry(outcome.prize_id.unwrap()).or_default() += 1;
        }

        for p in &prizes {
            let count = counts.get(&p.id).copied().unwrap_or(0);
            assert!(
                (400..=600).contains(&count),
                "prize '{}' drawn {} times out of 1000",
                p.name,
                count
            );
        }
    }

    #[test]
    fn stored_draw_win_follows_winning_flag() {
        let winning = vec![prize("10%", PrizeType::Discount, true, 0)];
        let losing = vec![prize("Pas de chance", PrizeType::Lost, false, 0)];

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(spin(&winning, &mut rng).is_winning);
        assert!(!spin(&losing, &mut rng).is_winning);
    }

    #[test]
    fn stored_draw_carries_prize_fields() {
        let prizes = vec![prize("10% de réduction", PrizeType::Discount, true, 0)];

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let outcome = spin(&prizes, &mut rng);

        assert_eq!(outcome.prize_id, Some(prizes[0].id));
        assert_eq!(outcome.code, "discount");
        assert_eq!(outcome.discount_percent, 10);
        assert!(outcome.applies_to_fresh_only);
    }

    #[test]
    fn empty_store_uses_fallback_wheel() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let outcome = spin(&[], &mut rng);

        assert!(outcome.prize_id.is_none());
        assert!(FALLBACK_PRIZES.iter().any(|p| p.code == outcome.code));
    }

    #[test]
    fn fallback_weights_sum_to_one_hundred() {
        let sum: u32 = FALLBACK_PRIZES.iter().map(|p| p.weight).sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn fallback_roll_boundaries() {
        assert_eq!(fallback_for_roll(1).code, "10_percent");
        assert_eq!(fallback_for_roll(20).code, "10_percent");
        assert_eq!(fallback_for_roll(21).code, "15_percent");
        assert_eq!(fallback_for_roll(30).code, "15_percent");
        assert_eq!(fallback_for_roll(31).code, "free_delivery");
        assert_eq!(fallback_for_roll(45).code, "free_delivery");
        assert_eq!(fallback_for_roll(46).code, "free_guide");
        assert_eq!(fallback_for_roll(50).code, "free_guide");
        assert_eq!(fallback_for_roll(51).code, "lost");
        assert_eq!(fallback_for_roll(100).code, "lost");
    }

    #[test]
    fn fallback_win_is_everything_but_lost() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        for _ in 0..200 {
            let outcome = spin_fallback(&mut rng);
            assert_eq!(outcome.is_winning, outcome.code != "lost");
        }
    }

    #[test]
    fn fallback_distribution_tracks_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(1312);
        let mut counts: HashMap<String, u32> = HashMap::new();

        for _ in 0..10_000 {
            let outcome = spin_fallback(&mut rng);
            *counts.entry(outcome.code).or_default() += 1;
        }

        // 6-sigma windows around the expected counts.
        let lost = counts.get("lost").copied().unwrap_or(0);
        assert!((4500..=5500).contains(&lost), "lost drawn {} times", lost);

        let ten = counts.get("10_percent").copied().unwrap_or(0);
        assert!((1600..=2400).contains(&ten), "10_percent drawn {} times", ten);

        let guide = counts.get("free_guide").copied().unwrap_or(0);
        assert!((300..=700).contains(&guide), "free_guide drawn {} times", guide);
    }

    #[test]
    fn default_segments_alternate_win_and_lose() {
        let defaults = GameDefaults::load();

        assert_eq!(defaults.segments.len(), 8);
        for (i, segment) in defaults.segments.iter().enumerate() {
            assert_eq!(segment.is_winning, i % 2 == 0);
        }
    }
}
