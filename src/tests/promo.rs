#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::service::promo::generate_code;

    #[test]
    fn code_has_prefix_and_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let code = generate_code("AQUA", 6, &mut rng);

        assert!(code.starts_with("AQUA"));
        assert_eq!(code.len(), 10);
    }

    #[test]
    fn code_suffix_is_uppercase_alphanumeric() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        for _ in 0..100 {
            let code = generate_code("AQUA", 6, &mut rng);
            let suffix = &code["AQUA".len()..];

            assert!(
                suffix
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
                "unexpected character in {}",
                code
            );
        }
    }

    #[test]
    fn codes_rarely_collide() {
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let mut seen = HashSet::new();

        for _ in 0..1000 {
            assert!(seen.insert(generate_code("AQUA", 6, &mut rng)));
        }
    }

    #[tokio::test]
    async fn concurrent_generation_stays_unique() {
        let mut handles = Vec::new();

        for _ in 0..100 {
            handles.push(tokio::spawn(async {
                let mut rng = ChaCha8Rng::from_os_rng();
                generate_code("AQUA", 6, &mut rng)
            }));
        }

        let results = futures::future::join_all(handles).await;

        let mut seen = HashSet::new();
        for result in results {
            let code = result.unwrap();
            assert!(seen.insert(code.clone()), "duplicate code: {}", code);
        }
    }
}
