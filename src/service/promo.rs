use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sqlx::{Pool, Postgres};
use tracing::warn;

use crate::{db::participation::promo_code_exists, models::error::ServerError};

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Readable prefix plus `suffix_len` random uppercase alphanumerics.
pub fn generate_code<R: Rng>(prefix: &str, suffix_len: usize, rng: &mut R) -> String {
    let mut code = String::with_capacity(prefix.len() + suffix_len);
    code.push_str(prefix);

    for _ in 0..suffix_len {
        let idx = rng.random_range(0..CODE_ALPHABET.len());
        code.push(CODE_ALPHABET[idx] as char);
    }

    code
}

/// Mint a code that does not collide with any stored one. The retry loop
/// keeps collisions out of the common path; the partial unique index on
/// `game_participation.promo_code` is the backstop for the race between two
/// concurrent mints.
pub async fn mint_unique_code(
    pool: &Pool<Postgres>,
    prefix: &str,
    suffix_len: usize,
    max_attempts: u32,
) -> Result<String, ServerError> {
    let mut rng = ChaCha8Rng::from_os_rng();

    for attempt in 0..max_attempts {
        let code = generate_code(prefix, suffix_len, &mut rng);

        if !promo_code_exists(pool, &code).await? {
            return Ok(code);
        }

        warn!("Promo code collision on attempt {}: {}", attempt + 1, code);
    }

    Err(ServerError::Internal(
        "Failed to mint a unique promo code".into(),
    ))
}
