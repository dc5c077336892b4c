use md5::{Digest, Md5};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Credentials, GatewayTime, Login};

/// Salt length the gateway expects.
pub const SALT_LENGTH: usize = 10;

pub const SALT_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789:";

// Largest multiple of the alphabet size that fits in a byte; anything above is rejected
// so that `byte % len` stays uniform.
const ACCEPT_BELOW: usize = 256 - 256 % SALT_ALPHABET.len();

pub const SALT_FIELD: &str = "sul";
pub const TIME_FIELD: &str = "time";
pub const HASH_FIELD: &str = "hash";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-request authentication fields. Built fresh for every request.
pub struct AuthData {
    pub login: String,
    pub salt: String,
    pub time: String,
    pub hash: String,
}

impl AuthData {
    /// Sign with a new salt and the current local time.
    pub fn generate(credentials: &Credentials) -> Self {
        Self::sign(credentials, GatewayTime::now(), salt(SALT_LENGTH))
    }

    pub fn sign(credentials: &Credentials, time: GatewayTime, salt: String) -> Self {
        let time = time.to_string();
        let hash = hash(credentials.password().as_str(), &time, &salt);
        Self {
            login: credentials.login().as_str().to_owned(),
            salt,
            time,
            hash,
        }
    }

    pub fn into_params(self) -> [(String, String); 4] {
        [
            (Login::FIELD.to_owned(), self.login),
            (SALT_FIELD.to_owned(), self.salt),
            (TIME_FIELD.to_owned(), self.time),
            (HASH_FIELD.to_owned(), self.hash),
        ]
    }
}

/// Lowercase hex MD5 of `password + time + salt`.
pub fn hash(password: &str, time: &str, salt: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(password.as_bytes());
    hasher.update(time.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Random token of `length` characters from [`SALT_ALPHABET`].
///
/// Draws from the OS entropy source; if that fails the remaining characters come
/// from a time-seeded [`SmallRng`] instead of failing the request.
pub fn salt(length: usize) -> String {
    salt_from(length, getrandom::getrandom)
}

fn salt_from(
    length: usize,
    mut entropy: impl FnMut(&mut [u8]) -> Result<(), getrandom::Error>,
) -> String {
    let mut salt = String::with_capacity(length);
    let mut fallback: Option<SmallRng> = None;

    while salt.len() < length {
        let index = match fallback.as_mut() {
            Some(rng) => rng.gen_range(0..SALT_ALPHABET.len()),
            None => match strong_index(&mut entropy) {
                Ok(index) => index,
                Err(err) => {
                    tracing::warn!(error = %err, "OS entropy unavailable, salt falls back to a weaker generator");
                    fallback
                        .insert(SmallRng::seed_from_u64(time_seed()))
                        .gen_range(0..SALT_ALPHABET.len())
                }
            },
        };
        salt.push(char::from(SALT_ALPHABET[index]));
    }

    salt
}

fn strong_index(
    entropy: &mut impl FnMut(&mut [u8]) -> Result<(), getrandom::Error>,
) -> Result<usize, getrandom::Error> {
    loop {
        let mut byte = [0u8; 1];
        entropy(&mut byte)?;
        let value = usize::from(byte[0]);
        if value < ACCEPT_BELOW {
            return Ok(value % SALT_ALPHABET.len());
        }
    }
}

fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
