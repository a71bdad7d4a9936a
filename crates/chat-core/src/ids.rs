//! Identifier generation for messages and sessions.
//!
//! UUID v4 built from platform entropy (`crypto.getRandomValues` in the
//! browser). When the platform cannot supply random bytes the generator
//! falls back to a seeded pseudo-random alphanumeric id instead of failing.

use std::cell::{Cell, RefCell};
use chat_types::config::IdStrategy;

const FALLBACK_LEN: usize = 12;

/// Source of cryptographically strong random bytes.
pub trait EntropySource {
    fn fill(&self, dest: &mut [u8]) -> Result<(), getrandom::Error>;
}

/// The platform CSPRNG via `getrandom`.
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), getrandom::Error> {
        getrandom::getrandom(dest)
    }
}

/// Produces effectively-unique ids. Shared via `Rc` by the identity
/// manager and the transcript, so mutable state sits behind cells.
pub struct IdGenerator {
    strategy: IdStrategy,
    entropy: Box<dyn EntropySource>,
    rng: RefCell<fastrand::Rng>,
    counter: Cell<u64>,
    warned: Cell<bool>,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self::with_entropy(strategy, Box::new(OsEntropy), clock_seed())
    }

    /// Fixed fallback seed, platform entropy for UUIDs.
    pub fn with_seed(strategy: IdStrategy, seed: u64) -> Self {
        Self::with_entropy(strategy, Box::new(OsEntropy), seed)
    }

    pub fn with_entropy(strategy: IdStrategy, entropy: Box<dyn EntropySource>, seed: u64) -> Self {
        Self {
            strategy,
            entropy,
            rng: RefCell::new(fastrand::Rng::with_seed(seed)),
            counter: Cell::new(0),
            warned: Cell::new(false),
        }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    pub fn next_id(&self) -> String {
        match self.strategy {
            IdStrategy::Uuid => match self.uuid() {
                Ok(id) => id,
                Err(e) => {
                    if !self.warned.replace(true) {
                        log::warn!("No secure random source ({}), using fallback ids", e);
                    }
                    self.fallback_id()
                }
            },
            IdStrategy::Fallback => self.fallback_id(),
        }
    }

    fn uuid(&self) -> Result<String, getrandom::Error> {
        let mut bytes = [0u8; 16];
        self.entropy.fill(&mut bytes)?;
        Ok(uuid::Builder::from_random_bytes(bytes).into_uuid().to_string())
    }

    /// Random alphanumeric chars plus a per-generator counter, so two ids
    /// from the same generator can never collide.
    fn fallback_id(&self) -> String {
        let mut rng = self.rng.borrow_mut();
        let mut id: String = std::iter::repeat_with(|| rng.alphanumeric())
            .take(FALLBACK_LEN)
            .collect();
        let n = self.counter.get() + 1;
        self.counter.set(n);
        id.push('-');
        id.push_str(&n.to_string());
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

fn clock_seed() -> u64 {
    chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64
}
