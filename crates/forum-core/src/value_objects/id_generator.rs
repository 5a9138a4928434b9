//! Resource ID generation
//!
//! IDs have the form `<prefix>-<suffix>`, e.g. `thread-h7Gq2LkPz0aXc9Rt`.
//! The suffix is drawn from the alphanumeric alphabet.

use rand::{distributions::Alphanumeric, Rng};
use std::fmt;

/// Resource kind, rendered as the ID prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdPrefix {
    User,
    Thread,
    Comment,
    Reply,
}

impl IdPrefix {
    /// The literal prefix string
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Thread => "thread",
            Self::Comment => "comment",
            Self::Reply => "reply",
        }
    }
}

impl fmt::Display for IdPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Random prefixed ID generator
#[derive(Debug, Clone, Copy)]
pub struct IdGenerator {
    suffix_len: usize,
}

impl IdGenerator {
    /// Default random suffix length
    pub const DEFAULT_SUFFIX_LEN: usize = 16;

    /// Create a generator with a custom suffix length
    pub const fn new(suffix_len: usize) -> Self {
        Self { suffix_len }
    }

    /// Generate a new ID for the given resource kind
    pub fn generate(&self, prefix: IdPrefix) -> String {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.suffix_len)
            .map(char::from)
            .collect();
        format!("{prefix}-{suffix}")
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SUFFIX_LEN)
    }
}
