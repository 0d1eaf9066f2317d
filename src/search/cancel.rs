// src/search/cancel.rs
//
// One live request per coordinator. Each request gets a Token carrying a
// generation id and a shared cancel flag. Issuing a new token (or
// invalidating) raises the old flag; the transport may look at it, but
// liveness is decided here, by id, at settlement time.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Cooperative cancel flag shared between the coordinator and a worker.
#[derive(Clone, Debug, Default)]
pub struct CancelSignal(Arc<AtomicBool>);

impl CancelSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Clone, Debug)]
pub struct Token {
    id: u64,
    signal: CancelSignal,
}

impl Token {
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn signal(&self) -> &CancelSignal {
        &self.signal
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Token {}

#[derive(Debug, Default)]
pub struct QueryCancellationManager {
    issued: u64,
    live: Option<Token>,
}

impl QueryCancellationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede whatever is outstanding and hand out a fresh live token.
    pub fn begin(&mut self) -> Token {
        self.invalidate();
        self.issued += 1;
        let token = Token { id: self.issued, signal: CancelSignal::new() };
        self.live = Some(token.clone());
        token
    }

    pub fn is_live(&self, token: &Token) -> bool {
        self.live.as_ref().is_some_and(|live| live == token)
    }

    /// Cancel the live token, if any, without issuing a new one.
    /// Returns whether something was outstanding.
    pub fn invalidate(&mut self) -> bool {
        match self.live.take() {
            Some(prev) => {
                prev.signal.cancel();
                true
            }
            None => false,
        }
    }

    /// The live request settled; nothing is outstanding any more.
    /// No cancel is signalled. Stale tokens are ignored.
    pub fn retire(&mut self, token: &Token) {
        if self.is_live(token) {
            self.live = None;
        }
    }

    pub fn has_live(&self) -> bool {
        self.live.is_some()
    }
}
