/// Password gate state
///
/// The shared password is a courtesy curtain for an off-market listing,
/// not authentication: it ships with the binary, and the "remember me"
/// flag is a plain string in local storage. Anyone with the binary can
/// read both. The gate only keeps casual visitors out.

use crate::storage::KvStore;

/// Key under which the passed-gate marker is persisted.
pub const GATE_FLAG_KEY: &str = "hotspring_lp_ok";
/// Marker value meaning "gate previously passed on this machine".
pub const GATE_FLAG_PASSED: &str = "1";

/// Gate state. `unlocked` moves from false to true exactly once per
/// session and never back.
#[derive(Debug)]
pub struct AccessGate {
    unlocked: bool,
    rejected: bool,
}

impl AccessGate {
    /// Seed the gate from the persisted flag: a returning visitor on the
    /// same machine skips the password prompt.
    pub fn from_store(store: &dyn KvStore) -> Self {
        let unlocked = store
            .get(GATE_FLAG_KEY)
            .is_some_and(|value| value == GATE_FLAG_PASSED);
        AccessGate {
            unlocked,
            rejected: false,
        }
    }

    pub fn unlocked(&self) -> bool {
        self.unlocked
    }

    /// True after a failed submit, cleared by the next successful one.
    pub fn rejected(&self) -> bool {
        self.rejected
    }

    /// Compare the candidate against the configured secret (exact,
    /// case-sensitive). On match, unlock and persist the flag so future
    /// sessions skip the gate; on mismatch, flag the rejection and leave
    /// the state untouched. Returns whether the gate is now open.
    pub fn submit(&mut self, candidate: &str, secret: &str, store: &mut dyn KvStore) -> bool {
        if candidate == secret {
            self.unlocked = true;
            self.rejected = false;
            // Losing the flag is not fatal: the gate just asks again
            // next session.
            if let Err(error) = store.set(GATE_FLAG_KEY, GATE_FLAG_PASSED) {
                eprintln!("⚠️  Could not persist the access flag: {}", error);
            }
        } else {
            self.rejected = true;
        }
        self.unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_starts_locked_without_flag() {
        let store = MemoryStore::default();
        let gate = AccessGate::from_store(&store);
        assert!(!gate.unlocked());
        assert!(!gate.rejected());
    }

    #[test]
    fn test_correct_secret_unlocks_and_persists() {
        let mut store = MemoryStore::default();
        let mut gate = AccessGate::from_store(&store);

        assert!(gate.submit("onsen2525", "onsen2525", &mut store));
        assert!(gate.unlocked());
        assert_eq!(store.get(GATE_FLAG_KEY), Some(GATE_FLAG_PASSED.to_string()));

        // A fresh session with the flag already set starts unlocked.
        let returning = AccessGate::from_store(&store);
        assert!(returning.unlocked());
    }

    #[test]
    fn test_wrong_secret_stays_locked() {
        let mut store = MemoryStore::default();
        let mut gate = AccessGate::from_store(&store);

        assert!(!gate.submit("onsen2024", "onsen2525", &mut store));
        assert!(!gate.unlocked());
        assert!(gate.rejected());
        assert_eq!(store.get(GATE_FLAG_KEY), None);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let mut store = MemoryStore::default();
        let mut gate = AccessGate::from_store(&store);
        assert!(!gate.submit("ONSEN2525", "onsen2525", &mut store));
        assert!(!gate.unlocked());
    }

    #[test]
    fn test_stray_flag_value_does_not_unlock() {
        let mut store = MemoryStore::default();
        store.set(GATE_FLAG_KEY, "yes").unwrap();
        let gate = AccessGate::from_store(&store);
        assert!(!gate.unlocked());
    }
}
