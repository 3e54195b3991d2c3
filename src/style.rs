//! The menu bar's styling contract.
//!
//! The class prefix is the stable hook everything else keys on: the default
//! stylesheet, external overrides, and the structural nodes (wrapper,
//! spacer). [`StyleRegistry`] holds the process-wide reference counts that
//! make sheet registration idempotent; actually inserting and removing
//! sheet nodes is the backend's job, driven by the booleans returned here.

use std::collections::HashMap;

/// Class name of the menu strip, and the prefix for the structural classes.
/// External stylesheets overriding it must keep `position`, `min-height`,
/// and `box-sizing: border-box` intact.
pub const MENU_CLASS: &str = "hone-menubar";

/// Class name of the wrapper container.
pub fn wrapper_class() -> String {
    format!("{MENU_CLASS}-wrapper")
}

/// Class name of the flow-preserving placeholder.
pub fn spacer_class() -> String {
    format!("{MENU_CLASS}-spacer")
}

/// Reference counts for injected style sheets, keyed by class name.
///
/// `acquire` returns true only for the first reference to a key (inject the
/// sheet now); `release` returns true only when the last reference drops
/// (remove it now). Re-registering an already-registered key never
/// duplicates a sheet.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    counts: HashMap<String, usize>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a reference on `key`. True when this is the first reference.
    pub fn acquire(&mut self, key: &str) -> bool {
        let count = self.counts.entry(key.to_string()).or_insert(0);
        *count += 1;
        *count == 1
    }

    /// Drop a reference on `key`. True when this was the last reference.
    /// Releasing an unregistered key is a no-op.
    pub fn release(&mut self, key: &str) -> bool {
        match self.counts.get_mut(key) {
            Some(count) if *count > 1 => {
                *count -= 1;
                false
            }
            Some(_) => {
                self.counts.remove(key);
                true
            }
            None => false,
        }
    }

    /// Current reference count for `key`.
    pub fn refs(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_class_names() {
        assert_eq!(wrapper_class(), "hone-menubar-wrapper");
        assert_eq!(spacer_class(), "hone-menubar-spacer");
    }

    #[test]
    fn first_acquire_injects() {
        let mut reg = StyleRegistry::new();
        assert!(reg.acquire(MENU_CLASS));
        assert_eq!(reg.refs(MENU_CLASS), 1);
    }

    #[test]
    fn second_acquire_does_not_duplicate() {
        let mut reg = StyleRegistry::new();
        assert!(reg.acquire(MENU_CLASS));
        assert!(!reg.acquire(MENU_CLASS));
        assert_eq!(reg.refs(MENU_CLASS), 2);
    }

    #[test]
    fn last_release_removes() {
        let mut reg = StyleRegistry::new();
        reg.acquire(MENU_CLASS);
        reg.acquire(MENU_CLASS);
        assert!(!reg.release(MENU_CLASS));
        assert!(reg.release(MENU_CLASS));
        assert_eq!(reg.refs(MENU_CLASS), 0);
    }

    #[test]
    fn release_without_acquire_is_noop() {
        let mut reg = StyleRegistry::new();
        assert!(!reg.release(MENU_CLASS));
    }

    #[test]
    fn reacquire_after_drain_injects_again() {
        let mut reg = StyleRegistry::new();
        reg.acquire(MENU_CLASS);
        reg.release(MENU_CLASS);
        assert!(reg.acquire(MENU_CLASS));
    }

    #[test]
    fn keys_are_independent() {
        let mut reg = StyleRegistry::new();
        assert!(reg.acquire("hone-menubar"));
        assert!(reg.acquire("hone-tooltip"));
        assert!(reg.release("hone-tooltip"));
        assert_eq!(reg.refs("hone-menubar"), 1);
    }
}
