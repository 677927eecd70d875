//! Listener registry - event type to ordered bindings
//!
//! Lists are held behind `Rc` so a dispatch can walk a snapshot without
//! borrowing the registry. Mutations go through `Rc::make_mut`: while a
//! dispatch holds a snapshot the list is shared, so the mutation lands on a
//! fresh copy that replaces the registry entry and the walk is unaffected.
//! Outside dispatch the list is unique and is edited in place.

use super::listener::{Binding, ListenerId};
use super::types::EmitterId;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared, immutable view of one type's bindings
pub(crate) type BindingList = Rc<Vec<Binding>>;

#[derive(Debug, Default)]
pub(crate) struct ListenerRegistry {
    lists: HashMap<String, BindingList>,
}

impl ListenerRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append `binding` to its type's list.
    ///
    /// Returns false, leaving the registry untouched, when the same listener
    /// is already bound for this type on the same emitter.
    pub(crate) fn insert(&mut self, binding: Binding) -> bool {
        match self.lists.get_mut(&*binding.event_type) {
            Some(list) => {
                let listener = binding.listener.id();
                if list.iter().any(|b| b.matches(listener, binding.owner)) {
                    return false;
                }
                Rc::make_mut(list).push(binding);
            }
            None => {
                self.lists
                    .insert(binding.event_type.to_string(), Rc::new(vec![binding]));
            }
        }
        true
    }

    /// Remove the binding for `listener` on `owner`. Drops the type entry once
    /// its list is empty.
    pub(crate) fn remove(&mut self, event_type: &str, listener: ListenerId, owner: EmitterId) -> bool {
        let Some(list) = self.lists.get_mut(event_type) else {
            return false;
        };
        let Some(index) = list.iter().position(|b| b.matches(listener, owner)) else {
            return false;
        };

        Rc::make_mut(list).remove(index);
        if list.is_empty() {
            self.lists.remove(event_type);
        }
        true
    }

    /// Drop every binding for `event_type`, returning how many were removed
    pub(crate) fn remove_all(&mut self, event_type: &str) -> usize {
        self.lists
            .remove(event_type)
            .map(|list| list.len())
            .unwrap_or(0)
    }

    pub(crate) fn clear(&mut self) {
        self.lists.clear();
    }

    /// Current list for `event_type`, for a dispatch walk
    pub(crate) fn snapshot(&self, event_type: &str) -> Option<BindingList> {
        self.lists.get(event_type).map(Rc::clone)
    }

    pub(crate) fn contains(&self, event_type: &str) -> bool {
        self.lists.contains_key(event_type)
    }

    pub(crate) fn len(&self, event_type: &str) -> usize {
        self.lists.get(event_type).map(|list| list.len()).unwrap_or(0)
    }

    pub(crate) fn event_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.lists.keys().cloned().collect();
        types.sort();
        types
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::listener::Listener;

    fn bind(event_type: &str, listener: &Listener, owner: EmitterId) -> Binding {
        Binding::new(Rc::from(event_type), listener.clone(), owner, false)
    }

    #[test]
    fn test_insert_preserves_order() {
        let owner = EmitterId::next();
        let (a, b, c) = (
            Listener::new(|_| {}),
            Listener::new(|_| {}),
            Listener::new(|_| {}),
        );
        let mut registry = ListenerRegistry::new();

        assert!(registry.insert(bind("change", &a, owner)));
        assert!(registry.insert(bind("change", &b, owner)));
        assert!(registry.insert(bind("change", &c, owner)));

        let ids: Vec<_> = registry
            .snapshot("change")
            .unwrap()
            .iter()
            .map(|binding| binding.listener.id())
            .collect();
        assert_eq!(ids, vec![a.id(), b.id(), c.id()]);
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let owner = EmitterId::next();
        let listener = Listener::new(|_| {});
        let mut registry = ListenerRegistry::new();

        assert!(registry.insert(bind("change", &listener, owner)));
        assert!(!registry.insert(bind("change", &listener, owner)));
        assert_eq!(registry.len("change"), 1);

        // Same listener under another type is a separate registration
        assert!(registry.insert(bind("changing", &listener, owner)));
    }

    #[test]
    fn test_empty_list_is_dropped() {
        let owner = EmitterId::next();
        let listener = Listener::new(|_| {});
        let mut registry = ListenerRegistry::new();

        registry.insert(bind("resize", &listener, owner));
        assert!(registry.contains("resize"));

        assert!(registry.remove("resize", listener.id(), owner));
        assert!(!registry.contains("resize"));
        assert!(registry.event_types().is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let owner = EmitterId::next();
        let listener = Listener::new(|_| {});
        let mut registry = ListenerRegistry::new();

        assert!(!registry.remove("resize", listener.id(), owner));

        registry.insert(bind("resize", &listener, owner));
        assert!(!registry.remove("resize", Listener::new(|_| {}).id(), owner));
        assert_eq!(registry.len("resize"), 1);
    }

    #[test]
    fn test_mutation_while_snapshot_held_copies_list() {
        let owner = EmitterId::next();
        let (a, b) = (Listener::new(|_| {}), Listener::new(|_| {}));
        let mut registry = ListenerRegistry::new();
        registry.insert(bind("change", &a, owner));

        let snapshot = registry.snapshot("change").unwrap();
        registry.insert(bind("change", &b, owner));
        registry.remove("change", a.id(), owner);

        // The held snapshot still sees the original list
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].listener.id(), a.id());

        // The registry sees the mutated copy
        let current = registry.snapshot("change").unwrap();
        assert!(!Rc::ptr_eq(&snapshot, &current));
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].listener.id(), b.id());
    }

    #[test]
    fn test_remove_all_and_clear() {
        let owner = EmitterId::next();
        let mut registry = ListenerRegistry::new();
        registry.insert(bind("change", &Listener::new(|_| {}), owner));
        registry.insert(bind("change", &Listener::new(|_| {}), owner));
        registry.insert(bind("resize", &Listener::new(|_| {}), owner));

        assert_eq!(registry.remove_all("change"), 2);
        assert_eq!(registry.remove_all("change"), 0);
        assert_eq!(registry.event_types(), vec!["resize".to_string()]);

        registry.clear();
        assert!(!registry.contains("resize"));
    }
}
