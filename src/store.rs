//! Capability traits shared by the hash-backed and sort-backed containers.
//!
//! A sample that only needs to insert, look up, remove, iterate and count can
//! take `&dyn KeyValueStore<K, V>` (or `impl ElementStore<T>`) and work with
//! either variant. Only iteration order differs between them.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use crate::ordering::{Comparator, ComparatorSet};

// =============================================================================
// Maps
// =============================================================================

/// Access by any borrowed form `Q` of the key, as `HashMap::get` allows.
///
/// A `HashMap<String, _>` implements this for both `Q = String` and
/// `Q = str`, so `map.lookup("Anne")` needs no allocation. `Q` is inferred
/// from the argument.
pub trait KeyLookup<Q: ?Sized, V> {
    /// `None` means the key is absent. A present key always yields `Some`,
    /// even when its value is empty.
    fn lookup(&self, key: &Q) -> Option<&V>;

    fn lookup_mut(&mut self, key: &Q) -> Option<&mut V>;

    fn contains_key(&self, key: &Q) -> bool;

    fn remove(&mut self, key: &Q) -> Option<V>;
}

/// Key-based access through `&K` comes from the `KeyLookup<K, V>` supertrait.
pub trait KeyValueStore<K, V>: KeyLookup<K, V> {
    /// Inserts or replaces. Returns the displaced value when `key` was present.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &K> + '_>;

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_>;

    fn clear(&mut self);
}

impl<K, Q, V, S> KeyLookup<Q, V> for HashMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn lookup(&self, key: &Q) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn lookup_mut(&mut self, key: &Q) -> Option<&mut V> {
        HashMap::get_mut(self, key)
    }

    fn contains_key(&self, key: &Q) -> bool {
        HashMap::contains_key(self, key)
    }

    fn remove(&mut self, key: &Q) -> Option<V> {
        HashMap::remove(self, key)
    }
}

impl<K, V, S> KeyValueStore<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn put(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(HashMap::keys(self))
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(HashMap::iter(self))
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }
}

impl<K, Q, V> KeyLookup<Q, V> for BTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    fn lookup(&self, key: &Q) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn lookup_mut(&mut self, key: &Q) -> Option<&mut V> {
        BTreeMap::get_mut(self, key)
    }

    fn contains_key(&self, key: &Q) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn remove(&mut self, key: &Q) -> Option<V> {
        BTreeMap::remove(self, key)
    }
}

impl<K: Ord, V> KeyValueStore<K, V> for BTreeMap<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(BTreeMap::keys(self))
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(BTreeMap::iter(self))
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }
}

// =============================================================================
// Sets
// =============================================================================

pub trait ElementStore<T> {
    /// Returns `false` when an equal element is already stored; the stored
    /// instance is kept and `value` is dropped.
    fn add(&mut self, value: T) -> bool;

    fn contains(&self, value: &T) -> bool;

    fn discard(&mut self, value: &T) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_>;
}

impl<T, S> ElementStore<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn add(&mut self, value: T) -> bool {
        HashSet::insert(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn discard(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(HashSet::iter(self))
    }
}

impl<T: Ord> ElementStore<T> for BTreeSet<T> {
    fn add(&mut self, value: T) -> bool {
        BTreeSet::insert(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        BTreeSet::contains(self, value)
    }

    fn discard(&mut self, value: &T) -> bool {
        BTreeSet::remove(self, value)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(BTreeSet::iter(self))
    }
}

impl<T, C: Comparator<T>> ElementStore<T> for ComparatorSet<T, C> {
    fn add(&mut self, value: T) -> bool {
        ComparatorSet::insert(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        ComparatorSet::contains(self, value)
    }

    fn discard(&mut self, value: &T) -> bool {
        ComparatorSet::remove(self, value)
    }

    fn len(&self) -> usize {
        ComparatorSet::len(self)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(ComparatorSet::iter(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::BookTitleCode;
    use crate::records::Book;
    use rustc_hash::FxHashMap;

    fn last_write_wins(store: &mut dyn KeyValueStore<String, i32>) {
        assert_eq!(store.put("Adam".into(), 17), None);
        assert_eq!(store.put("Adam".into(), 99), Some(17));
        assert_eq!(store.lookup(&"Adam".to_string()), Some(&99));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_last_write_wins_on_every_variant() {
        last_write_wins(&mut HashMap::<String, i32>::new());
        last_write_wins(&mut BTreeMap::<String, i32>::new());
        last_write_wins(&mut FxHashMap::<String, i32>::default());
    }

    #[test]
    fn test_absent_differs_from_empty_value() {
        let mut store: HashMap<String, String> = HashMap::new();
        store.insert("Anne".into(), String::new());

        assert_eq!(KeyLookup::lookup(&store, "Anne"), Some(&String::new()));
        assert_eq!(KeyLookup::lookup(&store, "Bill"), None);
        assert!(KeyLookup::contains_key(&store, "Anne"));
        assert!(!KeyLookup::contains_key(&store, "Bill"));
    }

    fn film_of<'a>(films: &'a dyn KeyLookup<str, String>, name: &str) -> Option<&'a str> {
        films.lookup(name).map(String::as_str)
    }

    #[test]
    fn test_lookup_by_borrowed_str_on_every_variant() {
        let mut hashed: HashMap<String, String> = HashMap::new();
        hashed.insert("Zoe".into(), "Trainspotting".into());
        let mut sorted: BTreeMap<String, String> = BTreeMap::new();
        sorted.insert("Zoe".into(), "Trainspotting".into());

        assert_eq!(film_of(&hashed, "Zoe"), Some("Trainspotting"));
        assert_eq!(film_of(&sorted, "Zoe"), Some("Trainspotting"));
        assert_eq!(film_of(&sorted, "Anne"), None);

        if let Some(film) = sorted.lookup_mut("Zoe") {
            film.push_str(" 2");
        }
        assert_eq!(KeyLookup::remove(&mut sorted, "Zoe"), Some("Trainspotting 2".to_string()));
        assert!(!KeyLookup::contains_key(&sorted, "Zoe"));
    }

    #[test]
    fn test_sorted_variant_iterates_in_key_order() {
        let mut store: BTreeMap<i64, &str> = BTreeMap::new();
        store.put(600035, "Jaws");
        store.put(200034, "Fight Club");
        store.put(222222, "Ted");

        let keys: Vec<i64> = KeyValueStore::keys(&store).copied().collect();
        assert_eq!(keys, vec![200034, 222222, 600035]);
    }

    #[test]
    fn test_remove_clear_and_lookup_mut() {
        let mut store: HashMap<&str, Vec<&str>> = HashMap::new();
        store.put("John", vec!["Kylie"]);
        store.put("Julie", vec!["Barak"]);

        if let Some(friends) = store.lookup_mut("John") {
            friends.push("Donald");
        }
        assert_eq!(KeyLookup::lookup(&store, "John").map(Vec::len), Some(2));

        assert_eq!(KeyLookup::remove(&mut store, "Julie"), Some(vec!["Barak"]));
        assert_eq!(KeyLookup::remove(&mut store, "Julie"), None);

        KeyValueStore::clear(&mut store);
        assert!(KeyValueStore::is_empty(&store));
    }

    fn rejects_duplicates(set: &mut dyn ElementStore<Book>) {
        assert!(set.add(Book::new(9999, "Jaws")));
        assert!(!set.add(Book::new(9999, "Jaws")));
        assert!(set.add(Book::new(9999, "Stardust")));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Book::new(9999, "Stardust")));
        assert!(set.discard(&Book::new(9999, "Stardust")));
        assert!(!set.discard(&Book::new(9999, "Stardust")));
        assert_eq!(set.elements().count(), 1);
    }

    #[test]
    fn test_every_set_variant_rejects_duplicates() {
        rejects_duplicates(&mut HashSet::<Book>::new());
        rejects_duplicates(&mut BTreeSet::<Book>::new());
        rejects_duplicates(&mut ComparatorSet::<Book, BookTitleCode>::new());
    }
}
