use crate::BiMap;

fn keys(map: &BiMap<u32, &'static str>, value: &'static str) -> Vec<u32> {
    map.get_keys(&value)
        .map(|set| set.iter().copied().collect())
        .unwrap_or_default()
}

#[test]
fn many_keys_share_one_value() {
    let mut map = BiMap::new();
    map.set(1, "Pet");
    map.set(2, "Pet");

    assert_eq!(keys(&map, "Pet"), vec![1, 2]);
    assert_eq!(map.get(&1), Some(&"Pet"));
    assert_eq!(map.len(), 2);
}

#[test]
fn delete_detaches_single_key() {
    let mut map = BiMap::new();
    map.set(1, "Pet");
    map.set(2, "Pet");

    assert_eq!(map.delete(&1), Some("Pet"));

    assert_eq!(keys(&map, "Pet"), vec![2]);
    assert!(!map.contains_key(&1));
}

#[test]
fn delete_value_removes_all_keys() {
    let mut map = BiMap::new();
    map.set(1, "Pet");
    map.set(2, "Pet");
    map.set(3, "Order");

    let removed = map.delete_value(&"Pet").unwrap();

    assert_eq!(removed.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    assert!(map.get(&1).is_none());
    assert!(map.get(&2).is_none());
    assert_eq!(map.get(&3), Some(&"Order"));
    assert!(!map.contains_value(&"Pet"));
}

#[test]
fn rebinding_key_moves_it_between_values() {
    let mut map = BiMap::new();
    map.set(1, "Pet");
    map.set(1, "Order");

    assert!(!map.contains_value(&"Pet"));
    assert_eq!(keys(&map, "Order"), vec![1]);
}

#[test]
fn rebinding_to_same_value_keeps_reverse_entry() {
    let mut map = BiMap::new();
    map.set(1, "Pet");
    map.set(1, "Pet");

    assert_eq!(keys(&map, "Pet"), vec![1]);
}

#[test]
fn iterates_in_insertion_order() {
    let mut map = BiMap::new();
    map.set(3, "c");
    map.set(1, "a");
    map.set(2, "b");

    let order: Vec<_> = map.iter().map(|(k, _)| *k).collect();
    assert_eq!(order, vec![3, 1, 2]);
}
