// Sorted sequence primitives: construction, lookup, point insert/delete.

use sorted_batch::{Element, Error, SelectionGenerator, SortedVec};

// =============================================================================
// Test 1: Created vector is sorted with the expected values
// =============================================================================
// Check head, tail and midpoint.
#[test]
fn create_vector_head_mid_tail() {
    let vector = SelectionGenerator::new(1).create_vector(100);

    assert_eq!(vector.len(), 100);
    assert!(vector.is_sorted());
    assert_eq!(vector.as_slice()[0].value, "0");
    assert_eq!(vector.as_slice()[50].value, "50");
    assert_eq!(vector.as_slice()[99].value, "99");
}

// =============================================================================
// Test 2: Values wrap at 100
// =============================================================================
#[test]
fn create_vector_values_are_key_mod_100() {
    let vector = SelectionGenerator::new(2).create_vector(250);
    assert_eq!(vector.get(&123), Some(&"23".to_string()));
    assert_eq!(vector.get(&200), Some(&"0".to_string()));
}

// =============================================================================
// Test 3: Lookup finds every selected key
// =============================================================================
#[test]
fn lookup_random_selection() {
    let mut generator = SelectionGenerator::new(3);
    let vector = generator.create_vector(100);
    let selection = generator.random_selection(vector.len(), 10).unwrap();

    for key in selection {
        let pos = vector.lookup(&key).expect("selected key must exist");
        assert_eq!(vector.as_slice()[pos].key, key);
        assert_eq!(vector.as_slice()[pos].value, key.to_string());
    }
}

// =============================================================================
// Test 4: Lookup of a missing key
// =============================================================================
#[test]
fn lookup_missing_key_returns_none() {
    let vector = SelectionGenerator::new(4).create_vector(10);
    assert_eq!(vector.lookup(&-1), None);
    assert_eq!(vector.lookup(&10), None);

    let empty: SortedVec<i64, String> = SortedVec::new();
    assert_eq!(empty.lookup(&0), None);
    assert!(empty.is_empty());
}

// =============================================================================
// Test 5: Point delete one key at a time
// =============================================================================
#[test]
fn point_delete_removes_selected() {
    let mut generator = SelectionGenerator::new(5);
    let mut vector = generator.create_vector(100);
    let selection = generator.random_selection(vector.len(), 10).unwrap();

    for key in &selection {
        let pos = vector.lookup(key).unwrap();
        let removed = vector.point_delete(pos).unwrap();
        assert_eq!(removed.key, *key);
    }

    for key in &selection {
        assert!(!vector.contains_linear(key));
    }
    assert_eq!(vector.len(), 90);
    assert!(vector.is_sorted());
}

// =============================================================================
// Test 6: Point delete out of range
// =============================================================================
#[test]
fn point_delete_out_of_range() {
    let mut vector = SelectionGenerator::new(6).create_vector(3);
    assert_eq!(
        vector.point_delete(3).unwrap_err(),
        Error::PositionOutOfRange { position: 3, len: 3 }
    );
    assert_eq!(vector.len(), 3);
}

// =============================================================================
// Test 7: Delete by key
// =============================================================================
#[test]
fn delete_key_found_and_missing() {
    let mut vector = SelectionGenerator::new(7).create_vector(20);

    let removed = vector.delete_key(&7).unwrap();
    assert_eq!(removed.value, "7");
    assert!(!vector.contains_linear(&7));

    assert_eq!(vector.delete_key(&7).unwrap_err(), Error::KeyNotFound("7".into()));
    assert_eq!(vector.len(), 19);
}

// =============================================================================
// Test 8: Point insert keeps order
// =============================================================================
#[test]
fn point_insert_keeps_sorted() {
    let mut vector: SortedVec<i32, &str> = SortedVec::new();
    vector.point_insert(Element::new(5, "five"));
    vector.point_insert(Element::new(1, "one"));
    vector.point_insert(Element::new(3, "three"));

    let keys: Vec<i32> = vector.keys().copied().collect();
    assert_eq!(keys, vec![1, 3, 5]);
    assert_eq!(vector.get(&3), Some(&"three"));
}

// =============================================================================
// Test 9: from_sorted validates, from_unsorted sorts
// =============================================================================
#[test]
fn construction_from_vec() {
    let sorted = vec![Element::new(1, 'a'), Element::new(2, 'b')];
    assert!(SortedVec::from_sorted(sorted).is_ok());

    let unsorted = vec![Element::new(2, 'b'), Element::new(1, 'a')];
    assert_eq!(
        SortedVec::from_sorted(unsorted.clone()).unwrap_err(),
        Error::NotSorted { position: 1 }
    );

    let fixed = SortedVec::from_unsorted(unsorted);
    assert!(fixed.is_sorted());
    assert_eq!(fixed.as_slice()[0].value, 'a');
}

// =============================================================================
// Test 10: Sorting an already sorted sequence changes nothing
// =============================================================================
#[test]
fn resort_is_noop() {
    let vector = SelectionGenerator::new(10).create_vector(500);
    let before: Vec<(i64, String)> = vector.iter().map(|e| (e.key, e.value.clone())).collect();

    let resorted = SortedVec::from_unsorted(vector.into_vec());
    let after: Vec<(i64, String)> = resorted.iter().map(|e| (e.key, e.value.clone())).collect();
    assert_eq!(before, after);
}
