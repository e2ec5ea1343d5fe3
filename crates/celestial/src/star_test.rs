use crate::star::StarClass;

#[test]
fn threshold_boundaries() {
    assert_eq!(StarClass::from_item_count(4), StarClass::BlackHole);
    assert_eq!(StarClass::from_item_count(5), StarClass::Dwarf);
    assert_eq!(StarClass::from_item_count(9), StarClass::Dwarf);
    assert_eq!(StarClass::from_item_count(10), StarClass::MainSequence);
    assert_eq!(StarClass::from_item_count(15), StarClass::MainSequence);
    assert_eq!(StarClass::from_item_count(19), StarClass::MainSequence);
    assert_eq!(StarClass::from_item_count(20), StarClass::Giant);
}

#[test]
fn zero_items_classify_without_panicking() {
    // Empty collections are dropped by the caller, but classification must
    // still be total.
    assert_eq!(StarClass::from_item_count(0), StarClass::BlackHole);
}

#[test]
fn base_radii() {
    assert_eq!(StarClass::BlackHole.base_radius(), 8.0);
    assert_eq!(StarClass::Dwarf.base_radius(), 10.0);
    assert_eq!(StarClass::MainSequence.base_radius(), 12.0);
    assert_eq!(StarClass::Giant.base_radius(), 25.0);
}
