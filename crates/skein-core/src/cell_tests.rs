use crate::Ref;

#[test]
fn replace_is_visible_to_every_clone() {
    let a = Ref::new(1u32);
    let b = a.clone();

    let previous = b.replace(7);

    assert_eq!(previous, 1);
    assert_eq!(a.get(), 7);
    assert!(a.ptr_eq(&b));
}

#[test]
fn separate_cells_are_independent() {
    let a = Ref::new("x".to_string());
    let b = Ref::new("x".to_string());

    a.replace("y".to_string());

    assert_eq!(b.get(), "x");
    assert!(!a.ptr_eq(&b));
}

#[test]
fn with_borrows_without_cloning() {
    let cell = Ref::new(vec![1, 2, 3]);
    let len = cell.with(|v| v.len());
    assert_eq!(len, 3);
}
