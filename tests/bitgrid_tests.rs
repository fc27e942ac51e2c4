use mathleship::{BitGrid, GridError};

type Mask = BitGrid<u64, 6>;

#[test]
fn test_set_get_and_count() {
    let mut mask = Mask::new();
    assert!(mask.is_empty());
    assert!(!mask.get(2, 3).unwrap());

    mask.set(2, 3).unwrap();
    mask.set(0, 0).unwrap();
    mask.set(5, 5).unwrap();
    assert!(mask.get(2, 3).unwrap());
    assert_eq!(mask.count_ones(), 3);

    // setting twice does not double-count
    mask.set(2, 3).unwrap();
    assert_eq!(mask.count_ones(), 3);
}

#[test]
fn test_bounds_checked() {
    let mut mask = Mask::new();
    assert_eq!(
        mask.get(6, 0).unwrap_err(),
        GridError::IndexOutOfBounds { row: 6, col: 0 }
    );
    assert_eq!(
        mask.set(0, 6).unwrap_err(),
        GridError::IndexOutOfBounds { row: 0, col: 6 }
    );
}

#[test]
fn test_union_and_intersection() {
    let mut a = Mask::new();
    a.set(1, 1).unwrap();
    a.set(1, 2).unwrap();
    let mut b = Mask::new();
    b.set(1, 2).unwrap();
    b.set(4, 4).unwrap();

    assert_eq!((a | b).count_ones(), 3);
    let overlap = a & b;
    assert_eq!(overlap.count_ones(), 1);
    assert!(overlap.get(1, 2).unwrap());

    let mut c = a;
    c |= b;
    assert_eq!(c, a | b);
}
