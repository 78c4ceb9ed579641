use super::*;

#[test]
fn start_is_line_one_column_one() {
    let pos = Position::default();
    assert_eq!(pos, Position::new(0, 1, 1));
    assert!(pos.is_valid());
}

#[test]
fn line_zero_is_invalid() {
    assert!(!Position::new(0, 0, 0).is_valid());
}

#[test]
fn displays_line_and_column() {
    assert_eq!(Position::new(17, 3, 9).to_string(), "3:9");
}

#[test]
fn orders_by_offset() {
    let earlier = Position::new(4, 2, 1);
    let later = Position::new(10, 1, 30);
    assert!(earlier < later);
    assert_eq!(earlier.max(later), later);
}
