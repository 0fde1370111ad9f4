use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(10));
    assert!(span.contains(19));
    assert!(!span.contains(20));
}

#[test]
fn test_span_merge_is_order_independent() {
    let a = Span::new(20, 30);
    let b = Span::new(10, 25);
    assert_eq!(a.merge(b), Span::new(10, 30));
    assert_eq!(b.merge(a), Span::new(10, 30));
}

#[test]
fn test_span_point() {
    let point = Span::point(42);
    assert!(point.is_empty());
    assert_eq!(point.to_range(), 42..42);
}

#[test]
fn test_span_try_from_range() {
    assert_eq!(Span::try_from_range(50..100), Ok(Span::new(50, 100)));

    let large = u32::MAX as usize + 1;
    assert!(matches!(
        Span::try_from_range(large..large + 1),
        Err(SpanError::StartTooLarge(_))
    ));
    assert!(matches!(
        Span::try_from_range(0..large),
        Err(SpanError::EndTooLarge(_))
    ));
}

#[test]
fn test_span_debug_display() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "100..200");
    assert_eq!(Span::default(), Span::DUMMY);
}
