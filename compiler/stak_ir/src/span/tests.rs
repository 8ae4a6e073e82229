use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
}

#[test]
fn test_span_merge_is_order_independent() {
    let a = Span::new(10, 20);
    let b = Span::new(15, 30);
    assert_eq!(a.merge(b), Span::new(10, 30));
    assert_eq!(b.merge(a), Span::new(10, 30));
}

#[test]
fn test_zero_length_span_is_empty() {
    let span = Span::new(7, 7);
    assert!(span.is_empty());
    assert_eq!(span.to_range(), 7..7);
}

#[test]
fn test_try_from_range_rejects_oversized() {
    let too_big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(0..too_big),
        Err(SpanError::EndTooLarge(too_big))
    );
    assert_eq!(
        Span::try_from_range(too_big..too_big),
        Err(SpanError::StartTooLarge(too_big))
    );
    assert_eq!(Span::try_from_range(3..9), Ok(Span::new(3, 9)));
}

#[test]
fn test_span_display_matches_debug() {
    let span = Span::new(4, 12);
    assert_eq!(format!("{span}"), "4..12");
    assert_eq!(format!("{span:?}"), "4..12");
}
