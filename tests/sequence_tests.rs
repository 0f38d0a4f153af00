//! Integration tests for ColorSequence

use palette_animator::{AnimatorError, ColorSequence, SequenceBuilder};

#[test]
fn builder_rejects_empty_sequence() {
    let result = ColorSequence::<8>::builder().delay(3).build();
    assert!(matches!(result, Err(AnimatorError::EmptySequence)));
}

#[test]
fn builder_rejects_too_many_indices() {
    let result = ColorSequence::<2>::builder().indexes(&[1, 2, 3]);
    assert!(matches!(
        result,
        Err(AnimatorError::CapacityExceeded {
            requested: 3,
            capacity: 2
        })
    ));
}

#[test]
fn builder_accepts_valid_sequence() {
    let seq = SequenceBuilder::<8>::new()
        .index(4)
        .unwrap()
        .indexes(&[5, 4, 3])
        .unwrap()
        .delay(2)
        .build()
        .unwrap();

    assert_eq!(seq.indexes(), &[4, 5, 4, 3]);
    assert_eq!(seq.len(), 4);
    assert!(!seq.is_empty());
    assert_eq!(seq.delay(), 2);
}

#[test]
fn new_sequence_starts_rewound() {
    let seq = ColorSequence::<4>::new(&[2, 9], 1).unwrap();

    assert_eq!(seq.position(), 0);
    assert_eq!(seq.current_delay(), 0);
    assert_eq!(seq.current(), Some(2));
    assert!(!seq.is_exhausted());
}

#[test]
fn out_of_range_indices_are_accepted_at_build_time() {
    let seq = ColorSequence::<4>::new(&[200, 255], 0).unwrap();
    assert_eq!(seq.indexes(), &[200, 255]);
}

#[test]
fn sequences_compare_by_contents_and_cursor() {
    let a = ColorSequence::<4>::new(&[1, 2], 0).unwrap();
    let b = ColorSequence::<4>::builder()
        .indexes(&[1, 2])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(a, b);
    assert_ne!(a, ColorSequence::<4>::new(&[1, 2], 1).unwrap());
}
