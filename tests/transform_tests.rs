// tests/transform_tests.rs
use message_obfuscator::transform::{add_to_all, add_to_tail, sub_from_all, sub_from_tail};

#[test]
fn test_reverse_is_self_inverse_including_empty() {
    for input in [&b""[..], &b"A"[..], &b"AB"[..], &b"obfuscate me"[..]] {
        let mut data = input.to_vec();
        data.reverse();
        data.reverse();
        assert_eq!(data, input);
    }
}

#[test]
fn test_full_shift_round_trips_through_wraparound() {
    let mut data = vec![0x00, 0x7f, 0xfe, 0xff];
    add_to_all(&mut data, 5);
    assert_eq!(data, [0x05, 0x84, 0x03, 0x04]);
    sub_from_all(&mut data, 5);
    assert_eq!(data, [0x00, 0x7f, 0xfe, 0xff]);
}

#[test]
fn test_tail_shift_starts_at_floor_midpoint() {
    // length 3: floor(3/2) = 1 — indices 1 and 2 shift, index 0 does not
    let mut data = vec![10, 20, 30];
    sub_from_tail(&mut data, 3);
    assert_eq!(data, [10, 17, 27]);
    add_to_tail(&mut data, 3);
    assert_eq!(data, [10, 20, 30]);
}

#[test]
fn test_tail_shift_even_length_covers_exact_half() {
    let mut data = vec![10, 20, 30, 40];
    sub_from_tail(&mut data, 4);
    assert_eq!(data, [10, 20, 26, 36]);
}

#[test]
fn test_tail_shift_single_byte_is_whole_tail() {
    // length 1: mid = 0, the lone byte belongs to the tail
    let mut data = vec![65];
    sub_from_tail(&mut data, 7);
    assert_eq!(data, [58]);
}

#[test]
fn test_primitives_accept_empty_input() {
    let mut data: Vec<u8> = Vec::new();
    add_to_all(&mut data, 5);
    sub_from_all(&mut data, 5);
    sub_from_tail(&mut data, 9);
    add_to_tail(&mut data, 9);
    assert!(data.is_empty());
}
