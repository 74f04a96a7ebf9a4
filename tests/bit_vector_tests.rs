//! Integration tests for BitVector
//!
//! Property checks cover round trips through every constructor/conversion
//! pair, the clean-tail invariant, shifts, rotations and zero counts across
//! sub-word, single-word and multi-word lengths.

use bitplane::{BitOrder, BitVector, Error};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    #[test]
    fn bools_round_trip(bits in prop::collection::vec(any::<bool>(), 0..500)) {
        let vector = BitVector::from_bools(&bits);
        prop_assert_eq!(vector.len(), bits.len());
        prop_assert_eq!(vector.to_bool_array(), bits);
    }

    #[test]
    fn bytes_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..100)) {
        let vector = BitVector::from_bytes(&bytes).unwrap();
        prop_assert_eq!(vector.len(), bytes.len() * 8);
        prop_assert_eq!(vector.to_bytes(), bytes);
    }

    #[test]
    fn words_round_trip(words in prop::collection::vec(any::<u64>(), 0..20)) {
        let vector = BitVector::from_words(&words).unwrap();
        prop_assert_eq!(vector.to_u64_words(), words);
    }

    #[test]
    fn population_matches_bools(bits in prop::collection::vec(any::<bool>(), 0..500)) {
        let vector = BitVector::from_bools(&bits);
        let expected = bits.iter().filter(|&&b| b).count();
        prop_assert_eq!(vector.population_count(), expected);
    }

    #[test]
    fn shift_left_matches_reference(bits in prop::collection::vec(any::<bool>(), 1..300), amount in 0usize..320) {
        let mut vector = BitVector::from_bools(&bits);
        vector.shift_left(amount);
        let expected: Vec<bool> = (0..bits.len())
            .map(|i| i >= amount && bits[i - amount])
            .collect();
        prop_assert_eq!(vector.to_bool_array(), expected);
        prop_assert_eq!(vector.population_count(), vector.iter().filter(|&b| b).count());
    }

    #[test]
    fn shift_right_matches_reference(bits in prop::collection::vec(any::<bool>(), 1..300), amount in 0usize..320) {
        let mut vector = BitVector::from_bools(&bits);
        vector.shift_right(amount);
        let expected: Vec<bool> = (0..bits.len())
            .map(|i| i + amount < bits.len() && bits[i + amount])
            .collect();
        prop_assert_eq!(vector.to_bool_array(), expected);
    }

    #[test]
    fn rotate_left_matches_reference(bits in prop::collection::vec(any::<bool>(), 1..300), amount in 0usize..600) {
        let mut vector = BitVector::from_bools(&bits);
        vector.rotate_left(amount);
        let n = bits.len();
        let expected: Vec<bool> = (0..n)
            .map(|i| bits[(i + n - amount % n) % n])
            .collect();
        prop_assert_eq!(vector.to_bool_array(), expected);
    }

    #[test]
    fn reverse_matches_reference(bits in prop::collection::vec(any::<bool>(), 0..300)) {
        let mut vector = BitVector::from_bools(&bits);
        vector.reverse();
        let mut expected = bits.clone();
        expected.reverse();
        prop_assert_eq!(vector.to_bool_array(), expected);
        prop_assert_eq!(vector.population_count(), bits.iter().filter(|&&b| b).count());
    }

    #[test]
    fn not_keeps_tail_clean(bits in prop::collection::vec(any::<bool>(), 0..300)) {
        let mut vector = BitVector::from_bools(&bits);
        vector.not();
        let expected = bits.iter().filter(|&&b| !b).count();
        prop_assert_eq!(vector.population_count(), expected);
    }

    #[test]
    fn narrow_words_agree_with_bytes(bits in prop::collection::vec(any::<bool>(), 0..300)) {
        let vector = BitVector::from_bools(&bits);
        let bytes = vector.to_bytes();
        let halves = vector.to_u16_words();
        let quads = vector.to_u32_words();
        prop_assert_eq!(bytes.len(), bits.len().div_ceil(8));
        prop_assert_eq!(halves.len(), bits.len().div_ceil(16));
        prop_assert_eq!(quads.len(), bits.len().div_ceil(32));
        for (i, half) in halves.iter().enumerate() {
            let lo = bytes[2 * i] as u16;
            let hi = bytes.get(2 * i + 1).copied().unwrap_or(0) as u16;
            prop_assert_eq!(*half, lo | (hi << 8));
        }
    }
}

#[test]
fn rotation_round_trip_all_lengths() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for length in 1..=200 {
        let original = BitVector::random_with(length, &mut rng);
        for k in 0..length {
            let mut vector = original.clone();
            vector.rotate_left(k);
            vector.rotate_right(k);
            assert_eq!(vector, original, "length {length}, k {k}");
        }
    }
}

#[test]
fn single_bit_zero_counts() {
    for n in [1, 5, 63, 64, 65, 127, 128, 129, 200] {
        for i in 0..n {
            let mut vector = BitVector::zeros(n);
            vector.set(i, true).unwrap();
            assert_eq!(vector.leading_zero_count(), n - 1 - i, "n {n}, i {i}");
            assert_eq!(vector.trailing_zero_count(), i, "n {n}, i {i}");
        }
    }
}

#[test]
fn shift_identities() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let original = BitVector::random_with(150, &mut rng);

    let mut vector = original.clone();
    vector.shift_left(0);
    vector.shift_right(0);
    assert_eq!(vector, original);

    for amount in [150, 151, 1000] {
        let mut vector = original.clone();
        vector.shift_left(amount);
        assert_eq!(vector, BitVector::zeros(150));
    }
}

#[test]
fn logic_ops_against_zero() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let original = BitVector::random_with(77, &mut rng);
    let zero = BitVector::zeros(77);

    let mut or = original.clone();
    or.or(&zero).unwrap();
    assert_eq!(or, original);

    let mut xor = original.clone();
    xor.xor(&zero).unwrap();
    assert_eq!(xor, original);

    let mut and = original.clone();
    and.and(&zero).unwrap();
    assert!(and.is_zero());

    let mut own = original.clone();
    own.xor(&original).unwrap();
    assert!(own.is_zero());

    let mut operator = original.clone();
    operator |= &zero;
    operator &= &original;
    operator ^= &zero;
    assert_eq!(operator, original);

    for result in [
        original.clone().and(&BitVector::zeros(76)),
        original.clone().or(&BitVector::zeros(78)),
        original.clone().xor(&BitVector::zeros(0)),
    ] {
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}

#[test]
fn hex_scenario() {
    let vector = BitVector::from_bit_string("1011").unwrap();
    assert_eq!(vector.to_formatted("X").unwrap(), "0xB");
}

#[test]
fn counting_scenario() {
    let mut vector = BitVector::new(10, false);
    vector.set(3, true).unwrap();
    vector.set(7, true).unwrap();
    assert_eq!(vector.population_count(), 2);
    assert_eq!(vector.leading_zero_count(), 2);
    assert_eq!(vector.trailing_zero_count(), 3);
}

#[test]
fn binary_rendering_round_trips_bit_string() {
    let text = "100110101110001011110000111100001";
    let vector: BitVector = text.parse().unwrap();
    assert_eq!(vector.to_formatted("G").unwrap(), format!("0b{text}"));
}

#[test]
fn cursor_invalidated_by_each_mutator() {
    let mutators: [fn(&mut BitVector); 7] = [
        |v: &mut BitVector| v.set_all(true),
        |v: &mut BitVector| v.not(),
        |v: &mut BitVector| v.shift_left(1),
        |v: &mut BitVector| v.rotate_right(3),
        |v: &mut BitVector| v.reverse(),
        |v: &mut BitVector| v.set_length(5),
        |v: &mut BitVector| v.randomize_with(&mut ChaCha8Rng::seed_from_u64(1)),
    ];
    for mutate in mutators {
        let mut vector = BitVector::from_bit_string("10110010").unwrap();
        let mut cursor = vector.cursor(BitOrder::Ascending);
        cursor.next_bit(&vector).unwrap();
        mutate(&mut vector);
        assert!(matches!(
            cursor.next_bit(&vector),
            Err(Error::InvalidOperation(_))
        ));
    }
}
