//! Decode behavior pinned against hand-worked buffer pairs.

use polytree::{codec, CodecError, FlatTree, Tree};
use test_case::test_case;

#[test_case(&[], 1; "empty input yields the canonical empty tree")]
#[test_case(&[0], 1; "single leaf")]
#[test_case(&[0, 1], 1; "well formed two node chain")]
#[test_case(&[0, 0], 2; "two leaves make two roots")]
#[test_case(&[0, 1, 0], 2; "completed chain plus trailing leaf")]
#[test_case(&[1, 0, 0], 3; "underflow leaves a placeholder root")]
#[test_case(&[0, 0, 2], 1; "two leaves consumed by a final node")]
#[test_case(&[3, 3, 3], 3; "every count underflows")]
fn forest_cardinality(counts: &[usize], expected_roots: usize) {
    let values: Vec<u32> = (0..counts.len() as u32).collect();
    let forest = codec::decode(counts.to_vec(), values).expect("aligned lengths");
    assert_eq!(forest.len(), expected_roots);
}

#[test]
fn decode_determinism_worked_example() {
    // Roots come most-recently-completed first.
    let forest = codec::decode(vec![0, 1, 0], vec!["aaa", "aa", "a"]).expect("aligned");
    assert_eq!(
        forest.roots(),
        &[Tree::leaf("a"), Tree::node("aa", vec![Tree::leaf("aaa")])]
    );
}

#[test]
fn lenient_decode_worked_example() {
    // The underflowed first position drops "aaa" and becomes empty.
    let forest = codec::decode(vec![1, 0, 0], vec!["aaa", "aa", "a"]).expect("aligned");
    assert_eq!(
        forest.roots(),
        &[Tree::leaf("a"), Tree::leaf("aa"), Tree::Empty]
    );
}

#[test]
fn mismatched_lengths_are_a_caller_error() {
    let err = codec::decode(vec![0], Vec::<&str>::new()).unwrap_err();
    assert_eq!(err, CodecError::LengthMismatch { counts: 1, values: 0 });

    let err = FlatTree::from_arrays(vec![0, 0], vec!["x"]).unwrap_err();
    assert_eq!(err, CodecError::LengthMismatch { counts: 2, values: 1 });
}

#[test]
fn empty_tree_round_trips_through_empty_buffers() {
    let empty: Tree<&str> = Tree::Empty;
    let flat = empty.deflate();
    assert_eq!(flat.len(), 0, "never a one-element encoding");
    assert_eq!(flat.inflate(), Tree::Empty);
}

#[test]
fn multi_root_encoding_inflates_to_its_first_root() {
    let flat = FlatTree::from_arrays(vec![0, 0], vec!["bottom", "top"]).expect("aligned");
    assert_eq!(flat.inflate(), Tree::leaf("top"));
}
