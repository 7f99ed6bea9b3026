//! End-to-end scenarios exercised through the public API only.

use rstest::rstest;
use structures::union_find::UnionFind;
use structures::{Comparator, Error};

/// Both map variants promise the same contract; run the shared scenarios
/// against each.
macro_rules! ordered_map_contract {
    ($module:ident, $map:ty) => {
        mod $module {
            use super::*;

            #[test]
            fn orders_keys_and_answers_min_max() {
                let mut map = <$map>::new();
                for (key, value) in
                    [('D', 10), ('A', 15), ('F', 20), ('E', 20), ('G', 25), ('Y', 30)]
                {
                    map.put(key, value).unwrap();
                }

                assert_eq!(
                    map.keys().unwrap(),
                    vec![&'A', &'D', &'E', &'F', &'G', &'Y']
                );
                assert_eq!(map.min().unwrap(), &'A');
                assert_eq!(map.max().unwrap(), &'Y');
            }

            #[test]
            fn reputting_a_key_overwrites_without_growing() {
                let mut map = <$map>::new();
                map.put('R', 50).unwrap();
                map.put('A', 20).unwrap();
                assert_eq!(map.get(&'A').unwrap(), Some(&20));

                map.put('A', 35).unwrap();

                assert_eq!(map.get(&'A').unwrap(), Some(&35));
                assert_eq!(map.len(), 2);
            }

            #[test]
            fn removing_the_min_promotes_the_next_smallest() {
                let mut map = <$map>::new();
                for (key, value) in [('D', 1), ('A', 2), ('F', 3), ('E', 4)] {
                    map.put(key, value).unwrap();
                }

                assert_eq!(map.remove(&'A').unwrap(), Some(2));
                assert_eq!(map.min().unwrap(), &'D');
                assert_eq!(map.len(), 3);
            }

            #[test]
            fn absent_keys_are_sentinels_not_errors() {
                let mut map = <$map>::new();
                map.put('A', 1).unwrap();

                assert_eq!(map.get(&'Z').unwrap(), None);
                assert_eq!(map.remove(&'Z').unwrap(), None);
                assert_eq!(map.len(), 1);
            }

            #[test]
            fn every_query_on_an_empty_map_fails() {
                let mut map = <$map>::new();
                assert_eq!(map.get(&'A'), Err(Error::EmptyCollection));
                assert_eq!(map.remove(&'A'), Err(Error::EmptyCollection));
                assert_eq!(map.min(), Err(Error::EmptyCollection));
                assert_eq!(map.max(), Err(Error::EmptyCollection));
                assert_eq!(map.keys(), Err(Error::EmptyCollection));
            }

            #[test]
            fn well_behaved_comparators_never_error() {
                for comparator in [
                    (|_, _| 0) as Comparator<char>,
                    (|_, _| -1) as Comparator<char>,
                    (|_, _| 1) as Comparator<char>,
                ] {
                    let mut map = <$map>::with_comparator(comparator);
                    map.put('A', 10).unwrap();
                    map.put('B', 10).unwrap();
                }
            }
        }
    };
}

ordered_map_contract!(bst_map, structures::bst::Map::<char, i32>);
ordered_map_contract!(red_black_map, structures::red_black::Map::<char, i32>);

#[rstest]
#[case::returns_two((|_, _| 2) as Comparator<char>, 2)]
#[case::returns_minus_two((|_, _| -2) as Comparator<char>, -2)]
#[case::returns_way_off((|_, _| 42) as Comparator<char>, 42)]
fn comparator_contract_violations_surface(
    #[case] comparator: Comparator<char>,
    #[case] returned: i32,
) {
    // The first put lands in an empty tree and never invokes the
    // comparator; the second one fails and leaves the map untouched.
    let mut map = structures::bst::Map::with_comparator(comparator);
    map.put('D', 25).unwrap();
    assert_eq!(map.put('E', 25), Err(Error::InvalidComparator(returned)));
    assert_eq!(map.len(), 1);

    let mut map = structures::red_black::Map::with_comparator(comparator);
    map.put('D', 25).unwrap();
    assert_eq!(map.put('E', 25), Err(Error::InvalidComparator(returned)));
    assert_eq!(map.len(), 1);
}

#[test]
fn union_find_merges_components_transitively() {
    let mut uf = UnionFind::new(10);
    uf.union(1, 5).unwrap();
    uf.union(3, 1).unwrap();
    uf.union(7, 8).unwrap();
    uf.union(5, 7).unwrap();

    assert!(uf.connected(1, 8).unwrap());
    assert_eq!(uf.count(), 6);
}

#[test]
fn union_find_count_only_drops_on_real_merges() {
    let mut uf = UnionFind::new(4);
    assert_eq!(uf.count(), 4);

    uf.union(0, 1).unwrap();
    assert_eq!(uf.count(), 3);

    uf.union(0, 1).unwrap();
    assert_eq!(uf.count(), 3);
}

#[rstest]
#[case::one_past_the_end(10)]
#[case::further_out(11)]
#[case::way_out(usize::MAX)]
fn union_find_rejects_out_of_range_indices(#[case] index: usize) {
    let mut uf = UnionFind::new(10);

    assert!(matches!(
        uf.find(index),
        Err(Error::IndexOutOfRange { index: i, len: 10 }) if i == index
    ));
    assert!(uf.union(index, 5).is_err());
    assert!(uf.union(5, index).is_err());
    assert!(uf.connected(index, 5).is_err());
    assert!(uf.connected(5, index).is_err());

    // Nothing merged along the way.
    assert_eq!(uf.count(), 10);
}

#[test]
fn errors_format_into_readable_messages() {
    assert_eq!(
        Error::EmptyCollection.to_string(),
        "operation invoked on an empty collection"
    );
    assert_eq!(
        Error::IndexOutOfRange { index: 10, len: 10 }.to_string(),
        "index 10 out of range for length 10"
    );
    assert_eq!(
        Error::InvalidComparator(2).to_string(),
        "comparator returned 2, expected -1 (less), 0 (equal) or 1 (greater)"
    );
    assert_eq!(
        Error::InvalidArgument("vertex not found").to_string(),
        "invalid argument: vertex not found"
    );
}
