use lazyseq::prelude::*;

fn joined<T: ToString + 'static>(seq: &Sequence<T>) -> String {
    seq.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
}

fn windows(seq: &Sequence<Sequence<i32>>) -> String {
    seq.iter().map(|w| joined(&w)).collect::<Vec<_>>().join(" ")
}

#[test]
fn test_range_interleave_to_vec() {
    let array = to_vec(&interleave(&[
        from_vec(vec![0, 1, 2]),
        between(3, 9),
        from_vec(vec![9, 10, 11, 12]),
    ]))
    .unwrap();
    assert_eq!(array, vec![0, 3, 9, 1, 4, 10, 2, 5, 11]);
}

#[test]
fn test_cast_cycle_take() {
    let seq = Sequence::from(vec![1, 2, 3]).cycle().take(10);
    assert_eq!(joined(&seq), "1 2 3 1 2 3 1 2 3 1");
}

#[test]
fn test_concat() {
    let seq = Sequence::from(vec![4])
        .concat(&Sequence::between(1, 4).cycle())
        .take(20);
    assert_eq!(joined(&seq), "4 1 2 3 1 2 3 1 2 3 1 2 3 1 2 3 1 2 3 1");
}

#[test]
fn test_partition() {
    assert_eq!(
        windows(&Sequence::up_to(40).partition(3, 10)),
        "0 1 2 10 11 12 20 21 22 30 31 32"
    );
    assert_eq!(
        windows(&Sequence::up_to(10).partition(4, 2)),
        "0 1 2 3 2 3 4 5 4 5 6 7 6 7 8 9"
    );
    assert_eq!(
        windows(&Sequence::up_to(10).partition_padded(6, 3, &Sequence::from(vec![97, 98, 99]))),
        "0 1 2 3 4 5 3 4 5 6 7 8 6 7 8 9 97 98"
    );
}

#[test]
fn test_map_to_vec_over_partition() {
    let windows = map(
        |w: Sequence<i32>, _| to_vec(&w).unwrap(),
        &partition(6, Some(3), Some(&from_vec(vec![97, 98, 99])), &up_to(10)),
    );
    assert_eq!(
        to_vec(&windows).unwrap(),
        vec![
            vec![0, 1, 2, 3, 4, 5],
            vec![3, 4, 5, 6, 7, 8],
            vec![6, 7, 8, 9, 97, 98],
        ]
    );
}

#[test]
fn test_concat_equals_appended_arrays() {
    let cases: [(Vec<i32>, Vec<i32>); 3] = [
        (vec![], vec![]),
        (vec![1], vec![]),
        (vec![1, 2], vec![3, 4, 5]),
    ];
    for (a, b) in cases {
        let seq = concat(&[from_vec(a.clone()), from_vec(b.clone())]);
        assert_eq!(to_vec(&seq).unwrap(), [a, b].concat());
    }
}

#[test]
fn test_split_at_rejoins_to_source() {
    let seq = map(|v: i32, i| v * i as i32, &up_to(6));
    for n in 0..8 {
        let (head, tail) = split_at(n, &seq);
        let rejoined = [to_vec(&head).unwrap(), to_vec(&tail).unwrap()].concat();
        assert_eq!(rejoined, to_vec(&seq).unwrap());
    }
}

#[test]
fn test_interleave_length_invariant() {
    let lengths = [3, 6, 4];
    let inputs: Vec<Sequence<i32>> = lengths.iter().map(|&n| up_to(n)).collect();
    let mixed = to_vec(&interleave(&inputs)).unwrap();
    assert_eq!(mixed.len(), lengths.len() * 3);
}

#[test]
fn test_cycle_restartability() {
    let base = from_vec(vec!['x', 'y', 'z']);
    let once = to_vec(&base).unwrap();
    let thrice = to_vec(&take(3 * once.len(), &cycle(&base))).unwrap();
    assert_eq!(thrice, [once.clone(), once.clone(), once].concat());
}

#[test]
fn test_interpose_and_reductions() {
    let seq = Sequence::between(1, 4).interpose(0).reductions(sum, None);
    assert_eq!(seq.to_vec().unwrap(), vec![1, 1, 3, 3, 6]);
}

#[test]
fn test_apply_and_reduce() {
    assert_eq!(apply(|v: Vec<u32>| v.len(), &between(5, 9)), Ok(4));
    assert_eq!(reduce(multiply, &between(1u64, 21), None), Ok(2_432_902_008_176_640_000));
}

#[test]
fn test_long_chain_over_infinite_source_builds_without_pulling() {
    let mut seq = count_from(0u64);
    for _ in 0..1000 {
        seq = seq.map(|v, _| v + 1);
    }
    assert_eq!(seq.take(2).to_vec().unwrap(), vec![1000, 1001]);
}

#[test]
fn test_forcing_infinite_sequence_under_limit() {
    let config = ForceConfig::default().with_max_pulls(1_000);
    assert_eq!(
        Sequence::iterate(|v: &u32| v.wrapping_mul(3), 1).to_vec_with(&config),
        Err(SeqError::InfiniteSequence { limit: 1_000 })
    );
}
