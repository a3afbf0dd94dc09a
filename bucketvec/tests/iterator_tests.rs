use bucketvec::BucketVec;

#[test]
fn test_iterator_empty_vector() {
    let vec: BucketVec<i32> = BucketVec::new();

    let mut iter = vec.iter();
    assert_eq!(iter.size_hint(), (0, Some(0)));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_populated_vector() {
    let mut vec: BucketVec<i32> = BucketVec::new();
    vec.add(10);
    vec.add(20);
    vec.add(30);

    let mut iter = vec.iter();
    assert_eq!(iter.size_hint(), (3, Some(3)));

    assert_eq!(iter.next(), Some(&10));
    assert_eq!(iter.size_hint(), (2, Some(2)));

    assert_eq!(iter.next(), Some(&20));
    assert_eq!(iter.size_hint(), (1, Some(1)));

    assert_eq!(iter.next(), Some(&30));
    assert_eq!(iter.size_hint(), (0, Some(0)));

    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_crosses_buckets() {
    let vec: BucketVec<i32, 3> = (0..17).collect();
    assert!(vec.bucket_count() > 1);

    let items: Vec<i32> = vec.iter().copied().collect();
    assert_eq!(items, (0..17).collect::<Vec<_>>());
    assert_eq!(vec.iter().len(), 17);
}

#[test]
fn test_iterator_for_loop() {
    let primes = [1, 2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];
    let vec: BucketVec<i32> = BucketVec::from(primes);

    let mut pos = 0;
    for value in &vec {
        assert_eq!(*value, primes[pos]);
        pos += 1;
    }
    assert_eq!(pos, primes.len());
}

#[test]
fn test_iterator_meets_in_the_middle() {
    let vec: BucketVec<i32, 2> = (1..=5).collect();
    let mut iter = vec.iter();

    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next_back(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_clone_is_independent() {
    let vec: BucketVec<i32> = (0..4).collect();
    let mut iter = vec.iter();
    iter.next();

    let cloned = iter.clone();
    assert_eq!(iter.collect::<Vec<_>>(), vec![&1, &2, &3]);
    assert_eq!(cloned.collect::<Vec<_>>(), vec![&1, &2, &3]);
}

#[test]
fn test_iterator_skips_emptied_buckets() {
    let mut vec: BucketVec<i32, 4> = (0..12).collect();
    // Empty out the second bucket completely
    while vec.bucket_lens().nth(1) != Some(0) {
        vec.remove(2).unwrap();
    }

    let items: Vec<i32> = vec.iter().copied().collect();
    assert_eq!(items.len(), vec.len());
    assert_eq!(items[..2], [0, 1]);
    assert_eq!(vec, items[..]);
}

#[test]
fn test_iter_mut_writes_through() {
    let mut vec: BucketVec<i32, 3> = (0..10).collect();

    for value in vec.iter_mut() {
        *value += 100;
    }
    assert_eq!(vec, (100..110).collect::<Vec<_>>()[..]);

    for value in &mut vec {
        *value -= 100;
    }
    assert_eq!(vec, (0..10).collect::<Vec<_>>()[..]);

    let mut iter = vec.iter_mut();
    assert_eq!(iter.len(), 10);
    if let Some(last) = iter.next_back() {
        *last = -1;
    }
    assert_eq!(iter.len(), 9);
    assert_eq!(vec[9], -1);
}

#[test]
fn test_into_iter_owned() {
    let vec: BucketVec<String, 2> = ["a", "b", "c", "d", "e"]
        .into_iter()
        .map(String::from)
        .collect();

    let mut iter = vec.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next().as_deref(), Some("a"));
    assert_eq!(iter.next_back().as_deref(), Some("e"));
    let rest: Vec<String> = iter.collect();
    assert_eq!(rest, vec!["b", "c", "d"]);
}
