use bucketvec::BucketVec;

#[test]
fn test_cursor_empty_and_increment() {
    let mut vec: BucketVec<i32> = BucketVec::new();
    assert_eq!(vec.begin(), vec.end());

    vec.add(10);
    vec.add(20);
    vec.add(30);

    let mut cursor = vec.begin();
    assert_eq!(cursor.get(), Some(&10));
    cursor.move_next();
    assert_eq!(cursor.get(), Some(&20));
    cursor.move_next();
    assert_eq!(cursor.get(), Some(&30));
    cursor.move_next();
    assert_eq!(cursor, vec.end());
    assert_eq!(cursor.get(), None);
}

#[test]
fn test_cursor_counted_loops() {
    let primes = [1, 2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];
    let vec: BucketVec<i32> = BucketVec::from(primes);

    let mut pos = 0;
    let mut cursor = vec.begin();
    while cursor != vec.end() {
        assert_eq!(cursor.get(), Some(&primes[pos]));
        assert_eq!(cursor.index(), pos);
        cursor.move_next();
        pos += 1;
    }
    assert_eq!(pos, primes.len());

    // From one before the end down to (not including) the beginning
    let mut pos = primes.len() - 1;
    let mut cursor = vec.end();
    cursor.move_prev();
    while cursor != vec.begin() {
        assert_eq!(cursor.get(), Some(&primes[pos]));
        cursor.move_prev();
        pos -= 1;
    }
    assert_eq!(pos, 0);
    assert_eq!(cursor.get(), Some(&primes[0]));
}

#[test]
fn test_cursor_decrement_after_increments() {
    let vec: BucketVec<i32, 2> = BucketVec::from([1, 2, 3, 5, 7]);

    let mut cursor = vec.begin();
    cursor.move_next();
    cursor.move_next();
    assert_eq!(cursor.get(), Some(&3));
    cursor.move_prev();
    assert_eq!(cursor.get(), Some(&2));
    cursor.move_prev();
    assert_eq!(cursor.get(), Some(&1));
    assert!(cursor.is_begin());
}

#[test]
fn test_cursor_access_to_fields() {
    let pairs: BucketVec<(i32, i32)> =
        BucketVec::from([(1, 1), (2, 2), (3, 3), (4, 5), (5, 7), (6, 11)]);

    let mut cursor = pairs.begin();
    assert_eq!(cursor.get().map(|pair| pair.0), Some(1));
    assert_eq!(cursor.get().map(|pair| pair.1), Some(1));

    cursor.move_next();
    cursor.move_next();
    cursor.move_next();

    let pair = cursor.get().unwrap();
    assert_eq!(pair.0, 4);
    assert_eq!(pair.1, 5);
}

#[test]
fn test_cursor_index_matches_position() {
    let vec: BucketVec<i32, 3> = (0..20).collect();

    let mut cursor = vec.begin();
    for expected in 0..20 {
        assert_eq!(cursor.index(), expected);
        assert_eq!(cursor.get(), Some(&(expected as i32)));
        cursor.move_next();
    }
    assert!(cursor.is_end());
    assert_eq!(cursor.index(), vec.len());
}

#[test]
fn test_cursor_copies_move_independently() {
    let vec: BucketVec<i32> = BucketVec::from([1, 2, 3]);

    let first = vec.begin();
    let mut second = first;
    second.move_next();

    assert_eq!(first.get(), Some(&1));
    assert_eq!(second.get(), Some(&2));
    assert_ne!(first, second);
}

#[test]
fn test_cursor_mut_rewrites_elements() {
    let mut vec: BucketVec<String, 2> = ["a", "b", "c", "d", "e"]
        .into_iter()
        .map(String::from)
        .collect();

    let mut cursor = vec.begin_mut();
    while let Some(value) = cursor.get_mut() {
        value.push('!');
        cursor.move_next();
    }
    assert!(cursor.is_end());
    assert_eq!(cursor.index(), 5);

    assert_eq!(vec, ["a!", "b!", "c!", "d!", "e!"]);
}

#[test]
fn test_cursor_mut_walks_backwards() {
    let mut vec: BucketVec<i32, 3> = (0..10).collect();

    let mut cursor = vec.end_mut();
    assert_eq!(cursor.get(), None);
    let mut step = 0;
    while !cursor.is_begin() {
        cursor.move_prev();
        if let Some(value) = cursor.get_mut() {
            *value = step;
        }
        step += 1;
    }
    assert_eq!(cursor.as_cursor().get(), Some(&9));

    assert_eq!(vec, [9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_cursor_on_sized_vector() {
    let vec: BucketVec<i32> = BucketVec::with_len(25);

    let mut cursor = vec.begin();
    let mut count = 0;
    while !cursor.is_end() {
        assert_eq!(cursor.get(), Some(&0));
        cursor.move_next();
        count += 1;
    }
    assert_eq!(count, 25);
}
