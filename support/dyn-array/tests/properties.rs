use kata_dyn_array::DynArray;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Push),
        1 => Just(Op::Pop),
    ]
}

proptest! {
    /// Property: size tracks pushes minus successful pops.
    #[test]
    fn prop_size_is_pushes_minus_pops(
        capacity in 1usize..8,
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        let mut array = DynArray::new(capacity).unwrap();
        let mut expected = 0usize;
        for op in ops {
            match op {
                Op::Push(v) => {
                    array.push_back(v).unwrap();
                    expected += 1;
                }
                Op::Pop => {
                    if array.pop_back().is_ok() {
                        expected -= 1;
                    }
                }
            }
            prop_assert_eq!(array.len(), expected);
        }
    }

    /// Property: capacity is initial * 2^k and never below size.
    #[test]
    fn prop_capacity_is_power_of_two_multiple(
        capacity in 1usize..8,
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        let mut array = DynArray::new(capacity).unwrap();
        for op in ops {
            let before = array.capacity();
            match op {
                Op::Push(v) => array.push_back(v).unwrap(),
                Op::Pop => {
                    let _ = array.pop_back();
                }
            }
            prop_assert!(array.capacity() >= before, "capacity shrank");
            prop_assert!(array.capacity() >= array.len());
            prop_assert_eq!(array.capacity() % capacity, 0);
            prop_assert!((array.capacity() / capacity).is_power_of_two());
        }
    }

    /// Property: push then pop restores the contents.
    #[test]
    fn prop_push_pop_restores_contents(
        capacity in 1usize..8,
        initial in prop::collection::vec(any::<i32>(), 0..50),
        x in any::<i32>(),
    ) {
        let mut array = DynArray::new(capacity).unwrap();
        for v in &initial {
            array.push_back(*v).unwrap();
        }
        let capacity_before = array.capacity();

        array.push_back(x).unwrap();
        prop_assert_eq!(array.pop_back(), Ok(x));

        let contents: Vec<i32> = array.iter().copied().collect();
        prop_assert_eq!(contents, initial);
        prop_assert!(array.capacity() >= capacity_before);
    }

    /// Property: the array agrees with `Vec` on get after arbitrary sets.
    #[test]
    fn prop_matches_vec_model(
        values in prop::collection::vec(any::<i32>(), 1..50),
        writes in prop::collection::vec((any::<prop::sample::Index>(), any::<i32>()), 0..50),
    ) {
        let mut array = DynArray::new(1).unwrap();
        let mut model = values.clone();
        for v in &values {
            array.push_back(*v).unwrap();
        }
        for (index, v) in writes {
            let i = index.index(model.len());
            array.set(i, v).unwrap();
            model[i] = v;
        }
        for (i, expected) in model.iter().enumerate() {
            prop_assert_eq!(array.get(i), Ok(expected));
        }
        prop_assert!(array.get(model.len()).is_err());
    }
}
