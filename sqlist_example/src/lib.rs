//! End-to-end use of `sqlist`: the walkthrough of every list operation, lists written
//! with `sqlist!`, and checks that misuse of the macro fails to compile.

use sqlist::prelude::*;

/// A list of the size used throughout the walkthrough.
pub type Scores = SqList<i32>;

/// Runs insert, delete, locate and get against a fresh list and returns one line per
/// step, in the order they ran. Each line is also logged at `info` level.
pub fn walkthrough() -> Result<Vec<String>, Error> {
    let mut lines = Vec::new();
    let mut note = |line: String| {
        log::info!("{}", line);
        lines.push(line);
    };

    let mut list = Scores::new();
    note(format!("capacity {}, length {}", list.capacity(), list.len()));

    list.insert(1, 10)?;
    list.insert(2, 20)?;
    list.insert(3, 30)?;
    note(format!("after inserting 10, 20, 30: {}", list));

    list.insert(2, 99)?;
    note(format!("after inserting 99 at 2: {}", list));

    let removed = list.delete(3)?;
    note(format!("deleted {} from 3: {}", removed, list));

    note(format!("99 is at {}", list.locate(&99)));
    note(format!("position 2 holds {}", list.get(2)?));

    for (position, value) in [(0, 100), (100, 200)] {
        if let Err(e) = list.insert(position, value) {
            note(format!("insert {} at {}: {}", value, position, e));
        }
    }
    for position in [0, 100] {
        if let Err(e) = list.delete(position) {
            note(format!("delete at {}: {}", position, e));
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn walkthrough_lines() {
        init_logger();
        let lines = walkthrough().unwrap();
        assert_eq!(
            lines,
            [
                "capacity 100, length 0",
                "after inserting 10, 20, 30: 10 20 30",
                "after inserting 99 at 2: 10 99 20 30",
                "deleted 20 from 3: 10 99 30",
                "99 is at 2",
                "position 2 holds 99",
                "insert 100 at 0: position 0 is out of range for a list of length 3",
                "insert 200 at 100: position 100 is out of range for a list of length 3",
                "delete at 0: position 0 is out of range for a list of length 3",
                "delete at 100: position 100 is out of range for a list of length 3",
            ]
        );
    }

    #[test]
    fn macro_default_capacity() {
        let list: Scores = sqlist![10, 99, 20, 30];
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert_eq!(list.to_string(), "10 99 20 30");

        let empty: SqList<u8> = sqlist![];
        assert!(empty.is_empty());
        assert_eq!(empty.capacity(), DEFAULT_CAPACITY);

        let small: SqList<u8, 4> = sqlist![1, 2; capacity = 4];
        assert_eq!(small.capacity(), 4);
    }

    #[test]
    fn macro_explicit_capacity() {
        let mut list = sqlist![String::from("a"), String::from("b"); capacity = 3];
        assert_eq!(list.capacity(), 3);
        list.push(String::from("c")).unwrap();
        let err = list.push(String::from("d")).unwrap_err();
        assert_eq!(err.error(), Error::CapacityExceeded { capacity: 3 });
        assert_eq!(list.locate(&String::from("c")), 3);
    }

    const SMALL: usize = 2;

    #[test]
    fn macro_const_capacity() {
        let list = sqlist![1u8, 2; capacity = SMALL];
        assert!(list.is_full());
    }

    #[test]
    #[should_panic(expected = "sqlist! given 3 elements but the capacity is 2")]
    fn macro_const_capacity_overflow_panics() {
        let _ = sqlist![1u8, 2, 3; capacity = SMALL];
    }

    #[test]
    fn shared_between_threads() {
        init_logger();
        let list: SqList<u32, 8> = sqlist![1, 2, 3, 4; capacity = 8];
        let total = std::thread::scope(|s| {
            let evens = s.spawn(|| list.iter().filter(|v| *v % 2 == 0).sum::<u32>());
            let odds = s.spawn(|| list.iter().filter(|v| *v % 2 == 1).sum::<u32>());
            evens.join().unwrap() + odds.join().unwrap()
        });
        assert_eq!(total, 10);
    }

    #[cfg(not(miri))]
    #[test]
    fn compile_errors_are_good() {
        let t = trybuild::TestCases::new();
        t.compile_fail("shouldfail/*.rs");
    }
}
