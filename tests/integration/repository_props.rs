//! Property tests for the booking repository against a plain Vec model

use proptest::prelude::*;
use slotbook::data::{BookingError, MemoryStore};
use slotbook::{BookingRepository, TimeSlot, Weekday};

#[derive(Debug, Clone)]
enum Op {
    Create { day: usize, slot: usize, comment: String },
    /// Remove the booking at `index % len`, or an unknown id when empty
    Remove { index: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..Weekday::ALL.len(), 0..TimeSlot::COUNT, "[a-z ]{0,12}")
            .prop_map(|(day, slot, comment)| Op::Create { day, slot, comment }),
        1 => any::<usize>().prop_map(|index| Op::Remove { index }),
    ]
}

proptest! {
    #[test]
    fn repository_matches_model(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let store = MemoryStore::shared();
        let mut repo = BookingRepository::load(store.clone());
        let mut model: Vec<(Weekday, TimeSlot, String)> = Vec::new();

        for op in ops {
            match op {
                Op::Create { day, slot, comment } => {
                    let day = Weekday::ALL[day];
                    let time = TimeSlot::ALL[slot];
                    let taken = model.iter().any(|(d, t, _)| *d == day && *t == time);
                    let before = repo.list().to_vec();
                    let max_live = before.iter().map(|b| b.id).max();

                    match repo.create(day, time, comment.clone()) {
                        Ok(booking) => {
                            prop_assert!(!taken);
                            prop_assert!(max_live.map_or(true, |max| booking.id > max));
                            model.push((day, time, comment));
                        }
                        Err(BookingError::SlotTaken { .. }) => {
                            prop_assert!(taken);
                            prop_assert_eq!(repo.list(), before.as_slice());
                        }
                        Err(other) => prop_assert!(false, "unexpected error: {other}"),
                    }
                }
                Op::Remove { index } => {
                    if model.is_empty() {
                        prop_assert!(repo.remove(-1).unwrap().is_none());
                    } else {
                        let index = index % model.len();
                        let id = repo.list()[index].id;
                        let removed = repo.remove(id).unwrap();
                        prop_assert!(removed.is_some());
                        model.remove(index);
                    }
                }
            }

            let actual: Vec<_> = repo
                .list()
                .iter()
                .map(|b| (b.day, b.time, b.comment.clone()))
                .collect();
            prop_assert_eq!(&actual, &model);

            for day in Weekday::ALL {
                for time in TimeSlot::ALL {
                    let expected = model.iter().any(|(d, t, _)| *d == day && *t == time);
                    prop_assert_eq!(repo.is_booked(day, time), expected);
                }
            }
        }

        let reloaded = BookingRepository::load(store);
        prop_assert_eq!(reloaded.list(), repo.list());
    }

    #[test]
    fn ids_stay_unique_without_slot_check(count in 1usize..30) {
        let mut repo = BookingRepository::load(MemoryStore::shared()).with_unique_slots(false);
        for _ in 0..count {
            repo.create(Weekday::Monday, TimeSlot::ALL[0], "").unwrap();
        }
        let mut ids: Vec<i64> = repo.list().iter().map(|b| b.id).collect();
        prop_assert_eq!(ids.len(), count);
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        ids.dedup();
        prop_assert_eq!(ids.len(), count);
    }
}
