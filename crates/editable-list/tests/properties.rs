use editable_list::view::class;
use editable_list::{AddOutcome, ItemId, ListConfig, ListMachine, RemoveOutcome};
use proptest::prelude::*;

fn wired(items: &[String]) -> ListMachine {
    let mut machine = ListMachine::initialize(ListConfig {
        items: items.to_vec(),
        ..ListConfig::default()
    });
    machine.attach();
    machine
}

proptest! {
    /// Property: initial render has one row and one remove control per item, in order
    #[test]
    fn prop_initial_rows_match_items(items in prop::collection::vec(".{0,12}", 0..20)) {
        let machine = ListMachine::initialize(ListConfig {
            items: items.clone(),
            ..ListConfig::default()
        });
        let root = machine.view();
        let rows = root.find_all(class::ROW);
        // The add row also carries the row class.
        prop_assert_eq!(rows.len(), items.len() + 1);
        prop_assert_eq!(root.find_all(class::REMOVE).len(), items.len());
        let texts: Vec<String> = rows.iter().take(items.len()).map(|row| row.own_text()).collect();
        prop_assert_eq!(texts, items);
    }

    /// Property: every non-empty add grows the list by exactly one and clears the input
    #[test]
    fn prop_adds_grow_by_one(inputs in prop::collection::vec(".{0,8}", 0..30)) {
        let mut machine = wired(&[]);
        for input in &inputs {
            let before = machine.items().len();
            let outcome = machine.add(input);
            prop_assert_eq!(
                outcome.as_ref().map(AddOutcome::clears_input),
                Ok(!input.is_empty())
            );
            if input.is_empty() {
                prop_assert_eq!(outcome, Ok(AddOutcome::IgnoredEmpty));
                prop_assert_eq!(machine.items().len(), before);
            } else {
                prop_assert!(matches!(outcome, Ok(AddOutcome::Added(_))));
                prop_assert_eq!(machine.items().len(), before + 1);
            }
        }
        let expected = inputs.iter().filter(|input| !input.is_empty()).count();
        prop_assert_eq!(machine.view().find_all(class::REMOVE).len(), expected);
    }

    /// Property: removals shrink by one and drop exactly the chosen row
    #[test]
    fn prop_removals_shrink_by_one(
        items in prop::collection::vec("[a-z]{1,6}", 1..15),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..15),
    ) {
        let mut machine = wired(&items);
        for pick in picks {
            if machine.items().is_empty() {
                break;
            }
            let ids: Vec<ItemId> = machine.items().iter().map(|record| record.id).collect();
            let id = ids[pick.index(ids.len())];
            let before = machine.items().len();
            prop_assert!(matches!(machine.remove(id), Ok(RemoveOutcome::Removed(_))));
            prop_assert_eq!(machine.items().len(), before - 1);
            prop_assert!(machine.items().get(id).is_none());
            prop_assert_eq!(
                machine.view().find_all(class::REMOVE).len(),
                machine.items().len()
            );
        }
    }
}
