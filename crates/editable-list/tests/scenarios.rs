use editable_list::view::{ViewElement, class};
use editable_list::{AddOutcome, AttachOutcome, ItemId, ListConfig, ListMachine, RemoveOutcome};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("editable_list=debug")
        .with_test_writer()
        .try_init();
}

fn tasks_list() -> ListMachine {
    ListMachine::initialize(ListConfig::from_attributes([
        ("heading", "Tasks"),
        ("add-item-text", "New task"),
        ("list-item-1", "Buy milk"),
        ("list-item-2", "Walk dog"),
    ]))
}

fn row_texts(machine: &ListMachine) -> Vec<String> {
    let root = machine.view();
    root.find_all(class::LIST)
        .iter()
        .flat_map(|list| list.find_all(class::ROW))
        .map(ViewElement::own_text)
        .collect()
}

fn id_of(machine: &ListMachine, text: &str) -> ItemId {
    machine
        .items()
        .iter()
        .find(|record| record.text == text)
        .map(|record| record.id)
        .expect("row with text")
}

#[test]
fn tasks_scenario_renders_configured_rows() {
    init_tracing();
    let machine = tasks_list();
    let root = machine.view();

    assert_eq!(row_texts(&machine), vec!["Buy milk", "Walk dog"]);
    assert_eq!(root.find_all(class::HEADING)[0].text_content(), "Tasks");
    let add_row = root.find_all(class::ADD_ROW);
    assert_eq!(add_row.len(), 1);
    assert!(add_row[0].text_content().starts_with("New task"));
    assert_eq!(root.find_all(class::REMOVE).len(), 2);
}

#[test]
fn tasks_scenario_add_then_remove() -> Result<(), editable_list::ListError> {
    init_tracing();
    let mut machine = tasks_list();
    assert!(matches!(machine.attach(), AttachOutcome::Wire { ref rows } if rows.len() == 2));

    let outcome = machine.add("Write spec")?;
    assert!(outcome.clears_input());
    let AddOutcome::Added(record) = outcome else {
        panic!("non-empty input should add a row");
    };
    assert_eq!(record.text, "Write spec");
    assert_eq!(row_texts(&machine), vec!["Buy milk", "Walk dog", "Write spec"]);

    let milk = id_of(&machine, "Buy milk");
    assert!(matches!(machine.remove(milk)?, RemoveOutcome::Removed(ref removed) if removed.text == "Buy milk"));
    assert_eq!(row_texts(&machine), vec!["Walk dog", "Write spec"]);
    assert_eq!(machine.view().find_all(class::REMOVE).len(), 2);
    Ok(())
}

#[test]
fn removing_every_row_leaves_empty_list() -> Result<(), editable_list::ListError> {
    let mut machine = tasks_list();
    machine.attach();
    let ids: Vec<ItemId> = machine.items().iter().map(|record| record.id).collect();
    for id in ids {
        machine.remove(id)?;
    }
    assert!(machine.items().is_empty());
    assert!(row_texts(&machine).is_empty());
    assert!(machine.view().find_all(class::REMOVE).is_empty());
    Ok(())
}

#[test]
fn detach_and_reattach_does_not_rewire() {
    let mut machine = tasks_list();
    assert!(matches!(machine.attach(), AttachOutcome::Wire { .. }));
    machine.detach();
    assert_eq!(machine.attach(), AttachOutcome::AlreadyWired);
}
