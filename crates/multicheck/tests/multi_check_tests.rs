//! Integration tests for the MultiCheck control.
//!
//! These drive the control the way a host does: build it from props, click
//! labels, and observe the `changed` signal.

use std::sync::Arc;

use multicheck::prelude::*;
use parking_lot::Mutex;

fn four_options() -> Vec<CheckOption> {
    (1..=4)
        .map(|i| CheckOption::new(format!("Option {i}"), i.to_string()))
        .collect()
}

fn record(control: &MultiCheck) -> Arc<Mutex<Vec<Vec<CheckOption>>>> {
    let received = Arc::new(Mutex::new(Vec::new()));
    let received_clone = received.clone();
    control.changed().connect(move |options: &Vec<CheckOption>| {
        received_clone.lock().push(options.clone());
    });
    received
}

#[test]
fn test_render_without_interaction_is_silent() {
    let control = MultiCheck::new(four_options()).with_label("Pick");
    let received = record(&control);

    let surface = control.surface();
    assert_eq!(surface.label.as_deref(), Some("Pick"));
    assert!(!surface.select_all.is_checked());
    assert!(surface.columns.iter().flatten().all(|c| !c.is_checked()));
    assert!(received.lock().is_empty());
}

#[test]
fn test_click_one_then_two() {
    let mut control = MultiCheck::new(four_options());
    let received = record(&control);

    control.click_label("Option 1");
    control.click_label("Option 2");

    let received = received.lock();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0], vec![CheckOption::new("Option 1", "1")]);
    assert_eq!(
        received[1],
        vec![CheckOption::new("Option 1", "1"), CheckOption::new("Option 2", "2")]
    );
    assert!(!control.find_checkbox("Select All").unwrap().is_checked());
}

#[test]
fn test_select_all_then_again() {
    let mut control = MultiCheck::new(four_options());
    let received = record(&control);

    control.click_label("Select All");
    assert!(control.find_checkbox("Select All").unwrap().is_checked());
    for i in 1..=4 {
        assert!(control.find_checkbox(&format!("Option {i}")).unwrap().is_checked());
    }

    control.click_label("Select All");
    assert!(control.surface().columns.iter().flatten().all(|c| !c.is_checked()));

    let received = received.lock();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0], four_options());
    assert!(received[1].is_empty());
}

#[test]
fn test_checking_every_option_checks_select_all() {
    let mut control = MultiCheck::new(four_options());
    for i in 1..=4 {
        control.toggle_option(&i.to_string());
    }
    assert!(control.find_checkbox("Select All").unwrap().is_checked());

    control.toggle_option("3");
    assert!(!control.find_checkbox("Select All").unwrap().is_checked());
}

#[test]
fn test_columns_from_props() {
    let props = MultiCheckProps::from_json_str(
        r#"{
            "options": [
                {"label": "Option 1", "value": "1"},
                {"label": "Option 2", "value": "2"},
                {"label": "Option 3", "value": "3"},
                {"label": "Option 4", "value": "4"}
            ],
            "columns": 2
        }"#,
    )
    .unwrap();
    let control = MultiCheck::from_props(props);

    let columns = control.surface().columns;
    let texts: Vec<Vec<&str>> = columns
        .iter()
        .map(|column| column.iter().map(CheckBox::text).collect())
        .collect();
    assert_eq!(
        texts,
        vec![vec!["Option 1", "Option 2"], vec!["Option 3", "Option 4"]]
    );
}

#[test]
fn test_more_columns_than_options() {
    let control = MultiCheck::new(four_options()[..3].to_vec()).with_columns(5);
    let columns = control.surface().columns;
    assert_eq!(columns.len(), 3);
    assert!(columns.iter().all(|column| column.len() == 1));
}

#[test]
fn test_initial_values_from_props() {
    let props = MultiCheckProps {
        values: vec!["2".to_string()],
        ..MultiCheckProps::new(four_options())
    };
    let mut control = MultiCheck::from_props(props);
    let received = record(&control);

    assert!(control.is_checked("2"));
    assert!(received.lock().is_empty());

    control.click_label("Select All");
    assert_eq!(received.lock()[0], four_options());
}

#[test]
fn test_scoped_listener() {
    let mut control = MultiCheck::new(four_options());
    let count = Arc::new(Mutex::new(0));
    {
        let count_clone = count.clone();
        let _guard = control.changed().connect_scoped(move |_: &Vec<CheckOption>| {
            *count_clone.lock() += 1;
        });
        assert_eq!(control.changed().connection_count(), 1);
    }
    assert!(!control.changed().has_connections());

    control.toggle_option("1");
    assert_eq!(*count.lock(), 0);
}

#[test]
fn test_control_moves_across_threads() {
    let mut control = MultiCheck::new(four_options());
    let received = record(&control);

    let handle = std::thread::spawn(move || {
        control.toggle_all();
        control
    });
    let control = handle.join().unwrap();

    assert!(control.is_all_selected());
    assert_eq!(received.lock().len(), 1);
}

#[test]
fn test_events_and_rendering() {
    let mut control = MultiCheck::new(four_options()).with_columns(2);

    let mut event = MultiCheckEvent::key_release(Key::Enter, CheckTarget::Option("4".into()));
    assert!(control.event(&mut event));

    let text = control.render_text(&RenderOptions::default());
    assert_eq!(
        text,
        "[ ] Select All  [ ] Option 1  [ ] Option 3\n                [ ] Option 2  [x] Option 4\n"
    );
}
