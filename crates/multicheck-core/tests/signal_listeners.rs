//! Integration tests for signals with several listeners.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use multicheck_core::signal::Signal;
use parking_lot::Mutex;

// A value with a notify signal, wired by hand
struct TestBox {
    text: Mutex<String>,
    text_changed: Signal<String>,
}

impl TestBox {
    fn new() -> Self {
        Self {
            text: Mutex::new(String::new()),
            text_changed: Signal::new(),
        }
    }

    fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        let changed = {
            let mut current = self.text.lock();
            if *current == text {
                false
            } else {
                *current = text.clone();
                true
            }
        };
        if changed {
            self.text_changed.emit(text);
        }
    }
}

#[test]
fn test_notify_only_on_change() {
    let widget = TestBox::new();
    let received = Arc::new(Mutex::new(Vec::new()));
    let received_clone = received.clone();
    widget.text_changed.connect(move |text: &String| {
        received_clone.lock().push(text.clone());
    });

    widget.set_text("Hello");
    widget.set_text("Hello");
    widget.set_text("World");

    assert_eq!(*received.lock(), vec!["Hello".to_string(), "World".to_string()]);
}

#[test]
fn test_listeners_keep_connection_order_across_churn() {
    let widget = TestBox::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    let mut ids = Vec::new();
    for i in 0..4 {
        let order_clone = order.clone();
        ids.push(widget.text_changed.connect(move |_| order_clone.lock().push(i)));
    }
    widget.text_changed.disconnect(ids[1]);
    widget.text_changed.disconnect(ids[2]);
    for i in 4..6 {
        let order_clone = order.clone();
        widget.text_changed.connect(move |_| order_clone.lock().push(i));
    }

    widget.set_text("go");
    assert_eq!(*order.lock(), vec![0, 3, 4, 5]);
}

#[test]
fn test_shared_across_threads() {
    let widget = Arc::new(TestBox::new());
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();
    widget.text_changed.connect(move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let widget = widget.clone();
            std::thread::spawn(move || widget.set_text(format!("thread {i}")))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Each thread writes a distinct string
    assert_eq!(count.load(Ordering::SeqCst), 4);
    assert!(widget.text.lock().starts_with("thread "));
}
