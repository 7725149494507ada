#![cfg(feature = "effect")]
//! Integration tests for `IO`.

use adtkit::data::{Either, Panic};
use adtkit::effect::IO;
use rstest::rstest;
use std::cell::RefCell;
use std::rc::Rc;

fn record(journal: &Rc<RefCell<Vec<String>>>, entry: &str) -> IO<usize> {
    let journal = Rc::clone(journal);
    let entry = entry.to_string();
    IO::new(move || {
        journal.borrow_mut().push(entry);
        journal.borrow().len()
    })
}

#[rstest]
fn effects_wait_for_run() {
    let journal = Rc::new(RefCell::new(Vec::new()));
    let program = record(&journal, "open")
        .chain({
            let journal = Rc::clone(&journal);
            move |_| record(&journal, "write")
        })
        .map(|count| count * 100);

    assert!(journal.borrow().is_empty());
    assert_eq!(program.run(), 200);
    assert_eq!(*journal.borrow(), vec!["open", "write"]);
}

#[rstest]
fn attempt_captures_a_panicking_effect() {
    let journal = Rc::new(RefCell::new(Vec::new()));
    let program = record(&journal, "before")
        .map(|_| -> usize { panic!("disk full") })
        .attempt();
    assert_eq!(program.run(), Either::left(Panic::new("disk full")));
    assert_eq!(*journal.borrow(), vec!["before"]);
}

#[rstest]
fn attempt_passes_values_through() {
    assert_eq!(IO::of("fine").attempt().run(), Either::<Panic, &str>::right("fine"));
}
