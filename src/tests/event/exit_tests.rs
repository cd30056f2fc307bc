//! Tests for parsing and handling exit events.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;

use crate::event::{
    Event, EventError, EventType, ExitCallback, handle_exit, parse_exit, wait_for_exit,
};

fn counting_event(counter: &Arc<AtomicUsize>) -> Event {
    let counter = Arc::clone(counter);
    Event::exit_with(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    })
}

#[test]
fn handle_exit_runs_the_callback_once() {
    let counter = Arc::new(AtomicUsize::new(0));
    handle_exit(counting_event(&counter)).unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn exit_without_callback_is_a_no_op() {
    handle_exit(Event::exit(None)).unwrap();
    assert!(parse_exit(Event::exit(None)).unwrap().is_none());
}

#[test]
fn callback_errors_pass_through_unchanged() {
    let event = Event::exit_with(|| Err("report output encountered 1 error(s)".into()));
    let err = handle_exit(event).unwrap_err();

    assert!(matches!(err, EventError::Callback(_)));
    assert_eq!(err.to_string(), "report output encountered 1 error(s)");
}

#[test]
fn non_exit_events_are_rejected() {
    let event = Event::new(EventType::Other("progress".into()), None);
    let Err(err) = parse_exit(event) else {
        panic!("expected a bad exit event");
    };
    assert!(matches!(err, EventError::BadExitEvent(_)));
    assert!(err.to_string().contains("got 'progress'"));
}

#[test]
fn exit_event_without_payload_is_rejected() {
    let Err(err) = parse_exit(Event::new(EventType::Exit, None)) else {
        panic!("expected a bad exit event");
    };
    assert_eq!(err.to_string(), "bad exit event: missing payload");
}

#[test]
fn foreign_payload_is_rejected() {
    let event = Event::new(EventType::Exit, Some(Box::new(42_u32)));
    let err = handle_exit(event).unwrap_err();
    assert_eq!(
        err.to_string(),
        "bad exit event: payload is not an exit callback"
    );
}

#[test]
fn payload_can_be_built_by_hand() {
    let counter = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&counter);
    let callback: Option<ExitCallback> = Some(Box::new(move || {
        c.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }));

    handle_exit(Event::new(EventType::Exit, Some(Box::new(callback)))).unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn wait_for_exit_skips_other_events() {
    let counter = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = mpsc::channel();

    tx.send(Event::new(EventType::Other("started".into()), None))
        .unwrap();
    tx.send(counting_event(&counter)).unwrap();
    tx.send(counting_event(&counter)).unwrap();

    wait_for_exit(&rx).unwrap();
    // Only the first exit event is handled.
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn wait_for_exit_on_closed_channel_succeeds() {
    let (tx, rx) = mpsc::channel::<Event>();
    drop(tx);
    wait_for_exit(&rx).unwrap();
}

#[test]
fn exit_from_another_thread() {
    let counter = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = mpsc::channel();

    let event = counting_event(&counter);
    let worker = std::thread::spawn(move || tx.send(event).unwrap());

    wait_for_exit(&rx).unwrap();
    worker.join().unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}
