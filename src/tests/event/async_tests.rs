//! Tests for waiting on exit events over a tokio channel.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc;

use crate::event::{Event, EventError, EventType, listen_for_exit};

#[tokio::test]
async fn listen_runs_the_first_exit_callback() {
    let ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran);
    let (tx, mut rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        tx.send(Event::new(EventType::Other("tick".into()), None))
            .unwrap();
        tx.send(Event::exit_with(move || {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        }))
        .unwrap();
    });

    listen_for_exit(&mut rx).await.unwrap();
    assert!(ran.load(Ordering::SeqCst));
}

#[tokio::test]
async fn listen_surfaces_callback_errors() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    tx.send(Event::exit_with(|| Err("disk full".into()))).unwrap();

    let err = listen_for_exit(&mut rx).await.unwrap_err();
    assert!(matches!(err, EventError::Callback(_)));
    assert_eq!(err.to_string(), "disk full");
}

#[tokio::test]
async fn listen_returns_when_channel_closes() {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    drop(tx);
    listen_for_exit(&mut rx).await.unwrap();
}
