//! Concurrent message handling through the worker pool.

use std::sync::Arc;

use crate::in_memory::helpers::{TestBot, alice, bot, chat_user};
use rstest::rstest;
use taskbot::chat::domain::InboundMessage;
use taskbot::task::{domain::User, ports::TaskRepository};
use taskbot::worker::WorkerPool;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_receive_distinct_ids(bot: TestBot) {
    const USERS: u64 = 24;
    let (tx, rx) = mpsc::channel(8);
    let pool = WorkerPool::spawn(Arc::clone(&bot.router), rx, 4, CancellationToken::new());

    for id in 1..=USERS {
        let user = chat_user(id, &format!("user{id}"));
        tx.send(InboundMessage::new(user, format!("/new chore {id}")))
            .await
            .expect("queue accepts message");
    }
    drop(tx);
    pool.join().await.expect("workers exit cleanly");

    let tasks = bot.repository.list_all().expect("listing");
    let ids: Vec<u64> = tasks.iter().map(|task| task.id().value()).collect();
    assert_eq!(ids, (1..=USERS).collect::<Vec<_>>());
    for task in &tasks {
        assert_eq!(
            bot.sender.texts_for(task.owner().id()),
            vec![format!(
                r#"Task "{}" created, id={}"#,
                task.content(),
                task.id()
            )]
        );
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn single_worker_preserves_arrival_order(bot: TestBot, alice: User) {
    let (tx, rx) = mpsc::channel(8);
    let pool = WorkerPool::spawn(Arc::clone(&bot.router), rx, 1, CancellationToken::new());

    for line in ["/new buy milk", "/assign_1", "/resolve_1", "/tasks"] {
        tx.send(InboundMessage::new(alice.clone(), line))
            .await
            .expect("queue accepts message");
    }
    drop(tx);
    pool.join().await.expect("worker exits cleanly");

    assert_eq!(
        bot.sender.texts_for(alice.id()),
        vec![
            r#"Task "buy milk" created, id=1"#.to_owned(),
            r#"Task "buy milk" is assigned to you"#.to_owned(),
            r#"Task "buy milk" resolved"#.to_owned(),
            "no tasks".to_owned(),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_pool_releases_the_queue(bot: TestBot, alice: User) {
    let (tx, rx) = mpsc::channel(8);
    let cancel = CancellationToken::new();
    let pool = WorkerPool::spawn(Arc::clone(&bot.router), rx, 2, cancel.clone());

    cancel.cancel();
    pool.join().await.expect("workers exit after cancellation");

    let late = tx
        .send(InboundMessage::new(alice, "/new too late"))
        .await;
    assert!(late.is_err(), "queue should be closed once workers stop");
    assert!(bot.repository.list_all().expect("listing").is_empty());
}
