//! Console transport parsing and output.

use rstest::rstest;
use taskbot::chat::{
    adapters::console::{ConsoleLineError, ConsoleSender, parse_console_line, read_console},
    ports::MessageSender,
};
use taskbot::task::domain::{ChatId, User, UserId};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[rstest]
fn console_line_carries_sender_and_text() {
    let message = parse_console_line("7 alice: /new buy milk").expect("valid line");

    assert_eq!(message.sender().id(), UserId::new(7));
    assert_eq!(message.sender().display_name(), "alice");
    assert_eq!(message.sender().chat_id(), ChatId::new(7));
    assert_eq!(message.text(), "/new buy milk");
}

#[rstest]
#[case("no separator here", ConsoleLineError::MissingSeparator)]
#[case("7: /tasks", ConsoleLineError::MissingName)]
#[case("7  : /tasks", ConsoleLineError::MissingName)]
#[case("seven alice: /tasks", ConsoleLineError::InvalidUserId("seven".to_owned()))]
fn malformed_console_lines_are_rejected(#[case] line: &str, #[case] expected: ConsoleLineError) {
    assert_eq!(parse_console_line(line).map(|_| ()), Err(expected));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reader_skips_blank_and_malformed_lines() {
    let input: &[u8] = b"1 alice: /new buy milk\n\n   \nnot a message\n2 bob: /tasks\n";
    let (tx, mut rx) = mpsc::channel(8);

    read_console(input, tx, CancellationToken::new())
        .await
        .expect("reading in-memory input");

    let first = rx.recv().await.expect("first message");
    let second = rx.recv().await.expect("second message");
    assert_eq!(first.sender().display_name(), "alice");
    assert_eq!(first.text(), "/new buy milk");
    assert_eq!(second.sender().display_name(), "bob");
    assert_eq!(second.text(), "/tasks");
    assert!(rx.recv().await.is_none(), "reader drops the sender at EOF");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reader_stops_when_cancelled() {
    let input: &[u8] = b"1 alice: /tasks\n";
    let (tx, mut rx) = mpsc::channel(8);
    let cancel = CancellationToken::new();
    cancel.cancel();

    read_console(input, tx, cancel)
        .await
        .expect("cancelled reader exits cleanly");

    assert!(rx.recv().await.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn console_sender_prefixes_recipient_and_chat() {
    let sender = ConsoleSender::new(Vec::new());
    let alice = User::new(UserId::new(1), "alice", ChatId::new(-42));

    sender
        .send_message(&alice, "Task \"buy milk\" created, id=1")
        .await
        .expect("write to buffer");
    sender
        .send_message(&alice, "no tasks\n")
        .await
        .expect("write to buffer");

    let written = String::from_utf8(sender.into_inner()).expect("utf-8 output");
    assert_eq!(
        written,
        "[to @alice #-42] Task \"buy milk\" created, id=1\n[to @alice #-42] no tasks\n"
    );
}
