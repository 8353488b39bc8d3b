//! Multi-user conversations driven through the full command stack.

use crate::in_memory::helpers::{TestBot, alice, bob, bot, chat_user};
use rstest::rstest;
use taskbot::chat::ports::MessageHandler;
use taskbot::task::{
    domain::{TaskId, TaskState, User},
    ports::TaskRepository,
};

/// Sends `text` as `from` and drains the resulting messages as
/// `(recipient, text)` pairs.
async fn exchange(bot: &TestBot, from: &User, text: &str) -> Vec<(String, String)> {
    bot.router.handle_message(from, text).await;
    bot.sender
        .take()
        .into_iter()
        .map(|message| {
            (
                message.recipient.display_name().to_owned(),
                message.text,
            )
        })
        .collect()
}

fn reply(recipient: &str, text: &str) -> (String, String) {
    (recipient.to_owned(), text.to_owned())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_claim_resolve_round_trip(bot: TestBot, alice: User, bob: User) {
    assert_eq!(
        exchange(&bot, &alice, "/new buy milk").await,
        vec![reply("alice", r#"Task "buy milk" created, id=1"#)]
    );
    assert_eq!(
        exchange(&bot, &bob, "/assign_1").await,
        vec![
            reply("bob", r#"Task "buy milk" is assigned to you"#),
            reply("alice", r#"Task "buy milk" is assigned to @bob"#),
        ]
    );
    assert_eq!(
        exchange(&bot, &bob, "/resolve_1").await,
        vec![
            reply("bob", r#"Task "buy milk" resolved"#),
            reply("alice", r#"Task "buy milk" resolved by @bob"#),
        ]
    );
    assert_eq!(
        exchange(&bot, &alice, "/tasks").await,
        vec![reply("alice", "no tasks")]
    );

    let stored = bot
        .repository
        .find_by_id(TaskId::FIRST)
        .expect("lookup")
        .expect("resolved task is kept");
    assert_eq!(stored.state(), TaskState::Resolved);
    assert_eq!(stored.assignee().map(User::display_name), Some("bob"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn release_and_reclaim_by_another_user(bot: TestBot, alice: User, bob: User) {
    let carol = chat_user(3, "carol");
    exchange(&bot, &alice, "/new fix bike").await;
    exchange(&bot, &bob, "/assign_1").await;

    assert_eq!(
        exchange(&bot, &bob, "/unassign_1").await,
        vec![
            reply("bob", "Accepted"),
            reply("alice", r#"Task "fix bike" has no assignee"#),
        ]
    );
    assert_eq!(
        exchange(&bot, &carol, "/assign_1").await,
        vec![
            reply("carol", r#"Task "fix bike" is assigned to you"#),
            reply("alice", r#"Task "fix bike" is assigned to @carol"#),
        ]
    );
    assert_eq!(
        exchange(&bot, &carol, "/my").await,
        vec![reply("carol", "1. fix bike by @alice\n/unassign_1 /resolve_1")]
    );
    assert_eq!(
        exchange(&bot, &bob, "/resolve_1").await,
        vec![reply("bob", "task is not assigned to you")]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_are_scoped_per_user(bot: TestBot, alice: User, bob: User) {
    exchange(&bot, &alice, "/new buy milk").await;
    exchange(&bot, &bob, "/new walk dog").await;
    exchange(&bot, &alice, "/assign_2").await;

    assert_eq!(
        exchange(&bot, &alice, "/owner").await,
        vec![reply("alice", "1. buy milk by @alice\n/assign_1")]
    );
    assert_eq!(
        exchange(&bot, &alice, "/my").await,
        vec![reply("alice", "2. walk dog by @bob\n/unassign_2 /resolve_2")]
    );
    assert_eq!(
        exchange(&bot, &bob, "/tasks").await,
        vec![reply(
            "bob",
            "1. buy milk by @alice\n/assign_1\n\n2. walk dog by @bob\nassignee: @alice"
        )]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_lines_leave_the_store_untouched(bot: TestBot, alice: User) {
    let sent = exchange(&bot, &alice, "buy milk").await;

    let [(recipient, text)] = sent.as_slice() else {
        panic!("expected one usage message, got {sent:?}");
    };
    assert_eq!(recipient, "alice");
    assert!(text.starts_with("command must start with /\nUsage:\n\t/tasks"));
    assert!(bot.repository.list_all().expect("listing").is_empty());
}
