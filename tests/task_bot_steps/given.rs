//! Given steps for task bot BDD scenarios.

use super::world::{TaskBotWorld, run_async};
use rstest_bdd_macros::given;
use taskbot::chat::ports::MessageHandler;

#[given("a task bot with users alice, bob and carol")]
fn task_bot_with_users(world: &mut TaskBotWorld) {
    *world = TaskBotWorld::new();
}

#[given(r#"{name} has created the task "{content}""#)]
fn user_created_task(
    world: &mut TaskBotWorld,
    name: String,
    content: String,
) -> Result<(), eyre::Report> {
    let user = world.user(&name)?;
    run_async(
        world
            .router
            .handle_message(&user, &format!("/new {content}")),
    );
    world.last_sent = world.sender.take();
    Ok(())
}

#[given("{name} has claimed task {id:u64}")]
fn user_claimed_task(world: &mut TaskBotWorld, name: String, id: u64) -> Result<(), eyre::Report> {
    let user = world.user(&name)?;
    run_async(world.router.handle_message(&user, &format!("/assign_{id}")));
    world.last_sent = world.sender.take();
    Ok(())
}
