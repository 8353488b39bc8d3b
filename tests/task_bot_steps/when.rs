//! When steps for task bot BDD scenarios.

use super::world::{TaskBotWorld, run_async};
use rstest_bdd_macros::when;
use taskbot::chat::ports::MessageHandler;

#[when(r#"{name} sends "{text}""#)]
fn user_sends(world: &mut TaskBotWorld, name: String, text: String) -> Result<(), eyre::Report> {
    let user = world.user(&name)?;
    run_async(world.router.handle_message(&user, &text));
    world.last_sent = world.sender.take();
    Ok(())
}
