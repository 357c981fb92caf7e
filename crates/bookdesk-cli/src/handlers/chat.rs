//! Chat command handler.
//!
//! Interactive loop over the conversation session: starting the
//! session prints the synthesized opening exchange, then each typed
//! line becomes a user turn.

use bookdesk_core::domain::{Turn, TurnRole};
use bookdesk_core::services::SendOutcome;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::require_login;

fn print_turn(turn: &Turn) {
    match turn.role {
        TurnRole::User => println!("you> {}", turn.text),
        TurnRole::Assistant => println!("assistant> {}", turn.text),
    }
}

/// Execute the chat command.
pub async fn execute(ctx: &CliContext, id: i64) -> Result<(), CliError> {
    require_login(ctx)?;

    let book = ctx.gateway.get_book(id).await?;
    println!(
        "Chatting about \"{}\" by {}. Type 'exit' or press Ctrl-D to quit.\n",
        book.title, book.author
    );

    let conversation = ctx.conversation.start(&book).await;
    for turn in &conversation.turns {
        print_turn(turn);
    }

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" || line == "quit" {
                    break;
                }
                let _ = editor.add_history_entry(&line);

                match ctx.conversation.send(&line).await {
                    SendOutcome::Sent => {
                        if let Some(turn) = ctx.conversation.transcript().last() {
                            print_turn(turn);
                        }
                    }
                    SendOutcome::Busy => {
                        println!("(still waiting for the assistant, try again in a moment)");
                    }
                    // Empty lines are skipped above; the session was
                    // started before the loop.
                    SendOutcome::EmptyText | SendOutcome::NotStarted => {}
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("Bye.");
    Ok(())
}
