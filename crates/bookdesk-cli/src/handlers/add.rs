//! Add command handler.

use bookdesk_core::domain::NewBook;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::require_login;

/// Arguments for the add command.
#[derive(Debug, Clone)]
pub struct AddArgs {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: f64,
    pub quantity: u32,
    pub about: Option<String>,
    pub suggest_about: bool,
}

/// Execute the add command.
///
/// With `--suggest-about`, the AI service drafts the synopsis before
/// the book is created.
pub async fn execute(ctx: &CliContext, args: AddArgs) -> Result<(), CliError> {
    require_login(ctx)?;

    let about = if args.suggest_about {
        let draft = ctx.catalog.suggest_about(&args.title, &args.author).await?;
        println!("Suggested synopsis:\n  {draft}\n");
        Some(draft)
    } else {
        args.about
    };

    let book = NewBook {
        title: args.title,
        author: args.author,
        isbn: args.isbn,
        price: args.price,
        quantity: args.quantity,
        about,
    };
    let created = ctx.catalog.add_book(&book).await?;

    println!(
        "Added \"{}\" by {} (ID: {}, {} in stock).",
        created.title, created.author, created.id, created.quantity
    );
    Ok(())
}
