//! Show command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_optional;

/// Execute the show command: fetch one book and print it in full.
pub async fn execute(ctx: &CliContext, id: i64) -> Result<(), CliError> {
    let book = ctx.gateway.get_book(id).await?;

    println!("{} (ID: {})", book.title, book.id);
    println!("  Author:   {}", book.author);
    println!("  ISBN:     {}", book.isbn);
    println!("  Price:    {:.2}", book.price);
    println!("  In stock: {}", book.quantity);
    println!("  About:    {}", format_optional(&book.about, "--"));
    Ok(())
}
