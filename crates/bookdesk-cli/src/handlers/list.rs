//! List command handler.
//!
//! Fetches one catalog page through the controller and renders it as a
//! formatted table with a pagination footer.

use bookdesk_core::services::PageLoad;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{format_page_window, print_separator, truncate_string};

/// Execute the list command.
pub async fn execute(
    ctx: &CliContext,
    query: Option<String>,
    page: u32,
    page_size: u32,
) -> Result<(), CliError> {
    let term = query.unwrap_or_default();
    let loaded = ctx.catalog.load_page(&term, page, page_size).await?;
    let PageLoad::Applied(view) = loaded else {
        // A single CLI invocation issues one load, so it cannot be
        // superseded; nothing to render if it somehow was.
        return Ok(());
    };

    if view.count == 0 {
        if term.is_empty() {
            println!("No books in the catalog yet.");
            println!("Use 'bookdesk add' to create the first title.");
        } else {
            println!("No books match \"{term}\".");
        }
        return Ok(());
    }

    println!("Found {} book(s):\n", view.count);
    println!(
        "{:<5} {:<32} {:<24} {:<15} {:>10} {:>5}",
        "ID", "Title", "Author", "ISBN", "Price", "Qty"
    );
    print_separator(96);

    for book in &view.books {
        println!(
            "{:<5} {:<32} {:<24} {:<15} {:>10.2} {:>5}",
            book.id,
            truncate_string(&book.title, 31),
            truncate_string(&book.author, 23),
            truncate_string(&book.isbn, 14),
            book.price,
            book.quantity
        );
    }

    let total_pages = view.total_pages();
    if total_pages > 1 {
        println!();
        println!(
            "Page {} of {}   {}",
            view.page,
            total_pages,
            format_page_window(&ctx.catalog.page_window(5), view.page)
        );
    }
    Ok(())
}
