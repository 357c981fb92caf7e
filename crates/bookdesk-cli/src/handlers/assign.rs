//! Assign command handler.
//!
//! Drives the assignment transaction for one book: the form flow with
//! an explicit person, quantity, and price, or the one-click `--quick`
//! variant that leaves the defaults to the server.

use bookdesk_core::domain::AssignmentRequest;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::require_login;

/// Arguments for the assign command.
#[derive(Debug, Clone)]
pub struct AssignArgs {
    pub id: i64,
    pub person: Option<String>,
    pub quantity: u32,
    pub price: Option<f64>,
    pub quick: bool,
}

/// Execute the assign command.
pub async fn execute(ctx: &CliContext, args: AssignArgs) -> Result<(), CliError> {
    require_login(ctx)?;

    // Fetch the book up front: it shows availability, defaults the
    // selling price, and lets the quick flow bail before any write.
    let book = ctx.gateway.get_book(args.id).await?;
    println!(
        "{} by {} | available: {}",
        book.title, book.author, book.quantity
    );

    let request = if args.quick {
        if book.quantity == 0 {
            return Err(CliError::Arguments("Book is out of stock".to_string()));
        }
        AssignmentRequest::one_copy()
    } else {
        let person = args.person.ok_or_else(|| {
            CliError::Arguments("--person is required (or use --quick)".to_string())
        })?;
        // Default selling price is the list price.
        let price = args.price.unwrap_or(book.price);
        AssignmentRequest::new(person, args.quantity, price)
    };

    if let Some(total) = request.total_amount() {
        println!("Total amount: {total:.2}");
    }

    let receipt = ctx.catalog.assign(args.id, &request).await?;
    println!("{}", receipt.message);
    println!("Remaining stock: {}", receipt.remaining_quantity);
    Ok(())
}
