//! Main commands enum and subcommand arguments.

use clap::Subcommand;

/// Available commands for the catalog client.
#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        /// Username (prompted when omitted)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// List books, optionally filtered by a search term
    List {
        /// Search term matched against title, author, and ISBN
        query: Option<String>,

        /// 1-based page to fetch
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Books per page
        #[arg(long = "page-size", default_value = "10")]
        page_size: u32,
    },

    /// Show one book in full
    Show {
        /// Book id
        id: i64,
    },

    /// Add a new title to the catalog
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        /// 13-digit ISBN (uniqueness is checked server-side)
        #[arg(long)]
        isbn: String,

        /// List price per copy
        #[arg(long)]
        price: f64,

        /// Copies on hand
        #[arg(short, long, default_value = "1")]
        quantity: u32,

        /// Synopsis text
        #[arg(long)]
        about: Option<String>,

        /// Ask the AI service to draft the synopsis
        #[arg(long, conflicts_with = "about")]
        suggest_about: bool,
    },

    /// Assign (sell) copies of a book to a person
    Assign {
        /// Book id
        id: i64,

        /// Recipient; required unless --quick
        #[arg(short = 'n', long)]
        person: Option<String>,

        /// Copies to assign
        #[arg(short, long, default_value = "1")]
        quantity: u32,

        /// Per-copy selling price (defaults to the list price)
        #[arg(long)]
        price: Option<f64>,

        /// One-click mode: one copy, server defaults for person and price
        #[arg(long, conflicts_with_all = ["person", "quantity", "price"])]
        quick: bool,
    },

    /// Chat with the assistant about a book
    Chat {
        /// Book id
        id: i64,
    },
}
