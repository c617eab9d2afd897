use crate::models::session::{SearchSession, SearchStatus};
use crate::services::gateway::PAGE_SIZE;
use crate::views::card::render_card;

pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong while searching for books.";

pub fn render_loader() -> String {
    "Searching the catalog...".to_string()
}

pub fn render_welcome() -> String {
    [
        "Ready to find your next book?",
        "Search through millions of books and discover new titles, authors, and genres.",
        "Start by typing a book title below.",
    ]
    .join("\n")
}

pub fn render_empty() -> String {
    [
        "No Results Found",
        "No books found for your search.",
        "Try searching with different keywords or check your spelling.",
    ]
    .join("\n")
}

pub fn render_error(message: Option<&str>) -> String {
    [
        "Oops! Something went wrong",
        message.unwrap_or(DEFAULT_ERROR_MESSAGE),
        "Type 'retry' to try again.",
    ]
    .join("\n")
}

pub fn render_results_header(count: usize) -> String {
    let noun = if count == 1 { "book" } else { "books" };
    format!("Found {} {}", count, noun)
}

/// Footer under the result list. Empty when there is nothing more to load.
pub fn render_load_more(shown: usize, total: u64, has_more: bool, loading: bool) -> String {
    if !has_more {
        return String::new();
    }

    let remaining = total.saturating_sub(shown as u64);
    let action = if loading {
        "Loading...".to_string()
    } else {
        format!(
            "Load {} More Books (type 'more')",
            remaining.min(PAGE_SIZE as u64)
        )
    };

    [
        format!("Showing {} of {} books", shown, total),
        format!("{} more books available", remaining),
        action,
    ]
    .join("\n")
}

/// Renders the whole screen for the current session.
pub fn render_session(session: &SearchSession, covers_url: &str) -> String {
    let books = session.books();
    let mut sections = Vec::new();

    match session.status() {
        SearchStatus::Idle => sections.push(render_welcome()),
        SearchStatus::Loading if books.is_empty() => sections.push(render_loader()),
        SearchStatus::Error => sections.push(render_error(session.last_error())),
        SearchStatus::Success if books.is_empty() => sections.push(render_empty()),
        _ => {}
    }

    if !books.is_empty() {
        sections.push(render_results_header(books.len()));
        for (index, book) in books.iter().enumerate() {
            sections.push(format!("{:>3}. {}", index + 1, render_card(book, covers_url)));
        }

        let footer = render_load_more(
            books.len(),
            session.total_results(),
            session.has_more(),
            session.is_loading(),
        );
        if !footer.is_empty() {
            sections.push(footer);
        } else if session.is_loading() {
            sections.push(render_loader());
        }
    }

    sections.join("\n\n")
}
