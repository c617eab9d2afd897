use crate::models::book::Book;

const MAX_TITLE_CHARS: usize = 60;
const MAX_AUTHORS: usize = 3;

pub fn cover_url(covers_url: &str, cover_id: i64) -> String {
    format!("{}/b/id/{}-M.jpg", covers_url, cover_id)
}

pub fn display_authors(authors: &[String]) -> String {
    if authors.is_empty() {
        return "Unknown Author".to_string();
    }
    authors
        .iter()
        .take(MAX_AUTHORS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_CHARS {
        let head: String = title.chars().take(MAX_TITLE_CHARS).collect();
        format!("{}...", head)
    } else {
        title.to_string()
    }
}

pub fn render_card(book: &Book, covers_url: &str) -> String {
    let mut lines = vec![
        truncate_title(&book.title),
        format!("  {}", display_authors(&book.author_name)),
    ];

    if let Some(year) = book.first_publish_year {
        lines.push(format!("  First published: {}", year));
    }

    match book.cover_i {
        Some(cover_id) => lines.push(format!("  Cover: {}", cover_url(covers_url, cover_id))),
        None => lines.push("  No cover available".to_string()),
    }

    lines.join("\n")
}
