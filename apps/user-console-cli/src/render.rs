//! Plain-text and JSON output for the CLI commands.

use anyhow::{Context, Result};
use serde::Serialize;
use user_console::{Page, Statistics, UserRecord};

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

pub fn print_page(page: &Page<UserRecord>) {
    for user in &page.items {
        println!("{}", user_line(user));
    }
    let info = &page.page_info;
    println!(
        "Page {}/{} ({} matching users)",
        info.page_index + 1,
        info.total_pages.max(1),
        info.total_count
    );
}

pub fn print_user(user: &UserRecord) {
    println!("{}", user_line(user));
}

pub fn print_suggestions(suggestions: &[String]) {
    if suggestions.is_empty() {
        println!("No suggestions");
        return;
    }
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!("{i}: {suggestion}");
    }
}

pub fn print_statistics(title: &str, stats: &Statistics) {
    println!("{title}");
    println!("  total users:    {}", stats.total_users);
    println!(
        "  active users:   {} ({:.2}%)",
        stats.active_users, stats.active_users_percentage
    );
    println!(
        "  blocked users:  {} ({:.2}%)",
        stats.blocked_users, stats.blocked_users_percentage
    );
    println!(
        "  students:       {} ({:.2}%)",
        stats.total_students, stats.students_percentage
    );
    println!(
        "  tutors:         {} ({:.2}%)",
        stats.total_tutors, stats.tutors_percentage
    );
    println!("  admins:         {}", stats.total_admins);
}

fn user_line(user: &UserRecord) -> String {
    let last_login = user
        .last_login_at
        .map_or_else(|| "never".to_owned(), |at| at.date().to_string());
    format!(
        "{}  {:<20} {:<28} {:<8} {:<10} registered {}  last login {}",
        user.id,
        user.display_name,
        user.email,
        user.role().as_token(),
        user.status.as_token(),
        user.registered_at.date(),
        last_login,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_line_shows_dates_and_tokens() {
        let user: UserRecord = serde_json::from_value(serde_json::json!({
            "id": "7f0c9a4e-52b1-4f6e-9a57-0d3c1a6e0003",
            "display_name": "Bob Johnson",
            "email": "bob@example.com",
            "role": "STUDENT",
            "status": "INACTIVE",
            "registered_at": "2024-02-20T14:30:00Z",
            "enabled": true
        }))
        .unwrap();

        let line = user_line(&user);
        assert!(line.contains("Bob Johnson"));
        assert!(line.contains("STUDENT"));
        assert!(line.contains("INACTIVE"));
        assert!(line.contains("registered 2024-02-20"));
        assert!(line.ends_with("last login never"));
    }
}
