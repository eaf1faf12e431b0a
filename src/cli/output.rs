//! Output formatting utilities

use crate::application::{RecommendationSet, TimelinePage};
use crate::domain::analytics::MoodSummary;
use crate::domain::breathing::Phase;
use crate::domain::catalog::CatalogItem;
use crate::domain::mood_log::MoodLog;
use chrono::{Datelike, NaiveDate, TimeZone};
use std::fmt::{Display, Write};

/// "Today", "Yesterday", "Mar 4", or "Mar 4, 2023" outside the current year
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.pred_opt() == Some(date) {
        "Yesterday".to_string()
    } else if date.year() == today.year() {
        date.format("%b %-d").to_string()
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}

/// One star per whole point of rating, then the number
pub fn rating_stars(rating: f32) -> String {
    let full = rating.clamp(0.0, 5.0).floor() as usize;
    format!("{}{} {:.1}", "★".repeat(full), "☆".repeat(5 - full), rating)
}

/// Format one page of the timeline in the owner's time zone
pub fn format_timeline<Tz>(page: &TimelinePage, today: NaiveDate, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if page.total_entries == 0 {
        return "No entries yet\nStart your journaling journey by writing your first entry"
            .to_string();
    }

    let mut output = String::new();
    let noun = if page.total_entries == 1 {
        "entry"
    } else {
        "entries"
    };
    let _ = writeln!(output, "Your Journey ({} {})\n", page.total_entries, noun);

    if page.entries.is_empty() {
        let _ = writeln!(output, "Nothing on page {}", page.page);
    }

    for entry in &page.entries {
        let local = entry.timestamp.with_timezone(tz);
        let _ = writeln!(
            output,
            "{} {}  {}  {}",
            entry.mood.emoji(),
            day_label(local.date_naive(), today),
            local.format("%-I:%M %p"),
            entry.mood.label()
        );
        if let Some(prompt) = &entry.prompt {
            let _ = writeln!(output, "   \"{}\"", prompt);
        }
        for line in entry.content.lines() {
            let _ = writeln!(output, "   {}", line);
        }
        if !entry.tags.is_empty() {
            let tags: Vec<String> = entry.tags.iter().map(|t| format!("#{}", t)).collect();
            let _ = writeln!(output, "   {}", tags.join(" "));
        }
        output.push('\n');
    }

    if page.total_pages > 1 {
        let _ = write!(output, "Page {} of {}", page.page, page.total_pages);
    }

    output.trim_end().to_string()
}

/// Format the stats block
pub fn format_stats(summary: &MoodSummary) -> String {
    if summary.total_entries == 0 {
        return "No entries yet - write one with: solace write \"...\" --mood okay".to_string();
    }

    let mut output = String::new();
    let _ = writeln!(output, "Entries:        {}", summary.total_entries);
    let _ = writeln!(output, "Average mood:   {:.1} / 5", summary.average_score);
    if let Some(mood) = summary.most_frequent {
        let _ = writeln!(output, "Most frequent:  {} {}", mood.emoji(), mood.label());
    }
    let _ = writeln!(
        output,
        "Weekly trend:   {} ({:+.2})",
        summary.trend_direction().label(),
        summary.trend
    );
    let day_word = if summary.streak == 1 { "day" } else { "days" };
    let _ = writeln!(output, "Streak:         {} {}", summary.streak, day_word);

    output.push_str("\nMood distribution:\n");
    for share in &summary.distribution {
        let _ = writeln!(
            output,
            "  {} {:<8} {:>3}  {:>5.1}%",
            share.mood.emoji(),
            share.mood.label(),
            share.count,
            share.percentage
        );
    }

    output.trim_end().to_string()
}

fn format_item(item: &CatalogItem) -> String {
    format!(
        "{}\n  by {}  {}  [{}]\n  {}",
        item.title,
        item.creator,
        rating_stars(item.rating),
        item.category.label(),
        item.description
    )
}

/// Format a recommendation set
pub fn format_recommendations(set: &RecommendationSet) -> String {
    let mut output = String::new();

    let pattern: Vec<&str> = set.pattern.iter().map(|m| m.label()).collect();
    let _ = writeln!(output, "Mood pattern: {}", pattern.join(", "));
    let _ = writeln!(output, "{}\n", set.insight);

    if set.items.is_empty() {
        output.push_str("No recommendations in this category");
        return output;
    }

    let items: Vec<String> = set.items.iter().map(format_item).collect();
    output.push_str(&items.join("\n\n"));
    output
}

/// Confirmation line after a mood check-in
pub fn format_mood_logged(log: &MoodLog) -> String {
    let mut line = format!(
        "{} Logged mood: {} - {}",
        log.mood.emoji(),
        log.mood.label(),
        log.mood.description()
    );
    if let Some(note) = &log.note {
        let _ = write!(line, "\n   {}", note);
    }
    line
}

/// One breathing phase line
pub fn format_phase(phase: Phase, remaining: u32) -> String {
    format!("{:<7} {:>2}s  {}", phase.to_string(), remaining, phase.instruction())
}
