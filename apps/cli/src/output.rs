use std::fmt::Write;

use catalog_matcher::{CatalogItem, CatalogStatistics, MatchResult};
use profile::PersonalityProfile;

use crate::questions::Questionnaire;

const DEFAULT_EMOJI: &str = "🚗";

pub fn profile_text(profile: &PersonalityProfile) -> String {
    let mut out = String::from("[Your Profile]\n");
    for (dimension, label) in &profile.descriptions {
        let _ = writeln!(out, "  {:<18} {label}", dimension.label());
    }
    let _ = write!(out, "\n{}", profile.insights);
    out
}

pub fn matches_text(title: &str, matches: &[MatchResult<'_>]) -> String {
    let mut out = format!("[{title}]\n");
    if matches.is_empty() {
        out.push_str("No candidates available.");
        return out;
    }
    for (rank, m) in matches.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} {} ({}) - {:.1}%",
            rank + 1,
            m.item.emoji.as_deref().unwrap_or(DEFAULT_EMOJI),
            m.item.display_name(),
            m.item.id,
            m.match_percentage,
        );
    }
    out.trim_end().to_string()
}

pub fn item_text(item: &CatalogItem) -> String {
    let mut out = format!(
        "{} {}\n",
        item.emoji.as_deref().unwrap_or(DEFAULT_EMOJI),
        item.display_name()
    );
    let _ = writeln!(out, "ID: {}", item.id);
    if let Some(t) = &item.item_type {
        let _ = writeln!(out, "Type: {t}");
    }
    if let Some(year) = item.year {
        let _ = writeln!(out, "Year: {year}");
    }
    if let Some(price) = &item.price_range {
        let _ = writeln!(out, "Price range: {price}");
    }
    if let Some(desc) = &item.description {
        let _ = writeln!(out, "{desc}");
    }
    for feature in &item.features {
        let _ = writeln!(out, "  - {feature}");
    }
    for (dimension, score) in item.vector.iter() {
        let _ = writeln!(out, "  {:<18} {score:.1}", dimension.label());
    }
    out.trim_end().to_string()
}

pub fn items_text(items: &[&CatalogItem]) -> String {
    if items.is_empty() {
        return "No items match the given criteria.".to_string();
    }
    items
        .iter()
        .map(|item| format!("{} - {}", item.id, item.display_name()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn statistics_text(stats: &CatalogStatistics) -> String {
    let mut out = format!("Total items: {}", stats.total_items);
    let Some(b) = &stats.breakdown else {
        return out;
    };
    for (title, counts) in [
        ("Types", &b.types_distribution),
        ("Brands", &b.brands_distribution),
        ("Price ranges", &b.price_ranges_distribution),
    ] {
        let _ = write!(out, "\n{title}:");
        for (key, count) in counts {
            let _ = write!(out, "\n  {key}: {count}");
        }
    }
    out.push_str("\nAverage vector:");
    for (dimension, score) in b.average_vector.iter() {
        let _ = write!(out, "\n  {:<18} {score:.2}", dimension.label());
    }
    out
}

pub fn questions_text(questionnaire: &Questionnaire) -> String {
    let mut out = String::new();
    for (q_idx, question) in questionnaire.questions.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", q_idx + 1, question.question);
        for (o_idx, option) in question.options.iter().enumerate() {
            let _ = writeln!(out, "   [{o_idx}] {}", option.text);
        }
    }
    out.trim_end().to_string()
}
