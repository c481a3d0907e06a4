//! Console report for a run of integrated movies.

use std::io::{self, Write};

use chrono::{DateTime, Local};
use cinepulse_core::types::NOT_AVAILABLE;
use cinepulse_core::{EngagementMetrics, IntegratedMovie, VideoStat};

const RULE: &str = "------------------------------------------------";

/// Write the full report: per-movie provider data followed by the
/// engagement analysis.
pub fn write_report(
    out: &mut impl Write,
    records: &[IntegratedMovie],
    generated_at: DateTime<Local>,
) -> io::Result<()> {
    writeln!(
        out,
        "Movie report generated {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    )?;
    write_details(out, records)?;
    write_analysis(out, records)
}

pub fn write_details(out: &mut impl Write, records: &[IntegratedMovie]) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "No integrated data found.");
    }

    for record in records {
        let details = &record.details;
        writeln!(out, "Movie Title: {}", record.title)?;

        writeln!(out, "\nTMDB Data:")?;
        writeln!(out, "   [Director: {}]", or_na(details.director.as_deref()))?;
        writeln!(out, "   [Lead Actor: {}]", or_na(details.lead_actor.as_deref()))?;
        writeln!(out, "   [Budget: {}]", format_budget(details.budget))?;
        writeln!(
            out,
            "   [Number of Ratings: {}, Average Rating: {:.1}]",
            details.rating_count, details.average_rating
        )?;

        let (director, lead_actor, review_count, average_review) = match &record.ratings {
            Some(r) => (
                r.director.as_str(),
                r.lead_actor.as_str(),
                r.review_count.as_str(),
                r.average_review.as_str(),
            ),
            None => (NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE),
        };
        writeln!(out, "\nIMDb Data:")?;
        writeln!(out, "   [Director: {director}]")?;
        writeln!(out, "   [Lead Actor: {lead_actor}]")?;
        writeln!(
            out,
            "   [Number of Reviews: {review_count}, Average Review: {average_review}]"
        )?;

        writeln!(out, "\nYoutube Data:")?;
        for (index, stat) in record.videos.iter().enumerate() {
            writeln!(out, "   CHANNEL {}", index + 1)?;
            match stat {
                VideoStat::Video(video) => {
                    writeln!(out, "      [Channel: {}]", video.channel_name)?;
                    writeln!(out, "      [Title: {}]", video.video_title)?;
                    writeln!(out, "      [Views: {}, Likes: {}]", video.views, video.likes)?;
                }
                VideoStat::Unavailable { error } => writeln!(out, "      [{error}]")?,
            }
        }

        writeln!(out, "\n{RULE}")?;
    }

    Ok(())
}

pub fn write_analysis(out: &mut impl Write, records: &[IntegratedMovie]) -> io::Result<()> {
    writeln!(out, "\n--- Movie Popularity and Engagement Analysis ---\n")?;
    writeln!(out, "{RULE}\n")?;

    for record in records {
        let metrics = EngagementMetrics::from_stats(&record.videos);
        let imdb_rating = record
            .ratings
            .as_ref()
            .map_or(NOT_AVAILABLE, |r| r.average_review.as_str());

        writeln!(out, "  Title: {}", record.title)?;
        writeln!(out, "  Budget: {}", format_budget(record.details.budget))?;
        writeln!(out, "  TMDb Rating: {:.1}", record.details.average_rating)?;
        writeln!(out, "  IMDb Rating: {imdb_rating}")?;
        writeln!(
            out,
            "  Average YouTube Views: {}",
            group_thousands(metrics.average_views.round() as u64)
        )?;
        writeln!(
            out,
            "  Average YouTube Likes: {}",
            group_thousands(metrics.average_likes.round() as u64)
        )?;
        writeln!(
            out,
            "  Engagement Ratio (Likes/Views): {:.2}%",
            metrics.engagement_ratio
        )?;
        writeln!(
            out,
            "  Estimated Revenue from YouTube Engagement From 3 Videos: ${}\n",
            format_money(metrics.estimated_revenue)
        )?;
        writeln!(out, "{RULE}\n")?;
    }

    Ok(())
}

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

fn format_budget(budget: u64) -> String {
    if budget == 0 {
        NOT_AVAILABLE.to_string()
    } else {
        format!("${} USD", group_thousands(budget))
    }
}

/// `1234567.891` -> `1,234,567.89`
fn format_money(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    match fixed.split_once('.') {
        Some((whole, cents)) => match whole.parse::<u64>() {
            Ok(n) => format!("{}.{cents}", group_thousands(n)),
            Err(_) => fixed,
        },
        None => fixed,
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
