//! Engagement arithmetic for the analysis section of the report.

use crate::types::VideoStat;

/// Average price of a cinema ticket, in USD.
pub const TICKET_PRICE_USD: f64 = 11.23;

/// Share of likes assumed to turn into a ticket purchase.
pub const LIKE_TO_TICKET_CONVERSION: f64 = 0.10;

/// Derived engagement figures for a single movie's videos.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngagementMetrics {
    pub average_views: f64,
    pub average_likes: f64,
    /// Likes per view, as a percentage.
    pub engagement_ratio: f64,
    /// Estimated box office revenue in USD.
    pub estimated_revenue: f64,
}

impl EngagementMetrics {
    /// Computes the metrics over the real video entries. Sentinel entries
    /// are ignored and an empty set yields all zeros.
    pub fn from_stats(stats: &[VideoStat]) -> Self {
        let summaries: Vec<_> = stats.iter().filter_map(VideoStat::summary).collect();
        if summaries.is_empty() {
            return Self::default();
        }

        let count = summaries.len() as f64;
        let average_views = summaries.iter().map(|s| s.views as f64).sum::<f64>() / count;
        let average_likes = summaries.iter().map(|s| s.likes as f64).sum::<f64>() / count;

        let engagement_ratio = if average_views > 0.0 {
            average_likes / average_views * 100.0
        } else {
            0.0
        };

        Self {
            average_views,
            average_likes,
            engagement_ratio,
            estimated_revenue: average_likes * TICKET_PRICE_USD * LIKE_TO_TICKET_CONVERSION,
        }
    }
}
