mod aggregator;
mod answer;
mod config;
mod describe;
mod insight;

pub use aggregator::{PersonalityAggregator, PersonalityProfile};
pub use answer::AnswerRecord;
pub use config::{ConfigError, DEFAULT_DOMINANT_THRESHOLD, ProfileConfig};
pub use describe::{Band, describe, dominant_traits};
pub use insight::{BALANCED_PROFILE, INSIGHT_RULES, InsightRule, generate_insights};
