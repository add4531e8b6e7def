//! Content enrichment step
//!
//! Derives reading time and difficulty from the validated word count and
//! stamps the record with the enrichment time. Total over validated input.

use super::WorkflowStep;
use crate::clock::{Clock, SystemClock};
use crate::models::{ContentMetadata, Difficulty, EnrichedContent, ValidatedContent};
use crate::Result;
use async_trait::async_trait;
use tracing::debug;

/// Assumed reading speed
const WORDS_PER_MINUTE: usize = 200;

/// Adds metadata to validated content.
pub struct EnrichContent<C: Clock = SystemClock> {
    clock: C,
}

impl EnrichContent<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for EnrichContent<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> EnrichContent<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }
}

/// Minutes to read `word_count` words, rounded up, never below one minute.
fn reading_time_minutes(word_count: usize) -> u32 {
    word_count.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

/// Thresholds apply in ascending order; the highest matching one wins.
fn difficulty_for(word_count: usize) -> Difficulty {
    let mut difficulty = Difficulty::Easy;
    if word_count > 100 {
        difficulty = Difficulty::Medium;
    }
    if word_count > 300 {
        difficulty = Difficulty::Hard;
    }
    difficulty
}

#[async_trait]
impl<C: Clock> WorkflowStep for EnrichContent<C> {
    type Input = ValidatedContent;
    type Output = EnrichedContent;

    fn id(&self) -> &'static str {
        "enhance-content"
    }

    fn description(&self) -> &'static str {
        "Adds metadata to validated content"
    }

    async fn execute(&self, input: ValidatedContent) -> Result<EnrichedContent> {
        let reading_time = reading_time_minutes(input.word_count);
        let difficulty = difficulty_for(input.word_count);

        debug!(
            word_count = input.word_count,
            reading_time,
            difficulty = %difficulty,
            "Content enriched"
        );

        Ok(EnrichedContent {
            content: input.content,
            content_type: input.content_type,
            word_count: input.word_count,
            metadata: ContentMetadata {
                reading_time,
                difficulty,
                processed_at: self.clock.now(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::ContentType;
    use chrono::DateTime;

    fn validated(word_count: usize) -> ValidatedContent {
        ValidatedContent {
            content: vec!["word"; word_count].join(" "),
            content_type: ContentType::Article,
            word_count,
            is_valid: true,
        }
    }

    #[test]
    fn reading_time_rounds_up_at_200_wpm() {
        assert_eq!(reading_time_minutes(5), 1);
        assert_eq!(reading_time_minutes(199), 1);
        assert_eq!(reading_time_minutes(200), 1);
        assert_eq!(reading_time_minutes(201), 2);
        assert_eq!(reading_time_minutes(400), 2);
        assert_eq!(reading_time_minutes(401), 3);
    }

    #[test]
    fn reading_time_has_a_one_minute_floor() {
        assert_eq!(reading_time_minutes(0), 1);
        assert_eq!(reading_time_minutes(1), 1);
    }

    #[test]
    fn difficulty_boundaries() {
        assert_eq!(difficulty_for(100), Difficulty::Easy);
        assert_eq!(difficulty_for(101), Difficulty::Medium);
        assert_eq!(difficulty_for(300), Difficulty::Medium);
        assert_eq!(difficulty_for(301), Difficulty::Hard);
    }

    #[test]
    fn hard_wins_over_medium_for_long_content() {
        assert_eq!(difficulty_for(350), Difficulty::Hard);
    }

    #[tokio::test]
    async fn enrichment_stamps_the_injected_clock() {
        let instant = DateTime::parse_from_rfc3339("2026-04-10T16:45:00Z")
            .unwrap()
            .to_utc();
        let step = EnrichContent::with_clock(FixedClock::at(instant));

        let enriched = step.execute(validated(250)).await.unwrap();

        assert_eq!(enriched.metadata.processed_at, instant);
        assert_eq!(enriched.metadata.reading_time, 2);
        assert_eq!(enriched.metadata.difficulty, Difficulty::Medium);
        assert_eq!(enriched.word_count, 250);
    }

    #[tokio::test]
    async fn enrichment_never_fails_on_validated_input() {
        let step = EnrichContent::new();
        for word_count in [5, 50, 100, 101, 300, 301, 1000] {
            assert!(step.execute(validated(word_count)).await.is_ok());
        }
    }
}
