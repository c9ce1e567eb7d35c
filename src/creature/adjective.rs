//! Adjective classification
//!
//! A creature's adjective is derived from where each of its stats falls
//! inside the range its species was generated from. Stats in the top or
//! bottom 10% unlock descriptive buckets; one qualifying bucket is drawn,
//! then one word from that bucket's list.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::creature::species::StatRanges;
use crate::creature::stat::{Stats, REPUTATION_MAX, REPUTATION_MIN};
use crate::data::Lexicon;

/// Rating above which a stat counts as high
pub const HIGH_RATING: f64 = 0.9;

/// Rating below which a stat counts as low
pub const LOW_RATING: f64 = 0.1;

/// Descriptive word lists an adjective can be drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjectiveBucket {
    Generic,
    Strong,
    Weak,
    /// Strong but dumb
    Himbo,
    Smart,
    Dumb,
    Fast,
    Slow,
    Popular,
    Unpopular,
    /// Strong, smart and fast
    Rounded,
    /// Weak, dumb and slow
    Useless,
}

impl AdjectiveBucket {
    pub const ALL: [AdjectiveBucket; 12] = [
        AdjectiveBucket::Generic,
        AdjectiveBucket::Strong,
        AdjectiveBucket::Weak,
        AdjectiveBucket::Himbo,
        AdjectiveBucket::Smart,
        AdjectiveBucket::Dumb,
        AdjectiveBucket::Fast,
        AdjectiveBucket::Slow,
        AdjectiveBucket::Popular,
        AdjectiveBucket::Unpopular,
        AdjectiveBucket::Rounded,
        AdjectiveBucket::Useless,
    ];
}

/// How far into `[min, max]` a stat sits, from 0.0 to 1.0
///
/// Stats that have grown past the max of their initial range rate 1.0,
/// stats that have dropped under the min rate 0.0.
pub fn stat_rating(actual: f64, min: f64, max: f64) -> f64 {
    if actual >= max {
        return 1.0;
    }
    if actual <= min {
        return 0.0;
    }
    (actual - min) / (max - min)
}

/// High/low flags per stat, computed from ratings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatProfile {
    pub strong: bool,
    pub weak: bool,
    pub smart: bool,
    pub dumb: bool,
    pub fast: bool,
    pub slow: bool,
    pub popular: bool,
    pub unpopular: bool,
}

impl StatProfile {
    pub fn classify(stats: &Stats, ranges: &StatRanges) -> Self {
        let rate = |value: i32, min: i32, max: i32| stat_rating(value as f64, min as f64, max as f64);

        let beef = rate(stats.beef.value, ranges.beef.min, ranges.beef.max);
        let cunning = rate(stats.cunning.value, ranges.cunning.min, ranges.cunning.max);
        let quickness = rate(stats.quickness.value, ranges.quickness.min, ranges.quickness.max);
        // Reputation rates against the universal scale, never the species range
        let reputation = stat_rating(stats.reputation.value, REPUTATION_MIN, REPUTATION_MAX);

        Self {
            strong: beef > HIGH_RATING,
            weak: beef < LOW_RATING,
            smart: cunning > HIGH_RATING,
            dumb: cunning < LOW_RATING,
            fast: quickness > HIGH_RATING,
            slow: quickness < LOW_RATING,
            popular: reputation > HIGH_RATING,
            unpopular: reputation < LOW_RATING,
        }
    }

    /// Every bucket this profile qualifies for; always starts with Generic
    pub fn buckets(&self) -> Vec<AdjectiveBucket> {
        let mut buckets = vec![AdjectiveBucket::Generic];

        if self.strong {
            buckets.push(AdjectiveBucket::Strong);
            if self.dumb {
                buckets.push(AdjectiveBucket::Himbo);
            }
        } else if self.weak {
            buckets.push(AdjectiveBucket::Weak);
        }

        if self.smart {
            buckets.push(AdjectiveBucket::Smart);
        } else if self.dumb {
            buckets.push(AdjectiveBucket::Dumb);
        }

        if self.fast {
            buckets.push(AdjectiveBucket::Fast);
        } else if self.slow {
            buckets.push(AdjectiveBucket::Slow);
        }

        if self.popular {
            buckets.push(AdjectiveBucket::Popular);
        } else if self.unpopular {
            buckets.push(AdjectiveBucket::Unpopular);
        }

        if self.strong && self.smart && self.fast {
            buckets.push(AdjectiveBucket::Rounded);
        }

        if self.weak && self.dumb && self.slow {
            buckets.push(AdjectiveBucket::Useless);
        }

        buckets
    }
}

/// Pick an adjective for a creature with `stats` generated from `ranges`
pub fn pick_adjective(
    stats: &Stats,
    ranges: &StatRanges,
    lexicon: &Lexicon,
    rng: &mut impl Rng,
) -> Result<String> {
    let buckets = StatProfile::classify(stats, ranges).buckets();
    let bucket = *buckets
        .choose(rng)
        .ok_or(GameError::EmptyAdjectiveBucket(AdjectiveBucket::Generic))?;

    lexicon
        .adjectives(bucket)?
        .choose(rng)
        .cloned()
        .ok_or(GameError::EmptyAdjectiveBucket(bucket))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::species::StatRange;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ranges(min: i32, max: i32) -> StatRanges {
        StatRanges {
            beef: StatRange::new(min, max),
            cunning: StatRange::new(min, max),
            quickness: StatRange::new(min, max),
        }
    }

    /// One word per bucket, each word naming its bucket
    fn echo_lexicon() -> Lexicon {
        let mut lexicon = Lexicon::default();
        for bucket in AdjectiveBucket::ALL {
            let word = serde_json::to_value(bucket)
                .ok()
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap();
            lexicon.set_adjectives(bucket, vec![word]);
        }
        lexicon
    }

    #[test]
    fn test_stat_rating_midpoint() {
        assert_eq!(stat_rating(5.0, 4.0, 6.0), 0.5);
    }

    #[test]
    fn test_stat_rating_bounds() {
        assert_eq!(stat_rating(3.0, 4.0, 6.0), 0.0);
        assert_eq!(stat_rating(4.0, 4.0, 6.0), 0.0);
        assert_eq!(stat_rating(6.0, 4.0, 6.0), 1.0);
        assert_eq!(stat_rating(10.0, 4.0, 6.0), 1.0);
    }

    #[test]
    fn test_average_stats_only_generic() {
        let stats = Stats::new(5, 5, 5, 2.5);
        let buckets = StatProfile::classify(&stats, &ranges(4, 6)).buckets();
        assert_eq!(buckets, vec![AdjectiveBucket::Generic]);
    }

    #[test]
    fn test_maxed_stats_buckets() {
        let stats = Stats::new(10, 10, 10, 5.0);
        let buckets = StatProfile::classify(&stats, &ranges(4, 6)).buckets();
        assert_eq!(
            buckets,
            vec![
                AdjectiveBucket::Generic,
                AdjectiveBucket::Strong,
                AdjectiveBucket::Smart,
                AdjectiveBucket::Fast,
                AdjectiveBucket::Popular,
                AdjectiveBucket::Rounded,
            ]
        );
    }

    #[test]
    fn test_himbo_and_useless() {
        let himbo = Stats::new(6, 4, 5, 2.5);
        let buckets = StatProfile::classify(&himbo, &ranges(4, 6)).buckets();
        assert!(buckets.contains(&AdjectiveBucket::Himbo));
        assert!(buckets.contains(&AdjectiveBucket::Dumb));
        assert!(!buckets.contains(&AdjectiveBucket::Smart));

        let useless = Stats::new(1, 1, 1, 0.0);
        let buckets = StatProfile::classify(&useless, &ranges(4, 6)).buckets();
        assert!(buckets.contains(&AdjectiveBucket::Useless));
        assert!(buckets.contains(&AdjectiveBucket::Unpopular));
    }

    #[test]
    fn test_pick_adjective_is_reproducible() {
        let lexicon = echo_lexicon();
        let stats = Stats::new(10, 10, 10, 5.0);

        let mut a = ChaCha8Rng::seed_from_u64(123);
        let mut b = ChaCha8Rng::seed_from_u64(123);
        let first = pick_adjective(&stats, &ranges(4, 6), &lexicon, &mut a).unwrap();
        let second = pick_adjective(&stats, &ranges(4, 6), &lexicon, &mut b).unwrap();
        assert_eq!(first, second);

        let eligible = ["generic", "strong", "smart", "fast", "popular", "rounded"];
        assert!(eligible.contains(&first.as_str()), "unexpected adjective {first}");
    }

    #[test]
    fn test_pick_adjective_fixture_at_range_max() {
        // Stats at the top of [4, 6] qualify for six buckets; seed 3 lands on generic
        let lexicon = echo_lexicon();
        let stats = Stats::new(6, 6, 6, 5.0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let adjective = pick_adjective(&stats, &ranges(4, 6), &lexicon, &mut rng).unwrap();
        assert_eq!(adjective, "generic");
    }

    #[test]
    fn test_pick_adjective_generic_only() {
        let lexicon = echo_lexicon();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let adjective = pick_adjective(&Stats::new(5, 5, 5, 2.5), &ranges(4, 6), &lexicon, &mut rng)
            .unwrap();
        assert_eq!(adjective, "generic");
    }

    #[test]
    fn test_missing_bucket_is_configuration_error() {
        let lexicon = Lexicon::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = pick_adjective(&Stats::new(5, 5, 5, 2.5), &ranges(4, 6), &lexicon, &mut rng)
            .unwrap_err();
        assert!(matches!(err, GameError::EmptyAdjectiveBucket(AdjectiveBucket::Generic)));
    }
}
