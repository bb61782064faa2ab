//! Heuristic domain classification over extracted indicators.

use super::values::GENERAL_DOMAIN;

/// Domain buckets in priority order.
///
/// Each indicator scores for the first bucket with a keyword that is a
/// substring of it. When two buckets tie on score, the earlier one wins.
/// Ties are settled by this order alone, never by which indicator came
/// first in the text.
pub const DOMAIN_PRIORITY: &[(&str, &[&str])] = &[
    (
        "healthcare",
        &["healthcare", "medical", "patient", "clinical", "hipaa", "phi"],
    ),
    (
        "finance",
        &["finance", "banking", "payment", "trading", "sox", "pci"],
    ),
    (
        "manufacturing",
        &["manufacturing", "supply", "inventory", "production"],
    ),
    ("retail", &["retail", "commerce", "customer", "sales", "crm"]),
    ("education", &["education", "learning", "student", "course"]),
    ("technology", &["api", "database", "cloud", "microservice"]),
];

const BASE_CONFIDENCE: f64 = 0.5;
const CONFIDENCE_PER_HIT: f64 = 0.2;
const MAX_BASE_CONFIDENCE: f64 = 0.9;

/// No indicators at all.
pub const NO_INDICATOR_CONFIDENCE: f64 = 0.1;
/// Indicators found but none belongs to a bucket.
pub const UNBUCKETED_CONFIDENCE: f64 = 0.2;

/// Enhancement only runs below this confidence.
pub const ENHANCEMENT_THRESHOLD: f64 = 0.8;
const ENHANCEMENT_MIN_INDICATORS: usize = 3;
const ENHANCEMENT_BOOST: f64 = 0.1;
const MAX_ENHANCED_CONFIDENCE: f64 = 0.95;

/// A domain and how sure the classifier is about it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub domain: &'static str,
    pub confidence: f64,
}

fn bucket_for(indicator: &str) -> Option<usize> {
    DOMAIN_PRIORITY
        .iter()
        .position(|(_, keywords)| keywords.iter().any(|k| indicator.contains(k)))
}

/// Scores indicators against [`DOMAIN_PRIORITY`].
pub fn classify(indicators: &[String]) -> Classification {
    if indicators.is_empty() {
        return Classification {
            domain: GENERAL_DOMAIN,
            confidence: NO_INDICATOR_CONFIDENCE,
        };
    }

    let mut scores = [0u32; DOMAIN_PRIORITY.len()];
    for indicator in indicators {
        if let Some(bucket) = bucket_for(indicator) {
            scores[bucket] += 1;
        }
    }

    let mut best: Option<(usize, u32)> = None;
    for (bucket, &score) in scores.iter().enumerate() {
        if score > 0 && best.map_or(true, |(_, top)| score > top) {
            best = Some((bucket, score));
        }
    }

    match best {
        Some((bucket, score)) => Classification {
            domain: DOMAIN_PRIORITY[bucket].0,
            confidence: MAX_BASE_CONFIDENCE
                .min(BASE_CONFIDENCE + CONFIDENCE_PER_HIT * f64::from(score)),
        },
        None => Classification {
            domain: GENERAL_DOMAIN,
            confidence: UNBUCKETED_CONFIDENCE,
        },
    }
}

/// Second pass that rewards indicator-rich input.
pub fn enhance(indicators: &[String]) -> Classification {
    let mut enhanced = classify(indicators);
    if indicators.len() > ENHANCEMENT_MIN_INDICATORS {
        enhanced.confidence = MAX_ENHANCED_CONFIDENCE.min(enhanced.confidence + ENHANCEMENT_BOOST);
    }
    enhanced
}

/// Classification with the enhancement pass applied where it is allowed.
///
/// The enhanced result is adopted only when strictly more confident.
pub fn classify_with_enhancement(indicators: &[String]) -> Classification {
    let initial = classify(indicators);
    if indicators.is_empty() || initial.confidence >= ENHANCEMENT_THRESHOLD {
        return initial;
    }

    let enhanced = enhance(indicators);
    if enhanced.confidence > initial.confidence {
        enhanced
    } else {
        initial
    }
}
