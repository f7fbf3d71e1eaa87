//! Built-in dashboard data
//!
//! Used when the config file does not override the stats, sources or endpoints.

use crate::types::{EndpointDescriptor, HttpMethod, MetricCard, SourceCount};
use crate::utils::ratio_one_decimal;
use serde_json::json;

pub const DEFAULT_BASE_URL: &str = "https://api.dictionary.example.com";

const TOTAL_DEFINITIONS: u64 = 2_099_003;
const WORDS_WITH_DEFINITION: u64 = 461_244;

pub fn default_stats() -> Vec<MetricCard> {
    vec![
        MetricCard::number("Total Definitions", TOTAL_DEFINITIONS),
        MetricCard::number("Words with Definition", WORDS_WITH_DEFINITION),
        MetricCard::text(
            "Avg Definitions/Word",
            ratio_one_decimal(TOTAL_DEFINITIONS, WORDS_WITH_DEFINITION),
        ),
        MetricCard::text("Rate Limit", "60 req/min"),
        MetricCard::number("Daily Quota", 10_000),
    ]
}

pub fn default_sources() -> Vec<SourceCount> {
    vec![
        SourceCount::new("Wiktionary", 572_727),
        SourceCount::new("Universalis", 47_811),
        SourceCount::new("Cordial", 39_545),
        SourceCount::new("Larousse", 990_992),
        SourceCount::new("LeDictionary", 339_440),
        SourceCount::new("Robert", 108_488),
    ]
}

pub fn default_endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            HttpMethod::Get,
            "/def/word-name/{word}",
            "Definitions of a word across all sources",
        )
        .with_example(json!({
            "word": "maison",
            "definitions": [
                { "source": "Larousse", "text": "Bâtiment servant d'habitation." },
                { "source": "Wiktionary", "text": "Bâtiment construit pour servir d'habitation." }
            ],
            "total": 2,
            "hasMore": false
        })),
        EndpointDescriptor::new(HttpMethod::Get, "/words/{word}/count", "Definition count")
            .with_example(json!({ "word": "maison", "count": 14 })),
        EndpointDescriptor::new(
            HttpMethod::Get,
            "/words/{word}/definition?source={source}",
            "Definition by source",
        )
        .with_example(json!({
            "word": "maison",
            "source": "Robert",
            "definition": "Bâtiment d'habitation."
        })),
        EndpointDescriptor::new(HttpMethod::Get, "/words/{word}/definitions", "All definitions"),
        EndpointDescriptor::new(
            HttpMethod::Get,
            "/definitions/contains?word={word}",
            "Search definitions containing a word",
        )
        .with_example(json!({
            "query": "maison",
            "results": [
                { "word": "maisonnette", "source": "Cordial" }
            ],
            "total": 38,
            "hasMore": true
        })),
        EndpointDescriptor::new(
            HttpMethod::Get,
            "/definitions/length?min={x}&max={y}",
            "Filter definitions by length",
        ),
        EndpointDescriptor::new(
            HttpMethod::Get,
            "/definitions/source/{source}/random",
            "Random definition from a source",
        ),
        EndpointDescriptor::new(HttpMethod::Get, "/stats", "General statistics"),
        EndpointDescriptor::new(HttpMethod::Get, "/stats/sources", "Source comparison"),
        EndpointDescriptor::new(
            HttpMethod::Post,
            "/find-words",
            "Find words matching a pattern",
        )
        .with_request_body(json!({
            "word": "string (pattern, '_' matches one letter)",
            "is_verb": "boolean (optional)",
            "limit": "integer (optional, default 50)"
        }))
        .with_example(json!({
            "words": ["maison", "raison", "saison"],
            "total": 3,
            "hasMore": false
        })),
        EndpointDescriptor::new(
            HttpMethod::Post,
            "/find-syllables",
            "Split words into syllables",
        )
        .with_request_body(json!({
            "word": "string",
            "is_verb": "boolean (optional)"
        }))
        .with_example(json!({
            "word": "maison",
            "syllables": ["mai", "son"],
            "count": 2
        })),
    ]
}
