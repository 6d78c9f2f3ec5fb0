use std::fmt;

use rand::Rng;

/// Categorical tag selecting which fixed paper template is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Architecture,
    Security,
    Performance,
    Integration,
    Context,
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Focus::Architecture => "architecture",
            Focus::Security => "security",
            Focus::Performance => "performance",
            Focus::Integration => "integration",
            Focus::Context => "context",
        };
        write!(f, "{label}")
    }
}

/// A research topic from the fixed catalogue. Immutable; selected once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub title: &'static str,
    pub focus: Focus,
    pub keywords: &'static [&'static str],
}

const CATALOGUE: &[Topic] = &[
    Topic {
        title: "Model Context Protocol: A Comprehensive Technical Analysis",
        focus: Focus::Architecture,
        keywords: &["protocol", "architecture", "specification", "technical"],
    },
    Topic {
        title: "Security Frameworks in Model Context Protocol Implementations",
        focus: Focus::Security,
        keywords: &["security", "authentication", "authorization", "encryption"],
    },
    Topic {
        title: "Performance Optimization Strategies for MCP Systems",
        focus: Focus::Performance,
        keywords: &["optimization", "performance", "scalability", "efficiency"],
    },
    Topic {
        title: "Integration Patterns: MCP in Modern Development Workflows",
        focus: Focus::Integration,
        keywords: &["integration", "workflow", "development", "patterns"],
    },
    Topic {
        title: "Context Management in Large-Scale MCP Deployments",
        focus: Focus::Context,
        keywords: &["context", "management", "scalability", "deployment"],
    },
];

/// The fixed list of research topics, in catalogue order.
pub fn topic_catalogue() -> &'static [Topic] {
    CATALOGUE
}

/// Draw one topic uniformly at random. Callers pass the RNG so tests can
/// seed it for determinism.
pub fn select_topic<R: Rng>(rng: &mut R) -> &'static Topic {
    let index = rng.gen_range(0..CATALOGUE.len());
    &CATALOGUE[index]
}

/// True when `text` contains any of the topic's keywords, case-insensitively.
/// Used to keep only scraped fragments relevant to the selected topic.
pub fn matches_keywords(topic: &Topic, text: &str) -> bool {
    let lowered = text.to_lowercase();
    topic.keywords.iter().any(|kw| lowered.contains(kw))
}
