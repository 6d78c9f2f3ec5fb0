use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scribe_core::{
    render_focus_paper, render_rotating_paper, rotating_template, select_topic, topic_catalogue,
    Focus,
};

#[test]
fn selected_topic_renders_with_its_own_title() {
    let mut rng = StdRng::seed_from_u64(42);
    let topic = select_topic(&mut rng);
    let paper = render_focus_paper(topic, "2025-06-01 12:00:00", "");
    assert!(paper.starts_with(&format!("# {}", topic.title)));
    assert!(paper.ends_with(&format!("*Research Focus: {}*", focus_footer(topic.focus))));
}

fn focus_footer(focus: Focus) -> &'static str {
    match focus {
        Focus::Architecture => "Model Context Protocol",
        Focus::Security => "Model Context Protocol Security",
        Focus::Performance => "Model Context Protocol Optimization",
        Focus::Integration => "Model Context Protocol Integration",
        Focus::Context => "Model Context Protocol Scalability",
    }
}

#[test]
fn each_focus_gets_a_distinct_template() {
    let papers: Vec<String> = topic_catalogue()
        .iter()
        .map(|topic| render_focus_paper(topic, "2025-06-01 12:00:00", "same excerpt"))
        .collect();
    for (i, a) in papers.iter().enumerate() {
        for b in papers.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn empty_excerpt_still_renders_a_complete_paper() {
    let topic = &topic_catalogue()[0];
    let paper = render_focus_paper(topic, "2025-06-01 12:00:00", "");
    assert!(paper.contains("## Abstract"));
    assert!(paper.contains("## References"));
}

#[test]
fn rotating_selection_covers_template_and_renders() {
    let template = rotating_template("any topic string");
    let paper = render_rotating_paper(template, "2025-06-01 12:00:00", "body text");
    assert!(paper.contains("body text"));
    assert!(paper.contains("2025-06-01 12:00:00"));
}

#[test]
fn same_seed_same_paper() {
    let render = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let topic = select_topic(&mut rng);
        render_focus_paper(topic, "2025-06-01 12:00:00", "excerpt")
    };
    assert_eq!(render(9), render(9));
}
