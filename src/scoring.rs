use crate::models::{FitAssessment, Style};

const BASE_SCORE: i32 = 5;
const MIN_SCORE: i32 = 1;
const MAX_SCORE: i32 = 10;

/// Style rules in precedence order. Every rule is checked; the last one that
/// matches decides the style.
const STYLE_RULES: &[(&[&str], Style)] = &[
    (&["suit", "blazer"], Style::Formal),
    (&["hoodie", "sneakers"], Style::Streetwear),
    (&["dress", "skirt"], Style::Chic),
];

fn has_any(labels: &[String], wanted: &[&str]) -> bool {
    labels.iter().any(|label| wanted.contains(&label.as_str()))
}

pub fn fit_score(labels: &[String]) -> u8 {
    let mut score = BASE_SCORE;
    if has_any(labels, &["jacket"]) {
        score += 2;
    }
    if has_any(labels, &["sneakers"]) {
        score += 2;
    }
    if has_any(labels, &["shirt", "jeans"]) {
        score += 1;
    }
    if labels.len() >= 3 {
        score += 1;
    }

    score.clamp(MIN_SCORE, MAX_SCORE) as u8
}

pub fn style(labels: &[String]) -> Style {
    STYLE_RULES
        .iter()
        .fold(Style::default(), |current, (triggers, style)| {
            if has_any(labels, triggers) {
                *style
            } else {
                current
            }
        })
}

pub fn caption(style: Style, labels: &[String]) -> String {
    let items = if labels.is_empty() {
        "basic essentials".to_string()
    } else {
        labels.join(", ")
    };
    format!(
        "This fit is {} and includes: {}",
        style.as_str().to_lowercase(),
        items
    )
}

/// Turns classifier labels into the response sent back to the caller.
pub fn assess(labels: Vec<String>) -> FitAssessment {
    let style = style(&labels);
    FitAssessment {
        fit_score: fit_score(&labels),
        style_description: style,
        caption: caption(style, &labels),
        detected_labels: labels,
    }
}
