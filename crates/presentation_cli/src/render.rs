//! Plain-text rendering of result cards

use application::ResultCard;
use domain::{LabelMetadata, WeatherLabel};

/// Number of cells in the confidence bar
const BAR_CELLS: usize = 20;

/// Render the confidence bar, e.g. `[#################---]`
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn confidence_bar(width_percent: f64) -> String {
    let filled = ((width_percent / 100.0) * BAR_CELLS as f64).round() as usize;
    let filled = filled.min(BAR_CELLS);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_CELLS - filled))
}

/// Render a result card as terminal text
pub fn render_card(card: &ResultCard) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", card.icon, card.title));
    out.push_str(&format!(
        "Confidence: {} {}\n",
        confidence_bar(card.confidence.bar_width()),
        card.confidence
    ));
    out.push_str(&format!("\nDescription:\n  {}\n", card.description));
    out.push_str(&format!("\nTips:\n  {}\n", card.tips));

    if let Some(lines) = &card.other_possibilities {
        out.push_str("\nOther Possibilities:\n");
        for line in lines {
            out.push_str(&format!("  {line}\n"));
        }
    }
    out
}

/// Render the label vocabulary with descriptions
pub fn render_labels() -> String {
    let mut out = String::new();
    for label in WeatherLabel::ALL {
        let meta = LabelMetadata::of(label);
        out.push_str(&format!("{} {:<10} {}\n", meta.icon, label.key(), meta.description));
    }
    out
}

#[cfg(test)]
mod tests {
    use application::ResultPresenter;
    use domain::{Alternative, ClassificationResult};

    use super::*;

    #[test]
    fn bar_is_proportional() {
        assert_eq!(confidence_bar(0.0), "[--------------------]");
        assert_eq!(confidence_bar(50.0), "[##########----------]");
        assert_eq!(confidence_bar(100.0), "[####################]");
    }

    #[test]
    fn card_contains_all_sections() {
        let result = ClassificationResult::new("rain", 0.853).with_alternatives(vec![
            Alternative::new("rain", 85.3),
            Alternative::new("snow", 10.1),
            Alternative::new("hail", 4.6),
        ]);
        let card = ResultPresenter::new().present(Some(&result)).unwrap();
        let text = render_card(&card);

        assert!(text.contains("Rain Detected"));
        assert!(text.contains("85.3%"));
        assert!(text.contains(card.description));
        assert!(text.contains(card.tips));
        assert!(text.contains("Other Possibilities:\n  snow: 10.1%\n  hail: 4.6%\n"));
        assert!(!text.contains("rain: 85.3%"));
    }

    #[test]
    fn card_without_alternatives_has_no_section() {
        let card = ResultPresenter::new()
            .present(Some(&ClassificationResult::new("dew", 0.6)))
            .unwrap();
        assert!(!render_card(&card).contains("Other Possibilities"));
    }

    #[test]
    fn labels_list_every_key() {
        let text = render_labels();
        for label in WeatherLabel::ALL {
            assert!(text.contains(label.key()));
        }
        assert_eq!(text.lines().count(), WeatherLabel::ALL.len());
    }
}
