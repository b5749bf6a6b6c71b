//! Highlight summary: dignities first, conjunctions second.

use jataka_vedic::Dignity;

use crate::chart_types::Chart;

/// Reduce a chart to ordered human-readable highlight lines.
///
/// One line per dignified graha in chart iteration order, then one line
/// per conjunction in detection order. Neutral placements produce nothing.
pub fn summarize(chart: &Chart) -> Vec<String> {
    let mut summary = Vec::new();

    for position in &chart.positions {
        match position.dignity {
            Some(Dignity::Exalted) => summary.push(format!(
                "{} exalted in {}",
                position.graha.english_name(),
                position.rashi.name()
            )),
            Some(Dignity::Debilitated) => summary.push(format!(
                "{} debilitated in {}",
                position.graha.english_name(),
                position.rashi.name()
            )),
            None => {}
        }
    }

    for conjunction in &chart.conjunctions {
        summary.push(format!("Conjunction: {}", conjunction.description));
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::compute_chart;
    use jataka_time::Instant;

    #[test]
    fn lines_match_chart_contents() {
        let instant = Instant::new(2024, 4, 8, 18, 20).unwrap();
        let chart = compute_chart(&instant);
        let summary = summarize(&chart);

        let dignified = chart
            .positions
            .iter()
            .filter(|p| p.dignity.is_some())
            .count();
        assert_eq!(summary.len(), dignified + chart.conjunctions.len());

        for (line, position) in summary
            .iter()
            .zip(chart.positions.iter().filter(|p| p.dignity.is_some()))
        {
            assert!(line.starts_with(position.graha.english_name()), "{line}");
            assert!(line.ends_with(position.rashi.name()), "{line}");
        }
        for line in &summary[dignified..] {
            assert!(line.starts_with("Conjunction: "), "{line}");
        }
    }
}
