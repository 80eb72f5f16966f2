use super::*;

fn report() -> AnalysisReport {
    AnalysisReport {
        situation: "ok".to_owned(),
        strong_points: vec!["A".to_owned(), "B".to_owned()],
        weak_points: vec!["C".to_owned()],
        suggestions: Vec::new(),
        next_moves: vec!["D".to_owned(), "E".to_owned(), "F".to_owned()],
    }
}

#[test]
fn sections_follow_report_counts_order() {
    let r = report();
    let lens = ReportSection::ALL.map(|s| s.items(&r).len());
    assert_eq!(lens, r.counts());
}

#[test]
fn items_are_the_matching_sequence() {
    let r = report();
    assert_eq!(ReportSection::StrongPoints.items(&r), ["A", "B"]);
    assert_eq!(ReportSection::WeakPoints.items(&r), ["C"]);
    assert!(ReportSection::Suggestions.items(&r).is_empty());
    assert_eq!(ReportSection::NextMoves.items(&r), ["D", "E", "F"]);
}

#[test]
fn bar_labels_are_fixed() {
    let labels = ReportSection::ALL.map(ReportSection::bar_label);
    assert_eq!(labels, ["Strong Points", "Weak Points", "Suggestions", "Moves"]);
}

#[test]
fn modifiers_are_distinct() {
    let mods = ReportSection::ALL.map(ReportSection::modifier);
    for (i, a) in mods.iter().enumerate() {
        for b in &mods[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
