use super::*;

#[test]
fn summary_pluralizes() {
    assert_eq!(results_summary(0, "bail"), "No documents match \"bail\".");
    assert_eq!(results_summary(1, "bail"), "1 document matches \"bail\".");
    assert_eq!(results_summary(12, "bail"), "12 documents match \"bail\".");
}
