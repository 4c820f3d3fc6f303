use super::*;

fn full_example(id: &str) -> Value {
    serde_json::json!({
        "id": id,
        "maskedText": "masked caption",
        "InpaintedText": "inpainted caption",
        "targetText": "target caption",
        "maskedAudio": format!("audio/{id}_masked.wav"),
        "InpaintedAudio": format!("audio/{id}_inpainted.wav"),
        "targetAudio": format!("audio/{id}_target.wav"),
        "maskedSpectrogram": format!("img/{id}_masked.png"),
        "InpaintedSpectrogram": format!("img/{id}_inpainted.png"),
        "targetSpectrogram": format!("img/{id}_target.png"),
    })
}

// =============================================================
// GapCategory / SignalKind
// =============================================================

#[test]
fn categories_are_in_page_order() {
    let keys: Vec<_> = GapCategory::ALL.iter().map(|c| c.key()).collect();
    assert_eq!(keys, ["0.25sec", "0.5sec", "1sec"]);
}

#[test]
fn category_titles_match_gap_lengths() {
    assert_eq!(GapCategory::Quarter.title(), "0.25 seconds");
    assert_eq!(GapCategory::Half.title(), "0.5 seconds");
    assert_eq!(GapCategory::Full.title(), "1 second");
}

#[test]
fn signal_kinds_are_in_card_order() {
    let headings: Vec<_> = SignalKind::ALL.iter().map(|k| k.heading()).collect();
    assert_eq!(headings, ["Masked Signal", "Inpainted Signal", "Target Signal"]);
    assert_eq!(SignalKind::Inpainted.spectrogram_alt(), "Inpainted Spectrogram");
    assert_eq!(SignalKind::Target.slug(), "target");
}

// =============================================================
// parse_document
// =============================================================

#[test]
fn parse_document_scenario_with_one_populated_category() {
    let raw = serde_json::json!({
        "0.25sec": [full_example("a1")],
        "0.5sec": [],
        "1sec": [],
    })
    .to_string();

    let doc = parse_document(&raw).expect("document should parse");
    let sections: Vec<_> = doc.sections().map(|(c, list)| (c, list.len())).collect();
    assert_eq!(
        sections,
        [(GapCategory::Quarter, 1), (GapCategory::Half, 0), (GapCategory::Full, 0)]
    );

    let example = &doc.examples(GapCategory::Quarter)[0];
    assert_eq!(example.id, "a1");
    assert_eq!(example.inpainted_text, "inpainted caption");
    assert_eq!(example.target_spectrogram, "img/a1_target.png");
}

#[test]
fn parse_document_preserves_example_order() {
    let raw = serde_json::json!({
        "0.25sec": [],
        "0.5sec": [full_example("b2"), full_example("b1"), full_example("b3")],
        "1sec": [full_example("c1")],
    })
    .to_string();

    let doc = parse_document(&raw).expect("document should parse");
    let ids: Vec<_> = doc.examples(GapCategory::Half).iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["b2", "b1", "b3"]);
    assert_eq!(doc.total(), 4);
}

#[test]
fn parse_document_reports_missing_category() {
    let raw = r#"{"0.25sec": [], "1sec": []}"#;
    let err = parse_document(raw).expect_err("missing key should fail");
    assert!(matches!(err, CatalogError::MissingCategory("0.5sec")));
    assert_eq!(err.to_string(), "examples document is missing category \"0.5sec\"");
}

#[test]
fn parse_document_rejects_malformed_json() {
    let err = parse_document("{\"0.25sec\": [").expect_err("truncated json");
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn parse_document_rejects_non_array_category() {
    let raw = r#"{"0.25sec": {}, "0.5sec": [], "1sec": []}"#;
    let err = parse_document(raw).expect_err("object is not a list");
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn parse_document_rejects_non_object_root() {
    let err = parse_document("[]").expect_err("array root");
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn parse_document_ignores_unknown_keys() {
    let raw = r#"{"0.25sec": [], "0.5sec": [], "1sec": [], "2sec": "whatever"}"#;
    let doc = parse_document(raw).expect("extra keys are ignored");
    assert_eq!(doc.total(), 0);
}

#[test]
fn missing_example_fields_default_to_empty() {
    let raw = r#"{"0.25sec": [{"id": "sparse", "maskedAudio": "m.wav"}], "0.5sec": [], "1sec": []}"#;
    let doc = parse_document(raw).expect("sparse example should parse");
    let example = &doc.examples(GapCategory::Quarter)[0];
    assert_eq!(example.masked_audio, "m.wav");
    assert_eq!(example.masked_text, "");
    assert_eq!(example.inpainted_spectrogram, "");
}

#[test]
fn null_example_fields_render_empty() {
    let raw = r#"{"0.25sec": [{"id": "a1", "maskedText": null, "maskedAudio": "m.wav", "InpaintedSpectrogram": null}], "0.5sec": [], "1sec": [{"id": null}]}"#;
    let doc = parse_document(raw).expect("null fields should not fail the document");

    let example = &doc.examples(GapCategory::Quarter)[0];
    assert_eq!(example.id, "a1");
    assert_eq!(example.masked_text, "");
    assert_eq!(example.masked_audio, "m.wav");
    assert_eq!(example.inpainted_spectrogram, "");
    assert_eq!(doc.examples(GapCategory::Full)[0].id, "");
}

#[test]
fn numeric_example_field_still_fails() {
    let raw = r#"{"0.25sec": [{"id": 7}], "0.5sec": [], "1sec": []}"#;
    assert!(matches!(parse_document(raw), Err(CatalogError::Json(_))));
}

// =============================================================
// Example signals
// =============================================================

#[test]
fn example_signals_bind_matching_urls() {
    let example: Example = serde_json::from_value(full_example("x")).expect("example");
    let signals = example.signals();

    assert_eq!(signals.len(), 3);
    assert_eq!(signals[0].kind, SignalKind::Masked);
    assert_eq!(signals[0].audio, "audio/x_masked.wav");
    assert_eq!(signals[0].spectrogram, "img/x_masked.png");
    assert_eq!(signals[1].caption, "inpainted caption");
    assert_eq!(signals[1].audio, "audio/x_inpainted.wav");
    assert_eq!(signals[2].kind, SignalKind::Target);
    assert_eq!(signals[2].spectrogram, "img/x_target.png");
}

#[test]
fn example_serializes_with_wire_field_names() {
    let example = Example { id: "s".to_owned(), inpainted_audio: "i.wav".to_owned(), ..Example::default() };
    let value = serde_json::to_value(&example).expect("serialize");
    assert_eq!(value["InpaintedAudio"], "i.wav");
    assert_eq!(value["maskedText"], "");
}

// =============================================================
// Summary / duplicates
// =============================================================

#[test]
fn summary_counts_each_category() {
    let doc = ExamplesDocument::new(
        vec![Example::default(), Example::default()],
        Vec::new(),
        vec![Example::default()],
    );
    let summary = doc.summary();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.categories.get("0.25sec"), Some(&2));
    assert_eq!(summary.categories.get("0.5sec"), Some(&0));
    assert_eq!(summary.categories.get("1sec"), Some(&1));
}

#[test]
fn duplicate_ids_are_reported_across_categories() {
    let ex = |id: &str| Example { id: id.to_owned(), ..Example::default() };
    let doc = ExamplesDocument::new(vec![ex("a"), ex("b")], vec![ex("a")], vec![ex("c"), ex("c"), ex("c")]);
    assert_eq!(doc.duplicate_ids(), ["a", "c"]);
}

#[test]
fn unique_ids_report_no_duplicates() {
    let ex = |id: &str| Example { id: id.to_owned(), ..Example::default() };
    let doc = ExamplesDocument::new(vec![ex("a")], vec![ex("b")], vec![ex("c")]);
    assert!(doc.duplicate_ids().is_empty());
}
