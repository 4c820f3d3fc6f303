use super::*;

const BASE: &str = "/trial_web/";

fn example() -> Example {
    Example {
        id: "a1".to_owned(),
        masked_text: "masked words".to_owned(),
        inpainted_text: "inpainted words".to_owned(),
        target_text: "target words".to_owned(),
        masked_audio: "public/a1_masked.wav".to_owned(),
        inpainted_audio: "public/a1_inpainted.wav".to_owned(),
        target_audio: "https://cdn.test/a1_target.wav".to_owned(),
        masked_spectrogram: "public/a1_masked.png".to_owned(),
        inpainted_spectrogram: "/public/a1_inpainted.png".to_owned(),
        target_spectrogram: String::new(),
    }
}

#[test]
fn panel_sources_follow_signal_order() {
    let kinds = panel_sources(&example(), BASE).map(|p| p.kind);
    assert_eq!(kinds, [SignalKind::Masked, SignalKind::Inpainted, SignalKind::Target]);
}

#[test]
fn panel_sources_bind_each_variant_to_its_own_urls() {
    let [masked, inpainted, target] = panel_sources(&example(), BASE);

    assert_eq!(masked.caption, "masked words");
    assert_eq!(masked.audio, "/trial_web/public/a1_masked.wav");
    assert_eq!(masked.spectrogram, "/trial_web/public/a1_masked.png");

    assert_eq!(inpainted.caption, "inpainted words");
    assert_eq!(inpainted.audio, "/trial_web/public/a1_inpainted.wav");
    assert_eq!(inpainted.spectrogram, "/public/a1_inpainted.png");

    assert_eq!(target.caption, "target words");
    assert_eq!(target.audio, "https://cdn.test/a1_target.wav");
}

#[test]
fn panel_sources_resolve_against_the_given_base() {
    let [masked, ..] = panel_sources(&example(), "/");
    assert_eq!(masked.audio, "/public/a1_masked.wav");
}

#[test]
fn panel_sources_keep_missing_media_empty() {
    let [_, _, target] = panel_sources(&example(), BASE);
    assert!(target.spectrogram.is_empty());

    let sparse = panel_sources(&Example::default(), BASE);
    assert!(sparse.iter().all(|p| p.audio.is_empty() && p.spectrogram.is_empty() && p.caption.is_empty()));
}
