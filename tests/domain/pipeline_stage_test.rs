use parlance::domain::PipelineStage;

#[test]
fn given_fresh_upload_when_every_stage_succeeds_then_reaches_responded() {
    let mut stage = PipelineStage::ReceivedUpload;
    let mut visited = vec![stage];

    while let Some(next) = stage.next() {
        stage = next;
        visited.push(stage);
    }

    assert_eq!(
        visited,
        vec![
            PipelineStage::ReceivedUpload,
            PipelineStage::Decoded,
            PipelineStage::Denoised,
            PipelineStage::Transcribed,
            PipelineStage::AnalyzedAndTranslated,
            PipelineStage::Responded,
        ]
    );
}

#[test]
fn given_terminal_stages_when_checking_then_have_no_successor() {
    assert!(PipelineStage::Responded.is_terminal());
    assert!(PipelineStage::Errored.is_terminal());
    assert!(!PipelineStage::Transcribed.is_terminal());
    assert_eq!(PipelineStage::Errored.next(), None);
}

#[test]
fn given_stage_when_displaying_then_uses_screaming_case() {
    assert_eq!(
        PipelineStage::AnalyzedAndTranslated.to_string(),
        "ANALYZED_AND_TRANSLATED"
    );
    assert_eq!(PipelineStage::ReceivedUpload.as_str(), "RECEIVED_UPLOAD");
}
