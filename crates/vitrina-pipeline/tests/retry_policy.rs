//! The single semantic correction attempt, on its own and inside the pipeline.

mod support;

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use support::{ModelReply, ScriptedExecutor, ScriptedModel, StoreReply, no_rows, rows, text};
use vitrina_core::{ChatResponse, Outcome, outcome::NO_RESULTS_REPLY};
use vitrina_pipeline::{GiveUpReason, Orchestrator, RetryCoordinator, RetryOutcome};

const ORIGINAL: &str = "SELECT * FROM productos WHERE nombre = 'pantalones'";

#[tokio::test]
async fn no_change_sentinel_skips_second_execution() {
    let model = ScriptedModel::new([text("NO CAMBIO")]);
    let executor = ScriptedExecutor::new([]);

    let outcome = RetryCoordinator::new(&model, &executor).run(ORIGINAL).await;

    assert_eq!(outcome, RetryOutcome::GaveUp(GiveUpReason::NoChange));
    assert_eq!(executor.calls(), 0);
    assert!(model.prompts()[0].contains(ORIGINAL));
}

#[tokio::test]
async fn fenced_sentinel_is_still_recognized() {
    let model = ScriptedModel::new([text("```\nNO CAMBIO\n```")]);
    let executor = ScriptedExecutor::new([]);

    let outcome = RetryCoordinator::new(&model, &executor).run(ORIGINAL).await;

    assert_eq!(outcome, RetryOutcome::GaveUp(GiveUpReason::NoChange));
}

#[rstest]
#[case::empty(ModelReply::Empty, GiveUpReason::NoCandidate)]
#[case::model_error(ModelReply::Fail, GiveUpReason::ModelFailed)]
#[case::not_select(text("DELETE FROM productos"), GiveUpReason::InvalidCandidate)]
#[case::prose(text("No hay ninguna corrección posible."), GiveUpReason::InvalidCandidate)]
#[tokio::test]
async fn unusable_candidates_are_never_executed(
    #[case] reply: ModelReply,
    #[case] reason: GiveUpReason,
) {
    let model = ScriptedModel::new([reply]);
    let executor = ScriptedExecutor::new([]);

    let outcome = RetryCoordinator::new(&model, &executor).run(ORIGINAL).await;

    assert_eq!(outcome, RetryOutcome::GaveUp(reason));
    assert_eq!(model.calls(), 1);
    assert_eq!(executor.calls(), 0);
}

#[tokio::test]
async fn corrected_candidate_is_sanitized_before_execution() {
    let model = ScriptedModel::new([text(
        "```sql\nSELECT *\n  FROM productos\n  WHERE nombre ILIKE '%pantal%';\n```",
    )]);
    let executor = ScriptedExecutor::new([rows(json!([{ "id": 4, "nombre": "Pantalón" }]))]);

    let outcome = RetryCoordinator::new(&model, &executor).run(ORIGINAL).await;

    let RetryOutcome::Corrected { query, result } = outcome else {
        panic!("expected a correction, got {outcome:?}");
    };
    assert_eq!(
        query.sanitized_sql,
        "SELECT * FROM productos WHERE nombre ILIKE '%pantal%'"
    );
    assert_eq!(result.row_count(), 1);
    assert_eq!(executor.statements(), vec![query.sanitized_sql]);
}

#[tokio::test]
async fn second_empty_result_never_triggers_third_generation() {
    let model = Arc::new(ScriptedModel::new([
        text(ORIGINAL),
        text("SELECT * FROM productos WHERE nombre ILIKE '%pantalon%'"),
    ]));
    let executor = Arc::new(ScriptedExecutor::new([no_rows(), no_rows()]));
    let orchestrator = Orchestrator::new(Arc::clone(&model), Arc::clone(&executor));

    let run = orchestrator.run("pantalones").await;

    assert_eq!(run.outcome, Outcome::NoResults);
    assert!(run.retried);
    assert_eq!(run.response, ChatResponse::terminal(NO_RESULTS_REPLY));
    assert_eq!(model.calls(), 2);
    assert_eq!(executor.calls(), 2);
}

#[tokio::test]
async fn failing_correction_reports_no_results() {
    let model = Arc::new(ScriptedModel::new([
        text(ORIGINAL),
        text("SELECT * FROM productoss"),
    ]));
    let executor = Arc::new(ScriptedExecutor::new([
        no_rows(),
        StoreReply::Fail("relation \"productoss\" does not exist".into()),
    ]));
    let orchestrator = Orchestrator::new(Arc::clone(&model), Arc::clone(&executor));

    let resp = orchestrator.process("pantalones").await;

    assert_eq!(resp, ChatResponse::terminal(NO_RESULTS_REPLY));
    assert_eq!(executor.calls(), 2);
}

#[tokio::test]
async fn sentinel_inside_pipeline_reports_no_results() {
    let model = Arc::new(ScriptedModel::new([text(ORIGINAL), text("NO CAMBIO")]));
    let executor = Arc::new(ScriptedExecutor::new([no_rows()]));
    let orchestrator = Orchestrator::new(Arc::clone(&model), Arc::clone(&executor));

    let resp = orchestrator.process("pantalones").await;

    assert_eq!(resp, ChatResponse::terminal(NO_RESULTS_REPLY));
    assert_eq!(executor.calls(), 1);
}
