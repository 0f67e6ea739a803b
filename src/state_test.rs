use super::*;
use super::test_helpers::{MockLlm, test_app_state, test_app_state_with_llm};

use crate::llm::types::LlmError;

#[test]
fn state_without_llm_is_not_ready() {
    let state = test_app_state();
    assert!(state.llm.is_none());
}

#[test]
fn state_clone_shares_the_handle() {
    let state = test_app_state_with_llm(Arc::new(MockLlm::with_text("hi")));
    let cloned = state.clone();
    assert!(cloned.llm.is_some());
}

#[tokio::test]
async fn mock_llm_pops_scripted_responses_in_order() {
    let mock = MockLlm::new(vec![
        Ok(test_helpers::text_response("first")),
        Err(LlmError::ApiRequest("down".into())),
    ]);
    let first = mock.chat(0.7, 250, "sys", &[]).await.unwrap();
    assert_eq!(first.text, "first");
    assert!(mock.chat(0.7, 250, "sys", &[]).await.is_err());
    // Queue exhausted: fixed fallback reply.
    let third = mock.chat(0.7, 250, "sys", &[]).await.unwrap();
    assert_eq!(third.text, "Done.");
    assert_eq!(mock.calls.lock().unwrap().len(), 3);
}
