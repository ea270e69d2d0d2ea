mod common;

use common::{create_empty_store, create_test_message, create_test_user};

use dw_core::{Message, MessageRole};

use googletest::prelude::*;
use serde_json::json;

#[tokio::test]
async fn given_messages_inserted_out_of_order_when_fetched_then_sorted_by_timestamp() {
    // Given
    let store = create_empty_store().await;
    let user = create_test_user();
    store.users().create(&user).await.unwrap();
    let key = user.cache_key().to_string();

    for (content, offset) in [("third", 30), ("first", 10), ("second", 20)] {
        store
            .messages()
            .create(&create_test_message(&key, content, offset))
            .await
            .unwrap();
    }

    // When
    let messages = store.messages().find_by_user(&key).await.unwrap();

    // Then
    let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
    assert_that!(contents, elements_are![eq(&"first"), eq(&"second"), eq(&"third")]);
}

#[tokio::test]
async fn given_message_with_metadata_when_fetched_then_metadata_round_trips() {
    let store = create_empty_store().await;
    let user = create_test_user();
    store.users().create(&user).await.unwrap();

    let message = Message::new(user.cache_key(), MessageRole::Assistant, "¿Cuál es tu documento?")
        .with_metadata(json!({ "step": "document", "attempt": 1 }));
    store.messages().create(&message).await.unwrap();

    let fetched = store.messages().find_by_user(user.cache_key()).await.unwrap();
    assert_that!(fetched.len(), eq(1));
    assert_that!(fetched[0].role, eq(MessageRole::Assistant));
    assert_that!(fetched[0].metadata["step"], eq(&json!("document")));
}

#[tokio::test]
async fn given_message_for_unknown_user_when_created_then_foreign_key_rejects_it() {
    let store = create_empty_store().await;

    let result = store
        .messages()
        .create(&create_test_message("ghost", "hola", 0))
        .await;

    assert_that!(result, err(anything()));
}
