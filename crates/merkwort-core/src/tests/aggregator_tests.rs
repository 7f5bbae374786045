use std::collections::HashSet;
use std::sync::Arc;

use merkwort_store::{MemoryStore, WordStore};
use merkwort_types::Gender;

use super::{adjective, noun, sample_store, verb, wait_for_list};
use crate::WordListPipeline;

#[tokio::test]
async fn list_is_sorted_across_categories_without_duplicates() {
    let store = Arc::new(MemoryStore::new());
    store
        .insert_noun(noun("Zug", "train", Gender::Der))
        .await
        .unwrap();
    store
        .insert_noun(noun("Apfel", "apple", Gender::Der))
        .await
        .unwrap();
    store.insert_verb(verb("lernen", "to learn")).await.unwrap();
    store.insert_verb(verb("gehen", "to go")).await.unwrap();
    store
        .insert_adjective(adjective("schnell", "fast"))
        .await
        .unwrap();

    let pipeline = WordListPipeline::spawn(store, 8);
    let mut rx = pipeline.display_list();
    let list = wait_for_list(&mut rx, |list| list.len() == 5).await;

    let words: Vec<&str> = list.iter().map(|item| item.word()).collect();
    assert_eq!(words, vec!["Apfel", "Zug", "gehen", "lernen", "schnell"]);

    let keys: HashSet<_> = list.iter().map(|item| (item.category(), item.id())).collect();
    assert_eq!(keys.len(), list.len());
}

#[tokio::test]
async fn search_filters_on_display_word_only() {
    let store = sample_store().await;
    let pipeline = WordListPipeline::spawn(store, 8);
    let mut rx = pipeline.display_list();

    // Empty query: the full combined set.
    wait_for_list(&mut rx, |list| list.len() == 3).await;

    pipeline.set_search_query("ap");
    let list = wait_for_list(&mut rx, |list| list.len() == 1).await;
    assert_eq!(list[0].word(), "Apfel");

    // "apple" only appears in the translation, which is not searched.
    pipeline.set_search_query("apple");
    wait_for_list(&mut rx, |list| list.is_empty()).await;

    // Query casing is irrelevant.
    pipeline.set_search_query("SCHNELL");
    let list = wait_for_list(&mut rx, |list| list.len() == 1).await;
    assert_eq!(list[0].word(), "schnell");
}

#[tokio::test]
async fn store_change_triggers_recomputation() {
    let store = sample_store().await;
    let pipeline = WordListPipeline::spawn(Arc::clone(&store) as Arc<dyn WordStore>, 8);
    let mut rx = pipeline.display_list();
    wait_for_list(&mut rx, |list| list.len() == 3).await;

    store
        .insert_noun(noun("Birne", "pear", Gender::Die))
        .await
        .unwrap();
    let list = wait_for_list(&mut rx, |list| list.len() == 4).await;
    assert!(list.iter().any(|item| item.word() == "Birne"));
}

#[tokio::test]
async fn deleted_record_leaves_the_list_until_undone() {
    let store = sample_store().await;
    let pipeline = WordListPipeline::spawn(store, 8);
    let mut rx = pipeline.display_list();

    let list = wait_for_list(&mut rx, |list| list.len() == 3).await;
    let apfel = list
        .iter()
        .find(|item| item.word() == "Apfel")
        .unwrap()
        .clone();

    pipeline.request_delete(&apfel).await.unwrap();
    wait_for_list(&mut rx, |list| {
        list.iter().all(|item| item.word() != "Apfel")
    })
    .await;

    let event = pipeline.undo_events().recv().await.unwrap();
    pipeline.accept_undo(event).await.unwrap();
    wait_for_list(&mut rx, |list| {
        list.iter().any(|item| item.word() == "Apfel")
    })
    .await;
}

#[tokio::test]
async fn shutdown_stops_publishing() {
    let store = sample_store().await;
    let pipeline = WordListPipeline::spawn(Arc::clone(&store) as Arc<dyn WordStore>, 8);
    let mut rx = pipeline.display_list();
    wait_for_list(&mut rx, |list| list.len() == 3).await;

    pipeline.shutdown();
    // Once the aggregator has wound down, the sender side is dropped and
    // no further value arrives for store changes.
    tokio::time::timeout(std::time::Duration::from_secs(2), async {
        loop {
            store
                .insert_noun(noun("Haus", "house", Gender::Das))
                .await
                .unwrap();
            if rx.changed().await.is_err() {
                break;
            }
            assert!(rx.borrow_and_update().len() <= 4);
        }
    })
    .await
    .expect("aggregator kept publishing after shutdown");
}
