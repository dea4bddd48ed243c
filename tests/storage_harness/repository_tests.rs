//! Macro-generated test suite for `OrderRepository` contract validation.
//!
//! # Generated Tests
//!
//! - `test_save_assigns_id`: first save populates a fresh id
//! - `test_save_distinct_ids`: every insert gets its own id
//! - `test_find_by_id_round_trip`: stored fields come back unchanged
//! - `test_find_by_id_missing`: unknown id returns None
//! - `test_find_all_empty` / `test_find_all_multiple`
//! - `test_save_existing_updates_in_place`: same id, new values, no new row
//! - `test_save_unknown_id_fails`: update of a missing row is an error
//! - `test_delete_removes_record`
//! - `test_concurrent_saves`: parallel inserts from spawned tasks

/// Generate a full `OrderRepository` conformance test suite.
///
/// `$factory` is re-evaluated for each test and must produce a repository that
/// is `Clone + 'static` (the concurrent test shares it across tasks).
#[macro_export]
macro_rules! repository_contract_tests {
    ($factory:expr) => {
        mod repository_contract_tests {
            use super::*;
            use orders::core::{Order, OrderRepository};
            use std::collections::HashSet;

            #[tokio::test]
            async fn test_save_assigns_id() {
                let repo = $factory;

                let saved = repo.save(sample_order()).await.unwrap();
                assert!(saved.id.is_some());
                assert_eq!(saved.customer_name, "Test Name");
            }

            #[tokio::test]
            async fn test_save_distinct_ids() {
                let repo = $factory;

                let mut ids = HashSet::new();
                for i in 0..5 {
                    let order = create_test_order(&format!("Customer {}", i), None, "1 Road", 10.0);
                    let saved = repo.save(order).await.unwrap();
                    assert!(ids.insert(saved.id.unwrap()), "id reused");
                }
            }

            #[tokio::test]
            async fn test_find_by_id_round_trip() {
                let repo = $factory;

                let saved = repo.save(sample_order()).await.unwrap();
                let found = repo
                    .find_by_id(saved.id.unwrap())
                    .await
                    .unwrap()
                    .expect("saved order should be found");

                assert_eq!(found, saved);
                assert_eq!(found.order_date, Some(date(2023, 7, 6)));
                assert_eq!(found.shipping_address, "123 Main st");
                assert!((found.total - 50.0).abs() < f64::EPSILON);
            }

            #[tokio::test]
            async fn test_find_by_id_missing() {
                let repo = $factory;
                assert!(repo.find_by_id(999_999).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_find_all_empty() {
                let repo = $factory;
                assert!(repo.find_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_find_all_multiple() {
                let repo = $factory;
                for name in ["Alice", "Bob", "Carol"] {
                    repo.save(create_test_order(name, None, "1 Road", 10.0))
                        .await
                        .unwrap();
                }

                let mut names: Vec<String> = repo
                    .find_all()
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|o| o.customer_name)
                    .collect();
                names.sort();
                assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
            }

            #[tokio::test]
            async fn test_save_existing_updates_in_place() {
                let repo = $factory;

                let mut order = repo.save(sample_order()).await.unwrap();
                let id = order.id;

                order.customer_name = "John Doe".to_string();
                order.total = 100.0;
                order.order_date = None;
                let updated = repo.save(order).await.unwrap();

                assert_eq!(updated.id, id);
                assert_eq!(updated.customer_name, "John Doe");
                assert_eq!(updated.total, 100.0);
                assert_eq!(updated.order_date, None);

                let all = repo.find_all().await.unwrap();
                assert_eq!(all.len(), 1);
                assert_eq!(all[0], updated);
            }

            #[tokio::test]
            async fn test_save_unknown_id_fails() {
                let repo = $factory;

                let mut ghost: Order = sample_order();
                ghost.id = Some(424_242);
                assert!(repo.save(ghost).await.is_err());
                assert!(repo.find_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_delete_removes_record() {
                let repo = $factory;

                let keep = repo.save(sample_order()).await.unwrap();
                let gone = repo
                    .save(create_test_order("John Doe", None, "999 Second st", 100.0))
                    .await
                    .unwrap();

                repo.delete(&gone).await.unwrap();

                assert!(repo.find_by_id(gone.id.unwrap()).await.unwrap().is_none());
                assert!(repo.find_by_id(keep.id.unwrap()).await.unwrap().is_some());
            }

            #[tokio::test]
            async fn test_concurrent_saves() {
                let repo = $factory;

                let mut handles = Vec::new();
                for i in 0..10 {
                    let repo = repo.clone();
                    handles.push(tokio::spawn(async move {
                        let order =
                            create_test_order(&format!("Concurrent {}", i), None, "1 Road", 1.0 + i as f64);
                        repo.save(order).await.unwrap()
                    }));
                }

                let mut ids = HashSet::new();
                for handle in handles {
                    let saved = handle.await.unwrap();
                    ids.insert(saved.id.unwrap());
                }

                assert_eq!(ids.len(), 10);
                assert_eq!(repo.find_all().await.unwrap().len(), 10);
            }
        }
    };
}
