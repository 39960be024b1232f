//! Repository and service behaviour against a real PostgreSQL
//!
//! Run with `DATABASE_URL=... cargo test -- --ignored`.

use library_app::application::book::{
    count_loaned_book, get_book_statistics, loan_book, return_book,
};
use library_app::application::user::{delete_user, get_user_loan_histories};
use library_app::domain::commands::*;
use library_app::domain::*;
use serial_test::serial;

mod common;

#[tokio::test]
#[serial]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_book_find_by_name_returns_first_saved() {
    let pool = common::create_test_pool().await;
    let deps = common::postgres_dependencies(&pool).await;
    let first = Book::fixture("A", BookType::Computer);
    let second = Book::fixture("A", BookType::Economy);
    deps.book_repository
        .save_all(&[first.clone(), second])
        .await
        .unwrap();

    let found = deps.book_repository.find_by_name("A").await.unwrap();

    assert_eq!(found, Some(first));
    assert!(deps.book_repository.find_by_name("B").await.unwrap().is_none());
}

#[tokio::test]
#[serial]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_book_statistics() {
    let pool = common::create_test_pool().await;
    let deps = common::postgres_dependencies(&pool).await;
    deps.book_repository
        .save_all(&[
            Book::fixture("A", BookType::Computer),
            Book::fixture("B", BookType::Computer),
            Book::fixture("C", BookType::Science),
        ])
        .await
        .unwrap();

    let mut stats = get_book_statistics(&deps).await.unwrap();
    stats.sort_by_key(|stat| stat.count);

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].book_type, BookType::Science);
    assert_eq!(stats[0].count, 1);
    assert_eq!(stats[1].book_type, BookType::Computer);
    assert_eq!(stats[1].count, 2);
}

#[tokio::test]
#[serial]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_user_round_trip_keeps_histories_in_order() {
    let pool = common::create_test_pool().await;
    let deps = common::postgres_dependencies(&pool).await;
    let user = User::new("Alice", None).unwrap();
    deps.user_repository.save(&user).await.unwrap();
    deps.loan_history_repository
        .save_all(&[
            UserLoanHistory::fixture(user.id(), "A", UserLoanStatus::Loaned),
            UserLoanHistory::fixture(user.id(), "B", UserLoanStatus::Returned),
            UserLoanHistory::fixture(user.id(), "C", UserLoanStatus::Loaned),
        ])
        .await
        .unwrap();

    let stored = deps
        .user_repository
        .find_by_name("Alice")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stored.id(), user.id());
    assert_eq!(stored.age(), None);
    let names: Vec<&str> = stored
        .loan_histories()
        .iter()
        .map(UserLoanHistory::book_name)
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(
        deps.loan_history_repository
            .count_by_status(UserLoanStatus::Loaned)
            .await
            .unwrap(),
        2
    );
}

#[tokio::test]
#[serial]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_loan_and_return_flow() {
    let pool = common::create_test_pool().await;
    let deps = common::postgres_dependencies(&pool).await;
    deps.book_repository
        .save(&Book::fixture("Clean Code", BookType::Computer))
        .await
        .unwrap();
    deps.user_repository
        .save(&User::new("Alice", Some(30)).unwrap())
        .await
        .unwrap();

    loan_book(
        &deps,
        LoanBook {
            user_name: "Alice".to_string(),
            book_name: "Clean Code".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(count_loaned_book(&deps).await.unwrap(), 1);
    assert!(
        deps.loan_history_repository
            .exists_by_book_name_and_status("Clean Code", UserLoanStatus::Loaned)
            .await
            .unwrap()
    );

    return_book(
        &deps,
        ReturnBook {
            user_name: "Alice".to_string(),
            book_name: "Clean Code".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(count_loaned_book(&deps).await.unwrap(), 0);
    let reports = get_user_loan_histories(&deps).await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].books.len(), 1);
    assert!(reports[0].books[0].is_return);
}

#[tokio::test]
#[serial]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_delete_user_cascades_to_histories() {
    let pool = common::create_test_pool().await;
    let deps = common::postgres_dependencies(&pool).await;
    let alice = User::new("Alice", None).unwrap();
    let bob = User::new("Bob", Some(40)).unwrap();
    deps.user_repository
        .save_all(&[alice.clone(), bob.clone()])
        .await
        .unwrap();
    deps.loan_history_repository
        .save_all(&[
            UserLoanHistory::fixture(alice.id(), "A", UserLoanStatus::Loaned),
            UserLoanHistory::fixture(bob.id(), "B", UserLoanStatus::Loaned),
        ])
        .await
        .unwrap();

    delete_user(&deps, "Alice").await.unwrap();

    let histories = deps.loan_history_repository.find_all().await.unwrap();
    assert_eq!(histories.len(), 1);
    assert_eq!(histories[0].user_id(), bob.id());
    let users = deps.user_repository.find_all().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].age(), Some(40));
}

#[tokio::test]
#[serial]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_rename_updates_existing_row() {
    let pool = common::create_test_pool().await;
    let deps = common::postgres_dependencies(&pool).await;
    let mut user = User::new("Alice", None).unwrap();
    deps.user_repository.save(&user).await.unwrap();

    user.update_name("Alicia").unwrap();
    deps.user_repository.save(&user).await.unwrap();

    let users = deps.user_repository.find_all().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name(), "Alicia");
}

#[tokio::test]
#[serial]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_delete_all_empties_every_table() {
    let pool = common::create_test_pool().await;
    let deps = common::postgres_dependencies(&pool).await;
    let user = User::new("Alice", None).unwrap();
    deps.user_repository.save(&user).await.unwrap();
    deps.loan_history_repository
        .save(&UserLoanHistory::fixture(user.id(), "A", UserLoanStatus::Loaned))
        .await
        .unwrap();
    deps.book_repository
        .save(&Book::fixture("A", BookType::Computer))
        .await
        .unwrap();

    deps.user_repository.delete_all().await.unwrap();
    deps.book_repository.delete_all().await.unwrap();

    assert!(deps.user_repository.find_all().await.unwrap().is_empty());
    assert!(deps.loan_history_repository.find_all().await.unwrap().is_empty());
    assert!(deps.book_repository.find_all().await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_return_hits_first_history_by_name() {
    let pool = common::create_test_pool().await;
    let deps = common::postgres_dependencies(&pool).await;
    let user = User::new("Alice", None).unwrap();
    deps.user_repository.save(&user).await.unwrap();
    deps.loan_history_repository
        .save_all(&[
            UserLoanHistory::fixture(user.id(), "A", UserLoanStatus::Returned),
            UserLoanHistory::fixture(user.id(), "A", UserLoanStatus::Loaned),
        ])
        .await
        .unwrap();

    return_book(
        &deps,
        ReturnBook {
            user_name: "Alice".to_string(),
            book_name: "A".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(count_loaned_book(&deps).await.unwrap(), 1);
}
