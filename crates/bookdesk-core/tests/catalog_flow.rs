//! End-to-end controller scenarios: paging, assignment, response
//! ordering, and the conversation turn protocol.

mod support;

use std::sync::Arc;

use bookdesk_core::domain::{AssignmentRequest, TurnRole, ValidationError};
use bookdesk_core::ports::{AssignmentReceipt, GatewayError, NoopEmitter};
use bookdesk_core::services::{
    CatalogController, CatalogError, ConversationSession, PageLoad, SendOutcome,
};

use support::{FakeGateway, book};

fn catalog(gateway: Arc<FakeGateway>) -> Arc<CatalogController> {
    Arc::new(CatalogController::new(gateway, Arc::new(NoopEmitter)))
}

/// Yield to the scheduler until `cond` holds, so a spawned task can
/// reach its suspension point.
async fn wait_until(mut cond: impl FnMut() -> bool) {
    while !cond() {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_search_paging_end_to_end() {
    let tolkien: Vec<_> = (1..=23)
        .map(|i| book(i, &format!("Middle-earth vol. {i}"), 2))
        .collect();
    let gateway = Arc::new(FakeGateway::new().with_books("tolkien", tolkien));
    let controller = catalog(gateway);

    let loaded = controller.load_page("tolkien", 1, 10).await.unwrap();
    let PageLoad::Applied(page) = loaded else {
        panic!("expected the load to apply");
    };

    assert_eq!(page.count, 23);
    assert_eq!(page.books.len(), 10);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(controller.page_window(5), vec![1, 2, 3]);

    // The last page holds the remainder.
    controller.change_page(3).await.unwrap();
    assert_eq!(controller.current_page().books.len(), 3);
    assert_eq!(controller.current_page().page, 3);
}

#[tokio::test]
async fn test_stale_search_response_is_discarded() {
    let gateway = Arc::new(
        FakeGateway::new()
            .with_books("alpha", vec![book(1, "Alpha Primer", 1)])
            .with_books("beta", vec![book(2, "Beta Handbook", 1)]),
    );
    let alpha_gate = gateway.gate_list("alpha");
    let controller = catalog(gateway.clone());

    // "alpha" goes in flight and parks on the gate.
    let alpha_load = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.change_search_term("alpha").await })
    };
    wait_until(|| !gateway.list_calls().is_empty()).await;

    // "beta" is issued later but resolves first.
    let beta_load = controller.change_search_term("beta").await.unwrap();
    assert!(matches!(beta_load, PageLoad::Applied(_)));

    // Now "alpha" resolves late: its result must be dropped.
    alpha_gate.release();
    let alpha_load = alpha_load.await.unwrap().unwrap();
    assert_eq!(alpha_load, PageLoad::Superseded);

    assert_eq!(controller.search_term(), "beta");
    let page = controller.current_page();
    assert_eq!(page.books.len(), 1);
    assert_eq!(page.books[0].title, "Beta Handbook");
}

#[tokio::test]
async fn test_assignment_is_serialized_per_book() {
    let gateway = Arc::new(
        FakeGateway::new().with_books("", vec![book(1, "Dune", 5), book(2, "Emma", 4)]),
    );
    let assign_gate = gateway.gate_assign(1);
    gateway.push_assign_result(Ok(AssignmentReceipt {
        message: "Book assigned successfully".to_string(),
        remaining_quantity: 4,
    }));
    let controller = catalog(gateway.clone());
    controller.load_page("", 1, 10).await.unwrap();

    let pending = {
        let controller = controller.clone();
        tokio::spawn(async move {
            controller
                .assign(1, &AssignmentRequest::new("Priya", 1, 199.0))
                .await
        })
    };
    wait_until(|| controller.is_assigning(1)).await;

    // A second attempt for the same book is rejected client-side.
    let second = controller
        .assign(1, &AssignmentRequest::new("Rahul", 1, 199.0))
        .await;
    assert!(matches!(
        second,
        Err(CatalogError::Validation(ValidationError::AssignmentPending { book_id: 1 }))
    ));
    // Other books are unaffected by book 1's in-flight transaction.
    assert!(!controller.is_assigning(2));

    assign_gate.release();
    let receipt = pending.await.unwrap().unwrap();
    assert_eq!(receipt.remaining_quantity, 4);
    assert_eq!(controller.book(1).unwrap().quantity, 4);
    assert!(!controller.is_assigning(1));
}

#[tokio::test]
async fn test_assignment_patches_in_place_without_refetch() {
    let gateway = Arc::new(FakeGateway::new().with_books("", vec![book(1, "Dune", 5)]));
    gateway.push_assign_result(Ok(AssignmentReceipt {
        message: "Book assigned successfully".to_string(),
        remaining_quantity: 3,
    }));
    let controller = catalog(gateway.clone());
    controller.load_page("", 1, 10).await.unwrap();

    controller
        .assign(1, &AssignmentRequest::new("Priya", 2, 199.0))
        .await
        .unwrap();

    assert_eq!(controller.book(1).unwrap().quantity, 3);
    // The patch did not trigger another catalog fetch.
    assert_eq!(gateway.list_calls().len(), 1);
}

#[tokio::test]
async fn test_conflicting_assignment_surfaces_server_message() {
    let gateway = Arc::new(FakeGateway::new().with_books("", vec![book(1, "Dune", 1)]));
    gateway.push_assign_result(Err(GatewayError::Rejected {
        message: "Book is out of stock".to_string(),
    }));
    let controller = catalog(gateway);
    controller.load_page("", 1, 10).await.unwrap();

    // Cached stock says one copy is left, but the server already gave
    // it away: its answer wins and the cache is left untouched.
    let result = controller
        .assign(1, &AssignmentRequest::new("Priya", 1, 199.0))
        .await;
    match result {
        Err(CatalogError::Gateway(GatewayError::Rejected { message })) => {
            assert_eq!(message, "Book is out of stock");
        }
        other => panic!("expected a rejection, got {other:?}"),
    }
    assert_eq!(controller.book(1).unwrap().quantity, 1);
    assert!(!controller.is_assigning(1));
}

#[tokio::test]
async fn test_send_during_pending_start_is_rejected_then_succeeds() {
    let gateway = Arc::new(FakeGateway::new());
    let chat_gate = gateway.gate_next_chat();
    let session = Arc::new(ConversationSession::new(
        gateway.clone(),
        Arc::new(NoopEmitter),
    ));

    let start = {
        let session = session.clone();
        let about = book(7, "Atomic Habits", 3);
        tokio::spawn(async move { session.start(&about).await })
    };
    wait_until(|| session.sending()).await;

    // The transcript holds the optimistic user turn; a send while the
    // start completion is pending is ignored, not queued.
    assert_eq!(session.send("x").await, SendOutcome::Busy);
    assert_eq!(session.transcript().len(), 1);

    chat_gate.release();
    let conversation = start.await.unwrap();
    assert_eq!(conversation.turns.len(), 2);

    // Once the start completes, the same send goes through.
    assert_eq!(session.send("x").await, SendOutcome::Sent);
    let turns = session.transcript();
    assert_eq!(turns.len(), 4);
    let roles: Vec<_> = turns.iter().map(|t| t.role).collect();
    assert_eq!(
        roles,
        vec![TurnRole::User, TurnRole::Assistant, TurnRole::User, TurnRole::Assistant]
    );
}

#[tokio::test]
async fn test_start_during_pending_completion_discards_late_reply() {
    let gateway = Arc::new(FakeGateway::new());
    let chat_gate = gateway.gate_next_chat();
    let session = Arc::new(ConversationSession::new(
        gateway.clone(),
        Arc::new(NoopEmitter),
    ));

    let first = {
        let session = session.clone();
        let about = book(7, "Atomic Habits", 3);
        tokio::spawn(async move { session.start(&about).await })
    };
    wait_until(|| session.sending()).await;

    // Restarting discards the old conversation; the late completion
    // must not append to the new transcript.
    let second = {
        let session = session.clone();
        let about = book(8, "Dune", 2);
        tokio::spawn(async move { session.start(&about).await })
    };
    // Let the restart fully replace the conversation before the old
    // completion is released.
    wait_until(|| session.book_id() == Some(8)).await;
    chat_gate.release();
    let _ = first.await.unwrap();
    let conversation = second.await.unwrap();

    assert_eq!(conversation.book_id, 8);
    assert_eq!(conversation.turns.len(), 2);
    assert_eq!(session.book_id(), Some(8));
}
