mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use social_server::types::user::{friend_ids, FriendRes, UserRes};
use uuid::Uuid;

#[tokio::test]
async fn test_get_user_flow() {
    println!("\n\n[+] Running test: test_get_user_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, token) = client.create_test_user(None).await.expect("Failed creating a test user");

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", user_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::OK);

    let body: UserRes = test::read_body_json(resp).await;
    assert_eq!(body.id, user_id);
    assert_eq!(body.first_name, "Test");

    println!("[>] Fetching a user that does not exist");
    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", Uuid::new_v4()))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: Get user flow successful.");
}

#[tokio::test]
async fn test_user_flow_requires_token() {
    println!("\n\n[+] Running test: test_user_flow_requires_token");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, _) = client.create_test_user(None).await.expect("Failed creating a test user");

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", user_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", user_id))
        .insert_header(("Authorization", "Bearer invalid_token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: Missing and invalid tokens rejected.");
}

#[tokio::test]
async fn test_friend_toggle_flow() {
    println!("\n\n[+] Running test: test_friend_toggle_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (alice, alice_token) = client.create_test_user(None).await.expect("alice");
    let (bob, _) = client.create_test_user(None).await.expect("bob");
    println!("[+] Created users alice={} bob={}", alice, bob);

    println!("[>] alice adds bob");
    let req = test::TestRequest::patch()
        .uri(&format!("/users/{}/{}", alice, bob))
        .insert_header(("Authorization", format!("Bearer {}", alice_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let friends: Vec<FriendRes> = test::read_body_json(resp).await;
    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].id, bob);

    // both sides were written
    let bob_row = ctx.db.get_user_by_id(&bob).await.expect("bob row");
    assert_eq!(friend_ids(&bob_row.friends), vec![alice.to_string()]);

    println!("[>] Listing alice's friends");
    let req = test::TestRequest::get()
        .uri(&format!("/users/{}/friends", alice))
        .insert_header(("Authorization", format!("Bearer {}", alice_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let friends: Vec<FriendRes> = test::read_body_json(resp).await;
    assert_eq!(friends.iter().map(|f| f.id).collect::<Vec<_>>(), vec![bob]);

    println!("[>] alice removes bob");
    let req = test::TestRequest::patch()
        .uri(&format!("/users/{}/{}", alice, bob))
        .insert_header(("Authorization", format!("Bearer {}", alice_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let friends: Vec<FriendRes> = test::read_body_json(resp).await;
    assert!(friends.is_empty());

    let bob_row = ctx.db.get_user_by_id(&bob).await.expect("bob row");
    assert!(friend_ids(&bob_row.friends).is_empty());
    println!("[/] Test passed: Friend toggle is symmetric.");
}

#[tokio::test]
async fn test_friend_toggle_unknown_friend() {
    println!("\n\n[+] Running test: test_friend_toggle_unknown_friend");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (alice, alice_token) = client.create_test_user(None).await.expect("alice");

    let req = test::TestRequest::patch()
        .uri(&format!("/users/{}/{}", alice, Uuid::new_v4()))
        .insert_header(("Authorization", format!("Bearer {}", alice_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // nothing half-written
    let alice_row = ctx.db.get_user_by_id(&alice).await.expect("alice row");
    assert!(friend_ids(&alice_row.friends).is_empty());
    println!("[/] Test passed: Unknown friend is NOT_FOUND.");
}
