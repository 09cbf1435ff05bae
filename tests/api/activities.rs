use anyhow::Result;
use fake::{faker::internet::en::SafeEmail, Fake};
use indexmap::IndexMap;
use reqwest::StatusCode;
use serde_json::Value;
use signup::model::Activities;

use crate::helpers::{detail_of, TestApp};

#[tokio::test]
async fn get_activities_lists_every_activity() -> Result<()> {
    let app = TestApp::spawn().await?;

    let activities = app.get_activities().await?;
    let activities = activities.as_object().expect("activities are a JSON object");

    assert!(activities.contains_key("Chess Club"));

    let store = app.mm.activities().await;
    assert_eq!(activities.len(), store.len());
    for name in store.names() {
        let participants = &activities[name]["participants"];
        assert_eq!(
            participants,
            &serde_json::to_value(&store.get(name).unwrap().participants)?,
            "participants of {name} differ"
        );
    }

    let chess = &activities["Chess Club"];
    for field in ["description", "schedule", "max_participants", "participants"] {
        assert!(chess.get(field).is_some(), "missing field: {field}");
    }

    Ok(())
}

#[tokio::test]
async fn signup_and_unregister_flow() -> Result<()> {
    let app = TestApp::spawn().await?;
    let email = "test.user@example.com";

    let res = app.post_signup("Chess Club", email).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(
        body["message"],
        "Signed up test.user@example.com for Chess Club"
    );

    assert!(app
        .participants("Chess Club")
        .await?
        .contains(&email.to_string()));

    let res = app.delete_participant("Chess Club", email).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(
        body["message"],
        "Unregistered test.user@example.com from Chess Club"
    );

    assert!(!app
        .participants("Chess Club")
        .await?
        .contains(&email.to_string()));

    Ok(())
}

#[tokio::test]
async fn signup_appends_to_the_end() -> Result<()> {
    let app = TestApp::spawn().await?;
    let before = app.participants("Programming Class").await?;

    let emails: Vec<String> = (0..3).map(|_| SafeEmail().fake()).collect();
    for email in &emails {
        app.post_signup("Programming Class", email)
            .await?
            .error_for_status()?;
    }

    let after = app.participants("Programming Class").await?;
    assert_eq!(after[..before.len()], before[..]);
    assert_eq!(after[before.len()..], emails[..]);

    Ok(())
}

#[tokio::test]
async fn signup_duplicate_returns_400() -> Result<()> {
    let app = TestApp::spawn().await?;
    let email = "dup.user@example.com";

    let res = app.post_signup("Chess Club", email).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.post_signup("Chess Club", email).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(detail_of(res).await?.contains("already signed up"));

    // Seeded participants count as signed up.
    let res = app
        .post_signup("Chess Club", "michael@mergington.edu")
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn signup_unknown_activity_returns_404() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.post_signup("DoesNotExist", "test@example.com").await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(detail_of(res).await?, "Activity not found");

    Ok(())
}

#[tokio::test]
async fn unregister_nonexistent_participant_returns_404() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .delete_participant("Chess Club", "noone@example.com")
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(detail_of(res).await?, "Participant not found");

    Ok(())
}

#[tokio::test]
async fn unregister_nonexistent_activity_returns_404() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .delete_participant("DoesNotExist", "test@example.com")
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(detail_of(res).await?, "Activity not found");

    Ok(())
}

#[tokio::test]
async fn unregister_seeded_participant_ok() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .delete_participant("Chess Club", "daniel@mergington.edu")
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(
        app.participants("Chess Club").await?,
        ["michael@mergington.edu"]
    );

    Ok(())
}

#[tokio::test]
async fn signup_then_unregister_restores_roster() -> Result<()> {
    let app = TestApp::spawn().await?;
    let before = app.get_activities().await?;

    let email: String = SafeEmail().fake();
    app.post_signup("Art Club", &email).await?.error_for_status()?;
    app.delete_participant("Art Club", &email)
        .await?
        .error_for_status()?;

    assert_eq!(app.get_activities().await?, before);

    Ok(())
}

#[tokio::test]
async fn missing_email_returns_422() -> Result<()> {
    let app = TestApp::spawn().await?;
    let before = app.get_activities().await?;

    let cases = [
        app.http_client
            .post(app.url("/activities/Chess%20Club/signup"))
            .send()
            .await?,
        app.http_client
            .delete(app.url("/activities/Chess%20Club/participants"))
            .send()
            .await?,
        app.http_client
            .post(app.url("/activities/Chess%20Club/signup?mail=a@example.com"))
            .send()
            .await?,
    ];

    for res in cases {
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(detail_of(res).await?.starts_with("Received invalid input"));
    }
    assert_eq!(app.get_activities().await?, before);

    Ok(())
}

#[tokio::test]
async fn stores_are_isolated_between_apps() -> Result<()> {
    let first = TestApp::spawn().await?;
    let second = TestApp::spawn().await?;
    let email = "isolated@example.com";

    first
        .post_signup("Chess Club", email)
        .await?
        .error_for_status()?;

    assert!(first
        .participants("Chess Club")
        .await?
        .contains(&email.to_string()));
    assert!(!second
        .participants("Chess Club")
        .await?
        .contains(&email.to_string()));

    Ok(())
}

#[tokio::test]
async fn get_activities_keeps_seed_order() -> Result<()> {
    let app = TestApp::spawn().await?;

    let body = app
        .http_client
        .get(app.url("/activities"))
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let listed: IndexMap<String, Value> = serde_json::from_str(&body)?;

    let seed = Activities::from_seed_str(&std::fs::read_to_string("config/seed.toml")?)?;
    let expected: Vec<&str> = seed.names().collect();

    assert_eq!(listed.keys().map(String::as_str).collect::<Vec<_>>(), expected);
    assert_eq!(expected.first(), Some(&"Chess Club"));

    Ok(())
}

#[tokio::test]
async fn undecodable_activity_name_returns_json_error() -> Result<()> {
    let app = TestApp::spawn().await?;

    let cases = [
        app.http_client
            .post(app.url("/activities/%FF/signup?email=a@example.com"))
            .send()
            .await?,
        app.http_client
            .delete(app.url("/activities/%FF/participants?email=a@example.com"))
            .send()
            .await?,
    ];

    for res in cases {
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = res.json().await?;
        assert!(body["detail"]
            .as_str()
            .unwrap_or_default()
            .starts_with("Received invalid input"));
        assert!(body["req_id"].is_string());
    }

    Ok(())
}

#[tokio::test]
async fn repeated_email_uses_the_last_value() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .post(app.activity_url("Chess Club", "signup")?)
        .query(&[("email", "first@example.com"), ("email", "last@example.com")])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let participants = app.participants("Chess Club").await?;
    assert!(participants.contains(&"last@example.com".to_string()));
    assert!(!participants.contains(&"first@example.com".to_string()));

    Ok(())
}

#[tokio::test]
async fn activity_names_with_reserved_characters_reach_the_handler() -> Result<()> {
    let app = TestApp::spawn().await?;

    // Encoded as a single segment, so this is looked up and not found rather than misrouted.
    let res = app.post_signup("Rock/Roll? #1 & 50%", "a@example.com").await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(detail_of(res).await?, "Activity not found");

    Ok(())
}
