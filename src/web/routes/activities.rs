use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::{field, info, Span};

use crate::{
    model::Activities,
    web::{
        types::{EmailQuery, Message},
        Error, WebResult,
    },
    AppState,
};

type PathParam = Result<Path<String>, PathRejection>;
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

#[tracing::instrument(name = "Listing activities", skip_all)]
pub async fn list(State(app_state): State<AppState>) -> Json<Activities> {
    Json(app_state.model_mgr.activities().await)
}

#[tracing::instrument(
    name = "Signing up a participant",
    skip_all,
    fields(activity = field::Empty)
)]
pub async fn signup(
    State(app_state): State<AppState>,
    path: PathParam,
    query: QueryPairs,
) -> WebResult<Json<Message>> {
    let (name, EmailQuery { email }) = extract(path, query)?;

    let spots_left = app_state.model_mgr.signup(&name, &email).await?;
    info!(%email, spots_left, "SIGNED UP");

    Ok(Json(Message::signed_up(&email, &name)))
}

#[tracing::instrument(
    name = "Unregistering a participant",
    skip_all,
    fields(activity = field::Empty)
)]
pub async fn unregister(
    State(app_state): State<AppState>,
    path: PathParam,
    query: QueryPairs,
) -> WebResult<Json<Message>> {
    let (name, EmailQuery { email }) = extract(path, query)?;

    app_state.model_mgr.unregister(&name, &email).await?;
    info!(%email, "UNREGISTERED");

    Ok(Json(Message::unregistered(&email, &name)))
}

/// Unwraps the activity name and the email, recording the name on the current span.
fn extract(path: PathParam, query: QueryPairs) -> WebResult<(String, EmailQuery)> {
    let Path(name) = path?;
    Span::current().record("activity", name.as_str());

    let Query(pairs) = query?;
    let email_query = EmailQuery::from_pairs(pairs).ok_or(Error::MissingQueryParam("email"))?;

    Ok((name, email_query))
}
