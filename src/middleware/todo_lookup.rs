use super::user_lookup::resolve_user_by_header;
use crate::{error::AppError, models::User, AppState};
use axum::{
    extract::{rejection::PathRejection, Path, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::{Uuid, Variant};

/// RFC 4122 syntax check: hyphenated hex in either case, version 1-8 with the
/// RFC variant, or the nil and max UUIDs.
pub fn is_valid_uuid(raw: &str) -> bool {
    // try_parse also takes the simple, braced and urn forms
    if raw.len() != 36 {
        return false;
    }

    let Ok(id) = Uuid::try_parse(raw) else {
        return false;
    };

    if id.is_nil() || id.as_u128() == u128::MAX {
        return true;
    }

    matches!(id.get_version_num(), 1..=8) && id.get_variant() == Variant::RFC4122
}

/// Attach the caller and the todo named by the `{id}` path segment.
///
/// The caller is taken from the extensions when an earlier layer already
/// resolved it, otherwise from the `username` header. Checks run in this
/// order: undecodable path segment (400), unknown user (404), lookup among
/// the caller's todos, malformed id (400), todo absent (404).
pub async fn require_todo(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Path(id) = path?;

    let attached = request.extensions().get::<User>().cloned();
    let user = match attached {
        Some(user) => user,
        None => resolve_user_by_header(&state, &headers).await?,
    };

    let todo = user.find_todo(&id).cloned();

    if !is_valid_uuid(&id) {
        tracing::debug!(%id, "malformed todo id");
        return Err(AppError::BadRequest("uuid is not valid".to_string()));
    }

    let Some(todo) = todo else {
        tracing::debug!(user_id = %user.id, %id, "todo not found");
        return Err(AppError::NotFound("todo not found".to_string()));
    };

    request.extensions_mut().insert(user);
    request.extensions_mut().insert(todo);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_generated_ids() {
        for _ in 0..16 {
            assert!(is_valid_uuid(&Uuid::new_v4().to_string()));
        }
    }

    #[test]
    fn accepts_uppercase() {
        let id = Uuid::new_v4().to_string().to_uppercase();
        assert!(is_valid_uuid(&id));
    }

    #[test]
    fn accepts_nil_and_max() {
        assert!(is_valid_uuid("00000000-0000-0000-0000-000000000000"));
        assert!(is_valid_uuid("ffffffff-ffff-ffff-ffff-ffffffffffff"));
    }

    #[test]
    fn rejects_other_spellings() {
        let id = Uuid::new_v4();
        assert!(!is_valid_uuid(&id.simple().to_string()));
        assert!(!is_valid_uuid(&id.braced().to_string()));
        assert!(!is_valid_uuid(&id.urn().to_string()));
    }

    #[test]
    fn rejects_bad_version_or_variant() {
        // version nibble 0
        assert!(!is_valid_uuid("1b4e28ba-2fa1-01d2-883f-0016d3cca427"));
        // version nibble 9
        assert!(!is_valid_uuid("1b4e28ba-2fa1-91d2-883f-0016d3cca427"));
        // variant nibble c (Microsoft)
        assert!(!is_valid_uuid("1b4e28ba-2fa1-11d2-c83f-0016d3cca427"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(!is_valid_uuid("not-a-uuid"));
        assert!(!is_valid_uuid(""));
        assert!(!is_valid_uuid("zzzzzzzz-zzzz-4zzz-8zzz-zzzzzzzzzzzz"));
    }
}
