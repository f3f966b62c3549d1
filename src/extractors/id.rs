use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Single positive integer path parameter of any size. Anything else answers like an unknown route.
/// Values past the key range are kept (saturated at `u64::MAX`) so lookups report the entity as missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityId(pub u64);

fn parse_positive_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Digits only, so the parse can only fail on overflow.
    let id = raw.parse::<u64>().unwrap_or(u64::MAX);
    (id > 0).then_some(id)
}

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::route_not_found())?;
        parse_positive_id(&raw)
            .map(EntityId)
            .ok_or_else(AppError::route_not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::parse_positive_id;

    #[test]
    fn accepts_positive_integers_only() {
        assert_eq!(parse_positive_id("5"), Some(5));
        assert_eq!(parse_positive_id("007"), Some(7));
        assert_eq!(parse_positive_id("0"), None);
        assert_eq!(parse_positive_id("-1"), None);
        assert_eq!(parse_positive_id("+1"), None);
        assert_eq!(parse_positive_id("abc"), None);
        assert_eq!(parse_positive_id(""), None);
        assert_eq!(parse_positive_id("3000000000"), Some(3_000_000_000));
        assert_eq!(parse_positive_id("123456789012345678901234567890"), Some(u64::MAX));
        assert_eq!(parse_positive_id("000"), None);
    }
}
