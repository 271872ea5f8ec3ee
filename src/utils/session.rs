use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::{IntoResponseParts, ResponseParts};
use axum_extra::extract::cookie::{Cookie, Key, SignedCookieJar};
use std::convert::Infallible;

use crate::types::user::Username;

const SESSION_COOKIE: &str = "username";

/// Per-request session state, carried entirely in a signed cookie. The
/// server keeps no session table; presence of the cookie is the whole
/// authorization model. `establish` and `clear` are transitions on the
/// value, applied to the response when the session is returned from a
/// handler.
pub(crate) struct Session {
    jar: SignedCookieJar,
}

impl Session {
    pub(crate) fn username(&self) -> Option<Username> {
        self.jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_owned())
    }

    pub(crate) fn establish(self, username: &str) -> Self {
        let cookie = Cookie::build((SESSION_COOKIE, username.to_owned()))
            .path("/")
            .http_only(true)
            .build();

        Self {
            jar: self.jar.add(cookie),
        }
    }

    pub(crate) fn clear(self) -> Self {
        Self {
            jar: self.jar.remove(Cookie::build(SESSION_COOKIE).path("/")),
        }
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = <SignedCookieJar as FromRequestParts<S>>::from_request_parts(parts, state).await?;

        Ok(Session { jar })
    }
}

impl IntoResponseParts for Session {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.jar.into_response_parts(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_session() -> Session {
        Session {
            jar: SignedCookieJar::new(Key::from(&[0u8; 64])),
        }
    }

    #[test]
    fn establish_then_clear() {
        let session = empty_session();
        assert_eq!(session.username(), None);

        let session = session.establish("admin");
        assert_eq!(session.username(), Some("admin".to_owned()));

        let session = session.clear();
        assert_eq!(session.username(), None);
    }
}
