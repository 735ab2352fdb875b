//! Session cookies
//!
//! Both cookies are HttpOnly, Secure and SameSite=Strict. The refresh cookie is
//! scoped to `/api/v1/` so it only travels to the API itself.

use axum_extra::extract::cookie::{Cookie, SameSite};

pub const ACCESS_COOKIE: &str = "access";
pub const REFRESH_COOKIE: &str = "refresh";

const ACCESS_PATH: &str = "/api/v1";
const REFRESH_PATH: &str = "/api/v1/";

fn session_cookie(name: &'static str, value: String, path: &'static str) -> Cookie<'static> {
    Cookie::build((name, value))
        .path(path)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .build()
}

pub fn access_cookie(token: String) -> Cookie<'static> {
    session_cookie(ACCESS_COOKIE, token, ACCESS_PATH)
}

pub fn refresh_cookie(refresh: String) -> Cookie<'static> {
    session_cookie(REFRESH_COOKIE, refresh, REFRESH_PATH)
}

/// Expired cookies that clear both session cookies on the client
///
/// Sent unconditionally, whether or not the request carried the cookies.
pub fn removal_cookies() -> [Cookie<'static>; 2] {
    [
        removal(ACCESS_COOKIE, ACCESS_PATH),
        removal(REFRESH_COOKIE, REFRESH_PATH),
    ]
}

fn removal(name: &'static str, path: &'static str) -> Cookie<'static> {
    let mut cookie = session_cookie(name, String::new(), path);
    cookie.make_removal();
    cookie
}
