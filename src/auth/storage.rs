//! Token Storage
//!
//! The two auth tokens in browser local storage. Read by the HTTP client on
//! every request; written only by the session context.

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn access_token() -> Option<String> {
    local_storage()?.get_item(ACCESS_TOKEN_KEY).ok().flatten()
}

pub fn store_tokens(access: &str, refresh: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, access);
        let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh);
    }
}

/// Clears both tokens; a no-op when none are stored
pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn stored(key: &str) -> Option<String> {
        local_storage().unwrap().get_item(key).unwrap()
    }

    #[wasm_bindgen_test]
    fn store_then_read_both_tokens() {
        clear_tokens();
        store_tokens("access-a", "refresh-b");
        assert_eq!(access_token().as_deref(), Some("access-a"));
        assert_eq!(stored(REFRESH_TOKEN_KEY).as_deref(), Some("refresh-b"));
        clear_tokens();
    }

    #[wasm_bindgen_test]
    fn clear_removes_both_tokens() {
        store_tokens("a", "b");
        clear_tokens();
        assert_eq!(access_token(), None);
        assert_eq!(stored(REFRESH_TOKEN_KEY), None);
    }

    #[wasm_bindgen_test]
    fn clear_with_nothing_stored_succeeds() {
        clear_tokens();
        clear_tokens();
        assert_eq!(access_token(), None);
        assert_eq!(stored(REFRESH_TOKEN_KEY), None);
    }
}
