use web_sys::window;

// `trunk serve` hosts the client on this port while the API stays on the backend
const DEV_SERVER_PORT: &str = "8080";
const DEV_API_URL: &str = "http://127.0.0.1:3000";

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        let location = window.location();
        if let Ok(port) = location.port() {
            if port == DEV_SERVER_PORT {
                return DEV_API_URL.to_string();
            }
        }

        // Served by the backend itself, so relative URLs reach the API
        if location.host().is_ok() {
            return String::new();
        }
    }

    DEV_API_URL.to_string()
}

pub fn api_url(endpoint: &str) -> String {
    format!("{}{}", get_api_base_url(), endpoint)
}
