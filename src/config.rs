//! Build-time endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client talks to three deployments: the platform API (auth, users,
//! organisations), the viewer API (model/splat file delivery), and the
//! standalone viewer UI. Base URLs are baked in at compile time so a
//! deployed bundle has no runtime configuration surface.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Platform API base URL (auth, users, organisations).
pub const PLATFORM_API_URL: &str = match option_env!("MODELS360_PLATFORM_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Viewer API base URL (model/splat latest-file delivery).
pub const VIEWER_API_URL: &str = match option_env!("MODELS360_VIEWER_API_URL") {
    Some(url) => url,
    None => "http://localhost:8001",
};

/// Viewer UI base URL (standalone 3D viewer deployment).
pub const VIEWER_UI_URL: &str = match option_env!("MODELS360_VIEWER_UI_URL") {
    Some(url) => url,
    None => "http://localhost:5174",
};

/// Join a base URL and an absolute-style path without doubling slashes.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Build a platform API URL for `path`.
pub fn platform_api(path: &str) -> String {
    join_url(PLATFORM_API_URL, path)
}

/// Build a viewer API URL for `path`.
pub fn viewer_api(path: &str) -> String {
    join_url(VIEWER_API_URL, path)
}

/// Build a viewer UI URL for `path`.
pub fn viewer_ui(path: &str) -> String {
    join_url(VIEWER_UI_URL, path)
}
