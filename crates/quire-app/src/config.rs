use smol_str::SmolStr;

use crate::env;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_APP_NAME: &str = "Quire";

/// Application configuration, fixed at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the blog API, without a trailing slash.
    pub api_url: SmolStr,
    pub app_name: SmolStr,
}

impl Config {
    pub fn new(api_url: &str, app_name: &str) -> Self {
        let api_url = api_url.trim().trim_end_matches('/');
        let app_name = app_name.trim();
        Self {
            api_url: if api_url.is_empty() {
                SmolStr::new_static(DEFAULT_API_URL)
            } else {
                SmolStr::new(api_url)
            },
            app_name: if app_name.is_empty() {
                SmolStr::new_static(DEFAULT_APP_NAME)
            } else {
                SmolStr::new(app_name)
            },
        }
    }

    pub fn from_env() -> Self {
        Self::new(env::QUIRE_API_URL, env::QUIRE_APP_NAME)
    }

    pub fn upload_image_url(&self) -> String {
        format!("{}/post/upload-image", self.api_url)
    }

    pub fn create_post_url(&self) -> String {
        format!("{}/post/create", self.api_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_APP_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_join_without_double_slash() {
        let config = Config::new("https://blog.example.com/api/", "Blog");
        assert_eq!(
            config.upload_image_url(),
            "https://blog.example.com/api/post/upload-image"
        );
        assert_eq!(
            config.create_post_url(),
            "https://blog.example.com/api/post/create"
        );
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = Config::new("  ", "");
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "http://localhost:8000/api");
        assert_eq!(config.app_name, "Quire");
    }
}
