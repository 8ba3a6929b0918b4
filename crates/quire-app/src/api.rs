//! HTTP calls to the blog API.

use quire_browser::{FormField, ImageFile, PostPayload};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::CONFIG;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with an `error` message of its own.
    #[error("{0}")]
    Server(String),
    #[error("Request failed with status {0}")]
    Status(u16),
    #[error("Could not reach the server: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Upload response did not include an image URL")]
    MissingImage,
}

/// Body shape shared by the upload and create endpoints.
#[derive(Debug, Default, Deserialize, PartialEq)]
struct ApiResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

/// Interpret a response body.
///
/// A non-empty `error` wins over the status code so the server's own message
/// reaches the user.
fn parse_response(status: u16, body: &str) -> Result<ApiResponse, ApiError> {
    let response = if body.trim().is_empty() {
        ApiResponse::default()
    } else {
        match serde_json::from_str::<ApiResponse>(body) {
            Ok(response) => response,
            Err(_) if !(200..300).contains(&status) => return Err(ApiError::Status(status)),
            Err(e) => return Err(e.into()),
        }
    };
    if let Some(error) = response.error.as_deref().filter(|e| !e.is_empty()) {
        return Err(ApiError::Server(error.to_string()));
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }
    Ok(response)
}

fn file_part(file: &ImageFile) -> Result<Part, ApiError> {
    Ok(Part::bytes(file.data.to_vec())
        .file_name(file.name.to_string())
        .mime_str(&file.mime_type)?)
}

fn post_form(payload: &PostPayload) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for (name, field) in payload.fields() {
        form = match field {
            FormField::Text(text) => form.text(name, text),
            FormField::File(file) => form.part(name, file_part(&file)?),
        };
    }
    Ok(form)
}

async fn send(url: String, form: Form) -> Result<ApiResponse, ApiError> {
    let response = reqwest::Client::new()
        .post(url)
        .multipart(form)
        .send()
        .await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    parse_response(status, &body)
}

/// Upload an inline image, returning its public URL.
pub async fn upload_image(file: &ImageFile) -> Result<String, ApiError> {
    tracing::debug!(name = %file.name, size = file.data.len(), "uploading image");
    let form = Form::new().part("image", file_part(file)?);
    let response = send(CONFIG.upload_image_url(), form).await?;
    response
        .image
        .filter(|url| !url.is_empty())
        .ok_or(ApiError::MissingImage)
}

/// Create a post from a validated payload.
pub async fn create_post(payload: &PostPayload) -> Result<(), ApiError> {
    tracing::debug!(slug = %payload.slug, "creating post");
    send(CONFIG.create_post_url(), post_form(payload)?).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_with_image() {
        let response = parse_response(200, r#"{"image":"https://cdn.example.com/a.png"}"#).unwrap();
        assert_eq!(response.image.as_deref(), Some("https://cdn.example.com/a.png"));
    }

    #[test]
    fn test_server_error_message_wins() {
        let err = parse_response(400, r#"{"error":"File too large"}"#).unwrap_err();
        assert_eq!(err.to_string(), "File too large");

        let err = parse_response(200, r#"{"error":"Nope","image":"x"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Server(ref msg) if msg == "Nope"));
    }

    #[test]
    fn test_status_without_body() {
        let err = parse_response(500, "").unwrap_err();
        assert!(matches!(err, ApiError::Status(500)));
        let err = parse_response(502, "<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Status(502)));
    }

    #[test]
    fn test_empty_error_is_ignored() {
        let response = parse_response(201, r#"{"error":""}"#).unwrap();
        assert_eq!(response, ApiResponse { error: Some(String::new()), image: None });
    }

    #[test]
    fn test_garbage_success_body_is_decode_error() {
        let err = parse_response(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
