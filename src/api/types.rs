//! Transport-neutral request/response types
//!
//! Whatever carries the request (an HTTP server, a queue consumer, the
//! command-line entry point) hands the body in as an `ApiRequest` and writes
//! back the status code and body of the `ApiResponse`.

/// A request body awaiting processing
///
/// # Examples
///
/// ```
/// use fast_delivery::api::ApiRequest;
///
/// let request = ApiRequest::new(r#"{"packages": []}"#.to_string());
/// assert!(request.body().contains("packages"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    body: String,
}

impl ApiRequest {
    /// Creates a new `ApiRequest`
    #[must_use]
    pub const fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the request body
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Status code plus JSON body
///
/// Status codes follow HTTP semantics so a server adapter can pass them
/// through unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    status_code: u16,
    body: String,
}

impl ApiResponse {
    /// Creates a new `ApiResponse`
    #[must_use]
    pub const fn new(status_code: u16, body: String) -> Self {
        Self { status_code, body }
    }

    /// 200 OK
    #[must_use]
    pub const fn ok(body: String) -> Self {
        Self::new(200, body)
    }

    /// 400 Bad Request
    #[must_use]
    pub const fn bad_request(body: String) -> Self {
        Self::new(400, body)
    }

    /// 500 Internal Server Error
    #[must_use]
    pub const fn internal_server_error(body: String) -> Self {
        Self::new(500, body)
    }

    /// Returns the status code
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns the body
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` for 2xx status codes
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code >= 200 && self.status_code < 300
    }
}
