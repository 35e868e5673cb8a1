//! # REST client for the Bookshelf backend
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] and exposes one method per backend
//! endpoint. Every call is credentialed so the `httpOnly` session cookie travels
//! with it: on wasm each request sets fetch `credentials: "include"`, natively the
//! client keeps its own cookie jar.
//!
//! ## Endpoints
//!
//! | Method | Request | Response |
//! |--------|---------|----------|
//! | [`login`](ApiClient::login) | `POST /auth/login` | [`LoginResponse`] |
//! | [`register`](ApiClient::register) | `POST /auth/register` | [`RegisterResponse`] |
//! | [`refresh`](ApiClient::refresh) | `POST /auth/refresh` | [`LoginResponse`] |
//! | [`logout`](ApiClient::logout) | `POST /auth/logout` | — |
//! | [`list_books`](ApiClient::list_books) | `GET /books` | `Vec<Book>` |
//! | [`get_book`](ApiClient::get_book) | `GET /books/:id` | [`Book`] |
//! | [`add_book`](ApiClient::add_book) | `POST /books` | [`Book`] |
//! | [`update_book`](ApiClient::update_book) | `PUT /books/:id` | — |
//! | [`delete_book`](ApiClient::delete_book) | `DELETE /books/:id` | — |
//! | [`add_book_by_isbn`](ApiClient::add_book_by_isbn) | `POST /books/isbn/:isbn` | [`Book`] |
//!
//! ## Fault hook
//!
//! All calls funnel through a single send path. When a call fails, the hook set
//! with [`ApiClient::with_fault_hook`] sees the [`ApiError`] first, then the same
//! error is returned to the caller. The session layer uses the hook to react to
//! 401/403/500/network failures in one place.

use std::fmt;
use std::rc::Rc;

use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{Book, Credentials, LoginResponse, RegisterResponse, Registration};

/// Callback invoked with every failed request before the error is returned.
pub type FaultHook = Rc<dyn Fn(&ApiError)>;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    fault_hook: Option<FaultHook>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("fault_hook", &self.fault_hook.is_some())
            .finish()
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    /// Create a client for the backend rooted at `base_url`, e.g.
    /// `"https://books.example.com/api"`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: build_http(),
            base_url: base_url.trim_end_matches('/').to_string(),
            fault_hook: None,
        }
    }

    /// Builder method to install the fault hook.
    pub fn with_fault_hook(mut self, hook: impl Fn(&ApiError) + 'static) -> Self {
        self.fault_hook = Some(Rc::new(hook));
        self
    }

    /// A client sharing the same connection pool and cookie jar, without a hook.
    pub fn without_fault_hook(&self) -> Self {
        Self {
            fault_hook: None,
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- auth ----

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let req = self.request(Method::POST, &["auth", "login"])?;
        self.send(req.json(credentials)).await
    }

    pub async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError> {
        let req = self.request(Method::POST, &["auth", "register"])?;
        self.send(req.json(registration)).await
    }

    /// Ask the backend to renew the session cookie. The backend only issues a new
    /// token when the current one is close to expiring.
    pub async fn refresh(&self) -> Result<LoginResponse, ApiError> {
        let req = self.request(Method::POST, &["auth", "refresh"])?;
        self.send(req.json(&serde_json::json!({}))).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let req = self.request(Method::POST, &["auth", "logout"])?;
        self.send_empty(req.json(&serde_json::json!({}))).await
    }

    // ---- books ----

    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let req = self.request(Method::GET, &["books"])?;
        self.send(req).await
    }

    pub async fn get_book(&self, id: &str) -> Result<Book, ApiError> {
        let req = self.request(Method::GET, &["books", id])?;
        self.send(req).await
    }

    pub async fn add_book(&self, book: &Book) -> Result<Book, ApiError> {
        let req = self.request(Method::POST, &["books"])?;
        self.send(req.json(book)).await
    }

    pub async fn update_book(&self, id: &str, book: &Book) -> Result<(), ApiError> {
        let req = self.request(Method::PUT, &["books", id])?;
        self.send_empty(req.json(book)).await
    }

    pub async fn delete_book(&self, id: &str) -> Result<(), ApiError> {
        let req = self.request(Method::DELETE, &["books", id])?;
        self.send_empty(req).await
    }

    /// Look the ISBN up on the backend and add the resulting book to the collection.
    pub async fn add_book_by_isbn(&self, isbn: &str) -> Result<Book, ApiError> {
        let req = self.request(Method::POST, &["books", "isbn", isbn])?;
        self.send(req.json(&serde_json::json!({}))).await
    }

    // ---- plumbing ----

    /// Build the URL for `segments` under the base URL. Segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ApiError::Request(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Request(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(segments).map_err(|e| self.intercept(e))?;
        Ok(with_credentials(self.http.request(method, url)))
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let result = match execute(req).await {
            Ok(response) => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string())),
            Err(e) => Err(e),
        };
        result.map_err(|e| self.intercept(e))
    }

    async fn send_empty(&self, req: RequestBuilder) -> Result<(), ApiError> {
        execute(req)
            .await
            .map(|_| ())
            .map_err(|e| self.intercept(e))
    }

    /// The single interception point for failed calls.
    fn intercept(&self, err: ApiError) -> ApiError {
        tracing::warn!(status = ?err.status(), "request failed: {err}");
        if let Some(hook) = &self.fault_hook {
            hook(&err);
        }
        err
    }
}

/// Error body sent by the backend. `message` is a string, or a list of
/// validation messages.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<serde_json::Value>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        match self.message? {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect();
                (!parts.is_empty()).then(|| parts.join(", "))
            }
            _ => None,
        }
    }
}

async fn execute(req: RequestBuilder) -> Result<Response, ApiError> {
    let response = req.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_message);
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(req: RequestBuilder) -> RequestBuilder {
    req.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(req: RequestBuilder) -> RequestBuilder {
    // Native clients carry cookies in their own jar
    req
}

#[cfg(target_arch = "wasm32")]
fn build_http() -> reqwest::Client {
    reqwest::Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_else(|e| {
            tracing::error!("Failed to build HTTP client with cookie store: {e}");
            reqwest::Client::new()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::Fault;
    use crate::models::AuthUser;

    use std::cell::RefCell;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;

    const SESSION_COOKIE: &str = "session=s3cr3t";

    type Shelf = Arc<Mutex<Vec<Book>>>;

    fn has_session(headers: &HeaderMap) -> bool {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .any(|v| v.split(';').any(|c| c.trim() == SESSION_COOKIE))
    }

    fn user_json() -> serde_json::Value {
        json!({"user": {"id": "u-1", "email": "ada@example.com", "firstName": "Ada", "lastName": "Lovelace"}})
    }

    fn unauthorized() -> axum::response::Response {
        (StatusCode::UNAUTHORIZED, Json(json!({"message": "Unauthorized"}))).into_response()
    }

    async fn login(Json(body): Json<serde_json::Value>) -> axum::response::Response {
        if body["email"] == "ada@example.com" && body["password"] == "analytical" {
            (
                [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/; HttpOnly"))],
                Json(user_json()),
            )
                .into_response()
        } else {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"message": "Invalid credentials"})),
            )
                .into_response()
        }
    }

    async fn register(Json(body): Json<serde_json::Value>) -> axum::response::Response {
        if body["email"] == "taken@example.com" {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"message": ["email already registered", "choose another"]})),
            )
                .into_response();
        }
        (
            StatusCode::CREATED,
            [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/; HttpOnly"))],
            Json(json!({"user": {
                "id": "u-2",
                "email": body["email"],
                "firstName": body["firstName"],
                "lastName": body["lastName"],
            }})),
        )
            .into_response()
    }

    async fn refresh(headers: HeaderMap) -> axum::response::Response {
        if has_session(&headers) {
            Json(user_json()).into_response()
        } else {
            unauthorized()
        }
    }

    async fn list_books(State(shelf): State<Shelf>, headers: HeaderMap) -> axum::response::Response {
        if !has_session(&headers) {
            return unauthorized();
        }
        Json(shelf.lock().unwrap().clone()).into_response()
    }

    async fn get_book(State(shelf): State<Shelf>, Path(id): Path<String>) -> axum::response::Response {
        let shelf = shelf.lock().unwrap();
        match shelf.iter().find(|b| b.id.as_deref() == Some(id.as_str())) {
            Some(book) => Json(book.clone()).into_response(),
            None => (StatusCode::NOT_FOUND, Json(json!({"message": "Book not found"}))).into_response(),
        }
    }

    async fn add_book(State(shelf): State<Shelf>, Json(mut book): Json<Book>) -> Json<Book> {
        let mut shelf = shelf.lock().unwrap();
        book.id = Some(format!("b-{}", shelf.len() + 1));
        shelf.push(book.clone());
        Json(book)
    }

    async fn update_book(
        State(shelf): State<Shelf>,
        Path(id): Path<String>,
        Json(book): Json<Book>,
    ) -> StatusCode {
        let mut shelf = shelf.lock().unwrap();
        match shelf.iter_mut().find(|b| b.id.as_deref() == Some(id.as_str())) {
            Some(slot) => {
                *slot = book;
                StatusCode::NO_CONTENT
            }
            None => StatusCode::NOT_FOUND,
        }
    }

    async fn delete_book(State(shelf): State<Shelf>, Path(id): Path<String>) -> StatusCode {
        shelf
            .lock()
            .unwrap()
            .retain(|b| b.id.as_deref() != Some(id.as_str()));
        StatusCode::NO_CONTENT
    }

    async fn add_by_isbn(State(shelf): State<Shelf>, Path(isbn): Path<String>) -> axum::response::Response {
        match isbn.as_str() {
            "9780441172719" => {
                let mut shelf = shelf.lock().unwrap();
                let mut book = Book::new("Dune", "Frank Herbert");
                book.id = Some(format!("b-{}", shelf.len() + 1));
                shelf.push(book.clone());
                Json(book).into_response()
            }
            "boom" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            "secret" => StatusCode::FORBIDDEN.into_response(),
            // Echo the raw segment so tests can check encoding
            other => (
                StatusCode::NOT_FOUND,
                Json(json!({"message": format!("No book for {other}")})),
            )
                .into_response(),
        }
    }

    async fn spawn_backend() -> (String, Shelf) {
        let shelf: Shelf = Arc::new(Mutex::new(Vec::new()));
        let router = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/register", post(register))
            .route("/api/auth/refresh", post(refresh))
            .route("/api/auth/logout", post(|| async { StatusCode::NO_CONTENT }))
            .route("/api/books", get(list_books).post(add_book))
            .route(
                "/api/books/{id}",
                get(get_book).put(update_book).delete(delete_book),
            )
            .route("/api/books/isbn/{isbn}", post(add_by_isbn))
            .route("/api/broken", get(|| async { "not json" }))
            .with_state(shelf.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        (format!("http://{addr}/api/"), shelf)
    }

    fn recording_client(base: &str) -> (ApiClient, Rc<RefCell<Vec<Fault>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let client =
            ApiClient::new(base).with_fault_hook(move |err: &ApiError| sink.borrow_mut().push(err.fault()));
        (client, seen)
    }

    fn ada() -> Credentials {
        Credentials {
            email: "ada@example.com".to_string(),
            password: "analytical".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_sets_session_cookie_for_later_calls() {
        let (base, _) = spawn_backend().await;
        let (client, seen) = recording_client(&base);
        assert!(client.base_url().ends_with("/api"));

        let response = client.login(&ada()).await.unwrap();
        assert_eq!(AuthUser::from(response.user).name, "Ada Lovelace");

        // The cookie from login is sent back automatically
        assert!(client.list_books().await.unwrap().is_empty());
        assert_eq!(client.refresh().await.unwrap().user.id, "u-1");
        client.logout().await.unwrap();
        assert!(seen.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failed_login_reports_unauthorized_to_hook_and_caller() {
        let (base, _) = spawn_backend().await;
        let (client, seen) = recording_client(&base);

        let err = client
            .login(&Credentials {
                email: "ada@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert_eq!(*seen.borrow(), vec![Fault::Unauthorized]);
    }

    #[tokio::test]
    async fn test_calls_without_session_are_unauthorized() {
        let (base, _) = spawn_backend().await;
        let (client, seen) = recording_client(&base);

        assert!(client.list_books().await.unwrap_err().is_unauthorized());
        assert!(client.refresh().await.unwrap_err().is_unauthorized());
        assert_eq!(*seen.borrow(), vec![Fault::Unauthorized, Fault::Unauthorized]);
    }

    #[tokio::test]
    async fn test_register_joins_validation_messages() {
        let (base, _) = spawn_backend().await;
        let client = ApiClient::new(&base);

        let err = client
            .register(&Registration {
                email: "taken@example.com".to_string(),
                password: "pw".to_string(),
                first_name: "T".to_string(),
                last_name: "K".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "email already registered, choose another");

        let response = client
            .register(&Registration {
                email: "grace@example.com".to_string(),
                password: "cobol".to_string(),
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.user.first_name, "Grace");
        // Registration signs the user in
        assert!(client.list_books().await.is_ok());
    }

    #[tokio::test]
    async fn test_book_crud() {
        let (base, shelf) = spawn_backend().await;
        let client = ApiClient::new(&base);
        client.login(&ada()).await.unwrap();

        let created = client.add_book(&Book::new("Emma", "Jane Austen")).await.unwrap();
        let id = created.id.clone().unwrap();
        assert_eq!(client.get_book(&id).await.unwrap().title, "Emma");

        let mut edited = created.clone();
        edited.categories = vec!["Classic".to_string()];
        client.update_book(&id, &edited).await.unwrap();
        assert_eq!(shelf.lock().unwrap()[0].categories, vec!["Classic"]);

        client.delete_book(&id).await.unwrap();
        assert!(client.list_books().await.unwrap().is_empty());

        let err = client.get_book(&id).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.server_message(), Some("Book not found"));
    }

    #[tokio::test]
    async fn test_add_by_isbn() {
        let (base, shelf) = spawn_backend().await;
        let (client, seen) = recording_client(&base);

        let book = client.add_book_by_isbn("9780441172719").await.unwrap();
        assert_eq!(book.title, "Dune");
        assert!(book.is_persisted());
        assert_eq!(shelf.lock().unwrap().len(), 1);

        // The ISBN is a single path segment even when it contains a slash
        let err = client.add_book_by_isbn("12/34").await.unwrap_err();
        assert_eq!(err.server_message(), Some("No book for 12/34"));
        assert_eq!(*seen.borrow(), vec![Fault::Other]);
    }

    #[tokio::test]
    async fn test_server_and_forbidden_faults() {
        let (base, _) = spawn_backend().await;
        let (client, seen) = recording_client(&base);

        assert_eq!(client.add_book_by_isbn("boom").await.unwrap_err().status(), Some(500));
        assert_eq!(client.add_book_by_isbn("secret").await.unwrap_err().status(), Some(403));
        assert_eq!(*seen.borrow(), vec![Fault::Server, Fault::Forbidden]);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_fault() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let (client, seen) = recording_client(&format!("http://{addr}/api"));
        let err = client.list_books().await.unwrap_err();
        assert_eq!(err.status(), Some(0));
        assert_eq!(*seen.borrow(), vec![Fault::Network]);
    }

    #[tokio::test]
    async fn test_undecodable_body() {
        let (base, _) = spawn_backend().await;
        let client = ApiClient::new(&base);
        let req = client.request(Method::GET, &["broken"]).unwrap();
        let err = client.send::<Vec<Book>>(req).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_invalid_base_url() {
        let (client, seen) = recording_client("not a url");
        let err = client.endpoint(&["books"]).unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));
        assert!(seen.borrow().is_empty());

        assert!(client.request(Method::GET, &["books"]).is_err());
        assert_eq!(*seen.borrow(), vec![Fault::Other]);
    }

    #[test]
    fn test_without_fault_hook_keeps_base() {
        let (client, _) = recording_client("http://localhost:3000/api");
        let plain = client.without_fault_hook();
        assert_eq!(plain, client);
        assert!(format!("{plain:?}").contains("fault_hook: false"));
    }
}
