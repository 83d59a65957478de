//! RFC 9457 Problem Details value object and its builder.

use http::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ExtensionError;

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Default problem type per RFC 9457 §4.2.1: `about:blank` means the problem
/// carries no semantics beyond its HTTP status code.
pub const ABOUT_BLANK: &str = "about:blank";

/// The five base field names of RFC 9457. Extension members must not shadow
/// any of these.
const RESERVED_KEYS: [&str; 5] = ["type", "status", "title", "detail", "instance"];

/// RFC 9457 Problem Details for HTTP APIs.
///
/// An immutable error payload assembled through [`ProblemBuilder`] (or the
/// [`Problem::from_status`] shortcuts) and rendered with
/// [`Problem::to_json`](crate::Problem::to_json). The value exposes only
/// readers, so once built it never changes and can be read from multiple
/// threads without synchronization.
///
/// The `status` copy is informational: setting the actual HTTP response
/// status stays the caller's responsibility.
#[derive(Debug, Clone)]
#[must_use]
pub struct Problem {
    /// A URI reference that identifies the problem type. Never absent:
    /// defaults to [`ABOUT_BLANK`].
    type_url: String,
    /// The HTTP status code for this occurrence of the problem.
    status: Option<StatusCode>,
    /// A short, human-readable summary of the problem type.
    title: Option<String>,
    /// A human-readable explanation specific to this occurrence.
    detail: Option<String>,
    /// A URI reference that identifies the specific occurrence.
    instance: Option<String>,
    /// Extension members, kept in insertion order.
    extensions: Map<String, Value>,
}

impl Problem {
    /// Start assembling a problem field by field.
    ///
    /// # Example
    ///
    /// ```
    /// use http::StatusCode;
    /// use problem_details::Problem;
    ///
    /// let mut builder = Problem::builder();
    /// builder
    ///     .status(StatusCode::NOT_FOUND)
    ///     .title("Not Found")
    ///     .type_url("not-found", "https://api.example.org/problem");
    /// let problem = builder.build();
    ///
    /// assert_eq!(problem.type_url(), "https://api.example.org/problem/not-found");
    /// ```
    pub fn builder() -> ProblemBuilder {
        ProblemBuilder::new()
    }

    /// Create a problem from just an HTTP status code: `status` is the code,
    /// `title` its canonical reason phrase, and the type stays at
    /// [`ABOUT_BLANK`] (so this is not a full problem type, merely a
    /// status-only payload).
    ///
    /// Codes outside the IANA registry have no canonical reason phrase;
    /// `title` is left unset for them and the serializer omits it.
    pub fn from_status(status: StatusCode) -> Self {
        let mut builder = ProblemBuilder::new();
        builder.status(status);
        if let Some(reason) = status.canonical_reason() {
            builder.title(reason);
        }
        builder.build()
    }

    /// Create a problem with a status code, a problem type assembled from
    /// `base_url` and `problem_type` (see [`ProblemBuilder::type_url`]), and
    /// an optional occurrence detail.
    ///
    /// A `base_url` is recommended so the type dereferences to documentation,
    /// but an empty one is accepted and yields the relative `/{problem_type}`
    /// form.
    pub fn from_status_with_type(
        status: StatusCode,
        problem_type: &str,
        detail: Option<&str>,
        base_url: &str,
    ) -> Self {
        let mut builder = ProblemBuilder::new();
        builder.status(status);
        if let Some(reason) = status.canonical_reason() {
            builder.title(reason);
        }
        if let Some(detail) = detail {
            builder.detail(detail);
        }
        builder.type_url(problem_type, base_url);
        builder.build()
    }

    /// A URI reference identifying the problem type; [`ABOUT_BLANK`] when the
    /// builder never set one.
    #[must_use]
    pub fn type_url(&self) -> &str {
        &self.type_url
    }

    /// Copy of the HTTP status code, if one was attached.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Short, human-readable summary of the problem type.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Human-readable explanation specific to this occurrence.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// URI reference identifying this specific occurrence.
    #[must_use]
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    /// Extension members in the order they were added.
    #[must_use]
    pub fn extensions(&self) -> &Map<String, Value> {
        &self.extensions
    }
}

/// The empty `about:blank` problem.
impl Default for Problem {
    fn default() -> Self {
        ProblemBuilder::new().build()
    }
}

/// Equivalent to [`Problem::from_status`].
impl From<StatusCode> for Problem {
    fn from(status: StatusCode) -> Self {
        Problem::from_status(status)
    }
}

/// Mutable accumulator for [`Problem`] values.
///
/// The builder is non-consuming, in the style of `std::process::Command`:
/// setters take `&mut self` so a failed [`extension`](ProblemBuilder::extension)
/// call leaves the builder usable with its prior state intact, and
/// [`build`](ProblemBuilder::build) snapshots without destroying it. Every
/// setter overwrites the previous value for its field.
#[derive(Debug, Clone)]
#[must_use]
pub struct ProblemBuilder {
    type_url: String,
    status: Option<StatusCode>,
    title: Option<String>,
    detail: Option<String>,
    instance: Option<String>,
    extensions: Map<String, Value>,
}

impl ProblemBuilder {
    /// Create a builder for the empty [`ABOUT_BLANK`] problem.
    pub fn new() -> Self {
        Self {
            type_url: ABOUT_BLANK.to_owned(),
            status: None,
            title: None,
            detail: None,
            instance: None,
            extensions: Map::new(),
        }
    }

    /// Set the problem type to the literal concatenation
    /// `{base_url}/{path}`. No URI validation or normalization happens here:
    /// a trailing slash on `base_url` is kept, and an empty `base_url`
    /// produces the relative `/{path}` form.
    pub fn type_url(&mut self, path: &str, base_url: &str) -> &mut Self {
        self.type_url = format!("{base_url}/{path}");
        self
    }

    /// Set the HTTP status code copy.
    pub fn status(&mut self, status: StatusCode) -> &mut Self {
        self.status = Some(status);
        self
    }

    /// Set the short, human-readable summary of the problem type.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Set the explanation specific to this occurrence.
    pub fn detail(&mut self, detail: impl Into<String>) -> &mut Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the URI reference identifying this specific occurrence.
    pub fn instance(&mut self, instance: impl Into<String>) -> &mut Self {
        self.instance = Some(instance.into());
        self
    }

    /// Add a named extension member. The value may be any serializable shape:
    /// a primitive, a struct, or a sequence of either. Re-using a key
    /// overwrites the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ExtensionError::ReservedKey`] if `key` is one of the five
    /// base field names; the builder is left unchanged. Returns
    /// [`ExtensionError::Value`] with the encoder's own error if `value`
    /// cannot be converted to JSON.
    ///
    /// # Example
    ///
    /// ```
    /// use problem_details::Problem;
    ///
    /// let mut builder = Problem::builder();
    /// builder.extension("errors", vec!["name is required"])?;
    /// assert!(builder.extension("status", 400).is_err());
    /// # Ok::<(), problem_details::ExtensionError>(())
    /// ```
    pub fn extension<V: Serialize>(
        &mut self,
        key: impl Into<String>,
        value: V,
    ) -> Result<&mut Self, ExtensionError> {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            return Err(ExtensionError::ReservedKey(key));
        }
        let value = serde_json::to_value(value)?;
        self.extensions.insert(key, value);
        Ok(self)
    }

    /// Snapshot the current state into an immutable [`Problem`]. Pure and
    /// repeatable: the builder stays usable afterwards.
    pub fn build(&self) -> Problem {
        Problem {
            type_url: self.type_url.clone(),
            status: self.status,
            title: self.title.clone(),
            detail: self.detail.clone(),
            instance: self.instance.clone(),
            extensions: self.extensions.clone(),
        }
    }
}

impl Default for ProblemBuilder {
    fn default() -> Self {
        Self::new()
    }
}
