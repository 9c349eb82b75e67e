//! Errors surfaced while loading content.

use thiserror::Error;

/// Why blog content could not be produced.
#[derive(Debug, Error)]
pub enum ContentError {
	/// The server answered, but not with the file.
	#[error("not found: {path}")]
	NotFound {
		/// Requested path.
		path: String,
	},

	/// The request itself failed (offline, CORS, no window).
	#[error("fetch failed for {path}: {reason}")]
	Fetch {
		/// Requested path.
		path: String,
		/// Browser-provided reason.
		reason: String,
	},

	/// The manifest is not the expected JSON document.
	#[error("invalid manifest: {0}")]
	Manifest(#[from] serde_json::Error),

	/// A post file lacks its frontmatter block or carries unusable metadata.
	#[error("malformed post {path}: {reason}")]
	Malformed {
		/// Post file name.
		path: String,
		/// What is wrong with it.
		reason: String,
	},
}

impl ContentError {
	/// Attaches the post file name to a malformed-post error.
	pub fn at(self, file: &str) -> Self {
		match self {
			Self::Malformed { reason, .. } => Self::Malformed {
				path: file.to_string(),
				reason,
			},
			other => other,
		}
	}

	/// Short message for the empty-state UI.
	pub fn user_message(&self) -> &'static str {
		match self {
			Self::NotFound { .. } | Self::Fetch { .. } => "The blog could not be reached.",
			Self::Manifest(_) | Self::Malformed { .. } => "The blog content is unreadable.",
		}
	}
}

/// Result alias for content loading.
pub type ContentResult<T> = Result<T, ContentError>;
