use crate::domain::message::Message;

use super::api::BoardApi;

/// Client-side view of the board.
pub struct ClientApp {
	api: BoardApi,
	messages: Vec<Message>,
	new_message: String,
	error: String,
}

impl ClientApp {
	/// Creates the app and performs the initial load.
	pub async fn start(api: BoardApi) -> Self {
		let mut app = Self {
			api,
			messages: Vec::new(),
			new_message: String::new(),
			error: String::new(),
		};
		app.fetch_messages().await;
		app
	}

	pub fn messages(&self) -> &[Message] {
		&self.messages
	}

	pub fn new_message(&self) -> &str {
		&self.new_message
	}

	/// Last error, empty if none occurred yet. A later success does not clear it.
	pub fn error(&self) -> &str {
		&self.error
	}

	pub fn set_new_message(
		&mut self,
		text: impl Into<String>,
	) {
		self.new_message = text.into();
	}

	pub async fn fetch_messages(&mut self) {
		match self.api.list().await {
			Ok(messages) => self.messages = messages,
			Err(err) => {
				tracing::warn!("Fetching messages failed: {}", err);
				self.error = err.to_string();
			}
		}
	}

	pub async fn submit(&mut self) {
		if self.new_message.trim().is_empty() {
			return;
		}

		match self.api.create(&self.new_message).await {
			Ok(_) => {
				self.new_message.clear();
				self.fetch_messages().await;
			}
			Err(err) => {
				tracing::warn!("Posting message failed: {}", err);
				self.error = err.to_string();
			}
		}
	}
}

#[cfg(test)]
mod test {
	use httpmock::Method::{GET, POST};
	use httpmock::MockServer;
	use serde_json::json;

	use super::*;
	use crate::client::ClientError;

	fn stored(
		id: i64,
		content: &str,
	) -> serde_json::Value {
		json!({"id": id, "content": content, "created_at": "2025-06-01T12:00:00Z"})
	}

	#[tokio::test]
	async fn test_start_fetches_messages_once() {
		let server = MockServer::start_async().await;
		let list = server
			.mock_async(|when, then| {
				when.method(GET).path("/messages");
				then.status(200).json_body(json!([stored(2, "B"), stored(1, "A")]));
			})
			.await;

		let app = ClientApp::start(BoardApi::new(&server.base_url())).await;

		list.assert_calls(1);
		let contents: Vec<_> = app.messages().iter().map(|m| m.content.as_str()).collect();
		assert_eq!(contents, vec!["B", "A"]);
		assert_eq!(app.error(), "");
	}

	#[tokio::test]
	async fn test_whitespace_submit_is_a_no_op() {
		let server = MockServer::start_async().await;
		let list = server
			.mock_async(|when, then| {
				when.method(GET).path("/messages");
				then.status(200).json_body(json!([stored(1, "A")]));
			})
			.await;
		let create = server
			.mock_async(|when, then| {
				when.method(POST).path("/messages");
				then.status(201).json_body(stored(2, "B"));
			})
			.await;

		let mut app = ClientApp::start(BoardApi::new(&server.base_url())).await;
		for input in ["", "   ", "\t\n"] {
			app.set_new_message(input);
			app.submit().await;
		}

		create.assert_calls(0);
		list.assert_calls(1);
		assert_eq!(app.messages().len(), 1);
	}

	#[tokio::test]
	async fn test_successful_submit_clears_input_and_refreshes() {
		let server = MockServer::start_async().await;
		let list = server
			.mock_async(|when, then| {
				when.method(GET).path("/messages");
				then.status(200).json_body(json!([stored(1, "HELLO")]));
			})
			.await;
		let create = server
			.mock_async(|when, then| {
				when.method(POST).path("/messages").json_body(json!({"message": "hello"}));
				then.status(201).json_body(stored(1, "HELLO"));
			})
			.await;

		let mut app = ClientApp::start(BoardApi::new(&server.base_url())).await;
		list.assert_calls(1);

		app.set_new_message("hello");
		app.submit().await;

		create.assert_calls(1);
		list.assert_calls(2);
		assert_eq!(app.new_message(), "");
		assert_eq!(app.messages().len(), 1);
		assert_eq!(app.messages()[0].content, "HELLO");
		assert_eq!(app.error(), "");
	}

	#[tokio::test]
	async fn test_created_status_counts_as_success_regardless_of_body() {
		let server = MockServer::start_async().await;
		let list = server
			.mock_async(|when, then| {
				when.method(GET).path("/messages");
				then.status(200).json_body(json!([stored(1, "HELLO")]));
			})
			.await;
		let create = server
			.mock_async(|when, then| {
				when.method(POST).path("/messages");
				then.status(201);
			})
			.await;

		let mut app = ClientApp::start(BoardApi::new(&server.base_url())).await;
		app.set_new_message("hello");
		app.submit().await;

		create.assert_calls(1);
		list.assert_calls(2);
		assert_eq!(app.new_message(), "");
		assert_eq!(app.error(), "");
		assert_eq!(app.messages()[0].content, "HELLO");
	}

	#[tokio::test]
	async fn test_failed_submit_keeps_input_and_sets_error() {
		let server = MockServer::start_async().await;
		server
			.mock_async(|when, then| {
				when.method(GET).path("/messages");
				then.status(200).json_body(json!([]));
			})
			.await;
		server
			.mock_async(|when, then| {
				when.method(POST).path("/messages");
				then.status(502).json_body(json!({"error": "transform service answered with status 500"}));
			})
			.await;

		let mut app = ClientApp::start(BoardApi::new(&server.base_url())).await;
		app.set_new_message("hello");
		app.submit().await;

		assert_eq!(app.new_message(), "hello");
		assert_eq!(app.error(), ClientError::PostFailed.to_string());
		assert!(app.messages().is_empty());
	}

	#[tokio::test]
	async fn test_failed_fetch_sets_error() {
		let server = MockServer::start_async().await;
		server
			.mock_async(|when, then| {
				when.method(GET).path("/messages");
				then.status(500);
			})
			.await;

		let app = ClientApp::start(BoardApi::new(&format!("{}/", server.base_url()))).await;

		assert_eq!(app.error(), ClientError::FetchFailed.to_string());
		assert!(app.messages().is_empty());
	}

	#[tokio::test]
	async fn test_unreachable_gateway_sets_error_and_keeps_messages() {
		let server = MockServer::start_async().await;
		server
			.mock_async(|when, then| {
				when.method(GET).path("/messages");
				then.status(200).json_body(json!([stored(1, "A")]));
			})
			.await;
		let mut app = ClientApp::start(BoardApi::new(&server.base_url())).await;
		assert_eq!(app.messages().len(), 1);

		let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
		let closed = format!("http://{}", listener.local_addr().unwrap());
		drop(listener);
		app.api = BoardApi::new(&closed);

		app.fetch_messages().await;
		assert!(app.error().starts_with("network error"));
		assert_eq!(app.messages().len(), 1);
		assert_eq!(app.messages()[0].content, "A");

		app.set_new_message("hello");
		app.submit().await;
		assert!(app.error().starts_with("network error"));
		assert_eq!(app.new_message(), "hello");
		assert_eq!(app.messages().len(), 1);
	}
}
