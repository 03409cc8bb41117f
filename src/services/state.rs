use std::sync::Arc;

use crate::adapters::{repositories::MessageRepository, transform::Transformer};

/// Collaborators shared by every request handler.
#[derive(Clone)]
pub struct BoardState {
	pub repository: Arc<dyn MessageRepository>,
	pub transformer: Arc<dyn Transformer>,
}

impl BoardState {
	pub fn new(
		repository: Arc<dyn MessageRepository>,
		transformer: Arc<dyn Transformer>,
	) -> Self {
		Self { repository, transformer }
	}
}
