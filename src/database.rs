use std::mem;

use sqlx::postgres::PgPoolOptions;
use sqlx::{postgres::PgPool, Postgres, Transaction};

use crate::config::Config;

pub struct DatabaseExecutor {
	pool: PgPool,
	transaction: Option<Transaction<'static, Postgres>>,
}

impl DatabaseExecutor {
	pub fn new(pool: PgPool) -> Self {
		Self { pool, transaction: None }
	}

	pub fn transaction(&mut self) -> Result<&mut Transaction<'static, Postgres>, sqlx::Error> {
		self.transaction
			.as_mut()
			.ok_or_else(|| sqlx::Error::Protocol("Transaction Has Not Begun!".into()))
	}

	pub(crate) async fn begin(&mut self) -> Result<(), sqlx::Error> {
		if self.transaction.is_some() {
			tracing::warn!("Transaction Begun Already!");
			return Ok(());
		}
		self.transaction = Some(self.pool.begin().await?);
		Ok(())
	}

	pub(crate) async fn commit(&mut self) -> Result<(), sqlx::Error> {
		match mem::take(&mut self.transaction) {
			Some(trx) => trx.commit().await.map_err(|err| {
				tracing::error!("Error occurred during commit operation : {:?}", err);
				err
			}),
			None => Ok(()),
		}
	}

	pub(crate) async fn rollback(&mut self) -> Result<(), sqlx::Error> {
		match mem::take(&mut self.transaction) {
			Some(trx) => trx.rollback().await,
			None => Ok(()),
		}
	}
}

/// Connects to `url` and applies pending migrations.
pub async fn connection_pool(
	url: &str,
	config: &Config,
) -> Result<PgPool, sqlx::Error> {
	let pool = PgPoolOptions::new().max_connections(config.max_connections).connect(url).await?;
	sqlx::migrate!("./migrations").run(&pool).await?;
	Ok(pool)
}
