use board::client::{BoardApi, ClientApp, DEFAULT_API_URL};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn render(app: &ClientApp) {
	println!("--- messages ---");
	for message in app.messages() {
		println!("[{}] {}", message.created_at.format("%Y-%m-%d %H:%M:%S"), message.content);
	}
	if !app.error().is_empty() {
		println!("! {}", app.error());
	}
	println!("> type a message and press enter (ctrl-d to quit)");
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
	dotenv::dotenv().ok();
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let base_url = std::env::var("BOARD_API_URL").unwrap_or(DEFAULT_API_URL.to_string());
	let mut app = ClientApp::start(BoardApi::new(&base_url)).await;
	render(&app);

	let mut lines = BufReader::new(tokio::io::stdin()).lines();
	while let Some(line) = lines.next_line().await? {
		app.set_new_message(line);
		app.submit().await;
		render(&app);
	}
	Ok(())
}
