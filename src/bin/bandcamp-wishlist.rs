use bandcamp_wishlist::{print_wishlist, WishlistClient};
use clap::Parser;

/// Print a Bandcamp fan's wishlist item URLs, one per line
#[derive(Parser)]
#[command(
    name = "bandcamp-wishlist",
    about = "Print a Bandcamp fan's wishlist item URLs",
    long_about = None
)]
struct Cli {
    /// Show detailed debug information on stderr
    #[arg(long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let client = WishlistClient::new(Box::new(http_client::native::NativeClient::new()));
    let mut stdout = std::io::stdout().lock();

    match print_wishlist(&client, &mut stdout).await {
        Ok(summary) => {
            log::debug!(
                "Done: {} page items, {} API items, more_available: {}",
                summary.current_page_count,
                summary.next_page_count,
                summary.more_available
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
