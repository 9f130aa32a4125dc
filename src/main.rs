use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use storefront::{app, cli, client, config, display, error, file_store};
use storefront_common::FetchStatus;
use app::Storefront;
use cli::{Cli, Commands, FavoritesAction};
use client::CatalogClient;
use config::Config;
use error::{Result, StorefrontError};
use file_store::FileStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("✖ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }

    match cli.command {
        Commands::List { search, category, sort } => {
            let mut app = open_app(&config)?;

            let spinner = spinner("商品を読み込み中...");
            let status = app.refresh_products().await;
            // カテゴリ取得の失敗は一覧表示を止めない
            if let Err(e) = app.load_categories().await {
                tracing::warn!(error = %e, "failed to load categories");
            }
            spinner.finish_and_clear();

            if status == FetchStatus::Failed {
                let message = app
                    .products
                    .error
                    .clone()
                    .unwrap_or_else(|| "Failed to load products".to_string());
                return Err(StorefrontError::LoadFailed(message));
            }

            app.filters.set_search_query(search);
            app.filters.set_category(category);
            app.filters.set_sort_by(sort);
            if !app.filters.category_is_known() {
                eprintln!("⚠ 不明なカテゴリ: {}", app.filters.category);
            }

            let visible = app.visible_products();
            print!(
                "{}",
                display::listing(&visible, app.summary(), |id| app.favorites.is_favorite(id))
            );
        }

        Commands::Show { id, quantity } => {
            let mut app = open_app(&config)?;

            let spinner = spinner("商品を読み込み中...");
            let status = app.open_product(id).await;
            spinner.finish_and_clear();

            if status == FetchStatus::Failed {
                let message = app
                    .products
                    .detail_error
                    .clone()
                    .unwrap_or_else(|| "Product not found".to_string());
                return Err(StorefrontError::Unavailable(message));
            }

            if let Some(product) = &app.products.selected {
                let is_favorite = app.favorites.is_favorite(product.id);
                print!("{}", display::product_detail(product, quantity, is_favorite));
            }
            app.close_product();
        }

        Commands::Categories => {
            let mut app = open_app(&config)?;

            let spinner = spinner("カテゴリを読み込み中...");
            let result = app.load_categories().await;
            spinner.finish_and_clear();
            result?;

            println!("all");
            for name in &app.filters.known_categories {
                println!("{}", name);
            }
        }

        Commands::Favorites { action } => {
            let mut app = open_app(&config)?;

            match action.unwrap_or(FavoritesAction::List) {
                FavoritesAction::List => {
                    if app.favorites.is_empty() {
                        println!("お気に入りはまだありません。`storefront list` で商品を探してください。");
                    } else {
                        println!("{}\n", display::favorites_header(&app.favorites));
                        for product in app.favorites.list() {
                            println!("{}", display::product_line(product, true));
                        }
                    }
                }

                FavoritesAction::Add { id } => {
                    let spinner = spinner("商品を確認中...");
                    let result = app.add_favorite_by_id(id).await;
                    spinner.finish_and_clear();

                    if result? {
                        println!("✔ お気に入りに追加しました: #{}", id);
                    } else {
                        println!("既にお気に入りです: #{}", id);
                    }
                }

                FavoritesAction::Remove { id } => {
                    let removed = app.favorites.remove(id)?;
                    println!("{}", display::removal_notice(id, removed));
                }

                FavoritesAction::Clear { yes } => {
                    if app.favorites.is_empty() {
                        println!("お気に入りは空です");
                        return Ok(());
                    }

                    let confirmed = yes
                        || dialoguer::Confirm::new()
                            .with_prompt(format!("{}件のお気に入りを削除しますか？", app.favorites.len()))
                            .default(false)
                            .interact()
                            .map_err(|e| StorefrontError::Prompt(e.to_string()))?;

                    if confirmed {
                        app.favorites.clear()?;
                        println!("✔ お気に入りを削除しました");
                    }
                }
            }
        }

        Commands::Config { set_base_url, show } => {
            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ ベースURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  ベースURL: {}", config.base_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  データ: {}", config.data_dir()?.display());
            }
        }
    }

    Ok(())
}

fn open_app(config: &Config) -> Result<Storefront<CatalogClient, FileStore>> {
    let client = CatalogClient::from_config(config)?;
    let storage = FileStore::new(config.data_dir()?);
    Ok(Storefront::new(client, storage))
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
