use clap::{Parser, Subcommand};
use storefront_common::SortBy;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "商品カタログの閲覧とお気に入り管理", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カタログAPIのベースURL（設定ファイルより優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 商品一覧を表示
    List {
        /// タイトルで検索（大文字小文字を区別しない）
        #[arg(short, long, default_value = "")]
        search: String,

        /// カテゴリで絞り込み
        #[arg(short, long, default_value = "all")]
        category: String,

        /// 並び順 (default/price-low-high/price-high-low/title-asc)
        #[arg(long, default_value = "default")]
        sort: SortBy,
    },

    /// 商品詳細を表示
    Show {
        /// 商品ID
        #[arg(required = true)]
        id: u64,

        /// 数量
        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },

    /// カテゴリ一覧を表示
    Categories,

    /// お気に入り管理
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },

    /// 設定を表示/編集
    Config {
        /// ベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum FavoritesAction {
    /// お気に入りを表示
    List,

    /// お気に入りに追加
    Add {
        #[arg(required = true)]
        id: u64,
    },

    /// お気に入りから削除
    Remove {
        #[arg(required = true)]
        id: u64,
    },

    /// お気に入りを全件削除
    Clear {
        /// 確認なしで削除
        #[arg(short, long)]
        yes: bool,
    },
}
