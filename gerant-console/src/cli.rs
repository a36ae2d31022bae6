//! Command line definition

use clap::{Args, Parser, Subcommand};
use gerant_client::config::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_API_URL, ENV_TIMEOUT_SECS, parse_timeout,
};
use shared::{DishIngredient, RecordId, ReservationStatus};

#[derive(Debug, Parser)]
#[command(name = "gerant", version, about = "Restaurant manager console")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = ENV_API_URL, default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(
        long,
        env = ENV_TIMEOUT_SECS,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = parse_timeout,
        global = true
    )]
    pub timeout: u64,

    /// Log level or filter directive
    #[arg(long, env = "GERANT_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Health alerts used to tag dishes
    #[command(subcommand)]
    Alerts(AlertCommand),
    /// Menu dishes
    #[command(subcommand)]
    Dishes(DishCommand),
    /// Ingredient stock
    #[command(subcommand)]
    Stock(StockCommand),
    /// Promotions
    #[command(subcommand)]
    Promotions(PromotionCommand),
    /// Staff members
    #[command(subcommand)]
    Staff(StaffCommand),
    /// Reservations (read-only)
    #[command(subcommand)]
    Reservations(ReservationCommand),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive text filter
    #[arg(long, short)]
    pub search: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum AlertCommand {
    List(SearchArgs),
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
    },
    Delete { id: RecordId },
}

#[derive(Debug, Subcommand)]
pub enum DishCommand {
    List(SearchArgs),
    /// Dish details with its ingredients and health alerts
    Show { id: RecordId },
    Add(DishAddArgs),
    /// Change the menu price
    Price { id: RecordId, price: String },
    Delete { id: RecordId },
    AddIngredient {
        dish: RecordId,
        ingredient: RecordId,
        quantity: i64,
    },
    SetIngredient {
        dish: RecordId,
        ingredient: RecordId,
        quantity: i64,
    },
    RemoveIngredient { dish: RecordId, ingredient: RecordId },
}

#[derive(Debug, Args)]
pub struct DishAddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long)]
    pub price: String,
    #[arg(long, default_value = "")]
    pub calories: String,
    /// Defaults to "viande"
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub image: String,
    /// Creation date, today when omitted
    #[arg(long)]
    pub date: Option<String>,
    /// Ingredient line as `ID:QUANTITY`, repeatable
    #[arg(long = "ingredient", value_parser = parse_ingredient_line)]
    pub ingredients: Vec<DishIngredient>,
    /// Health alert id, repeatable
    #[arg(long = "alert")]
    pub health_alerts: Vec<RecordId>,
}

#[derive(Debug, Subcommand)]
pub enum StockCommand {
    List(SearchArgs),
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        quantity: String,
    },
    /// Set the stock level; non-digits are ignored ("12 kg" is 12)
    Set { id: RecordId, quantity: String },
    Delete { id: RecordId },
}

#[derive(Debug, Args)]
pub struct PromotionArgs {
    /// Discount text such as "15% Off"; 20% when it has no number
    #[arg(long, default_value = "")]
    pub discount: String,
    #[arg(long)]
    pub start: String,
    #[arg(long)]
    pub end: String,
}

#[derive(Debug, Subcommand)]
pub enum PromotionCommand {
    List(SearchArgs),
    /// Create a promotion and attach it to dishes
    Add {
        #[command(flatten)]
        promotion: PromotionArgs,
        /// Dish id, repeatable
        #[arg(long = "dish", required = true)]
        dishes: Vec<RecordId>,
    },
    Update {
        id: RecordId,
        #[command(flatten)]
        promotion: PromotionArgs,
    },
    Delete { id: RecordId },
}

#[derive(Debug, Subcommand)]
pub enum StaffCommand {
    List(SearchArgs),
    Add(StaffAddArgs),
    /// Assign a waiter to a table
    AssignTable { id: RecordId, table: RecordId },
    Delete { id: RecordId },
}

#[derive(Debug, Args)]
pub struct StaffAddArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub age: String,
    #[arg(long)]
    pub job_title: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    /// Initial password; read from the environment to keep it out of shell history
    #[arg(long, env = "GERANT_STAFF_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Table id, repeatable
    #[arg(long = "table")]
    pub tables: Vec<RecordId>,
}

#[derive(Debug, Subcommand)]
pub enum ReservationCommand {
    List {
        #[command(flatten)]
        search: SearchArgs,
        /// planned, imminent, today, active or completed
        #[arg(long, value_parser = parse_status)]
        status: Option<ReservationStatus>,
    },
    Show { id: RecordId },
}

fn parse_ingredient_line(raw: &str) -> Result<DishIngredient, String> {
    let (id, quantity) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected ID:QUANTITY, got {raw:?}"))?;
    let id = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid ingredient id {id:?}"))?;
    let quantity = quantity
        .trim()
        .parse()
        .map_err(|_| format!("invalid quantity {quantity:?}"))?;
    Ok(DishIngredient::new(id, quantity))
}

fn parse_status(raw: &str) -> Result<ReservationStatus, String> {
    ReservationStatus::from_label(raw).ok_or_else(|| format!("unknown status {raw:?}"))
}
