//! Command line
//!
//! Every command returns [`AppResult`]; the binary prints
//! [`AppError::user_message`](crate::AppError::user_message) on failure.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use lunchbox_client::{Api, HttpClient};
use shared::format_gbp;
use shared::models::{EarningsQuery, EarningsStyle, OrderFilter, RestaurantFilter};

use crate::core::{AppError, AppResult, Config};
use crate::delivery::DeliveryWindow;
use crate::forms::{ContactForm, SubmitGuard};
use crate::receipt::render_receipt;
use crate::report::write_monthly_report;
use crate::utils::ImagePolicy;

#[derive(Debug, Parser)]
#[command(name = "lunchbox", about = "Corporate food ordering")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search restaurants
    Restaurants {
        search: Option<String>,
        #[arg(long)]
        cuisine: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show a restaurant's menu
    Menu { restaurant_id: String },
    /// Show the next delivery day and whether ordering is open
    Cutoff,
    /// List my orders
    Orders,
    /// Show the wallet balance
    Balance,
    /// Export the monthly report as CSV
    Report {
        year: i32,
        month: u32,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Render the earnings receipt as HTML
    Receipt {
        #[arg(value_enum)]
        style: StyleArg,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Send a message to the support team
    Contact {
        name: String,
        email: String,
        message: String,
        #[arg(long)]
        company: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StyleArg {
    MenuItem,
    ByOrder,
}

impl From<StyleArg> for EarningsStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::MenuItem => EarningsStyle::MenuItem,
            StyleArg::ByOrder => EarningsStyle::ByOrder,
        }
    }
}

/// Run one command against the backend
pub async fn run<C: HttpClient>(command: Commands, config: &Config, api: &Api<C>) -> AppResult<()> {
    match command {
        Commands::Restaurants { search, cuisine, page } => {
            let mut filter = RestaurantFilter::default().paginate(page, 20);
            filter.search = search;
            filter.cuisine = cuisine;
            let result = api.list_restaurants(&filter).await?;
            for r in &result.data {
                let rating = r.rating.map(|v| format!("{v:.1}")).unwrap_or_else(|| "-".into());
                let open = if r.is_open { "open" } else { "closed" };
                println!("{:<24} {:<30} {:>4}  {}", r.id, r.name, rating, open);
            }
            println!("page {} of {} ({} restaurants)", result.page, result.total_pages, result.total);
        }
        Commands::Menu { restaurant_id } => {
            let images = ImagePolicy::from_patterns(&config.image_remote_patterns);
            for item in api.get_menu(&restaurant_id).await? {
                let image = images.resolve(item.image.as_deref()).unwrap_or("-");
                let availability = if item.is_available { "" } else { " (unavailable)" };
                println!(
                    "{:<30} {:>9}{}  {}",
                    item.name,
                    format_gbp(item.effective_price()),
                    availability,
                    image
                );
                for addon in &item.addons {
                    let names: Vec<String> = addon
                        .options
                        .iter()
                        .map(|o| format!("{} +{}", o.name, format_gbp(o.price)))
                        .collect();
                    println!("    {}: {}", addon.title, names.join(", "));
                }
            }
        }
        Commands::Cutoff => {
            let window = DeliveryWindow::for_now(&Local::now(), config.order_cutoff);
            println!("Next delivery: {}", window.delivery_label());
            println!("Ordering closes: {}", window.cutoff_at.format("%a %-d %b %H:%M"));
            println!("Ordering is {}", if window.is_open { "open" } else { "closed" });
        }
        Commands::Orders => {
            let orders = api.my_orders(&OrderFilter::default()).await?;
            for o in &orders.data {
                println!(
                    "{:<14} {:<18} {:>10}  {}",
                    o.order_number.as_deref().unwrap_or(&o.id),
                    format!("{:?}", o.status),
                    format_gbp(o.customer_total),
                    o.delivery_date.map(|d| d.to_string()).unwrap_or_default()
                );
            }
        }
        Commands::Balance => {
            let balance = api.wallet_balance().await?;
            println!("Balance:   {}", format_gbp(balance.balance));
            println!("Pending:   {}", format_gbp(balance.pending));
            println!("Available: {}", format_gbp(balance.available()));
        }
        Commands::Report { year, month, out } => {
            if !(1..=12).contains(&month) {
                return Err(AppError::validation("month", "Month must be between 1 and 12"));
            }
            let report = api.monthly_report(year, month).await?;
            let path = write_monthly_report(&out, &report)?;
            println!("{}", path.display());
        }
        Commands::Receipt { style, from, to, out } => {
            let query = EarningsQuery {
                style: style.into(),
                from,
                to,
            };
            let html = render_receipt(&api.earnings_summary(&query).await?);
            match out {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    println!("{}", path.display());
                }
                None => print!("{html}"),
            }
        }
        Commands::Contact { name, email, message, company } => {
            let form = ContactForm {
                name,
                email,
                company: company.unwrap_or_default(),
                message,
            };
            form.submit(api, &SubmitGuard::new()).await?;
            println!("Thanks, we'll be in touch.");
        }
    }

    Ok(())
}
