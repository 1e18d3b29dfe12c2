// File: services/noor_app/src/main.rs
mod app_state;
mod report;

use app_state::AppContext;
use chrono::{NaiveDate, Utc};
use noor_calendar::{iso_week_number, to_hijri_adjusted, CalendarMonth};
use noor_common::{config_error, logging, validation_error, Context, NoorError};
use noor_config::load_config;
use noor_store::AdhkarPeriod;
use tracing::info;

const USAGE: &str = concat!(
    "usage: noor-app [today | calendar [YYYY-MM-DD] | prayers [YYYY-MM-DD] ",
    "| adhkar morning|evening | profile]"
);

enum Command {
    Today,
    Calendar(Option<NaiveDate>),
    Prayers(Option<NaiveDate>),
    Adhkar(AdhkarPeriod),
    Profile,
}

fn parse_date(arg: Option<&String>) -> Result<Option<NaiveDate>, NoorError> {
    arg.map(|s| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| validation_error(format!("date '{s}': {e}")))
    })
    .transpose()
}

fn parse_command(args: &[String]) -> Result<Command, NoorError> {
    match args.first().map(String::as_str) {
        None | Some("today") => Ok(Command::Today),
        Some("calendar") => Ok(Command::Calendar(parse_date(args.get(1))?)),
        Some("prayers") => Ok(Command::Prayers(parse_date(args.get(1))?)),
        Some("adhkar") => match args.get(1).map(String::as_str) {
            Some("evening") => Ok(Command::Adhkar(AdhkarPeriod::Evening)),
            Some("morning") | None => Ok(Command::Adhkar(AdhkarPeriod::Morning)),
            Some(other) => Err(validation_error(format!("unknown period '{other}'"))),
        },
        Some("profile") => Ok(Command::Profile),
        Some(other) => Err(validation_error(format!("unknown command '{other}'\n{USAGE}"))),
    }
}

fn print_prayers(ctx: &AppContext) -> Result<(), NoorError> {
    let daily = ctx
        .prayer_times()
        .context("Failed to compute prayer times")?;
    let locale = ctx.locale();
    let next = daily
        .next_prayer(Utc::now())
        .map(|prayer| prayer.name(locale));
    print!(
        "{}",
        report::render_prayers(&daily.display_rows(ctx.timezone, locale), next)
    );
    Ok(())
}

fn print_today(ctx: &AppContext) -> Result<(), NoorError> {
    let today = ctx.today();
    let locale = ctx.locale();
    let hijri = to_hijri_adjusted(today, ctx.hijri_adjustment_days);

    println!("{}", today.format("%Y-%m-%d"));
    println!("{}", hijri.format(locale));
    println!(
        "{}",
        locale.localize_digits(&format!("ISO week {}", iso_week_number(today)))
    );
    println!();
    print_prayers(ctx)
}

#[cfg(feature = "remote")]
async fn print_profile(ctx: &AppContext) -> Result<(), NoorError> {
    let api = ctx
        .api
        .as_ref()
        .ok_or_else(|| config_error("api.base_url is not set"))?;
    let user = api.fetch_profile().await?;
    println!("{} <{}>", user.name.as_deref().unwrap_or("-"), user.email);
    Ok(())
}

#[cfg(not(feature = "remote"))]
async fn print_profile(_ctx: &AppContext) -> Result<(), NoorError> {
    Err(config_error("built without the `remote` feature"))
}

async fn run() -> Result<(), NoorError> {
    let config = load_config().map_err(config_error)?;
    logging::init_with_level(logging::parse_level(&config.app.log_level));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_command(&args)?;

    let ctx = AppContext::from_config(config)?;
    ctx.hydrate().await;
    info!(locale = %ctx.locale(), "Noor ready");

    match command {
        Command::Today => print_today(&ctx),
        Command::Calendar(date) => {
            let date = date.unwrap_or_else(|| ctx.today());
            let month = CalendarMonth::for_date(date, ctx.hijri_adjustment_days);
            print!(
                "{}",
                report::render_calendar(&month, ctx.today(), ctx.locale())
            );
            Ok(())
        }
        Command::Prayers(date) => {
            match date {
                Some(date) => ctx.prayer_query.set_date(date),
                None => ctx.prayer_query.reset_to_today(&ctx.timezone),
            }
            print_prayers(&ctx)
        }
        Command::Adhkar(period) => {
            let items = ctx.adhkar.for_period(period);
            print!("{}", report::render_adhkar(&items, ctx.locale()));
            Ok(())
        }
        Command::Profile => print_profile(&ctx).await,
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        logging::log_error(&e, "noor-app");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
