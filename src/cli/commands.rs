//! CLI command handlers

use std::sync::Arc;

use colored::Colorize;

use crate::errors::Result;
use crate::models::LinkRecord;
use crate::services::{
    AnalyticsService, ClickContext, LinkFilter, LinkService, LinkSort, RedirectService,
    Resolution, ShortenRequest,
};
use crate::store::LinkStore;
use crate::utils::clock::Clock;

/// How many trailing click events `list` shows per link
const CLICK_TAIL_LEN: usize = 5;

pub fn shorten(
    store: &mut LinkStore,
    clock: Arc<dyn Clock>,
    url: String,
    expires: i64,
    alias: Option<String>,
    slot: String,
) -> Result<()> {
    let service = LinkService::new(clock);
    let result = service.create_link(
        store,
        ShortenRequest {
            original_url: url,
            expiration_minutes: expires,
            custom_alias: alias,
            created_by: slot,
        },
    )?;

    let link = &result.link;
    println!(
        "{} /{} -> {}",
        "Short link created:".green().bold(),
        link.short_code.cyan(),
        link.original_url
    );
    println!(
        "  expires at {} ({})",
        link.expires_at.to_rfc3339(),
        if result.generated_code {
            "generated code"
        } else {
            "custom alias"
        }
    );

    Ok(())
}

pub fn resolve(
    store: &mut LinkStore,
    clock: Arc<dyn Clock>,
    path: &str,
    agent: String,
    referrer: Option<String>,
) -> Result<()> {
    let service = RedirectService::new(clock);
    let ctx = ClickContext {
        client_agent: agent,
        referrer,
    };

    match service.resolve(store, path, &ctx)? {
        Resolution::PassThrough => {
            println!("'{}' is an app view, nothing to resolve", path);
        }
        Resolution::NotFound => {
            println!("{}", "Short link not found!".red().bold());
            println!("returning to root view /");
        }
        Resolution::Expired => {
            println!("{}", "This short link has expired!".yellow().bold());
            println!("returning to root view /");
        }
        Resolution::Redirect { original_url } => {
            println!("{} {}", "Location:".green().bold(), original_url);
        }
    }

    Ok(())
}

pub fn list(
    store: &LinkStore,
    clock: Arc<dyn Clock>,
    filter: LinkFilter,
    sort: LinkSort,
) -> Result<()> {
    let service = AnalyticsService::new(clock.clone());
    let records = service.filtered_sorted(store, filter, sort);

    if records.is_empty() {
        if store.is_empty() {
            println!("No links created yet. Use 'snaplink shorten' to create one.");
        } else {
            println!("No links match the current filter.");
        }
        return Ok(());
    }

    let now = clock.now();
    for record in &records {
        print_record(record, record.is_expired(now));
    }

    Ok(())
}

fn print_record(record: &LinkRecord, expired: bool) {
    let badge = if expired {
        "EXPIRED".red().bold()
    } else {
        "ACTIVE".green().bold()
    };

    println!("/{} [{}]", record.short_code.cyan().bold(), badge);
    println!("  original:   {}", record.original_url);
    println!("  created:    {}", record.created_at.to_rfc3339());
    println!("  expires:    {}", record.expires_at.to_rfc3339());
    println!("  clicks:     {}", record.click_count);
    println!("  created by: {}", record.created_by);

    if !record.click_history.is_empty() {
        println!("  click history:");
        let tail_start = record.click_history.len().saturating_sub(CLICK_TAIL_LEN);
        for click in &record.click_history[tail_start..] {
            println!(
                "    {} | {} | {}",
                click.timestamp.to_rfc3339(),
                click.client_agent,
                click.referrer
            );
        }
        if record.click_history.len() > CLICK_TAIL_LEN {
            println!(
                "    ... and {} more clicks",
                record.click_history.len() - CLICK_TAIL_LEN
            );
        }
    }
}

pub fn stats(store: &LinkStore, clock: Arc<dyn Clock>) -> Result<()> {
    let service = AnalyticsService::new(clock);
    let summary = service.summary(store);

    println!("{}", "Link statistics".bold());
    println!("  total links:  {}", summary.total_links);
    println!("  active links: {}", summary.active_links);
    println!("  total clicks: {}", summary.total_clicks);
    println!("  avg clicks:   {}", summary.average_clicks);

    Ok(())
}
