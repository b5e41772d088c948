//! xray quota - today's API budget.

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct QuotaArgs {}

pub fn run(ctx: &AppContext, _args: &QuotaArgs) -> Result<()> {
    let status = ctx.ledger().status();

    if ctx.robot_mode {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "date": ctx.clock().today(),
            "quota": status,
            "data_dir": ctx.data_dir,
        }));
    }

    let remaining = if status.is_exhausted() {
        status.remaining.to_string().red().bold().to_string()
    } else {
        status.remaining.to_string().green().to_string()
    };
    let mut layout = HumanLayout::new();
    layout
        .section("API Quota")
        .kv("Used today", &format!("{}/{}", status.used, status.limit))
        .kv("Remaining", &remaining)
        .kv("Data dir", &ctx.data_dir.display().to_string());
    emit_human(layout);
    Ok(())
}
