//! xray template - pre-built boolean searches.

use clap::{Args, Subcommand};
use colored::Colorize;

use super::{PageArgs, SearchOptions, run_search};
use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::error::{Result, XrayError};
use crate::history::SearchMode;
use crate::query::catalog::Posted;
use crate::query::templates::{
    Placeholders, SearchTemplate, TemplateCategory, find_template, list_templates,
    render_template, templates_in,
};

#[derive(Args, Debug)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub command: TemplateCommand,
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommand {
    /// List available templates
    List(TemplateListArgs),
    /// Show a template's query and placeholders
    Show(TemplateShowArgs),
    /// Fill a template and run it
    Run(TemplateRunArgs),
}

#[derive(Args, Debug)]
pub struct TemplateListArgs {
    /// Only this category
    #[arg(long, value_enum)]
    pub category: Option<TemplateCategory>,
}

#[derive(Args, Debug)]
pub struct TemplateShowArgs {
    /// Template id or name
    pub template: String,
}

#[derive(Args, Debug)]
pub struct TemplateRunArgs {
    /// Template id or name
    pub template: String,

    /// Value for every placeholder slot
    #[arg(long, conflicts_with_all = ["company", "school"])]
    pub value: Option<String>,

    /// Value for the [COMPANY] slot
    #[arg(long)]
    pub company: Option<String>,

    /// Value for the [YOUR_SCHOOL] slot
    #[arg(long)]
    pub school: Option<String>,

    /// How recently the page was indexed
    #[arg(long, value_enum, default_value_t = Posted::Anytime)]
    pub posted: Posted,

    #[command(flatten)]
    pub pages: PageArgs,

    #[command(flatten)]
    pub options: SearchOptions,
}

impl TemplateRunArgs {
    pub fn placeholders(&self) -> Placeholders {
        match &self.value {
            Some(value) => Placeholders::uniform(value.clone()),
            None => Placeholders {
                company: self.company.clone(),
                school: self.school.clone(),
            },
        }
    }
}

pub fn run(ctx: &AppContext, args: &TemplateArgs) -> Result<()> {
    match &args.command {
        TemplateCommand::List(list) => run_list(ctx, list),
        TemplateCommand::Show(show) => run_show(ctx, show),
        TemplateCommand::Run(run) => run_template(ctx, run),
    }
}

fn lookup(id: &str) -> Result<&'static SearchTemplate> {
    find_template(id).ok_or_else(|| XrayError::NotFound(format!("template not found: {id}")))
}

fn run_list(ctx: &AppContext, args: &TemplateListArgs) -> Result<()> {
    let templates: Vec<&SearchTemplate> = match args.category {
        Some(category) => templates_in(category).collect(),
        None => list_templates().iter().collect(),
    };

    if ctx.robot_mode {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "count": templates.len(),
            "templates": templates,
        }));
    }

    let categories = [
        TemplateCategory::Jobs,
        TemplateCategory::Linkedin,
        TemplateCategory::Research,
    ];
    let mut layout = HumanLayout::new();
    for category in categories {
        let in_category: Vec<&&SearchTemplate> = templates
            .iter()
            .filter(|template| template.category == category)
            .collect();
        if in_category.is_empty() {
            continue;
        }
        layout.section(category.label());
        for template in in_category {
            layout.push_line(format!(
                "  {:<18} {}",
                template.id.cyan(),
                template.name
            ));
        }
        layout.blank();
    }
    emit_human(layout);
    Ok(())
}

fn run_show(ctx: &AppContext, args: &TemplateShowArgs) -> Result<()> {
    let template = lookup(&args.template)?;

    if ctx.robot_mode {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "template": template,
            "placeholders": template.placeholders(),
        }));
    }

    let mut layout = HumanLayout::new();
    layout
        .title(template.name)
        .kv("Id", template.id)
        .kv("Category", template.category.label())
        .kv("Description", template.description)
        .blank()
        .push_line(template.query);
    let placeholders = template.placeholders();
    if !placeholders.is_empty() {
        layout.blank().section("Placeholders");
        for token in placeholders {
            layout.bullet(token);
        }
    }
    emit_human(layout);
    Ok(())
}

fn run_template(ctx: &AppContext, args: &TemplateRunArgs) -> Result<()> {
    let template = lookup(&args.template)?;
    let rendered = render_template(template, &args.placeholders());

    // Unfilled slots still run, matching looser than intended.
    let warnings = rendered
        .unresolved
        .iter()
        .map(|token| format!("placeholder {token} left unfilled; pass --value, --company or --school"))
        .collect();

    let spec = args
        .pages
        .spec(&ctx.config.search)
        .with_date_restrict(args.posted.restrict());
    run_search(
        ctx,
        rendered.query,
        SearchMode::Template,
        &spec,
        &args.options,
        warnings,
    )
}
