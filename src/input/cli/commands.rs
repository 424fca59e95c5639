use crate::config::PortfolioConfig;
use crate::controllers::tour::ports::TourReportPresenterPort;
use crate::controllers::tour::{DEFAULT_TOUR, TourRunner, parse_steps};
use crate::core::content::{ProjectFilter, SkillFilter, all_technologies};
use crate::input::cli::{Cli, Commands, ProjectsArgs, SkillsArgs, TourArgs};
use crate::presenters::console::{
    JsonReportPresenter, TextReportPresenter, write_projects, write_sections, write_skills,
};
use anyhow::{Context, Result};
use std::io::Write;

pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let config = PortfolioConfig::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Tour(args) => tour(&config, args, out),
        Commands::Sections => sections(&config, out),
        Commands::Projects(args) => projects(&config, args, out),
        Commands::Skills(args) => skills(&config, args, out),
    }
}

fn tour(config: &PortfolioConfig, args: &TourArgs, out: &mut dyn Write) -> Result<()> {
    let steps = if args.steps.is_empty() {
        parse_steps(DEFAULT_TOUR)?
    } else {
        args.steps.clone()
    };

    let policy = args
        .passive_scroll
        .map_or(config.navigation.passive_scroll, Into::into);

    let runner = TourRunner::new(
        config.registry()?,
        config.navigation.timings,
        policy,
        config.static_page(),
    )
    .context("invalid navigation settings")?;

    let report = runner.run(&steps)?;

    if args.json {
        JsonReportPresenter::new().present(&report, out)?;
    } else {
        TextReportPresenter::new().present(&report, out)?;
    }

    Ok(())
}

fn sections(config: &PortfolioConfig, out: &mut dyn Write) -> Result<()> {
    write_sections(out, &config.registry()?, &config.static_page())?;

    Ok(())
}

fn projects(config: &PortfolioConfig, args: &ProjectsArgs, out: &mut dyn Write) -> Result<()> {
    let projects = &config.content.projects;

    if args.technologies_only {
        for technology in all_technologies(projects) {
            writeln!(out, "{technology}")?;
        }
        return Ok(());
    }

    let mut filter = ProjectFilter::default();
    if let Some(search) = &args.search {
        filter.set_search(search.as_str());
    }
    for technology in &args.technologies {
        if !filter.is_selected(technology) {
            filter.toggle_technology(technology);
        }
    }

    write_projects(out, projects, &filter)?;

    Ok(())
}

fn skills(config: &PortfolioConfig, args: &SkillsArgs, out: &mut dyn Write) -> Result<()> {
    let filter = args.category.map_or(SkillFilter::All, SkillFilter::Category);

    write_skills(out, &config.content.skills, filter)?;

    Ok(())
}
