use crate::core::content::{Project, ProjectFilter, Skill, SkillCategory, SkillFilter};
use crate::core::sections::SectionRegistry;
use crate::presenters::headless::StaticPage;
use std::io::{self, Write};

const LEVEL_BAR_WIDTH: usize = 8;

/// Sections in page order with their headless offsets.
pub fn write_sections(
    out: &mut dyn Write,
    registry: &SectionRegistry,
    page: &StaticPage,
) -> io::Result<()> {
    for section in registry {
        match page.region_of(section.id().as_str()) {
            Some(region) => writeln!(
                out,
                "{:>2}  {:<12} {:<12} top={:<8} height={}",
                section.ordinal(),
                section.id(),
                section.label(),
                region.top,
                region.height
            )?,
            None => writeln!(
                out,
                "{:>2}  {:<12} {:<12} (not mounted)",
                section.ordinal(),
                section.id(),
                section.label()
            )?,
        }
    }

    Ok(())
}

pub fn write_projects(
    out: &mut dyn Write,
    projects: &[Project],
    filter: &ProjectFilter,
) -> io::Result<()> {
    let shown: Vec<&Project> = filter.apply(projects).collect();

    if filter.is_active() {
        writeln!(out, "Showing {} of {} projects", shown.len(), projects.len())?;
    }

    if shown.is_empty() {
        writeln!(out, "No projects match the current filters.")?;
        return Ok(());
    }

    for project in shown {
        writeln!(out, "{}", project.title)?;
        writeln!(out, "    {}", project.description)?;
        writeln!(out, "    [{}]", project.technologies.join(", "))?;

        if let Some(url) = &project.live_url {
            writeln!(out, "    live: {url}")?;
        }
        if let Some(url) = &project.code_url {
            writeln!(out, "    code: {url}")?;
        }
    }

    Ok(())
}

/// Skills grouped by category, with a level bar each.
pub fn write_skills(out: &mut dyn Write, skills: &[Skill], filter: SkillFilter) -> io::Result<()> {
    for category in SkillCategory::ALL {
        let mut in_category = filter
            .apply(skills)
            .filter(|skill| skill.category == *category)
            .peekable();

        if in_category.peek().is_none() {
            continue;
        }

        writeln!(out, "{category}")?;
        for skill in in_category {
            writeln!(
                out,
                "    {:<16} {} {:?}",
                skill.name,
                level_bar(skill.level.fraction()),
                skill.level
            )?;
        }
    }

    Ok(())
}

fn level_bar(fraction: f32) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * LEVEL_BAR_WIDTH as f32).round() as usize;

    format!("{}{}", "#".repeat(filled), ".".repeat(LEVEL_BAR_WIDTH - filled))
}
