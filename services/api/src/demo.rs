use crate::infra::{load_catalog, VerdictFilter};
use citizen_services::catalog::{InMemoryCatalog, RosterImporter};
use citizen_services::config::CatalogConfig;
use citizen_services::eligibility::{
    EligibilityReport, EligibilityService, EligibilityVerdict, SchemeId, User, UserId,
};
use citizen_services::error::AppError;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

type CatalogService = EligibilityService<InMemoryCatalog, InMemoryCatalog>;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// JSON scheme catalog replacing the seeded schemes
    #[arg(long)]
    pub(crate) schemes: Option<PathBuf>,
    /// Print the per-criterion breakdown for every verdict
    #[arg(long)]
    pub(crate) breakdown: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Citizen identifier, e.g. user-001
    #[arg(long)]
    pub(crate) user: String,
    /// Scheme identifier, e.g. pm-kisan
    #[arg(long)]
    pub(crate) scheme: String,
    /// JSON scheme catalog replacing the seeded schemes
    #[arg(long)]
    pub(crate) schemes: Option<PathBuf>,
    /// Emit the verdict as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Citizen identifier, e.g. user-001
    #[arg(long)]
    pub(crate) user: String,
    /// Restrict the listing to eligible or ineligible schemes
    #[arg(long, value_enum, default_value_t)]
    pub(crate) filter: VerdictFilter,
    /// JSON scheme catalog replacing the seeded schemes
    #[arg(long)]
    pub(crate) schemes: Option<PathBuf>,
    /// Emit the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RosterArgs {
    /// CSV export with id,name,phone,age,gender,occupation,annual_income,state
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// JSON scheme catalog replacing the seeded schemes
    #[arg(long)]
    pub(crate) schemes: Option<PathBuf>,
    /// Emit the summary as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

/// One line of the roster summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RosterEntry {
    pub(crate) user_id: UserId,
    pub(crate) name: String,
    pub(crate) evaluated: usize,
    pub(crate) eligible_count: usize,
    pub(crate) best_match: Option<SchemeId>,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        user,
        scheme,
        schemes,
        json,
    } = args;

    let (service, catalog) = catalog_service(schemes)?;
    let verdict = service.check(&UserId(user), &SchemeId(scheme))?;
    if json {
        return print_json(&verdict);
    }

    println!(
        "{} -> {}",
        verdict.scheme_id,
        scheme_name(&catalog, &verdict.scheme_id)
    );
    render_verdict(&catalog, &verdict, true);
    Ok(())
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        user,
        filter,
        schemes,
        json,
    } = args;

    let (service, catalog) = catalog_service(schemes)?;
    let user_id = UserId(user);
    let report = match filter {
        VerdictFilter::All => service.ranked(&user_id)?,
        VerdictFilter::Eligible => service.eligible(&user_id)?,
        VerdictFilter::Ineligible => service.ineligible(&user_id)?,
    };
    if json {
        return print_json(&report);
    }

    let citizen = service.citizen(&user_id)?;
    render_report(&catalog, &citizen, &report, false);
    Ok(())
}

pub(crate) fn run_roster(args: RosterArgs) -> Result<(), AppError> {
    let RosterArgs { csv, schemes, json } = args;

    let citizens = RosterImporter::from_path(&csv)?;
    let (service, _) = catalog_service(schemes)?;
    let entries = summarize_roster(&service, &citizens)?;
    if json {
        return print_json(&entries);
    }

    println!("Roster {} ({} citizens)", csv.display(), entries.len());
    for entry in &entries {
        let best = entry
            .best_match
            .as_ref()
            .map(|id| id.0.as_str())
            .unwrap_or("none");
        println!(
            "- {} ({}): {} of {} schemes eligible | best match: {}",
            entry.name, entry.user_id, entry.eligible_count, entry.evaluated, best
        );
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { schemes, breakdown } = args;

    let (service, catalog) = catalog_service(schemes)?;
    println!("Welfare scheme eligibility demo");
    println!(
        "- {} citizens | {} active schemes",
        catalog.users().len(),
        service.schemes(None)?.len()
    );

    for citizen in catalog.users() {
        println!();
        let ranked = service.ranked(&citizen.id)?;
        render_report(&catalog, citizen, &ranked, breakdown);

        let near_misses = service.ineligible(&citizen.id)?;
        if let Some(closest) = near_misses.verdicts.first() {
            println!(
                "  Closest miss: {} at {:.0}% ({})",
                scheme_name(&catalog, &closest.scheme_id),
                closest.eligibility_score,
                closest.missing_criteria.join("; ")
            );
        }

        let eligible = service.eligible(&citizen.id)?;
        match eligible.verdicts.first() {
            Some(best) => println!(
                "  Best match: {} ({})",
                scheme_name(&catalog, &best.scheme_id),
                best.summary()
            ),
            None => println!("  Best match: none in the active catalog"),
        }
    }

    Ok(())
}

pub(crate) fn summarize_roster(
    service: &CatalogService,
    citizens: &[User],
) -> Result<Vec<RosterEntry>, AppError> {
    citizens
        .iter()
        .map(|citizen| -> Result<RosterEntry, AppError> {
            let report = service.preview(citizen)?;
            let best_match = report
                .verdicts
                .iter()
                .find(|verdict| verdict.is_eligible)
                .map(|verdict| verdict.scheme_id.clone());
            Ok(RosterEntry {
                user_id: citizen.id.clone(),
                name: citizen.name.clone(),
                evaluated: report.evaluated,
                eligible_count: report.eligible_count,
                best_match,
            })
        })
        .collect()
}

fn catalog_service(
    schemes_path: Option<PathBuf>,
) -> Result<(CatalogService, Arc<InMemoryCatalog>), AppError> {
    let catalog = Arc::new(load_catalog(&CatalogConfig { schemes_path })?);
    let service = EligibilityService::new(catalog.clone(), catalog.clone());
    Ok((service, catalog))
}

fn render_report(
    catalog: &InMemoryCatalog,
    citizen: &User,
    report: &EligibilityReport,
    breakdown: bool,
) {
    println!(
        "{} ({}) | age {} | {} | {} | income {} | {}",
        citizen.name,
        citizen.id,
        citizen.age,
        citizen.gender.label(),
        citizen.occupation.label(),
        citizen.annual_income,
        citizen.state
    );
    println!(
        "  {} of {} active schemes eligible",
        report.eligible_count, report.evaluated
    );
    for verdict in &report.verdicts {
        render_verdict(catalog, verdict, breakdown);
    }
}

fn render_verdict(catalog: &InMemoryCatalog, verdict: &EligibilityVerdict, breakdown: bool) {
    let marker = if verdict.is_eligible { "+" } else { "-" };
    println!(
        "  {} {:<45} {:>5.1}%",
        marker,
        scheme_name(catalog, &verdict.scheme_id),
        verdict.eligibility_score
    );

    if breakdown {
        for (category, outcome) in &verdict.eligibility_breakdown {
            println!(
                "      {:?}: {:?} - {}",
                category, outcome.status, outcome.message
            );
        }
    }
    for warning in &verdict.reasons.warnings {
        println!("      note: {}", warning);
    }
    for recommendation in &verdict.recommendations {
        println!("      tip: {}", recommendation);
    }
}

fn scheme_name<'a>(catalog: &'a InMemoryCatalog, scheme_id: &'a SchemeId) -> &'a str {
    catalog
        .schemes()
        .iter()
        .find(|scheme| &scheme.id == scheme_id)
        .map(|scheme| scheme.name.as_str())
        .unwrap_or(scheme_id.0.as_str())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{json}");
    Ok(())
}
