use chrono::{Local, NaiveDate};
use color_eyre::eyre::{WrapErr, eyre};
use database::DatabaseLoader;
use engine::utils::TimeEstimation;
use engine::{
    LeagueTable, RecordStore, ViewState, build_month_grid, current_jornada, jornada_days,
    team_form, upcoming_matches,
};
use env_logger::Env;
use log::{info, warn};
use std::env;

const FORM_LENGTH: usize = 5;
const UPCOMING_DAYS: i64 = 7;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let store = match env::var("LIGA_MX_DATASET") {
        Ok(path) => DatabaseLoader::from_path(path),
        Err(_) => DatabaseLoader::embedded(),
    };

    let today = match env::var("LIGA_MX_TODAY") {
        Ok(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .wrap_err_with(|| format!("LIGA_MX_TODAY '{}' is not YYYY-MM-DD", raw))?,
        Err(_) => Local::now().date_naive(),
    };

    let (loaded, estimated) = TimeEstimation::estimate(|| store.load());
    let loaded = loaded.wrap_err("failed to load season dataset")?;

    info!("dataset loaded: {} ms", estimated);

    if !loaded.skipped.is_empty() {
        warn!("{} records skipped while loading", loaded.skipped.len());
    }

    let dataset = loaded.dataset;
    let settings = &dataset.settings;

    let table = LeagueTable::new(&dataset.standings, &settings.zones);
    let now = today
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| eyre!("invalid date {}", today))?;

    for row in table.rows() {
        let name = dataset
            .team(&row.standing.team_id)
            .map(|team| team.display_name())
            .unwrap_or(row.standing.team_id.as_str());

        let form: String = team_form(&dataset.matches, &row.standing.team_id, now, FORM_LENGTH)
            .iter()
            .map(|result| result.letter())
            .collect();

        info!(
            "{:>2}. {:<22} {:>2} pts  GD {:>+3}  GF {:>2}  {:<5} {:?}",
            row.position,
            name,
            row.standing.points,
            row.standing.goal_difference(),
            row.standing.goals_for,
            form,
            row.zone
        );
    }

    let view = ViewState::new(current_jornada(&dataset.matches, today, settings), today);

    info!("jornada {}", view.jornada);
    for day in jornada_days(&dataset.matches, view.jornada, settings) {
        let label = day
            .date
            .map(|date| date.format("%d.%m.%Y").to_string())
            .unwrap_or_else(|| String::from("por definir"));

        for item in day.matches {
            info!("  {}  {} vs {}", label, item.home_team_id, item.away_team_id);
        }
    }

    let upcoming = upcoming_matches(&dataset.matches, now, UPCOMING_DAYS);
    info!("{} matches in the next {} days", upcoming.len(), UPCOMING_DAYS);

    let grid = build_month_grid(view.year, view.month, &dataset.matches, today)?;
    let match_days = grid
        .cells
        .iter()
        .filter(|cell| !cell.other_month && !cell.matches.is_empty())
        .count();

    info!(
        "{}-{:02}: {} match days, {} matches without a date",
        grid.year,
        grid.month,
        match_days,
        grid.skipped.len()
    );

    Ok(())
}
