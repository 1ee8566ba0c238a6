//! The end-to-end creation flow — `vibeforge create`.
//!
//! Drives the flow controller through its phases: capture the idea,
//! run the generation round behind a spinner, then walk the user
//! through variation review, theming, icon choice, and naming.

use anyhow::Result;
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use vibeforge::flow::{DEFAULT_APP_NAME, FlowController};
use vibeforge::provider::GeminiProvider;
use vibeforge::store::JsonFileStore;
use vibeforge::theme::ThemeCatalog;
use vibeforge::transcript::TypedTranscript;
use vibeforge::ui;

use crate::Cli;

enum ReviewAction {
    Continue,
    ChangeTheme,
    Cancel,
}

pub async fn cmd_create(cli: &Cli, idea: Option<&str>) -> Result<()> {
    let config = super::load_config(cli)?;
    let api_key = config.require_api_key()?.to_string();
    let provider = GeminiProvider::new(
        &config.provider.endpoint,
        &api_key,
        config.request_timeout(),
    )?;
    let store = JsonFileStore::open(&config.store_path())?;

    let mut flow = FlowController::new(
        provider,
        TypedTranscript::new(),
        store,
        ThemeCatalog::default(),
    );

    let idea = match idea {
        Some(idea) => idea.to_string(),
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{}Describe your app", ui::icons::MIC))
            .interact_text()?,
    };

    flow.start_listening().await?;
    flow.transcript_mut().set_text(&idea);
    if !flow.stop_listening()? {
        ui::print_warning("Nothing to build from an empty idea.");
        return Ok(());
    }

    let spinner = ui::round_spinner(&idea);
    flow.build().await?;
    spinner.finish_and_clear();

    if let Some(notice) = flow.notice() {
        ui::print_warning(notice);
    }

    loop {
        let variations: Vec<String> = flow
            .candidates()
            .iter()
            .map(|c| format!("{} ({})", c.name, c.theme.name))
            .collect();
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Pick a variation")
            .items(&variations)
            .default(flow.session().selected_index)
            .interact()?;
        flow.select_variation(picked)?;

        match review_action()? {
            ReviewAction::Continue => break,
            ReviewAction::ChangeTheme => {
                flow.customize()?;
                let themes = flow.catalog().themes().to_vec();
                let names: Vec<&str> = themes.iter().map(|t| t.name.as_str()).collect();
                let choice = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("{}Pick a theme", ui::icons::PALETTE))
                    .items(&names)
                    .default(0)
                    .interact()?;
                flow.apply_theme(themes[choice].clone())?;
                flow.back_to_review()?;
            }
            ReviewAction::Cancel => {
                flow.reset();
                println!("{}", style("Cancelled; nothing was saved.").dim());
                return Ok(());
            }
        }
    }

    flow.confirm_selection()?;

    let icons = flow.icon_candidates();
    let labels: Vec<String> = icons
        .iter()
        .map(|icon| format!("{} {}", ui::icons::symbol_glyph(&icon.symbol), icon.symbol))
        .collect();
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Pick an icon")
        .items(&labels)
        .default(0)
        .interact()?;
    flow.select_icon(icons[picked].clone())?;

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Name your app")
        .default(DEFAULT_APP_NAME.to_string())
        .interact_text()?;
    flow.set_name(&name)?;

    let artifact = flow.save()?;
    if let Some(notice) = flow.notice() {
        ui::print_warning(notice);
    }
    ui::print_success(&format!("Saved \"{}\"", artifact.name));
    println!(
        "  {} vibeforge export {}",
        style("Open it in a browser with:").dim(),
        artifact.id
    );
    flow.reset();

    Ok(())
}

fn review_action() -> Result<ReviewAction> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What next?")
        .items(&["Continue with this variation", "Change theme", "Cancel"])
        .default(0)
        .interact()?;
    Ok(match choice {
        0 => ReviewAction::Continue,
        1 => ReviewAction::ChangeTheme,
        _ => ReviewAction::Cancel,
    })
}
