//! Interactive session
//!
//! Walks the user through one day: add new clothes, remove old ones, report
//! laundry, then pick an outfit. Both wardrobes are saved at the end, and only
//! if the whole session completes.

use std::path::PathBuf;

use colored::Colorize;
use rand::Rng;
use tracing::debug;

use outfit_picker_core::{
    pick_outfit, reconcile, return_outfit, storage, LaundryReport, Result, StillDirtyPolicy,
    Wardrobe, WardrobeError,
};

use crate::display::{print_outfit, print_wardrobe};
use crate::prompt::{capture_item, Prompter};

pub struct SessionPaths {
    pub clean: PathBuf,
    pub dirty: PathBuf,
}

#[derive(Debug, Default)]
pub struct SessionSummary {
    pub added: usize,
    pub removed: usize,
    pub laundry: Option<LaundryReport>,
    /// Outfit the user kept, if any
    pub outfit: Option<Wardrobe>,
}

pub fn run<P, R>(
    prompter: &mut P,
    rng: &mut R,
    paths: &SessionPaths,
    policy: StillDirtyPolicy,
) -> Result<SessionSummary>
where
    P: Prompter + ?Sized,
    R: Rng + ?Sized,
{
    let mut clean = storage::load(&paths.clean)?;
    let mut dirty = storage::load(&paths.dirty)?;
    let mut summary = SessionSummary::default();

    println!();
    println!("{}", "Welcome to the Outfit Picker!".bold());
    print_wardrobe("Clean wardrobe", &clean);

    summary.added = add_clothes(prompter, &mut clean)?;
    summary.removed = remove_clothes(prompter, &mut clean)?;

    if prompter.confirm("Did you do laundry since last time?")? {
        summary.laundry = Some(do_laundry(prompter, &mut dirty, &mut clean, policy)?);
    }

    summary.outfit = choose_outfit(prompter, rng, &mut clean, &mut dirty)?;

    storage::save(&clean, &paths.clean)?;
    storage::save(&dirty, &paths.dirty)?;
    println!("{} {}", "Saved:".green(), paths.clean.display());
    println!("{} {}", "Saved:".green(), paths.dirty.display());

    Ok(summary)
}

fn add_clothes<P: Prompter + ?Sized>(prompter: &mut P, clean: &mut Wardrobe) -> Result<usize> {
    let mut added = 0;
    let mut question = "Do you have any clothes to add?";
    while prompter.confirm(question)? {
        let item = capture_item(prompter)?;
        println!("{} {}", "Added:".green(), item);
        clean.add(item);
        added += 1;
        question = "Do you want to add more clothes?";
    }
    if added > 0 {
        print_wardrobe("Clean wardrobe", clean);
    }
    Ok(added)
}

fn remove_clothes<P: Prompter + ?Sized>(prompter: &mut P, clean: &mut Wardrobe) -> Result<usize> {
    let mut removed = 0;
    let mut question = "Do you have any clothes to remove?";
    while prompter.confirm(question)? {
        let item = capture_item(prompter)?;
        match clean.remove(&item) {
            0 => println!("{} {}", "Not in wardrobe:".yellow(), item),
            n => {
                println!("{} {} (x{})", "Removed:".green(), item, n);
                removed += n;
            }
        }
        question = "Do you want to remove more clothes?";
    }
    if removed > 0 {
        print_wardrobe("Clean wardrobe", clean);
    }
    Ok(removed)
}

fn do_laundry<P: Prompter + ?Sized>(
    prompter: &mut P,
    dirty: &mut Wardrobe,
    clean: &mut Wardrobe,
    policy: StillDirtyPolicy,
) -> Result<LaundryReport> {
    if dirty.is_empty() {
        println!("Your laundry basket is already empty.");
        return Ok(LaundryReport::default());
    }

    print_wardrobe("Dirty laundry", dirty);

    let mut still_dirty = Wardrobe::new();
    let mut question = "Is anything still dirty?";
    while prompter.confirm(question)? {
        still_dirty.add(capture_item(prompter)?);
        question = "Is anything else still dirty?";
    }

    let report = reconcile(dirty, clean, &still_dirty, policy);
    print_laundry_report(&report);
    Ok(report)
}

pub fn print_laundry_report(report: &LaundryReport) {
    println!();
    println!("Laundry:");
    println!("  Washed: {}", report.washed.len());
    println!("  Still dirty: {}", report.kept);
    if !report.is_clean_run() {
        println!();
        println!(
            "{} {} item(s) added to the hamper, {} item(s) dropped from it.",
            "WARNING:".yellow().bold(),
            report.injected,
            report.dropped
        );
        println!("         Use 'outfit-picker config set laundry.policy matched' to keep the hamper exact.");
    }
}

/// Offer outfits until the user keeps one or stops asking
fn choose_outfit<P, R>(
    prompter: &mut P,
    rng: &mut R,
    clean: &mut Wardrobe,
    dirty: &mut Wardrobe,
) -> Result<Option<Wardrobe>>
where
    P: Prompter + ?Sized,
    R: Rng + ?Sized,
{
    let mut current: Option<Wardrobe> = None;
    let mut question = "Do you want an outfit suggestion?";

    while prompter.confirm(question)? {
        if let Some(rejected) = current.take() {
            debug!(items = rejected.len(), "returning rejected outfit");
            return_outfit(clean, dirty, &rejected);
        }

        let jacket = prompter.confirm("Do you want a jacket?")?;
        match pick_outfit(clean, dirty, jacket, rng) {
            Ok(outfit) => {
                print_outfit(&outfit);
                current = Some(outfit);
                question = "Do you want a different outfit?";
            }
            Err(WardrobeError::EmptyCategory { category }) => {
                println!(
                    "{} You have no clean {} to choose from.",
                    "Sorry:".yellow().bold(),
                    category
                );
                question = "Do you want to try again?";
            }
            Err(e) => return Err(e),
        }
    }

    Ok(current)
}
